use chrono::NaiveDate;
use crate::core::library::LoanStatus;
use crate::loans::domain::model::LoanEntity;

/// Derives the status shown to users from the persisted status and the due
/// date. A persisted `Returned` is authoritative and final. Anything else is
/// overdue once the due date is strictly before today (date-only comparison,
/// a loan due today is not yet overdue); otherwise the persisted status
/// passes through unchanged, including a manually edited `Overdue` whose due
/// date lies in the future.
///
/// Called fresh on every read by both display and filtering; the result is
/// never cached or written back, so a persisted `Active` row starts
/// rendering as `Overdue` the day after its due date without any write.
pub fn effective_status(loan: &LoanEntity, today: NaiveDate) -> LoanStatus {
    if loan.status == LoanStatus::Returned {
        return LoanStatus::Returned;
    }
    if loan.due_date < today {
        return LoanStatus::Overdue;
    }
    loan.status
}
