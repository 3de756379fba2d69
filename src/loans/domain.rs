use async_trait::async_trait;
use chrono::NaiveDate;
use crate::core::library::{CirculationResult, LoanStatus, PaginatedResult};
use crate::loans::domain::query::LoanQuery;
use crate::loans::dto::LoanDto;

pub mod audit;
pub mod classifier;
pub mod model;
pub mod query;
pub mod service;

// LoanService orchestrates the loan records and the inventory ledger. Each
// operation is one logical unit of work issuing two physically separate
// collection writes; there is no multi-record transaction underneath.
#[async_trait]
pub trait LoanService: Sync + Send {
    // registers a loan for a borrower and an item with available copies,
    // consuming one copy
    async fn create_loan(&self, user_id: &str, item_id: &str,
                         loan_date: NaiveDate, due_date: NaiveDate) -> CirculationResult<LoanDto>;

    // marks a loan returned and restores the copy; fails with
    // AlreadyReturned on a second attempt so the ledger is never credited
    // twice
    async fn mark_returned(&self, loan_id: &str) -> CirculationResult<LoanDto>;

    // pushes the due date out from today and forces status back to Active;
    // permitted while the loan displays as overdue, which is how overdue
    // state is cleared. No inventory effect.
    async fn renew(&self, loan_id: &str, days: Option<i64>) -> CirculationResult<LoanDto>;

    // administrative escape hatch: writes the date fields and status as
    // given, with no state-machine validation and no inventory side effect.
    // Callers presenting this to end users own the inventory-desync risk.
    async fn edit_fields(&self, loan_id: &str, loan_date: NaiveDate,
                         due_date: NaiveDate, status: LoanStatus) -> CirculationResult<LoanDto>;

    // removes the record, crediting the copy back unless the loan was
    // already returned
    async fn delete_loan(&self, loan_id: &str) -> CirculationResult<LoanDto>;

    async fn find_loan_by_id(&self, loan_id: &str) -> CirculationResult<LoanDto>;

    async fn query_loans(&self, query: &LoanQuery,
                         page: usize, page_size: usize) -> CirculationResult<PaginatedResult<LoanDto>>;
}
