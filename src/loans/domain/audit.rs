use crate::core::library::{CirculationError, CirculationResult, LoanStatus};
use crate::inventory::domain::model::ItemEntity;
use crate::loans::domain::model::LoanEntity;

// Advisory consistency checks over snapshots of both collections. The
// guarded lifecycle operations cannot break these on their own; edit_fields
// or direct store manipulation can, and these routines are how such drift is
// detected in tests and maintenance sweeps.

// available never goes negative, and a returned loan carries its return date
// while an open one does not
pub fn verify_consistency(items: &[ItemEntity], loans: &[LoanEntity]) -> CirculationResult<()> {
    for item in items {
        if item.available < 0 {
            return Err(CirculationError::inconsistent_state(
                format!("item {} has negative availability {}", item.id, item.available).as_str()));
        }
    }
    for loan in loans {
        let returned = loan.status == LoanStatus::Returned;
        if returned && loan.return_date.is_none() {
            return Err(CirculationError::inconsistent_state(
                format!("returned loan {} is missing its return date", loan.id).as_str()));
        }
        if !returned && loan.return_date.is_some() {
            return Err(CirculationError::inconsistent_state(
                format!("open loan {} carries a return date", loan.id).as_str()));
        }
    }
    Ok(())
}

// every open loan holds exactly one copy: available plus open loans for the
// item must equal the availability the item started with
pub fn verify_conservation(item: &ItemEntity, loans: &[LoanEntity],
                           initial_available: i64) -> CirculationResult<()> {
    let outstanding = loans.iter()
        .filter(|l| l.book_id == item.id && l.status != LoanStatus::Returned)
        .count() as i64;
    if item.available + outstanding != initial_available {
        return Err(CirculationError::inconsistent_state(
            format!("item {} availability {} with {} open loans does not conserve initial {}",
                    item.id, item.available, outstanding, initial_available).as_str()));
    }
    Ok(())
}
