use std::sync::Arc;
use chrono::NaiveDate;
use crate::borrowers::factory::create_borrower_service;
use crate::core::clock::{FixedClock, SystemClock};
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::inventory::factory::create_inventory_service;
use crate::loans::domain::service::LoanServiceImpl;
use crate::loans::domain::LoanService;
use crate::loans::repository::kv_loan_repository::{KvLoanRepository, LOANS_COLLECTION};
use crate::loans::repository::LoanRepository;
use crate::store::CollectionStore;

pub fn create_loan_repository(store: &Arc<dyn CollectionStore>) -> Box<dyn LoanRepository> {
    Box::new(KvLoanRepository::new(store.clone(), LOANS_COLLECTION))
}

pub fn create_loan_service(config: &Configuration, store: &Arc<dyn CollectionStore>) -> Box<dyn LoanService> {
    let loan_repo = create_loan_repository(store);
    let borrower_svc = create_borrower_service(store);
    let inventory_svc = create_inventory_service(store);
    Box::new(LoanServiceImpl::new(config, loan_repo, borrower_svc, inventory_svc,
                                  create_publisher(), Box::new(SystemClock)))
}

// pins the calendar, for tests and report cutoffs
pub fn create_loan_service_with_clock(config: &Configuration, store: &Arc<dyn CollectionStore>,
                                      today: NaiveDate) -> Box<dyn LoanService> {
    let loan_repo = create_loan_repository(store);
    let borrower_svc = create_borrower_service(store);
    let inventory_svc = create_inventory_service(store);
    Box::new(LoanServiceImpl::new(config, loan_repo, borrower_svc, inventory_svc,
                                  create_publisher(), Box::new(FixedClock::new(today))))
}
