use std::sync::Arc;
use chrono::NaiveDate;
use crate::borrowers::factory::create_borrower_service;
use crate::core::clock::{FixedClock, SystemClock};
use crate::core::domain::Configuration;
use crate::loans::factory::create_loan_repository;
use crate::notices::domain::service::NoticeServiceImpl;
use crate::notices::domain::NoticeService;
use crate::store::CollectionStore;

pub fn create_notice_service(config: &Configuration, store: &Arc<dyn CollectionStore>) -> Box<dyn NoticeService> {
    let loan_repo = create_loan_repository(store);
    let borrower_svc = create_borrower_service(store);
    Box::new(NoticeServiceImpl::new(config, loan_repo, borrower_svc, Box::new(SystemClock)))
}

pub fn create_notice_service_with_clock(config: &Configuration, store: &Arc<dyn CollectionStore>,
                                        today: NaiveDate) -> Box<dyn NoticeService> {
    let loan_repo = create_loan_repository(store);
    let borrower_svc = create_borrower_service(store);
    Box::new(NoticeServiceImpl::new(config, loan_repo, borrower_svc,
                                    Box::new(FixedClock::new(today))))
}
