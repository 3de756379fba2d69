pub mod kv_loan_repository;

use crate::core::repository::Repository;
use crate::loans::domain::model::LoanEntity;

pub trait LoanRepository: Repository<LoanEntity> {}
