pub mod kv_borrower_repository;

use crate::borrowers::domain::model::BorrowerEntity;
use crate::core::repository::Repository;

pub trait BorrowerRepository: Repository<BorrowerEntity> {}
