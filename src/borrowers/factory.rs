use std::sync::Arc;
use crate::borrowers::domain::service::BorrowerServiceImpl;
use crate::borrowers::domain::BorrowerService;
use crate::borrowers::repository::kv_borrower_repository::{KvBorrowerRepository, BORROWERS_COLLECTION};
use crate::borrowers::repository::BorrowerRepository;
use crate::store::CollectionStore;

pub fn create_borrower_repository(store: &Arc<dyn CollectionStore>) -> Box<dyn BorrowerRepository> {
    Box::new(KvBorrowerRepository::new(store.clone(), BORROWERS_COLLECTION))
}

pub fn create_borrower_service(store: &Arc<dyn CollectionStore>) -> Box<dyn BorrowerService> {
    let borrower_repo = create_borrower_repository(store);
    Box::new(BorrowerServiceImpl::new(borrower_repo))
}
