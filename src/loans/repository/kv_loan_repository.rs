use std::sync::Arc;
use async_trait::async_trait;
use crate::core::domain::Identifiable;
use crate::core::library::{CirculationError, CirculationResult};
use crate::core::repository::Repository;
use crate::loans::domain::model::LoanEntity;
use crate::loans::repository::LoanRepository;
use crate::store::{load_collection, save_collection, CollectionStore};

pub(crate) const LOANS_COLLECTION: &str = "loans";

// Records keep insertion order inside the collection document, so all()
// yields them oldest first; each call re-reads the backing store.
pub(crate) struct KvLoanRepository {
    store: Arc<dyn CollectionStore>,
    collection: String,
}

impl KvLoanRepository {
    pub(crate) fn new(store: Arc<dyn CollectionStore>, collection: &str) -> Self {
        Self {
            store,
            collection: collection.to_string(),
        }
    }
}

#[async_trait]
impl Repository<LoanEntity> for KvLoanRepository {
    async fn create(&self, entity: &LoanEntity) -> CirculationResult<usize> {
        let mut loans: Vec<LoanEntity> = load_collection(self.store.as_ref(), self.collection.as_str()).await?;
        if loans.iter().any(|l| l.id() == entity.id()) {
            return Err(CirculationError::duplicate_key(
                format!("loan {} already exists", entity.id).as_str()));
        }
        loans.push(entity.clone());
        save_collection(self.store.as_ref(), self.collection.as_str(), &loans).await?;
        Ok(1)
    }

    async fn update(&self, entity: &LoanEntity) -> CirculationResult<usize> {
        let mut loans: Vec<LoanEntity> = load_collection(self.store.as_ref(), self.collection.as_str()).await?;
        let pos = loans.iter().position(|l| l.id() == entity.id())
            .ok_or_else(|| CirculationError::not_found(
                format!("loan {} not found", entity.id).as_str()))?;
        loans[pos] = entity.clone();
        save_collection(self.store.as_ref(), self.collection.as_str(), &loans).await?;
        Ok(1)
    }

    async fn get(&self, id: &str) -> CirculationResult<LoanEntity> {
        let loans: Vec<LoanEntity> = load_collection(self.store.as_ref(), self.collection.as_str()).await?;
        loans.into_iter().find(|l| l.id() == id)
            .ok_or_else(|| CirculationError::not_found(
                format!("loan {} not found", id).as_str()))
    }

    async fn delete(&self, id: &str) -> CirculationResult<LoanEntity> {
        let mut loans: Vec<LoanEntity> = load_collection(self.store.as_ref(), self.collection.as_str()).await?;
        let pos = loans.iter().position(|l| l.id() == id)
            .ok_or_else(|| CirculationError::not_found(
                format!("loan {} not found", id).as_str()))?;
        let removed = loans.remove(pos);
        save_collection(self.store.as_ref(), self.collection.as_str(), &loans).await?;
        Ok(removed)
    }

    async fn all(&self) -> CirculationResult<Vec<LoanEntity>> {
        load_collection(self.store.as_ref(), self.collection.as_str()).await
    }
}

impl LoanRepository for KvLoanRepository {}
