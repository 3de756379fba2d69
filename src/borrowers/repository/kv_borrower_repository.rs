use std::sync::Arc;
use async_trait::async_trait;
use crate::borrowers::domain::model::BorrowerEntity;
use crate::borrowers::repository::BorrowerRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{CirculationError, CirculationResult};
use crate::core::repository::Repository;
use crate::store::{load_collection, save_collection, CollectionStore};

pub(crate) const BORROWERS_COLLECTION: &str = "users";

pub(crate) struct KvBorrowerRepository {
    store: Arc<dyn CollectionStore>,
    collection: String,
}

impl KvBorrowerRepository {
    pub(crate) fn new(store: Arc<dyn CollectionStore>, collection: &str) -> Self {
        Self {
            store,
            collection: collection.to_string(),
        }
    }
}

#[async_trait]
impl Repository<BorrowerEntity> for KvBorrowerRepository {
    async fn create(&self, entity: &BorrowerEntity) -> CirculationResult<usize> {
        let mut borrowers: Vec<BorrowerEntity> = load_collection(self.store.as_ref(), self.collection.as_str()).await?;
        if borrowers.iter().any(|b| b.id() == entity.id()) {
            return Err(CirculationError::duplicate_key(
                format!("borrower {} already exists", entity.id).as_str()));
        }
        borrowers.push(entity.clone());
        save_collection(self.store.as_ref(), self.collection.as_str(), &borrowers).await?;
        Ok(1)
    }

    async fn update(&self, entity: &BorrowerEntity) -> CirculationResult<usize> {
        let mut borrowers: Vec<BorrowerEntity> = load_collection(self.store.as_ref(), self.collection.as_str()).await?;
        let pos = borrowers.iter().position(|b| b.id() == entity.id())
            .ok_or_else(|| CirculationError::not_found(
                format!("borrower {} not found", entity.id).as_str()))?;
        borrowers[pos] = entity.clone();
        save_collection(self.store.as_ref(), self.collection.as_str(), &borrowers).await?;
        Ok(1)
    }

    async fn get(&self, id: &str) -> CirculationResult<BorrowerEntity> {
        let borrowers: Vec<BorrowerEntity> = load_collection(self.store.as_ref(), self.collection.as_str()).await?;
        borrowers.into_iter().find(|b| b.id() == id)
            .ok_or_else(|| CirculationError::not_found(
                format!("borrower {} not found", id).as_str()))
    }

    async fn delete(&self, id: &str) -> CirculationResult<BorrowerEntity> {
        let mut borrowers: Vec<BorrowerEntity> = load_collection(self.store.as_ref(), self.collection.as_str()).await?;
        let pos = borrowers.iter().position(|b| b.id() == id)
            .ok_or_else(|| CirculationError::not_found(
                format!("borrower {} not found", id).as_str()))?;
        let removed = borrowers.remove(pos);
        save_collection(self.store.as_ref(), self.collection.as_str(), &borrowers).await?;
        Ok(removed)
    }

    async fn all(&self) -> CirculationResult<Vec<BorrowerEntity>> {
        load_collection(self.store.as_ref(), self.collection.as_str()).await
    }
}

impl BorrowerRepository for KvBorrowerRepository {}
