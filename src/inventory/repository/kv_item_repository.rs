use std::sync::Arc;
use async_trait::async_trait;
use crate::core::domain::Identifiable;
use crate::core::library::{CirculationError, CirculationResult};
use crate::core::repository::Repository;
use crate::inventory::domain::model::ItemEntity;
use crate::inventory::repository::ItemRepository;
use crate::store::{load_collection, save_collection, CollectionStore};

pub(crate) const ITEMS_COLLECTION: &str = "books";

// Every mutation reads the whole collection and replaces it whole, the only
// contract the backing store offers.
pub(crate) struct KvItemRepository {
    store: Arc<dyn CollectionStore>,
    collection: String,
}

impl KvItemRepository {
    pub(crate) fn new(store: Arc<dyn CollectionStore>, collection: &str) -> Self {
        Self {
            store,
            collection: collection.to_string(),
        }
    }
}

#[async_trait]
impl Repository<ItemEntity> for KvItemRepository {
    async fn create(&self, entity: &ItemEntity) -> CirculationResult<usize> {
        let mut items: Vec<ItemEntity> = load_collection(self.store.as_ref(), self.collection.as_str()).await?;
        if items.iter().any(|i| i.id() == entity.id()) {
            return Err(CirculationError::duplicate_key(
                format!("item {} already exists", entity.id).as_str()));
        }
        items.push(entity.clone());
        save_collection(self.store.as_ref(), self.collection.as_str(), &items).await?;
        Ok(1)
    }

    async fn update(&self, entity: &ItemEntity) -> CirculationResult<usize> {
        let mut items: Vec<ItemEntity> = load_collection(self.store.as_ref(), self.collection.as_str()).await?;
        let pos = items.iter().position(|i| i.id() == entity.id())
            .ok_or_else(|| CirculationError::not_found(
                format!("item {} not found", entity.id).as_str()))?;
        items[pos] = entity.clone();
        save_collection(self.store.as_ref(), self.collection.as_str(), &items).await?;
        Ok(1)
    }

    async fn get(&self, id: &str) -> CirculationResult<ItemEntity> {
        let items: Vec<ItemEntity> = load_collection(self.store.as_ref(), self.collection.as_str()).await?;
        items.into_iter().find(|i| i.id() == id)
            .ok_or_else(|| CirculationError::not_found(
                format!("item {} not found", id).as_str()))
    }

    async fn delete(&self, id: &str) -> CirculationResult<ItemEntity> {
        let mut items: Vec<ItemEntity> = load_collection(self.store.as_ref(), self.collection.as_str()).await?;
        let pos = items.iter().position(|i| i.id() == id)
            .ok_or_else(|| CirculationError::not_found(
                format!("item {} not found", id).as_str()))?;
        let removed = items.remove(pos);
        save_collection(self.store.as_ref(), self.collection.as_str(), &items).await?;
        Ok(removed)
    }

    async fn all(&self) -> CirculationResult<Vec<ItemEntity>> {
        load_collection(self.store.as_ref(), self.collection.as_str()).await
    }
}

impl ItemRepository for KvItemRepository {}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::core::repository::Repository;
    use crate::inventory::domain::model::ItemEntity;
    use crate::inventory::repository::kv_item_repository::{KvItemRepository, ITEMS_COLLECTION};
    use crate::store::memory::MemoryStore;

    fn repository() -> KvItemRepository {
        KvItemRepository::new(Arc::new(MemoryStore::new()), ITEMS_COLLECTION)
    }

    #[tokio::test]
    async fn test_should_create_get_item() {
        let item_repo = repository();
        let item = ItemEntity::new("title", 2);
        let size = item_repo.create(&item).await.expect("should create item");
        assert_eq!(1, size);

        let loaded = item_repo.get(item.id.as_str()).await.expect("should return item");
        assert_eq!(item.id, loaded.id);
        assert_eq!(2, loaded.available);
    }

    #[tokio::test]
    async fn test_should_fail_create_on_duplicate_id() {
        let item_repo = repository();
        let item = ItemEntity::new("title", 2);
        let _ = item_repo.create(&item).await.expect("should create item");
        assert!(item_repo.create(&item).await.is_err());
    }

    #[tokio::test]
    async fn test_should_update_item() {
        let item_repo = repository();
        let mut item = ItemEntity::new("title", 2);
        let _ = item_repo.create(&item).await.expect("should create item");

        item.available = 1;
        let size = item_repo.update(&item).await.expect("should update item");
        assert_eq!(1, size);

        let loaded = item_repo.get(item.id.as_str()).await.expect("should return item");
        assert_eq!(1, loaded.available);
    }

    #[tokio::test]
    async fn test_should_fail_update_when_absent() {
        let item_repo = repository();
        let item = ItemEntity::new("title", 2);
        assert!(item_repo.update(&item).await.is_err());
    }

    #[tokio::test]
    async fn test_should_delete_item_and_return_removed() {
        let item_repo = repository();
        let item = ItemEntity::new("title", 2);
        let _ = item_repo.create(&item).await.expect("should create item");

        let removed = item_repo.delete(item.id.as_str()).await.expect("should delete item");
        assert_eq!(item.id, removed.id);
        assert!(item_repo.get(item.id.as_str()).await.is_err());
    }
}
