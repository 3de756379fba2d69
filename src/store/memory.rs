use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use crate::core::library::{CirculationError, CirculationResult};
use crate::store::CollectionStore;

// MemoryStore keeps collections in process memory, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn get(&self, collection: &str) -> CirculationResult<Option<String>> {
        let collections = self.collections.read()
            .map_err(|_| CirculationError::storage("collection store lock poisoned"))?;
        Ok(collections.get(collection).cloned())
    }

    async fn put(&self, collection: &str, payload: &str) -> CirculationResult<()> {
        let mut collections = self.collections.write()
            .map_err(|_| CirculationError::storage("collection store lock poisoned"))?;
        collections.insert(collection.to_string(), payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::store::CollectionStore;
    use crate::store::memory::MemoryStore;

    #[tokio::test]
    async fn test_should_return_none_for_unknown_collection() {
        let store = MemoryStore::new();
        let payload = store.get("loans").await.expect("should get");
        assert_eq!(None, payload);
    }

    #[tokio::test]
    async fn test_should_put_and_get_payload() {
        let store = MemoryStore::new();
        store.put("loans", "[]").await.expect("should put");
        let payload = store.get("loans").await.expect("should get");
        assert_eq!(Some("[]".to_string()), payload);
    }
}
