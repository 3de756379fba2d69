pub mod factory;
pub mod file;
pub mod memory;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::core::library::CirculationResult;

// CollectionStore abstracts the flat key-value store backing the system: one
// JSON document per collection, read and replaced whole on every write. No
// partial update, no transaction, no concurrency token.
#[async_trait]
pub trait CollectionStore: Sync + Send {
    // whole JSON document for a collection, None when never written
    async fn get(&self, collection: &str) -> CirculationResult<Option<String>>;

    // replace the whole document
    async fn put(&self, collection: &str, payload: &str) -> CirculationResult<()>;
}

pub async fn load_collection<T: DeserializeOwned>(store: &dyn CollectionStore,
                                                  collection: &str) -> CirculationResult<Vec<T>> {
    match store.get(collection).await? {
        Some(payload) => Ok(serde_json::from_str(payload.as_str())?),
        None => Ok(Vec::new()),
    }
}

pub async fn save_collection<T: Serialize>(store: &dyn CollectionStore,
                                           collection: &str, records: &[T]) -> CirculationResult<()> {
    let payload = serde_json::to_string(records)?;
    store.put(collection, payload.as_str()).await
}

#[cfg(test)]
mod tests {
    use crate::store::{load_collection, save_collection};
    use crate::store::memory::MemoryStore;

    #[tokio::test]
    async fn test_should_default_missing_collection_to_empty() {
        let store = MemoryStore::new();
        let records: Vec<String> = load_collection(&store, "missing").await.expect("should load");
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_should_replace_collection_whole() {
        let store = MemoryStore::new();
        save_collection(&store, "names", &["a".to_string(), "b".to_string()]).await.expect("should save");
        save_collection(&store, "names", &["c".to_string()]).await.expect("should save");
        let records: Vec<String> = load_collection(&store, "names").await.expect("should load");
        assert_eq!(vec!["c".to_string()], records);
    }
}
