use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::store::CollectionStore;
use crate::store::file::JsonFileStore;
use crate::store::memory::MemoryStore;

pub fn create_collection_store(config: &Configuration, store: RepositoryStore) -> Arc<dyn CollectionStore> {
    match store {
        RepositoryStore::Memory => {
            Arc::new(MemoryStore::new())
        }
        RepositoryStore::JsonFile => {
            Arc::new(JsonFileStore::new(config.data_dir.as_path()))
        }
    }
}
