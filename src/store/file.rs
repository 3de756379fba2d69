use std::fs;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use crate::core::library::CirculationResult;
use crate::store::CollectionStore;

// JsonFileStore persists each collection as one <collection>.json document
// under a data directory. The write replaces the whole file, so a lifecycle
// operation touching two collections still issues two independent writes.
#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection))
    }
}

#[async_trait]
impl CollectionStore for JsonFileStore {
    async fn get(&self, collection: &str) -> CirculationResult<Option<String>> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(path)?;
        Ok(Some(payload))
    }

    async fn put(&self, collection: &str, payload: &str) -> CirculationResult<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::write(self.collection_path(collection), payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use crate::store::CollectionStore;
    use crate::store::file::JsonFileStore;

    #[tokio::test]
    async fn test_should_return_none_before_first_write() {
        let dir = tempdir().expect("should create tempdir");
        let store = JsonFileStore::new(dir.path());
        let payload = store.get("loans").await.expect("should get");
        assert_eq!(None, payload);
    }

    #[tokio::test]
    async fn test_should_persist_collection_to_file() {
        let dir = tempdir().expect("should create tempdir");
        let store = JsonFileStore::new(dir.path());
        store.put("loans", "[{\"id\":\"1\"}]").await.expect("should put");
        assert!(dir.path().join("loans.json").exists());
        let payload = store.get("loans").await.expect("should get");
        assert_eq!(Some("[{\"id\":\"1\"}]".to_string()), payload);
    }

    #[tokio::test]
    async fn test_should_replace_file_on_every_put() {
        let dir = tempdir().expect("should create tempdir");
        let store = JsonFileStore::new(dir.path());
        store.put("books", "[1,2]").await.expect("should put");
        store.put("books", "[3]").await.expect("should put");
        let payload = store.get("books").await.expect("should get");
        assert_eq!(Some("[3]".to_string()), payload);
    }
}
