use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::CirculationResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, fails on duplicate id
    async fn create(&self, entity: &Entity) -> CirculationResult<usize>;

    // updates an entity, fails if absent
    async fn update(&self, entity: &Entity) -> CirculationResult<usize>;

    // get an entity by id
    async fn get(&self, id: &str) -> CirculationResult<Entity>;

    // delete an entity, returning the removed record
    async fn delete(&self, id: &str) -> CirculationResult<Entity>;

    // snapshot of the whole collection in insertion order; each call
    // re-reads the backing store
    async fn all(&self) -> CirculationResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Memory,
    JsonFile,
}
