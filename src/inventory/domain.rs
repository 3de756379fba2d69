use async_trait::async_trait;
use crate::core::library::CirculationResult;
use crate::inventory::dto::ItemDto;

pub mod model;
pub mod service;

// InventoryService owns the available-copy count per item. decrement and
// increment are the only mutators of that count reachable from the core.
#[async_trait]
pub trait InventoryService: Sync + Send {
    async fn add_item(&self, item: &ItemDto) -> CirculationResult<ItemDto>;
    async fn find_item_by_id(&self, id: &str) -> CirculationResult<ItemDto>;

    // reduces the available count by one, fails with OutOfStock at zero
    async fn decrement_available(&self, item_id: &str) -> CirculationResult<i64>;

    // raises the available count by one, no upper bound enforced
    async fn increment_available(&self, item_id: &str) -> CirculationResult<i64>;
}
