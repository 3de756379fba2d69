use std::sync::Arc;
use crate::gateway::factory::create_publisher;
use crate::inventory::domain::service::InventoryServiceImpl;
use crate::inventory::domain::InventoryService;
use crate::inventory::repository::kv_item_repository::{KvItemRepository, ITEMS_COLLECTION};
use crate::inventory::repository::ItemRepository;
use crate::store::CollectionStore;

pub fn create_item_repository(store: &Arc<dyn CollectionStore>) -> Box<dyn ItemRepository> {
    Box::new(KvItemRepository::new(store.clone(), ITEMS_COLLECTION))
}

pub fn create_inventory_service(store: &Arc<dyn CollectionStore>) -> Box<dyn InventoryService> {
    let item_repo = create_item_repository(store);
    Box::new(InventoryServiceImpl::new(item_repo, create_publisher()))
}
