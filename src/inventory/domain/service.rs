use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::{CirculationError, CirculationResult};
use crate::gateway::events::EventPublisher;
use crate::inventory::domain::model::ItemEntity;
use crate::inventory::domain::InventoryService;
use crate::inventory::dto::ItemDto;
use crate::inventory::repository::ItemRepository;

pub(crate) struct InventoryServiceImpl {
    item_repository: Box<dyn ItemRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl InventoryServiceImpl {
    pub(crate) fn new(item_repository: Box<dyn ItemRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            item_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl InventoryService for InventoryServiceImpl {
    async fn add_item(&self, item: &ItemDto) -> CirculationResult<ItemDto> {
        let _ = self.item_repository.create(&ItemEntity::from(item)).await?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "item_added", "books", item.id.as_str(), &item.clone())?).await?;
        Ok(item.clone())
    }

    async fn find_item_by_id(&self, id: &str) -> CirculationResult<ItemDto> {
        self.item_repository.get(id).await.map(|i| ItemDto::from(&i))
    }

    async fn decrement_available(&self, item_id: &str) -> CirculationResult<i64> {
        let mut item = self.item_repository.get(item_id).await?;
        if item.available <= 0 {
            return Err(CirculationError::out_of_stock(
                format!("no available copies of item {}", item_id).as_str()));
        }
        item.available -= 1;
        let _ = self.item_repository.update(&item).await?;
        Ok(item.available)
    }

    async fn increment_available(&self, item_id: &str) -> CirculationResult<i64> {
        let mut item = self.item_repository.get(item_id).await?;
        item.available += 1;
        let _ = self.item_repository.update(&item).await?;
        Ok(item.available)
    }
}

impl From<&ItemEntity> for ItemDto {
    fn from(other: &ItemEntity) -> ItemDto {
        ItemDto {
            id: other.id.to_string(),
            title: other.title.to_string(),
            available: other.available,
        }
    }
}

impl From<&ItemDto> for ItemEntity {
    fn from(other: &ItemDto) -> ItemEntity {
        ItemEntity {
            id: other.id.to_string(),
            title: other.title.to_string(),
            available: other.available,
        }
    }
}
