use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;

// ItemDto abstracts the item view handed to callers of the inventory service.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: String,
    pub title: String,
    pub available: i64,
}

impl ItemDto {
    pub fn new(title: &str, available: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            available,
        }
    }
}

impl Identifiable for ItemDto {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::inventory::dto::ItemDto;

    #[tokio::test]
    async fn test_should_build_item_dto() {
        let item = ItemDto::new("Grande Sertão: Veredas", 2);
        assert_eq!("Grande Sertão: Veredas", item.title.as_str());
        assert_eq!(2, item.available);
    }
}
