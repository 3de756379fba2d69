use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;

// ItemEntity abstracts a lendable title and the count of copies currently on
// the shelf. Total copies are tracked by the catalog, not here.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ItemEntity {
    pub id: String,
    pub title: String,
    pub available: i64,
}

impl ItemEntity {
    pub fn new(title: &str, available: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            available,
        }
    }
}

impl Identifiable for ItemEntity {
    fn id(&self) -> String {
        self.id.to_string()
    }
}
