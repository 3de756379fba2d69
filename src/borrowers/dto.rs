use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BorrowerDto {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
}

impl BorrowerDto {
    pub fn new(name: &str, phone: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            phone: phone.map(str::to_string),
        }
    }
}

impl Identifiable for BorrowerDto {
    fn id(&self) -> String {
        self.id.to_string()
    }
}
