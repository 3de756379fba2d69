pub mod kv_item_repository;

use crate::core::repository::Repository;
use crate::inventory::domain::model::ItemEntity;

pub trait ItemRepository: Repository<ItemEntity> {}
