use async_trait::async_trait;
use crate::borrowers::dto::BorrowerDto;
use crate::core::library::CirculationResult;

pub mod model;
pub mod service;

// BorrowerService is the slice of user management the loan core needs: the
// lookup that feeds the name snapshot at creation and the phone for notices.
#[async_trait]
pub trait BorrowerService: Sync + Send {
    async fn add_borrower(&self, borrower: &BorrowerDto) -> CirculationResult<BorrowerDto>;
    async fn find_borrower_by_id(&self, id: &str) -> CirculationResult<BorrowerDto>;
}
