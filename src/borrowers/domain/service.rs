use async_trait::async_trait;
use crate::borrowers::domain::model::BorrowerEntity;
use crate::borrowers::domain::BorrowerService;
use crate::borrowers::dto::BorrowerDto;
use crate::borrowers::repository::BorrowerRepository;
use crate::core::library::CirculationResult;

pub(crate) struct BorrowerServiceImpl {
    borrower_repository: Box<dyn BorrowerRepository>,
}

impl BorrowerServiceImpl {
    pub(crate) fn new(borrower_repository: Box<dyn BorrowerRepository>) -> Self {
        Self {
            borrower_repository,
        }
    }
}

#[async_trait]
impl BorrowerService for BorrowerServiceImpl {
    async fn add_borrower(&self, borrower: &BorrowerDto) -> CirculationResult<BorrowerDto> {
        let _ = self.borrower_repository.create(&BorrowerEntity::from(borrower)).await?;
        Ok(borrower.clone())
    }

    async fn find_borrower_by_id(&self, id: &str) -> CirculationResult<BorrowerDto> {
        self.borrower_repository.get(id).await.map(|b| BorrowerDto::from(&b))
    }
}

impl From<&BorrowerEntity> for BorrowerDto {
    fn from(other: &BorrowerEntity) -> BorrowerDto {
        BorrowerDto {
            id: other.id.to_string(),
            name: other.name.to_string(),
            phone: other.phone.clone(),
        }
    }
}

impl From<&BorrowerDto> for BorrowerEntity {
    fn from(other: &BorrowerDto) -> BorrowerEntity {
        BorrowerEntity {
            id: other.id.to_string(),
            name: other.name.to_string(),
            phone: other.phone.clone(),
        }
    }
}
