use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use tracing::warn;
use crate::borrowers::domain::BorrowerService;
use crate::core::clock::Clock;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{CirculationError, CirculationResult, LoanStatus, PaginatedResult};
use crate::gateway::events::EventPublisher;
use crate::inventory::domain::InventoryService;
use crate::loans::domain::model::LoanEntity;
use crate::loans::domain::query::{self, LoanQuery};
use crate::loans::domain::LoanService;
use crate::loans::dto::LoanDto;
use crate::loans::repository::LoanRepository;

pub(crate) struct LoanServiceImpl {
    renewal_days: i64,
    loan_repository: Box<dyn LoanRepository>,
    borrower_service: Box<dyn BorrowerService>,
    inventory_service: Box<dyn InventoryService>,
    events_publisher: Box<dyn EventPublisher>,
    clock: Box<dyn Clock>,
}

impl LoanServiceImpl {
    pub(crate) fn new(config: &Configuration, loan_repository: Box<dyn LoanRepository>,
                      borrower_service: Box<dyn BorrowerService>,
                      inventory_service: Box<dyn InventoryService>,
                      events_publisher: Box<dyn EventPublisher>,
                      clock: Box<dyn Clock>) -> Self {
        Self {
            renewal_days: config.renewal_days,
            loan_repository,
            borrower_service,
            inventory_service,
            events_publisher,
            clock,
        }
    }

    // The catalog row may have been removed while the loan was out; the loan
    // transition stands and the ledger is left for manual reconciliation.
    async fn restore_availability(&self, item_id: &str) {
        if let Err(err) = self.inventory_service.increment_available(item_id).await {
            warn!("could not restore availability for item {}: {}", item_id, err);
        }
    }
}

#[async_trait]
impl LoanService for LoanServiceImpl {
    async fn create_loan(&self, user_id: &str, item_id: &str,
                         loan_date: NaiveDate, due_date: NaiveDate) -> CirculationResult<LoanDto> {
        let borrower = self.borrower_service.find_borrower_by_id(user_id).await?;
        let item = self.inventory_service.find_item_by_id(item_id).await?;
        if item.available <= 0 {
            return Err(CirculationError::no_copies_available(
                format!("item {} has no copies available for loan", item.id).as_str()));
        }
        // inventory-affecting write first; there is no transaction spanning
        // the two collections, so a failed record insert is compensated and
        // reported rather than left dangling
        let _ = self.inventory_service.decrement_available(item_id).await?;
        let entity = LoanEntity::new(&borrower, &item, loan_date, due_date);
        if let Err(err) = self.loan_repository.create(&entity).await {
            if let Err(comp) = self.inventory_service.increment_available(item_id).await {
                warn!("loan insert failed and availability of item {} could not be restored: {}",
                    item_id, comp);
            }
            return Err(err);
        }
        let loan = LoanDto::from_entity(&entity, self.clock.today());
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "loan_created", "loans", loan.id.as_str(), &loan.clone())?).await?;
        Ok(loan)
    }

    async fn mark_returned(&self, loan_id: &str) -> CirculationResult<LoanDto> {
        let mut entity = self.loan_repository.get(loan_id).await?;
        if entity.status == LoanStatus::Returned {
            return Err(CirculationError::already_returned(
                format!("loan {} was already returned", loan_id).as_str()));
        }
        entity.status = LoanStatus::Returned;
        entity.return_date = Some(self.clock.today());
        let _ = self.loan_repository.update(&entity).await?;
        self.restore_availability(entity.book_id.as_str()).await;
        let loan = LoanDto::from_entity(&entity, self.clock.today());
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "loan_returned", "loans", loan.id.as_str(), &loan.clone())?).await?;
        Ok(loan)
    }

    async fn renew(&self, loan_id: &str, days: Option<i64>) -> CirculationResult<LoanDto> {
        let mut entity = self.loan_repository.get(loan_id).await?;
        if entity.status == LoanStatus::Returned {
            return Err(CirculationError::already_returned(
                format!("loan {} was already returned and cannot be renewed", loan_id).as_str()));
        }
        entity.due_date = self.clock.today() + Duration::days(days.unwrap_or(self.renewal_days));
        // forcing Active clears a manually persisted Overdue; the ledger is
        // untouched because the copy never moved
        entity.status = LoanStatus::Active;
        let _ = self.loan_repository.update(&entity).await?;
        let loan = LoanDto::from_entity(&entity, self.clock.today());
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "loan_renewed", "loans", loan.id.as_str(), &loan.clone())?).await?;
        Ok(loan)
    }

    async fn edit_fields(&self, loan_id: &str, loan_date: NaiveDate,
                         due_date: NaiveDate, status: LoanStatus) -> CirculationResult<LoanDto> {
        let mut entity = self.loan_repository.get(loan_id).await?;
        entity.loan_date = loan_date;
        entity.due_date = due_date;
        // written as given: setting Returned here does not credit the ledger
        // and setting Active does not consume a copy
        entity.status = status;
        let _ = self.loan_repository.update(&entity).await?;
        let loan = LoanDto::from_entity(&entity, self.clock.today());
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "loan_edited", "loans", loan.id.as_str(), &loan.clone())?).await?;
        Ok(loan)
    }

    async fn delete_loan(&self, loan_id: &str) -> CirculationResult<LoanDto> {
        let removed = self.loan_repository.delete(loan_id).await?;
        if removed.status != LoanStatus::Returned {
            // the copy held by a live loan goes back on the shelf; a returned
            // loan already credited it
            self.restore_availability(removed.book_id.as_str()).await;
        }
        let loan = LoanDto::from_entity(&removed, self.clock.today());
        let _ = self.events_publisher.publish(&DomainEvent::deleted(
            "loan_deleted", "loans", loan.id.as_str(), &loan.clone())?).await?;
        Ok(loan)
    }

    async fn find_loan_by_id(&self, loan_id: &str) -> CirculationResult<LoanDto> {
        let entity = self.loan_repository.get(loan_id).await?;
        Ok(LoanDto::from_entity(&entity, self.clock.today()))
    }

    async fn query_loans(&self, loan_query: &LoanQuery,
                         page: usize, page_size: usize) -> CirculationResult<PaginatedResult<LoanDto>> {
        let today = self.clock.today();
        let loans = self.loan_repository.all().await?;
        let filtered = query::filter(&loans, loan_query, today);
        let result = query::paginate(&filtered, page, page_size);
        let records = result.records.iter().map(|l| LoanDto::from_entity(l, today)).collect();
        Ok(PaginatedResult::new(result.page, result.page_size, result.total_records, records))
    }
}
