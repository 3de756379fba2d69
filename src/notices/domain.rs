use async_trait::async_trait;
use crate::core::library::CirculationResult;
use crate::loans::domain::query::LoanQuery;
use crate::notices::dto::LoanNoticeDto;

pub mod service;

// NoticeService feeds the outbound messaging and print-report collaborators.
// Delivery and link construction happen outside the core; this stops at the
// projection and the message text.
#[async_trait]
pub trait NoticeService: Sync + Send {
    // projections for every loan matching the filter, unpaginated as a
    // printed report consumes them
    async fn notices_for(&self, query: &LoanQuery) -> CirculationResult<Vec<LoanNoticeDto>>;

    // reminder text for one loan; requires the borrower to have a phone on
    // file
    async fn reminder_message(&self, loan_id: &str) -> CirculationResult<String>;
}
