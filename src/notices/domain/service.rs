use async_trait::async_trait;
use crate::borrowers::domain::BorrowerService;
use crate::core::clock::Clock;
use crate::core::domain::Configuration;
use crate::core::library::{CirculationError, CirculationResult};
use crate::loans::domain::classifier;
use crate::loans::domain::query::{self, LoanQuery};
use crate::loans::repository::LoanRepository;
use crate::notices::domain::NoticeService;
use crate::notices::dto::LoanNoticeDto;

pub(crate) struct NoticeServiceImpl {
    institution_name: String,
    loan_repository: Box<dyn LoanRepository>,
    borrower_service: Box<dyn BorrowerService>,
    clock: Box<dyn Clock>,
}

impl NoticeServiceImpl {
    pub(crate) fn new(config: &Configuration, loan_repository: Box<dyn LoanRepository>,
                      borrower_service: Box<dyn BorrowerService>,
                      clock: Box<dyn Clock>) -> Self {
        Self {
            institution_name: config.institution_name.to_string(),
            loan_repository,
            borrower_service,
            clock,
        }
    }
}

#[async_trait]
impl NoticeService for NoticeServiceImpl {
    async fn notices_for(&self, loan_query: &LoanQuery) -> CirculationResult<Vec<LoanNoticeDto>> {
        let today = self.clock.today();
        let loans = self.loan_repository.all().await?;
        let filtered = query::filter(&loans, loan_query, today);
        Ok(filtered.iter().map(|l| LoanNoticeDto {
            user_name: l.user_name.to_string(),
            book_title: l.book_title.to_string(),
            due_date: l.due_date,
            effective_status: classifier::effective_status(l, today),
        }).collect())
    }

    async fn reminder_message(&self, loan_id: &str) -> CirculationResult<String> {
        let loan = self.loan_repository.get(loan_id).await?;
        let borrower = self.borrower_service.find_borrower_by_id(loan.user_id.as_str()).await?;
        if borrower.phone.is_none() {
            return Err(CirculationError::validation(
                format!("borrower {} has no phone on file", borrower.id).as_str(), None));
        }
        let status = classifier::effective_status(&loan, self.clock.today());
        Ok(format!(
            "Hello {}, a notice from {}:\n\nRegarding the item: {}\nExpected return date: {}\nCurrent status: {}\n\nPlease return the item or renew the loan.",
            loan.user_name, self.institution_name, loan.book_title, loan.due_date, status))
    }
}
