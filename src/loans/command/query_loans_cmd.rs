use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::{LoanStatus, PaginatedResult};
use crate::loans::domain::query::LoanQuery;
use crate::loans::domain::LoanService;
use crate::loans::dto::LoanDto;
use crate::utils::date::parse_date;

pub struct QueryLoansCommand {
    loan_service: Box<dyn LoanService>,
}

impl QueryLoansCommand {
    pub fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

// Filter changes and page-size changes are expected to come in with page
// reset to 1; the engine serves whatever page is asked for.
#[derive(Debug, Deserialize)]
pub struct QueryLoansCommandRequest {
    pub text: Option<String>,
    // empty string means no status filter, as the UI sends it
    pub status: Option<String>,
    pub due_from: Option<String>,
    pub due_to: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

impl QueryLoansCommandRequest {
    pub fn new(text: Option<&str>, status: Option<&str>,
               due_from: Option<&str>, due_to: Option<&str>,
               page: usize, page_size: usize) -> Self {
        Self {
            text: text.map(str::to_string),
            status: status.map(str::to_string),
            due_from: due_from.map(str::to_string),
            due_to: due_to.map(str::to_string),
            page,
            page_size,
        }
    }

    fn to_query(&self) -> Result<LoanQuery, CommandError> {
        let due_from = match &self.due_from {
            Some(value) => Some(parse_date(value.as_str()).map_err(CommandError::from)?),
            None => None,
        };
        let due_to = match &self.due_to {
            Some(value) => Some(parse_date(value.as_str()).map_err(CommandError::from)?),
            None => None,
        };
        Ok(LoanQuery {
            text: self.text.clone().filter(|t| !t.is_empty()),
            status: self.status.clone().filter(|s| !s.is_empty()).map(LoanStatus::from),
            due_from,
            due_to,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct QueryLoansCommandResponse {
    pub loans: PaginatedResult<LoanDto>,
}

impl QueryLoansCommandResponse {
    pub fn new(loans: PaginatedResult<LoanDto>) -> Self {
        Self {
            loans,
        }
    }
}

#[async_trait]
impl Command<QueryLoansCommandRequest, QueryLoansCommandResponse> for QueryLoansCommand {
    async fn execute(&self, req: QueryLoansCommandRequest) -> Result<QueryLoansCommandResponse, CommandError> {
        let query = req.to_query()?;
        self.loan_service.query_loans(&query, req.page, req.page_size)
            .await.map_err(CommandError::from).map(QueryLoansCommandResponse::new)
    }
}
