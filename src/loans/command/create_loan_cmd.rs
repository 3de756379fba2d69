use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::loans::domain::LoanService;
use crate::loans::dto::LoanDto;
use crate::utils::date::parse_date;

pub struct CreateLoanCommand {
    loan_service: Box<dyn LoanService>,
}

impl CreateLoanCommand {
    pub fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateLoanCommandRequest {
    user_id: String,
    item_id: String,
    loan_date: String,
    due_date: String,
}

impl CreateLoanCommandRequest {
    pub fn new(user_id: &str, item_id: &str, loan_date: &str, due_date: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            item_id: item_id.to_string(),
            loan_date: loan_date.to_string(),
            due_date: due_date.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateLoanCommandResponse {
    pub loan: LoanDto,
}

impl CreateLoanCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<CreateLoanCommandRequest, CreateLoanCommandResponse> for CreateLoanCommand {
    async fn execute(&self, req: CreateLoanCommandRequest) -> Result<CreateLoanCommandResponse, CommandError> {
        let loan_date = parse_date(req.loan_date.as_str()).map_err(CommandError::from)?;
        let due_date = parse_date(req.due_date.as_str()).map_err(CommandError::from)?;
        self.loan_service.create_loan(req.user_id.as_str(), req.item_id.as_str(), loan_date, due_date)
            .await.map_err(CommandError::from).map(CreateLoanCommandResponse::new)
    }
}
