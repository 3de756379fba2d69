use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::loans::domain::LoanService;
use crate::loans::dto::LoanDto;

pub struct DeleteLoanCommand {
    loan_service: Box<dyn LoanService>,
}

impl DeleteLoanCommand {
    pub fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteLoanCommandRequest {
    loan_id: String,
}

impl DeleteLoanCommandRequest {
    pub fn new(loan_id: &str) -> Self {
        Self {
            loan_id: loan_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteLoanCommandResponse {
    // the removed record, so callers can report what went away
    pub loan: LoanDto,
}

impl DeleteLoanCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<DeleteLoanCommandRequest, DeleteLoanCommandResponse> for DeleteLoanCommand {
    async fn execute(&self, req: DeleteLoanCommandRequest) -> Result<DeleteLoanCommandResponse, CommandError> {
        self.loan_service.delete_loan(req.loan_id.as_str())
            .await.map_err(CommandError::from).map(DeleteLoanCommandResponse::new)
    }
}
