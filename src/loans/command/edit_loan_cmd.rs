use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::LoanStatus;
use crate::loans::domain::LoanService;
use crate::loans::dto::LoanDto;
use crate::utils::date::parse_date;

// Administrative edit with no state-machine validation and no inventory side
// effect; callers should warn the operator about the desync risk.
pub struct EditLoanCommand {
    loan_service: Box<dyn LoanService>,
}

impl EditLoanCommand {
    pub fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EditLoanCommandRequest {
    loan_id: String,
    loan_date: String,
    due_date: String,
    status: String,
}

impl EditLoanCommandRequest {
    pub fn new(loan_id: &str, loan_date: &str, due_date: &str, status: &str) -> Self {
        Self {
            loan_id: loan_id.to_string(),
            loan_date: loan_date.to_string(),
            due_date: due_date.to_string(),
            status: status.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EditLoanCommandResponse {
    pub loan: LoanDto,
}

impl EditLoanCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<EditLoanCommandRequest, EditLoanCommandResponse> for EditLoanCommand {
    async fn execute(&self, req: EditLoanCommandRequest) -> Result<EditLoanCommandResponse, CommandError> {
        let loan_date = parse_date(req.loan_date.as_str()).map_err(CommandError::from)?;
        let due_date = parse_date(req.due_date.as_str()).map_err(CommandError::from)?;
        let status = LoanStatus::from(req.status.to_string());
        self.loan_service.edit_fields(req.loan_id.as_str(), loan_date, due_date, status)
            .await.map_err(CommandError::from).map(EditLoanCommandResponse::new)
    }
}
