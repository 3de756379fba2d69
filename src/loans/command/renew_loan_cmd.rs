use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::loans::domain::LoanService;
use crate::loans::dto::LoanDto;

pub struct RenewLoanCommand {
    loan_service: Box<dyn LoanService>,
}

impl RenewLoanCommand {
    pub fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RenewLoanCommandRequest {
    loan_id: String,
    // policy default applies when omitted
    days: Option<i64>,
}

impl RenewLoanCommandRequest {
    pub fn new(loan_id: &str, days: Option<i64>) -> Self {
        Self {
            loan_id: loan_id.to_string(),
            days,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RenewLoanCommandResponse {
    pub loan: LoanDto,
}

impl RenewLoanCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<RenewLoanCommandRequest, RenewLoanCommandResponse> for RenewLoanCommand {
    async fn execute(&self, req: RenewLoanCommandRequest) -> Result<RenewLoanCommandResponse, CommandError> {
        self.loan_service.renew(req.loan_id.as_str(), req.days)
            .await.map_err(CommandError::from).map(RenewLoanCommandResponse::new)
    }
}
