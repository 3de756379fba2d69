use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::LoanStatus;
use crate::loans::domain::classifier;
use crate::loans::domain::model::LoanEntity;

// LoanDto is the read-time view of a loan. status is the persisted value;
// effective_status is derived fresh against the calendar on every read and
// is never written back.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDto {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub book_id: String,
    pub book_title: String,
    pub loan_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: LoanStatus,
    pub effective_status: LoanStatus,
    pub return_date: Option<NaiveDate>,
}

impl LoanDto {
    pub fn from_entity(entity: &LoanEntity, today: NaiveDate) -> Self {
        Self {
            id: entity.id.to_string(),
            user_id: entity.user_id.to_string(),
            user_name: entity.user_name.to_string(),
            book_id: entity.book_id.to_string(),
            book_title: entity.book_title.to_string(),
            loan_date: entity.loan_date,
            due_date: entity.due_date,
            status: entity.status,
            effective_status: classifier::effective_status(entity, today),
            return_date: entity.return_date,
        }
    }
}

impl Identifiable for LoanDto {
    fn id(&self) -> String {
        self.id.to_string()
    }
}
