use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::library::LoanStatus;

// LoanNoticeDto is the read-only projection handed to the notification and
// print collaborators; it carries everything a message needs without
// exposing the internal store shape.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanNoticeDto {
    pub user_name: String,
    pub book_title: String,
    pub due_date: NaiveDate,
    pub effective_status: LoanStatus,
}
