use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::borrowers::dto::BorrowerDto;
use crate::core::domain::Identifiable;
use crate::core::library::LoanStatus;
use crate::inventory::dto::ItemDto;

// LoanEntity records one item lent to one borrower for a bounded period.
// Borrower name and item title are snapshots taken at creation and never
// refreshed; they do not track later renames.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanEntity {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub book_id: String,
    pub book_title: String,
    pub loan_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: LoanStatus,
    // present if and only if the persisted status is Returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
}

impl LoanEntity {
    pub fn new(borrower: &BorrowerDto, item: &ItemDto,
               loan_date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: borrower.id.to_string(),
            user_name: borrower.name.to_string(),
            book_id: item.id.to_string(),
            book_title: item.title.to_string(),
            loan_date,
            due_date,
            status: LoanStatus::Active,
            return_date: None,
        }
    }
}

impl Identifiable for LoanEntity {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::borrowers::dto::BorrowerDto;
    use crate::core::library::LoanStatus;
    use crate::inventory::dto::ItemDto;
    use crate::loans::domain::model::LoanEntity;
    use crate::utils::date::parse_date;

    #[tokio::test]
    async fn test_should_build_loan() {
        let borrower = BorrowerDto::new("Maria Silva", None);
        let item = ItemDto::new("Dom Casmurro", 2);
        let loan = LoanEntity::new(&borrower, &item,
                                   parse_date("2024-01-01").unwrap(),
                                   parse_date("2024-01-15").unwrap());
        assert_eq!(borrower.id, loan.user_id);
        assert_eq!("Maria Silva", loan.user_name.as_str());
        assert_eq!(item.id, loan.book_id);
        assert_eq!("Dom Casmurro", loan.book_title.as_str());
        assert_eq!(LoanStatus::Active, loan.status);
        assert_eq!(None, loan.return_date);
    }

    #[tokio::test]
    async fn test_should_serialize_with_wire_field_names() {
        let borrower = BorrowerDto::new("Maria Silva", None);
        let item = ItemDto::new("Dom Casmurro", 2);
        let loan = LoanEntity::new(&borrower, &item,
                                   parse_date("2024-01-01").unwrap(),
                                   parse_date("2024-01-15").unwrap());
        let json = serde_json::to_string(&loan).expect("should serialize");
        assert!(json.contains("\"userId\""));
        assert!(json.contains("\"userName\""));
        assert!(json.contains("\"bookTitle\""));
        assert!(json.contains("\"dueDate\":\"2024-01-15\""));
        // returnDate stays absent until the loan is returned
        assert!(!json.contains("\"returnDate\""));
    }

    #[tokio::test]
    async fn test_should_deserialize_missing_return_date() {
        let json = r#"{"id":"l1","userId":"u1","userName":"Maria","bookId":"b1",
            "bookTitle":"Dom Casmurro","loanDate":"2024-01-01","dueDate":"2024-01-15",
            "status":"Active"}"#;
        let loan: LoanEntity = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(None, loan.return_date);
        assert_eq!(LoanStatus::Active, loan.status);
    }
}
