use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum CirculationError {
    NoCopiesAvailable {
        message: String,
    },
    // Same exhaustion condition as NoCopiesAvailable, surfaced by the ledger
    // itself when a decrement is attempted at zero.
    OutOfStock {
        message: String,
    },
    AlreadyReturned {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // Advisory error raised by the audit routines, never by lifecycle
    // operations themselves.
    InconsistentState {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Storage {
        message: String,
    },
}

impl CirculationError {
    pub fn no_copies_available(message: &str) -> CirculationError {
        CirculationError::NoCopiesAvailable { message: message.to_string() }
    }

    pub fn out_of_stock(message: &str) -> CirculationError {
        CirculationError::OutOfStock { message: message.to_string() }
    }

    pub fn already_returned(message: &str) -> CirculationError {
        CirculationError::AlreadyReturned { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> CirculationError {
        CirculationError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> CirculationError {
        CirculationError::NotFound { message: message.to_string() }
    }

    pub fn inconsistent_state(message: &str) -> CirculationError {
        CirculationError::InconsistentState { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CirculationError {
        CirculationError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> CirculationError {
        CirculationError::Serialization { message: message.to_string() }
    }

    pub fn storage(message: &str) -> CirculationError {
        CirculationError::Storage { message: message.to_string() }
    }
}

impl From<std::io::Error> for CirculationError {
    fn from(err: std::io::Error) -> Self {
        CirculationError::storage(
            format!("store io {:?}", err).as_str())
    }
}

impl From<serde_json::Error> for CirculationError {
    fn from(err: serde_json::Error) -> Self {
        CirculationError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for CirculationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CirculationError::NoCopiesAvailable { message } => {
                write!(f, "{}", message)
            }
            CirculationError::OutOfStock { message } => {
                write!(f, "{}", message)
            }
            CirculationError::AlreadyReturned { message } => {
                write!(f, "{}", message)
            }
            CirculationError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            CirculationError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CirculationError::InconsistentState { message } => {
                write!(f, "{}", message)
            }
            CirculationError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CirculationError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CirculationError::Storage { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for circulation operations.
pub type CirculationResult<T> = Result<T, CirculationError>;

// It defines abstraction for paginated result
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResult<T> {
    // 1-indexed page number
    pub page: usize,
    // page size
    pub page_size: usize,
    // total pages, floor of one even when there are no records
    pub total_pages: usize,
    // total matching records before slicing
    pub total_records: usize,
    // records for the requested page
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: usize, page_size: usize, total_records: usize,
                      records: Vec<T>) -> Self {
        let total_pages = if total_records == 0 {
            1
        } else {
            (total_records + page_size - 1) / page_size
        };
        PaginatedResult {
            page,
            page_size,
            total_pages,
            total_records,
            records,
        }
    }
}

// Persisted value is authoritative only while Returned; otherwise the
// displayed status is recomputed against the due date on every read.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum LoanStatus {
    Active,
    Returned,
    Overdue,
}

impl From<String> for LoanStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Active" => LoanStatus::Active,
            "Returned" => LoanStatus::Returned,
            "Overdue" => LoanStatus::Overdue,
            _ => LoanStatus::Active,
        }
    }
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanStatus::Active => write!(f, "Active"),
            LoanStatus::Returned => write!(f, "Returned"),
            LoanStatus::Overdue => write!(f, "Overdue"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{CirculationError, LoanStatus, PaginatedResult};

    #[tokio::test]
    async fn test_should_create_no_copies_error() {
        assert!(matches!(CirculationError::no_copies_available("test"), CirculationError::NoCopiesAvailable{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_out_of_stock_error() {
        assert!(matches!(CirculationError::out_of_stock("test"), CirculationError::OutOfStock{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_already_returned_error() {
        assert!(matches!(CirculationError::already_returned("test"), CirculationError::AlreadyReturned{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_duplicate_key_error() {
        assert!(matches!(CirculationError::duplicate_key("test"), CirculationError::DuplicateKey{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(CirculationError::not_found("test"), CirculationError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_inconsistent_state_error() {
        assert!(matches!(CirculationError::inconsistent_state("test"), CirculationError::InconsistentState{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(CirculationError::validation("test", None), CirculationError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(CirculationError::serialization("test"), CirculationError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_storage_error() {
        assert!(matches!(CirculationError::storage("test"), CirculationError::Storage{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_format_loan_status() {
        let statuses = vec![
            LoanStatus::Active,
            LoanStatus::Returned,
            LoanStatus::Overdue,
        ];
        for status in statuses {
            let str = status.to_string();
            let str_status = LoanStatus::from(str);
            assert_eq!(status, str_status);
        }
    }

    #[tokio::test]
    async fn test_should_default_unknown_status_to_active() {
        assert_eq!(LoanStatus::Active, LoanStatus::from("Emprestado".to_string()));
    }

    #[tokio::test]
    async fn test_should_keep_floor_of_one_page() {
        let res: PaginatedResult<i64> = PaginatedResult::new(1, 10, 0, vec![]);
        assert_eq!(1, res.total_pages);
        assert_eq!(0, res.records.len());
    }

    #[tokio::test]
    async fn test_should_round_total_pages_up() {
        let res: PaginatedResult<i64> = PaginatedResult::new(1, 10, 23, vec![0; 10]);
        assert_eq!(3, res.total_pages);
        assert_eq!(23, res.total_records);
    }
}
