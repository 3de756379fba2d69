use async_trait::async_trait;
use crate::core::library::CirculationError;

#[derive(Debug)]
pub enum CommandError {
    NoCopiesAvailable {
        message: String,
    },
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

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<CirculationError> for CommandError {
    fn from(other: CirculationError) -> Self {
        match other {
            CirculationError::NoCopiesAvailable { message } => {
                CommandError::NoCopiesAvailable { message }
            }
            CirculationError::OutOfStock { message } => {
                CommandError::OutOfStock { message }
            }
            CirculationError::AlreadyReturned { message } => {
                CommandError::AlreadyReturned { message }
            }
            CirculationError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            CirculationError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CirculationError::InconsistentState { message } => {
                CommandError::InconsistentState { message }
            }
            CirculationError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            CirculationError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            CirculationError::Storage { message } => {
                CommandError::Storage { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::CirculationError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::NoCopiesAvailable { message: "test".to_string() };
        let _ = CommandError::AlreadyReturned { message: "test".to_string() };
        let _ = CommandError::DuplicateKey { message: "test".to_string() };
        let _ = CommandError::NotFound { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Serialization { message: "test".to_string() };
    }

    #[tokio::test]
    async fn test_should_map_circulation_error() {
        assert!(matches!(CommandError::from(CirculationError::no_copies_available("test")),
            CommandError::NoCopiesAvailable { message: _ }));
        assert!(matches!(CommandError::from(CirculationError::already_returned("test")),
            CommandError::AlreadyReturned { message: _ }));
        assert!(matches!(CommandError::from(CirculationError::not_found("test")),
            CommandError::NotFound { message: _ }));
    }
}
