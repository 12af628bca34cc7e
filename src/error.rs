//! Error types for the lending engine

use thiserror::Error;
use uuid::Uuid;

/// Stable error codes reported alongside failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchEntity = 2,
    BookUnavailable = 3,
    DurationExceedsRatingLimit = 4,
    LoanLimitReached = 5,
    LoanNotFound = 6,
    AlreadyReturned = 7,
    PersistenceFailure = 8,
    BadValue = 9,
}

/// Main error type for lending operations
#[derive(Error, Debug)]
pub enum LendingError {
    #[error("Book with id {0} is not available")]
    BookUnavailable(Uuid),

    #[error("Requested duration of {requested} days exceeds the {limit} day limit for this rating")]
    DurationExceedsRatingLimit { requested: i64, limit: i64 },

    #[error("User with id {0} has no remaining loan capacity")]
    LoanLimitReached(Uuid),

    #[error("Loan with id {0} not found")]
    LoanNotFound(Uuid),

    #[error("Loan with id {0} was already returned")]
    AlreadyReturned(Uuid),

    #[error("Not found: {0}")]
    EntityNotFound(String),

    #[error("Persistence failure: {0}")]
    Persistence(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl LendingError {
    /// Stable code for the failure, independent of the display message
    pub fn code(&self) -> ErrorCode {
        match self {
            LendingError::BookUnavailable(_) => ErrorCode::BookUnavailable,
            LendingError::DurationExceedsRatingLimit { .. } => ErrorCode::DurationExceedsRatingLimit,
            LendingError::LoanLimitReached(_) => ErrorCode::LoanLimitReached,
            LendingError::LoanNotFound(_) => ErrorCode::LoanNotFound,
            LendingError::AlreadyReturned(_) => ErrorCode::AlreadyReturned,
            LendingError::EntityNotFound(_) => ErrorCode::NoSuchEntity,
            LendingError::Persistence(_) => ErrorCode::PersistenceFailure,
            LendingError::Validation(_) => ErrorCode::BadValue,
        }
    }
}

/// Result type alias for lending operations
pub type LendingResult<T> = Result<T, LendingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        let id = Uuid::new_v4();
        assert_eq!(LendingError::BookUnavailable(id).code(), ErrorCode::BookUnavailable);
        assert_eq!(
            LendingError::DurationExceedsRatingLimit { requested: 40, limit: 31 }.code(),
            ErrorCode::DurationExceedsRatingLimit
        );
        assert_eq!(LendingError::LoanNotFound(id).code() as u32, 6);
        assert_eq!(
            LendingError::Persistence("lost connection".to_string()).code(),
            ErrorCode::PersistenceFailure
        );
    }

    #[test]
    fn test_messages_name_the_entity() {
        let id = Uuid::new_v4();
        let message = LendingError::LoanNotFound(id).to_string();
        assert!(message.contains(&id.to_string()));
    }
}
