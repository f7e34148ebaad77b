//! # Error Types
//!
//! Domain-specific error types for beerstock-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  beerstock-core errors (this file)                                     │
//! │  ├── StockError       - What StockService operations fail with         │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── RepositoryError  - Storage failures behind BeerRepository         │
//! │                                                                         │
//! │  beerstock-db errors (separate crate)                                  │
//! │  └── DbError          - Converted into RepositoryError                 │
//! │                                                                         │
//! │  Flow: DbError → RepositoryError → StockError → caller (ErrorCode)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Lookup Key
// =============================================================================

/// The key a failed lookup was made with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Id(i64),
    Name(String),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Id(id) => write!(f, "id {}", id),
            Lookup::Name(name) => write!(f, "name {}", name),
        }
    }
}

// =============================================================================
// Stock Error
// =============================================================================

/// Errors returned by [`StockService`](crate::service::StockService).
///
/// Every variant except `Repository` is an expected, caller-recoverable
/// condition. None of them are retried by the service.
#[derive(Debug, Error)]
pub enum StockError {
    /// No beer matches the name or id a read, delete or stock move needs.
    #[error("Beer with {by} not found")]
    NotFound { by: Lookup },

    /// A beer with the candidate's name is already stored.
    #[error("Beer with name {name} already registered")]
    AlreadyRegistered { name: String },

    /// Incrementing would push the quantity above the beer's capacity.
    ///
    /// ## User Workflow
    /// ```text
    /// Skol: quantity 45, max 50
    ///      │
    ///      ▼
    /// increment(id, 10) → 45 + 10 = 55 > 50
    ///      │
    ///      ▼
    /// StockExceeded { quantity: 45, amount: 10, max: 50 }
    ///      │
    ///      ▼
    /// Stored quantity stays 45
    /// ```
    #[error("Beer {id}: adding {amount} to {quantity} exceeds max stock capacity of {max}")]
    StockExceeded {
        id: i64,
        quantity: i64,
        amount: i64,
        max: i64,
    },

    /// Decrementing would leave a negative quantity.
    #[error("Beer {id}: removing {amount} leaves negative stock, only {quantity} available")]
    StockUnderflow { id: i64, quantity: i64, amount: i64 },

    /// Candidate or amount failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The repository failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl StockError {
    /// Creates a NotFound error for an id lookup.
    pub fn not_found_id(id: i64) -> Self {
        StockError::NotFound { by: Lookup::Id(id) }
    }

    /// Creates a NotFound error for a name lookup.
    pub fn not_found_name(name: impl Into<String>) -> Self {
        StockError::NotFound {
            by: Lookup::Name(name.into()),
        }
    }

    /// Machine-readable code for translating the error into a response.
    pub fn code(&self) -> ErrorCode {
        match self {
            StockError::NotFound { .. } => ErrorCode::NotFound,
            StockError::AlreadyRegistered { .. } => ErrorCode::AlreadyRegistered,
            StockError::StockExceeded { .. } => ErrorCode::StockExceeded,
            StockError::StockUnderflow { .. } => ErrorCode::StockUnderflow,
            StockError::Validation(_) => ErrorCode::ValidationError,
            StockError::Repository(_) => ErrorCode::StorageError,
        }
    }

    /// Whether the caller can fix the request and try again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, StockError::Repository(_))
    }
}

/// Error codes for caller-facing responses.
///
/// ```json
/// { "code": "STOCK_EXCEEDED", "message": "Beer 1: adding 10 to 45 ..." }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Lookup failed (404)
    NotFound,
    /// Duplicate name (409)
    AlreadyRegistered,
    /// Capacity ceiling hit (422)
    StockExceeded,
    /// Stock floor hit (422)
    StockUnderflow,
    /// Input validation failed (400)
    ValidationError,
    /// Storage failed (500)
    StorageError,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These run before any repository call, so a rejected candidate never
/// touches storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Field is assigned by storage and must not be supplied.
    #[error("{field} is assigned on creation and must not be set")]
    MustBeAbsent { field: String },
}

// =============================================================================
// Repository Error
// =============================================================================

/// Failures reported by a [`BeerRepository`](crate::repository::BeerRepository).
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A write collided with a uniqueness rule (e.g. duplicate name).
    #[error("Storage conflict: {0}")]
    Conflict(String),

    /// Storage cannot be reached right now.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Anything else.
    #[error("Storage failure: {0}")]
    Internal(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for StockService results.
pub type StockResult<T> = Result<T, StockError>;

/// Convenience type alias for repository results.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StockError::StockExceeded {
            id: 1,
            quantity: 45,
            amount: 10,
            max: 50,
        };
        assert_eq!(
            err.to_string(),
            "Beer 1: adding 10 to 45 exceeds max stock capacity of 50"
        );

        assert_eq!(
            StockError::not_found_name("Skol").to_string(),
            "Beer with name Skol not found"
        );
        assert_eq!(
            StockError::not_found_id(7).to_string(),
            "Beer with id 7 not found"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "max".to_string(),
            min: 1,
            max: 500,
        };
        assert_eq!(err.to_string(), "max must be between 1 and 500");
    }

    #[test]
    fn test_validation_converts_to_stock_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "amount".to_string(),
        };
        let stock_err: StockError = validation_err.into();
        assert!(matches!(stock_err, StockError::Validation(_)));
        assert_eq!(stock_err.code(), ErrorCode::ValidationError);
    }

    #[test]
    fn test_only_storage_failures_are_unrecoverable() {
        let storage: StockError = RepositoryError::Unavailable("pool closed".into()).into();
        assert!(!storage.is_recoverable());
        assert_eq!(storage.code(), ErrorCode::StorageError);

        let duplicate = StockError::AlreadyRegistered {
            name: "Skol".into(),
        };
        assert!(duplicate.is_recoverable());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::StockUnderflow).unwrap();
        assert_eq!(json, "\"STOCK_UNDERFLOW\"");
    }
}
