//! # App Error Type
//!
//! Unified error type for inventory commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bakery POS                             │
//! │                                                                         │
//! │  Inventory command                                                     │
//! │  Result<T, AppError>                                                   │
//! │         │                                                               │
//! │         ├── StoreError::StorageRead("...") ──┐                         │
//! │         │                                    ▼                         │
//! │         ├── CoreError::ItemNotFound(7) ───► AppError { code, message } │
//! │         │                                    │                         │
//! │         └── Success                          ▼                         │
//! │                                    Session prints `message` and shows  │
//! │                                    the menu again. Never exits.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bakery_core::{CoreError, ValidationError};
use bakery_store::StoreError;
use thiserror::Error;

/// Error returned from inventory commands.
///
/// `message` is what the cashier sees; `code` is for programmatic checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code:?}] {message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message for the menu
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Item ID does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Store file could not be read or written
    StorageError,

    /// A billing pick was rejected
    BillingError,

    /// Billing was requested with no items in the store
    EmptyStore,

    /// Terminal I/O failure
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates the error for an ID no item carries.
    pub fn item_not_found() -> Self {
        AppError::new(ErrorCode::NotFound, "Item ID not found!")
    }

    /// Creates the error for billing with an empty store.
    pub fn empty_store() -> Self {
        AppError::new(ErrorCode::EmptyStore, "No items available for billing!")
    }
}

/// Converts store errors to app errors.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::StorageRead { path, reason } => {
                tracing::error!(%path, %reason, "Store read failed");
                AppError::new(ErrorCode::StorageError, format!("Error reading file: {}", reason))
            }
            StoreError::StorageWrite { path, reason } => {
                tracing::error!(%path, %reason, "Store write failed");
                AppError::new(ErrorCode::StorageError, format!("Error writing file: {}", reason))
            }
        }
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(_) => AppError::item_not_found(),
            CoreError::NegativeQuantity { .. } => {
                AppError::new(ErrorCode::BillingError, "Quantity cannot be negative!")
            }
            CoreError::IdSpaceExhausted { .. } => {
                AppError::new(ErrorCode::ValidationError, "No item IDs left to assign!")
            }
            CoreError::SessionClosed => {
                AppError::new(ErrorCode::BillingError, "Billing session is already closed!")
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let message = match err {
            ValidationError::EmptyName => "Item name cannot be empty!".to_string(),
            ValidationError::DuplicateName { .. } => "Item already exists!".to_string(),
            ValidationError::InvalidPrice { .. } => "Price cannot be negative!".to_string(),
            ValidationError::InvalidInput { field, .. } => format!("Invalid {}!", field),
        };
        AppError::new(ErrorCode::ValidationError, message)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::Internal, format!("Terminal I/O failed: {}", err))
    }
}

/// Result type for inventory commands.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_menu_messages() {
        let err: AppError = CoreError::ItemNotFound(9).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Item ID not found!");

        let err: AppError = CoreError::Validation(ValidationError::DuplicateName {
            name: "Bun".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Item already exists!");

        let err: AppError = CoreError::IdSpaceExhausted { max: u32::MAX }.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "No item IDs left to assign!");
    }

    #[test]
    fn test_invalid_input_names_the_field() {
        let err: AppError = ValidationError::invalid_input("ID", "abc").into();
        assert_eq!(err.message, "Invalid ID!");
    }

    #[test]
    fn test_store_errors_map_to_storage_code() {
        let err: AppError = StoreError::StorageRead {
            path: "bakery.json".to_string(),
            reason: "bad json".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(err.message, "Error reading file: bad json");
    }
}
