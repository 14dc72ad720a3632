//! # Error Types
//!
//! Domain-specific error types for bakery-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bakery-core errors (this file)                                        │
//! │  ├── CoreError        - Lookup and billing failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bakery-store errors (separate crate)                                  │
//! │  └── StoreError       - StorageRead / StorageWrite                     │
//! │                                                                         │
//! │  bakery-cli errors (in app)                                            │
//! │  └── AppError         - What the menu prints                           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → console message        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is recoverable. None of them should ever end the process.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// No item carries the requested ID.
    ///
    /// ## When This Occurs
    /// - Update or delete with an unknown ID
    /// - A billing pick names an unknown ID
    #[error("Item not found: {0}")]
    ItemNotFound(u32),

    /// A billing pick asked for a negative quantity.
    #[error("Quantity cannot be negative: {quantity}")]
    NegativeQuantity { quantity: i64 },

    /// The highest stored ID is `u32::MAX`, so no new ID can be assigned.
    ///
    /// ## When This Occurs
    /// - A hand-edited store file carrying a huge ID
    #[error("No item IDs left after {max}")]
    IdSpaceExhausted { max: u32 },

    /// A pick was submitted after the billing session was closed.
    #[error("Billing session is already closed")]
    SessionClosed,

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are raised before any mutation happens, so the repository is
/// untouched whenever one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Item name is empty after trimming.
    #[error("Item name cannot be empty")]
    EmptyName,

    /// Another item already uses this name (case-insensitive).
    #[error("Item '{name}' already exists")]
    DuplicateName { name: String },

    /// Price is negative or not a finite number.
    #[error("Price cannot be negative: {price}")]
    InvalidPrice { price: f64 },

    /// A numeric field typed by the user could not be parsed.
    #[error("Invalid {field}: '{value}'")]
    InvalidInput { field: String, value: String },
}

impl ValidationError {
    /// Creates an InvalidInput error for a field and its raw text.
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::InvalidInput {
            field: field.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::ItemNotFound(99).to_string(), "Item not found: 99");
        assert_eq!(
            CoreError::NegativeQuantity { quantity: -1 }.to_string(),
            "Quantity cannot be negative: -1"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::DuplicateName {
            name: "croissant".to_string(),
        };
        assert_eq!(err.to_string(), "Item 'croissant' already exists");

        let err = ValidationError::invalid_input("price", "abc");
        assert_eq!(err.to_string(), "Invalid price: 'abc'");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::EmptyName.into();
        assert!(matches!(core_err, CoreError::Validation(ValidationError::EmptyName)));
        // Wrapped errors keep the inner message
        assert_eq!(core_err.to_string(), "Item name cannot be empty");
    }
}
