//! # Validation Module
//!
//! Field validation and raw-input classification for Bakery POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Session Controller (bakery-cli)                              │
//! │  └── parse_* : raw text → number, or InvalidInput                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE, business rules                                  │
//! │  ├── validate_item_name  (trim, non-empty)                             │
//! │  ├── validate_price      (finite, >= 0)                                │
//! │  └── validate_quantity   (>= 0)                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ItemRepository                                               │
//! │  └── uniqueness of names, ID assignment                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parsing never panics and never uses errors for dispatch: a search token is
//! classified up front with [`classify_token`].

use crate::error::{CoreError, CoreResult, ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use bakery_core::validation::validate_item_name;
///
/// assert_eq!(validate_item_name("  Bun ").unwrap(), "Bun");
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    Ok(name.to_string())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (zero is allowed, free items)
///
/// ## Example
/// ```rust
/// use bakery_core::validation::validate_price;
///
/// assert!(validate_price(2.5).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice { price });
    }

    Ok(price)
}

/// Validates a billing quantity. Zero is allowed and contributes nothing.
pub fn validate_quantity(quantity: i64) -> CoreResult<i64> {
    if quantity < 0 {
        return Err(CoreError::NegativeQuantity { quantity });
    }

    Ok(quantity)
}

// =============================================================================
// Raw Input Parsing
// =============================================================================

/// Parses a price typed at the prompt.
pub fn parse_price(raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();
    raw.parse::<f64>()
        .map_err(|_| ValidationError::invalid_input("price", raw))
}

/// Parses an item ID typed at the prompt.
///
/// Any integer is accepted. One that no item can carry (negative or past
/// `u32::MAX`) comes back as `Ok(None)` so the caller reports it as not
/// found rather than as bad input.
pub fn parse_item_id(raw: &str) -> ValidationResult<Option<u32>> {
    let raw = raw.trim();
    let id = raw
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_input("ID", raw))?;
    Ok(u32::try_from(id).ok())
}

/// Parses a billing quantity typed at the prompt. Negative values parse
/// successfully so billing can reject them with `NegativeQuantity`.
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_err(|_| ValidationError::invalid_input("quantity", raw))
}

// =============================================================================
// Search Token Classification
// =============================================================================

/// What a search token refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchToken {
    /// The token is an integer and matches by ID equality.
    Id(i64),
    /// Anything else matches by case-insensitive name equality.
    Name(String),
}

/// Classifies a search token as an ID or a name.
///
/// Any integer, including a negative one, is treated as an ID. A negative ID
/// simply matches nothing.
///
/// ## Example
/// ```rust
/// use bakery_core::validation::{classify_token, SearchToken};
///
/// assert_eq!(classify_token(" 12 "), SearchToken::Id(12));
/// assert_eq!(classify_token("Bun"), SearchToken::Name("Bun".to_string()));
/// ```
pub fn classify_token(token: &str) -> SearchToken {
    let token = token.trim();
    match token.parse::<i64>().ok() {
        Some(id) => SearchToken::Id(id),
        None => SearchToken::Name(token.to_string()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
