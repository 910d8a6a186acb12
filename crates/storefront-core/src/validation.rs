//! # Validation Module
//!
//! The two quantity checks the domain enforces.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation                     Check                  On failure        │
//! │  ─────────────────────────     ────────────────────   ───────────────   │
//! │  Product::update_quantity(q)   validate_stock_level   Negative          │
//! │  Customer::place_order(p, q)   validate_quantity      Negative          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Names, prices and catalog contents are deliberately left unchecked.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an order quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0); a zero-quantity line is allowed
///
/// ```rust
/// use storefront_core::validation::validate_quantity;
///
/// assert!(validate_quantity(2).is_ok());
/// assert!(validate_quantity(0).is_ok());
/// assert!(validate_quantity(-1).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
            value: qty,
        });
    }

    Ok(())
}

/// Validates a new available-stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero means sold out
pub fn validate_stock_level(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "available_quantity".to_string(),
            value: qty,
        });
    }

    Ok(())
}
