//! # Error Types
//!
//! Domain error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError                                                              │
//! │  ├── InsufficientQuantity  - place_order asked for more than available  │
//! │  ├── ProductNotFound       - scripted lookup by name missed             │
//! │  └── Validation            - wraps ValidationError                      │
//! │                                                                         │
//! │  ValidationError                                                        │
//! │  └── Negative              - order quantity or stock level update < 0   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failing operation leaves all state untouched, so an `Err` can be
//! logged and discarded without any cleanup.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors returned by catalog, customer and order operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Requested more units than the product currently has available.
    ///
    /// ## User Workflow
    /// ```text
    /// place_order(Shoes, 2)
    ///      │
    ///      ▼
    /// Check availability: available=1
    ///      │
    ///      ▼
    /// InsufficientQuantity { product: "Shoes", available: 1, requested: 2 }
    ///      │
    ///      ▼
    /// Output: "Insufficient quantity of Shoes"
    /// ```
    #[error("Insufficient quantity of {product}")]
    InsufficientQuantity {
        product: String,
        available: i64,
        requested: i64,
    },

    /// No product with this name is in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Value must not be below zero.
    #[error("{field} cannot be negative (got {value})")]
    Negative { field: String, value: i64 },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
