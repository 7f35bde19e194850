//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Checkout rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  till-cli errors (separate crate)                                      │
//! │  └── CliError         - Config, store file and I/O failures            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit status            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product code, amounts)
//! 3. Errors are enum variants, never String
//! 4. A failed operation leaves the register untouched

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Checkout errors.
///
/// Every variant is a distinct kind so callers can match on it; none of them
/// is ever swallowed or replaced by a default value inside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No catalog entry carries the scanned code.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A price (or discounted price) was requested for a product that has no
    /// recorded price.
    ///
    /// ## When This Occurs
    /// - Product is in the catalog but was never given a price
    /// - Only a discount was set for the product
    #[error("Price not defined for product {0}")]
    PriceNotDefined(String),

    /// The total was requested before the purchase was finalized.
    #[error("Purchase is not finalized")]
    PurchaseNotFinalized,

    /// `finalize` was called on a purchase that is already finalized.
    #[error("Purchase is already finalized")]
    AlreadyFinalized,

    /// `finalize` was called on a purchase with no products.
    #[error("Purchase has no products")]
    EmptyPurchase,

    /// The tendered amount does not cover the total.
    ///
    /// ## User Workflow
    /// ```text
    /// Total: $15.00
    ///      │
    ///      ▼
    /// pay($13.00)
    ///      │
    ///      ▼
    /// InsufficientPayment { tendered: $13.00, total: $15.00 }
    ///      │
    ///      ▼
    /// Cashier asks for $2.00 more
    /// ```
    #[error("Insufficient payment: tendered {tendered}, total {total}")]
    InsufficientPayment { tendered: Money, total: Money },

    /// A sum of prices does not fit in the money representation.
    #[error("Amount overflow while summing prices")]
    AmountOverflow,

    /// A product was added to a purchase that is no longer open.
    #[error("Purchase is already finalized, cannot add product {0}")]
    PurchaseAlreadyFinalized(String),

    /// A new purchase was requested while the current one is still unpaid.
    #[error("Current purchase is not settled yet")]
    PurchaseNotSettled,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state is touched, e.g. when a price list is populated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. unparseable amount, bad characters in a code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
