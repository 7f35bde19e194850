//! # till-core: Checkout Logic for Till
//!
//! Scanning products by code, accumulating a purchase, pricing it with
//! optional per-product discounts, finalizing it, and settling payment.
//! Everything here is pure and in-memory.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Till Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    till-cli                                     │   │
//! │  │    store file ──► catalog + PriceList ──► checkout command      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ price_list│  │ purchase  │  │ register  │  │   │
//! │  │   │  Product  │  │ PriceList │  │ Purchase  │  │ Register  │  │   │
//! │  │   │  Discount │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Discount, PurchaseStatus, Payment
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`price_list`] - Prices and discounts keyed by product code
//! - [`purchase`] - Scanned products and the finalize-once lifecycle
//! - [`register`] - Catalog lookup, subtotal, total, payment
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{CoreError, Discount, Money, PriceList, Product, Register};
//!
//! let catalog = vec![Product::new("1002A")];
//! let mut prices = PriceList::new();
//! prices.set_price(&catalog[0], Money::from_cents(1000)).unwrap();
//! prices.set_discount(&catalog[0], Discount::from_bps(1000).unwrap());
//!
//! let mut register = Register::new(&catalog, &prices);
//! register.add_product("1002A").unwrap();
//! assert_eq!(register.total(), Err(CoreError::PurchaseNotFinalized));
//!
//! register.finalize_purchase().unwrap();
//! assert_eq!(register.total().unwrap().cents(), 900);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod price_list;
pub mod purchase;
pub mod register;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use price_list::PriceList;
pub use purchase::Purchase;
pub use register::Register;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// A discount of 10000 basis points is the whole price.
pub const MAX_DISCOUNT_BPS: u32 = 10_000;

/// Longest accepted product code.
pub const MAX_CODE_LEN: usize = 50;
