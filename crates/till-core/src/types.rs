//! # Domain Types
//!
//! Value types shared by the price list, the purchase and the register.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ PurchaseStatus  │   │    Payment      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code           │   │  Open           │   │  tendered       │       │
//! │  └─────────────────┘   │  Finalized      │   │  total          │       │
//! │                        │  Paid           │   │  change         │       │
//! │  ┌─────────────────┐   └─────────────────┘   │  paid_at        │       │
//! │  │    Discount     │                         └─────────────────┘       │
//! │  │  ─────────────  │                                                    │
//! │  │  bps (u32)      │                                                    │
//! │  │  1000 = 10%     │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_code, ValidationResult};
use crate::MAX_DISCOUNT_BPS;

// =============================================================================
// Discount
// =============================================================================

/// A discount fraction in basis points.
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so a fraction in [0, 1] maps onto
/// 0..=10000 and discount math stays in integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Discount(u32);

impl Discount {
    /// Creates a discount from basis points.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::types::Discount;
    ///
    /// assert_eq!(Discount::from_bps(1000).unwrap().bps(), 1000); // 10%
    /// assert!(Discount::from_bps(10_001).is_err()); // more than 100%
    /// ```
    pub fn from_bps(bps: u32) -> ValidationResult<Self> {
        if bps > MAX_DISCOUNT_BPS {
            return Err(ValidationError::OutOfRange {
                field: "discount_bps".to_string(),
                min: 0,
                max: i64::from(MAX_DISCOUNT_BPS),
            });
        }
        Ok(Discount(bps))
    }

    /// Creates a discount from a fraction such as `0.1`.
    ///
    /// The fraction is rounded to the nearest basis point.
    pub fn from_fraction(fraction: f64) -> ValidationResult<Self> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ValidationError::OutOfRange {
                field: "discount".to_string(),
                min: 0,
                max: 1,
            });
        }
        Self::from_bps((fraction * f64::from(MAX_DISCOUNT_BPS)).round() as u32)
    }

    /// No discount.
    #[inline]
    pub const fn none() -> Self {
        Discount(0)
    }

    /// Returns the discount in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

impl Default for Discount {
    fn default() -> Self {
        Discount::none()
    }
}

impl TryFrom<u32> for Discount {
    type Error = ValidationError;

    fn try_from(bps: u32) -> Result<Self, Self::Error> {
        Discount::from_bps(bps)
    }
}

impl From<Discount> for u32 {
    fn from(discount: Discount) -> Self {
        discount.0
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product that can be scanned at the register.
///
/// Identity is the code: two `Product` values with the same code are the same
/// catalog entry, which is also how the price list keys them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    code: String,
}

impl Product {
    /// Creates a product without validating the code.
    pub fn new(code: impl Into<String>) -> Self {
        Product { code: code.into() }
    }

    /// Creates a product after validating its code.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::types::Product;
    ///
    /// assert_eq!(Product::try_new("1002A").unwrap().code(), "1002A");
    /// assert!(Product::try_new("  ").is_err());
    /// ```
    pub fn try_new(code: impl Into<String>) -> ValidationResult<Self> {
        let code = code.into();
        validate_code(&code)?;
        Ok(Product { code })
    }

    /// Returns the product code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

// =============================================================================
// Purchase Status
// =============================================================================

/// Lifecycle of a purchase.
///
/// ```text
///   Open ──finalize()──► Finalized ──pay()──► Paid
/// ```
///
/// There is no transition back to `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    /// Products are being scanned.
    #[default]
    Open,
    /// Closed for scanning, total can be computed.
    Finalized,
    /// Total settled, change handed back.
    Paid,
}

impl PurchaseStatus {
    /// True once the purchase has left `Open`.
    #[inline]
    pub const fn is_finalized(&self) -> bool {
        matches!(self, PurchaseStatus::Finalized | PurchaseStatus::Paid)
    }
}

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseStatus::Open => write!(f, "open"),
            PurchaseStatus::Finalized => write!(f, "finalized"),
            PurchaseStatus::Paid => write!(f, "paid"),
        }
    }
}

// =============================================================================
// Payment
// =============================================================================

/// Settlement of a finalized purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Amount the customer handed over.
    pub tendered: Money,
    /// Discounted total at the time of payment.
    pub total: Money,
    /// `tendered - total`, never negative.
    pub change: Money,
    /// When the payment was recorded.
    pub paid_at: DateTime<Utc>,
}

impl Payment {
    /// Builds a payment record stamped with the current time.
    pub fn new(tendered: Money, total: Money) -> Self {
        Payment {
            tendered,
            total,
            change: tendered - total,
            paid_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
