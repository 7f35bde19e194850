//! # Purchase
//!
//! The ordered list of scanned products and its finalize-once lifecycle.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌────────┐  finalize()   ┌───────────┐  settle()   ┌────────┐         │
//! │   │  Open  │──────────────►│ Finalized │────────────►│  Paid  │         │
//! │   └────────┘  (non-empty)  └───────────┘             └────────┘         │
//! │       │                          │                       │              │
//! │    add() ok            add() → PurchaseAlreadyFinalized  │              │
//! │                        finalize() → AlreadyFinalized ◄───┘              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::{Payment, Product, PurchaseStatus};

/// A single customer's purchase.
#[derive(Debug, Clone, Serialize)]
pub struct Purchase {
    id: Uuid,
    products: Vec<Product>,
    status: PurchaseStatus,
    payment: Option<Payment>,
    created_at: DateTime<Utc>,
    finalized_at: Option<DateTime<Utc>>,
}

impl Purchase {
    /// Creates an empty, open purchase.
    pub fn new() -> Self {
        Purchase {
            id: Uuid::new_v4(),
            products: Vec::new(),
            status: PurchaseStatus::Open,
            payment: None,
            created_at: Utc::now(),
            finalized_at: None,
        }
    }

    /// Unique identifier (UUID v4), fixed at creation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Scanned products in scan order, duplicates included.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of scanned products, duplicates counted.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True if nothing has been scanned yet.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Current lifecycle state.
    pub fn status(&self) -> PurchaseStatus {
        self.status
    }

    /// True once `finalize` has succeeded. Never reverts.
    pub fn is_finalized(&self) -> bool {
        self.status.is_finalized()
    }

    /// True once a payment has been recorded.
    pub fn is_paid(&self) -> bool {
        self.status == PurchaseStatus::Paid
    }

    /// The recorded settlement, if the purchase has been paid.
    pub fn payment(&self) -> Option<&Payment> {
        self.payment.as_ref()
    }

    /// When the purchase was opened.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When `finalize` succeeded, if it has.
    pub fn finalized_at(&self) -> Option<DateTime<Utc>> {
        self.finalized_at
    }

    /// Appends a product.
    ///
    /// # Errors
    ///
    /// [`CoreError::PurchaseAlreadyFinalized`] once the purchase has been
    /// finalized.
    pub fn add(&mut self, product: Product) -> CoreResult<()> {
        if self.is_finalized() {
            return Err(CoreError::PurchaseAlreadyFinalized(
                product.code().to_string(),
            ));
        }
        self.products.push(product);
        Ok(())
    }

    /// Closes the purchase for scanning.
    ///
    /// # Errors
    ///
    /// - [`CoreError::AlreadyFinalized`] if it was finalized before (checked first)
    /// - [`CoreError::EmptyPurchase`] if nothing was added
    pub fn finalize(&mut self) -> CoreResult<()> {
        if self.is_finalized() {
            return Err(CoreError::AlreadyFinalized);
        }
        if self.products.is_empty() {
            return Err(CoreError::EmptyPurchase);
        }
        self.status = PurchaseStatus::Finalized;
        self.finalized_at = Some(Utc::now());
        Ok(())
    }

    /// Records a payment. A second payment replaces the first.
    pub(crate) fn settle(&mut self, payment: Payment) -> CoreResult<()> {
        if !self.is_finalized() {
            return Err(CoreError::PurchaseNotFinalized);
        }
        self.payment = Some(payment);
        self.status = PurchaseStatus::Paid;
        Ok(())
    }
}

impl Default for Purchase {
    fn default() -> Self {
        Self::new()
    }
}
