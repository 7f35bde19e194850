//! # Register
//!
//! Orchestrates a checkout: scans codes against the catalog, feeds the
//! current purchase, and prices it through the price list.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Register Operations                              │
//! │                                                                         │
//! │  add_product("1002A")                                                  │
//! │       │                                                                 │
//! │       ├── scan() ──► catalog lookup ──► ProductNotFound?               │
//! │       │                                                                 │
//! │       └── purchase.add(product)                                        │
//! │                                                                         │
//! │  subtotal() ──► Σ price_of(p)             (any time)                   │
//! │                                                                         │
//! │  finalize_purchase() ──► EmptyPurchase / AlreadyFinalized?             │
//! │                                                                         │
//! │  total() ──► Σ discounted_price_of(p)     (finalized only)             │
//! │                                                                         │
//! │  pay(amount) ──► amount - total           InsufficientPayment?         │
//! │                                                                         │
//! │  new_purchase() ──► swap in a fresh purchase (paid only)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The catalog and price list are borrowed collaborators; the register only
//! owns the purchase slot.

use std::mem;

use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::price_list::PriceList;
use crate::purchase::Purchase;
use crate::types::{Payment, Product};

/// A checkout register bound to a catalog and a price list.
#[derive(Debug)]
pub struct Register<'a> {
    catalog: &'a [Product],
    price_list: &'a PriceList,
    purchase: Purchase,
}

impl<'a> Register<'a> {
    /// Creates a register with an empty, open purchase.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Money, PriceList, Product, Register};
    ///
    /// let catalog = vec![Product::new("1002A"), Product::new("1003A")];
    /// let mut prices = PriceList::new();
    /// prices.set_price(&catalog[0], Money::from_cents(1000)).unwrap();
    /// prices.set_price(&catalog[1], Money::from_cents(500)).unwrap();
    ///
    /// let mut register = Register::new(&catalog, &prices);
    /// register.add_product("1002A").unwrap();
    /// register.add_product("1003A").unwrap();
    /// register.finalize_purchase().unwrap();
    ///
    /// let change = register.pay(Money::from_cents(2000)).unwrap();
    /// assert_eq!(change.cents(), 500);
    /// ```
    pub fn new(catalog: &'a [Product], price_list: &'a PriceList) -> Self {
        Register {
            catalog,
            price_list,
            purchase: Purchase::new(),
        }
    }

    /// Looks a code up in the catalog. The first match wins when the catalog
    /// holds duplicates.
    ///
    /// # Errors
    ///
    /// [`CoreError::ProductNotFound`] if no product has this code.
    pub fn scan(&self, code: &str) -> CoreResult<&'a Product> {
        match self.catalog.iter().find(|p| p.code() == code) {
            Some(product) => {
                debug!(code, "Scanned product");
                Ok(product)
            }
            None => {
                warn!(code, "Scanned code is not in the catalog");
                Err(CoreError::ProductNotFound(code.to_string()))
            }
        }
    }

    /// Scans a code and adds the product to the current purchase.
    ///
    /// # Errors
    ///
    /// - [`CoreError::ProductNotFound`] from [`Register::scan`]
    /// - [`CoreError::PurchaseAlreadyFinalized`] if the purchase is closed
    pub fn add_product(&mut self, code: &str) -> CoreResult<()> {
        let product = self.scan(code)?;
        self.purchase.add(product.clone())?;
        debug!(
            code,
            purchase_id = %self.purchase.id(),
            items = self.purchase.len(),
            "Added product to purchase"
        );
        Ok(())
    }

    pub fn current_purchase(&self) -> &Purchase {
        &self.purchase
    }

    /// Sum of undiscounted prices. Zero for an empty purchase.
    ///
    /// # Errors
    ///
    /// - [`CoreError::PriceNotDefined`] if any scanned product has no price
    /// - [`CoreError::AmountOverflow`] if the sum does not fit
    pub fn subtotal(&self) -> CoreResult<Money> {
        self.sum_prices(|p| self.price_list.price_of(p))
    }

    /// Closes the current purchase for scanning.
    ///
    /// # Errors
    ///
    /// [`CoreError::EmptyPurchase`] or [`CoreError::AlreadyFinalized`].
    pub fn finalize_purchase(&mut self) -> CoreResult<()> {
        self.purchase.finalize()?;
        info!(
            purchase_id = %self.purchase.id(),
            items = self.purchase.len(),
            "Purchase finalized"
        );
        Ok(())
    }

    /// Sum of discounted prices.
    ///
    /// # Errors
    ///
    /// - [`CoreError::PurchaseNotFinalized`] before [`Register::finalize_purchase`]
    /// - [`CoreError::PriceNotDefined`] if any scanned product has no price
    /// - [`CoreError::AmountOverflow`] if the sum does not fit
    pub fn total(&self) -> CoreResult<Money> {
        if !self.purchase.is_finalized() {
            return Err(CoreError::PurchaseNotFinalized);
        }
        self.sum_prices(|p| self.price_list.discounted_price_of(p))
    }

    fn sum_prices(&self, price: impl Fn(&Product) -> CoreResult<Money>) -> CoreResult<Money> {
        self.purchase
            .products()
            .iter()
            .try_fold(Money::zero(), |acc, p| {
                acc.checked_add(price(p)?).ok_or(CoreError::AmountOverflow)
            })
    }

    /// Settles the purchase and returns the change.
    ///
    /// Paying again re-tenders: the total is recomputed and the recorded
    /// payment replaced.
    ///
    /// # Errors
    ///
    /// - Anything [`Register::total`] fails with
    /// - [`CoreError::InsufficientPayment`] if `amount` is below the total
    pub fn pay(&mut self, amount: Money) -> CoreResult<Money> {
        let total = self.total()?;
        if amount < total {
            warn!(tendered = %amount, %total, "Insufficient payment");
            return Err(CoreError::InsufficientPayment {
                tendered: amount,
                total,
            });
        }

        let payment = Payment::new(amount, total);
        let change = payment.change;
        self.purchase.settle(payment)?;

        info!(
            purchase_id = %self.purchase.id(),
            tendered = %amount,
            %total,
            %change,
            "Purchase paid"
        );
        Ok(change)
    }

    /// Starts a fresh purchase and hands back the settled one.
    ///
    /// # Errors
    ///
    /// [`CoreError::PurchaseNotSettled`] unless the current purchase is paid.
    pub fn new_purchase(&mut self) -> CoreResult<Purchase> {
        if !self.purchase.is_paid() {
            return Err(CoreError::PurchaseNotSettled);
        }
        let settled = mem::replace(&mut self.purchase, Purchase::new());
        info!(
            settled_id = %settled.id(),
            purchase_id = %self.purchase.id(),
            "Started new purchase"
        );
        Ok(settled)
    }
}
