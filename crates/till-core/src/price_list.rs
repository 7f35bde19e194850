//! # Price List
//!
//! Prices and optional discounts, keyed by product code.
//!
//! ## Lookup Rules
//! ```text
//! price_of(p)            = prices[p]                        or PriceNotDefined
//! discounted_price_of(p) = prices[p] - prices[p] × disc[p]  or PriceNotDefined
//!                                      (disc[p] = 0 when unset)
//! ```
//!
//! A discount may be recorded for a product that has no price. It is
//! harmless until that product's price is asked for, which still fails.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Discount, Product};
use crate::validation::validate_price;

/// Maps products to prices and discounts.
///
/// Keys are product codes, so any `Product` with the same code finds the
/// same entry.
#[derive(Debug, Clone, Default)]
pub struct PriceList {
    prices: HashMap<String, Money>,
    discounts: HashMap<String, Discount>,
}

impl PriceList {
    /// Creates an empty price list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the undiscounted price of a product.
    ///
    /// # Errors
    ///
    /// [`CoreError::PriceNotDefined`] if no price was set for the product.
    pub fn price_of(&self, product: &Product) -> CoreResult<Money> {
        self.prices
            .get(product.code())
            .copied()
            .ok_or_else(|| CoreError::PriceNotDefined(product.code().to_string()))
    }

    /// Returns the price after the product's discount, if any.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Discount, Money, PriceList, Product};
    ///
    /// let coffee = Product::new("1002A");
    /// let mut prices = PriceList::new();
    /// prices.set_price(&coffee, Money::from_cents(1000)).unwrap();
    /// prices.set_discount(&coffee, Discount::from_bps(1000).unwrap());
    ///
    /// assert_eq!(prices.discounted_price_of(&coffee).unwrap().cents(), 900);
    /// ```
    ///
    /// # Errors
    ///
    /// [`CoreError::PriceNotDefined`] if no price was set for the product.
    /// A missing discount is never an error.
    pub fn discounted_price_of(&self, product: &Product) -> CoreResult<Money> {
        let price = self.price_of(product)?;
        let discount = self.discount_of(product);
        let discounted = price.apply_discount(discount);

        debug!(
            code = product.code(),
            %price,
            %discount,
            %discounted,
            "Resolved discounted price"
        );
        Ok(discounted)
    }

    /// Returns the discount recorded for a product, zero when none was set.
    pub fn discount_of(&self, product: &Product) -> Discount {
        self.discounts
            .get(product.code())
            .copied()
            .unwrap_or_default()
    }

    /// Records or overwrites the price of a product.
    ///
    /// # Errors
    ///
    /// [`CoreError::Validation`] if the price is negative. The list is left
    /// unchanged.
    pub fn set_price(&mut self, product: &Product, price: Money) -> CoreResult<()> {
        validate_price(price)?;
        self.prices.insert(product.code().to_string(), price);
        Ok(())
    }

    /// Records or overwrites the discount of a product.
    pub fn set_discount(&mut self, product: &Product, discount: Discount) {
        self.discounts.insert(product.code().to_string(), discount);
    }

    /// True if a price was recorded for the product.
    pub fn has_price(&self, product: &Product) -> bool {
        self.prices.contains_key(product.code())
    }

    /// Number of priced products.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// True if no product has a price yet.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn priced(code: &str, cents: i64) -> (Product, PriceList) {
        let product = Product::new(code);
        let mut prices = PriceList::new();
        prices.set_price(&product, Money::from_cents(cents)).unwrap();
        (product, prices)
    }

    #[test]
    fn test_price_of() {
        let (product, prices) = priced("1002A", 1000);
        assert_eq!(prices.price_of(&product).unwrap().cents(), 1000);
        assert!(prices.has_price(&product));
        assert_eq!(prices.len(), 1);
    }

    #[test]
    fn test_unpriced_product_fails_both_lookups() {
        let prices = PriceList::new();
        let product = Product::new("1004A");

        assert_eq!(
            prices.price_of(&product),
            Err(CoreError::PriceNotDefined("1004A".to_string()))
        );
        assert_eq!(
            prices.discounted_price_of(&product),
            Err(CoreError::PriceNotDefined("1004A".to_string()))
        );
        assert!(prices.is_empty());
    }

    #[test]
    fn test_lookup_is_by_code_not_instance() {
        let (_, prices) = priced("1002A", 1000);
        let other_instance = Product::new("1002A");
        assert_eq!(prices.price_of(&other_instance).unwrap().cents(), 1000);
    }

    #[test]
    fn test_discounted_price_defaults_to_no_discount() {
        let (product, prices) = priced("1002A", 1000);
        assert_eq!(prices.discount_of(&product), Discount::none());
        assert_eq!(
            prices.discounted_price_of(&product).unwrap(),
            prices.price_of(&product).unwrap()
        );
    }

    #[test]
    fn test_discounted_price() {
        let (product, mut prices) = priced("1002A", 1000);
        prices.set_discount(&product, Discount::from_fraction(0.1).unwrap());
        assert_eq!(prices.discounted_price_of(&product).unwrap().cents(), 900);

        prices.set_discount(&product, Discount::from_bps(10_000).unwrap());
        assert!(prices.discounted_price_of(&product).unwrap().is_zero());
    }

    #[test]
    fn test_set_price_overwrites() {
        let (product, mut prices) = priced("1002A", 1000);
        prices.set_price(&product, Money::from_cents(1200)).unwrap();
        assert_eq!(prices.price_of(&product).unwrap().cents(), 1200);
        assert_eq!(prices.len(), 1);
    }

    #[test]
    fn test_negative_price_rejected_and_list_unchanged() {
        let (product, mut prices) = priced("1002A", 1000);
        let err = prices
            .set_price(&product, Money::from_cents(-1))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustNotBeNegative { .. })
        ));
        assert_eq!(prices.price_of(&product).unwrap().cents(), 1000);
    }

    #[test]
    fn test_discount_without_price_is_allowed() {
        let product = Product::new("1004A");
        let mut prices = PriceList::new();
        prices.set_discount(&product, Discount::from_bps(500).unwrap());

        assert_eq!(prices.discount_of(&product).bps(), 500);
        assert!(matches!(
            prices.discounted_price_of(&product),
            Err(CoreError::PriceNotDefined(_))
        ));
    }
}
