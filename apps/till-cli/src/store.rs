//! # Store File
//!
//! Loads the catalog and price list from TOML.
//!
//! ```toml
//! [[products]]
//! code = "1002A"
//! price_cents = 1000
//! discount_bps = 1000
//!
//! [[products]]
//! code = "1004A"   # scannable, but pricing it fails
//! ```
//!
//! Catalog order is file order. A repeated code is skipped with a warning, so
//! the first entry decides both scanning and pricing. Every code, price and discount is validated
//! before any register sees it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use till_core::{CoreError, Discount, Money, PriceList, Product};

use crate::error::{CliError, CliResult};

/// Raw file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreFile {
    #[serde(default)]
    pub products: Vec<ProductEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntry {
    pub code: String,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default)]
    pub discount_bps: Option<Discount>,
}

/// A validated catalog with its price list.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub catalog: Vec<Product>,
    pub prices: PriceList,
}

impl Store {
    /// Reads and validates a store file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let store = Self::from_toml_str(&contents)?;
        info!(
            ?path,
            products = store.catalog.len(),
            priced = store.prices.len(),
            "Loaded store file"
        );
        Ok(store)
    }

    pub fn from_toml_str(contents: &str) -> CliResult<Self> {
        let file: StoreFile = toml::from_str(contents)?;
        Self::from_file(file)
    }

    fn from_file(file: StoreFile) -> CliResult<Self> {
        let mut store = Store::default();

        for (index, entry) in file.products.into_iter().enumerate() {
            let invalid = |source: CoreError| CliError::InvalidEntry {
                index,
                code: entry.code.clone(),
                source,
            };

            let product = Product::try_new(entry.code.as_str())
                .map_err(|e| invalid(e.into()))?;

            // Later entries must not reprice a product the catalog already has.
            if store.catalog.contains(&product) {
                warn!(index, code = product.code(), "Duplicate code in store file, keeping the first entry");
                continue;
            }

            if let Some(cents) = entry.price_cents {
                store
                    .prices
                    .set_price(&product, Money::from_cents(cents))
                    .map_err(invalid)?;
            }
            if let Some(discount) = entry.discount_bps {
                store.prices.set_discount(&product, discount);
            }

            store.catalog.push(product);
        }

        Ok(store)
    }
}
