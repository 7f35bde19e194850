//! # Commands
//!
//! Each command renders to any `Write` so tests can capture the output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use tracing::info;

use till_core::{Money, PurchaseStatus, Register};

use crate::error::CliResult;
use crate::store::Store;

/// Lists every catalog product with its pricing.
pub fn catalog(store: &Store, out: &mut impl Write) -> CliResult<()> {
    writeln!(out, "{:<12} {:>10} {:>9} {:>10}", "CODE", "PRICE", "DISCOUNT", "NET")?;

    for product in &store.catalog {
        let discount = store.prices.discount_of(product);
        match store.prices.price_of(product) {
            Ok(price) => writeln!(
                out,
                "{:<12} {:>10} {:>9} {:>10}",
                product.code(),
                price.to_string(),
                discount.to_string(),
                price.apply_discount(discount).to_string(),
            )?,
            Err(_) => writeln!(
                out,
                "{:<12} {:>10} {:>9} {:>10}",
                product.code(),
                "-",
                discount.to_string(),
                "-"
            )?,
        }
    }

    Ok(())
}

/// What a checkout run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub purchase_id: String,
    pub items: Vec<String>,
    pub subtotal: Money,
    pub total: Money,
    pub tendered: Option<Money>,
    pub change: Option<Money>,
    pub status: PurchaseStatus,
    pub started_at: DateTime<Utc>,
    pub finalized_at: Option<DateTime<Utc>>,
}

/// Scans every code, finalizes, and pays when an amount was tendered.
///
/// The first domain error aborts the run and is returned as-is.
pub fn checkout(store: &Store, scans: &[String], tendered: Option<Money>) -> CliResult<CheckoutSummary> {
    let mut register = Register::new(&store.catalog, &store.prices);

    for code in scans {
        register.add_product(code)?;
    }

    let subtotal = register.subtotal()?;
    register.finalize_purchase()?;
    let total = register.total()?;

    let change = match tendered {
        Some(amount) => Some(register.pay(amount)?),
        None => None,
    };

    let purchase = register.current_purchase();
    info!(purchase_id = %purchase.id(), status = %purchase.status(), "Checkout complete");

    Ok(CheckoutSummary {
        purchase_id: purchase.id().to_string(),
        items: purchase
            .products()
            .iter()
            .map(|p| p.code().to_string())
            .collect(),
        subtotal,
        total,
        tendered,
        change,
        status: purchase.status(),
        started_at: purchase.created_at(),
        finalized_at: purchase.finalized_at(),
    })
}

/// Writes a summary as plain text or pretty JSON.
pub fn render(summary: &CheckoutSummary, json: bool, out: &mut impl Write) -> CliResult<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, summary)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Purchase {}", summary.purchase_id)?;
    writeln!(out, "Started:  {}", summary.started_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    for code in &summary.items {
        writeln!(out, "  {code}")?;
    }
    writeln!(out, "Subtotal: {}", summary.subtotal)?;
    writeln!(out, "Total:    {}", summary.total)?;
    if let (Some(tendered), Some(change)) = (summary.tendered, summary.change) {
        writeln!(out, "Tendered: {tendered}")?;
        writeln!(out, "Change:   {change}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use till_core::CoreError;

    fn store() -> Store {
        Store::from_toml_str(
            r#"
            [[products]]
            code = "1002A"
            price_cents = 1000
            discount_bps = 1000

            [[products]]
            code = "1003A"
            price_cents = 500

            [[products]]
            code = "1004A"
            "#,
        )
        .unwrap()
    }

    fn scans(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_catalog_listing() {
        let mut out = Vec::new();
        catalog(&store(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("1002A"));
        assert!(lines[1].contains("$10.00"));
        assert!(lines[1].contains("10.00%"));
        assert!(lines[1].ends_with("$9.00"));
        assert!(lines[3].starts_with("1004A"));
        assert!(lines[3].ends_with('-'));
    }

    #[test]
    fn test_checkout_with_payment() {
        let summary = checkout(&store(), &scans(&["1002A", "1003A"]), Some(Money::from_cents(2000))).unwrap();

        assert_eq!(summary.items, vec!["1002A", "1003A"]);
        assert_eq!(summary.subtotal, Money::from_cents(1500));
        assert_eq!(summary.total, Money::from_cents(1400));
        assert_eq!(summary.change, Some(Money::from_cents(600)));
        assert_eq!(summary.status, PurchaseStatus::Paid);

        let finalized_at = summary.finalized_at.unwrap();
        assert!(summary.started_at <= finalized_at);
    }

    #[test]
    fn test_checkout_without_payment_stays_finalized() {
        let summary = checkout(&store(), &scans(&["1003A"]), None).unwrap();
        assert_eq!(summary.status, PurchaseStatus::Finalized);
        assert_eq!(summary.change, None);
    }

    #[test]
    fn test_checkout_errors_surface_by_kind() {
        let store = store();

        assert!(matches!(
            checkout(&store, &scans(&["1001A"]), None),
            Err(CliError::Core(CoreError::ProductNotFound(_)))
        ));
        assert!(matches!(
            checkout(&store, &scans(&["1004A"]), None),
            Err(CliError::Core(CoreError::PriceNotDefined(_)))
        ));
        assert!(matches!(
            checkout(&store, &[], None),
            Err(CliError::Core(CoreError::EmptyPurchase))
        ));
        assert!(matches!(
            checkout(&store, &scans(&["1003A"]), Some(Money::from_cents(100))),
            Err(CliError::Core(CoreError::InsufficientPayment { .. }))
        ));
    }

    #[test]
    fn test_render_text() {
        let summary = checkout(&store(), &scans(&["1003A"]), Some(Money::from_cents(1000))).unwrap();
        let mut out = Vec::new();
        render(&summary, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Started:  "));
        assert!(text.contains("Subtotal: $5.00"));
        assert!(text.contains("Total:    $5.00"));
        assert!(text.contains("Change:   $5.00"));
    }

    #[test]
    fn test_render_json() {
        let summary = checkout(&store(), &scans(&["1002A"]), None).unwrap();
        let mut out = Vec::new();
        render(&summary, true, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["total"], 900);
        assert_eq!(value["status"], "finalized");
        assert!(value["change"].is_null());
        assert!(value["started_at"].is_string());
        assert!(value["finalized_at"].is_string());
    }
}
