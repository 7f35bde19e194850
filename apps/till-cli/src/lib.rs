//! # Till Command Line
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Load config (file, then `TILL_*` environment overrides)
//! 3. Initialize tracing
//! 4. Load the store file into a catalog and price list
//! 5. Run the command
//!
//! ## Usage
//! ```bash
//! till --store store.toml catalog
//! till --store store.toml checkout --scan 1002A --scan 1003A --tendered 20.00
//! till checkout --scan 1002A --json
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod store;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use till_core::Money;

use crate::config::TillConfig;
use crate::store::Store;

#[derive(Debug, Parser)]
#[command(name = "till", version, about = "Checkout register")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Store file with the catalog and prices
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List products with price, discount and discounted price
    Catalog,

    /// Scan products, finalize the purchase and optionally pay
    Checkout {
        /// Product code to scan; repeat in scan order
        #[arg(long = "scan", value_name = "CODE")]
        scans: Vec<String>,

        /// Amount handed over, e.g. 20.00
        #[arg(long, value_name = "AMOUNT")]
        tendered: Option<Money>,

        /// Print a JSON summary instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Runs the command line application.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = TillConfig::load(cli.config.clone())?;
    if let Some(path) = cli.store.clone() {
        config.store.path = path;
    }

    init_tracing(&config.log.filter);
    debug!(?config, "Configuration loaded");

    let store = Store::load(&config.store.path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Catalog => commands::catalog(&store, &mut out)?,
        Command::Checkout {
            scans,
            tendered,
            json,
        } => {
            let summary = commands::checkout(&store, &scans, tendered)?;
            commands::render(&summary, json, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured filter. Logs go to stderr so stdout
/// stays clean for `--json`.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
