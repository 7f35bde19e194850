//! # Till Entry Point
//!
//! All setup lives in lib.rs so it can be tested.

fn main() -> anyhow::Result<()> {
    till_cli::run()
}
