//! Product Catalog CLI
//!
//! Command-line interface for browsing and editing a financial product
//! catalog loaded from flat CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data
//! cargo run -- data --search savings --category "Individual Products"
//! cargo run -- data --export-snapshot catalog.json --export-products products.csv
//! cargo run -- data --interactive
//! ```
//!
//! The program loads up to four CSV files (`products.csv`, `fees.csv`,
//! `limits.csv`, `interest_tiers.csv`) from the data directory - missing
//! files simply leave their collections empty - and renders the catalog as
//! category panels to stdout. Interactive mode adds debounced search,
//! credential-gated editing, bulk import, and exports as session commands.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (export target not writable, session I/O failure, etc.)

use product_catalog_engine::cli;
use std::process;

fn main() {
    env_logger::init();

    let args = cli::parse_args();

    // All async work (startup load, imports, debounced search) runs on one
    // runtime; the store itself is only ever touched by the current event.
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(cli::run(args)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
