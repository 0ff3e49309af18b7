//! CLI module
//!
//! Argument parsing and top-level orchestration: load the catalog from the
//! data directory, then either render once with the requested filters (and
//! run any exports) or hand control to the interactive session.

pub mod args;

pub use args::CliArgs;

use crate::core::edit::EditGate;
use crate::core::render::build_view;
use crate::io::export::{export_products, export_snapshot};
use crate::io::loader::load_catalog;
use crate::surface::session::Session;
use crate::surface::text::{TextRenderer, ViewRenderer};
use crate::types::CatalogError;
use clap::Parser;
use tokio::io::BufReader;

/// Parse command-line arguments, exiting with usage on error
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Run the catalog with the given arguments
///
/// One-shot mode applies the filter flags, renders the catalog to stdout,
/// and writes any requested exports. Interactive mode enters the session
/// loop on stdin/stdout.
pub async fn run(args: CliArgs) -> Result<(), CatalogError> {
    let mut store = load_catalog(&args.data_dir).await;
    let mut stdout = std::io::stdout();

    if args.interactive {
        let gate = EditGate::new(args.edit_credential);
        let mut session = Session::new(store, gate, TextRenderer);
        let stdin = BufReader::new(tokio::io::stdin());
        return session.run(stdin, &mut stdout).await;
    }

    if let Some(search) = &args.search {
        store.set_search(search);
    }
    if let Some(category) = &args.category {
        store.set_category(category);
    }
    if let Some(segment) = &args.segment {
        store.set_segment(segment);
    }

    TextRenderer.render(&build_view(&store), &mut stdout)?;

    if let Some(path) = &args.export_snapshot {
        export_snapshot(&store, path)?;
        log::info!("snapshot written to {}", path.display());
    }
    if let Some(path) = &args.export_products {
        export_products(&store, path)?;
        log::info!("products written to {}", path.display());
    }

    Ok(())
}
