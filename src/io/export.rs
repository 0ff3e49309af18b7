//! Catalog export
//!
//! Two export shapes:
//! - a JSON snapshot of the whole store (all four collections plus the
//!   current filter criteria), pretty-printed for human readability;
//! - a flat CSV file of the product collection only, with any edits
//!   applied, in the same minimal CSV form the catalog is loaded from.
//!
//! Writer-based functions are pure with respect to the store; path-based
//! wrappers exist for the CLI and session.

use crate::core::store::CatalogStore;
use crate::io::codec::serialize_records;
use crate::types::CatalogError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the full store as a pretty-printed JSON snapshot
pub fn write_snapshot(store: &CatalogStore, output: &mut dyn Write) -> Result<(), CatalogError> {
    serde_json::to_writer_pretty(&mut *output, store)?;
    output.flush()?;
    Ok(())
}

/// Write the product collection as minimal flat CSV
pub fn write_products_csv(
    store: &CatalogStore,
    output: &mut dyn Write,
) -> Result<(), CatalogError> {
    output.write_all(serialize_records(store.products()).as_bytes())?;
    output.flush()?;
    Ok(())
}

/// Write the JSON snapshot to a file
pub fn export_snapshot(store: &CatalogStore, path: &Path) -> Result<(), CatalogError> {
    let mut file = File::create(path)?;
    write_snapshot(store, &mut file)
}

/// Write the products CSV to a file
pub fn export_products(store: &CatalogStore, path: &Path) -> Result<(), CatalogError> {
    let mut file = File::create(path)?;
    write_products_csv(store, &mut file)
}
