//! I/O module
//!
//! Handles the flat-CSV codec and the catalog's file boundaries.
//!
//! # Components
//!
//! - `codec` - Minimal flat-CSV parse/serialize (no quoting, no escaping)
//! - `loader` - Startup load of the four well-known data files
//! - `import` - Bulk import replacing whole collections
//! - `export` - JSON snapshot and products-CSV export

pub mod codec;
pub mod export;
pub mod import;
pub mod loader;

pub use codec::{parse, parse_records, serialize, serialize_records, Row};
pub use export::{export_products, export_snapshot, write_products_csv, write_snapshot};
pub use import::{apply as apply_import, BulkImport, ImportReport};
pub use loader::load_catalog;
