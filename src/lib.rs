//! Product Catalog Engine Library
//! # Overview
//!
//! This library loads a financial product catalog from flat CSV files,
//! filters it, joins related records into a structured display model, and
//! exports the result as CSV or a JSON snapshot.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Product, Fee, Limit, InterestTier, errors)
//! - [`io`] - The minimal flat-CSV codec and the file boundaries
//!   (startup load, bulk import, export)
//! - [`core`] - Business logic components:
//!   - [`core::store`] - Owned in-memory catalog state
//!   - [`core::filter`] - Product visibility criteria
//!   - [`core::render`] - Panel renderer producing the display model
//!   - [`core::edit`] - Edit-surface reflection and the credential gate
//! - [`surface`] - Rendering layer, search debouncing, interactive session
//! - [`cli`] - CLI argument parsing and orchestration
//!
//! # Data Flow
//!
//! ```text
//! CSV text → codec → CatalogStore → visible_products() → build_view()
//!                                                      → ViewRenderer
//! ```
//!
//! The edit surface and the import boundary mutate the store directly; every
//! mutation is followed by a full re-render. All record fields are untyped
//! strings; child records (fees, limits, interest tiers) join products by
//! exact `product_id` equality with no referential-integrity enforcement.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod surface;
pub mod types;

pub use core::{build_view, CatalogStore, CatalogView, EditGate, FilterCriteria};
pub use io::{load_catalog, BulkImport, ImportReport};
pub use surface::{Session, SessionEvent, TextRenderer, ViewRenderer};
pub use types::{CatalogError, Category, Fee, InterestTier, Limit, Product, RecordKind};
