//! Core catalog logic
//!
//! This module contains the pure, UI-free heart of the engine:
//! - `store` - Owned in-memory catalog state with named mutation operations
//! - `filter` - The three-criteria product visibility rule
//! - `render` - Panel renderer producing a structured display model
//! - `edit` - Edit-surface reflection and the cosmetic credential gate

pub mod edit;
pub mod filter;
pub mod render;
pub mod store;

pub use edit::{edit_list, EditGate, EditableField, EditableProduct, DEFAULT_EDIT_CREDENTIAL};
pub use filter::FilterCriteria;
pub use render::{build_view, CatalogView, CategoryPanel, ProductCard, SubTable};
pub use store::CatalogStore;
