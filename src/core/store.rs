//! In-memory catalog store
//!
//! Holds the four record collections and the active filter criteria. All
//! mutation funnels through named operations (replace a collection, set a
//! filter criterion, edit a product field) so components can be unit-tested
//! without any rendering environment, and so callers control when to
//! re-render - the store itself triggers no side effects.
//!
//! The store is a plain single-threaded structure. The whole engine runs on
//! one event loop with no background mutation, so there is no locking.
//!
//! # Lifecycle
//!
//! Collections are created wholesale by parsing a CSV blob (startup load or
//! bulk import), replacing the prior collection of that kind entirely.
//! Products are additionally mutated field-by-field by the edit surface.
//! Nothing is deleted record-by-record; destruction only happens by
//! replacing a whole collection.

use crate::core::filter::FilterCriteria;
use crate::types::{CatalogError, Fee, FlatRecord, InterestTier, Limit, Product};
use serde::{Deserialize, Serialize};

/// The catalog: four record collections plus active filter criteria
///
/// Serializes as a whole for the snapshot export, filter state included.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogStore {
    products: Vec<Product>,
    fees: Vec<Fee>,
    limits: Vec<Limit>,
    tiers: Vec<InterestTier>,
    filters: FilterCriteria,
}

impl CatalogStore {
    /// Create an empty catalog with no active filters
    pub fn new() -> Self {
        Self::default()
    }

    // Collection access

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn fees(&self) -> &[Fee] {
        &self.fees
    }

    pub fn limits(&self) -> &[Limit] {
        &self.limits
    }

    pub fn tiers(&self) -> &[InterestTier] {
        &self.tiers
    }

    // Wholesale replacement (startup load and bulk import)

    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn replace_fees(&mut self, fees: Vec<Fee>) {
        self.fees = fees;
    }

    pub fn replace_limits(&mut self, limits: Vec<Limit>) {
        self.limits = limits;
    }

    pub fn replace_tiers(&mut self, tiers: Vec<InterestTier>) {
        self.tiers = tiers;
    }

    // Filter criteria

    /// Current filter criteria
    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// Set the search criterion
    ///
    /// The raw input is trimmed and lower-cased once here so the per-product
    /// predicate never re-normalizes it.
    pub fn set_search(&mut self, raw: &str) {
        self.filters.search = raw.trim().to_lowercase();
    }

    /// Set the category criterion (empty means any)
    pub fn set_category(&mut self, category: &str) {
        self.filters.category = category.to_string();
    }

    /// Set the segment criterion (empty means any)
    pub fn set_segment(&mut self, segment: &str) {
        self.filters.segment = segment.to_string();
    }

    /// Products visible under the current filter criteria
    ///
    /// Order is preserved from the underlying collection; the predicate is
    /// evaluated fresh on every call.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| self.filters.matches(product))
            .collect()
    }

    /// Write a single field of the product at `index`
    ///
    /// Used by the edit surface, which binds editable fields to collection
    /// indexes. The caller re-renders after a successful edit.
    pub fn edit_product_field(
        &mut self,
        index: usize,
        field: &str,
        value: String,
    ) -> Result<(), CatalogError> {
        let len = self.products.len();
        let product = self
            .products
            .get_mut(index)
            .ok_or_else(|| CatalogError::product_index(index, len))?;
        product.set_field(field, value)
    }
}
