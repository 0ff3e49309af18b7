//! Edit surface
//!
//! Reflects the full, unfiltered product collection as indexed editable
//! field groups, and guards the editing affordance behind a client-side
//! credential gate.
//!
//! The gate is cosmetic, not a security boundary: the expected value ships
//! with the client configuration and is visible to anyone who inspects it.
//! It only hides the editing affordance from casual users. Real access
//! control would need a server-side authorization boundary, which this
//! engine deliberately does not pretend to have.

use crate::core::store::CatalogStore;
use crate::types::{CatalogError, FlatRecord, Product};

/// Default gate value, overridable via `--edit-credential`
pub const DEFAULT_EDIT_CREDENTIAL: &str = "admin123";

/// Client-side credential gate for the edit surface
///
/// Starts locked; a matching credential unlocks it for the rest of the
/// session. A mismatch is reported immediately and changes nothing.
#[derive(Debug, Clone)]
pub struct EditGate {
    expected: String,
    unlocked: bool,
}

impl EditGate {
    /// Create a locked gate expecting the given credential
    pub fn new(expected: impl Into<String>) -> Self {
        EditGate {
            expected: expected.into(),
            unlocked: false,
        }
    }

    /// Compare the entered credential against the configured value
    ///
    /// On match the gate unlocks and stays unlocked. On mismatch the gate
    /// state is untouched and [`CatalogError::CredentialRejected`] is
    /// returned for immediate, synchronous reporting.
    pub fn unlock(&mut self, entered: &str) -> Result<(), CatalogError> {
        if entered == self.expected {
            self.unlocked = true;
            Ok(())
        } else {
            Err(CatalogError::CredentialRejected)
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}

impl Default for EditGate {
    fn default() -> Self {
        EditGate::new(DEFAULT_EDIT_CREDENTIAL)
    }
}

/// One editable field, bound to a product by collection index
#[derive(Debug, Clone, PartialEq)]
pub struct EditableField {
    /// Index of the product in the (unfiltered) collection
    pub product_index: usize,
    /// Field name, usable with [`CatalogStore::edit_product_field`]
    pub name: &'static str,
    /// Current value
    pub value: String,
}

/// All editable fields of one product
#[derive(Debug, Clone, PartialEq)]
pub struct EditableProduct {
    pub index: usize,
    pub fields: Vec<EditableField>,
}

/// Reflect the full product collection into editable field groups
///
/// Every product appears regardless of the active filters, bound by its
/// index so edits land on the right record even when ids are duplicated.
pub fn edit_list(store: &CatalogStore) -> Vec<EditableProduct> {
    store
        .products()
        .iter()
        .enumerate()
        .map(|(index, product)| EditableProduct {
            index,
            fields: Product::FIELDS
                .iter()
                .map(|&name| EditableField {
                    product_index: index,
                    name,
                    value: product.field(name).unwrap_or("").to_string(),
                })
                .collect(),
        })
        .collect()
}
