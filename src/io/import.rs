//! Bulk import
//!
//! Replaces whole collections from user-selected CSV files, up to one file
//! per record kind. All selected files are read concurrently and the reads
//! are joined before any collection is touched, so a half-failed import
//! never leaves the store partially replaced. Kinds with no file selected
//! are left unchanged. The returned report feeds the user-visible completion
//! acknowledgment.

use crate::core::store::CatalogStore;
use crate::io::codec::parse_records;
use crate::types::{CatalogError, RecordKind};
use futures::future;
use std::fmt;
use std::path::PathBuf;

/// File selection for a bulk import, one optional file per record kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkImport {
    pub products: Option<PathBuf>,
    pub fees: Option<PathBuf>,
    pub limits: Option<PathBuf>,
    pub tiers: Option<PathBuf>,
}

impl BulkImport {
    /// Whether any file was selected at all
    pub fn is_empty(&self) -> bool {
        self.products.is_none()
            && self.fees.is_none()
            && self.limits.is_none()
            && self.tiers.is_none()
    }

    /// Set the file for a record kind
    pub fn select(&mut self, kind: RecordKind, path: PathBuf) {
        match kind {
            RecordKind::Products => self.products = Some(path),
            RecordKind::Fees => self.fees = Some(path),
            RecordKind::Limits => self.limits = Some(path),
            RecordKind::InterestTiers => self.tiers = Some(path),
        }
    }
}

/// Per-kind record counts for the completion acknowledgment
///
/// `None` means the kind had no file selected and was left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub products: Option<usize>,
    pub fees: Option<usize>,
    pub limits: Option<usize>,
    pub tiers: Option<usize>,
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        for (label, count) in [
            ("products", self.products),
            ("fees", self.fees),
            ("limits", self.limits),
            ("interest tiers", self.tiers),
        ] {
            if let Some(count) = count {
                parts.push(format!("{} {}", count, label));
            }
        }
        if parts.is_empty() {
            write!(f, "Import complete (nothing selected)")
        } else {
            write!(f, "Import complete: {}", parts.join(", "))
        }
    }
}

/// Read the selected files and replace the corresponding collections
///
/// Reads run concurrently and are joined; a selected file that cannot be
/// read fails the whole import before any collection is replaced. Unselected
/// kinds are untouched. The caller re-renders and shows the report after a
/// successful import.
pub async fn apply(
    store: &mut CatalogStore,
    import: &BulkImport,
) -> Result<ImportReport, CatalogError> {
    let (products, fees, limits, tiers) = future::try_join4(
        read_selected(&import.products),
        read_selected(&import.fees),
        read_selected(&import.limits),
        read_selected(&import.tiers),
    )
    .await?;

    let mut report = ImportReport::default();
    if let Some(text) = products {
        let records = parse_records(&text);
        report.products = Some(records.len());
        store.replace_products(records);
    }
    if let Some(text) = fees {
        let records = parse_records(&text);
        report.fees = Some(records.len());
        store.replace_fees(records);
    }
    if let Some(text) = limits {
        let records = parse_records(&text);
        report.limits = Some(records.len());
        store.replace_limits(records);
    }
    if let Some(text) = tiers {
        let records = parse_records(&text);
        report.tiers = Some(records.len());
        store.replace_tiers(records);
    }

    Ok(report)
}

async fn read_selected(path: &Option<PathBuf>) -> Result<Option<String>, CatalogError> {
    let Some(path) = path else {
        return Ok(None);
    };
    tokio::fs::read_to_string(path)
        .await
        .map(Some)
        .map_err(|e| CatalogError::import_read(path.display().to_string(), e.to_string()))
}
