//! Startup data loading
//!
//! Reads the four well-known CSV files from a data directory into a fresh
//! catalog. The reads run concurrently and are joined before the catalog is
//! returned. A file that is missing or unreadable means "no data for that
//! kind": the collection stays empty, the failure goes to the developer log,
//! and nothing is surfaced to the user. Startup never fails because of data
//! files.

use crate::core::store::CatalogStore;
use crate::io::codec::parse_records;
use crate::types::RecordKind;
use std::path::Path;

/// Load a catalog from the conventional files under `data_dir`
///
/// Looks for `products.csv`, `fees.csv`, `limits.csv`, and
/// `interest_tiers.csv`. All four reads run concurrently; per-file failures
/// are tolerated and only logged.
pub async fn load_catalog(data_dir: &Path) -> CatalogStore {
    let (products, fees, limits, tiers) = tokio::join!(
        read_kind(data_dir, RecordKind::Products),
        read_kind(data_dir, RecordKind::Fees),
        read_kind(data_dir, RecordKind::Limits),
        read_kind(data_dir, RecordKind::InterestTiers),
    );

    let mut store = CatalogStore::new();
    if let Some(text) = products {
        store.replace_products(parse_records(&text));
    }
    if let Some(text) = fees {
        store.replace_fees(parse_records(&text));
    }
    if let Some(text) = limits {
        store.replace_limits(parse_records(&text));
    }
    if let Some(text) = tiers {
        store.replace_tiers(parse_records(&text));
    }

    log::info!(
        "loaded catalog: {} products, {} fees, {} limits, {} interest tiers",
        store.products().len(),
        store.fees().len(),
        store.limits().len(),
        store.tiers().len(),
    );
    store
}

async fn read_kind(data_dir: &Path, kind: RecordKind) -> Option<String> {
    let path = data_dir.join(kind.file_name());
    match tokio::fs::read_to_string(&path).await {
        Ok(text) => Some(text),
        Err(e) => {
            // Missing and unreadable are the same thing here: no data.
            log::warn!("startup data {} skipped: {}", path.display(), e);
            None
        }
    }
}
