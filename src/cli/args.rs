use clap::Parser;
use std::path::PathBuf;

use crate::core::edit::DEFAULT_EDIT_CREDENTIAL;

/// Browse, filter, edit, and export a financial product catalog
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Browse, filter, edit, and export a financial product catalog", long_about = None)]
pub struct CliArgs {
    /// Directory holding the startup CSV files
    ///
    /// Missing files are tolerated; their collections start empty.
    #[arg(value_name = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Search filter: substring over product name, type, and id
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Category filter, matched exactly
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Segment filter, matched exactly
    #[arg(long = "segment", value_name = "SEGMENT")]
    pub segment: Option<String>,

    /// Write the full catalog (collections + filter state) as JSON
    #[arg(long = "export-snapshot", value_name = "PATH")]
    pub export_snapshot: Option<PathBuf>,

    /// Write the product collection as flat CSV
    #[arg(long = "export-products", value_name = "PATH")]
    pub export_products: Option<PathBuf>,

    /// Enter the interactive session instead of rendering once
    #[arg(long = "interactive", short = 'i')]
    pub interactive: bool,

    /// Expected value for the edit-surface gate
    ///
    /// This gate only hides the editing affordance; it is not access control.
    #[arg(
        long = "edit-credential",
        value_name = "CREDENTIAL",
        default_value = DEFAULT_EDIT_CREDENTIAL,
        hide_default_value = true
    )]
    pub edit_credential: String,
}
