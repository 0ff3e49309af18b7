//! End-to-end integration tests
//!
//! These tests exercise the complete pipeline: write CSV files into a
//! temporary data directory, load them into a catalog, filter, render the
//! display model to text, edit, import, and export. Each test owns its
//! temporary directory, so tests are independent and need no shared
//! fixtures on disk.

#[cfg(test)]
mod tests {
    use product_catalog_engine::core::edit::EditGate;
    use product_catalog_engine::core::render::build_view;
    use product_catalog_engine::io::export::{write_products_csv, write_snapshot};
    use product_catalog_engine::io::import::{self, BulkImport};
    use product_catalog_engine::io::loader::load_catalog;
    use product_catalog_engine::surface::session::Session;
    use product_catalog_engine::surface::text::{TextRenderer, ViewRenderer};
    use product_catalog_engine::types::RecordKind;
    use std::fs;
    use tempfile::TempDir;

    const PRODUCTS_CSV: &str = "\
product_id,category,product_name,product_type,segment,effective_date
P1,Individual Products,Savings Account,Deposit,Retail,2024-01-01
P2,Corporate Products,Business Loan,Credit,SME,2024-02-01
P3,TD,Fixed Deposit,Deposit,Retail,2024-03-01
P4,Extra,Gift Card,Prepaid,,";

    const FEES_CSV: &str = "\
product_id,fee_name,currency,amount,fee,frequency,condition
P1,Maintenance,USD,5,,Monthly,
P3,Early Withdrawal,USD,,1%,Once,Before maturity
P1,Statement,USD,1,,Monthly,Paper only
P9,Orphan Fee,USD,2,,Once,";

    const LIMITS_CSV: &str = "\
product_id,channel,limit_type,amount,currency,conditions,tax_status
P1,ATM,Daily,1000,USD,,Taxable";

    const TIERS_CSV: &str = "\
product_id,tier,operator,value,currency,rate,payout_frequency,conditions,deposit_condition,withdrawal_condition,early_closure,minimum_balance
P3,Tier 1,>=,10000,USD,3.5%,Quarterly,,,,Penalty,1000";

    /// Write the standard four data files into a fresh temp directory
    fn seeded_data_dir() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("products.csv"), PRODUCTS_CSV).unwrap();
        fs::write(dir.path().join("fees.csv"), FEES_CSV).unwrap();
        fs::write(dir.path().join("limits.csv"), LIMITS_CSV).unwrap();
        fs::write(dir.path().join("interest_tiers.csv"), TIERS_CSV).unwrap();
        dir
    }

    fn render_text(store: &product_catalog_engine::CatalogStore) -> String {
        let mut output = Vec::new();
        TextRenderer
            .render(&build_view(store), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_load_filter_render_pipeline() {
        let dir = seeded_data_dir();
        let mut store = load_catalog(dir.path()).await;

        assert_eq!(store.products().len(), 4);
        assert_eq!(store.fees().len(), 4);

        // Unfiltered: every product shows on its own panel, joins applied.
        let text = render_text(&store);
        assert!(text.contains("Savings Account [P1]"));
        assert!(text.contains("Maintenance | USD | 5"));
        assert!(text.contains("Statement | USD | 1"));
        // The orphan fee references no loaded product and never displays.
        assert!(!text.contains("Orphan Fee"));
        // P4 has blank segment and effective date.
        assert!(text.contains("Type: Prepaid | Segment: - | Effective: -"));

        // Filter down to the one retail product matching "fixed".
        store.set_search("FIXED");
        store.set_segment("Retail");
        let text = render_text(&store);
        assert!(text.contains("Fixed Deposit [P3]"));
        assert!(!text.contains("Savings Account"));
        assert!(!text.contains("Business Loan"));
        // Panels with no match show the placeholder.
        assert!(text.contains("No products match your filters."));
    }

    #[tokio::test]
    async fn test_join_rows_keep_original_relative_order() {
        let dir = seeded_data_dir();
        let store = load_catalog(dir.path()).await;

        let view = build_view(&store);
        let individual = &view.panels[0];
        let card = &individual.cards[0];

        assert_eq!(card.fees.rows.len(), 2);
        assert_eq!(card.fees.rows[0][0], "Maintenance");
        assert_eq!(card.fees.rows[1][0], "Statement");
        // P1 has one limit and no tiers.
        assert_eq!(card.limits.rows.len(), 1);
        assert!(card.tiers.rows.is_empty());
    }

    #[tokio::test]
    async fn test_edit_then_export_reflects_change() {
        let dir = seeded_data_dir();
        let mut store = load_catalog(dir.path()).await;

        store
            .edit_product_field(2, "product_name", "Premium Fixed Deposit".to_string())
            .unwrap();

        let mut output = Vec::new();
        write_products_csv(&store, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        assert!(csv.contains("P3,TD,Premium Fixed Deposit,Deposit,Retail,2024-03-01"));
        // Every other row is byte-identical to the input data.
        assert!(csv.contains("P1,Individual Products,Savings Account,Deposit,Retail,2024-01-01"));
        assert!(csv.contains("P4,Extra,Gift Card,Prepaid,,"));
    }

    #[tokio::test]
    async fn test_bulk_import_replaces_wholesale_and_leaves_rest() {
        let dir = seeded_data_dir();
        let mut store = load_catalog(dir.path()).await;

        let replacement = dir.path().join("replacement_products.csv");
        fs::write(
            &replacement,
            "product_id,category,product_name\nN1,TD,Replacement Deposit",
        )
        .unwrap();

        let mut selection = BulkImport::default();
        selection.select(RecordKind::Products, replacement);
        let report = import::apply(&mut store, &selection).await.unwrap();

        assert_eq!(report.products, Some(1));
        assert_eq!(store.products().len(), 1);
        assert_eq!(store.products()[0].product_id, "N1");
        // Fees were not part of the import and survive untouched.
        assert_eq!(store.fees().len(), 4);

        let text = render_text(&store);
        assert!(text.contains("Replacement Deposit [N1]"));
    }

    #[tokio::test]
    async fn test_snapshot_export_carries_collections_and_filters() {
        let dir = seeded_data_dir();
        let mut store = load_catalog(dir.path()).await;
        store.set_search("savings");
        store.set_category("Individual Products");

        let mut output = Vec::new();
        write_snapshot(&store, &mut output).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(json["products"].as_array().unwrap().len(), 4);
        assert_eq!(json["fees"].as_array().unwrap().len(), 4);
        assert_eq!(json["limits"].as_array().unwrap().len(), 1);
        assert_eq!(json["tiers"].as_array().unwrap().len(), 1);
        assert_eq!(json["filters"]["search"], "savings");
        assert_eq!(json["filters"]["category"], "Individual Products");
        assert_eq!(json["filters"]["segment"], "");
    }

    #[tokio::test]
    async fn test_missing_data_files_render_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let store = load_catalog(dir.path()).await;

        let text = render_text(&store);
        assert_eq!(
            text.matches("No products match your filters.").count(),
            4
        );
    }

    #[tokio::test]
    async fn test_interactive_session_full_flow() {
        let dir = seeded_data_dir();
        let store = load_catalog(dir.path()).await;
        let export_path = dir.path().join("edited_products.csv");

        let script = format!(
            "login admin123\nedit 0 product_name Everyday Savings\nexport-products {}\nquit\n",
            export_path.display()
        );

        let mut session = Session::new(store, EditGate::default(), TextRenderer);
        let mut output = Vec::new();
        session.run(script.as_bytes(), &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Edit mode enabled"));
        assert!(text.contains("Everyday Savings [P1]"));

        let exported = fs::read_to_string(&export_path).unwrap();
        assert!(exported
            .contains("P1,Individual Products,Everyday Savings,Deposit,Retail,2024-01-01"));
    }
}
