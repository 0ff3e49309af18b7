//! Plain-text rendering of the display model
//!
//! The panel renderer produces a structured [`CatalogView`]; this module
//! turns it into terminal output. The [`ViewRenderer`] trait is the seam
//! that keeps the core transformation independent of any particular UI -
//! alternative frontends implement the same trait against the same model.

use crate::core::render::{CatalogView, SubTable, NO_MATCH_LABEL};
use crate::types::CatalogError;
use std::io::Write;

/// Rendering layer over the display model
///
/// Implementations own presentation only; they must not consult the store
/// or the filters - everything they need is in the view.
pub trait ViewRenderer {
    /// Render a view to the given writer
    fn render(&self, view: &CatalogView, output: &mut dyn Write) -> Result<(), CatalogError>;
}

/// Renders the catalog as indented plain text, one section per category
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl ViewRenderer for TextRenderer {
    fn render(&self, view: &CatalogView, output: &mut dyn Write) -> Result<(), CatalogError> {
        for panel in &view.panels {
            writeln!(output, "== {} ==", panel.category.as_str())?;

            if panel.cards.is_empty() {
                writeln!(output, "  {}", NO_MATCH_LABEL)?;
                writeln!(output)?;
                continue;
            }

            for card in &panel.cards {
                writeln!(output, "{} [{}]", card.header.name, card.header.id)?;
                writeln!(
                    output,
                    "  Type: {} | Segment: {} | Effective: {}",
                    card.header.product_type, card.header.segment, card.header.effective_date
                )?;
                write_sub_table(output, &card.fees)?;
                write_sub_table(output, &card.limits)?;
                write_sub_table(output, &card.tiers)?;
                writeln!(output)?;
            }
        }
        Ok(())
    }
}

fn write_sub_table(output: &mut dyn Write, table: &SubTable) -> Result<(), CatalogError> {
    writeln!(output, "  {}", table.title)?;
    if table.rows.is_empty() {
        // Exactly one placeholder row, never zero rows.
        writeln!(output, "    {}", table.empty_label)?;
        return Ok(());
    }

    writeln!(output, "    {}", table.columns.join(" | "))?;
    for row in &table.rows {
        writeln!(output, "    {}", row.join(" | "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::build_view;
    use crate::core::store::CatalogStore;
    use crate::types::{Fee, Limit, Product};

    fn render_to_string(store: &CatalogStore) -> String {
        let mut output = Vec::new();
        TextRenderer
            .render(&build_view(store), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn seeded_store() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.replace_products(vec![Product {
            product_id: "P1".to_string(),
            category: "TD".to_string(),
            product_name: "Fixed Deposit".to_string(),
            product_type: "Deposit".to_string(),
            segment: "Retail".to_string(),
            effective_date: "2024-01-01".to_string(),
        }]);
        store.replace_fees(vec![Fee {
            product_id: "P1".to_string(),
            fee_name: "Early Withdrawal".to_string(),
            currency: "USD".to_string(),
            ..Fee::default()
        }]);
        store
    }

    #[test]
    fn test_renders_all_four_panel_headings() {
        let text = render_to_string(&CatalogStore::new());

        assert!(text.contains("== Individual Products =="));
        assert!(text.contains("== Corporate Products =="));
        assert!(text.contains("== TD =="));
        assert!(text.contains("== Extra =="));
    }

    #[test]
    fn test_empty_panel_shows_no_match_placeholder() {
        let text = render_to_string(&CatalogStore::new());
        assert_eq!(text.matches(NO_MATCH_LABEL).count(), 4);
    }

    #[test]
    fn test_card_header_and_joined_fee_row() {
        let text = render_to_string(&seeded_store());

        assert!(text.contains("Fixed Deposit [P1]"));
        assert!(text.contains("Type: Deposit | Segment: Retail | Effective: 2024-01-01"));
        assert!(text.contains("Early Withdrawal | USD |"));
    }

    #[test]
    fn test_empty_join_renders_exactly_one_placeholder_row() {
        let store = seeded_store();
        // P1 has a fee but no limits and no tiers.
        let text = render_to_string(&store);

        assert_eq!(text.matches("No limits").count(), 1);
        assert_eq!(text.matches("No tiers").count(), 1);
        assert_eq!(text.matches("No fees").count(), 0);
    }

    #[test]
    fn test_zero_limit_rows_mean_one_placeholder_not_zero_lines() {
        let mut store = seeded_store();
        // A limit for a different product must not leak into P1's table.
        store.replace_limits(vec![Limit {
            product_id: "OTHER".to_string(),
            channel: "ATM".to_string(),
            ..Limit::default()
        }]);

        let text = render_to_string(&store);
        assert_eq!(text.matches("No limits").count(), 1);
        assert!(!text.contains("ATM"));
    }
}
