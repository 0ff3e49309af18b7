//! Product visibility filtering
//!
//! Three independent criteria decide which products are visible: a free-text
//! search (substring match over name, type, and id, case-insensitive), an
//! exact category match, and an exact segment match. An empty criterion means
//! "any". The predicate is evaluated fresh on every render; at catalog scale
//! there is nothing to memoize.

use crate::types::Product;
use serde::{Deserialize, Serialize};

/// Active filter criteria
///
/// `search` is stored lower-cased (and trimmed) so the per-product comparison
/// only lower-cases the product side. Category and segment compare by exact
/// string equality against the raw record values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Lower-cased search text; empty means no search filter
    pub search: String,
    /// Exact category match; empty means any category
    pub category: String,
    /// Exact segment match; empty means any segment
    pub segment: String,
}

impl FilterCriteria {
    /// Whether a product satisfies all three criteria
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = self.search.is_empty()
            || product.product_name.to_lowercase().contains(&self.search)
            || product.product_type.to_lowercase().contains(&self.search)
            || product.product_id.to_lowercase().contains(&self.search);

        let matches_category = self.category.is_empty() || product.category == self.category;
        let matches_segment = self.segment.is_empty() || product.segment == self.segment;

        matches_search && matches_category && matches_segment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn product(id: &str, name: &str, product_type: &str, category: &str, segment: &str) -> Product {
        Product {
            product_id: id.to_string(),
            category: category.to_string(),
            product_name: name.to_string(),
            product_type: product_type.to_string(),
            segment: segment.to_string(),
            effective_date: String::new(),
        }
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.matches(&product("P1", "Savings", "Deposit", "TD", "Retail")));
        assert!(criteria.matches(&Product::default()));
    }

    #[rstest]
    #[case::matches_name("sav", true)]
    #[case::matches_type("depo", true)]
    #[case::matches_id("p1", true)]
    #[case::case_insensitive_on_product_side("SAV", false)] // search is pre-lowered
    #[case::no_match("loan", false)]
    fn test_search_substring_over_three_fields(#[case] search: &str, #[case] expected: bool) {
        let criteria = FilterCriteria {
            search: search.to_string(),
            ..FilterCriteria::default()
        };
        let p = product("P1", "Savings Account", "Deposit", "TD", "Retail");
        assert_eq!(criteria.matches(&p), expected);
    }

    #[rstest]
    #[case::exact_match("TD", true)]
    #[case::no_partial_match("T", false)]
    #[case::case_sensitive("td", false)]
    fn test_category_exact_match(#[case] category: &str, #[case] expected: bool) {
        let criteria = FilterCriteria {
            category: category.to_string(),
            ..FilterCriteria::default()
        };
        let p = product("P1", "Savings", "Deposit", "TD", "Retail");
        assert_eq!(criteria.matches(&p), expected);
    }

    #[test]
    fn test_all_criteria_combine_with_and() {
        let criteria = FilterCriteria {
            search: "savings".to_string(),
            category: "TD".to_string(),
            segment: "Retail".to_string(),
        };

        assert!(criteria.matches(&product("P1", "Savings", "Deposit", "TD", "Retail")));
        // Search matches, but the segment does not.
        assert!(!criteria.matches(&product("P1", "Savings", "Deposit", "TD", "Corporate")));
    }
}
