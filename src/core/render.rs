//! Panel renderer
//!
//! Transforms the catalog into a structured display model: one panel per
//! fixed category, one card per visible product in that category, and three
//! sub-tables per card (fees, transaction limits, interest tiers) joined by
//! exact `product_id` equality. The join is a linear scan per product, which
//! is fine at catalog scale - no indexing.
//!
//! This is a pure transformation: same store plus same filters always
//! produces the same view, and building a view has no side effects. Turning
//! the model into actual output is the job of a separate rendering layer
//! (see [`crate::surface`]), which keeps this logic testable without any UI.

use crate::core::store::CatalogStore;
use crate::types::{Category, Fee, InterestTier, Limit, Product};

/// Placeholder shown for empty field values
pub const EMPTY_FIELD: &str = "-";

/// Placeholder line for a panel with no matching products
pub const NO_MATCH_LABEL: &str = "No products match your filters.";

/// The full display model: one panel per category, in fixed order
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub panels: Vec<CategoryPanel>,
}

/// One category panel
///
/// `cards` is empty when no visible product belongs to the category; the
/// rendering layer shows [`NO_MATCH_LABEL`] in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPanel {
    pub category: Category,
    pub cards: Vec<ProductCard>,
}

/// One product card: a header plus the three joined sub-tables
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub header: CardHeader,
    pub fees: SubTable,
    pub limits: SubTable,
    pub tiers: SubTable,
}

/// Card header fields
///
/// Name and id are shown verbatim; the remaining fields are substituted with
/// [`EMPTY_FIELD`] when blank.
#[derive(Debug, Clone, PartialEq)]
pub struct CardHeader {
    pub name: String,
    pub id: String,
    pub product_type: String,
    pub segment: String,
    pub effective_date: String,
}

/// A joined sub-table of child records
///
/// `rows` holds display-ready cell values (blank cells already substituted
/// with [`EMPTY_FIELD`]) in the child collection's original relative order.
/// An empty `rows` means the rendering layer shows exactly one row with
/// `empty_label`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubTable {
    pub title: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
    pub empty_label: &'static str,
}

const FEE_COLUMNS: &[&str] = &[
    "Fee Name",
    "Currency",
    "Amount",
    "Fee",
    "Frequency",
    "Condition",
];

const LIMIT_COLUMNS: &[&str] = &[
    "Channel",
    "Limit Type",
    "Amount",
    "Currency",
    "Conditions",
    "Tax Status",
];

const TIER_COLUMNS: &[&str] = &[
    "Tier",
    "Operator",
    "Value",
    "Currency",
    "Rate",
    "Payout Freq",
    "Conditions",
    "Deposit",
    "Withdrawal",
    "Early Closure",
    "Min Balance",
];

/// Build the display model for the current store and filter state
pub fn build_view(store: &CatalogStore) -> CatalogView {
    let visible = store.visible_products();

    let panels = Category::ALL
        .iter()
        .map(|&category| CategoryPanel {
            category,
            cards: visible
                .iter()
                .filter(|product| product.category == category.as_str())
                .map(|product| build_card(store, product))
                .collect(),
        })
        .collect();

    CatalogView { panels }
}

fn build_card(store: &CatalogStore, product: &Product) -> ProductCard {
    ProductCard {
        header: CardHeader {
            name: product.product_name.clone(),
            id: product.product_id.clone(),
            product_type: display(&product.product_type),
            segment: display(&product.segment),
            effective_date: display(&product.effective_date),
        },
        fees: fee_table(store.fees(), &product.product_id),
        limits: limit_table(store.limits(), &product.product_id),
        tiers: tier_table(store.tiers(), &product.product_id),
    }
}

fn fee_table(fees: &[Fee], product_id: &str) -> SubTable {
    SubTable {
        title: "Fees",
        columns: FEE_COLUMNS,
        rows: fees
            .iter()
            .filter(|fee| fee.product_id == product_id)
            .map(|fee| {
                vec![
                    display(&fee.fee_name),
                    display(&fee.currency),
                    display(&fee.amount),
                    display(&fee.fee),
                    display(&fee.frequency),
                    display(&fee.condition),
                ]
            })
            .collect(),
        empty_label: "No fees",
    }
}

fn limit_table(limits: &[Limit], product_id: &str) -> SubTable {
    SubTable {
        title: "Transaction Limits",
        columns: LIMIT_COLUMNS,
        rows: limits
            .iter()
            .filter(|limit| limit.product_id == product_id)
            .map(|limit| {
                vec![
                    display(&limit.channel),
                    display(&limit.limit_type),
                    display(&limit.amount),
                    display(&limit.currency),
                    display(&limit.conditions),
                    display(&limit.tax_status),
                ]
            })
            .collect(),
        empty_label: "No limits",
    }
}

fn tier_table(tiers: &[InterestTier], product_id: &str) -> SubTable {
    SubTable {
        title: "Interest Tiers",
        columns: TIER_COLUMNS,
        rows: tiers
            .iter()
            .filter(|tier| tier.product_id == product_id)
            .map(|tier| {
                vec![
                    display(&tier.tier),
                    display(&tier.operator),
                    display(&tier.value),
                    display(&tier.currency),
                    display(&tier.rate),
                    display(&tier.payout_frequency),
                    display(&tier.conditions),
                    display(&tier.deposit_condition),
                    display(&tier.withdrawal_condition),
                    display(&tier.early_closure),
                    display(&tier.minimum_balance),
                ]
            })
            .collect(),
        empty_label: "No tiers",
    }
}

fn display(value: &str) -> String {
    if value.is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        value.to_string()
    }
}
