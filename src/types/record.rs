//! Record types for the product catalog
//!
//! This module defines the four record kinds held by the catalog (products,
//! fees, limits, interest tiers) plus the fixed category partition used to
//! group display panels.
//!
//! Every field is an untyped string, mirroring the flat CSV files the catalog
//! is loaded from. Fields that are absent in the source data are simply left
//! empty; the display layer substitutes a placeholder. No numeric or date
//! parsing happens anywhere in the pipeline.

use crate::types::CatalogError;
use serde::{Deserialize, Serialize};

/// Product category partition
///
/// Products are grouped into four fixed display panels. The category of a
/// product record is still free text (unknown categories silently coexist in
/// the store); this enum only drives panel grouping and iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Retail banking products
    Individual,
    /// Corporate banking products
    Corporate,
    /// Term deposits
    TermDeposit,
    /// Everything that does not fit the other three panels
    Extra,
}

impl Category {
    /// All categories in panel display order
    pub const ALL: [Category; 4] = [
        Category::Individual,
        Category::Corporate,
        Category::TermDeposit,
        Category::Extra,
    ];

    /// The exact category string used in product records
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Individual => "Individual Products",
            Category::Corporate => "Corporate Products",
            Category::TermDeposit => "TD",
            Category::Extra => "Extra",
        }
    }
}

/// The four record kinds managed by the catalog
///
/// Used by the loader and the bulk-import boundary to address one collection
/// at a time (each kind has its own conventional file name).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Products,
    Fees,
    Limits,
    InterestTiers,
}

impl RecordKind {
    /// All record kinds, in load order
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Products,
        RecordKind::Fees,
        RecordKind::Limits,
        RecordKind::InterestTiers,
    ];

    /// Conventional file name for this kind under a data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            RecordKind::Products => "products.csv",
            RecordKind::Fees => "fees.csv",
            RecordKind::Limits => "limits.csv",
            RecordKind::InterestTiers => "interest_tiers.csv",
        }
    }

    /// Short label for log and acknowledgment messages
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Products => "products",
            RecordKind::Fees => "fees",
            RecordKind::Limits => "limits",
            RecordKind::InterestTiers => "interest tiers",
        }
    }
}

/// Flat-record seam between typed records and the CSV codec
///
/// A record is a fixed, ordered set of named string fields. The codec zips
/// CSV header names against these field names positionally; the edit surface
/// writes fields back by name. Unknown field names are rejected by
/// [`set_field`](FlatRecord::set_field) so typos surface instead of silently
/// creating junk.
pub trait FlatRecord: Default {
    /// Field names in serialization order
    const FIELDS: &'static [&'static str];

    /// Get a field value by name
    ///
    /// Returns `None` only for names not in [`FIELDS`](FlatRecord::FIELDS);
    /// known-but-empty fields return `Some("")`.
    fn field(&self, name: &str) -> Option<&str>;

    /// Set a field value by name
    fn set_field(&mut self, name: &str, value: String) -> Result<(), CatalogError>;
}

/// A catalog product
///
/// `product_id` is the key that fee, limit, and interest-tier records join
/// against. Uniqueness is not enforced; duplicate ids coexist and each joins
/// its children independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    /// One of the four panel categories, or free text for anything else
    pub category: String,
    pub product_name: String,
    pub product_type: String,
    pub segment: String,
    pub effective_date: String,
}

impl FlatRecord for Product {
    const FIELDS: &'static [&'static str] = &[
        "product_id",
        "category",
        "product_name",
        "product_type",
        "segment",
        "effective_date",
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "product_id" => Some(&self.product_id),
            "category" => Some(&self.category),
            "product_name" => Some(&self.product_name),
            "product_type" => Some(&self.product_type),
            "segment" => Some(&self.segment),
            "effective_date" => Some(&self.effective_date),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<(), CatalogError> {
        match name {
            "product_id" => self.product_id = value,
            "category" => self.category = value,
            "product_name" => self.product_name = value,
            "product_type" => self.product_type = value,
            "segment" => self.segment = value,
            "effective_date" => self.effective_date = value,
            _ => return Err(CatalogError::unknown_field(name)),
        }
        Ok(())
    }
}

/// A fee attached to a product by `product_id`
///
/// The record keeps both an `amount` and a `fee` column because the source
/// data carries both (fixed amount vs. percentage fee).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    pub product_id: String,
    pub fee_name: String,
    pub currency: String,
    pub amount: String,
    pub fee: String,
    pub frequency: String,
    pub condition: String,
}

impl FlatRecord for Fee {
    const FIELDS: &'static [&'static str] = &[
        "product_id",
        "fee_name",
        "currency",
        "amount",
        "fee",
        "frequency",
        "condition",
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "product_id" => Some(&self.product_id),
            "fee_name" => Some(&self.fee_name),
            "currency" => Some(&self.currency),
            "amount" => Some(&self.amount),
            "fee" => Some(&self.fee),
            "frequency" => Some(&self.frequency),
            "condition" => Some(&self.condition),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<(), CatalogError> {
        match name {
            "product_id" => self.product_id = value,
            "fee_name" => self.fee_name = value,
            "currency" => self.currency = value,
            "amount" => self.amount = value,
            "fee" => self.fee = value,
            "frequency" => self.frequency = value,
            "condition" => self.condition = value,
            _ => return Err(CatalogError::unknown_field(name)),
        }
        Ok(())
    }
}

/// A transaction limit attached to a product by `product_id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub product_id: String,
    pub channel: String,
    pub limit_type: String,
    pub amount: String,
    pub currency: String,
    pub conditions: String,
    pub tax_status: String,
}

impl FlatRecord for Limit {
    const FIELDS: &'static [&'static str] = &[
        "product_id",
        "channel",
        "limit_type",
        "amount",
        "currency",
        "conditions",
        "tax_status",
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "product_id" => Some(&self.product_id),
            "channel" => Some(&self.channel),
            "limit_type" => Some(&self.limit_type),
            "amount" => Some(&self.amount),
            "currency" => Some(&self.currency),
            "conditions" => Some(&self.conditions),
            "tax_status" => Some(&self.tax_status),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<(), CatalogError> {
        match name {
            "product_id" => self.product_id = value,
            "channel" => self.channel = value,
            "limit_type" => self.limit_type = value,
            "amount" => self.amount = value,
            "currency" => self.currency = value,
            "conditions" => self.conditions = value,
            "tax_status" => self.tax_status = value,
            _ => return Err(CatalogError::unknown_field(name)),
        }
        Ok(())
    }
}

/// An interest tier attached to a product by `product_id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestTier {
    pub product_id: String,
    pub tier: String,
    pub operator: String,
    pub value: String,
    pub currency: String,
    pub rate: String,
    pub payout_frequency: String,
    pub conditions: String,
    pub deposit_condition: String,
    pub withdrawal_condition: String,
    pub early_closure: String,
    pub minimum_balance: String,
}

impl FlatRecord for InterestTier {
    const FIELDS: &'static [&'static str] = &[
        "product_id",
        "tier",
        "operator",
        "value",
        "currency",
        "rate",
        "payout_frequency",
        "conditions",
        "deposit_condition",
        "withdrawal_condition",
        "early_closure",
        "minimum_balance",
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "product_id" => Some(&self.product_id),
            "tier" => Some(&self.tier),
            "operator" => Some(&self.operator),
            "value" => Some(&self.value),
            "currency" => Some(&self.currency),
            "rate" => Some(&self.rate),
            "payout_frequency" => Some(&self.payout_frequency),
            "conditions" => Some(&self.conditions),
            "deposit_condition" => Some(&self.deposit_condition),
            "withdrawal_condition" => Some(&self.withdrawal_condition),
            "early_closure" => Some(&self.early_closure),
            "minimum_balance" => Some(&self.minimum_balance),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<(), CatalogError> {
        match name {
            "product_id" => self.product_id = value,
            "tier" => self.tier = value,
            "operator" => self.operator = value,
            "value" => self.value = value,
            "currency" => self.currency = value,
            "rate" => self.rate = value,
            "payout_frequency" => self.payout_frequency = value,
            "conditions" => self.conditions = value,
            "deposit_condition" => self.deposit_condition = value,
            "withdrawal_condition" => self.withdrawal_condition = value,
            "early_closure" => self.early_closure = value,
            "minimum_balance" => self.minimum_balance = value,
            _ => return Err(CatalogError::unknown_field(name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Category::Individual, "Individual Products")]
    #[case(Category::Corporate, "Corporate Products")]
    #[case(Category::TermDeposit, "TD")]
    #[case(Category::Extra, "Extra")]
    fn test_category_strings(#[case] category: Category, #[case] expected: &str) {
        assert_eq!(category.as_str(), expected);
    }

    #[rstest]
    #[case(RecordKind::Products, "products.csv")]
    #[case(RecordKind::Fees, "fees.csv")]
    #[case(RecordKind::Limits, "limits.csv")]
    #[case(RecordKind::InterestTiers, "interest_tiers.csv")]
    fn test_record_kind_file_names(#[case] kind: RecordKind, #[case] expected: &str) {
        assert_eq!(kind.file_name(), expected);
    }

    #[test]
    fn test_product_field_roundtrip() {
        let mut product = Product::default();
        product
            .set_field("product_name", "Savings Account".to_string())
            .unwrap();

        assert_eq!(product.field("product_name"), Some("Savings Account"));
        assert_eq!(product.field("segment"), Some(""));
        assert_eq!(product.field("nonexistent"), None);
    }

    #[test]
    fn test_set_unknown_field_is_rejected() {
        let mut product = Product::default();
        let result = product.set_field("colour", "blue".to_string());

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            CatalogError::UnknownField { .. }
        ));
    }

    #[test]
    fn test_field_names_cover_every_field() {
        // Every declared field name must resolve on a default record.
        let product = Product::default();
        for name in Product::FIELDS {
            assert!(product.field(name).is_some(), "missing field {}", name);
        }

        let tier = InterestTier::default();
        for name in InterestTier::FIELDS {
            assert!(tier.field(name).is_some(), "missing field {}", name);
        }
    }
}
