//! Quotation line item model

use serde::{Deserialize, Serialize};

/// Discount representation for a line item
///
/// Exactly one of `discount_percent` / `discount_amount` is
/// authoritative at any time; the calculator zeroes the inactive field
/// on every pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    /// Discount entered as a percentage of the basic amount (0-100)
    #[default]
    Percent,
    /// Discount entered as a fixed amount
    Amount,
}

/// Line item on a quotation or purchase order
///
/// Input fields come from the vendor's quotation; the trailing
/// `Option<f64>` fields are derived by the amount calculator and
/// overwritten on every recalculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuotationItem {
    /// Indent (requisition) number, half of the composite identity
    pub indent_no: String,
    /// Item code, the other half of the composite identity
    pub item_code: String,
    /// Item description
    pub name: String,
    /// Make / brand quoted by the vendor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    /// Unit of measure (e.g. "NOS", "KG")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Quantity. Negative values are accepted for credit-note-like
    /// corrections and propagate arithmetically.
    pub qty: f64,
    /// Rate per unit
    pub rate: f64,
    /// Which discount field is authoritative
    #[serde(default)]
    pub discount_type: DiscountType,
    /// Discount percentage (0-100), read only when `discount_type` is `Percent`
    #[serde(default)]
    pub discount_percent: f64,
    /// Fixed discount amount, read only when `discount_type` is `Amount`
    #[serde(default)]
    pub discount_amount: f64,
    /// GST rate percentage for this item
    #[serde(default)]
    pub tax_rate: f64,

    // === Computed Fields ===
    /// qty * rate, rounded for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic: Option<f64>,
    /// Effective discount amount used by the last calculation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Taxable value (basic minus discount), a.k.a. B.A.D.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_after_discount: Option<f64>,
    /// Integrated GST share (interstate documents only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub igst: Option<f64>,
    /// Central GST share (intrastate and union-territory documents)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cgst: Option<f64>,
    /// State GST share (intrastate documents only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sgst: Option<f64>,
    /// Union-territory GST share
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utgst: Option<f64>,
    /// Taxable value plus this item's tax shares
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_total: Option<f64>,
}

impl QuotationItem {
    /// Create a new item with no discount and no tax
    pub fn new(
        indent_no: impl Into<String>,
        item_code: impl Into<String>,
        name: impl Into<String>,
        qty: f64,
        rate: f64,
    ) -> Self {
        Self {
            indent_no: indent_no.into(),
            item_code: item_code.into(),
            name: name.into(),
            make: None,
            unit: None,
            qty,
            rate,
            discount_type: DiscountType::default(),
            discount_percent: 0.0,
            discount_amount: 0.0,
            tax_rate: 0.0,
            basic: None,
            discount: None,
            basic_after_discount: None,
            igst: None,
            cgst: None,
            sgst: None,
            utgst: None,
            line_total: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_type_default_is_percent() {
        assert_eq!(DiscountType::default(), DiscountType::Percent);
    }

    #[test]
    fn test_discount_type_serde_tag() {
        let json = serde_json::to_string(&DiscountType::Amount).unwrap();
        assert_eq!(json, "\"AMOUNT\"");
        let back: DiscountType = serde_json::from_str("\"PERCENT\"").unwrap();
        assert_eq!(back, DiscountType::Percent);
    }

    #[test]
    fn test_item_computed_fields_skipped_when_unset() {
        let item = QuotationItem::new("IND-1", "ITM-1", "Bearing", 2.0, 10.0);
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("basic_after_discount"));
        assert!(!json.contains("line_total"));
    }
}
