//! Quotation document snapshot
//!
//! The owning document for line items, charges and the derived amount
//! aggregate. The aggregate is recomputed synchronously on every
//! relevant edit and is never persisted independently of the document.

use super::amount::{AmountType, GstTreatment};
use super::charge::Charge;
use super::line_item::QuotationItem;
use serde::{Deserialize, Serialize};

/// A vendor's quotation against an RFQ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuotationSnapshot {
    /// Quotation number
    pub quotation_no: String,
    /// Source RFQ number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfq_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    /// Tax treatment, derived upstream from buyer/vendor state codes
    #[serde(default)]
    pub gst_treatment: GstTreatment,
    /// Quoted line items
    pub items: Vec<QuotationItem>,
    /// Document-level additional charges
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub charges: Vec<Charge>,
    /// Derived totals, overwritten on every recalculation
    #[serde(default)]
    pub amount: AmountType,
    /// Creation timestamp (Unix millis)
    pub created_at: i64,
    /// Last update timestamp (Unix millis)
    pub updated_at: i64,
}

impl QuotationSnapshot {
    /// Create a new empty quotation
    pub fn new(quotation_no: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            quotation_no: quotation_no.into(),
            rfq_no: None,
            vendor_id: None,
            vendor_name: None,
            gst_treatment: GstTreatment::default(),
            items: Vec::new(),
            charges: Vec::new(),
            amount: AmountType::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Look up an item by its composite identity
    pub fn find_item(&self, indent_no: &str, item_code: &str) -> Option<&QuotationItem> {
        self.items
            .iter()
            .find(|i| i.indent_no == indent_no && i.item_code == item_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_quotation_is_empty() {
        let snapshot = QuotationSnapshot::new("QTN-001");
        assert!(snapshot.items.is_empty());
        assert!(snapshot.charges.is_empty());
        assert_eq!(snapshot.amount, AmountType::default());
        assert_eq!(snapshot.gst_treatment, GstTreatment::Intrastate);
    }

    #[test]
    fn test_quotation_serde_roundtrip() {
        let mut snapshot = QuotationSnapshot::new("QTN-001");
        snapshot.vendor_name = Some("Acme Industrial".to_string());
        snapshot
            .items
            .push(QuotationItem::new("IND-1", "ITM-1", "Bearing", 4.0, 125.5));

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: QuotationSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_find_item_by_composite_key() {
        let mut snapshot = QuotationSnapshot::new("QTN-001");
        snapshot
            .items
            .push(QuotationItem::new("IND-1", "ITM-1", "Bearing", 4.0, 125.5));

        assert!(snapshot.find_item("IND-1", "ITM-1").is_some());
        assert!(snapshot.find_item("IND-1", "ITM-2").is_none());
        assert!(snapshot.find_item("IND-2", "ITM-1").is_none());
    }
}
