//! Document amount aggregate

use serde::{Deserialize, Serialize};

/// GST treatment of the document, supplied by the caller
///
/// Which treatment applies depends on the buyer/vendor state codes;
/// that comparison happens upstream, this layer only consumes the
/// resulting flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GstTreatment {
    /// Buyer and vendor in the same state: tax splits into CGST + SGST
    #[default]
    Intrastate,
    /// Different states: the entire tax goes to IGST
    Interstate,
    /// Union territory: tax splits into CGST + UTGST
    UnionTerritory,
}

/// Derived financial totals for a quotation or purchase order
///
/// A projection of the current item/charge state, fully overwritten on
/// every recalculation and never edited directly. The tax buckets are
/// mutually exclusive per `GstTreatment`; unused buckets stay `None`.
/// All values are rounded to 2 decimal places at the aggregate level
/// (unrounded sums are accumulated first).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct AmountType {
    /// Sum of qty * rate across items
    pub basic: f64,
    /// Sum of effective item discounts
    pub discount: f64,
    /// Sum of taxable values (basic minus discount)
    pub taxable: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub igst: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cgst: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sgst: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utgst: Option<f64>,
    /// Sum of document-level charge amounts
    #[serde(default)]
    pub other_charges: f64,
    /// GST levied on the charges at the maximum item tax rate
    #[serde(default)]
    pub other_charges_gst: f64,
    /// taxable + tax buckets + charges + charge GST
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gst_treatment_default_is_intrastate() {
        assert_eq!(GstTreatment::default(), GstTreatment::Intrastate);
    }

    #[test]
    fn test_amount_type_default_is_all_zero() {
        let amount = AmountType::default();
        assert_eq!(amount.basic, 0.0);
        assert_eq!(amount.total, 0.0);
        assert_eq!(amount.igst, None);
        assert_eq!(amount.cgst, None);
    }

    #[test]
    fn test_unused_tax_buckets_not_serialized() {
        let amount = AmountType {
            taxable: 900.0,
            cgst: Some(81.0),
            sgst: Some(81.0),
            total: 1062.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&amount).unwrap();
        assert!(json.contains("cgst"));
        assert!(!json.contains("igst"));
        assert!(!json.contains("utgst"));
    }
}
