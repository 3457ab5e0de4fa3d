//! Document-level additional charges

use serde::{Deserialize, Serialize};

/// Charge type tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeType {
    OtherCharges,
    PackagingForwarding,
    Freight,
    Insurance,
}

/// Additional charge applied at document level
///
/// GST on a charge is levied at the maximum tax rate found across the
/// document's line items; `gst_rate` and `gst_amount` are derived by
/// the calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Charge {
    pub charge_type: ChargeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,

    // === Computed Fields ===
    /// Maximum item tax rate at the time of the last calculation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_rate: Option<f64>,
    /// amount * gst_rate / 100, rounded to 2 decimal places
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_amount: Option<f64>,
}

impl Charge {
    pub fn new(charge_type: ChargeType, amount: f64) -> Self {
        Self {
            charge_type,
            description: None,
            amount,
            gst_rate: None,
            gst_amount: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_type_serde_tag() {
        let json = serde_json::to_string(&ChargeType::PackagingForwarding).unwrap();
        assert_eq!(json, "\"PACKAGING_FORWARDING\"");
    }

    #[test]
    fn test_new_charge_has_no_derived_gst() {
        let charge = Charge::new(ChargeType::Freight, 250.0);
        assert_eq!(charge.gst_rate, None);
        assert_eq!(charge.gst_amount, None);
    }
}
