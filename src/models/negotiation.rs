//! Negotiation counter-offer model

use crate::models::line_item::QuotationItem;
use crate::money;
use serde::{Deserialize, Serialize};

/// Fields a buyer may negotiate on a quoted item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NegotiationField {
    Rate,
    DiscountPercent,
    DiscountAmount,
    Make,
    BasicAfterDiscount,
}

/// A proposed counter-offer for one quoted item
///
/// Only the fields named in `negotiation_on` are meaningful for this
/// round; everything else is ignored when the offer is merged back
/// into the quotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NegotiationItem {
    /// Indent number of the quoted item this offer targets
    pub indent_no: String,
    /// Item code of the quoted item this offer targets
    pub item_code: String,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub discount_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    /// Negotiated taxable value (B.A.D.)
    #[serde(default)]
    pub basic_after_discount: f64,
    /// Quoted minus negotiated basic-after-discount
    #[serde(default)]
    pub savings: f64,
    /// Which fields are active for this negotiation round
    pub negotiation_on: Vec<NegotiationField>,
}

impl NegotiationItem {
    /// Difference between the quoted item's basic-after-discount and
    /// this offer's, rounded to 2 decimal places
    pub fn savings_against(&self, quoted: &QuotationItem) -> f64 {
        money::to_f64(
            money::basic_after_discount(quoted) - money::to_decimal(self.basic_after_discount),
        )
    }
}
