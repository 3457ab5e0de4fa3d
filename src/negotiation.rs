//! Negotiation reconciliation ("Agree" action)
//!
//! Merges an accepted counter-offer back into the quoted item with the
//! same indent + item-code identity, then re-runs the amount
//! calculator over the whole document. Derived totals are never
//! hand-patched here.

use crate::models::line_item::DiscountType;
use crate::models::negotiation::{NegotiationField, NegotiationItem};
use crate::models::quotation::QuotationSnapshot;
use crate::money;

/// Apply an agreed negotiation to its quoted item
///
/// Only the fields named in `negotiation_on` are merged. Accepting a
/// fixed discount forces the percent field to zero (and vice versa) to
/// preserve the mutual-exclusivity of the discount representation. A
/// `Make` override applies only when the offer names a non-empty make.
///
/// Returns `false` without touching the snapshot when no quoted item
/// matches the offer's composite key.
pub fn apply_agreement(snapshot: &mut QuotationSnapshot, negotiated: &NegotiationItem) -> bool {
    let Some(idx) = snapshot
        .items
        .iter()
        .position(|i| i.indent_no == negotiated.indent_no && i.item_code == negotiated.item_code)
    else {
        tracing::debug!(
            indent_no = %negotiated.indent_no,
            item_code = %negotiated.item_code,
            "no quoted item matches negotiation, skipping"
        );
        return false;
    };

    let item = &mut snapshot.items[idx];
    for field in &negotiated.negotiation_on {
        match field {
            NegotiationField::Rate => item.rate = negotiated.rate,
            NegotiationField::DiscountPercent => {
                item.discount_type = DiscountType::Percent;
                item.discount_percent = negotiated.discount_percent;
                item.discount_amount = 0.0;
            }
            NegotiationField::DiscountAmount => {
                item.discount_type = DiscountType::Amount;
                item.discount_amount = negotiated.discount_amount;
                item.discount_percent = 0.0;
            }
            NegotiationField::Make => {
                if let Some(make) = &negotiated.make {
                    if !make.is_empty() {
                        item.make = Some(make.clone());
                    }
                }
            }
            NegotiationField::BasicAfterDiscount => {
                // Refreshed by the recalculation below, written here so
                // the patch covers exactly the fields named by the offer
                item.basic_after_discount = Some(negotiated.basic_after_discount);
            }
        }
    }

    money::recalculate_amount(snapshot);
    true
}
