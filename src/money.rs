//! Money calculation utilities using rust_decimal for precision
//!
//! This module derives line-item and document amounts for quotations
//! and purchase orders. All calculations are done using `Decimal`
//! internally, then converted to `f64` for storage/serialization.
//!
//! Per-item display values are rounded to 2 decimal places; document
//! aggregates accumulate unrounded item values first and round once
//! (sum-then-round) to minimize cumulative rounding error.

use crate::error::QuoteError;
use crate::models::amount::{AmountType, GstTreatment};
use crate::models::charge::Charge;
use crate::models::line_item::{DiscountType, QuotationItem};
use crate::models::quotation::QuotationSnapshot;
use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed rate per unit (₹10 crore)
const MAX_RATE: f64 = 100_000_000.0;
/// Maximum allowed quantity magnitude per item
const MAX_QUANTITY: f64 = 1_000_000.0;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> Result<(), QuoteError> {
    if !value.is_finite() {
        return Err(QuoteError::InvalidAmount(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate a QuotationItem before persisting
///
/// Negative quantities pass validation (credit-note-like corrections);
/// everything else follows the form layer's rules. The calculator
/// itself never calls this and degrades invalid input to zero instead.
pub fn validate_item(item: &QuotationItem) -> Result<(), QuoteError> {
    require_finite(item.qty, "qty")?;
    if item.qty.abs() > MAX_QUANTITY {
        return Err(QuoteError::InvalidQuantity(format!(
            "qty exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, item.qty
        )));
    }

    require_finite(item.rate, "rate")?;
    if item.rate < 0.0 {
        return Err(QuoteError::InvalidAmount(format!(
            "rate must be non-negative, got {}",
            item.rate
        )));
    }
    if item.rate > MAX_RATE {
        return Err(QuoteError::InvalidAmount(format!(
            "rate exceeds maximum allowed ({}), got {}",
            MAX_RATE, item.rate
        )));
    }

    require_finite(item.discount_percent, "discount_percent")?;
    if !(0.0..=100.0).contains(&item.discount_percent) {
        return Err(QuoteError::InvalidDiscount(format!(
            "discount_percent must be between 0 and 100, got {}",
            item.discount_percent
        )));
    }

    require_finite(item.discount_amount, "discount_amount")?;
    if item.discount_amount < 0.0 {
        return Err(QuoteError::InvalidDiscount(format!(
            "discount_amount must be non-negative, got {}",
            item.discount_amount
        )));
    }

    require_finite(item.tax_rate, "tax_rate")?;
    if item.tax_rate < 0.0 {
        return Err(QuoteError::InvalidTaxRate(format!(
            "tax_rate must be non-negative, got {}",
            item.tax_rate
        )));
    }

    Ok(())
}

/// Validate a document-level charge before persisting
pub fn validate_charge(charge: &Charge) -> Result<(), QuoteError> {
    require_finite(charge.amount, "charge amount")?;
    if charge.amount < 0.0 {
        return Err(QuoteError::InvalidAmount(format!(
            "charge amount must be non-negative, got {}",
            charge.amount
        )));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

#[inline]
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Basic amount for an item: qty * rate, unrounded
pub fn item_basic(item: &QuotationItem) -> Decimal {
    to_decimal(item.qty) * to_decimal(item.rate)
}

/// Effective discount for an item, unrounded
///
/// Only the field selected by `discount_type` is read; the inactive
/// field never enters the calculation.
pub fn item_discount(item: &QuotationItem) -> Decimal {
    match item.discount_type {
        DiscountType::Percent => {
            item_basic(item) * to_decimal(item.discount_percent) / Decimal::ONE_HUNDRED
        }
        DiscountType::Amount => to_decimal(item.discount_amount),
    }
}

/// Taxable value for an item: basic minus discount, unrounded
pub fn basic_after_discount(item: &QuotationItem) -> Decimal {
    item_basic(item) - item_discount(item)
}

/// Unrounded per-item breakdown
struct ItemAmounts {
    basic: Decimal,
    discount: Decimal,
    taxable: Decimal,
    igst: Decimal,
    cgst: Decimal,
    sgst: Decimal,
    utgst: Decimal,
}

fn item_amounts(item: &QuotationItem, treatment: GstTreatment) -> ItemAmounts {
    let basic = item_basic(item);
    let discount = item_discount(item);
    let taxable = basic - discount;
    let tax_rate = to_decimal(item.tax_rate);
    let tax = taxable * tax_rate / Decimal::ONE_HUNDRED;

    let (igst, cgst, sgst, utgst) = match treatment {
        GstTreatment::Interstate => (tax, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
        GstTreatment::Intrastate => {
            let half = tax / Decimal::TWO;
            (Decimal::ZERO, half, half, Decimal::ZERO)
        }
        GstTreatment::UnionTerritory => {
            let half = tax / Decimal::TWO;
            (Decimal::ZERO, half, Decimal::ZERO, half)
        }
    };

    ItemAmounts {
        basic,
        discount,
        taxable,
        igst,
        cgst,
        sgst,
        utgst,
    }
}

/// Maximum tax rate across the document's items (zero when empty)
fn max_tax_rate(items: &[QuotationItem]) -> Decimal {
    items
        .iter()
        .map(|i| to_decimal(i.tax_rate))
        .max()
        .unwrap_or(Decimal::ZERO)
}

/// Derive the document amount aggregate from items and charges
///
/// Pure function of its inputs: no side effects, deterministic, safe
/// to call repeatedly. Unused tax buckets are `None` so that
/// IGST vs CGST+SGST vs CGST+UTGST stay mutually exclusive in the
/// output.
pub fn calculate_amount(
    items: &[QuotationItem],
    charges: &[Charge],
    treatment: GstTreatment,
) -> AmountType {
    let mut basic_sum = Decimal::ZERO;
    let mut discount_sum = Decimal::ZERO;
    let mut taxable_sum = Decimal::ZERO;
    let mut igst_sum = Decimal::ZERO;
    let mut cgst_sum = Decimal::ZERO;
    let mut sgst_sum = Decimal::ZERO;
    let mut utgst_sum = Decimal::ZERO;

    for item in items {
        let amounts = item_amounts(item, treatment);
        basic_sum += amounts.basic;
        discount_sum += amounts.discount;
        taxable_sum += amounts.taxable;
        igst_sum += amounts.igst;
        cgst_sum += amounts.cgst;
        sgst_sum += amounts.sgst;
        utgst_sum += amounts.utgst;
    }

    // Charge GST is levied at the maximum item tax rate and rounded
    // per charge, since each charge line prints its own GST amount
    let gst_rate = max_tax_rate(items);
    let mut charges_sum = Decimal::ZERO;
    let mut charges_gst_sum = Decimal::ZERO;
    for charge in charges {
        let amount = to_decimal(charge.amount);
        charges_sum += amount;
        charges_gst_sum += round2(amount * gst_rate / Decimal::ONE_HUNDRED);
    }

    let total = taxable_sum
        + igst_sum
        + cgst_sum
        + sgst_sum
        + utgst_sum
        + charges_sum
        + charges_gst_sum;

    let (igst, cgst, sgst, utgst) = match treatment {
        GstTreatment::Interstate => (Some(to_f64(igst_sum)), None, None, None),
        GstTreatment::Intrastate => (None, Some(to_f64(cgst_sum)), Some(to_f64(sgst_sum)), None),
        GstTreatment::UnionTerritory => {
            (None, Some(to_f64(cgst_sum)), None, Some(to_f64(utgst_sum)))
        }
    };

    AmountType {
        basic: to_f64(basic_sum),
        discount: to_f64(discount_sum),
        taxable: to_f64(taxable_sum),
        igst,
        cgst,
        sgst,
        utgst,
        other_charges: to_f64(charges_sum),
        other_charges_gst: to_f64(charges_gst_sum),
        total: to_f64(total),
    }
}

/// Recalculate all derived amounts on a quotation in place
///
/// The entry point form handlers call after every rate/qty/discount/
/// charge edit. Writes each item's rounded display fields, normalizes
/// the inactive discount field to zero, refreshes per-charge GST and
/// replaces the document aggregate.
pub fn recalculate_amount(snapshot: &mut QuotationSnapshot) {
    let treatment = snapshot.gst_treatment;

    for item in &mut snapshot.items {
        // Enforce the mutual-exclusivity invariant of the discount
        // representation before anything reads the fields
        match item.discount_type {
            DiscountType::Percent => item.discount_amount = 0.0,
            DiscountType::Amount => item.discount_percent = 0.0,
        }

        let amounts = item_amounts(item, treatment);
        item.basic = Some(to_f64(amounts.basic));
        item.discount = Some(to_f64(amounts.discount));
        item.basic_after_discount = Some(to_f64(amounts.taxable));
        match treatment {
            GstTreatment::Interstate => {
                item.igst = Some(to_f64(amounts.igst));
                item.cgst = None;
                item.sgst = None;
                item.utgst = None;
            }
            GstTreatment::Intrastate => {
                item.igst = None;
                item.cgst = Some(to_f64(amounts.cgst));
                item.sgst = Some(to_f64(amounts.sgst));
                item.utgst = None;
            }
            GstTreatment::UnionTerritory => {
                item.igst = None;
                item.cgst = Some(to_f64(amounts.cgst));
                item.sgst = None;
                item.utgst = Some(to_f64(amounts.utgst));
            }
        }
        item.line_total = Some(to_f64(
            amounts.taxable + amounts.igst + amounts.cgst + amounts.sgst + amounts.utgst,
        ));
    }

    let gst_rate = max_tax_rate(&snapshot.items);
    for charge in &mut snapshot.charges {
        let gst = round2(to_decimal(charge.amount) * gst_rate / Decimal::ONE_HUNDRED);
        charge.gst_rate = Some(to_f64(gst_rate));
        charge.gst_amount = Some(to_f64(gst));
    }

    snapshot.amount = calculate_amount(&snapshot.items, &snapshot.charges, treatment);
    snapshot.updated_at = chrono::Utc::now().timestamp_millis();
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}
