//! Domain models for procurement documents
//!
//! Serde-serializable types shared across the workflow:
//! - Line items and their discount representation
//! - Document-level charges
//! - The derived amount aggregate
//! - Negotiation counter-offers
//! - The quotation document snapshot

pub mod amount;
pub mod charge;
pub mod line_item;
pub mod negotiation;
pub mod quotation;

// Re-exports
pub use amount::{AmountType, GstTreatment};
pub use charge::{Charge, ChargeType};
pub use line_item::{DiscountType, QuotationItem};
pub use negotiation::{NegotiationField, NegotiationItem};
pub use quotation::QuotationSnapshot;
