//! Core calculation layer for procurement documents
//!
//! Pure, synchronous business logic shared by the RFQ → Quotation →
//! Comparative Statement → Purchase Order workflow:
//! - Amount derivation: line-item and document totals (basic, discount,
//!   taxable value, GST split, document-level charges)
//! - Negotiation reconciliation: merging an agreed counter-offer back
//!   into the quoted item and refreshing derived totals
//! - Amount-in-words rendering (Indian numbering) for printed documents
//!
//! All monetary arithmetic runs in `rust_decimal::Decimal` internally
//! and is converted to `f64` at the serialization boundary.

pub mod error;
pub mod models;
pub mod money;
pub mod negotiation;
pub mod words;

// Re-exports
pub use error::{QuoteError, QuoteResult};
pub use models::amount::{AmountType, GstTreatment};
pub use models::charge::{Charge, ChargeType};
pub use models::line_item::{DiscountType, QuotationItem};
pub use models::negotiation::{NegotiationField, NegotiationItem};
pub use models::quotation::QuotationSnapshot;
pub use serde::{Deserialize, Serialize};
