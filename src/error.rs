//! Error types for quotation input validation
//!
//! The calculator itself never raises: invalid numeric input degrades
//! to zero-valued output so live form editing is never blocked. These
//! errors exist only on the explicit validation surface that callers
//! run before persisting a document.

use thiserror::Error;

/// Validation errors for quotation items and charges
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid discount: {0}")]
    InvalidDiscount(String),

    #[error("Invalid tax rate: {0}")]
    InvalidTaxRate(String),
}

pub type QuoteResult<T> = Result<T, QuoteError>;
