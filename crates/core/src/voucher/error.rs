//! Voucher pipeline error types.
//!
//! Covers every failure the per-transaction posting pipeline can produce,
//! from ingest validation through voucher assembly.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while generating a voucher.
#[derive(Debug, Error)]
pub enum VoucherError {
    // ========== Ingest Errors ==========
    /// The source transaction is voided/inactive.
    #[error("Transaction is inactive and cannot be posted")]
    InactiveTransaction,

    /// The transaction has no counterparty but its type requires one.
    #[error("Transaction has no counterparty code")]
    MissingCounterparty,

    /// The direction flag is not a known value.
    #[error("Unknown transaction direction code: {0}")]
    UnknownDirection(u8),

    // ========== Amount Errors ==========
    /// Supply or VAT amount is negative.
    #[error("Supply and VAT amounts cannot be negative")]
    NegativeAmount,

    // ========== Assembly Errors ==========
    /// The assembled voucher does not balance (debits != credits).
    ///
    /// Defensive: can only arise from a defect in the amount breakdown or
    /// the posting rule table, and must abort the whole posting.
    #[error("Voucher is not balanced. Debit: {debit}, Credit: {credit}")]
    UnbalancedVoucher {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// The voucher would have no lines.
    #[error("Voucher must have at least one line")]
    NoLines,

    // ========== Reference Errors ==========
    /// A reference string could not be parsed.
    #[error("Invalid voucher reference: {0}")]
    InvalidReference(String),
}

impl VoucherError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InactiveTransaction => "INACTIVE_TRANSACTION",
            Self::MissingCounterparty => "MISSING_COUNTERPARTY",
            Self::UnknownDirection(_) => "UNKNOWN_DIRECTION",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::UnbalancedVoucher { .. } => "UNBALANCED_VOUCHER",
            Self::NoLines => "NO_LINES",
            Self::InvalidReference(_) => "INVALID_REFERENCE",
        }
    }

    /// Returns true if this error indicates a bookkeeping integrity fault
    /// rather than bad input.
    ///
    /// Integrity faults must be surfaced loudly (error-level logging), never
    /// silently skipped.
    #[must_use]
    pub fn is_integrity_fault(&self) -> bool {
        matches!(self, Self::UnbalancedVoucher { .. })
    }
}
