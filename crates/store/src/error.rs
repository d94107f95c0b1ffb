//! Storage-layer error types.

use jangbu_core::closing::ClosingError;
use jangbu_core::ledger::LedgerError;
use jangbu_core::voucher::VoucherError;
use thiserror::Error;

/// Errors surfaced by the posting and closing services.
#[derive(Debug, Error)]
pub enum PostingError {
    /// Voucher pipeline error (validation, amounts, assembly).
    #[error(transparent)]
    Voucher(#[from] VoucherError),

    /// Ledger chain error (closed period, duplicates, missing entries).
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Closing error (already closed, invalid period).
    #[error(transparent)]
    Closing(#[from] ClosingError),

    /// No active voucher exists for the reference.
    #[error("No active voucher for reference {0}")]
    VoucherNotFound(String),

    /// The counterparty scope lock stayed contended past the retry budget.
    ///
    /// Transient: the caller may retry the whole posting.
    #[error("Counterparty ledger is busy after {attempts} attempts, please retry")]
    Contention {
        /// Number of acquisition attempts made.
        attempts: u32,
    },
}

impl PostingError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Voucher(err) => err.error_code(),
            Self::Ledger(err) => err.error_code(),
            Self::Closing(err) => err.error_code(),
            Self::VoucherNotFound(_) => "VOUCHER_NOT_FOUND",
            Self::Contention { .. } => "CONTENTION",
        }
    }

    /// Returns true if this error is transient and worth retrying.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Contention { .. })
    }
}
