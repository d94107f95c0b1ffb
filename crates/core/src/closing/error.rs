//! Closing error types.

use thiserror::Error;

use super::period::Period;

/// Errors that can occur during period closing.
#[derive(Debug, Error)]
pub enum ClosingError {
    /// A snapshot already exists for this scope and period.
    #[error("Period {period} is already closed for this counterparty")]
    AlreadyClosed {
        /// The period that was already closed.
        period: Period,
    },

    /// The month is not a calendar month.
    #[error("Invalid period: {year}-{month}")]
    InvalidPeriod {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
    },
}

impl ClosingError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyClosed { .. } => "ALREADY_CLOSED",
            Self::InvalidPeriod { .. } => "INVALID_PERIOD",
        }
    }
}
