//! Ledger error types.

use chrono::NaiveDate;
use thiserror::Error;

use super::entry::SortKey;

/// Errors that can occur while mutating a ledger chain.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The target position falls at or behind a closing boundary.
    #[error("Ledger is closed through {boundary}; cannot post at or before it")]
    ClosedPeriod {
        /// Last date covered by the latest closing snapshot.
        boundary: NaiveDate,
    },

    /// No entry exists for the given reference.
    #[error("Ledger entry not found for reference {0}")]
    EntryNotFound(String),

    /// An entry with the same sort key already exists.
    #[error("Duplicate ledger entry at {date} #{number}")]
    DuplicateEntry {
        /// Transaction date of the clashing entry.
        date: NaiveDate,
        /// Transaction number of the clashing entry.
        number: u32,
    },
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ClosedPeriod { .. } => "CLOSED_PERIOD",
            Self::EntryNotFound(_) => "ENTRY_NOT_FOUND",
            Self::DuplicateEntry { .. } => "DUPLICATE_ENTRY",
        }
    }

    /// Builds a `DuplicateEntry` from a sort key.
    #[must_use]
    pub fn duplicate(key: SortKey) -> Self {
        Self::DuplicateEntry {
            date: key.date,
            number: key.number,
        }
    }
}
