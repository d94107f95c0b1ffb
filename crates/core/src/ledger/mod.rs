//! Receivable and payable ledgers.
//!
//! Each counterparty has a per-business-unit ledger: an append-ordered chain
//! of signed entries with a running balance. This module holds the entry
//! types and the pure chain math (sorted insert, removal, recomputation);
//! persistence and locking live in the store crate.

pub mod chain;
pub mod entry;
pub mod error;

#[cfg(test)]
mod chain_props;

pub use entry::{LedgerEntry, LedgerSide, SortKey};
pub use error::LedgerError;
