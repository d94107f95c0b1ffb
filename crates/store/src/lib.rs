//! Storage layer for Jangbu.
//!
//! In-memory repositories for vouchers, ledgers, closing snapshots, and
//! voucher-number sequences, plus the services that mutate them atomically:
//!
//! - [`PostingService`] - posts and voids inventory transactions and cash
//!   settlements
//! - [`ClosingService`] - takes period closing snapshots
//!
//! Concurrency: postings against the same (side, business unit,
//! counterparty) scope serialize on a [`scope::ScopeLocks`] mutex held for
//! the balance read-compute-write; different scopes proceed in parallel.

pub mod closing;
pub mod error;
pub mod posting;
pub mod repositories;
pub mod scope;

pub use closing::ClosingService;
pub use error::PostingError;
pub use posting::{PostingOutcome, PostingService, VoidOutcome};
pub use repositories::Store;
pub use scope::{ScopeKey, ScopeLocks};
