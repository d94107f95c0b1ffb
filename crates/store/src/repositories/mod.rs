//! In-memory repositories.
//!
//! One repository per aggregate, each backed by a sharded concurrent map.
//! Repositories are plain data access: invariants that span repositories
//! (atomicity, scope serialization) are the services' responsibility.

pub mod closing;
pub mod ledger;
pub mod sequence;
pub mod voucher;

pub use closing::ClosingRepository;
pub use ledger::LedgerRepository;
pub use sequence::SequenceRepository;
pub use voucher::VoucherRepository;

/// The engine's storage bundle.
#[derive(Debug, Default)]
pub struct Store {
    vouchers: VoucherRepository,
    ledgers: LedgerRepository,
    closings: ClosingRepository,
    sequences: SequenceRepository,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Voucher repository.
    #[must_use]
    pub fn vouchers(&self) -> &VoucherRepository {
        &self.vouchers
    }

    /// Ledger repository.
    #[must_use]
    pub fn ledgers(&self) -> &LedgerRepository {
        &self.ledgers
    }

    /// Closing snapshot repository.
    #[must_use]
    pub fn closings(&self) -> &ClosingRepository {
        &self.closings
    }

    /// Voucher-number sequence repository.
    #[must_use]
    pub fn sequences(&self) -> &SequenceRepository {
        &self.sequences
    }
}
