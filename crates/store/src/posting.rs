//! The posting service.
//!
//! Runs the whole per-transaction pipeline as one atomic unit: ingest
//! validation, VAT split, rule resolution, voucher assembly, and the ledger
//! update either all become visible together or not at all. Shared tables
//! are only mutated after every check has passed, while the counterparty
//! scope lock is held.

use std::sync::Arc;

use jangbu_core::inventory::{CashMovement, Direction, InventoryTransaction};
use jangbu_core::ledger::entry::{LedgerEntry, LedgerSide, SortKey};
use jangbu_core::ledger::error::LedgerError;
use jangbu_core::settlement;
use jangbu_core::voucher::builder::VoucherBuilder;
use jangbu_core::voucher::ingest::validate_for_posting;
use jangbu_core::voucher::reference::VoucherRef;
use jangbu_core::voucher::rules::{self, ResolvedLine};
use jangbu_core::voucher::types::{Voucher, VoucherNo};
use jangbu_core::voucher::vat::VatBreakdown;
use jangbu_core::voucher::VoucherError;
use jangbu_shared::config::EngineConfig;
use jangbu_shared::types::LedgerEntryId;
use rust_decimal::Decimal;
use tracing::{error, info};

use crate::error::PostingError;
use crate::repositories::Store;
use crate::scope::{ScopeKey, ScopeLocks};

/// Result of a posting.
#[derive(Debug, Clone)]
pub struct PostingOutcome {
    /// The voucher for the source transaction.
    pub voucher: Voucher,
    /// The ledger entry as stored, with its running balance.
    pub entry: LedgerEntry,
    /// False when an active voucher already existed (idempotent re-post).
    pub created: bool,
}

/// Result of a void.
#[derive(Debug, Clone)]
pub struct VoidOutcome {
    /// False when no active voucher existed for the reference.
    pub removed: bool,
}

/// Posts and voids inventory transactions and cash settlements.
#[derive(Debug)]
pub struct PostingService {
    store: Arc<Store>,
    locks: Arc<ScopeLocks>,
    config: EngineConfig,
}

impl PostingService {
    /// Creates a posting service over a store.
    #[must_use]
    pub fn new(store: Arc<Store>, locks: Arc<ScopeLocks>, config: EngineConfig) -> Self {
        Self {
            store,
            locks,
            config,
        }
    }

    /// Posts an inventory transaction: builds its voucher and appends the
    /// receivable/payable ledger entry.
    ///
    /// Idempotent: re-posting a transaction whose voucher is still active
    /// returns the existing voucher unchanged.
    ///
    /// # Errors
    ///
    /// Validation errors reject before any mutation; `Contention` is
    /// transient and worth retrying.
    pub async fn post_transaction(
        &self,
        tx: &InventoryTransaction,
    ) -> Result<PostingOutcome, PostingError> {
        let direction = validate_for_posting(tx)?;
        let amounts = VatBreakdown::split(tx.quantity, tx.unit_price, tx.vat)?;
        let resolved = rules::resolve(direction, &amounts)?;
        let reference = VoucherRef::for_transaction(direction, tx.date, tx.number);

        let scope = ScopeKey {
            side: LedgerSide::from(direction),
            business_unit: tx.business_unit.clone(),
            counterparty: tx.counterparty.clone(),
        };

        self.post_lines(
            &scope,
            reference,
            &resolved,
            amounts.total,
            PendingEntry {
                date: tx.date,
                number: tx.number,
                time: tx.time,
                memo: tx.memo.clone(),
            },
        )
        .await
    }

    /// Posts a cash settlement: builds its voucher and appends the negative
    /// ledger entry that settles the counterparty balance.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::post_transaction`].
    pub async fn post_settlement(
        &self,
        movement: &CashMovement,
    ) -> Result<PostingOutcome, PostingError> {
        let resolved = settlement::resolve(movement)?;
        let reference = VoucherRef::new(movement.kind.into(), movement.date, movement.number);

        let scope = ScopeKey {
            side: settlement::ledger_side(movement.kind),
            business_unit: movement.business_unit.clone(),
            counterparty: movement.counterparty.clone(),
        };

        self.post_lines(
            &scope,
            reference,
            &resolved,
            settlement::ledger_delta(movement),
            PendingEntry {
                date: movement.date,
                number: movement.number,
                time: movement.time,
                memo: movement.memo.clone(),
            },
        )
        .await
    }

    /// Voids a transaction: deactivates its voucher, removes its ledger
    /// entry, and recomputes the running balances after it.
    ///
    /// Returns `removed: false` when no active voucher exists (the
    /// transaction was never posted, or was already voided).
    ///
    /// # Errors
    ///
    /// `ClosedPeriod` if the entry is behind a closing boundary;
    /// `UnknownDirection` if the record's direction flag is invalid.
    pub async fn void_transaction(
        &self,
        tx: &InventoryTransaction,
    ) -> Result<VoidOutcome, PostingError> {
        let direction = Direction::from_code(tx.direction_code)
            .ok_or(VoucherError::UnknownDirection(tx.direction_code))?;
        let reference = VoucherRef::for_transaction(direction, tx.date, tx.number);

        let scope = ScopeKey {
            side: LedgerSide::from(direction),
            business_unit: tx.business_unit.clone(),
            counterparty: tx.counterparty.clone(),
        };

        self.void_lines(&scope, &reference).await
    }

    /// Voids a cash settlement.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::void_transaction`].
    pub async fn void_settlement(
        &self,
        movement: &CashMovement,
    ) -> Result<VoidOutcome, PostingError> {
        let reference = VoucherRef::new(movement.kind.into(), movement.date, movement.number);

        let scope = ScopeKey {
            side: settlement::ledger_side(movement.kind),
            business_unit: movement.business_unit.clone(),
            counterparty: movement.counterparty.clone(),
        };

        self.void_lines(&scope, &reference).await
    }

    /// The shared commit path: everything after validation and rule
    /// resolution, executed under the scope lock.
    async fn post_lines(
        &self,
        scope: &ScopeKey,
        reference: VoucherRef,
        resolved: &[ResolvedLine],
        ledger_amount: Decimal,
        pending: PendingEntry,
    ) -> Result<PostingOutcome, PostingError> {
        let _guard = self.locks.acquire(scope, &self.config.posting).await?;

        // Idempotency: the same source transaction posts exactly once while
        // its voucher is active.
        if let Some(existing) = self.store.vouchers().find_active_by_reference(&reference) {
            let entry = self
                .store
                .ledgers()
                .list(scope)
                .into_iter()
                .find(|entry| entry.reference == reference)
                .ok_or_else(|| PostingError::VoucherNotFound(reference.to_string()))?;
            info!(%reference, "already posted, returning existing voucher");
            return Ok(PostingOutcome {
                voucher: existing,
                entry,
                created: false,
            });
        }

        // All checks before any mutation.
        let boundary = self.store.closings().latest_boundary(scope);
        if let Some(boundary) = boundary {
            if pending.date <= boundary {
                return Err(LedgerError::ClosedPeriod { boundary }.into());
            }
        }
        let sort_key = SortKey {
            date: pending.date,
            number: pending.number,
            time: pending.time,
        };
        if self.store.ledgers().contains_sort_key(scope, sort_key) {
            return Err(LedgerError::duplicate(sort_key).into());
        }

        let seq = self
            .store
            .sequences()
            .next(&scope.business_unit, pending.date);
        let voucher = VoucherBuilder::build(
            &scope.business_unit,
            VoucherNo::new(pending.date, seq),
            reference,
            resolved,
            &self.config.chart,
            pending.memo.as_deref(),
        )
        .inspect_err(|err| {
            if err.is_integrity_fault() {
                // A logic defect upstream, not bad input. Be loud.
                error!(%reference, %err, "voucher failed the balance invariant, aborting posting");
            }
        })?;

        let entry = self.store.ledgers().insert_entry(
            scope,
            LedgerEntry {
                id: LedgerEntryId::new(),
                side: scope.side,
                business_unit: scope.business_unit.clone(),
                counterparty: scope.counterparty.clone(),
                date: pending.date,
                number: pending.number,
                time: pending.time,
                amount: ledger_amount,
                balance: Decimal::ZERO,
                is_closed: false,
                reference,
                memo: pending.memo.clone(),
            },
            boundary,
        )?;

        self.store.vouchers().insert(voucher.clone());

        info!(
            %reference,
            voucher_no = %voucher.voucher_no,
            balance = %entry.balance,
            "posted"
        );

        Ok(PostingOutcome {
            voucher,
            entry,
            created: true,
        })
    }

    /// The shared void path, executed under the scope lock.
    async fn void_lines(
        &self,
        scope: &ScopeKey,
        reference: &VoucherRef,
    ) -> Result<VoidOutcome, PostingError> {
        let _guard = self.locks.acquire(scope, &self.config.posting).await?;

        if self
            .store
            .vouchers()
            .find_active_by_reference(reference)
            .is_none()
        {
            info!(%reference, "void requested but no active voucher exists");
            return Ok(VoidOutcome { removed: false });
        }

        let boundary = self.store.closings().latest_boundary(scope);
        self.store
            .ledgers()
            .remove_by_reference(scope, reference, boundary)?;
        self.store.vouchers().deactivate(reference);

        info!(%reference, "voided");
        Ok(VoidOutcome { removed: true })
    }
}

/// Ledger-entry fields staged before commit.
struct PendingEntry {
    date: chrono::NaiveDate,
    number: u32,
    time: chrono::NaiveTime,
    memo: Option<String>,
}
