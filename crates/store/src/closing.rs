//! The period closing service.
//!
//! Closing a period freezes a counterparty's ledger through the period
//! boundary. The service holds the same scope lock as posting for the whole
//! snapshot computation, so no posting can slip into the period while it is
//! being closed; readers of already-closed history are unaffected.

use std::sync::Arc;

use jangbu_core::closing::snapshot::ClosingSnapshot;
use jangbu_core::closing::{ClosingError, Period};
use jangbu_core::ledger::entry::LedgerSide;
use jangbu_shared::config::EngineConfig;
use jangbu_shared::types::{BusinessUnitCode, CounterpartyCode};
use tracing::info;

use crate::error::PostingError;
use crate::repositories::Store;
use crate::scope::{ScopeKey, ScopeLocks};

/// Takes period closing snapshots.
#[derive(Debug)]
pub struct ClosingService {
    store: Arc<Store>,
    locks: Arc<ScopeLocks>,
    config: EngineConfig,
}

impl ClosingService {
    /// Creates a closing service over a store.
    #[must_use]
    pub fn new(store: Arc<Store>, locks: Arc<ScopeLocks>, config: EngineConfig) -> Self {
        Self {
            store,
            locks,
            config,
        }
    }

    /// Closes a period for one counterparty ledger.
    ///
    /// Records the running balance at the period boundary as a snapshot and
    /// marks every entry up to the boundary as closed. An empty ledger
    /// closes at balance zero.
    ///
    /// # Errors
    ///
    /// - `AlreadyClosed` if a snapshot exists for this scope and period
    /// - `Contention` if the scope lock stays contended
    pub async fn close(
        &self,
        side: LedgerSide,
        business_unit: &BusinessUnitCode,
        counterparty: &CounterpartyCode,
        period: Period,
    ) -> Result<ClosingSnapshot, PostingError> {
        let scope = ScopeKey {
            side,
            business_unit: business_unit.clone(),
            counterparty: counterparty.clone(),
        };

        let _guard = self.locks.acquire(&scope, &self.config.posting).await?;

        if self.store.closings().find(&scope, period).is_some() {
            return Err(ClosingError::AlreadyClosed { period }.into());
        }

        let entries = self.store.ledgers().list(&scope);
        let snapshot = ClosingSnapshot::take(period, side, business_unit, counterparty, &entries);

        let frozen = self
            .store
            .ledgers()
            .mark_closed_through(&scope, snapshot.boundary());
        self.store.closings().insert(&scope, snapshot.clone());

        info!(
            scope = %scope,
            %period,
            balance = %snapshot.balance,
            frozen,
            "period closed"
        );

        Ok(snapshot)
    }
}
