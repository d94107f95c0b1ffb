//! Closing snapshots.

use chrono::{DateTime, NaiveDate, Utc};
use jangbu_shared::types::{BusinessUnitCode, CounterpartyCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::chain;
use crate::ledger::entry::{LedgerEntry, LedgerSide};

use super::period::Period;

/// A frozen balance recorded at a period boundary.
///
/// Created only by the closing engine; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosingSnapshot {
    /// The period this snapshot closes.
    pub period: Period,
    /// Receivable or payable ledger.
    pub side: LedgerSide,
    /// Business unit scope.
    pub business_unit: BusinessUnitCode,
    /// Counterparty scope.
    pub counterparty: CounterpartyCode,
    /// Running balance of the last entry at or before the boundary
    /// (zero when the ledger is empty up to the boundary).
    pub balance: Decimal,
    /// When the snapshot was taken.
    pub closed_at: DateTime<Utc>,
}

impl ClosingSnapshot {
    /// Takes a snapshot of a ledger chain at a period boundary.
    ///
    /// Pure computation; the caller persists the snapshot and marks the
    /// frozen entries.
    #[must_use]
    pub fn take(
        period: Period,
        side: LedgerSide,
        business_unit: &BusinessUnitCode,
        counterparty: &CounterpartyCode,
        entries: &[LedgerEntry],
    ) -> Self {
        Self {
            period,
            side,
            business_unit: business_unit.clone(),
            counterparty: counterparty.clone(),
            balance: chain::balance_at_or_before(entries, period.end_date()),
            closed_at: Utc::now(),
        }
    }

    /// The last date this snapshot freezes.
    #[must_use]
    pub fn boundary(&self) -> NaiveDate {
        self.period.end_date()
    }
}

/// Returns the latest freeze boundary across a set of snapshots.
#[must_use]
pub fn latest_boundary(snapshots: &[ClosingSnapshot]) -> Option<NaiveDate> {
    snapshots.iter().map(ClosingSnapshot::boundary).max()
}
