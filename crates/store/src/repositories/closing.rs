//! Closing snapshot repository.

use chrono::NaiveDate;
use dashmap::DashMap;
use jangbu_core::closing::snapshot::{self, ClosingSnapshot};
use jangbu_core::closing::Period;

use crate::scope::ScopeKey;

/// Stored closing snapshots per scope.
#[derive(Debug, Default)]
pub struct ClosingRepository {
    snapshots: DashMap<ScopeKey, Vec<ClosingSnapshot>>,
}

impl ClosingRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a snapshot.
    pub fn insert(&self, scope: &ScopeKey, snapshot: ClosingSnapshot) {
        self.snapshots
            .entry(scope.clone())
            .or_default()
            .push(snapshot);
    }

    /// Finds the snapshot for a scope and period.
    #[must_use]
    pub fn find(&self, scope: &ScopeKey, period: Period) -> Option<ClosingSnapshot> {
        self.snapshots.get(scope).and_then(|snapshots| {
            snapshots
                .iter()
                .find(|snapshot| snapshot.period == period)
                .cloned()
        })
    }

    /// All snapshots for a scope, ordered by period.
    #[must_use]
    pub fn list(&self, scope: &ScopeKey) -> Vec<ClosingSnapshot> {
        let mut snapshots = self
            .snapshots
            .get(scope)
            .map(|snapshots| snapshots.clone())
            .unwrap_or_default();
        snapshots.sort_by_key(|snapshot| snapshot.period);
        snapshots
    }

    /// The latest freeze boundary for a scope, if any period is closed.
    #[must_use]
    pub fn latest_boundary(&self, scope: &ScopeKey) -> Option<NaiveDate> {
        self.snapshots
            .get(scope)
            .and_then(|snapshots| snapshot::latest_boundary(&snapshots))
    }
}
