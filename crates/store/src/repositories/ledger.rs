//! Ledger repository.
//!
//! One running-balance chain per scope. Chain mutations must happen under
//! the scope lock (see [`crate::scope::ScopeLocks`]); the repository itself
//! only guards map-level consistency.

use chrono::NaiveDate;
use dashmap::DashMap;
use jangbu_core::ledger::chain;
use jangbu_core::ledger::entry::{LedgerEntry, SortKey};
use jangbu_core::ledger::error::LedgerError;
use jangbu_core::voucher::reference::VoucherRef;
use jangbu_shared::types::pagination::{PageRequest, PageResponse};
use rust_decimal::Decimal;

use crate::scope::ScopeKey;

/// Per-scope running-balance chains.
#[derive(Debug, Default)]
pub struct LedgerRepository {
    chains: DashMap<ScopeKey, Vec<LedgerEntry>>,
}

impl LedgerRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry at its chronological position and recomputes the
    /// running balances after it.
    ///
    /// # Errors
    ///
    /// See [`chain::insert`].
    pub fn insert_entry(
        &self,
        scope: &ScopeKey,
        entry: LedgerEntry,
        boundary: Option<NaiveDate>,
    ) -> Result<LedgerEntry, LedgerError> {
        let mut entries = self.chains.entry(scope.clone()).or_default();
        let position = chain::insert(&mut entries, entry, boundary)?;
        Ok(entries[position].clone())
    }

    /// Removes the entry posted by a voucher and recomputes balances.
    ///
    /// # Errors
    ///
    /// See [`chain::remove_by_reference`].
    pub fn remove_by_reference(
        &self,
        scope: &ScopeKey,
        reference: &VoucherRef,
        boundary: Option<NaiveDate>,
    ) -> Result<LedgerEntry, LedgerError> {
        let mut entries = self
            .chains
            .get_mut(scope)
            .ok_or_else(|| LedgerError::EntryNotFound(reference.to_string()))?;
        chain::remove_by_reference(&mut entries, reference, boundary)
    }

    /// Returns true if an entry with this sort key exists in the scope.
    #[must_use]
    pub fn contains_sort_key(&self, scope: &ScopeKey, key: SortKey) -> bool {
        self.chains
            .get(scope)
            .is_some_and(|entries| entries.iter().any(|entry| entry.sort_key() == key))
    }

    /// The running balance after the last entry of a scope.
    #[must_use]
    pub fn current_balance(&self, scope: &ScopeKey) -> Decimal {
        self.chains
            .get(scope)
            .map_or(Decimal::ZERO, |entries| chain::current_balance(&entries))
    }

    /// All entries of a scope in chronological order.
    #[must_use]
    pub fn list(&self, scope: &ScopeKey) -> Vec<LedgerEntry> {
        self.chains
            .get(scope)
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// A page of a scope's entries in chronological order.
    #[must_use]
    pub fn list_page(&self, scope: &ScopeKey, page: &PageRequest) -> PageResponse<LedgerEntry> {
        let entries = self.list(scope);
        let total = entries.len() as u64;
        let data: Vec<LedgerEntry> = entries
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect();
        PageResponse::new(data, page.page, page.per_page, total)
    }

    /// Marks every entry dated at or before the boundary as closed.
    ///
    /// Returns the number of entries frozen.
    pub fn mark_closed_through(&self, scope: &ScopeKey, boundary: NaiveDate) -> usize {
        self.chains
            .get_mut(scope)
            .map_or(0, |mut entries| chain::mark_closed_through(&mut entries, boundary))
    }
}
