//! Per-counterparty scope locks.
//!
//! Running-balance computation is the one place true concurrency
//! correctness is load-bearing: two postings reading the same prior balance
//! would both extend the chain from it and lose an update. Every mutation of
//! a counterparty's ledger therefore holds the exclusive lock for its
//! (side, business unit, counterparty) scope across the read-compute-write.
//!
//! Acquisition is bounded: a configurable number of `try_lock` attempts with
//! a sleep between them, after which the posting surfaces a transient
//! failure instead of queueing indefinitely.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use jangbu_core::ledger::LedgerSide;
use jangbu_shared::config::PostingConfig;
use jangbu_shared::types::{BusinessUnitCode, CounterpartyCode};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::warn;

use crate::error::PostingError;

/// The serialization scope of a ledger mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeKey {
    /// Receivable or payable ledger.
    pub side: LedgerSide,
    /// Business unit.
    pub business_unit: BusinessUnitCode,
    /// Counterparty.
    pub counterparty: CounterpartyCode,
}

impl std::fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}/{}/{}",
            self.side, self.business_unit, self.counterparty
        )
    }
}

/// Lock table keyed by scope.
///
/// Locks are created lazily on first use and never removed; the set of
/// (business unit, counterparty) pairs is small and stable.
#[derive(Debug, Default)]
pub struct ScopeLocks {
    locks: DashMap<ScopeKey, Arc<Mutex<()>>>,
}

impl ScopeLocks {
    /// Creates an empty lock table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the exclusive lock for a scope.
    ///
    /// # Errors
    ///
    /// Returns `Contention` after `policy.lock_retry_attempts` failed
    /// attempts.
    pub async fn acquire(
        &self,
        key: &ScopeKey,
        policy: &PostingConfig,
    ) -> Result<OwnedMutexGuard<()>, PostingError> {
        let mutex = self
            .locks
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let attempts = policy.lock_retry_attempts.max(1);
        for attempt in 1..=attempts {
            if let Ok(guard) = Arc::clone(&mutex).try_lock_owned() {
                return Ok(guard);
            }
            if attempt < attempts {
                warn!(scope = %key, attempt, "scope lock contended, retrying");
                tokio::time::sleep(Duration::from_millis(policy.lock_retry_delay_ms)).await;
            }
        }

        Err(PostingError::Contention { attempts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(counterparty: &str) -> ScopeKey {
        ScopeKey {
            side: LedgerSide::Payable,
            business_unit: BusinessUnitCode::new("01"),
            counterparty: CounterpartyCode::new(counterparty),
        }
    }

    fn fast_policy() -> PostingConfig {
        PostingConfig {
            lock_retry_attempts: 3,
            lock_retry_delay_ms: 1,
        }
    }

    #[tokio::test]
    async fn test_acquire_uncontended() {
        let locks = ScopeLocks::new();
        let guard = locks.acquire(&scope("S001"), &fast_policy()).await;
        assert!(guard.is_ok());
    }

    #[tokio::test]
    async fn test_distinct_scopes_do_not_contend() {
        let locks = ScopeLocks::new();
        let _a = locks.acquire(&scope("S001"), &fast_policy()).await.unwrap();
        let b = locks.acquire(&scope("S002"), &fast_policy()).await;
        assert!(b.is_ok());
    }

    #[tokio::test]
    async fn test_held_lock_exhausts_retries() {
        let locks = ScopeLocks::new();
        let _held = locks.acquire(&scope("S001"), &fast_policy()).await.unwrap();

        let result = locks.acquire(&scope("S001"), &fast_policy()).await;
        assert!(matches!(
            result,
            Err(PostingError::Contention { attempts: 3 })
        ));
    }

    #[tokio::test]
    async fn test_released_lock_can_be_reacquired() {
        let locks = ScopeLocks::new();
        {
            let _guard = locks.acquire(&scope("S001"), &fast_policy()).await.unwrap();
        }
        assert!(locks.acquire(&scope("S001"), &fast_policy()).await.is_ok());
    }
}
