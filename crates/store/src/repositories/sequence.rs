//! Voucher-number sequences.
//!
//! The source system allocates voucher numbers from a per-(business unit,
//! date) counter table; this repository is that counter. Allocation is
//! atomic, so concurrent postings on the same date never share a number.

use chrono::NaiveDate;
use dashmap::DashMap;
use jangbu_shared::types::BusinessUnitCode;

/// Per-(business unit, date) monotone counters.
#[derive(Debug, Default)]
pub struct SequenceRepository {
    counters: DashMap<(BusinessUnitCode, NaiveDate), u32>,
}

impl SequenceRepository {
    /// Creates an empty counter table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next sequence number for a business unit and date.
    ///
    /// The first allocation for a date returns 1.
    pub fn next(&self, business_unit: &BusinessUnitCode, date: NaiveDate) -> u32 {
        let mut counter = self
            .counters
            .entry((business_unit.clone(), date))
            .or_insert(0);
        *counter += 1;
        *counter
    }

    /// Returns the last allocated number for a date, if any.
    #[must_use]
    pub fn last(&self, business_unit: &BusinessUnitCode, date: NaiveDate) -> Option<u32> {
        self.counters
            .get(&(business_unit.clone(), date))
            .map(|counter| *counter)
    }
}
