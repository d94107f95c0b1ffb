//! Voucher repository.

use chrono::NaiveDate;
use dashmap::DashMap;
use jangbu_core::voucher::reference::VoucherRef;
use jangbu_core::voucher::types::{Voucher, VoucherNo};
use jangbu_shared::types::BusinessUnitCode;

/// Stored vouchers, keyed by reference string.
///
/// The reference is the bijective link to the source transaction, so it is
/// the primary key; a secondary index serves voucher-number lookups.
/// Voiding flips the active flag rather than deleting, mirroring the source
/// system's use flag.
#[derive(Debug, Default)]
pub struct VoucherRepository {
    by_reference: DashMap<VoucherRef, Voucher>,
    by_number: DashMap<(BusinessUnitCode, VoucherNo), VoucherRef>,
}

impl VoucherRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a voucher, replacing any voided predecessor with the same
    /// reference.
    pub fn insert(&self, voucher: Voucher) {
        self.by_number.insert(
            (voucher.business_unit.clone(), voucher.voucher_no),
            voucher.reference,
        );
        self.by_reference.insert(voucher.reference, voucher);
    }

    /// Finds a voucher by reference, active or not.
    #[must_use]
    pub fn find_by_reference(&self, reference: &VoucherRef) -> Option<Voucher> {
        self.by_reference
            .get(reference)
            .map(|voucher| voucher.clone())
    }

    /// Finds the active voucher for a reference.
    #[must_use]
    pub fn find_active_by_reference(&self, reference: &VoucherRef) -> Option<Voucher> {
        self.by_reference
            .get(reference)
            .filter(|voucher| voucher.is_active)
            .map(|voucher| voucher.clone())
    }

    /// Finds a voucher by business unit and voucher number.
    #[must_use]
    pub fn find_by_number(
        &self,
        business_unit: &BusinessUnitCode,
        voucher_no: VoucherNo,
    ) -> Option<Voucher> {
        let reference = self
            .by_number
            .get(&(business_unit.clone(), voucher_no))
            .map(|reference| *reference)?;
        self.find_by_reference(&reference)
            .filter(|voucher| voucher.voucher_no == voucher_no)
    }

    /// Lists active vouchers for a business unit and date, ordered by
    /// voucher number.
    #[must_use]
    pub fn list_by_date(&self, business_unit: &BusinessUnitCode, date: NaiveDate) -> Vec<Voucher> {
        let mut vouchers: Vec<Voucher> = self
            .by_reference
            .iter()
            .filter(|entry| {
                let voucher = entry.value();
                voucher.is_active && voucher.date == date && &voucher.business_unit == business_unit
            })
            .map(|entry| entry.value().clone())
            .collect();
        vouchers.sort_by_key(|voucher| voucher.voucher_no);
        vouchers
    }

    /// Clears the active flag of the voucher for a reference.
    ///
    /// Returns true if an active voucher was deactivated.
    pub fn deactivate(&self, reference: &VoucherRef) -> bool {
        match self.by_reference.get_mut(reference) {
            Some(mut voucher) if voucher.is_active => {
                voucher.is_active = false;
                true
            }
            _ => false,
        }
    }

    /// Number of active vouchers.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.by_reference
            .iter()
            .filter(|entry| entry.value().is_active)
            .count()
    }
}
