//! Running-balance chain math.
//!
//! Pure operations over one counterparty's ledger, kept sorted by
//! (date, number, time). Every mutation recomputes the running balances
//! from the mutation point forward, so a late-arriving (backdated) entry
//! lands at its chronological position and everything after it is repaired.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::voucher::reference::VoucherRef;

use super::entry::LedgerEntry;
use super::error::LedgerError;

/// Inserts an entry at its chronological position and recomputes balances.
///
/// `boundary` is the last date covered by the latest closing snapshot for
/// this ledger, if any.
///
/// # Errors
///
/// - `ClosedPeriod` if the entry dates at or before the boundary
/// - `DuplicateEntry` if an entry with the same sort key already exists
pub fn insert(
    entries: &mut Vec<LedgerEntry>,
    mut entry: LedgerEntry,
    boundary: Option<NaiveDate>,
) -> Result<usize, LedgerError> {
    if let Some(boundary) = boundary {
        if entry.date <= boundary {
            return Err(LedgerError::ClosedPeriod { boundary });
        }
    }

    let key = entry.sort_key();
    let position = entries.partition_point(|existing| existing.sort_key() < key);

    if entries
        .get(position)
        .is_some_and(|existing| existing.sort_key() == key)
    {
        return Err(LedgerError::duplicate(key));
    }

    entry.is_closed = false;
    entries.insert(position, entry);
    recompute_from(entries, position);
    Ok(position)
}

/// Removes the entry produced by the given voucher and recomputes balances.
///
/// # Errors
///
/// - `EntryNotFound` if no entry carries the reference
/// - `ClosedPeriod` if the entry is behind the closing boundary
pub fn remove_by_reference(
    entries: &mut Vec<LedgerEntry>,
    reference: &VoucherRef,
    boundary: Option<NaiveDate>,
) -> Result<LedgerEntry, LedgerError> {
    let position = entries
        .iter()
        .position(|entry| &entry.reference == reference)
        .ok_or_else(|| LedgerError::EntryNotFound(reference.to_string()))?;

    if let Some(boundary) = boundary {
        if entries[position].date <= boundary {
            return Err(LedgerError::ClosedPeriod { boundary });
        }
    }

    let removed = entries.remove(position);
    recompute_from(entries, position);
    Ok(removed)
}

/// Recomputes running balances from `start` to the end of the chain.
pub fn recompute_from(entries: &mut [LedgerEntry], start: usize) {
    let mut balance = if start == 0 {
        Decimal::ZERO
    } else {
        entries[start - 1].balance
    };

    for entry in &mut entries[start..] {
        balance += entry.amount;
        entry.balance = balance;
    }
}

/// Returns the running balance after the last entry (zero for an empty
/// ledger).
#[must_use]
pub fn current_balance(entries: &[LedgerEntry]) -> Decimal {
    entries.last().map_or(Decimal::ZERO, |entry| entry.balance)
}

/// Returns the running balance as of the end of `date` (zero if no entry is
/// dated at or before it).
#[must_use]
pub fn balance_at_or_before(entries: &[LedgerEntry], date: NaiveDate) -> Decimal {
    entries
        .iter()
        .rev()
        .find(|entry| entry.date <= date)
        .map_or(Decimal::ZERO, |entry| entry.balance)
}

/// Marks every entry dated at or before `boundary` as closed.
///
/// Returns the number of entries frozen.
pub fn mark_closed_through(entries: &mut [LedgerEntry], boundary: NaiveDate) -> usize {
    let mut frozen = 0;
    for entry in entries.iter_mut() {
        if entry.date <= boundary {
            if !entry.is_closed {
                entry.is_closed = true;
                frozen += 1;
            }
        } else {
            break;
        }
    }
    frozen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::entry::LedgerSide;
    use crate::voucher::reference::SourceKind;
    use chrono::NaiveTime;
    use jangbu_shared::types::{BusinessUnitCode, CounterpartyCode, LedgerEntryId};
    use rust_decimal_macros::dec;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
    }

    fn make_entry(day: u32, number: u32, amount: Decimal) -> LedgerEntry {
        LedgerEntry {
            id: LedgerEntryId::new(),
            side: LedgerSide::Payable,
            business_unit: BusinessUnitCode::new("01"),
            counterparty: CounterpartyCode::new("S001"),
            date: date(day),
            number,
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            amount,
            balance: Decimal::ZERO,
            is_closed: false,
            reference: VoucherRef::new(SourceKind::Purchase, date(day), number),
            memo: None,
        }
    }

    #[test]
    fn test_insert_appends_and_accumulates() {
        let mut entries = Vec::new();
        insert(&mut entries, make_entry(1, 1, dec!(11000)), None).unwrap();
        insert(&mut entries, make_entry(2, 1, dec!(5000)), None).unwrap();
        insert(&mut entries, make_entry(3, 1, dec!(-4000)), None).unwrap();

        let balances: Vec<Decimal> = entries.iter().map(|e| e.balance).collect();
        assert_eq!(balances, vec![dec!(11000), dec!(16000), dec!(12000)]);
    }

    #[test]
    fn test_backdated_insert_recomputes_later_balances() {
        let mut entries = Vec::new();
        insert(&mut entries, make_entry(1, 1, dec!(1000)), None).unwrap();
        insert(&mut entries, make_entry(5, 1, dec!(2000)), None).unwrap();

        // Late-arriving transaction dated between the two.
        let position = insert(&mut entries, make_entry(3, 1, dec!(500)), None).unwrap();
        assert_eq!(position, 1);

        let balances: Vec<Decimal> = entries.iter().map(|e| e.balance).collect();
        assert_eq!(balances, vec![dec!(1000), dec!(1500), dec!(3500)]);
    }

    #[test]
    fn test_same_day_orders_by_number() {
        let mut entries = Vec::new();
        insert(&mut entries, make_entry(1, 2, dec!(200)), None).unwrap();
        insert(&mut entries, make_entry(1, 1, dec!(100)), None).unwrap();

        assert_eq!(entries[0].number, 1);
        let balances: Vec<Decimal> = entries.iter().map(|e| e.balance).collect();
        assert_eq!(balances, vec![dec!(100), dec!(300)]);
    }

    #[test]
    fn test_duplicate_sort_key_rejected() {
        let mut entries = Vec::new();
        insert(&mut entries, make_entry(1, 1, dec!(100)), None).unwrap();
        let result = insert(&mut entries, make_entry(1, 1, dec!(200)), None);
        assert!(matches!(result, Err(LedgerError::DuplicateEntry { .. })));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_insert_behind_boundary_rejected() {
        let mut entries = Vec::new();
        let result = insert(&mut entries, make_entry(9, 1, dec!(100)), Some(date(15)));
        assert!(matches!(
            result,
            Err(LedgerError::ClosedPeriod { boundary }) if boundary == date(15)
        ));
    }

    #[test]
    fn test_insert_after_boundary_allowed() {
        let mut entries = Vec::new();
        insert(&mut entries, make_entry(16, 1, dec!(100)), Some(date(15))).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_remove_by_reference_recomputes() {
        let mut entries = Vec::new();
        insert(&mut entries, make_entry(1, 1, dec!(11000)), None).unwrap();
        insert(&mut entries, make_entry(2, 1, dec!(5000)), None).unwrap();
        insert(&mut entries, make_entry(3, 1, dec!(7000)), None).unwrap();

        let reference = VoucherRef::new(SourceKind::Purchase, date(2), 1);
        let removed = remove_by_reference(&mut entries, &reference, None).unwrap();
        assert_eq!(removed.amount, dec!(5000));

        let balances: Vec<Decimal> = entries.iter().map(|e| e.balance).collect();
        assert_eq!(balances, vec![dec!(11000), dec!(18000)]);
    }

    #[test]
    fn test_remove_unknown_reference() {
        let mut entries = Vec::new();
        insert(&mut entries, make_entry(1, 1, dec!(100)), None).unwrap();

        let reference = VoucherRef::new(SourceKind::Purchase, date(9), 9);
        assert!(matches!(
            remove_by_reference(&mut entries, &reference, None),
            Err(LedgerError::EntryNotFound(_))
        ));
    }

    #[test]
    fn test_remove_behind_boundary_rejected() {
        let mut entries = Vec::new();
        insert(&mut entries, make_entry(1, 1, dec!(100)), None).unwrap();
        mark_closed_through(&mut entries, date(15));

        let reference = VoucherRef::new(SourceKind::Purchase, date(1), 1);
        assert!(matches!(
            remove_by_reference(&mut entries, &reference, Some(date(15))),
            Err(LedgerError::ClosedPeriod { .. })
        ));
    }

    #[test]
    fn test_current_balance() {
        let mut entries = Vec::new();
        assert_eq!(current_balance(&entries), dec!(0));

        insert(&mut entries, make_entry(1, 1, dec!(100)), None).unwrap();
        insert(&mut entries, make_entry(2, 1, dec!(-30)), None).unwrap();
        assert_eq!(current_balance(&entries), dec!(70));
    }

    #[test]
    fn test_balance_at_or_before() {
        let mut entries = Vec::new();
        insert(&mut entries, make_entry(1, 1, dec!(100)), None).unwrap();
        insert(&mut entries, make_entry(10, 1, dec!(50)), None).unwrap();

        assert_eq!(balance_at_or_before(&entries, date(5)), dec!(100));
        assert_eq!(balance_at_or_before(&entries, date(10)), dec!(150));
        assert_eq!(
            balance_at_or_before(&entries, NaiveDate::from_ymd_opt(2025, 10, 31).unwrap()),
            dec!(0)
        );
    }

    #[test]
    fn test_mark_closed_through() {
        let mut entries = Vec::new();
        insert(&mut entries, make_entry(1, 1, dec!(100)), None).unwrap();
        insert(&mut entries, make_entry(10, 1, dec!(50)), None).unwrap();
        insert(&mut entries, make_entry(20, 1, dec!(25)), None).unwrap();

        assert_eq!(mark_closed_through(&mut entries, date(10)), 2);
        assert!(entries[0].is_closed);
        assert!(entries[1].is_closed);
        assert!(!entries[2].is_closed);

        // Already-frozen entries are not counted twice.
        assert_eq!(mark_closed_through(&mut entries, date(10)), 0);
    }
}
