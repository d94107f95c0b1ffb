//! Property tests for the running-balance chain.

use chrono::{NaiveDate, NaiveTime};
use jangbu_shared::types::{BusinessUnitCode, CounterpartyCode, LedgerEntryId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::voucher::reference::{SourceKind, VoucherRef};

use super::chain;
use super::entry::{LedgerEntry, LedgerSide};

/// Strategy for signed amounts (debts and settlements).
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-100_000i64..100_000).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for distinct sort keys: (day offset, number) pairs.
fn key_strategy() -> impl Strategy<Value = (i64, u32)> {
    (0i64..365, 1u32..1000)
}

fn make_entry(day_offset: i64, number: u32, amount: Decimal) -> LedgerEntry {
    let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(day_offset);
    LedgerEntry {
        id: LedgerEntryId::new(),
        side: LedgerSide::Receivable,
        business_unit: BusinessUnitCode::new("01"),
        counterparty: CounterpartyCode::new("C001"),
        date,
        number,
        time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        amount,
        balance: Decimal::ZERO,
        is_closed: false,
        reference: VoucherRef::new(SourceKind::Sale, date, number),
        memo: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// After inserting entries in any arrival order, the n-th running
    /// balance equals the sum of the signed amounts of all entries with a
    /// sort key at or before it.
    #[test]
    fn prop_balance_is_prefix_sum(
        items in prop::collection::hash_map(key_strategy(), amount_strategy(), 1..30),
    ) {
        let mut entries = Vec::new();
        for (&(day, number), &amount) in &items {
            chain::insert(&mut entries, make_entry(day, number, amount), None).unwrap();
        }

        let mut expected = Decimal::ZERO;
        for entry in &entries {
            expected += entry.amount;
            prop_assert_eq!(entry.balance, expected);
        }
        prop_assert_eq!(chain::current_balance(&entries), expected);
    }

    /// The chain stays sorted by (date, number, time) no matter the arrival
    /// order.
    #[test]
    fn prop_chain_stays_sorted(
        items in prop::collection::hash_map(key_strategy(), amount_strategy(), 1..30),
    ) {
        let mut entries = Vec::new();
        for (&(day, number), &amount) in &items {
            chain::insert(&mut entries, make_entry(day, number, amount), None).unwrap();
        }

        for window in entries.windows(2) {
            prop_assert!(window[0].sort_key() < window[1].sort_key());
        }
    }

    /// Insert-then-remove is a no-op on the surviving balances.
    #[test]
    fn prop_remove_restores_prior_balances(
        items in prop::collection::hash_map(key_strategy(), amount_strategy(), 1..20),
        extra_amount in amount_strategy(),
    ) {
        let mut entries = Vec::new();
        for (&(day, number), &amount) in &items {
            chain::insert(&mut entries, make_entry(day, number, amount), None).unwrap();
        }
        let before: Vec<Decimal> = entries.iter().map(|e| e.balance).collect();

        // An entry guaranteed not to collide with the generated keys.
        let extra = make_entry(400, 1, extra_amount);
        let reference = extra.reference;
        chain::insert(&mut entries, extra, None).unwrap();
        chain::remove_by_reference(&mut entries, &reference, None).unwrap();

        let after: Vec<Decimal> = entries.iter().map(|e| e.balance).collect();
        prop_assert_eq!(before, after);
    }

    /// Final balance is independent of arrival order.
    #[test]
    fn prop_final_balance_is_order_independent(
        items in prop::collection::hash_map(key_strategy(), amount_strategy(), 1..20),
    ) {
        let pairs: Vec<((i64, u32), Decimal)> =
            items.iter().map(|(&k, &v)| (k, v)).collect();

        let mut forward = Vec::new();
        for &((day, number), amount) in &pairs {
            chain::insert(&mut forward, make_entry(day, number, amount), None).unwrap();
        }

        let mut reversed = Vec::new();
        for &((day, number), amount) in pairs.iter().rev() {
            chain::insert(&mut reversed, make_entry(day, number, amount), None).unwrap();
        }

        prop_assert_eq!(
            chain::current_balance(&forward),
            chain::current_balance(&reversed)
        );
    }
}
