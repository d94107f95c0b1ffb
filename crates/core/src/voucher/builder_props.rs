//! Property tests for the voucher pipeline.
//!
//! The balance invariant (every built voucher has total debits equal to
//! total credits) must hold for all valid inputs, not just the worked
//! examples.

use chrono::NaiveDate;
use jangbu_shared::config::ChartConfig;
use jangbu_shared::types::BusinessUnitCode;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::inventory::Direction;

use super::builder::VoucherBuilder;
use super::reference::VoucherRef;
use super::rules::resolve;
use super::types::{EntrySide, VoucherNo};
use super::vat::VatBreakdown;

/// Strategy for non-negative amounts with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|n| Decimal::new(n, 2))
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Inbound), Just(Direction::Outbound)]
}

fn build_voucher(
    direction: Direction,
    quantity: Decimal,
    unit_price: Decimal,
    vat: Decimal,
) -> Result<crate::voucher::types::Voucher, crate::voucher::error::VoucherError> {
    let date = NaiveDate::from_ymd_opt(2025, 11, 9).unwrap();
    let amounts = VatBreakdown::split(quantity, unit_price, vat)?;
    let resolved = resolve(direction, &amounts)?;
    VoucherBuilder::build(
        &BusinessUnitCode::new("01"),
        VoucherNo::new(date, 1),
        VoucherRef::for_transaction(direction, date, 1),
        &resolved,
        &ChartConfig::default(),
        None,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any valid quantity/price/VAT and direction, the built voucher
    /// balances exactly.
    #[test]
    fn prop_voucher_always_balances(
        direction in direction_strategy(),
        quantity in amount_strategy(),
        unit_price in amount_strategy(),
        vat in amount_strategy(),
    ) {
        prop_assume!(quantity * unit_price + vat > Decimal::ZERO);

        let voucher = build_voucher(direction, quantity, unit_price, vat).unwrap();
        let totals = voucher.totals();
        prop_assert!(totals.is_balanced);
        prop_assert_eq!(totals.difference(), Decimal::ZERO);
    }

    /// Every line carries a positive amount on exactly one side.
    #[test]
    fn prop_lines_are_single_sided_and_positive(
        direction in direction_strategy(),
        quantity in amount_strategy(),
        unit_price in amount_strategy(),
        vat in amount_strategy(),
    ) {
        prop_assume!(quantity * unit_price + vat > Decimal::ZERO);

        let voucher = build_voucher(direction, quantity, unit_price, vat).unwrap();
        for line in &voucher.lines {
            prop_assert!(line.amount > Decimal::ZERO);
            match line.side {
                EntrySide::Debit => {
                    prop_assert_eq!(line.debit(), line.amount);
                    prop_assert_eq!(line.credit(), Decimal::ZERO);
                }
                EntrySide::Credit => {
                    prop_assert_eq!(line.credit(), line.amount);
                    prop_assert_eq!(line.debit(), Decimal::ZERO);
                }
            }
        }
    }

    /// The counterparty side of the voucher always posts the full total.
    #[test]
    fn prop_counterparty_line_posts_total(
        direction in direction_strategy(),
        quantity in amount_strategy(),
        unit_price in amount_strategy(),
        vat in amount_strategy(),
    ) {
        let supply = quantity * unit_price;
        prop_assume!(supply + vat > Decimal::ZERO);

        let chart = ChartConfig::default();
        let voucher = build_voucher(direction, quantity, unit_price, vat).unwrap();

        let (account, side) = match direction {
            Direction::Inbound => (&chart.payable, EntrySide::Credit),
            Direction::Outbound => (&chart.receivable, EntrySide::Debit),
        };
        let line = voucher
            .lines
            .iter()
            .find(|l| &l.account == account)
            .expect("counterparty line present");
        prop_assert_eq!(line.side, side);
        prop_assert_eq!(line.amount, supply + vat);
    }

    /// The reference string round-trips to the source identity.
    #[test]
    fn prop_reference_round_trips(
        direction in direction_strategy(),
        number in 1u32..100_000,
        day_offset in 0i64..3650,
    ) {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
            + chrono::Duration::days(day_offset);
        let reference = VoucherRef::for_transaction(direction, date, number);
        let parsed: VoucherRef = reference.to_string().parse().unwrap();
        prop_assert_eq!(parsed, reference);
        prop_assert_eq!(parsed.kind.direction(), Some(direction));
    }
}
