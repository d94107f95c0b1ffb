//! Demo seeder for the Jangbu posting engine.
//!
//! Drives the engine through representative flows: purchase and sale
//! postings, a backdated transaction, a void, a cash settlement, and a
//! period close, logging each outcome.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use jangbu_core::closing::Period;
use jangbu_core::inventory::{CashKind, CashMovement, InventoryTransaction};
use jangbu_core::ledger::entry::LedgerSide;
use jangbu_shared::EngineConfig;
use jangbu_shared::types::{BusinessUnitCode, CounterpartyCode};
use jangbu_store::{ClosingService, PostingService, ScopeKey, ScopeLocks, Store};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jangbu=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::load().unwrap_or_default();

    let store = Arc::new(Store::new());
    let locks = Arc::new(ScopeLocks::new());
    let posting = PostingService::new(Arc::clone(&store), Arc::clone(&locks), config.clone());
    let closing = ClosingService::new(Arc::clone(&store), Arc::clone(&locks), config);

    info!("Posting purchases and sales...");
    seed_postings(&posting).await?;

    info!("Posting a backdated purchase...");
    posting
        .post_transaction(&purchase("S001", date(2025, 11, 7), 9, dec!(3), dec!(500), dec!(150)))
        .await?;

    info!("Voiding a sale...");
    let mut voided = sale("C001", date(2025, 11, 10), 2, dec!(1), dec!(9000), dec!(900));
    voided.is_active = false;
    posting.void_transaction(&voided).await?;

    info!("Settling part of a receivable in cash...");
    posting
        .post_settlement(&CashMovement {
            business_unit: unit(),
            kind: CashKind::Deposit,
            date: date(2025, 11, 12),
            number: 1,
            time: NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
            counterparty: CounterpartyCode::new("C001"),
            amount: dec!(5000),
            memo: Some("부분 수금".to_string()),
            is_active: true,
        })
        .await?;

    info!("Closing November for supplier S001...");
    let snapshot = closing
        .close(
            LedgerSide::Payable,
            &unit(),
            &CounterpartyCode::new("S001"),
            Period::new(2025, 11)?,
        )
        .await?;
    info!(balance = %snapshot.balance, "closing snapshot taken");

    report(&store);
    Ok(())
}

async fn seed_postings(posting: &PostingService) -> anyhow::Result<()> {
    let transactions = [
        purchase("S001", date(2025, 11, 9), 1, dec!(10), dec!(1000), dec!(1000)),
        purchase("S001", date(2025, 11, 10), 1, dec!(20), dec!(800), dec!(1600)),
        sale("C001", date(2025, 11, 9), 2, dec!(5), dec!(2000), dec!(1000)),
        sale("C001", date(2025, 11, 10), 2, dec!(1), dec!(9000), dec!(900)),
    ];

    for tx in &transactions {
        let outcome = posting.post_transaction(tx).await?;
        info!(
            reference = %outcome.voucher.reference,
            voucher_no = %outcome.voucher.voucher_no,
            balance = %outcome.entry.balance,
            "posted"
        );
    }
    Ok(())
}

fn report(store: &Store) {
    for (label, scope) in [
        ("payables S001", payable_scope("S001")),
        ("receivables C001", receivable_scope("C001")),
    ] {
        info!(
            ledger = label,
            entries = store.ledgers().list(&scope).len(),
            balance = %store.ledgers().current_balance(&scope),
            "ledger state"
        );
    }
    info!(active_vouchers = store.vouchers().active_count(), "done");
}

fn unit() -> BusinessUnitCode {
    BusinessUnitCode::new("01")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn payable_scope(counterparty: &str) -> ScopeKey {
    ScopeKey {
        side: LedgerSide::Payable,
        business_unit: unit(),
        counterparty: CounterpartyCode::new(counterparty),
    }
}

fn receivable_scope(counterparty: &str) -> ScopeKey {
    ScopeKey {
        side: LedgerSide::Receivable,
        business_unit: unit(),
        counterparty: CounterpartyCode::new(counterparty),
    }
}

fn purchase(
    counterparty: &str,
    tx_date: NaiveDate,
    number: u32,
    quantity: Decimal,
    unit_price: Decimal,
    vat: Decimal,
) -> InventoryTransaction {
    transaction(1, counterparty, tx_date, number, quantity, unit_price, vat)
}

fn sale(
    counterparty: &str,
    tx_date: NaiveDate,
    number: u32,
    quantity: Decimal,
    unit_price: Decimal,
    vat: Decimal,
) -> InventoryTransaction {
    transaction(2, counterparty, tx_date, number, quantity, unit_price, vat)
}

#[allow(clippy::too_many_arguments)]
fn transaction(
    direction_code: u8,
    counterparty: &str,
    tx_date: NaiveDate,
    number: u32,
    quantity: Decimal,
    unit_price: Decimal,
    vat: Decimal,
) -> InventoryTransaction {
    InventoryTransaction {
        business_unit: unit(),
        category: "A1".to_string(),
        detail: "0001".to_string(),
        date: tx_date,
        number,
        time: NaiveTime::from_hms_opt(9, 0, 0).expect("valid seed time"),
        direction_code,
        quantity,
        unit_price,
        vat,
        counterparty: CounterpartyCode::new(counterparty),
        memo: None,
        is_active: true,
    }
}
