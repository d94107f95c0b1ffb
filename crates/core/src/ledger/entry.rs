//! Ledger entry domain types.

use chrono::{NaiveDate, NaiveTime};
use jangbu_shared::types::{BusinessUnitCode, CounterpartyCode, LedgerEntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::inventory::Direction;
use crate::voucher::reference::VoucherRef;

/// Which ledger an entry belongs to.
///
/// Inbound transactions raise supplier debt (payables); outbound
/// transactions raise customer debt (receivables).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerSide {
    /// Amounts owed to the business (미수금).
    Receivable,
    /// Amounts owed by the business (미지급금).
    Payable,
}

impl From<Direction> for LedgerSide {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Inbound => Self::Payable,
            Direction::Outbound => Self::Receivable,
        }
    }
}

/// Chronological sort key of a ledger entry.
///
/// Ledgers are ordered by (transaction date, transaction number,
/// transaction time); the derived ordering relies on that field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SortKey {
    /// Transaction date.
    pub date: NaiveDate,
    /// Transaction number within the date.
    pub number: u32,
    /// Transaction time.
    pub time: NaiveTime,
}

/// One entry in a counterparty's receivable or payable ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier.
    pub id: LedgerEntryId,
    /// Receivable or payable.
    pub side: LedgerSide,
    /// Business unit the entry belongs to.
    pub business_unit: BusinessUnitCode,
    /// The counterparty whose balance this entry moves.
    pub counterparty: CounterpartyCode,
    /// Transaction date.
    pub date: NaiveDate,
    /// Transaction number within the date.
    pub number: u32,
    /// Transaction time.
    pub time: NaiveTime,
    /// Signed amount: positive raises the debt, negative settles it.
    pub amount: Decimal,
    /// Running balance after this entry.
    pub balance: Decimal,
    /// True once a closing snapshot has frozen this entry.
    pub is_closed: bool,
    /// Reference of the voucher that produced this entry.
    pub reference: VoucherRef,
    /// Free-text memo.
    pub memo: Option<String>,
}

impl LedgerEntry {
    /// Returns the chronological sort key of this entry.
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        SortKey {
            date: self.date,
            number: self.number,
            time: self.time,
        }
    }
}
