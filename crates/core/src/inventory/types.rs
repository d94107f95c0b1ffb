//! Inventory transaction domain types.

use chrono::{NaiveDate, NaiveTime};
use jangbu_shared::types::{BusinessUnitCode, CounterpartyCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Movement direction of an inventory transaction.
///
/// The source system stores this as a numeric flag (입출고구분):
/// 1 = inbound (purchase receipt), 2 = outbound (sales shipment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Purchase receipt from a supplier.
    Inbound,
    /// Sales shipment to a customer.
    Outbound,
}

impl Direction {
    /// Decodes the source system's numeric direction flag.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Inbound),
            2 => Some(Self::Outbound),
            _ => None,
        }
    }

    /// Returns the source system's numeric direction flag.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Inbound => 1,
            Self::Outbound => 2,
        }
    }
}

/// Identity key of an inventory transaction.
///
/// The source system has no surrogate key for movement rows; this tuple is
/// the identity, and the last three fields are the chronological sort key
/// used by the ledgers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionKey {
    /// Business unit the transaction belongs to.
    pub business_unit: BusinessUnitCode,
    /// Transaction date.
    pub date: NaiveDate,
    /// Transaction number, unique per date.
    pub number: u32,
    /// Transaction time.
    pub time: NaiveTime,
}

/// An inventory movement record: one purchase receipt or sales shipment line.
///
/// Quantity, unit price, and VAT arrive exactly as captured upstream. VAT in
/// particular is a stored fact, not a derived one - data-entry corrections
/// made at capture time must flow through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryTransaction {
    /// Business unit the transaction belongs to.
    pub business_unit: BusinessUnitCode,
    /// Material category code.
    pub category: String,
    /// Material detail code.
    pub detail: String,
    /// Transaction date.
    pub date: NaiveDate,
    /// Transaction number, unique per date.
    pub number: u32,
    /// Transaction time.
    pub time: NaiveTime,
    /// Raw direction flag: 1 = inbound, 2 = outbound.
    pub direction_code: u8,
    /// Quantity moved.
    pub quantity: Decimal,
    /// Unit price.
    pub unit_price: Decimal,
    /// VAT amount as captured upstream.
    pub vat: Decimal,
    /// Supplier (inbound) or customer (outbound) code.
    pub counterparty: CounterpartyCode,
    /// Free-text memo.
    pub memo: Option<String>,
    /// False once the source document is voided.
    pub is_active: bool,
}

impl InventoryTransaction {
    /// Returns the identity key of this transaction.
    #[must_use]
    pub fn key(&self) -> TransactionKey {
        TransactionKey {
            business_unit: self.business_unit.clone(),
            date: self.date,
            number: self.number,
            time: self.time,
        }
    }
}

/// Kind of cash movement settling a counterparty balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashKind {
    /// Cash received from a customer (수금).
    Deposit,
    /// Cash paid to a supplier (지급).
    Withdrawal,
}

/// A cash receipt or disbursement record.
///
/// Settles part of a counterparty's receivable or payable balance; posted
/// through the same voucher pipeline as inventory transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashMovement {
    /// Business unit the movement belongs to.
    pub business_unit: BusinessUnitCode,
    /// Deposit or withdrawal.
    pub kind: CashKind,
    /// Movement date.
    pub date: NaiveDate,
    /// Movement number, unique per date.
    pub number: u32,
    /// Movement time.
    pub time: NaiveTime,
    /// Customer (deposit) or supplier (withdrawal) code.
    pub counterparty: CounterpartyCode,
    /// Amount of cash moved.
    pub amount: Decimal,
    /// Free-text memo.
    pub memo: Option<String>,
    /// False once the source document is voided.
    pub is_active: bool,
}
