//! Voucher domain types.

use chrono::{DateTime, NaiveDate, Utc};
use jangbu_shared::types::{AccountCode, BusinessUnitCode, VoucherId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::reference::VoucherRef;

/// Side of a voucher line: debit (차변) or credit (대변).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySide {
    /// Debit entry.
    Debit,
    /// Credit entry.
    Credit,
}

/// Voucher number: unique per (business unit, voucher date).
///
/// Rendered the way the source system stores it: `YYYYMMDD-{seq}`, with the
/// sequence allocated monotonically per date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoucherNo {
    /// The voucher date.
    pub date: NaiveDate,
    /// Monotone sequence within the date (1-based).
    pub seq: u32,
}

impl VoucherNo {
    /// Creates a voucher number.
    #[must_use]
    pub const fn new(date: NaiveDate, seq: u32) -> Self {
        Self { date, seq }
    }

    /// Parses the `YYYYMMDD-{seq}` rendering.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (date_part, seq_part) = s.split_once('-')?;
        let date = NaiveDate::parse_from_str(date_part, "%Y%m%d").ok()?;
        let seq = seq_part.parse().ok()?;
        Some(Self { date, seq })
    }
}

impl std::fmt::Display for VoucherNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.date.format("%Y%m%d"), self.seq)
    }
}

/// A single line of a voucher.
///
/// Exactly one side carries the amount; the amount itself is always
/// positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherLine {
    /// Line number within the voucher (1-based).
    pub line_no: u32,
    /// The account posted to.
    pub account: AccountCode,
    /// Debit or credit.
    pub side: EntrySide,
    /// Posted amount (positive).
    pub amount: Decimal,
    /// Optional line memo.
    pub memo: Option<String>,
}

impl VoucherLine {
    /// Returns the debit amount (zero for credit lines).
    #[must_use]
    pub fn debit(&self) -> Decimal {
        match self.side {
            EntrySide::Debit => self.amount,
            EntrySide::Credit => Decimal::ZERO,
        }
    }

    /// Returns the credit amount (zero for debit lines).
    #[must_use]
    pub fn credit(&self) -> Decimal {
        match self.side {
            EntrySide::Debit => Decimal::ZERO,
            EntrySide::Credit => self.amount,
        }
    }
}

/// A balanced double-entry accounting voucher.
///
/// One voucher exists per active source transaction; the reference string is
/// the traceability link back to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    /// Unique identifier.
    pub id: VoucherId,
    /// Business unit the voucher belongs to.
    pub business_unit: BusinessUnitCode,
    /// Voucher number, unique per (business unit, date).
    pub voucher_no: VoucherNo,
    /// Voucher date (the source transaction's date).
    pub date: NaiveDate,
    /// Reference string binding this voucher to its source transaction.
    pub reference: VoucherRef,
    /// Ordered voucher lines.
    pub lines: Vec<VoucherLine>,
    /// False once the source transaction is voided.
    pub is_active: bool,
    /// When the voucher was created.
    pub created_at: DateTime<Utc>,
}

impl Voucher {
    /// Computes the voucher's debit/credit totals.
    #[must_use]
    pub fn totals(&self) -> VoucherTotals {
        let debit: Decimal = self.lines.iter().map(VoucherLine::debit).sum();
        let credit: Decimal = self.lines.iter().map(VoucherLine::credit).sum();
        VoucherTotals::new(debit, credit)
    }
}

/// Voucher totals for validation and display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VoucherTotals {
    /// Total debit amount.
    pub debit: Decimal,
    /// Total credit amount.
    pub credit: Decimal,
    /// Whether the voucher is balanced (debits == credits).
    pub is_balanced: bool,
}

impl VoucherTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(debit: Decimal, credit: Decimal) -> Self {
        Self {
            debit,
            credit,
            is_balanced: debit == credit,
        }
    }

    /// Returns the difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.debit - self.credit
    }
}
