//! Voucher reference strings.
//!
//! The reference string is the sole traceability link from a voucher back to
//! its source transaction: `"{label}-{YYYYMMDD}-{number}"`, with the label
//! naming the source document kind. It must parse back to the exact source
//! identity and stay unique while the source transaction is active.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::inventory::{CashKind, Direction};

use super::error::VoucherError;

/// Kind of source document a voucher was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Purchase receipt (매입전표).
    Purchase,
    /// Sales shipment (거래명세서).
    Sale,
    /// Cash receipt/disbursement (현금출납).
    Cash,
}

impl SourceKind {
    /// The label embedded in reference strings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Purchase => "매입",
            Self::Sale => "출고",
            Self::Cash => "현금",
        }
    }

    /// Parses a reference-string label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "매입" => Some(Self::Purchase),
            "출고" => Some(Self::Sale),
            "현금" => Some(Self::Cash),
            _ => None,
        }
    }

    /// The inventory direction this kind corresponds to, if any.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Purchase => Some(Direction::Inbound),
            Self::Sale => Some(Direction::Outbound),
            Self::Cash => None,
        }
    }
}

impl From<Direction> for SourceKind {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Inbound => Self::Purchase,
            Direction::Outbound => Self::Sale,
        }
    }
}

impl From<CashKind> for SourceKind {
    fn from(_: CashKind) -> Self {
        Self::Cash
    }
}

/// A parsed voucher reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoucherRef {
    /// Source document kind.
    pub kind: SourceKind,
    /// Source transaction date.
    pub date: NaiveDate,
    /// Source transaction number within the date.
    pub number: u32,
}

impl VoucherRef {
    /// Creates a reference.
    #[must_use]
    pub const fn new(kind: SourceKind, date: NaiveDate, number: u32) -> Self {
        Self { kind, date, number }
    }

    /// Creates the reference for an inventory transaction.
    #[must_use]
    pub fn for_transaction(direction: Direction, date: NaiveDate, number: u32) -> Self {
        Self::new(direction.into(), date, number)
    }
}

impl std::fmt::Display for VoucherRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.kind.label(),
            self.date.format("%Y%m%d"),
            self.number
        )
    }
}

impl std::str::FromStr for VoucherRef {
    type Err = VoucherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VoucherError::InvalidReference(s.to_string());

        let mut parts = s.splitn(3, '-');
        let label = parts.next().ok_or_else(invalid)?;
        let date_part = parts.next().ok_or_else(invalid)?;
        let number_part = parts.next().ok_or_else(invalid)?;

        let kind = SourceKind::from_label(label).ok_or_else(invalid)?;
        let date = NaiveDate::parse_from_str(date_part, "%Y%m%d").map_err(|_| invalid())?;
        let number = number_part.parse().map_err(|_| invalid())?;

        Ok(Self { kind, date, number })
    }
}
