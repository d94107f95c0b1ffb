//! The posting rule table.
//!
//! Maps a transaction direction to the account roles and amount parts of its
//! voucher lines. The table is data, not branching logic: a new transaction
//! type extends the table without touching the voucher builder.

use jangbu_shared::config::ChartConfig;
use jangbu_shared::types::AccountCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::inventory::Direction;

use super::error::VoucherError;
use super::types::EntrySide;
use super::vat::VatBreakdown;

/// Posting role of an account, resolved to a concrete code by the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    /// Inventory/expense account debited on purchase.
    Purchases,
    /// Input-VAT receivable account.
    InputVat,
    /// Payable account for supplier debt.
    Payable,
    /// Receivable account for customer debt.
    Receivable,
    /// Revenue account credited on sale.
    Revenue,
    /// Output-VAT payable account.
    OutputVat,
    /// Cash account used by settlements.
    Cash,
}

impl AccountRole {
    /// Resolves this role to the configured account code.
    #[must_use]
    pub fn account<'a>(self, chart: &'a ChartConfig) -> &'a AccountCode {
        match self {
            Self::Purchases => &chart.purchases,
            Self::InputVat => &chart.input_vat,
            Self::Payable => &chart.payable,
            Self::Receivable => &chart.receivable,
            Self::Revenue => &chart.revenue,
            Self::OutputVat => &chart.output_vat,
            Self::Cash => &chart.cash,
        }
    }
}

/// Which part of the amount breakdown a rule line posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountPart {
    /// The pre-tax supply amount.
    Supply,
    /// The VAT amount.
    Vat,
    /// Supply + VAT.
    Total,
}

impl AmountPart {
    /// Picks this part out of a breakdown.
    #[must_use]
    pub fn of(self, amounts: &VatBreakdown) -> Decimal {
        match self {
            Self::Supply => amounts.supply,
            Self::Vat => amounts.vat,
            Self::Total => amounts.total,
        }
    }
}

/// One line of a posting rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleLine {
    /// Account role to post to.
    pub role: AccountRole,
    /// Debit or credit.
    pub side: EntrySide,
    /// Which amount part to post.
    pub part: AmountPart,
}

/// A posting rule: the ordered lines a direction produces.
#[derive(Debug, Clone, Copy)]
pub struct PostingRule {
    /// The direction this rule applies to.
    pub direction: Direction,
    /// Ordered voucher lines.
    pub lines: &'static [RuleLine],
}

/// The posting policy table.
///
/// | Direction | Debit | Credit |
/// |---|---|---|
/// | inbound | purchases <- supply; input VAT <- VAT | payable <- total |
/// | outbound | receivable <- total | revenue <- supply; output VAT <- VAT |
pub static POSTING_RULES: &[PostingRule] = &[
    PostingRule {
        direction: Direction::Inbound,
        lines: &[
            RuleLine {
                role: AccountRole::Purchases,
                side: EntrySide::Debit,
                part: AmountPart::Supply,
            },
            RuleLine {
                role: AccountRole::InputVat,
                side: EntrySide::Debit,
                part: AmountPart::Vat,
            },
            RuleLine {
                role: AccountRole::Payable,
                side: EntrySide::Credit,
                part: AmountPart::Total,
            },
        ],
    },
    PostingRule {
        direction: Direction::Outbound,
        lines: &[
            RuleLine {
                role: AccountRole::Receivable,
                side: EntrySide::Debit,
                part: AmountPart::Total,
            },
            RuleLine {
                role: AccountRole::Revenue,
                side: EntrySide::Credit,
                part: AmountPart::Supply,
            },
            RuleLine {
                role: AccountRole::OutputVat,
                side: EntrySide::Credit,
                part: AmountPart::Vat,
            },
        ],
    },
];

/// A rule line with its amount filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLine {
    /// Account role to post to.
    pub role: AccountRole,
    /// Debit or credit.
    pub side: EntrySide,
    /// Amount to post (always positive).
    pub amount: Decimal,
}

/// Resolves the posting lines for a direction.
///
/// Zero-amount parts (e.g. VAT on exempt goods) are dropped: a voucher line
/// must carry a positive amount on exactly one side.
///
/// # Errors
///
/// Returns `UnknownDirection` if the direction has no entry in the table.
pub fn resolve(
    direction: Direction,
    amounts: &VatBreakdown,
) -> Result<Vec<ResolvedLine>, VoucherError> {
    let rule = POSTING_RULES
        .iter()
        .find(|rule| rule.direction == direction)
        .ok_or(VoucherError::UnknownDirection(direction.code()))?;

    Ok(rule
        .lines
        .iter()
        .filter_map(|line| {
            let amount = line.part.of(amounts);
            (amount != Decimal::ZERO).then_some(ResolvedLine {
                role: line.role,
                side: line.side,
                amount,
            })
        })
        .collect())
}
