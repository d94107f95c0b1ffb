//! Cash settlement vouchers.
//!
//! Cash receipts (수금) and disbursements (지급) settle part of a
//! counterparty's balance. They run through the same voucher pipeline as
//! inventory transactions with their own small rule table:
//!
//! | Kind | Debit | Credit | Ledger effect |
//! |---|---|---|---|
//! | deposit | cash | receivable | receivable -amount |
//! | withdrawal | payable | cash | payable -amount |

use rust_decimal::Decimal;

use crate::inventory::{CashKind, CashMovement};
use crate::ledger::entry::LedgerSide;
use crate::voucher::error::VoucherError;
use crate::voucher::rules::{AccountRole, AmountPart, ResolvedLine, RuleLine};
use crate::voucher::types::EntrySide;

/// A settlement rule: the ordered lines a cash movement produces.
#[derive(Debug, Clone, Copy)]
pub struct SettlementRule {
    /// The cash movement kind this rule applies to.
    pub kind: CashKind,
    /// Ordered voucher lines.
    pub lines: &'static [RuleLine],
}

/// The settlement policy table.
pub static SETTLEMENT_RULES: &[SettlementRule] = &[
    SettlementRule {
        kind: CashKind::Deposit,
        lines: &[
            RuleLine {
                role: AccountRole::Cash,
                side: EntrySide::Debit,
                part: AmountPart::Total,
            },
            RuleLine {
                role: AccountRole::Receivable,
                side: EntrySide::Credit,
                part: AmountPart::Total,
            },
        ],
    },
    SettlementRule {
        kind: CashKind::Withdrawal,
        lines: &[
            RuleLine {
                role: AccountRole::Payable,
                side: EntrySide::Debit,
                part: AmountPart::Total,
            },
            RuleLine {
                role: AccountRole::Cash,
                side: EntrySide::Credit,
                part: AmountPart::Total,
            },
        ],
    },
];

/// The ledger a cash movement settles.
#[must_use]
pub fn ledger_side(kind: CashKind) -> LedgerSide {
    match kind {
        CashKind::Deposit => LedgerSide::Receivable,
        CashKind::Withdrawal => LedgerSide::Payable,
    }
}

/// Validates a cash movement and resolves its voucher lines.
///
/// # Errors
///
/// - `InactiveTransaction` if the movement is voided
/// - `MissingCounterparty` if the counterparty code is blank
/// - `NegativeAmount` if the amount is not positive
pub fn resolve(movement: &CashMovement) -> Result<Vec<ResolvedLine>, VoucherError> {
    if !movement.is_active {
        return Err(VoucherError::InactiveTransaction);
    }
    if movement.counterparty.is_blank() {
        return Err(VoucherError::MissingCounterparty);
    }
    if movement.amount <= Decimal::ZERO {
        return Err(VoucherError::NegativeAmount);
    }

    let rule = SETTLEMENT_RULES
        .iter()
        .find(|rule| rule.kind == movement.kind)
        .expect("settlement table covers both kinds");

    Ok(rule
        .lines
        .iter()
        .map(|line| ResolvedLine {
            role: line.role,
            side: line.side,
            amount: movement.amount,
        })
        .collect())
}

/// The signed ledger delta of a settlement: always a reduction.
#[must_use]
pub fn ledger_delta(movement: &CashMovement) -> Decimal {
    -movement.amount
}
