//! Voucher assembly.

use chrono::Utc;
use jangbu_shared::config::ChartConfig;
use jangbu_shared::types::{BusinessUnitCode, VoucherId};
use rust_decimal::Decimal;

use super::error::VoucherError;
use super::reference::VoucherRef;
use super::rules::ResolvedLine;
use super::types::{Voucher, VoucherLine, VoucherNo, VoucherTotals};

/// Stateless voucher assembler.
///
/// Takes resolved posting lines and produces a `Voucher`, enforcing the
/// balance invariant. Idempotency (one voucher per reference) is the posting
/// service's job; the builder only assembles and validates.
pub struct VoucherBuilder;

impl VoucherBuilder {
    /// Assembles a voucher from resolved posting lines.
    ///
    /// # Errors
    ///
    /// - `NoLines` if there are no lines to post
    /// - `NegativeAmount` if any line amount is not positive
    /// - `UnbalancedVoucher` if debits != credits. This can only arise from
    ///   a defect in the amount breakdown or the rule table and must abort
    ///   the whole posting operation.
    pub fn build(
        business_unit: &BusinessUnitCode,
        voucher_no: VoucherNo,
        reference: VoucherRef,
        resolved: &[ResolvedLine],
        chart: &ChartConfig,
        memo: Option<&str>,
    ) -> Result<Voucher, VoucherError> {
        if resolved.is_empty() {
            return Err(VoucherError::NoLines);
        }

        let mut lines = Vec::with_capacity(resolved.len());
        for (index, line) in resolved.iter().enumerate() {
            if line.amount <= Decimal::ZERO {
                return Err(VoucherError::NegativeAmount);
            }

            lines.push(VoucherLine {
                line_no: u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1),
                account: line.role.account(chart).clone(),
                side: line.side,
                amount: line.amount,
                memo: memo.map(ToString::to_string),
            });
        }

        let totals = Self::totals(&lines);
        if !totals.is_balanced {
            return Err(VoucherError::UnbalancedVoucher {
                debit: totals.debit,
                credit: totals.credit,
            });
        }

        Ok(Voucher {
            id: VoucherId::new(),
            business_unit: business_unit.clone(),
            voucher_no,
            date: voucher_no.date,
            reference,
            lines,
            is_active: true,
            created_at: Utc::now(),
        })
    }

    /// Computes debit/credit totals for a set of lines.
    #[must_use]
    pub fn totals(lines: &[VoucherLine]) -> VoucherTotals {
        let debit: Decimal = lines.iter().map(VoucherLine::debit).sum();
        let credit: Decimal = lines.iter().map(VoucherLine::credit).sum();
        VoucherTotals::new(debit, credit)
    }
}
