//! Supply/VAT amount breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::VoucherError;

/// The amounts of a transaction line, broken down for posting.
///
/// VAT is carried verbatim from the source record - it is never recomputed
/// from a rate, since upstream capture already determined it and recomputing
/// would silently mask data-entry corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatBreakdown {
    /// Pre-tax value: quantity x unit price.
    pub supply: Decimal,
    /// VAT amount as stored on the source record.
    pub vat: Decimal,
    /// Supply + VAT.
    pub total: Decimal,
}

impl VatBreakdown {
    /// Computes the breakdown from a transaction line's raw fields.
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount` if the computed supply or the stored VAT is
    /// negative. Zero VAT is legal (exempt goods).
    pub fn split(
        quantity: Decimal,
        unit_price: Decimal,
        vat: Decimal,
    ) -> Result<Self, VoucherError> {
        let supply = quantity * unit_price;

        if supply < Decimal::ZERO || vat < Decimal::ZERO {
            return Err(VoucherError::NegativeAmount);
        }

        Ok(Self {
            supply,
            vat,
            total: supply + vat,
        })
    }
}
