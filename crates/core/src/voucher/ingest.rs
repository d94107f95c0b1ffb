//! Ingest validation for inventory transactions.
//!
//! Pure validation - no side effects. Voided records and records missing a
//! counterparty must never reach posting.

use crate::inventory::{Direction, InventoryTransaction};

use super::error::VoucherError;

/// Validates an inventory transaction and normalizes its direction.
///
/// # Errors
///
/// - `InactiveTransaction` if the active flag is false
/// - `MissingCounterparty` if the counterparty code is blank
/// - `UnknownDirection` if the direction flag is not 1 or 2
pub fn validate_for_posting(tx: &InventoryTransaction) -> Result<Direction, VoucherError> {
    if !tx.is_active {
        return Err(VoucherError::InactiveTransaction);
    }

    if tx.counterparty.is_blank() {
        return Err(VoucherError::MissingCounterparty);
    }

    Direction::from_code(tx.direction_code)
        .ok_or(VoucherError::UnknownDirection(tx.direction_code))
}
