//! Inventory movement records.
//!
//! The surrounding order/purchase/sales module commits these records; the
//! posting pipeline consumes them. They are immutable facts apart from the
//! active flag, which flips to false when the source document is voided.

pub mod types;

pub use types::{CashKind, CashMovement, Direction, InventoryTransaction, TransactionKey};
