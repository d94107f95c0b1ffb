//! Core posting logic for Jangbu.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `inventory` - Inventory movement records consumed from the order module
//! - `voucher` - Double-entry voucher generation (ingest, VAT split, posting
//!   rules, assembly, reference strings)
//! - `ledger` - Receivable/payable ledgers and running-balance chains
//! - `closing` - Period closing snapshots and freeze boundaries
//! - `settlement` - Cash receipt/disbursement vouchers

pub mod closing;
pub mod inventory;
pub mod ledger;
pub mod settlement;
pub mod voucher;
