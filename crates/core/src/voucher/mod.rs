//! Double-entry voucher generation.
//!
//! This module implements the per-transaction posting pipeline:
//! - Ingest validation of the source record
//! - Supply/VAT amount breakdown
//! - The posting rule table mapping direction to account roles
//! - Voucher assembly with the balance invariant check
//! - Reference strings binding a voucher to its source transaction
//! - Error types for the pipeline

pub mod builder;
pub mod error;
pub mod ingest;
pub mod reference;
pub mod rules;
pub mod types;
pub mod vat;

#[cfg(test)]
mod builder_props;

pub use builder::VoucherBuilder;
pub use error::VoucherError;
pub use ingest::validate_for_posting;
pub use reference::{SourceKind, VoucherRef};
pub use rules::{AccountRole, AmountPart, PostingRule, ResolvedLine, RuleLine, resolve};
pub use types::{EntrySide, Voucher, VoucherLine, VoucherNo, VoucherTotals};
pub use vat::VatBreakdown;
