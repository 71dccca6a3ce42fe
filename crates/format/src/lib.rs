//! Normalization of loosely-typed JSON-RPC results into canonical records.
//!
//! Raw payloads arrive as [`serde_json::Value`]s with backend-dependent field
//! naming, optionality and numeric encodings. Each record type has a
//! normalizer that resolves field aliases, coerces every declared field and
//! applies the record's repair rules, producing an immutable canonical record
//! or a field-qualified [`ValidationError`]. No partial record is ever
//! returned.

pub use error::{CoerceError, ValidationError};
mod error;

pub mod coerce;

pub use formatter::Formatter;
mod formatter;

pub use block::normalize_block;
mod block;

pub use fee::normalize_fee_quote;
mod fee;

pub use log::{normalize_l2_to_l1_log, normalize_log, normalize_receipt_log};
mod log;

pub use receipt::normalize_receipt;
mod receipt;

pub use transaction::normalize_transaction;
mod transaction;
