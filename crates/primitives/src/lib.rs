//! Primitive types for the L2 client: canonical JSON-RPC records and chain
//! constants.

pub mod constants;

pub use block::{Block, BlockTransaction};
mod block;

pub use fee::FeeQuote;
mod fee;

pub use log::{L2ToL1Log, Log, ReceiptLog};
mod log;

pub use receipt::TransactionReceipt;
mod receipt;

pub use transaction::{AccessListEntry, Signature, TransactionResponse};
mod transaction;
