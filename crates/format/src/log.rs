//! Normalizers for event logs: standalone logs, receipt-context logs and
//! L2-to-L1 message logs.

use crate::{coerce, error::ValidationError, formatter::Formatter};
use era_client_primitives::{L2ToL1Log, Log, ReceiptLog};
use serde_json::Value;

/// Normalizes a raw `eth_getLogs` entry.
pub fn normalize_log(raw: &Value) -> Result<Log, ValidationError> {
    let formatter = Formatter::new(raw)?;
    Ok(Log {
        address: formatter.required("address", &[], coerce::address)?,
        topics: formatter.required("topics", &[], coerce::array(coerce::hash))?,
        data: formatter.required("data", &[], coerce::bytes)?,
        block_hash: formatter.optional("blockHash", &[], coerce::hash)?,
        block_number: formatter.optional("blockNumber", &[], coerce::uint)?,
        transaction_hash: formatter.optional("transactionHash", &[], coerce::hash)?,
        transaction_index: formatter.optional("transactionIndex", &[], coerce::uint)?,
        index: formatter.required("index", &["logIndex"], coerce::uint)?,
        removed: formatter.optional_or("removed", &[], coerce::boolean, false)?,
        l1_batch_number: formatter.optional("l1BatchNumber", &[], coerce::uint)?,
    })
}

/// Normalizes a raw log in its receipt context.
pub fn normalize_receipt_log(raw: &Value) -> Result<ReceiptLog, ValidationError> {
    let formatter = Formatter::new(raw)?;
    Ok(ReceiptLog {
        address: formatter.required("address", &[], coerce::address)?,
        topics: formatter.required("topics", &[], coerce::array(coerce::hash))?,
        data: formatter.required("data", &[], coerce::bytes)?,
        block_hash: formatter.optional("blockHash", &[], coerce::hash)?,
        block_number: formatter.optional("blockNumber", &[], coerce::uint)?,
        transaction_hash: formatter.optional("transactionHash", &[], coerce::hash)?,
        transaction_index: formatter.optional("transactionIndex", &[], coerce::uint)?,
        index: formatter.required("index", &["logIndex"], coerce::uint)?,
        log_type: formatter.optional("logType", &[], coerce::string)?,
        l1_batch_number: formatter.optional("l1BatchNumber", &[], coerce::uint)?,
    })
}

/// Normalizes a raw L2-to-L1 message log.
pub fn normalize_l2_to_l1_log(raw: &Value) -> Result<L2ToL1Log, ValidationError> {
    let formatter = Formatter::new(raw)?;
    Ok(L2ToL1Log {
        block_number: formatter.required("blockNumber", &[], coerce::uint)?,
        block_hash: formatter.required("blockHash", &[], coerce::hash)?,
        l1_batch_number: formatter.optional("l1BatchNumber", &[], coerce::uint)?,
        transaction_index: formatter.required("transactionIndex", &[], coerce::uint)?,
        shard_id: formatter.required("shardId", &[], coerce::uint)?,
        is_service: formatter.required("isService", &[], coerce::boolean)?,
        sender: formatter.required("sender", &[], coerce::address)?,
        key: formatter.required("key", &[], coerce::hash)?,
        value: formatter.required("value", &[], coerce::hash)?,
        transaction_hash: formatter.required("transactionHash", &[], coerce::hash)?,
        log_index: formatter.required("logIndex", &[], coerce::uint)?,
    })
}
