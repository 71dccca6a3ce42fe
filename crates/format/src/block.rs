//! Normalizer for blocks.

use crate::{
    coerce,
    error::{CoerceError, ValidationError},
    formatter::Formatter,
    transaction::normalize_transaction,
};
use era_client_primitives::{Block, BlockTransaction};
use serde_json::Value;

/// Normalizes a raw `eth_getBlockByNumber`/`eth_getBlockByHash` result.
///
/// Transaction entries come in two representations: bare hash strings pass
/// through unchanged, full objects are normalized recursively.
pub fn normalize_block(raw: &Value) -> Result<Block, ValidationError> {
    let formatter = Formatter::new(raw)?;

    let transactions = match formatter.resolve("transactions", &[]) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| match entry {
                Value::String(_) => coerce::hash(entry)
                    .map(BlockTransaction::Hash)
                    .map_err(|err| ValidationError::field("transactions", entry, err)),
                _ => normalize_transaction(entry)
                    .map(|tx| BlockTransaction::Full(Box::new(tx))),
            })
            .collect::<Result<_, _>>()?,
        Some(other) => {
            return Err(ValidationError::field("transactions", other, CoerceError::NotAnArray))
        }
    };

    Ok(Block {
        hash: formatter.optional("hash", &[], coerce::hash)?,
        parent_hash: formatter.required("parentHash", &[], coerce::hash)?,
        number: formatter.required("number", &[], coerce::uint)?,
        timestamp: formatter.required("timestamp", &[], coerce::uint)?,
        nonce: formatter.optional("nonce", &[], coerce::bytes)?,
        difficulty: formatter.optional_or(
            "difficulty",
            &[],
            coerce::u256,
            alloy_primitives::U256::ZERO,
        )?,
        gas_limit: formatter.required("gasLimit", &[], coerce::u256)?,
        gas_used: formatter.required("gasUsed", &[], coerce::u256)?,
        miner: formatter.required("miner", &["coinbase"], coerce::address)?,
        extra_data: formatter.optional_or(
            "extraData",
            &[],
            coerce::bytes,
            alloy_primitives::Bytes::new(),
        )?,
        base_fee_per_gas: formatter.optional("baseFeePerGas", &[], coerce::u256)?,
        transactions,
        l1_batch_number: formatter.optional("l1BatchNumber", &[], coerce::uint)?,
        l1_batch_timestamp: formatter.optional("l1BatchTimestamp", &[], coerce::uint)?,
    })
}
