//! Normalizer for transaction receipts.

use crate::{
    coerce,
    error::{CoerceError, ValidationError},
    formatter::Formatter,
    log::{normalize_l2_to_l1_log, normalize_receipt_log},
    transaction::tx_type_or_default,
};
use era_client_primitives::TransactionReceipt;
use serde_json::Value;

/// Normalizes a raw `eth_getTransactionReceipt` result.
///
/// The L2-to-L1 message log list defaults to empty when the backend omits
/// it, and `status`/`type` are tolerated absent for legacy and test
/// backends.
pub fn normalize_receipt(raw: &Value) -> Result<TransactionReceipt, ValidationError> {
    let formatter = Formatter::new(raw)?;

    let logs = nested_list(&formatter, "logs", &[], normalize_receipt_log)?;
    let l2_to_l1_logs = nested_list(&formatter, "l2ToL1Logs", &[], normalize_l2_to_l1_log)?;

    Ok(TransactionReceipt {
        hash: formatter.required("hash", &["transactionHash"], coerce::hash)?,
        index: formatter.required("index", &["transactionIndex"], coerce::uint)?,
        block_hash: formatter.optional("blockHash", &[], coerce::hash)?,
        block_number: formatter.optional("blockNumber", &[], coerce::uint)?,
        from: formatter.required("from", &[], coerce::address)?,
        to: formatter.optional("to", &[], coerce::address)?,
        contract_address: formatter.optional("contractAddress", &[], coerce::address)?,
        gas_used: formatter.required("gasUsed", &[], coerce::u256)?,
        cumulative_gas_used: formatter.required("cumulativeGasUsed", &[], coerce::u256)?,
        effective_gas_price: formatter.required(
            "effectiveGasPrice",
            &["gasPrice"],
            coerce::u256,
        )?,
        status: formatter.optional("status", &[], coerce::uint)?,
        tx_type: tx_type_or_default(&formatter)?,
        logs_bloom: formatter.required("logsBloom", &[], coerce::bytes)?,
        logs,
        l2_to_l1_logs,
        l1_batch_number: formatter.optional("l1BatchNumber", &[], coerce::uint)?,
        l1_batch_tx_index: formatter.optional("l1BatchTxIndex", &[], coerce::uint)?,
        root: formatter.optional("root", &[], coerce::hash)?,
    })
}

/// Normalizes a nested list of records through a record normalizer, treating
/// an absent or null source as empty.
pub(crate) fn nested_list<T>(
    formatter: &Formatter<'_>,
    name: &str,
    aliases: &[&str],
    normalizer: impl Fn(&Value) -> Result<T, ValidationError>,
) -> Result<Vec<T>, ValidationError> {
    match formatter.resolve(name, aliases) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => entries.iter().map(normalizer).collect(),
        Some(other) => Err(ValidationError::field(name, other, CoerceError::NotAnArray)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_receipt() -> Value {
        json!({
            "transactionHash": "0x1111111111111111111111111111111111111111111111111111111111111111",
            "transactionIndex": "0x0",
            "blockHash": "0x2222222222222222222222222222222222222222222222222222222222222222",
            "blockNumber": "0x10",
            "from": "0x36615cf349d7f6344891b1e7ca7c72883f5dc049",
            "to": "0x0000000000000000000000000000000000008006",
            "contractAddress": null,
            "gasUsed": "0x55f0",
            "cumulativeGasUsed": "0x55f0",
            "effectiveGasPrice": "0xee6b280",
            "status": "0x1",
            "type": "0x71",
            "logsBloom": "0x00",
            "logs": [{
                "address": "0x000000000000000000000000000000000000800a",
                "topics": ["0x3333333333333333333333333333333333333333333333333333333333333333"],
                "data": "0x",
                "logIndex": "0x0",
                "blockHash": "0x2222222222222222222222222222222222222222222222222222222222222222",
                "blockNumber": "0x10",
            }],
            "l1BatchNumber": "0x5",
            "l1BatchTxIndex": null,
        })
    }

    #[test]
    fn test_normalize_receipt_aliases_and_defaults() -> eyre::Result<()> {
        let receipt = normalize_receipt(&raw_receipt())?;

        assert_eq!(receipt.index, 0);
        assert_eq!(receipt.tx_type, 0x71);
        assert_eq!(receipt.status, Some(1));
        assert_eq!(receipt.logs.len(), 1);
        assert_eq!(receipt.logs[0].index, 0);
        // Absent on the wire: defaults to empty, never fails.
        assert!(receipt.l2_to_l1_logs.is_empty());
        assert_eq!(receipt.l1_batch_number, Some(5));
        assert_eq!(receipt.l1_batch_tx_index, None);
        Ok(())
    }

    #[test]
    fn test_legacy_backend_omitting_status_and_type() -> eyre::Result<()> {
        let mut raw = raw_receipt();
        let obj = raw.as_object_mut().unwrap();
        obj.remove("status");
        obj.remove("type");
        let receipt = normalize_receipt(&raw)?;

        assert_eq!(receipt.status, None);
        assert_eq!(receipt.tx_type, 0);
        Ok(())
    }

    #[test]
    fn test_effective_gas_price_alias() -> eyre::Result<()> {
        let mut raw = raw_receipt();
        let obj = raw.as_object_mut().unwrap();
        obj.remove("effectiveGasPrice");
        obj.insert("gasPrice".to_string(), json!("0x2"));
        let receipt = normalize_receipt(&raw)?;

        assert_eq!(receipt.effective_gas_price, alloy_primitives::U256::from(2));
        Ok(())
    }

    #[test]
    fn test_malformed_nested_log_aborts_whole_receipt() {
        let mut raw = raw_receipt();
        raw["logs"][0]["topics"] = json!(["0xshort"]);
        assert!(normalize_receipt(&raw).is_err());
    }

    #[test]
    fn test_normalization_is_idempotent() -> eyre::Result<()> {
        let receipt = normalize_receipt(&raw_receipt())?;
        let reserialized = serde_json::to_value(&receipt)?;
        assert_eq!(normalize_receipt(&reserialized)?, receipt);
        Ok(())
    }
}
