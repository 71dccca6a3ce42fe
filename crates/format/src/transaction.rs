//! Normalizer for transaction responses.
//!
//! L2 nodes and legacy or test backends diverge from mainnet JSON-RPC in a
//! handful of fields; the repair pipeline below tolerates exactly those
//! divergences without masking genuinely malformed data. Repairs never
//! substitute values for required fields that are simply missing.

use crate::{coerce, error::ValidationError, formatter::Formatter};
use alloy_primitives::{hex, B256, U256};
use era_client_primitives::{
    constants::{EIP1559_TX_TYPE, EIP2930_TX_TYPE},
    AccessListEntry, Signature, TransactionResponse,
};
use serde_json::Value;
use tracing::trace;

/// Normalizes a raw `eth_getTransactionByHash` result.
pub fn normalize_transaction(raw: &Value) -> Result<TransactionResponse, ValidationError> {
    let formatter = Formatter::new(raw)?;

    // The zero-valued destinations some backends report as `"0x0"` decode to
    // the canonical all-zero address in the coercer; an absent destination
    // stays absent (contract creation).
    let to = formatter.optional("to", &[], coerce::address)?;

    let tx_type = tx_type_or_default(&formatter)?;

    let access_list =
        formatter.optional("accessList", &[], coerce::array(normalize_access_list_entry))?;
    // Access-list-bearing envelope types always carry a list, even if empty.
    let access_list = match (tx_type, access_list) {
        (t, None) if t == EIP2930_TX_TYPE as u64 || t == EIP1559_TX_TYPE as u64 => {
            trace!(target: "era::format", tx_type = t, "backfilling empty access list");
            Some(Vec::new())
        }
        (_, list) => list,
    };

    let signature = recover_signature(&formatter);

    // A legacy EIP-155 `v` encodes the chain id; recover it when the backend
    // omitted the field. Never invent a value otherwise.
    let chain_id = match formatter.optional("chainId", &[], coerce::uint)? {
        Some(id) => Some(id),
        None => signature.as_ref().and_then(Signature::legacy_chain_id),
    };

    // Some backends report a zero hash for pending transactions instead of
    // null.
    let block_hash = formatter.optional("blockHash", &[], coerce::hash)?.filter(|hash| {
        let pending = *hash == B256::ZERO;
        if pending {
            trace!(target: "era::format", "rewriting zero block hash to null");
        }
        !pending
    });

    Ok(TransactionResponse {
        hash: formatter.required("hash", &["transactionHash"], coerce::hash)?,
        block_hash,
        block_number: formatter.optional("blockNumber", &[], coerce::uint)?,
        index: formatter.optional("index", &["transactionIndex"], coerce::uint)?,
        tx_type,
        from: formatter.required("from", &[], coerce::address)?,
        to,
        nonce: formatter.required("nonce", &[], coerce::uint)?,
        gas_limit: formatter.required("gasLimit", &["gas"], coerce::u256)?,
        gas_price: formatter.optional("gasPrice", &[], coerce::u256)?,
        max_fee_per_gas: formatter.optional("maxFeePerGas", &[], coerce::u256)?,
        max_priority_fee_per_gas: formatter.optional("maxPriorityFeePerGas", &[], coerce::u256)?,
        value: formatter.required("value", &[], coerce::u256)?,
        input: formatter.required("input", &["data"], coerce::bytes)?,
        chain_id,
        signature,
        access_list,
        l1_batch_number: formatter.optional("l1BatchNumber", &[], coerce::uint)?,
        l1_batch_tx_index: formatter.optional("l1BatchTxIndex", &[], coerce::uint)?,
    })
}

/// Resolves the envelope type, defaulting to legacy when the backend reports
/// the empty-data marker, null or nothing at all.
pub(crate) fn tx_type_or_default(formatter: &Formatter<'_>) -> Result<u64, ValidationError> {
    match formatter.resolve("type", &[]) {
        None | Some(Value::Null) => Ok(0),
        Some(Value::String(s)) if s == "0x" => Ok(0),
        Some(value) => {
            coerce::uint(value).map_err(|err| ValidationError::field("type", value, err))
        }
    }
}

fn normalize_access_list_entry(raw: &Value) -> Result<AccessListEntry, crate::CoerceError> {
    let obj = raw.as_object().ok_or(crate::CoerceError::NotAnObject)?;
    Ok(AccessListEntry {
        address: coerce::address(obj.get("address").unwrap_or(&Value::Null))?,
        storage_keys: coerce::array(coerce::hash)(obj.get("storageKeys").unwrap_or(&Value::Null))?,
    })
}

/// Recovers the transaction signature from an explicit `signature` field when
/// present, otherwise from the `v`/`r`/`s` components of the value object.
///
/// Deposit-style transactions carry no ECDSA components; any recovery failure
/// yields the explicit absent-signature sentinel instead of an error.
fn recover_signature(formatter: &Formatter<'_>) -> Option<Signature> {
    if let Some(value) = formatter.resolve("signature", &[]) {
        return signature_from_value(value);
    }

    let r = coerce::u256(formatter.resolve("r", &[])?).ok()?;
    let s = coerce::u256(formatter.resolve("s", &[])?).ok()?;
    let v = coerce::uint(formatter.resolve("v", &[])?).ok()?;
    // All-zero components are a placeholder, not a signature.
    if r.is_zero() && s.is_zero() {
        return None;
    }
    Some(Signature { r, s, v })
}

fn signature_from_value(value: &Value) -> Option<Signature> {
    if let Some(raw) = value.as_str() {
        let bytes = hex::decode(raw.strip_prefix("0x")?).ok()?;
        if bytes.len() != 65 {
            return None;
        }
        let v = u64::from(bytes[64]);
        return Some(Signature {
            r: U256::from_be_slice(&bytes[..32]),
            s: U256::from_be_slice(&bytes[32..64]),
            v: if v < 27 { v + 27 } else { v },
        });
    }

    let obj = value.as_object()?;
    Some(Signature {
        r: coerce::u256(obj.get("r")?).ok()?,
        s: coerce::u256(obj.get("s")?).ok()?,
        v: coerce::uint(obj.get("v")?).ok()?,
    })
}
