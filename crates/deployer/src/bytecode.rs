//! Normalization and content hashing of contract bytecode.

use crate::error::BytecodeError;
use alloy_primitives::{hex, Bytes, B256};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// The marker written into the first hash byte to version the format.
const BYTECODE_HASH_VERSION: u8 = 1;

/// Normalizes a raw bytecode value into canonical `0x`-prefixed even-length
/// hex bytes.
///
/// Accepted shapes: a hex string (prefixed or not), a JSON byte array, or a
/// compiler-artifact object exposing an `object` hex string. Any other shape
/// is forced through a sentinel that fails the hex-validity check, so every
/// malformed input surfaces on the same error path.
pub fn resolve_bytecode(raw: &Value) -> Result<Bytes, BytecodeError> {
    let normalized = match raw {
        Value::String(s) => s.clone(),
        Value::Array(elems) => elems
            .iter()
            .map(|elem| elem.as_u64().filter(|b| *b < 256).map(|b| format!("{b:02x}")))
            .collect::<Option<Vec<_>>>()
            .map_or_else(|| "!".to_string(), |bytes| format!("0x{}", bytes.concat())),
        Value::Object(obj) => match obj.get("object").and_then(Value::as_str) {
            Some(s) => s.to_string(),
            None => "!".to_string(),
        },
        _ => "!".to_string(),
    };

    let digits = normalized.strip_prefix("0x").unwrap_or(&normalized);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BytecodeError::InvalidHex { value: normalized });
    }
    if digits.len() % 2 != 0 {
        return Err(BytecodeError::OddLength { len: digits.len() });
    }
    hex::decode(digits)
        .map(Into::into)
        .map_err(|_| BytecodeError::InvalidHex { value: normalized })
}

/// Computes the chain's versioned content hash of the given bytecode, used
/// as the `bytecodeHash` input of every deployment and as a CREATE2 address
/// component.
///
/// The hash is sha256 with the first two bytes replaced by the format
/// version and the next two by the big-endian 32-byte word count. The chain
/// only accepts bytecode of an odd number of words.
pub fn hash_bytecode(code: &[u8]) -> Result<B256, BytecodeError> {
    if code.len() % 32 != 0 {
        return Err(BytecodeError::NotDivisibleBy32 { len: code.len() });
    }
    let words = code.len() / 32;
    if words >= 1 << 16 {
        return Err(BytecodeError::TooLarge { words });
    }
    if words % 2 == 0 {
        return Err(BytecodeError::EvenWordCount { words });
    }

    let mut hash: [u8; 32] = Sha256::digest(code).into();
    hash[0] = BYTECODE_HASH_VERSION;
    hash[1] = 0;
    hash[2..4].copy_from_slice(&(words as u16).to_be_bytes());
    Ok(B256::from(hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_hex_string_shapes() -> eyre::Result<()> {
        let expected = Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(resolve_bytecode(&json!("0xdeadbeef"))?, expected);
        assert_eq!(resolve_bytecode(&json!("deadbeef"))?, expected);
        Ok(())
    }

    #[test]
    fn test_resolve_byte_array_shape() -> eyre::Result<()> {
        assert_eq!(
            resolve_bytecode(&json!([0, 1, 255]))?,
            Bytes::from(vec![0x00, 0x01, 0xff])
        );
        Ok(())
    }

    #[test]
    fn test_resolve_compiler_artifact_shape() -> eyre::Result<()> {
        assert_eq!(
            resolve_bytecode(&json!({ "object": "0x00010203" }))?,
            Bytes::from(vec![0, 1, 2, 3])
        );
        Ok(())
    }

    #[test]
    fn test_unrecognized_shapes_fail_uniformly() {
        for raw in [json!(true), json!(42), json!(null), json!({ "bytecode": "0x00" })] {
            assert_eq!(
                resolve_bytecode(&raw),
                Err(BytecodeError::InvalidHex { value: "!".to_string() })
            );
        }
    }

    #[test]
    fn test_odd_length_and_non_hex_rejected() {
        assert_eq!(resolve_bytecode(&json!("0xabc")), Err(BytecodeError::OddLength { len: 3 }));
        assert_eq!(
            resolve_bytecode(&json!("0xzz")),
            Err(BytecodeError::InvalidHex { value: "0xzz".to_string() })
        );
    }

    #[test]
    fn test_hash_bytecode_layout() -> eyre::Result<()> {
        let code = vec![0xab; 32];
        let hash = hash_bytecode(&code)?;

        assert_eq!(hash[0], BYTECODE_HASH_VERSION);
        assert_eq!(hash[1], 0);
        assert_eq!(u16::from_be_bytes([hash[2], hash[3]]), 1);
        // Deterministic.
        assert_eq!(hash_bytecode(&code)?, hash);
        // Content-sensitive.
        assert_ne!(hash_bytecode(&vec![0xcd; 32])?, hash);
        Ok(())
    }

    #[test]
    fn test_hash_bytecode_alignment_rules() {
        assert_eq!(
            hash_bytecode(&[0u8; 31]),
            Err(BytecodeError::NotDivisibleBy32 { len: 31 })
        );
        assert_eq!(hash_bytecode(&[0u8; 64]), Err(BytecodeError::EvenWordCount { words: 2 }));
    }
}
