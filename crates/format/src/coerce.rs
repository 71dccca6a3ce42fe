//! Atomic value coercers. Each coercer is a pure function of one raw JSON
//! value, returning the canonical value or a [`CoerceError`]. Field names and
//! aliasing are the formatter's concern, never the coercer's.

use crate::error::CoerceError;
use alloy_primitives::{hex, Address, Bytes, B256, U256};
use serde_json::Value;

/// Returns the hex digits of a `0x`-prefixed hex string value.
fn hex_digits(value: &Value) -> Result<&str, CoerceError> {
    value
        .as_str()
        .and_then(|s| s.strip_prefix("0x"))
        .ok_or(CoerceError::NotHex)
}

/// Returns whether the raw value counts as absent for nullable fields: null,
/// `false`, numeric zero, the empty string or the empty hex marker `"0x"`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_u64() == Some(0),
        Value::String(s) => s.is_empty() || s == "0x",
        _ => false,
    }
}

/// Coerces a literal boolean or the strings `"true"`/`"false"`.
pub fn boolean(value: &Value) -> Result<bool, CoerceError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s == "true" => Ok(true),
        Value::String(s) if s == "false" => Ok(false),
        _ => Err(CoerceError::NotBoolean),
    }
}

/// Coerces a hex string of exactly 32 bytes.
pub fn hash(value: &Value) -> Result<B256, CoerceError> {
    let bytes = hex::decode(hex_digits(value)?).map_err(|_| CoerceError::NotHex)?;
    if bytes.len() != 32 {
        return Err(CoerceError::BadLength { expected: 32, got: bytes.len() });
    }
    Ok(B256::from_slice(&bytes))
}

/// Coerces a hex string of at most 20 bytes, left-padding shorter values.
///
/// Padding is what canonicalizes the `"0x0"` destination some backends
/// return into the all-zero address literal.
pub fn address(value: &Value) -> Result<Address, CoerceError> {
    let digits = hex_digits(value)?;
    if digits.len() > 40 {
        return Err(CoerceError::BadLength { expected: 20, got: digits.len().div_ceil(2) });
    }
    let padded = format!("{digits:0>40}");
    let bytes = hex::decode(&padded).map_err(|_| CoerceError::NotHex)?;
    Ok(Address::from_slice(&bytes))
}

/// Coerces a `0x`-prefixed hex string of any even length.
pub fn bytes(value: &Value) -> Result<Bytes, CoerceError> {
    let digits = hex_digits(value)?;
    if digits.len() % 2 != 0 {
        return Err(CoerceError::NotHex);
    }
    hex::decode(digits).map(Into::into).map_err(|_| CoerceError::NotHex)
}

/// Coerces an integer quantity: a bare JSON number or a hex quantity string.
pub fn uint(value: &Value) -> Result<u64, CoerceError> {
    match value {
        Value::Number(n) => n.as_u64().ok_or(CoerceError::NotAnInteger),
        _ => u64::from_str_radix(hex_digits(value).map_err(|_| CoerceError::NotAnInteger)?, 16)
            .map_err(|_| CoerceError::NotAnInteger),
    }
}

/// Coerces an unsigned 256-bit quantity from a hex string, left-padded to 32
/// bytes.
pub fn u256(value: &Value) -> Result<U256, CoerceError> {
    U256::from_str_radix(hex_digits(value)?, 16).map_err(|_| CoerceError::NotHex)
}

/// Coerces a plain string.
pub fn string(value: &Value) -> Result<String, CoerceError> {
    value.as_str().map(ToString::to_string).ok_or(CoerceError::NotAString)
}

/// Wraps a coercer so that a falsy raw value yields the fallback instead of
/// being coerced.
pub fn nullable<T: Clone>(
    coercer: impl Fn(&Value) -> Result<T, CoerceError>,
    fallback: T,
) -> impl Fn(&Value) -> Result<T, CoerceError> {
    move |value| if is_falsy(value) { Ok(fallback.clone()) } else { coercer(value) }
}

/// Wraps an element coercer into one over a JSON array.
pub fn array<T>(
    elem: impl Fn(&Value) -> Result<T, CoerceError>,
) -> impl Fn(&Value) -> Result<Vec<T>, CoerceError> {
    move |value| {
        value.as_array().ok_or(CoerceError::NotAnArray)?.iter().map(&elem).collect()
    }
}

/// Like [`array`], but a falsy raw value passes through as [`None`] instead
/// of failing.
pub fn array_or_null<T>(
    elem: impl Fn(&Value) -> Result<T, CoerceError>,
) -> impl Fn(&Value) -> Result<Option<Vec<T>>, CoerceError> {
    move |value| {
        if is_falsy(value) {
            return Ok(None);
        }
        value.as_array().ok_or(CoerceError::NotAnArray)?.iter().map(&elem).collect::<Result<_, _>>().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;
    use serde_json::json;

    #[test]
    fn test_boolean_accepts_literals_and_strings() {
        assert_eq!(boolean(&json!(true)), Ok(true));
        assert_eq!(boolean(&json!("false")), Ok(false));
        assert_eq!(boolean(&json!("yes")), Err(CoerceError::NotBoolean));
        assert_eq!(boolean(&json!(1)), Err(CoerceError::NotBoolean));
    }

    #[test]
    fn test_hash_requires_exact_length() {
        let raw = json!("0x5f4tb4b62b2bc0d0ccfbd22b6f2d77ed2a4d7e8b7a94e734dc3891d46f47e20e");
        assert_eq!(hash(&raw), Err(CoerceError::NotHex));

        let raw = json!("0xabcd");
        assert_eq!(hash(&raw), Err(CoerceError::BadLength { expected: 32, got: 2 }));

        let raw = json!("0x1111111111111111111111111111111111111111111111111111111111111111");
        assert_eq!(
            hash(&raw),
            Ok(b256!("1111111111111111111111111111111111111111111111111111111111111111"))
        );
    }

    #[test]
    fn test_address_left_pads_short_values() {
        assert_eq!(address(&json!("0x0")), Ok(Address::ZERO));
        assert_eq!(
            address(&json!("0x8006")),
            Ok("0x0000000000000000000000000000000000008006".parse().unwrap())
        );
        assert!(matches!(
            address(&json!("0x111111111111111111111111111111111111111111")),
            Err(CoerceError::BadLength { expected: 20, .. })
        ));
    }

    #[test]
    fn test_bytes_rejects_odd_length() {
        assert_eq!(bytes(&json!("0xabc")), Err(CoerceError::NotHex));
        assert_eq!(bytes(&json!("0x")), Ok(Bytes::new()));
        assert_eq!(bytes(&json!("abcd")), Err(CoerceError::NotHex));
    }

    #[test]
    fn test_uint_accepts_numbers_and_hex() {
        assert_eq!(uint(&json!(42)), Ok(42));
        assert_eq!(uint(&json!("0x2a")), Ok(42));
        assert_eq!(uint(&json!("0x")), Err(CoerceError::NotAnInteger));
        assert_eq!(uint(&json!(-1)), Err(CoerceError::NotAnInteger));
    }

    #[test]
    fn test_u256_left_pads() {
        assert_eq!(u256(&json!("0x1")), Ok(U256::from(1)));
        assert_eq!(u256(&json!(1)), Err(CoerceError::NotHex));
    }

    #[test]
    fn test_nullable_falls_back_on_falsy() {
        let coercer = nullable(uint, 7);
        assert_eq!(coercer(&json!(null)), Ok(7));
        assert_eq!(coercer(&json!("")), Ok(7));
        assert_eq!(coercer(&json!("0x")), Ok(7));
        assert_eq!(coercer(&json!(0)), Ok(7));
        assert_eq!(coercer(&json!("0x2a")), Ok(42));
    }

    #[test]
    fn test_array_fails_on_non_sequence() {
        let coercer = array(uint);
        assert_eq!(coercer(&json!([1, 2])), Ok(vec![1, 2]));
        assert_eq!(coercer(&json!("0x1")), Err(CoerceError::NotAnArray));

        let coercer = array_or_null(uint);
        assert_eq!(coercer(&json!(null)), Ok(None));
        assert_eq!(coercer(&json!([1])), Ok(Some(vec![1])));
    }
}
