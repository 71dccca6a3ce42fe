use serde_json::Value;

/// An error occurring when coercing a single raw value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoerceError {
    /// The value is neither a boolean nor the strings `"true"`/`"false"`.
    #[error("expected a boolean")]
    NotBoolean,
    /// The value is not a `0x`-prefixed hex string of even length.
    #[error("expected a 0x-prefixed hex string")]
    NotHex,
    /// The value is valid hex of the wrong byte length.
    #[error("expected {expected} bytes, got {got}")]
    BadLength {
        /// The expected byte length.
        expected: usize,
        /// The decoded byte length.
        got: usize,
    },
    /// The value is not an integer quantity.
    #[error("expected an integer quantity")]
    NotAnInteger,
    /// The value is not a string.
    #[error("expected a string")]
    NotAString,
    /// The value is not an array.
    #[error("expected an array")]
    NotAnArray,
    /// The value is not an object.
    #[error("expected an object")]
    NotAnObject,
}

/// An error occurring during the normalization of a raw record. Conversion
/// aborts on the first failure: no partial record is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A declared field failed coercion.
    #[error("invalid value {value} for field `{field}`: {source}")]
    Field {
        /// The canonical field name.
        field: String,
        /// The offending raw value, rendered as JSON.
        value: String,
        /// The underlying coercion failure.
        source: CoerceError,
    },
    /// A required field is missing from the raw record and has no alias
    /// present.
    #[error("missing required field `{field}`")]
    MissingField {
        /// The canonical field name.
        field: String,
    },
    /// The raw record is not a JSON object.
    #[error("expected a JSON object, got {value}")]
    NotAnObject {
        /// The offending raw value, rendered as JSON.
        value: String,
    },
}

impl ValidationError {
    /// Returns a field-qualified error for the given canonical field name and
    /// offending raw value.
    pub fn field(field: &str, value: &Value, source: CoerceError) -> Self {
        Self::Field { field: field.to_string(), value: value.to_string(), source }
    }

    /// Returns a missing-field error for the given canonical field name.
    pub fn missing(field: &str) -> Self {
        Self::MissingField { field: field.to_string() }
    }
}
