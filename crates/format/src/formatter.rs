//! The shape-driven record formatter. A normalizer declares, per canonical
//! field, the source aliases and the coercer to apply; the formatter resolves
//! the source value and qualifies any coercion failure with the field name
//! and the offending raw value.

use crate::error::{CoerceError, ValidationError};
use serde_json::{Map, Value};

/// An alias-aware view over a raw JSON-RPC record.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    raw: &'a Map<String, Value>,
}

impl<'a> Formatter<'a> {
    /// Wraps the raw record, failing if it is not a JSON object.
    pub fn new(raw: &'a Value) -> Result<Self, ValidationError> {
        raw.as_object()
            .map(|raw| Self { raw })
            .ok_or_else(|| ValidationError::NotAnObject { value: raw.to_string() })
    }

    /// Resolves the source value for a canonical field: the canonical name
    /// wins when present, otherwise the first present alias in declared
    /// order.
    pub fn resolve(&self, name: &str, aliases: &[&str]) -> Option<&'a Value> {
        std::iter::once(name)
            .chain(aliases.iter().copied())
            .find_map(|key| self.raw.get(key))
    }

    /// Coerces a required field. A missing source is a
    /// [`ValidationError::MissingField`]; a failed coercion aborts with the
    /// full field context.
    pub fn required<T>(
        &self,
        name: &str,
        aliases: &[&str],
        coercer: impl Fn(&Value) -> Result<T, CoerceError>,
    ) -> Result<T, ValidationError> {
        let value = self.resolve(name, aliases).ok_or_else(|| ValidationError::missing(name))?;
        coercer(value).map_err(|err| ValidationError::field(name, value, err))
    }

    /// Coerces an optional field. An absent or null source yields [`None`];
    /// a present source that fails coercion still aborts.
    pub fn optional<T>(
        &self,
        name: &str,
        aliases: &[&str],
        coercer: impl Fn(&Value) -> Result<T, CoerceError>,
    ) -> Result<Option<T>, ValidationError> {
        match self.resolve(name, aliases) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => {
                coercer(value).map(Some).map_err(|err| ValidationError::field(name, value, err))
            }
        }
    }

    /// Coerces an optional field, substituting a declared default when the
    /// source is absent or null.
    pub fn optional_or<T>(
        &self,
        name: &str,
        aliases: &[&str],
        coercer: impl Fn(&Value) -> Result<T, CoerceError>,
        default: T,
    ) -> Result<T, ValidationError> {
        Ok(self.optional(name, aliases, coercer)?.unwrap_or(default))
    }
}
