//! Normalizer for fee quotes returned by the node's estimation endpoint,
//! which reports its fields in snake_case.

use crate::{coerce, error::ValidationError, formatter::Formatter};
use era_client_primitives::FeeQuote;
use serde_json::Value;

/// Normalizes a raw fee quote.
pub fn normalize_fee_quote(raw: &Value) -> Result<FeeQuote, ValidationError> {
    let formatter = Formatter::new(raw)?;
    Ok(FeeQuote {
        gas_limit: formatter.required("gasLimit", &["gas_limit"], coerce::u256)?,
        gas_per_pubdata_limit: formatter.required(
            "gasPerPubdataLimit",
            &["gas_per_pubdata_limit"],
            coerce::u256,
        )?,
        max_priority_fee_per_gas: formatter.required(
            "maxPriorityFeePerGas",
            &["max_priority_fee_per_gas"],
            coerce::u256,
        )?,
        max_fee_per_gas: formatter.required(
            "maxFeePerGas",
            &["max_fee_per_gas"],
            coerce::u256,
        )?,
    })
}
