use alloy_primitives::U256;
use serde::Serialize;

/// A fee quote for an L2 transaction, as returned by the node's fee
/// estimation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuote {
    /// The maximum amount of gas the transaction may consume.
    pub gas_limit: U256,
    /// The maximum amount of gas the sender agrees to pay per byte of
    /// pubdata published to L1.
    pub gas_per_pubdata_limit: U256,
    /// The EIP-1559 priority fee per gas.
    pub max_priority_fee_per_gas: U256,
    /// The EIP-1559 maximum fee per gas.
    pub max_fee_per_gas: U256,
}
