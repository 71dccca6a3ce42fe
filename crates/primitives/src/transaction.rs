use alloy_primitives::{Address, Bytes, B256, U256};
use serde::Serialize;

/// An ECDSA signature as carried on a JSON-RPC transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Signature {
    /// The `r` component.
    pub r: U256,
    /// The `s` component.
    pub s: U256,
    /// The recovery id, potentially EIP-155 encoded.
    pub v: u64,
}

impl Signature {
    /// Returns the chain id encoded in a legacy EIP-155 `v` value, or
    /// [`None`] when `v` carries no chain id.
    pub const fn legacy_chain_id(&self) -> Option<u64> {
        if self.v >= 35 {
            Some((self.v - 35) / 2)
        } else {
            None
        }
    }
}

/// An entry of an EIP-2930 access list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListEntry {
    /// The address to warm.
    pub address: Address,
    /// The storage keys to warm.
    pub storage_keys: Vec<B256>,
}

/// A canonical transaction, as returned by `eth_getTransactionByHash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// The transaction hash.
    pub hash: B256,
    /// The hash of the block the transaction was included in. [`None`] while
    /// the transaction is pending.
    pub block_hash: Option<B256>,
    /// The number of the block the transaction was included in.
    pub block_number: Option<u64>,
    /// The index of the transaction within its block.
    pub index: Option<u64>,
    /// The transaction envelope type.
    #[serde(rename = "type")]
    pub tx_type: u64,
    /// The sender of the transaction.
    pub from: Address,
    /// The destination of the transaction. [`None`] for contract creations.
    pub to: Option<Address>,
    /// The sender's nonce.
    pub nonce: u64,
    /// The gas limit of the transaction.
    pub gas_limit: U256,
    /// The legacy gas price, when quoted.
    pub gas_price: Option<U256>,
    /// The EIP-1559 maximum fee per gas.
    pub max_fee_per_gas: Option<U256>,
    /// The EIP-1559 priority fee per gas.
    pub max_priority_fee_per_gas: Option<U256>,
    /// The value transferred by the transaction.
    pub value: U256,
    /// The calldata of the transaction.
    pub input: Bytes,
    /// The chain id the transaction is bound to, when known.
    pub chain_id: Option<u64>,
    /// The transaction signature. [`None`] for transactions that carry no
    /// ECDSA components, such as L1-originated deposits.
    pub signature: Option<Signature>,
    /// The EIP-2930 access list, for envelope types that carry one.
    pub access_list: Option<Vec<AccessListEntry>>,
    /// The number of the L1 batch the transaction belongs to, once sealed.
    pub l1_batch_number: Option<u64>,
    /// The index of the transaction within its L1 batch.
    pub l1_batch_tx_index: Option<u64>,
}
