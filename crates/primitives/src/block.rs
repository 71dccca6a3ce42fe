use crate::TransactionResponse;
use alloy_primitives::{Address, Bytes, B256, U256};
use serde::Serialize;

/// A transaction entry of a [`Block`]. Backends return either bare hashes or
/// fully inlined transaction objects, depending on the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BlockTransaction {
    /// The transaction hash only.
    Hash(B256),
    /// The full transaction object.
    Full(Box<TransactionResponse>),
}

/// A canonical block, as returned by `eth_getBlockByNumber`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// The block hash. [`None`] for pending blocks.
    pub hash: Option<B256>,
    /// The hash of the parent block.
    pub parent_hash: B256,
    /// The block number.
    pub number: u64,
    /// The block timestamp, in seconds.
    pub timestamp: u64,
    /// The proof-of-work nonce field. Always zero-valued on the L2, carried
    /// for interface compatibility.
    pub nonce: Option<Bytes>,
    /// The block difficulty.
    pub difficulty: U256,
    /// The block gas limit.
    pub gas_limit: U256,
    /// The gas used by all transactions in the block.
    pub gas_used: U256,
    /// The beneficiary of the block rewards.
    pub miner: Address,
    /// The extra data attached to the block.
    pub extra_data: Bytes,
    /// The EIP-1559 base fee per gas.
    pub base_fee_per_gas: Option<U256>,
    /// The transactions included in the block.
    pub transactions: Vec<BlockTransaction>,
    /// The number of the L1 batch the block belongs to, once sealed.
    pub l1_batch_number: Option<u64>,
    /// The timestamp of the L1 batch the block belongs to.
    pub l1_batch_timestamp: Option<u64>,
}
