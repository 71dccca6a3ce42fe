use alloy_primitives::{Address, Bytes, B256};
use serde::Serialize;

/// A canonical event log, as returned by `eth_getLogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// The address the log was emitted from.
    pub address: Address,
    /// The indexed topics of the log.
    pub topics: Vec<B256>,
    /// The unindexed data of the log.
    pub data: Bytes,
    /// The hash of the block the log was included in. [`None`] for pending logs.
    pub block_hash: Option<B256>,
    /// The number of the block the log was included in.
    pub block_number: Option<u64>,
    /// The hash of the transaction that emitted the log.
    pub transaction_hash: Option<B256>,
    /// The index of the transaction within its block.
    pub transaction_index: Option<u64>,
    /// The index of the log within its block.
    pub index: u64,
    /// Whether the log was removed due to a chain reorganization.
    pub removed: bool,
    /// The number of the L1 batch the log belongs to, once sealed.
    pub l1_batch_number: Option<u64>,
}

/// A log in its transaction-receipt context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLog {
    /// The address the log was emitted from.
    pub address: Address,
    /// The indexed topics of the log.
    pub topics: Vec<B256>,
    /// The unindexed data of the log.
    pub data: Bytes,
    /// The hash of the block the log was included in.
    pub block_hash: Option<B256>,
    /// The number of the block the log was included in.
    pub block_number: Option<u64>,
    /// The hash of the transaction the receipt belongs to.
    pub transaction_hash: Option<B256>,
    /// The index of the transaction within its block.
    pub transaction_index: Option<u64>,
    /// The index of the log within its block.
    pub index: u64,
    /// The backend-reported log type, if any.
    pub log_type: Option<String>,
    /// The number of the L1 batch the log belongs to, once sealed.
    pub l1_batch_number: Option<u64>,
}

/// An L2-to-L1 message log, carried in transaction receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct L2ToL1Log {
    /// The number of the block the log was emitted in.
    pub block_number: u64,
    /// The hash of the block the log was emitted in.
    pub block_hash: B256,
    /// The number of the L1 batch the log belongs to.
    pub l1_batch_number: Option<u64>,
    /// The index of the transaction within its block.
    pub transaction_index: u64,
    /// The id of the shard the log was emitted from.
    pub shard_id: u64,
    /// Whether the log was emitted by a system service.
    pub is_service: bool,
    /// The L2 address that sent the message.
    pub sender: Address,
    /// The 32-byte key of the message.
    pub key: B256,
    /// The 32-byte value of the message.
    pub value: B256,
    /// The hash of the transaction that emitted the log.
    pub transaction_hash: B256,
    /// The index of the log within the transaction.
    pub log_index: u64,
}
