use crate::{L2ToL1Log, ReceiptLog};
use alloy_primitives::{Address, Bytes, B256, U256};
use serde::Serialize;

/// A canonical transaction receipt, as returned by
/// `eth_getTransactionReceipt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// The hash of the transaction the receipt belongs to.
    pub hash: B256,
    /// The index of the transaction within its block.
    pub index: u64,
    /// The hash of the block the transaction was included in.
    pub block_hash: Option<B256>,
    /// The number of the block the transaction was included in.
    pub block_number: Option<u64>,
    /// The sender of the transaction.
    pub from: Address,
    /// The destination of the transaction. [`None`] for contract creations.
    pub to: Option<Address>,
    /// The address created by the transaction, if it was a deployment made
    /// directly through the deployer.
    pub contract_address: Option<Address>,
    /// The gas used by this transaction alone.
    pub gas_used: U256,
    /// The gas used by the block up to and including this transaction.
    pub cumulative_gas_used: U256,
    /// The effective price per gas actually paid.
    pub effective_gas_price: U256,
    /// The execution status: 1 for success, 0 for revert. [`None`] when the
    /// backend predates status reporting.
    pub status: Option<u64>,
    /// The transaction envelope type.
    #[serde(rename = "type")]
    pub tx_type: u64,
    /// The bloom filter of the receipt's logs.
    pub logs_bloom: Bytes,
    /// The logs emitted by the transaction.
    pub logs: Vec<ReceiptLog>,
    /// The L2-to-L1 message logs emitted by the transaction.
    pub l2_to_l1_logs: Vec<L2ToL1Log>,
    /// The number of the L1 batch the transaction belongs to, once sealed.
    pub l1_batch_number: Option<u64>,
    /// The index of the transaction within its L1 batch.
    pub l1_batch_tx_index: Option<u64>,
    /// The pre-Byzantium state root, if reported.
    pub root: Option<B256>,
}
