//! Resolution of the deployed contract address from a mined receipt, and the
//! contract handle it rebinds.

use crate::{
    abi::{try_decode_log, ContractDeployed},
    error::DeployError,
};
use alloy_json_abi::JsonAbi;
use alloy_primitives::{Address, Log, B256};
use era_client_primitives::{constants::CONTRACT_DEPLOYER_ADDRESS, TransactionReceipt};
use tracing::debug;

/// Collects the addresses of all contract-deployment events in the receipt,
/// in log order.
pub fn extract_deployed_addresses(receipt: &TransactionReceipt) -> Vec<Address> {
    receipt
        .logs
        .iter()
        .filter(|log| log.address == CONTRACT_DEPLOYER_ADDRESS)
        .filter_map(|log| {
            let log = Log::new(log.address, log.topics.clone(), log.data.clone())?;
            try_decode_log::<ContractDeployed>(&log)
        })
        .map(|log| log.data.contractAddress)
        .collect()
}

/// Returns the authoritative deployed address of the receipt: the last
/// contract-deployment event wins, accommodating transactions that deploy
/// several contracts (e.g. proxy plus implementation) where the outermost
/// deployment is the one the caller intended.
pub fn resolve_deployed_address(receipt: &TransactionReceipt) -> Result<Address, DeployError> {
    let addresses = extract_deployed_addresses(receipt);
    debug!(
        target: "era::deployer",
        tx = %receipt.hash,
        deployments = addresses.len(),
        "resolved contract deployments from receipt"
    );
    addresses.last().copied().ok_or(DeployError::NoContractDeployedEvents)
}

/// A typed handle to a contract: its ABI and, once deployed and resolved,
/// its on-chain address and the transaction that deployed it.
#[derive(Debug, Clone)]
pub struct ContractHandle {
    /// The contract's ABI interface.
    pub abi: JsonAbi,
    /// The bound on-chain address, once known.
    pub address: Option<Address>,
    /// The hash of the mined deployment transaction, once resolved.
    pub deploy_transaction: Option<B256>,
}

impl ContractHandle {
    /// Returns an unbound handle for the given ABI.
    pub const fn new(abi: JsonAbi) -> Self {
        Self { abi, address: None, deploy_transaction: None }
    }

    /// Rebinds the handle to the address resolved from the mined receipt,
    /// preserving the ABI and recording the deployment transaction.
    pub fn resolve_deployed(&self, receipt: &TransactionReceipt) -> Result<Self, DeployError> {
        let address = resolve_deployed_address(receipt)?;
        Ok(Self {
            abi: self.abi.clone(),
            address: Some(address),
            deploy_transaction: Some(receipt.hash),
        })
    }
}
