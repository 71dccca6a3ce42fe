//! Deployment-transaction encoding for the L2's system deployer contract.
//!
//! A deployment is a call to a fixed system contract rather than a bare
//! transaction with init code: the calldata carries the salt, the versioned
//! content hash of the bytecode and the ABI-encoded constructor arguments,
//! while the bytecode itself (and that of any contract the deployment may
//! itself instantiate) travels in the envelope's factory-dependency list.
//! After the caller has submitted the transaction and obtained the mined
//! receipt, the deployed address is resolved from the receipt's
//! contract-deployment events.

pub mod abi;

pub use bytecode::{hash_bytecode, resolve_bytecode};
mod bytecode;

pub use encoder::{
    encode_deployment, partition_args, DeployOverrides, DeploymentKind, DeploymentTransaction,
};
mod encoder;

pub use error::{BytecodeError, DeployError};
mod error;

pub use handle::{extract_deployed_addresses, resolve_deployed_address, ContractHandle};
mod handle;
