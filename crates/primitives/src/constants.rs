//! Chain-wide constants for the L2 network.

use alloy_primitives::{address, Address};

/// The address of the system contract deployer. All contract and account
/// deployments on the L2 are calls to this contract.
pub const CONTRACT_DEPLOYER_ADDRESS: Address =
    address!("0000000000000000000000000000000000008006");

/// The first byte of the L2's custom EIP-712-signed transaction envelope.
pub const EIP712_TX_TYPE: u8 = 0x71;

/// The first byte of a legacy transaction.
pub const LEGACY_TX_TYPE: u8 = 0x0;

/// The first byte of an EIP-2930 access-list transaction.
pub const EIP2930_TX_TYPE: u8 = 0x01;

/// The first byte of an EIP-1559 transaction.
pub const EIP1559_TX_TYPE: u8 = 0x02;

/// The default amount of gas charged per byte of pubdata published to L1.
pub const DEFAULT_GAS_PER_PUBDATA_LIMIT: u64 = 50_000;
