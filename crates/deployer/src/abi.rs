//! The typed call and event surface of the system deployer contract.

use alloy_primitives::Log;
use alloy_sol_types::{sol, SolEvent};

sol! {
    /// Deploys a contract; the address derives from the sender and nonce.
    function create(bytes32 _salt, bytes32 _bytecodeHash, bytes _input);

    /// Deploys a contract at the address derived from the sender, salt and
    /// bytecode hash.
    function create2(bytes32 _salt, bytes32 _bytecodeHash, bytes _input);

    /// Deploys a smart account with custom validation logic.
    function createAccount(bytes32 _salt, bytes32 _bytecodeHash, bytes _input, uint8 _aaVersion);

    /// Deploys a smart account at a deterministic address.
    function create2Account(bytes32 _salt, bytes32 _bytecodeHash, bytes _input, uint8 _aaVersion);

    #[derive(Debug)]
    event ContractDeployed(
        address indexed deployerAddress,
        bytes32 indexed bytecodeHash,
        address indexed contractAddress
    );
}

/// Tries to decode the provided log into the type T.
pub fn try_decode_log<T: SolEvent>(log: &Log) -> Option<Log<T>> {
    T::decode_log(log).ok()
}
