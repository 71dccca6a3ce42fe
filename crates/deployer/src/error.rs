/// An error occurring while normalizing or hashing contract bytecode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BytecodeError {
    /// The value does not normalize to a valid hex string. Unrecognized input
    /// shapes are funneled here as well.
    #[error("bytecode is not valid hex: {value}")]
    InvalidHex {
        /// The normalized value that failed hex validation.
        value: String,
    },
    /// The hex string has an odd number of digits.
    #[error("bytecode hex has odd length {len}")]
    OddLength {
        /// The digit count.
        len: usize,
    },
    /// The byte length is not a multiple of the 32-byte word size.
    #[error("bytecode length {len} is not divisible by 32")]
    NotDivisibleBy32 {
        /// The byte length.
        len: usize,
    },
    /// The word count is even; the chain requires an odd number of words.
    #[error("bytecode word count {words} must be odd")]
    EvenWordCount {
        /// The 32-byte word count.
        words: usize,
    },
    /// The word count does not fit the hash's 16-bit length field.
    #[error("bytecode word count {words} exceeds 2^16 - 1")]
    TooLarge {
        /// The 32-byte word count.
        words: usize,
    },
}

/// An error occurring while encoding a deployment or resolving its outcome.
/// All encoding failures are raised before any network interaction could
/// take place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeployError {
    /// A CREATE2 deployment was requested without a salt.
    #[error("create2 deployments require a salt override")]
    MissingSalt,
    /// The supplied salt is not a 32-byte `0x`-prefixed hex string.
    #[error("invalid salt format: {salt}")]
    InvalidSaltFormat {
        /// The offending salt value.
        salt: String,
    },
    /// The supplied factory dependencies are not a sequence.
    #[error("factory dependencies must be an array of bytecodes")]
    InvalidFactoryDepsFormat,
    /// The supplied overrides are not an object.
    #[error("deployment overrides must be an object")]
    InvalidOverridesFormat,
    /// A bytecode failed normalization or hashing.
    #[error(transparent)]
    InvalidBytecode(#[from] BytecodeError),
    /// Constructor arguments were supplied for an ABI without a constructor.
    #[error("constructor arguments supplied, but the ABI declares no constructor")]
    MissingConstructor,
    /// The constructor arguments do not match the ABI constructor.
    #[error("invalid constructor arguments: {reason}")]
    ConstructorArgs {
        /// Why the arguments were rejected.
        reason: String,
    },
    /// The mined receipt contains no contract-deployment events.
    #[error("receipt contains no contract deployment events")]
    NoContractDeployedEvents,
}
