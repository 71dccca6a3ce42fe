//! Building of deployer-contract calldata and the L2 transaction envelope
//! for the four deployment variants.

use crate::{
    abi::{create2AccountCall, create2Call, createAccountCall, createCall},
    bytecode::{hash_bytecode, resolve_bytecode},
    error::DeployError,
};
use alloy_dyn_abi::{DynSolValue, JsonAbiExt, Specifier};
use alloy_json_abi::{Constructor, JsonAbi};
use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolCall;
use era_client_primitives::constants::{
    CONTRACT_DEPLOYER_ADDRESS, DEFAULT_GAS_PER_PUBDATA_LIMIT, EIP712_TX_TYPE,
};
use serde_json::Value;
use tracing::debug;

/// The account-abstraction version tag attached to account deployments.
const ACCOUNT_ABSTRACTION_VERSION_1: u8 = 1;

/// The deployment variant. Account variants deploy smart accounts with
/// custom validation logic; CREATE2 variants deploy at a deterministic,
/// salt-derived address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentKind {
    /// Plain contract deployment, address derived from sender and nonce.
    Create,
    /// Deterministic contract deployment, address derived from sender, salt
    /// and bytecode hash.
    Create2,
    /// Smart-account deployment.
    CreateAccount,
    /// Deterministic smart-account deployment.
    Create2Account,
}

impl DeploymentKind {
    /// Returns whether the variant requires a caller-supplied salt.
    pub const fn requires_salt(&self) -> bool {
        matches!(self, Self::Create2 | Self::Create2Account)
    }

    /// Returns whether the variant deploys a smart account.
    pub const fn is_account(&self) -> bool {
        matches!(self, Self::CreateAccount | Self::Create2Account)
    }
}

/// Validated deployment overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOverrides {
    /// The CREATE2 salt, consumed into the deployer calldata. Zero for the
    /// non-deterministic variants.
    pub salt: B256,
    /// Caller-supplied factory dependencies, insertion-ordered and
    /// deduplicated by exact byte equality.
    pub factory_deps: Vec<Bytes>,
    /// The gas charged per byte of pubdata published to L1.
    pub gas_per_pubdata: U256,
}

impl Default for DeployOverrides {
    fn default() -> Self {
        Self {
            salt: B256::ZERO,
            factory_deps: Vec::new(),
            gas_per_pubdata: U256::from(DEFAULT_GAS_PER_PUBDATA_LIMIT),
        }
    }
}

impl DeployOverrides {
    /// Validates a raw overrides object for the given deployment variant.
    ///
    /// The salt is required for the CREATE2 variants and, when supplied at
    /// all, must be a 32-byte `0x`-prefixed hex string. Factory dependencies
    /// must be a sequence; the shape is checked before any bytecode is
    /// resolved or hashed. A salt carried under `customData` is consumed
    /// here: salt is meaningful only inside the deployer calldata, never at
    /// the envelope level.
    pub fn parse(kind: DeploymentKind, raw: &Value) -> Result<Self, DeployError> {
        let obj = raw.as_object().ok_or(DeployError::InvalidOverridesFormat)?;

        let raw_salt = obj
            .get("salt")
            .or_else(|| obj.get("customData").and_then(|data| data.get("salt")))
            .filter(|salt| !salt.is_null());
        let salt = match raw_salt {
            Some(salt) => parse_salt(salt)?,
            None if kind.requires_salt() => return Err(DeployError::MissingSalt),
            None => B256::ZERO,
        };

        let factory_deps = match obj.get("factoryDeps").filter(|deps| !deps.is_null()) {
            None => Vec::new(),
            Some(Value::Array(deps)) => {
                let mut resolved: Vec<Bytes> = Vec::with_capacity(deps.len());
                for dep in deps {
                    let dep = resolve_bytecode(dep)?;
                    if !resolved.contains(&dep) {
                        resolved.push(dep);
                    }
                }
                resolved
            }
            Some(_) => return Err(DeployError::InvalidFactoryDepsFormat),
        };

        let gas_per_pubdata = match obj.get("gasPerPubdata").filter(|gas| !gas.is_null()) {
            None => U256::from(DEFAULT_GAS_PER_PUBDATA_LIMIT),
            Some(Value::Number(n)) => {
                U256::from(n.as_u64().ok_or(DeployError::InvalidOverridesFormat)?)
            }
            Some(Value::String(s)) => s
                .strip_prefix("0x")
                .and_then(|digits| U256::from_str_radix(digits, 16).ok())
                .ok_or(DeployError::InvalidOverridesFormat)?,
            Some(_) => return Err(DeployError::InvalidOverridesFormat),
        };

        Ok(Self { salt, factory_deps, gas_per_pubdata })
    }
}

/// A 32-byte salt is exactly 66 characters including the `0x` prefix.
fn parse_salt(raw: &Value) -> Result<B256, DeployError> {
    let invalid = || DeployError::InvalidSaltFormat { salt: raw.to_string() };
    let salt = raw.as_str().ok_or_else(invalid)?;
    if !salt.starts_with("0x") || salt.len() != 66 {
        return Err(invalid());
    }
    salt.parse().map_err(|_| invalid())
}

/// The transaction envelope of a deployment: a call to the system deployer
/// carrying the published factory dependencies. Submission, signing and the
/// wait for inclusion belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTransaction {
    /// The fixed system deployer address.
    pub to: Address,
    /// The deployer calldata.
    pub data: Bytes,
    /// The chain's custom envelope type tag.
    pub tx_type: u8,
    /// The bytecodes published alongside the deployment. Contains the
    /// deployed contract's own bytecode exactly once.
    pub factory_deps: Vec<Bytes>,
    /// The gas charged per byte of pubdata published to L1.
    pub gas_per_pubdata: U256,
}

/// Splits the caller arguments into constructor arguments and an optional
/// trailing overrides object: the trailing argument is treated as overrides
/// exactly when the argument count exceeds the constructor arity by one.
pub fn partition_args<'a>(
    constructor: Option<&Constructor>,
    args: &'a [Value],
) -> (&'a [Value], Option<&'a Value>) {
    let arity = constructor.map_or(0, |constructor| constructor.inputs.len());
    if args.len() == arity + 1 {
        let (constructor_args, overrides) = args.split_at(arity);
        (constructor_args, overrides.first())
    } else {
        (args, None)
    }
}

/// Builds the deployment transaction for the given variant.
///
/// All validation happens here, before any network interaction could take
/// place; no partially-built transaction is ever produced.
pub fn encode_deployment(
    kind: DeploymentKind,
    abi: &JsonAbi,
    bytecode: &Value,
    args: &[Value],
) -> Result<DeploymentTransaction, DeployError> {
    let (constructor_args, overrides) = partition_args(abi.constructor(), args);

    let overrides = match overrides {
        Some(raw) => DeployOverrides::parse(kind, raw)?,
        None if kind.requires_salt() => return Err(DeployError::MissingSalt),
        None => DeployOverrides::default(),
    };

    let bytecode = resolve_bytecode(bytecode)?;
    let bytecode_hash = hash_bytecode(&bytecode)?;
    let input = encode_constructor_args(abi.constructor(), constructor_args)?;

    let salt = overrides.salt;
    let data: Bytes = match kind {
        DeploymentKind::Create => {
            createCall { _salt: salt, _bytecodeHash: bytecode_hash, _input: input }
                .abi_encode()
                .into()
        }
        DeploymentKind::Create2 => {
            create2Call { _salt: salt, _bytecodeHash: bytecode_hash, _input: input }
                .abi_encode()
                .into()
        }
        DeploymentKind::CreateAccount => createAccountCall {
            _salt: salt,
            _bytecodeHash: bytecode_hash,
            _input: input,
            _aaVersion: ACCOUNT_ABSTRACTION_VERSION_1,
        }
        .abi_encode()
        .into(),
        DeploymentKind::Create2Account => create2AccountCall {
            _salt: salt,
            _bytecodeHash: bytecode_hash,
            _input: input,
            _aaVersion: ACCOUNT_ABSTRACTION_VERSION_1,
        }
        .abi_encode()
        .into(),
    };

    // The deployed contract's own bytecode must be published exactly once,
    // whether or not the caller listed it.
    let mut factory_deps = overrides.factory_deps;
    if !factory_deps.contains(&bytecode) {
        factory_deps.push(bytecode);
    }

    debug!(
        target: "era::deployer",
        ?kind,
        calldata_len = data.len(),
        factory_deps = factory_deps.len(),
        "encoded deployment transaction"
    );

    Ok(DeploymentTransaction {
        to: CONTRACT_DEPLOYER_ADDRESS,
        data,
        tx_type: EIP712_TX_TYPE,
        factory_deps,
        gas_per_pubdata: overrides.gas_per_pubdata,
    })
}

/// ABI-encodes the constructor arguments, coercing each raw JSON value
/// against the resolved constructor input type.
fn encode_constructor_args(
    constructor: Option<&Constructor>,
    args: &[Value],
) -> Result<Bytes, DeployError> {
    let Some(constructor) = constructor else {
        return if args.is_empty() {
            Ok(Bytes::new())
        } else {
            Err(DeployError::MissingConstructor)
        };
    };

    if constructor.inputs.len() != args.len() {
        return Err(DeployError::ConstructorArgs {
            reason: format!(
                "expected {} arguments, got {}",
                constructor.inputs.len(),
                args.len()
            ),
        });
    }

    let values = constructor
        .inputs
        .iter()
        .zip(args)
        .map(|(input, arg)| {
            let ty = input.resolve().map_err(|err| DeployError::ConstructorArgs {
                reason: format!("could not resolve type of `{}`: {err}", input.name),
            })?;
            ty.coerce_str(&render_arg(arg)).map_err(|err| DeployError::ConstructorArgs {
                reason: format!("argument `{}`: {err}", input.name),
            })
        })
        .collect::<Result<Vec<DynSolValue>, _>>()?;

    constructor
        .abi_encode_input(&values)
        .map(Into::into)
        .map_err(|err| DeployError::ConstructorArgs { reason: err.to_string() })
}

/// Renders a JSON value in the textual form the dyn-abi coercer accepts.
fn render_arg(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(elems) => {
            let elems: Vec<_> = elems.iter().map(render_arg).collect();
            format!("[{}]", elems.join(","))
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SALT: &str = "0x0100000000000000000000000000000000000000000000000000000000000001";

    fn no_constructor_abi() -> JsonAbi {
        serde_json::from_str("[]").unwrap()
    }

    fn greeter_abi() -> JsonAbi {
        serde_json::from_str(
            r#"[{"type":"constructor","inputs":[
                {"name":"_greeting","type":"string","internalType":"string"},
                {"name":"_count","type":"uint256","internalType":"uint256"}
            ],"stateMutability":"nonpayable"}]"#,
        )
        .unwrap()
    }

    fn bytecode() -> Value {
        json!(format!("0x{}", "11".repeat(32)))
    }

    #[test]
    fn test_create_defaults_salt_to_zero() -> eyre::Result<()> {
        let tx = encode_deployment(DeploymentKind::Create, &no_constructor_abi(), &bytecode(), &[])?;

        let call = createCall::abi_decode(&tx.data)?;
        assert_eq!(call._salt, B256::ZERO);
        assert_eq!(tx.to, CONTRACT_DEPLOYER_ADDRESS);
        assert_eq!(tx.tx_type, EIP712_TX_TYPE);
        assert_eq!(tx.gas_per_pubdata, U256::from(DEFAULT_GAS_PER_PUBDATA_LIMIT));
        Ok(())
    }

    #[test]
    fn test_create2_requires_salt() {
        let err =
            encode_deployment(DeploymentKind::Create2, &no_constructor_abi(), &bytecode(), &[])
                .unwrap_err();
        assert_eq!(err, DeployError::MissingSalt);

        let err = encode_deployment(
            DeploymentKind::Create2Account,
            &no_constructor_abi(),
            &bytecode(),
            &[json!({})],
        )
        .unwrap_err();
        assert_eq!(err, DeployError::MissingSalt);
    }

    #[test]
    fn test_create2_rejects_malformed_salt() {
        for bad in [json!({ "salt": "0x01" }), json!({ "salt": "01" }), json!({ "salt": 7 })] {
            let err = encode_deployment(
                DeploymentKind::Create2,
                &no_constructor_abi(),
                &bytecode(),
                &[bad],
            )
            .unwrap_err();
            assert!(matches!(err, DeployError::InvalidSaltFormat { .. }));
        }
    }

    #[test]
    fn test_create2_salt_lands_in_calldata() -> eyre::Result<()> {
        let tx = encode_deployment(
            DeploymentKind::Create2,
            &no_constructor_abi(),
            &bytecode(),
            &[json!({ "salt": SALT })],
        )?;

        let call = create2Call::abi_decode(&tx.data)?;
        assert_eq!(call._salt, SALT.parse::<B256>()?);
        assert_eq!(call._bytecodeHash, hash_bytecode(&resolve_bytecode(&bytecode())?)?);
        Ok(())
    }

    #[test]
    fn test_account_variants_carry_version_tag() -> eyre::Result<()> {
        let tx = encode_deployment(
            DeploymentKind::CreateAccount,
            &no_constructor_abi(),
            &bytecode(),
            &[],
        )?;
        let call = createAccountCall::abi_decode(&tx.data)?;
        assert_eq!(call._aaVersion, ACCOUNT_ABSTRACTION_VERSION_1);

        let tx = encode_deployment(
            DeploymentKind::Create2Account,
            &no_constructor_abi(),
            &bytecode(),
            &[json!({ "salt": SALT })],
        )?;
        let call = create2AccountCall::abi_decode(&tx.data)?;
        assert_eq!(call._salt, SALT.parse::<B256>()?);
        Ok(())
    }

    #[test]
    fn test_factory_deps_must_be_a_sequence() {
        let err = encode_deployment(
            DeploymentKind::Create,
            &no_constructor_abi(),
            &bytecode(),
            &[json!({ "factoryDeps": "not-an-array" })],
        )
        .unwrap_err();
        assert_eq!(err, DeployError::InvalidFactoryDepsFormat);
    }

    #[test]
    fn test_own_bytecode_published_exactly_once() -> eyre::Result<()> {
        let own = resolve_bytecode(&bytecode())?;

        // Not listed by the caller: appended.
        let dep = format!("0x{}", "22".repeat(32));
        let tx = encode_deployment(
            DeploymentKind::Create,
            &no_constructor_abi(),
            &bytecode(),
            &[json!({ "factoryDeps": [dep] })],
        )?;
        assert_eq!(tx.factory_deps.len(), 2);
        assert_eq!(tx.factory_deps.iter().filter(|d| **d == own).count(), 1);

        // Listed by the caller, twice: still exactly once.
        let tx = encode_deployment(
            DeploymentKind::Create,
            &no_constructor_abi(),
            &bytecode(),
            &[json!({ "factoryDeps": [bytecode(), bytecode()] })],
        )?;
        assert_eq!(tx.factory_deps.iter().filter(|d| **d == own).count(), 1);
        Ok(())
    }

    #[test]
    fn test_partition_trailing_overrides_by_arity() {
        let abi = greeter_abi();
        let args = vec![json!("hello"), json!(3), json!({ "salt": SALT })];
        let (constructor_args, overrides) = partition_args(abi.constructor(), &args);
        assert_eq!(constructor_args.len(), 2);
        assert!(overrides.is_some());

        let args = vec![json!("hello"), json!(3)];
        let (constructor_args, overrides) = partition_args(abi.constructor(), &args);
        assert_eq!(constructor_args.len(), 2);
        assert!(overrides.is_none());
    }

    #[test]
    fn test_constructor_args_are_abi_encoded() -> eyre::Result<()> {
        let tx = encode_deployment(
            DeploymentKind::Create,
            &greeter_abi(),
            &bytecode(),
            &[json!("hello"), json!(3)],
        )?;

        let call = createCall::abi_decode(&tx.data)?;
        assert!(!call._input.is_empty());
        Ok(())
    }

    #[test]
    fn test_args_without_constructor_rejected() {
        let err = encode_deployment(
            DeploymentKind::Create,
            &no_constructor_abi(),
            &bytecode(),
            &[json!("hello"), json!(3)],
        )
        .unwrap_err();
        assert!(matches!(err, DeployError::ConstructorArgs { .. } | DeployError::MissingConstructor));
    }

    #[test]
    fn test_envelope_salt_is_stripped() -> eyre::Result<()> {
        // A salt smuggled under customData is consumed into the calldata and
        // never appears on the envelope.
        let tx = encode_deployment(
            DeploymentKind::Create2,
            &no_constructor_abi(),
            &bytecode(),
            &[json!({ "customData": { "salt": SALT } })],
        )?;

        let call = create2Call::abi_decode(&tx.data)?;
        assert_eq!(call._salt, SALT.parse::<B256>()?);
        Ok(())
    }
}
