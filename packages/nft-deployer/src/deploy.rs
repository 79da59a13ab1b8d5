//! Contract deployment.
//!
//! A deployment is a single batched transaction signed by the deployer:
//! create `<label>.<signer>`, fund it, deploy the blueprint and call
//! `new(name, symbol)`. The signer becomes the collection owner.

use std::path::Path;
use std::sync::Arc;

use near_workspaces::{DevNetwork, Network};
use near_workspaces::operations::Function;
use near_workspaces::types::{Gas as NearGas, NearToken, SecretKey};
use near_workspaces::{Account, AccountId, Worker};
use serde_json::json;
use tracing::{info, warn};

use crate::config::defaults;
use crate::{Config, Error, NetworkKind};

const WASM_MAGIC: &[u8] = b"\0asm";

/// Compiled contract bytes. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Blueprint {
    wasm: Arc<[u8]>,
}

impl Blueprint {
    pub fn from_bytes(wasm: Vec<u8>) -> Result<Self, Error> {
        if !wasm.starts_with(WASM_MAGIC) {
            return Err(Error::Wasm("not a wasm module".into()));
        }
        Ok(Self { wasm: wasm.into() })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let wasm = std::fs::read(path)
            .map_err(|e| Error::Wasm(format!("{}: {e}", path.display())))?;
        Self::from_bytes(wasm)
    }

    pub fn wasm(&self) -> &[u8] {
        &self.wasm
    }
}

/// Constructor arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployParams {
    pub name: String,
    pub symbol: String,
}

impl DeployParams {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

impl Default for DeployParams {
    fn default() -> Self {
        Self::new(defaults::NAME, defaults::SYMBOL)
    }
}

#[derive(Debug, Clone)]
pub struct DeployOptions {
    pub contract_label: String,
    pub initial_balance: NearToken,
    pub gas: NearGas,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for DeployOptions {
    fn from(config: &Config) -> Self {
        Self {
            contract_label: config.contract_label.clone(),
            initial_balance: config.initial_balance(),
            gas: config.gas(),
        }
    }
}

/// Result of a confirmed deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub contract_id: AccountId,
    pub owner_id: AccountId,
}

/// `<label>.<signer>`, validated.
pub fn contract_account_id(label: &str, signer_id: &AccountId) -> Result<AccountId, Error> {
    format!("{label}.{signer_id}")
        .parse()
        .map_err(|e| Error::Config(format!("invalid contract account id: {e}")))
}

/// Deploys `blueprint` under `signer` and waits for the final outcome.
/// Makes exactly one attempt.
pub async fn deploy(
    signer: &Account,
    blueprint: &Blueprint,
    params: &DeployParams,
    options: &DeployOptions,
) -> Result<Deployment, Error> {
    let contract_id = contract_account_id(&options.contract_label, signer.id())?;
    info!(
        contract = %contract_id,
        signer = %signer.id(),
        name = %params.name,
        symbol = %params.symbol,
        "Submitting creation transaction"
    );

    let outcome = signer
        .batch(&contract_id)
        .create_account()
        .transfer(options.initial_balance)
        .deploy(blueprint.wasm())
        .call(
            Function::new("new")
                .args_json(json!({
                    "name": params.name,
                    "symbol": params.symbol,
                }))
                .gas(options.gas),
        )
        .transact()
        .await
        .map_err(Error::network)?;

    outcome
        .into_result()
        .map_err(|failure| Error::Deploy(format!("{failure:?}")))?;

    info!(contract = %contract_id, "NFT contract deployed");
    Ok(Deployment {
        contract_id,
        owner_id: signer.id().clone(),
    })
}

/// Resolves the signer from config and deploys on the configured network.
pub async fn deploy_from_config(config: &Config) -> Result<Deployment, Error> {
    let blueprint = Blueprint::from_path(&config.wasm_path)?;
    let params = DeployParams::new(&config.name, &config.symbol);
    let options = DeployOptions::from(config);

    match config.network {
        NetworkKind::Sandbox => {
            warn!("Deploying to a local sandbox; state is discarded on exit");
            let worker = near_workspaces::sandbox().await.map_err(Error::network)?;
            let signer = dev_or_configured_signer(&worker, config).await?;
            deploy(&signer, &blueprint, &params, &options).await
        }
        NetworkKind::Testnet => {
            let worker = near_workspaces::testnet().await.map_err(Error::network)?;
            let signer = dev_or_configured_signer(&worker, config).await?;
            deploy(&signer, &blueprint, &params, &options).await
        }
        NetworkKind::Mainnet => {
            let worker = near_workspaces::mainnet().await.map_err(Error::network)?;
            let signer = configured_signer(&worker, config)?.ok_or_else(|| {
                Error::Config(
                    "mainnet requires signer_account_id and signer_secret_key".into(),
                )
            })?;
            deploy(&signer, &blueprint, &params, &options).await
        }
    }
}

async fn dev_or_configured_signer<N>(worker: &Worker<N>, config: &Config) -> Result<Account, Error>
where
    N: DevNetwork + Network + 'static,
{
    if let Some(signer) = configured_signer(worker, config)? {
        return Ok(signer);
    }
    let account = worker.dev_create_account().await.map_err(Error::network)?;
    info!(account = %account.id(), "No signer configured, created dev account");
    Ok(account)
}

fn configured_signer<N>(worker: &Worker<N>, config: &Config) -> Result<Option<Account>, Error>
where
    N: Network + 'static,
{
    Ok(signer_credentials(config)?.map(|(id, sk)| Account::from_secret_key(id, sk, worker)))
}

fn signer_credentials(config: &Config) -> Result<Option<(AccountId, SecretKey)>, Error> {
    match (&config.signer_account_id, &config.signer_secret_key) {
        (Some(id), Some(key)) => {
            let id: AccountId = id
                .parse()
                .map_err(|e| Error::Config(format!("invalid signer_account_id: {e}")))?;
            let sk: SecretKey = key
                .parse()
                .map_err(|e| Error::Config(format!("invalid signer_secret_key: {e}")))?;
            Ok(Some((id, sk)))
        }
        (None, None) => Ok(None),
        _ => Err(Error::Config(
            "signer_account_id and signer_secret_key must be set together".into(),
        )),
    }
}
