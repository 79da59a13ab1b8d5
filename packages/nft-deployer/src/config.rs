//! Deployer configuration.
//!
//! Loaded from an optional `deployer.{toml,json,yaml}` file, then from
//! `DEPLOYER_*` environment variables. Unset fields fall back to defaults.

use near_workspaces::types::{Gas as NearGas, NearToken};
use serde::Deserialize;

use crate::Error;

/// Target network for a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    /// Local throwaway sandbox. State is lost when the process exits.
    Sandbox,
    Testnet,
    Mainnet,
}

/// Configuration for the deployer binaries.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::network")]
    pub network: NetworkKind,

    #[serde(default = "defaults::wasm_path")]
    pub wasm_path: String,

    #[serde(default = "defaults::name")]
    pub name: String,

    #[serde(default = "defaults::symbol")]
    pub symbol: String,

    /// Subaccount prefix; the contract lands at `<label>.<signer>`.
    #[serde(default = "defaults::contract_label")]
    pub contract_label: String,

    /// Balance moved into the new contract account to cover storage.
    #[serde(default = "defaults::initial_balance_near")]
    pub initial_balance_near: u64,

    #[serde(default = "defaults::gas_tgas")]
    pub gas_tgas: u64,

    #[serde(default)]
    pub signer_account_id: Option<String>,

    #[serde(default)]
    pub signer_secret_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: defaults::network(),
            wasm_path: defaults::wasm_path(),
            name: defaults::name(),
            symbol: defaults::symbol(),
            contract_label: defaults::contract_label(),
            initial_balance_near: defaults::initial_balance_near(),
            gas_tgas: defaults::gas_tgas(),
            signer_account_id: None,
            signer_secret_key: None,
        }
    }
}

impl Config {
    /// Load from `deployer.*` (optional) and `DEPLOYER_*` env vars.
    /// A missing file is fine; a malformed one is an error.
    pub fn load() -> Result<Self, Error> {
        config::Config::builder()
            .add_source(config::File::with_name("deployer").required(false))
            .add_source(config::Environment::with_prefix("DEPLOYER"))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| Error::Config(e.to_string()))
    }

    pub fn initial_balance(&self) -> NearToken {
        NearToken::from_near(self.initial_balance_near as u128)
    }

    pub fn gas(&self) -> NearGas {
        NearGas::from_tgas(self.gas_tgas)
    }
}

pub(crate) mod defaults {
    use crate::NetworkKind;

    pub const NAME: &str = "Torsten Sharks";
    pub const SYMBOL: &str = "Torsten_Sharks";
    pub const CONTRACT_LABEL: &str = "nft";

    pub fn network() -> NetworkKind {
        NetworkKind::Testnet
    }

    /// `NFT_CONTRACT_WASM_PATH` overrides the `cargo near build` output.
    pub fn wasm_path() -> String {
        std::env::var("NFT_CONTRACT_WASM_PATH")
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "target/near/nft_contract/nft_contract.wasm".into())
    }

    pub fn name() -> String {
        NAME.into()
    }

    pub fn symbol() -> String {
        SYMBOL.into()
    }

    pub fn contract_label() -> String {
        CONTRACT_LABEL.into()
    }

    pub fn initial_balance_near() -> u64 {
        5
    }

    pub fn gas_tgas() -> u64 {
        100
    }
}
