//! `nft-deploy` entry point, split out of `main` so the exit mapping is testable.

use tracing::{error, info};

use crate::{deploy_from_config, Config, Deployment, Error};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Loads config and deploys once.
pub async fn run() -> Result<Deployment, Error> {
    let config = Config::load()?;
    info!(
        network = ?config.network,
        wasm = %config.wasm_path,
        name = %config.name,
        symbol = %config.symbol,
        "Configuration loaded"
    );
    deploy_from_config(&config).await
}

/// Prints the address on success, logs the failure otherwise.
pub fn report(result: &Result<Deployment, Error>) -> i32 {
    match result {
        Ok(deployment) => {
            println!("NFT contract deployed to {}", deployment.contract_id);
        }
        Err(e @ Error::Config(_)) => {
            error!(error = %e, "FATAL: config error, check DEPLOYER_* env vars or deployer.toml");
        }
        Err(e) => {
            error!(error = %e, "Deployment failed");
        }
    }
    exit_code(result)
}

pub fn exit_code<T>(result: &Result<T, Error>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}
