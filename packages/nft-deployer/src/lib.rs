//! # NFT Deployer
//!
//! Deploys the Torsten Sharks NFT blueprint to a NEAR network and drives it
//! from a resettable sandbox fixture.
//!
//! ## Quick Start
//! ```bash
//! cargo near build --manifest-path contracts/nft-contract/Cargo.toml
//! DEPLOYER_NETWORK=testnet cargo run --bin nft-deploy
//! cargo run --bin nft-probe
//! ```

pub mod cli;
pub mod config;
pub mod contract;
pub mod deploy;
mod error;
pub mod fixture;
pub mod scenario;

pub use config::{Config, NetworkKind};
pub use contract::{MintRequest, NftContract};
pub use deploy::{deploy, deploy_from_config, Blueprint, DeployOptions, DeployParams, Deployment};
pub use error::Error;
pub use fixture::Fixture;
pub use scenario::{run_mint_scenario, ScenarioReport};

/// Installs the `RUST_LOG`-filtered fmt subscriber used by the binaries.
/// Logs go to stderr so stdout carries only results.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
