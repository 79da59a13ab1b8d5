//! Loads the sandbox fixture, runs the mint scenario and prints what the
//! contract reports. Reads only `wasm_path`, `name` and `symbol` from config.

use nft_deployer::{init_tracing, run_mint_scenario, Blueprint, Config, DeployParams, Fixture};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        error!(error = %e, "Probe failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), nft_deployer::Error> {
    let config = Config::load()?;
    let blueprint = Blueprint::from_path(&config.wasm_path)?;
    let params = DeployParams::new(&config.name, &config.symbol);

    let fixture = Fixture::load(&blueprint, &params).await?;
    info!(contract = %fixture.contract_id(), "Running mint scenario");

    let report = run_mint_scenario(&fixture).await?;
    println!("{report}");
    Ok(())
}
