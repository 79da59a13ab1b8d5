//! Deploys the NFT contract to the configured network.
//!
//! Takes no flags; see `Config` for `deployer.toml` / `DEPLOYER_*` settings.
//! Exits 1 on any failure.

use nft_deployer::{cli, init_tracing};

#[tokio::main]
async fn main() {
    init_tracing();

    let result = cli::run().await;
    std::process::exit(cli::report(&result));
}
