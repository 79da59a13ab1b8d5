//! Mint scenario driven against a loaded fixture.

use std::fmt;

use near_workspaces::types::NearToken;
use tracing::info;

use crate::contract::MintRequest;
use crate::fixture::Fixture;
use crate::Error;

pub const OWNER_MINT: MintRequest = MintRequest::new(1, true, true, NearToken::from_millinear(27));
pub const ACCOUNT1_MINT: MintRequest =
    MintRequest::new(1, false, true, NearToken::from_millinear(29));
pub const ACCOUNT2_MINT: MintRequest =
    MintRequest::new(1, true, true, NearToken::from_millinear(27));

/// Token whose metadata URI is read back.
pub const PROBED_TOKEN_ID: u64 = 3;

/// State read back after the scenario's calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    pub total_supply: u64,
    pub max_supply: u64,
    /// Tokens held by `account1`.
    pub wallet: Vec<String>,
    pub token_uri: String,
    pub total_balance: NearToken,
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "supply: {}", self.total_supply)?;
        writeln!(f, "max supply: {}", self.max_supply)?;
        writeln!(f, "tokenId: {:?}", self.wallet)?;
        writeln!(f, "token Uri: {}", self.token_uri)?;
        write!(f, "balance: {}", self.total_balance)
    }
}

/// Unpauses, mints once from each fixture account, then reads state back.
/// The first failing call aborts the scenario.
pub async fn run_mint_scenario(fixture: &Fixture) -> Result<ScenarioReport, Error> {
    let nft = &fixture.nft;
    let owner = &fixture.owner;

    nft.pause(owner, false).await?;

    for (account, request) in [
        (&fixture.owner, &OWNER_MINT),
        (&fixture.account1, &ACCOUNT1_MINT),
        (&fixture.account2, &ACCOUNT2_MINT),
    ] {
        let token_ids = nft.mint(account, request).await?;
        info!(account = %account.id(), ?token_ids, presale = request.presale, "Mint confirmed");
    }

    let report = ScenarioReport {
        total_supply: nft.total_supply(owner).await?,
        max_supply: nft.max_supply(owner).await?,
        wallet: nft.wallet_of_owner(owner, fixture.account1.id()).await?,
        token_uri: nft.token_uri(owner, PROBED_TOKEN_ID).await?,
        total_balance: nft.total_balance(owner).await?,
    };

    info!(supply = report.total_supply, "supply");
    info!(max_supply = report.max_supply, "max supply");
    info!(token_ids = ?report.wallet, "tokenId");
    info!(uri = %report.token_uri, "token Uri");
    info!(balance = %report.total_balance, "balance");

    Ok(report)
}
