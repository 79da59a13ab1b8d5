//! Integration tests for the fixture and the mint scenario.

use anyhow::Result;
use near_workspaces::types::NearToken;
use nft_deployer::scenario::{ACCOUNT1_MINT, PROBED_TOKEN_ID};
use nft_deployer::{run_mint_scenario, Error};

use crate::utils::load_fixture;

#[tokio::test]
async fn test_fixture_starts_paused_and_empty() -> Result<()> {
    let fixture = load_fixture().await?;
    let nft = &fixture.nft;

    assert_eq!(fixture.contract_id().as_str(), "nft.owner.test.near");
    assert_eq!(fixture.account1.id().as_str(), "account1.test.near");
    assert_eq!(fixture.account2.id().as_str(), "account2.test.near");
    assert!(nft.is_paused(&fixture.owner).await?);
    assert_eq!(nft.total_supply(&fixture.owner).await?, 0);
    assert!(nft
        .wallet_of_owner(&fixture.owner, fixture.account1.id())
        .await?
        .is_empty());

    Ok(())
}

#[tokio::test]
async fn test_mint_scenario_report() -> Result<()> {
    let fixture = load_fixture().await?;

    let report = run_mint_scenario(&fixture).await?;
    println!("{report}");

    assert_eq!(report.total_supply, 3);
    assert_eq!(report.max_supply, 10_000);
    assert_eq!(report.wallet, vec!["2".to_string()]);
    assert_eq!(report.token_uri, format!("ipfs://torsten-sharks/{PROBED_TOKEN_ID}.json"));
    assert!(report.token_uri.contains("://"));
    assert_eq!(report.total_balance, NearToken::from_millinear(83));

    Ok(())
}

#[tokio::test]
async fn test_fixture_reload_reproduces_state() -> Result<()> {
    let first = load_fixture().await?;
    let first_report = run_mint_scenario(&first).await?;
    let first_id = first.contract_id().clone();
    drop(first);

    let second = load_fixture().await?;
    assert_eq!(second.contract_id(), &first_id);
    assert_eq!(second.nft.total_supply(&second.owner).await?, 0);

    let second_report = run_mint_scenario(&second).await?;
    assert_eq!(first_report, second_report);

    Ok(())
}

#[tokio::test]
async fn test_mint_while_paused_aborts() -> Result<()> {
    let fixture = load_fixture().await?;

    let result = fixture.nft.mint(&fixture.account1, &ACCOUNT1_MINT).await;
    match result {
        Err(Error::Call(msg)) => {
            assert!(msg.starts_with("mint:"));
            assert!(msg.contains("Minting is paused"), "unexpected failure: {msg}");
        }
        other => panic!("expected call error, got {other:?}"),
    }
    assert_eq!(fixture.nft.total_supply(&fixture.owner).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_pause_by_non_owner_fails() -> Result<()> {
    let fixture = load_fixture().await?;

    let result = fixture.nft.pause(&fixture.account2, false).await;
    assert!(matches!(result, Err(Error::Call(_))), "got {result:?}");
    assert!(fixture.nft.is_paused(&fixture.owner).await?);

    Ok(())
}
