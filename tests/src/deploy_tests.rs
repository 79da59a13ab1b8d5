//! Integration tests for the deployer.
//!
//! Covers the single-transaction creation flow, constructor rejection and
//! configuration failures that must surface before any network traffic.

use anyhow::Result;
use near_workspaces::types::NearToken;
use near_workspaces::AccountId;
use nft_deployer::{
    deploy, deploy_from_config, Config, DeployOptions, DeployParams, Error, NetworkKind,
};
use serde_json::json;

use crate::utils::{blueprint, create_user, start_sandbox, wasm_path};

// =============================================================================
// Happy path
// =============================================================================

#[tokio::test]
async fn test_deploy_yields_valid_address() -> Result<()> {
    let worker = start_sandbox().await?;
    let root = worker.root_account()?;
    let deployer = create_user(&root, "deployer", NearToken::from_near(20)).await?;

    let deployment = deploy(
        &deployer,
        &blueprint().await?,
        &DeployParams::new("Torsten Sharks", "Torsten_Sharks"),
        &DeployOptions::default(),
    )
    .await?;
    println!("NFT contract deployed to {}", deployment.contract_id);

    assert!(!deployment.contract_id.as_str().is_empty());
    assert_eq!(deployment.contract_id.as_str(), "nft.deployer.test.near");
    assert_eq!(&deployment.owner_id, deployer.id());

    let metadata: serde_json::Value = deployer
        .view(&deployment.contract_id, "nft_metadata")
        .args_json(json!({}))
        .await?
        .json()?;
    assert_eq!(metadata["name"], "Torsten Sharks");
    assert_eq!(metadata["symbol"], "Torsten_Sharks");

    let owner: String = deployer
        .view(&deployment.contract_id, "get_owner")
        .args_json(json!({}))
        .await?
        .json()?;
    assert_eq!(owner, deployer.id().to_string());

    let paused: bool = deployer
        .view(&deployment.contract_id, "is_paused")
        .args_json(json!({}))
        .await?
        .json()?;
    assert!(paused, "a fresh collection starts paused");

    Ok(())
}

#[tokio::test]
async fn test_deploy_funds_contract_account() -> Result<()> {
    let worker = start_sandbox().await?;
    let root = worker.root_account()?;
    let deployer = create_user(&root, "deployer", NearToken::from_near(20)).await?;

    let deployment = deploy(
        &deployer,
        &blueprint().await?,
        &DeployParams::default(),
        &DeployOptions::default(),
    )
    .await?;

    let details = worker.view_account(&deployment.contract_id).await?;
    // Initial transfer plus this account's share of the `new` gas reward.
    assert!(details.balance >= NearToken::from_near(5));
    assert!(details.balance < NearToken::from_near(6));

    Ok(())
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_constructor_rejection_is_deploy_error() -> Result<()> {
    let worker = start_sandbox().await?;
    let root = worker.root_account()?;
    let deployer = create_user(&root, "deployer", NearToken::from_near(20)).await?;

    let result = deploy(
        &deployer,
        &blueprint().await?,
        &DeployParams::new("", "Torsten_Sharks"),
        &DeployOptions::default(),
    )
    .await;

    match result {
        Err(Error::Deploy(msg)) => assert!(
            msg.contains("Collection name cannot be empty"),
            "unexpected failure: {msg}"
        ),
        other => panic!("expected deploy error, got {other:?}"),
    }

    // The batch is atomic: a rejected constructor leaves no account behind.
    let contract_id: AccountId = "nft.deployer.test.near".parse()?;
    assert!(worker.view_account(&contract_id).await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_redeploy_to_same_label_fails_once() -> Result<()> {
    let worker = start_sandbox().await?;
    let root = worker.root_account()?;
    let deployer = create_user(&root, "deployer", NearToken::from_near(20)).await?;
    let blueprint = blueprint().await?;

    deploy(&deployer, &blueprint, &DeployParams::default(), &DeployOptions::default()).await?;
    let second =
        deploy(&deployer, &blueprint, &DeployParams::default(), &DeployOptions::default()).await;

    assert!(matches!(second, Err(Error::Deploy(_))), "got {second:?}");
    Ok(())
}

#[tokio::test]
async fn test_custom_label() -> Result<()> {
    let worker = start_sandbox().await?;
    let root = worker.root_account()?;
    let deployer = create_user(&root, "deployer", NearToken::from_near(20)).await?;

    let options = DeployOptions {
        contract_label: "sharks".into(),
        ..DeployOptions::default()
    };
    let deployment =
        deploy(&deployer, &blueprint().await?, &DeployParams::default(), &options).await?;

    assert_eq!(deployment.contract_id.as_str(), "sharks.deployer.test.near");
    Ok(())
}

#[tokio::test]
async fn test_deploy_from_config_missing_wasm() -> Result<()> {
    let config = Config {
        network: NetworkKind::Sandbox,
        wasm_path: "/nonexistent/nft_contract.wasm".into(),
        ..Config::default()
    };

    let result = deploy_from_config(&config).await;
    assert!(matches!(result, Err(Error::Wasm(_))), "got {result:?}");
    Ok(())
}

#[tokio::test]
async fn test_deploy_from_config_on_sandbox() -> Result<()> {
    let config = Config {
        network: NetworkKind::Sandbox,
        wasm_path: wasm_path(),
        ..Config::default()
    };

    let deployment = deploy_from_config(&config).await?;
    assert!(deployment.contract_id.as_str().starts_with("nft."));
    assert!(deployment
        .contract_id
        .as_str()
        .ends_with(deployment.owner_id.as_str()));
    Ok(())
}
