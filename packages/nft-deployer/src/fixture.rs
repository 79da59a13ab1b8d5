//! Resettable sandbox fixture.
//!
//! `Fixture::load` always builds the same world: a fresh sandbox, three
//! labeled accounts under the sandbox root, and the blueprint deployed by
//! `owner`. Ids and balances are fixed, so every load starts from identical
//! state and scenarios never observe each other's side effects.

use std::time::Duration;

use near_workspaces::network::Sandbox;
use near_workspaces::types::NearToken;
use near_workspaces::{Account, AccountId, Worker};
use tracing::{info, warn};

use crate::contract::NftContract;
use crate::deploy::{deploy, Blueprint, DeployOptions, DeployParams, Deployment};
use crate::Error;

pub const OWNER_LABEL: &str = "owner";
pub const ACCOUNT1_LABEL: &str = "account1";
pub const ACCOUNT2_LABEL: &str = "account2";

const OWNER_BALANCE: NearToken = NearToken::from_near(50);
const USER_BALANCE: NearToken = NearToken::from_near(10);

const SANDBOX_START_ATTEMPTS: u32 = 6;
const SANDBOX_RETRY_DELAY: Duration = Duration::from_secs(5);

pub struct Fixture {
    pub worker: Worker<Sandbox>,
    pub owner: Account,
    pub account1: Account,
    pub account2: Account,
    pub deployment: Deployment,
    pub nft: NftContract,
}

impl Fixture {
    pub async fn load(blueprint: &Blueprint, params: &DeployParams) -> Result<Self, Error> {
        let worker = start_sandbox().await?;
        let root = worker.root_account().map_err(Error::network)?;

        let owner = create_labeled_account(&root, OWNER_LABEL, OWNER_BALANCE).await?;
        let account1 = create_labeled_account(&root, ACCOUNT1_LABEL, USER_BALANCE).await?;
        let account2 = create_labeled_account(&root, ACCOUNT2_LABEL, USER_BALANCE).await?;

        let deployment = deploy(&owner, blueprint, params, &DeployOptions::default()).await?;
        let nft = NftContract::new(deployment.contract_id.clone());
        info!(contract = %nft.id(), "Fixture ready");

        Ok(Self {
            worker,
            owner,
            account1,
            account2,
            deployment,
            nft,
        })
    }

    pub fn contract_id(&self) -> &AccountId {
        &self.deployment.contract_id
    }
}

/// Starts a local sandbox node. Parallel test binaries race for ports on
/// startup, so a failed start is retried a few times.
pub async fn start_sandbox() -> Result<Worker<Sandbox>, Error> {
    let mut attempt = 1;
    loop {
        match near_workspaces::sandbox().await {
            Ok(worker) => return Ok(worker),
            Err(e) if attempt < SANDBOX_START_ATTEMPTS => {
                warn!(attempt, error = %e, "Sandbox start failed, retrying");
                attempt += 1;
                tokio::time::sleep(SANDBOX_RETRY_DELAY).await;
            }
            Err(e) => return Err(Error::network(e)),
        }
    }
}

async fn create_labeled_account(
    root: &Account,
    label: &str,
    balance: NearToken,
) -> Result<Account, Error> {
    root.create_subaccount(label)
        .initial_balance(balance)
        .transact()
        .await
        .map_err(Error::network)?
        .into_result()
        .map_err(|e| Error::call("create_account", e))
}
