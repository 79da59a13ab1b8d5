//! Typed client for a deployed NFT contract.
//!
//! Every call waits for its final outcome and fails on any receipt failure.

use near_workspaces::types::NearToken;
use near_workspaces::{Account, AccountId};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use crate::Error;

/// Arguments of a single `mint` call plus the attached payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintRequest {
    pub quantity: u32,
    pub presale: bool,
    pub refund_excess: bool,
    pub payment: NearToken,
}

impl MintRequest {
    pub const fn new(
        quantity: u32,
        presale: bool,
        refund_excess: bool,
        payment: NearToken,
    ) -> Self {
        Self {
            quantity,
            presale,
            refund_excess,
            payment,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NftContract {
    id: AccountId,
}

impl NftContract {
    pub fn new(id: AccountId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub async fn pause(&self, caller: &Account, state: bool) -> Result<(), Error> {
        caller
            .call(&self.id, "pause")
            .args_json(json!({ "state": state }))
            .transact()
            .await
            .map_err(Error::network)?
            .into_result()
            .map_err(|e| Error::call("pause", e))?;
        Ok(())
    }

    /// Returns the minted token ids.
    pub async fn mint(
        &self,
        caller: &Account,
        request: &MintRequest,
    ) -> Result<Vec<String>, Error> {
        let outcome = caller
            .call(&self.id, "mint")
            .args_json(json!({
                "quantity": request.quantity,
                "presale": request.presale,
                "refund_excess": request.refund_excess,
            }))
            .deposit(request.payment)
            .max_gas()
            .transact()
            .await
            .map_err(Error::network)?
            .into_result()
            .map_err(|e| Error::call("mint", e))?;
        let token_ids: Vec<String> = outcome.json().map_err(|e| Error::call("mint", e))?;
        debug!(caller = %caller.id(), ?token_ids, "Minted");
        Ok(token_ids)
    }

    pub async fn total_supply(&self, viewer: &Account) -> Result<u64, Error> {
        let raw: String = self.view(viewer, "total_supply", json!({})).await?;
        parse_number("total_supply", &raw)
    }

    pub async fn max_supply(&self, viewer: &Account) -> Result<u64, Error> {
        let raw: String = self.view(viewer, "max_supply", json!({})).await?;
        parse_number("max_supply", &raw)
    }

    pub async fn wallet_of_owner(
        &self,
        viewer: &Account,
        owner: &AccountId,
    ) -> Result<Vec<String>, Error> {
        self.view(viewer, "wallet_of_owner", json!({ "owner": owner })).await
    }

    pub async fn token_uri(&self, viewer: &Account, token_id: u64) -> Result<String, Error> {
        self.view(viewer, "token_uri", json!({ "token_id": token_id })).await
    }

    pub async fn total_balance(&self, viewer: &Account) -> Result<NearToken, Error> {
        let raw: String = self.view(viewer, "total_balance", json!({})).await?;
        parse_number::<u128>("total_balance", &raw).map(NearToken::from_yoctonear)
    }

    pub async fn is_paused(&self, viewer: &Account) -> Result<bool, Error> {
        self.view(viewer, "is_paused", json!({})).await
    }

    async fn view<T: DeserializeOwned>(
        &self,
        viewer: &Account,
        method: &str,
        args: Value,
    ) -> Result<T, Error> {
        viewer
            .view(&self.id, method)
            .args_json(args)
            .await
            .map_err(|e| Error::call(method, e))?
            .json()
            .map_err(|e| Error::call(method, e))
    }
}

/// Contract views return u64/u128 as decimal strings.
fn parse_number<T: std::str::FromStr>(method: &str, raw: &str) -> Result<T, Error> {
    raw.parse()
        .map_err(|_| Error::Call(format!("{method}: expected a decimal string, got {raw:?}")))
}
