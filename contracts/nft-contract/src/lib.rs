//! Torsten Sharks NFT blueprint. NEP-171/177/181 compliant.
//!
//! Tokens are minted with sequential numeric ids starting at 1. Minting is
//! gated by a pause flag and priced per unit; proceeds stay on the contract
//! until the owner withdraws them.

use near_contract_standards::non_fungible_token::core::{
    NonFungibleTokenCore, NonFungibleTokenResolver,
};
use near_contract_standards::non_fungible_token::enumeration::NonFungibleTokenEnumeration;
use near_contract_standards::non_fungible_token::metadata::{
    NFT_METADATA_SPEC, NFTContractMetadata, NonFungibleTokenMetadataProvider,
};
use near_contract_standards::non_fungible_token::{NonFungibleToken, Token, TokenId};
use near_sdk::json_types::U128;
use near_sdk::{
    AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise, PromiseOrValue, env, near,
    require,
};
use std::collections::HashMap;

mod mint;

const VERSION: &str = "1.0.0";

pub const MAX_SUPPLY: u64 = 10_000;
pub const MAX_MINT_PER_TX: u32 = 10;
pub const PRESALE_PRICE: NearToken = NearToken::from_millinear(27);
pub const PUBLIC_PRICE: NearToken = NearToken::from_millinear(29);
pub const DEFAULT_BASE_URI: &str = "ipfs://torsten-sharks/";
pub const BASE_URI_EXTENSION: &str = ".json";

#[derive(BorshStorageKey)]
#[near]
enum StorageKey {
    NonFungibleToken,
    Enumeration,
}

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    tokens: NonFungibleToken,
    owner_id: AccountId,
    name: String,
    symbol: String,
    base_uri: String,
    paused: bool,
    presale_open: bool,
    minted: u64,
    proceeds: NearToken,
}

#[near]
impl Contract {
    /// Owner is the predecessor. The collection starts paused.
    #[init]
    pub fn new(name: String, symbol: String) -> Self {
        require!(!name.is_empty(), "Collection name cannot be empty");
        require!(!symbol.is_empty(), "Collection symbol cannot be empty");

        let owner_id = env::predecessor_account_id();
        env::log_str(&format!("{} ({}) created by {}", name, symbol, owner_id));

        Self {
            tokens: NonFungibleToken::new(
                StorageKey::NonFungibleToken,
                owner_id.clone(),
                None::<StorageKey>,
                Some(StorageKey::Enumeration),
                None::<StorageKey>,
            ),
            owner_id,
            name,
            symbol,
            base_uri: DEFAULT_BASE_URI.to_string(),
            paused: true,
            presale_open: true,
            minted: 0,
            proceeds: NearToken::from_yoctonear(0),
        }
    }

    /// Owner only.
    pub fn pause(&mut self, state: bool) {
        self.assert_owner();
        self.paused = state;
        env::log_str(if state { "Minting paused" } else { "Minting unpaused" });
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Opens or closes the presale window. Owner only.
    pub fn set_presale(&mut self, open: bool) {
        self.assert_owner();
        self.presale_open = open;
        env::log_str(if open { "Presale opened" } else { "Presale closed" });
    }

    pub fn is_presale_open(&self) -> bool {
        self.presale_open
    }

    /// Owner only. Applies to every token, minted or not.
    pub fn set_base_uri(&mut self, base_uri: String) {
        self.assert_owner();
        require!(!base_uri.is_empty(), "Base URI cannot be empty");
        self.base_uri = base_uri;
        env::log_str("Base URI updated");
    }

    pub fn total_supply(&self) -> U128 {
        U128(self.minted as u128)
    }

    pub fn max_supply(&self) -> U128 {
        U128(MAX_SUPPLY as u128)
    }

    /// Token ids held by `owner`, in ascending numeric order.
    pub fn wallet_of_owner(&self, owner: AccountId) -> Vec<TokenId> {
        let Some(tokens_per_owner) = self.tokens.tokens_per_owner.as_ref() else {
            return Vec::new();
        };
        let mut ids: Vec<u64> = tokens_per_owner
            .get(&owner)
            .map(|set| set.iter().filter_map(|id| id.parse().ok()).collect())
            .unwrap_or_default();
        ids.sort_unstable();
        ids.into_iter().map(|id| id.to_string()).collect()
    }

    pub fn token_uri(&self, token_id: u64) -> String {
        let id = token_id.to_string();
        require!(
            self.tokens.owner_by_id.get(&id).is_some(),
            "URI query for nonexistent token"
        );
        format!("{}{}{}", self.base_uri, id, BASE_URI_EXTENSION)
    }

    /// Mint proceeds held by the contract, in yoctoNEAR.
    pub fn total_balance(&self) -> U128 {
        U128(self.proceeds.as_yoctonear())
    }

    /// Sends proceeds to the owner. Owner only, 1 yoctoNEAR.
    ///
    /// Capped at the balance not locked for storage; whatever is left stays
    /// in `total_balance` for a later withdrawal.
    #[payable]
    pub fn withdraw(&mut self) -> Promise {
        near_sdk::assert_one_yocto();
        self.assert_owner();
        let amount = self.proceeds.min(withdrawable_balance());
        require!(!amount.is_zero(), "Nothing to withdraw");
        self.proceeds = self.proceeds.saturating_sub(amount);
        env::log_str(&format!("Withdrew {} to {}", amount, self.owner_id));
        Promise::new(self.owner_id.clone()).transfer(amount)
    }

    pub fn get_owner(&self) -> AccountId {
        self.owner_id.clone()
    }

    pub fn version(&self) -> String {
        VERSION.to_string()
    }

    fn assert_owner(&self) {
        require!(
            env::predecessor_account_id() == self.owner_id,
            "Only owner can call this method"
        );
    }
}

/// Account balance minus the stake backing current storage.
fn withdrawable_balance() -> NearToken {
    let locked = env::storage_byte_cost().saturating_mul(env::storage_usage() as u128);
    env::account_balance().saturating_sub(locked)
}

// --- NEP-171: Non-Fungible Token Core ---
#[near]
impl NonFungibleTokenCore for Contract {
    #[payable]
    fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: TokenId,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) {
        self.tokens.nft_transfer(receiver_id, token_id, approval_id, memo)
    }

    #[payable]
    fn nft_transfer_call(
        &mut self,
        receiver_id: AccountId,
        token_id: TokenId,
        approval_id: Option<u64>,
        memo: Option<String>,
        msg: String,
    ) -> PromiseOrValue<bool> {
        self.tokens.nft_transfer_call(receiver_id, token_id, approval_id, memo, msg)
    }

    fn nft_token(&self, token_id: TokenId) -> Option<Token> {
        self.tokens.nft_token(token_id)
    }
}

#[near]
impl NonFungibleTokenResolver for Contract {
    #[private]
    fn nft_resolve_transfer(
        &mut self,
        previous_owner_id: AccountId,
        receiver_id: AccountId,
        token_id: TokenId,
        approved_account_ids: Option<HashMap<AccountId, u64>>,
    ) -> bool {
        self.tokens.nft_resolve_transfer(
            previous_owner_id,
            receiver_id,
            token_id,
            approved_account_ids,
        )
    }
}

// --- NEP-181: Enumeration ---
#[near]
impl NonFungibleTokenEnumeration for Contract {
    fn nft_total_supply(&self) -> U128 {
        self.tokens.nft_total_supply()
    }

    fn nft_tokens(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<Token> {
        self.tokens.nft_tokens(from_index, limit)
    }

    fn nft_supply_for_owner(&self, account_id: AccountId) -> U128 {
        self.tokens.nft_supply_for_owner(account_id)
    }

    fn nft_tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<Token> {
        self.tokens.nft_tokens_for_owner(account_id, from_index, limit)
    }
}

// --- NEP-177: Metadata ---
#[near]
impl NonFungibleTokenMetadataProvider for Contract {
    fn nft_metadata(&self) -> NFTContractMetadata {
        NFTContractMetadata {
            spec: NFT_METADATA_SPEC.to_string(),
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            icon: None,
            base_uri: Some(self.base_uri.clone()),
            reference: None,
            reference_hash: None,
        }
    }
}
