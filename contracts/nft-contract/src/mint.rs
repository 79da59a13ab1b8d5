use crate::*;
use near_contract_standards::non_fungible_token::events::NftMint;

#[near]
impl Contract {
    /// Mints `quantity` tokens to the caller.
    ///
    /// `presale` selects the presale unit price and requires the presale
    /// window to be open. The attached deposit must cover the full cost;
    /// anything above it is refunded when `refund_excess` is set and kept as
    /// proceeds otherwise. Storage is paid from the contract balance, which
    /// also caps what `withdraw` can send.
    #[payable]
    pub fn mint(&mut self, quantity: u32, presale: bool, refund_excess: bool) -> Vec<TokenId> {
        require!(!self.paused, "Minting is paused");
        require!(
            (1..=MAX_MINT_PER_TX).contains(&quantity),
            format!("Quantity must be between 1 and {}", MAX_MINT_PER_TX)
        );
        require!(
            self.minted + quantity as u64 <= MAX_SUPPLY,
            "Max supply exceeded"
        );
        if presale {
            require!(self.presale_open, "Presale is closed");
        }

        let cost = mint_cost(quantity, presale);
        let attached = env::attached_deposit();
        require!(attached >= cost, format!("Insufficient payment: {} required", cost));

        let minter = env::predecessor_account_id();
        let token_ids: Vec<TokenId> = (1..=quantity as u64)
            .map(|offset| (self.minted + offset).to_string())
            .collect();
        for token_id in &token_ids {
            self.tokens
                .internal_mint_with_refund(token_id.clone(), minter.clone(), None, None);
        }
        self.minted += quantity as u64;

        let excess = attached.saturating_sub(cost);
        if refund_excess && !excess.is_zero() {
            self.proceeds = self.proceeds.saturating_add(cost);
            let _ = Promise::new(minter.clone()).transfer(excess);
        } else {
            self.proceeds = self.proceeds.saturating_add(attached);
        }

        let ids: Vec<&str> = token_ids.iter().map(String::as_str).collect();
        NftMint {
            owner_id: &minter,
            token_ids: &ids,
            memo: Some(if presale { "presale" } else { "public" }),
        }
        .emit();

        token_ids
    }
}

pub(crate) fn mint_cost(quantity: u32, presale: bool) -> NearToken {
    let unit = if presale { PRESALE_PRICE } else { PUBLIC_PRICE };
    unit.saturating_mul(quantity as u128)
}
