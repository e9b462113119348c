use soroban_sdk::{symbol_short, Address, Env};
use soroban_token_sdk::TokenUtils;

pub struct TokenEvents;

impl TokenEvents {
    /// Emits the one-off `mint` event for the initial supply.
    ///
    /// Topics: `("mint", holder)`
    /// Data:   `amount`
    ///
    /// There is no minting admin, so the SEP-41 `("mint", admin, to)` shape
    /// from `soroban-token-sdk` does not apply.
    pub fn initial_supply(env: &Env, holder: &Address, amount: i128) {
        env.events()
            .publish((symbol_short!("mint"), holder.clone()), amount);
    }

    /// Topics: `("transfer", from, to)`
    /// Data:   `amount`
    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        TokenUtils::new(env)
            .events()
            .transfer(from.clone(), to.clone(), amount);
    }

    /// Topics: `("approve", from, spender)`
    /// Data:   `(amount, expiration_ledger)`
    pub fn approve(
        env: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
        expiration_ledger: u32,
    ) {
        TokenUtils::new(env)
            .events()
            .approve(from.clone(), spender.clone(), amount, expiration_ledger);
    }
}
