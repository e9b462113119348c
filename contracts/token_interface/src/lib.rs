#![no_std]

mod errors;

pub use errors::TokenError;

use soroban_sdk::{contractclient, Address, Env, String};

/// Strkey of the ed25519 account whose public key is all zero bytes.
/// Nobody holds its secret, so it is treated as the burn/null address
/// and rejected as a recipient or spender.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    *address == zero_address(env)
}

/// Fixed-supply fungible token interface.
///
/// The SEP-41 read/transfer/allowance surface without `burn`/`burn_from`:
/// the whole supply is created once by `initialize` and never changes.
#[contractclient(name = "TokenInterfaceClient")]
pub trait FixedSupplyToken {
    /// Stores metadata and credits `initial_supply` to `holder`.
    /// Can only succeed once per contract instance.
    fn initialize(
        env: Env,
        holder: Address,
        initial_supply: i128,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), TokenError>;

    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn decimals(env: Env) -> u32;
    fn total_supply(env: Env) -> i128;

    fn balance(env: Env, id: Address) -> i128;

    /// Moves `amount` from `from` to `to`. Requires `from` auth.
    fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError>;

    fn allowance(env: Env, from: Address, spender: Address) -> i128;

    /// Sets (overwrites) the allowance of `spender` over `from`'s balance,
    /// valid up to and including `expiration_ledger`.
    fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError>;

    /// Moves `amount` from `from` to `to` on behalf of `spender`,
    /// consuming allowance. Requires `spender` auth.
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError>;
}
