#![cfg_attr(not(test), no_std)]

mod allowance;
mod balance;
mod events;
mod metadata;
mod storage;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

use fixed_supply_token_interface::{is_zero_address, FixedSupplyToken, TokenError};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;

use events::TokenEvents;

#[contract]
pub struct FixedToken;

fn check_nonnegative_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }
    Ok(())
}

fn check_not_zero_address(env: &Env, address: &Address) -> Result<(), TokenError> {
    if is_zero_address(env, address) {
        return Err(TokenError::ZeroAddress);
    }
    Ok(())
}

fn require_initialized(env: &Env) {
    if !storage::is_initialized(env) {
        panic_with_error!(env, TokenError::NotInitialized);
    }
}

#[contractimpl]
impl FixedSupplyToken for FixedToken {
    fn initialize(
        env: Env,
        holder: Address,
        initial_supply: i128,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), TokenError> {
        if storage::is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        check_nonnegative_amount(initial_supply)?;
        check_not_zero_address(&env, &holder)?;

        metadata::write_metadata(
            &env,
            TokenMetadata {
                decimal: decimals,
                name,
                symbol,
            },
        );
        storage::write_total_supply(&env, initial_supply);
        balance::receive_balance(&env, &holder, initial_supply)?;
        storage::extend_instance_ttl(&env);

        TokenEvents::initial_supply(&env, &holder, initial_supply);
        log!(&env, "token initialized", holder, initial_supply);
        Ok(())
    }

    fn name(env: Env) -> String {
        require_initialized(&env);
        storage::extend_instance_ttl(&env);
        metadata::read_name(&env)
    }

    fn symbol(env: Env) -> String {
        require_initialized(&env);
        storage::extend_instance_ttl(&env);
        metadata::read_symbol(&env)
    }

    fn decimals(env: Env) -> u32 {
        require_initialized(&env);
        storage::extend_instance_ttl(&env);
        metadata::read_decimal(&env)
    }

    fn total_supply(env: Env) -> i128 {
        storage::read_total_supply(&env)
    }

    fn balance(env: Env, id: Address) -> i128 {
        balance::read_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        check_not_zero_address(&env, &to)?;
        storage::extend_instance_ttl(&env);

        balance::move_balance(&env, &from, &to, amount)?;
        TokenEvents::transfer(&env, &from, &to, amount);
        Ok(())
    }

    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        allowance::read_allowance(&env, &from, &spender).amount
    }

    fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        check_not_zero_address(&env, &spender)?;
        storage::extend_instance_ttl(&env);

        allowance::write_allowance(&env, &from, &spender, amount, expiration_ledger)?;
        TokenEvents::approve(&env, &from, &spender, amount, expiration_ledger);
        Ok(())
    }

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        check_not_zero_address(&env, &to)?;
        storage::extend_instance_ttl(&env);

        allowance::spend_allowance(&env, &from, &spender, amount)?;
        balance::move_balance(&env, &from, &to, amount)?;
        TokenEvents::transfer(&env, &from, &to, amount);
        Ok(())
    }
}
