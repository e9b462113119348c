use fixed_supply_token_interface::TokenError;
use soroban_sdk::{Address, Env};

use crate::storage::{DataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};

pub fn read_balance(env: &Env, addr: &Address) -> i128 {
    let key = DataKey::Balance(addr.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, addr: &Address, amount: i128) {
    let key = DataKey::Balance(addr.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, addr: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, addr);
    let updated = balance.checked_add(amount).ok_or(TokenError::Overflow)?;
    write_balance(env, addr, updated);
    Ok(())
}

pub fn spend_balance(env: &Env, addr: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, addr);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    write_balance(env, addr, balance - amount);
    Ok(())
}

/// Debits `from` then credits `to`. Both steps read the stored balance, so
/// a self-transfer nets out to the original amount.
pub fn move_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    spend_balance(env, from, amount)?;
    receive_balance(env, to, amount)
}
