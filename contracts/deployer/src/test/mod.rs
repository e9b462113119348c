#![cfg(test)]


use fixed_supply_token::{FixedToken, FixedTokenClient};
use soroban_sdk::{
    symbol_short,
    testutils::{storage::Persistent as _, Address as _, Events as _},
    token::TokenClient,
    Address, BytesN, Env, IntoVal, String, Val, Vec,
};

use crate::{
    errors::DeployerError,
    events::DeployerEvents,
    initialize_token, record_deployment,
    storage::{DataKey, DEPLOYMENT_BUMP_AMOUNT},
    TokenDeployer, TokenDeployerClient, INITIAL_SUPPLY, TOKEN_DECIMALS,
};

fn setup_env<'a>() -> (Env, TokenDeployerClient<'a>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let deployer_id = env.register_contract(None, TokenDeployer);
    let client = TokenDeployerClient::new(&env, &deployer_id);
    let token_id = env.register_contract(None, FixedToken);
    let account = Address::generate(&env);

    (env, client, token_id, account)
}

// ---------- Configuration ----------

#[test]
fn initial_supply_is_one_million_whole_tokens() {
    assert_eq!(TOKEN_DECIMALS, 18);
    assert_eq!(INITIAL_SUPPLY, 1_000_000_000_000_000_000_000_000);
}

// ---------- Token initialization ----------

#[test]
fn initialize_token_credits_supply_to_deployer() {
    let (env, client, token_id, account) = setup_env();

    let result = env.as_contract(&client.address, || initialize_token(&env, &token_id, &account));
    assert_eq!(result, Ok(()));

    let token = FixedTokenClient::new(&env, &token_id);
    assert_eq!(token.balance(&account), INITIAL_SUPPLY);
    assert_eq!(token.total_supply(), INITIAL_SUPPLY);
    assert_eq!(token.name(), String::from_str(&env, "Fixed Supply Token"));
    assert_eq!(token.symbol(), String::from_str(&env, "FST"));
    assert_eq!(token.decimals(), TOKEN_DECIMALS);
}

#[test]
fn deployed_token_speaks_standard_token_interface() {
    let (env, client, token_id, account) = setup_env();
    let recipient = Address::generate(&env);

    env.as_contract(&client.address, || initialize_token(&env, &token_id, &account))
        .unwrap();

    let token = TokenClient::new(&env, &token_id);
    assert_eq!(token.decimals(), TOKEN_DECIMALS);
    assert_eq!(token.balance(&account), INITIAL_SUPPLY);

    token.transfer(&account, &recipient, &1_000_i128);
    assert_eq!(token.balance(&account), INITIAL_SUPPLY - 1_000);
    assert_eq!(token.balance(&recipient), 1_000);
}

#[test]
fn initialize_token_twice_fails() {
    let (env, client, token_id, account) = setup_env();
    let other = Address::generate(&env);

    env.as_contract(&client.address, || initialize_token(&env, &token_id, &account))
        .unwrap();
    let second = env.as_contract(&client.address, || initialize_token(&env, &token_id, &other));
    assert_eq!(second, Err(DeployerError::TokenInitFailed));

    let token = FixedTokenClient::new(&env, &token_id);
    assert_eq!(token.balance(&account), INITIAL_SUPPLY);
    assert_eq!(token.balance(&other), 0);
}

#[test]
fn initialize_token_without_contract_fails() {
    let (env, client, _, account) = setup_env();
    let missing = Address::generate(&env);

    let result = env.as_contract(&client.address, || initialize_token(&env, &missing, &account));
    assert_eq!(result, Err(DeployerError::TokenInitFailed));
}

// ---------- Deployment records ----------

#[test]
fn no_deployment_recorded_initially() {
    let (_env, client, _, account) = setup_env();

    assert_eq!(client.deployment(&account), None);
    assert_eq!(client.deployment_count(), 0);
}

#[test]
fn record_deployment_tracks_latest_token() {
    let (env, client, token_id, account) = setup_env();
    let second_token = Address::generate(&env);

    env.as_contract(&client.address, || record_deployment(&env, &account, &token_id));
    assert_eq!(client.deployment(&account), Some(token_id.clone()));
    assert_eq!(client.deployment_count(), 1);

    env.as_contract(&client.address, || record_deployment(&env, &account, &second_token));
    assert_eq!(client.deployment(&account), Some(second_token));
    assert_eq!(client.deployment_count(), 2);
}

#[test]
fn deployment_record_uses_its_own_ttl() {
    let (env, client, token_id, account) = setup_env();

    let ttl = env.as_contract(&client.address, || {
        record_deployment(&env, &account, &token_id);
        env.storage()
            .persistent()
            .get_ttl(&DataKey::Deployment(account.clone()))
    });
    assert_eq!(ttl, DEPLOYMENT_BUMP_AMOUNT);
}

// ---------- Deploy entry point ----------

#[test]
fn deploy_unknown_wasm_fails() {
    let (env, client, _, account) = setup_env();
    let wasm_hash = BytesN::from_array(&env, &[7u8; 32]);
    let salt = BytesN::from_array(&env, &[1u8; 32]);

    let result = client.try_deploy(&account, &wasm_hash, &salt);
    assert!(result.is_err(), "deploying a missing wasm must revert");

    assert_eq!(client.deployment(&account), None);
    assert_eq!(client.deployment_count(), 0);
}

#[test]
fn deploy_requires_deployer_auth() {
    let env = Env::default();
    let client = TokenDeployerClient::new(&env, &env.register_contract(None, TokenDeployer));
    let account = Address::generate(&env);
    let wasm_hash = BytesN::from_array(&env, &[7u8; 32]);
    let salt = BytesN::from_array(&env, &[1u8; 32]);

    let result = client.try_deploy(&account, &wasm_hash, &salt);
    assert!(result.is_err(), "unauthorized deploy must revert");
    assert_eq!(client.deployment_count(), 0);
}

// ---------- Events ----------

#[test]
fn deployed_event_reports_token_address() {
    let (env, client, token_id, account) = setup_env();

    env.as_contract(&client.address, || {
        DeployerEvents::deployed(&env, &account, &token_id, INITIAL_SUPPLY);
    });

    let all = env.events().all();
    assert_eq!(all.len(), 1, "expected exactly one deployed event");

    let (contract, topics, data) = all.get(0).unwrap();
    let expected: Vec<Val> = (symbol_short!("deployed"), account.clone()).into_val(&env);
    let (token, supply): (Address, i128) = data.into_val(&env);

    assert_eq!(contract, client.address);
    assert_eq!(topics, expected);
    assert_eq!(token, token_id);
    assert_eq!(supply, INITIAL_SUPPLY);
}
