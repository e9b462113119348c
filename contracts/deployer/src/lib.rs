#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod config;
mod errors;
mod events;
mod storage;

#[cfg(test)]
mod test;

use fixed_supply_token_interface::TokenInterfaceClient;
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, InvokeError, String};

use errors::DeployerError;
use events::DeployerEvents;

pub use config::{INITIAL_SUPPLY, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};

#[contract]
pub struct TokenDeployer;

/// Initializes a freshly deployed token with the fixed configuration,
/// crediting the whole supply to `holder`.
fn initialize_token(env: &Env, token: &Address, holder: &Address) -> Result<(), DeployerError> {
    let client = TokenInterfaceClient::new(env, token);
    match client.try_initialize(
        holder,
        &INITIAL_SUPPLY,
        &TOKEN_DECIMALS,
        &String::from_str(env, TOKEN_NAME),
        &String::from_str(env, TOKEN_SYMBOL),
    ) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(_)) => {
            log!(env, "token initialize returned an unexpected value", token.clone());
            Err(DeployerError::TokenInitFailed)
        }
        Err(Ok(err)) => {
            log!(env, "token rejected initialize", token.clone(), err as u32);
            Err(DeployerError::TokenInitFailed)
        }
        Err(Err(InvokeError::Contract(code))) => {
            log!(env, "token initialize failed with contract code", token.clone(), code);
            Err(DeployerError::TokenInitFailed)
        }
        Err(Err(_)) => {
            log!(env, "token initialize aborted", token.clone());
            Err(DeployerError::TokenInitFailed)
        }
    }
}

fn record_deployment(env: &Env, deployer: &Address, token: &Address) {
    storage::set_deployment(env, deployer, token);
    let count = storage::get_deployment_count(env);
    storage::set_deployment_count(env, count.saturating_add(1));
    storage::extend_instance_ttl(env);
}

#[contractimpl]
impl TokenDeployer {
    /// Deploys the token wasm under `salt`, initializes it with the fixed
    /// supply credited to `deployer`, and returns the token address.
    pub fn deploy(
        env: Env,
        deployer: Address,
        wasm_hash: BytesN<32>,
        salt: BytesN<32>,
    ) -> Result<Address, DeployerError> {
        deployer.require_auth();

        // 1. Deploy token
        let token = env
            .deployer()
            .with_current_contract(salt)
            .deploy(wasm_hash);

        // 2. Initialize with the fixed supply
        initialize_token(&env, &token, &deployer)?;

        // 3. Store deployment
        record_deployment(&env, &deployer, &token);

        // 4. Emit event
        DeployerEvents::deployed(&env, &deployer, &token, INITIAL_SUPPLY);
        log!(&env, "token deployed", deployer, token);

        Ok(token)
    }

    /// Last token deployed for `deployer`, if any.
    pub fn deployment(env: Env, deployer: Address) -> Option<Address> {
        storage::get_deployment(&env, &deployer)
    }

    pub fn deployment_count(env: Env) -> u32 {
        storage::get_deployment_count(&env)
    }
}
