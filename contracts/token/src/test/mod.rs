#![cfg(test)]

// ---------------------------------------------------------------------------
// Token test suite
//
// Every test builds its own Env and registers a fresh FixedToken, so no
// state leaks between scenarios.
//
// initialize — construction, metadata, re-initialization guard
// transfer   — balance movement and every rejection path
// allowance  — approve / transfer_from / expiration
// events     — notification topics and payloads
// supply     — total supply is fixed and equals the sum of balances
// ---------------------------------------------------------------------------


use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::{FixedToken, FixedTokenClient};

pub(crate) const SUPPLY: i128 = 1_000_000_000_000_000_000_000_000; // 1M tokens at 18 decimals
pub(crate) const DECIMALS: u32 = 18;

/// Registers a token and initializes it with `initial_supply` credited to a
/// freshly generated holder. All auths are mocked.
pub(crate) fn setup<'a>(initial_supply: i128) -> (Env, FixedTokenClient<'a>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let token_id = env.register_contract(None, FixedToken);
    let client = FixedTokenClient::new(&env, &token_id);
    let holder = Address::generate(&env);

    client.initialize(
        &holder,
        &initial_supply,
        &DECIMALS,
        &String::from_str(&env, "Fixed Supply Token"),
        &String::from_str(&env, "FST"),
    );

    (env, client, holder)
}
