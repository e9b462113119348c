use soroban_sdk::{symbol_short, Address, Env};

pub struct DeployerEvents;

impl DeployerEvents {
    /// Topics: `("deployed", deployer)`
    /// Data:   `(token, initial_supply)`
    pub fn deployed(env: &Env, deployer: &Address, token: &Address, initial_supply: i128) {
        env.events().publish(
            (symbol_short!("deployed"), deployer.clone()),
            (token.clone(), initial_supply),
        );
    }
}
