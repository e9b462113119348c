use soroban_sdk::{contracttype, Address, Env};

const DAY_IN_LEDGERS: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const DEPLOYMENT_LIFETIME_THRESHOLD: u32 = 15 * DAY_IN_LEDGERS;
pub(crate) const DEPLOYMENT_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Deployment(Address),
    DeploymentCount,
}

pub fn get_deployment(env: &Env, deployer: &Address) -> Option<Address> {
    let key = DataKey::Deployment(deployer.clone());
    let token = env.storage().persistent().get(&key);
    if token.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, DEPLOYMENT_LIFETIME_THRESHOLD, DEPLOYMENT_BUMP_AMOUNT);
    }
    token
}

pub fn set_deployment(env: &Env, deployer: &Address, token: &Address) {
    let key = DataKey::Deployment(deployer.clone());
    env.storage().persistent().set(&key, token);
    env.storage()
        .persistent()
        .extend_ttl(&key, DEPLOYMENT_LIFETIME_THRESHOLD, DEPLOYMENT_BUMP_AMOUNT);
}

pub fn get_deployment_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::DeploymentCount)
        .unwrap_or(0)
}

pub fn set_deployment_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::DeploymentCount, &count);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
