use soroban_sdk::{contracttype, log, token, Address, Env, Symbol};

use crate::access::{self, Role};
use crate::error::ConsentError;
use crate::events;
use crate::storage::DataKey;

/// Admin-controlled reward parameters. Rewards are paid out of the ledger's
/// own balance of `token`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardConfig {
    pub token: Address,
    pub max_reward: i128,
}

pub fn set_reward_config(
    env: &Env,
    admin: &Address,
    token: Address,
    max_reward: i128,
) -> Result<(), ConsentError> {
    access::authorize(env, admin, Role::Admin)?;
    if max_reward <= 0 {
        return Err(ConsentError::InvalidAmount);
    }

    let config = RewardConfig { token, max_reward };
    env.storage().instance().set(&DataKey::RewardConfig, &config);
    Ok(())
}

pub fn reward_config(env: &Env) -> Option<RewardConfig> {
    env.storage().instance().get(&DataKey::RewardConfig)
}

pub fn total_distributed(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::RewardsDistributed)
        .unwrap_or(0i128)
}

pub fn distribute_reward(
    env: &Env,
    operator: &Address,
    recipient: Address,
    amount: i128,
    reason: Symbol,
) -> Result<(), ConsentError> {
    access::authorize(env, operator, Role::Operator)?;

    let config = reward_config(env).ok_or(ConsentError::RewardsNotConfigured)?;
    if amount <= 0 || amount > config.max_reward {
        return Err(ConsentError::InvalidAmount);
    }

    // Every write happens before the token call.
    let total = total_distributed(env)
        .checked_add(amount)
        .ok_or(ConsentError::InvalidAmount)?;
    env.storage()
        .instance()
        .set(&DataKey::RewardsDistributed, &total);
    events::emit_reward_distributed(env, recipient.clone(), amount, reason);
    log!(env, "reward of {} to {}", amount, recipient.clone());

    token::Client::new(env, &config.token).transfer(
        &env.current_contract_address(),
        &recipient,
        &amount,
    );
    Ok(())
}
