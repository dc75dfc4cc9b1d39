use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::access::Role;
use crate::error::ConsentError;

const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;

// Consent records are an audit trail, keep them alive well past the instance.
pub(crate) const PERSISTENT_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_TTL_EXTEND_TO: u32 = 180 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Initialized,
    Entered,                                  // reentrancy flag
    ConsentCounter,                           // total records ever created
    Consent(u64),                             // consent_id -> ConsentRecord
    ActiveConsent(BytesN<32>, BytesN<32>),    // (patient, trial) -> consent_id
    HistoryLen(BytesN<32>, BytesN<32>),       // (patient, trial) -> u32
    HistoryEntry(BytesN<32>, BytesN<32>, u32), // (patient, trial, index) -> consent_id
    RoleMember(Role, Address),
    RewardConfig,
    RewardsDistributed,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
    extend_instance(env);
}

pub fn require_initialized(env: &Env) -> Result<(), ConsentError> {
    if !is_initialized(env) {
        return Err(ConsentError::NotInitialized);
    }
    extend_instance(env);
    Ok(())
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

pub fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

pub fn consent_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ConsentCounter)
        .unwrap_or(0u64)
}

/// Bumps the ledger-wide counter and returns the new value as the next id.
/// Ids start at 1 and are never reused.
pub fn next_consent_id(env: &Env) -> u64 {
    let next = consent_counter(env) + 1;
    env.storage().instance().set(&DataKey::ConsentCounter, &next);
    next
}
