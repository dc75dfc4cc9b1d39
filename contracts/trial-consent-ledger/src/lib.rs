#![no_std]

mod access;
mod consent;
mod error;
mod events;
mod guard;
mod query;
mod rewards;
mod storage;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol, Vec};

pub use access::Role;
pub use consent::ConsentRecord;
pub use error::ConsentError;
pub use events::*;
pub use rewards::RewardConfig;

/// Append-only ledger of hashed clinical-trial consent attestations.
///
/// Only commitments are stored: patient, trial and consent-document hashes.
/// Recording and revoking are restricted to `Role::Operator` (revocation also
/// to `Role::Admin`); reads are open.
#[contract]
pub struct TrialConsentLedger;

#[contractimpl]
impl TrialConsentLedger {
    /// Initialize the ledger, making `admin` the first holder of `Role::Admin`
    pub fn initialize(env: Env, admin: Address) -> Result<(), ConsentError> {
        if storage::is_initialized(&env) {
            return Err(ConsentError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_initialized(&env);
        access::grant_role_unchecked(&env, Role::Admin, admin.clone(), admin);
        Ok(())
    }

    // Consent ledger

    /// Record consent for a (patient, trial) pair and return its new id
    pub fn record_consent(
        env: Env,
        operator: Address,
        patient_hash: BytesN<32>,
        trial_hash: BytesN<32>,
        consent_hash: BytesN<32>,
    ) -> Result<u64, ConsentError> {
        storage::require_initialized(&env)?;
        operator.require_auth();
        guard::non_reentrant(&env, || {
            consent::record_consent(&env, &operator, patient_hash, trial_hash, consent_hash)
        })
    }

    /// Revoke a consent record by id. Revoking twice is an error.
    pub fn revoke_consent(env: Env, caller: Address, consent_id: u64) -> Result<(), ConsentError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        guard::non_reentrant(&env, || consent::revoke_consent(&env, &caller, consent_id))
    }

    /// Revoke the record currently indexed for a pair, returning its id
    pub fn revoke_active_consent(
        env: Env,
        caller: Address,
        patient_hash: BytesN<32>,
        trial_hash: BytesN<32>,
    ) -> Result<u64, ConsentError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        guard::non_reentrant(&env, || {
            consent::revoke_active_consent(&env, &caller, patient_hash, trial_hash)
        })
    }

    // Query surface

    pub fn verify_consent(
        env: Env,
        patient_hash: BytesN<32>,
        trial_hash: BytesN<32>,
    ) -> (bool, u64, u64) {
        query::verify_consent(&env, &patient_hash, &trial_hash)
    }

    pub fn verify_consent_document(
        env: Env,
        patient_hash: BytesN<32>,
        trial_hash: BytesN<32>,
        consent_hash: BytesN<32>,
    ) -> bool {
        query::verify_consent_document(&env, &patient_hash, &trial_hash, &consent_hash)
    }

    /// Fetch a record by id. Unknown ids fail with `ConsentNotFound`.
    pub fn get_consent(env: Env, consent_id: u64) -> Result<ConsentRecord, ConsentError> {
        query::get_consent(&env, consent_id)
    }

    /// Every id ever recorded for a pair, oldest first
    pub fn consent_history(env: Env, patient_hash: BytesN<32>, trial_hash: BytesN<32>) -> Vec<u64> {
        consent::consent_history(&env, &patient_hash, &trial_hash)
    }

    pub fn consent_counter(env: Env) -> u64 {
        storage::consent_counter(&env)
    }

    // Access control

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        access::has_role(&env, role, &account)
    }

    /// Always `Role::Admin`: no other role can manage membership
    pub fn get_role_admin(_env: Env, role: Role) -> Role {
        access::get_role_admin(role)
    }

    pub fn grant_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), ConsentError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        access::grant_role(&env, &caller, role, account)
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), ConsentError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        access::revoke_role(&env, &caller, role, account)
    }

    /// Drop one of the caller's own roles. `caller_confirmation` must repeat
    /// the caller's address.
    pub fn renounce_role(
        env: Env,
        caller: Address,
        role: Role,
        caller_confirmation: Address,
    ) -> Result<(), ConsentError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        access::renounce_role(&env, &caller, role, caller_confirmation)
    }

    // Rewards

    pub fn set_reward_config(
        env: Env,
        admin: Address,
        token: Address,
        max_reward: i128,
    ) -> Result<(), ConsentError> {
        storage::require_initialized(&env)?;
        admin.require_auth();
        rewards::set_reward_config(&env, &admin, token, max_reward)
    }

    pub fn reward_config(env: Env) -> Option<RewardConfig> {
        rewards::reward_config(&env)
    }

    /// Pay `amount` of the reward token to a trial participant
    pub fn distribute_reward(
        env: Env,
        operator: Address,
        recipient: Address,
        amount: i128,
        reason: Symbol,
    ) -> Result<(), ConsentError> {
        storage::require_initialized(&env)?;
        operator.require_auth();
        guard::non_reentrant(&env, || {
            rewards::distribute_reward(&env, &operator, recipient, amount, reason)
        })
    }

    pub fn total_rewards_distributed(env: Env) -> i128 {
        rewards::total_distributed(&env)
    }
}

#[cfg(test)]
mod tests;
