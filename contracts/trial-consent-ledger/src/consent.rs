use soroban_sdk::{contracttype, log, Address, BytesN, Env, Vec};

use crate::access::{self, Role};
use crate::error::ConsentError;
use crate::events;
use crate::storage::{self, DataKey};

/// One consent event. `valid` starts true and is cleared exactly once, by
/// revocation. Records are never deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsentRecord {
    pub id: u64,
    pub patient_hash: BytesN<32>,
    pub trial_hash: BytesN<32>,
    pub consent_hash: BytesN<32>,
    pub created_at: u64,
    pub valid: bool,
    pub revoked_at: Option<u64>,
}

pub fn record_consent(
    env: &Env,
    operator: &Address,
    patient_hash: BytesN<32>,
    trial_hash: BytesN<32>,
    consent_hash: BytesN<32>,
) -> Result<u64, ConsentError> {
    access::authorize(env, operator, Role::Operator)?;

    validate_commitment(env, &patient_hash)?;
    validate_commitment(env, &trial_hash)?;
    validate_commitment(env, &consent_hash)?;

    let id = storage::next_consent_id(env);
    let now = env.ledger().timestamp();

    let record = ConsentRecord {
        id,
        patient_hash: patient_hash.clone(),
        trial_hash: trial_hash.clone(),
        consent_hash: consent_hash.clone(),
        created_at: now,
        valid: true,
        revoked_at: None,
    };
    store_consent(env, &record);

    // A re-consent supersedes whatever the pair pointed at before.
    let index_key = DataKey::ActiveConsent(patient_hash.clone(), trial_hash.clone());
    env.storage().persistent().set(&index_key, &id);
    storage::extend_persistent(env, &index_key);

    append_history(env, &patient_hash, &trial_hash, id);

    log!(env, "consent {} recorded by {}", id, operator.clone());
    events::emit_consent_recorded(env, id, patient_hash, trial_hash, consent_hash, now);

    Ok(id)
}

pub fn revoke_consent(env: &Env, caller: &Address, consent_id: u64) -> Result<(), ConsentError> {
    access::authorize_revoker(env, caller)?;
    revoke_record(env, caller, consent_id)
}

/// Revokes whatever record the pair's active-consent index points at.
pub fn revoke_active_consent(
    env: &Env,
    caller: &Address,
    patient_hash: BytesN<32>,
    trial_hash: BytesN<32>,
) -> Result<u64, ConsentError> {
    access::authorize_revoker(env, caller)?;

    let consent_id =
        active_consent_id(env, &patient_hash, &trial_hash).ok_or(ConsentError::ConsentNotFound)?;
    revoke_record(env, caller, consent_id)?;
    Ok(consent_id)
}

fn revoke_record(env: &Env, caller: &Address, consent_id: u64) -> Result<(), ConsentError> {
    let mut record = load_consent(env, consent_id).ok_or(ConsentError::ConsentNotFound)?;
    if !record.valid {
        return Err(ConsentError::ConsentAlreadyRevoked);
    }

    let now = env.ledger().timestamp();
    record.valid = false;
    record.revoked_at = Some(now);

    // The pair's index entry keeps pointing at this id; readers check `valid`.
    store_consent(env, &record);

    log!(env, "consent {} revoked by {}", consent_id, caller.clone());
    events::emit_consent_revoked(env, consent_id, now);

    Ok(())
}

/// A zero commitment cannot be the digest of real content.
pub fn validate_commitment(env: &Env, commitment: &BytesN<32>) -> Result<(), ConsentError> {
    if *commitment == BytesN::from_array(env, &[0u8; 32]) {
        return Err(ConsentError::InvalidCommitment);
    }
    Ok(())
}

pub fn load_consent(env: &Env, consent_id: u64) -> Option<ConsentRecord> {
    let key = DataKey::Consent(consent_id);
    let record: Option<ConsentRecord> = env.storage().persistent().get(&key);
    if record.is_some() {
        storage::extend_persistent(env, &key);
    }
    record
}

pub fn active_consent_id(
    env: &Env,
    patient_hash: &BytesN<32>,
    trial_hash: &BytesN<32>,
) -> Option<u64> {
    let key = DataKey::ActiveConsent(patient_hash.clone(), trial_hash.clone());
    let consent_id: Option<u64> = env.storage().persistent().get(&key);
    if consent_id.is_some() {
        storage::extend_persistent(env, &key);
    }
    consent_id
}

pub fn history_len(env: &Env, patient_hash: &BytesN<32>, trial_hash: &BytesN<32>) -> u32 {
    let key = DataKey::HistoryLen(patient_hash.clone(), trial_hash.clone());
    let len: Option<u32> = env.storage().persistent().get(&key);
    if len.is_some() {
        storage::extend_persistent(env, &key);
    }
    len.unwrap_or(0)
}

pub fn consent_history(
    env: &Env,
    patient_hash: &BytesN<32>,
    trial_hash: &BytesN<32>,
) -> Vec<u64> {
    let mut history = Vec::new(env);
    for index in 0..history_len(env, patient_hash, trial_hash) {
        let key = DataKey::HistoryEntry(patient_hash.clone(), trial_hash.clone(), index);
        if let Some(consent_id) = env.storage().persistent().get::<_, u64>(&key) {
            storage::extend_persistent(env, &key);
            history.push_back(consent_id);
        }
    }
    history
}

fn store_consent(env: &Env, record: &ConsentRecord) {
    let key = DataKey::Consent(record.id);
    env.storage().persistent().set(&key, record);
    storage::extend_persistent(env, &key);
}

// One entry per id plus a length key, so re-consents never grow a single
// ledger entry toward the host's entry-size limit.
fn append_history(
    env: &Env,
    patient_hash: &BytesN<32>,
    trial_hash: &BytesN<32>,
    consent_id: u64,
) {
    let index = history_len(env, patient_hash, trial_hash);

    let entry_key = DataKey::HistoryEntry(patient_hash.clone(), trial_hash.clone(), index);
    env.storage().persistent().set(&entry_key, &consent_id);
    storage::extend_persistent(env, &entry_key);

    let len_key = DataKey::HistoryLen(patient_hash.clone(), trial_hash.clone());
    env.storage().persistent().set(&len_key, &(index + 1));
    storage::extend_persistent(env, &len_key);
}
