use soroban_sdk::{BytesN, Env};

use crate::consent::{self, ConsentRecord};
use crate::error::ConsentError;

/// Current consent status of a (patient, trial) pair as
/// `(is_valid, consent_id, created_at)`. A pair that was never consented
/// yields `(false, 0, 0)`; that is a normal answer, not an error.
pub fn verify_consent(
    env: &Env,
    patient_hash: &BytesN<32>,
    trial_hash: &BytesN<32>,
) -> (bool, u64, u64) {
    match active_record(env, patient_hash, trial_hash) {
        Some(record) => (record.valid, record.id, record.created_at),
        None => (false, 0, 0),
    }
}

/// True only when the pair's active record is still valid and commits to
/// exactly `consent_hash`.
pub fn verify_consent_document(
    env: &Env,
    patient_hash: &BytesN<32>,
    trial_hash: &BytesN<32>,
    consent_hash: &BytesN<32>,
) -> bool {
    match active_record(env, patient_hash, trial_hash) {
        Some(record) => record.valid && record.consent_hash == *consent_hash,
        None => false,
    }
}

pub fn get_consent(env: &Env, consent_id: u64) -> Result<ConsentRecord, ConsentError> {
    consent::load_consent(env, consent_id).ok_or(ConsentError::ConsentNotFound)
}

fn active_record(
    env: &Env,
    patient_hash: &BytesN<32>,
    trial_hash: &BytesN<32>,
) -> Option<ConsentRecord> {
    let consent_id = consent::active_consent_id(env, patient_hash, trial_hash)?;
    consent::load_consent(env, consent_id)
}
