use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol};

use crate::access::Role;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsentRecordedEvent {
    pub consent_id: u64,
    pub patient_hash: BytesN<32>,
    pub trial_hash: BytesN<32>,
    pub consent_hash: BytesN<32>,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsentRevokedEvent {
    pub consent_id: u64,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleGrantedEvent {
    pub role: Role,
    pub account: Address,
    pub sender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleRevokedEvent {
    pub role: Role,
    pub account: Address,
    pub sender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardDistributedEvent {
    pub recipient: Address,
    pub amount: i128,
    pub reason: Symbol,
}

pub const CONSENT_TOPIC: Symbol = symbol_short!("consent");
pub const ROLE_TOPIC: Symbol = symbol_short!("role");
pub const REWARD_TOPIC: Symbol = symbol_short!("reward");

pub fn emit_consent_recorded(
    env: &Env,
    consent_id: u64,
    patient_hash: BytesN<32>,
    trial_hash: BytesN<32>,
    consent_hash: BytesN<32>,
    timestamp: u64,
) {
    let event = ConsentRecordedEvent {
        consent_id,
        patient_hash,
        trial_hash,
        consent_hash,
        timestamp,
    };
    env.events()
        .publish((CONSENT_TOPIC, symbol_short!("recorded")), event);
}

pub fn emit_consent_revoked(env: &Env, consent_id: u64, timestamp: u64) {
    let event = ConsentRevokedEvent {
        consent_id,
        timestamp,
    };
    env.events()
        .publish((CONSENT_TOPIC, symbol_short!("revoked")), event);
}

pub fn emit_role_granted(env: &Env, role: Role, account: Address, sender: Address) {
    let event = RoleGrantedEvent {
        role,
        account,
        sender,
    };
    env.events()
        .publish((ROLE_TOPIC, symbol_short!("granted")), event);
}

pub fn emit_role_revoked(env: &Env, role: Role, account: Address, sender: Address) {
    let event = RoleRevokedEvent {
        role,
        account,
        sender,
    };
    env.events()
        .publish((ROLE_TOPIC, symbol_short!("revoked")), event);
}

pub fn emit_reward_distributed(env: &Env, recipient: Address, amount: i128, reason: Symbol) {
    let event = RewardDistributedEvent {
        recipient,
        amount,
        reason,
    };
    env.events()
        .publish((REWARD_TOPIC, symbol_short!("paid")), event);
}
