#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    Address, BytesN, Env, Val, Vec,
};

use crate::{Role, TrialConsentLedger, TrialConsentLedgerClient};

pub const GENESIS_TIMESTAMP: u64 = 1_700_000_000;

const PATIENT_TAG: u8 = 0x01;
const TRIAL_TAG: u8 = 0x02;
const DOCUMENT_TAG: u8 = 0x03;

pub struct TestContext {
    pub env: Env,
    pub client: TrialConsentLedgerClient<'static>,
    pub admin: Address,
    pub operator: Address,
}

/// Registers the ledger without initializing it
pub fn create_test_contract(env: &Env) -> TrialConsentLedgerClient<'static> {
    TrialConsentLedgerClient::new(env, &env.register(TrialConsentLedger, ()))
}

/// Initialized ledger with one admin and one operator
pub fn setup() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(GENESIS_TIMESTAMP);

    let client = create_test_contract(&env);
    let admin = Address::generate(&env);
    let operator = Address::generate(&env);

    client.initialize(&admin);
    client.grant_role(&admin, &Role::Operator, &operator);

    TestContext {
        env,
        client,
        admin,
        operator,
    }
}

fn commitment(env: &Env, tag: u8, n: u8) -> BytesN<32> {
    let mut bytes = [0xAAu8; 32];
    bytes[0] = tag;
    bytes[31] = n;
    BytesN::from_array(env, &bytes)
}

pub fn patient(env: &Env, n: u8) -> BytesN<32> {
    commitment(env, PATIENT_TAG, n)
}

pub fn trial(env: &Env, n: u8) -> BytesN<32> {
    commitment(env, TRIAL_TAG, n)
}

pub fn document(env: &Env, n: u8) -> BytesN<32> {
    commitment(env, DOCUMENT_TAG, n)
}

pub fn zero_commitment(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}

/// Records consent for (patient n, trial m) with document d as the operator
pub fn record(ctx: &TestContext, p: u8, t: u8, d: u8) -> u64 {
    ctx.client.record_consent(
        &ctx.operator,
        &patient(&ctx.env, p),
        &trial(&ctx.env, t),
        &document(&ctx.env, d),
    )
}

pub fn advance_time(env: &Env, seconds: u64) {
    env.ledger().set_timestamp(env.ledger().timestamp() + seconds);
}

pub fn ledger_event_count(ctx: &TestContext) -> u32 {
    let mut count = 0;
    for (contract, _, _) in ctx.env.events().all().iter() {
        if contract == ctx.client.address {
            count += 1;
        }
    }
    count
}

/// Topics and payload of the most recent event published by the ledger itself
pub fn last_ledger_event(ctx: &TestContext) -> (Vec<Val>, Val) {
    let mut found = None;
    for (contract, topics, data) in ctx.env.events().all().iter() {
        if contract == ctx.client.address {
            found = Some((topics, data));
        }
    }
    found.expect("ledger published no event")
}
