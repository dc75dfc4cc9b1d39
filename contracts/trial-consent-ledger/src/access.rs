use soroban_sdk::{contracttype, log, Address, Env};

use crate::error::ConsentError;
use crate::events;
use crate::storage::{self, DataKey};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,    // manages role membership and ledger parameters
    Operator, // records and revokes consent for verified off-chain flows
}

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    let key = DataKey::RoleMember(role, account.clone());
    let member = env.storage().persistent().has(&key);
    if member {
        storage::extend_persistent(env, &key);
    }
    member
}

/// Membership of every role, `Admin` included, is managed by `Admin` alone.
pub fn get_role_admin(_role: Role) -> Role {
    Role::Admin
}

/// The single authorization gate every mutating entry point goes through.
pub fn authorize(env: &Env, caller: &Address, role: Role) -> Result<(), ConsentError> {
    if has_role(env, role, caller) {
        return Ok(());
    }
    log!(env, "unauthorized account {} missing role {}", caller.clone(), role);
    Err(missing_role_error(role))
}

/// Revocation is open to operators and, as an override, to admins.
pub fn authorize_revoker(env: &Env, caller: &Address) -> Result<(), ConsentError> {
    if has_role(env, Role::Operator, caller) || has_role(env, Role::Admin, caller) {
        return Ok(());
    }
    log!(env, "unauthorized account {} cannot revoke consent", caller.clone());
    Err(ConsentError::MissingRevokerRole)
}

fn missing_role_error(role: Role) -> ConsentError {
    match role {
        Role::Admin => ConsentError::MissingAdminRole,
        Role::Operator => ConsentError::MissingOperatorRole,
    }
}

pub fn grant_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: Address,
) -> Result<(), ConsentError> {
    authorize(env, caller, get_role_admin(role))?;
    grant_role_unchecked(env, role, account, caller.clone());
    Ok(())
}

pub fn revoke_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: Address,
) -> Result<(), ConsentError> {
    authorize(env, caller, get_role_admin(role))?;
    revoke_role_unchecked(env, role, account, caller.clone());
    Ok(())
}

pub fn renounce_role(
    env: &Env,
    caller: &Address,
    role: Role,
    caller_confirmation: Address,
) -> Result<(), ConsentError> {
    if *caller != caller_confirmation {
        return Err(ConsentError::BadConfirmation);
    }
    revoke_role_unchecked(env, role, caller_confirmation, caller.clone());
    Ok(())
}

/// Adds membership without an authorization check. Only `initialize` and
/// already-authorized paths may call this. Granting a held role is a no-op.
pub fn grant_role_unchecked(env: &Env, role: Role, account: Address, sender: Address) {
    if has_role(env, role, &account) {
        return;
    }
    let key = DataKey::RoleMember(role, account.clone());
    env.storage().persistent().set(&key, &true);
    storage::extend_persistent(env, &key);
    events::emit_role_granted(env, role, account, sender);
}

fn revoke_role_unchecked(env: &Env, role: Role, account: Address, sender: Address) {
    if !has_role(env, role, &account) {
        return;
    }
    env.storage()
        .persistent()
        .remove(&DataKey::RoleMember(role, account.clone()));
    events::emit_role_revoked(env, role, account, sender);
}
