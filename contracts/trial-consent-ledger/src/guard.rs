use soroban_sdk::Env;

use crate::error::ConsentError;
use crate::storage::DataKey;

pub fn is_entered(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Entered)
        .unwrap_or(false)
}

/// Runs `f` with the ledger marked as entered. A guarded call nested inside
/// `f` fails with `ReentrantCall` instead of seeing half-applied writes.
///
/// The flag is cleared on both outcomes; on the error path the host discards
/// the invocation's writes anyway.
pub fn non_reentrant<T, F>(env: &Env, f: F) -> Result<T, ConsentError>
where
    F: FnOnce() -> Result<T, ConsentError>,
{
    if is_entered(env) {
        return Err(ConsentError::ReentrantCall);
    }
    env.storage().instance().set(&DataKey::Entered, &true);

    let result = f();

    env.storage().instance().remove(&DataKey::Entered);
    result
}
