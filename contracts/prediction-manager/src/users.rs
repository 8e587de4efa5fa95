//! Whitelist of users that predictions may be created for.

use soroban_sdk::{Address, Env};

use crate::store::extend_persistent;
use crate::types::DataKey;

pub fn is_user(env: &Env, user: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::User(user.clone()))
        .unwrap_or(false)
}

pub fn add(env: &Env, user: &Address) {
    let key = DataKey::User(user.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
}

pub fn remove(env: &Env, user: &Address) {
    env.storage().persistent().remove(&DataKey::User(user.clone()));
}
