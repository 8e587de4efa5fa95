//! Live prediction storage.
//!
//! Predictions occupy the slots `0..count`, one persistent entry per slot.
//! Removal moves the last prediction into the vacated slot and shrinks the
//! count, so slot order is not stable across removals.

use soroban_sdk::Env;

use crate::errors::ContractError;
use crate::types::{DataKey, Prediction};

const DAY_IN_LEDGERS: u32 = 17280;
const BUMP_THRESHOLD: u32 = 14 * DAY_IN_LEDGERS;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

pub(crate) fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_AMOUNT);
}

pub fn len(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::PredictionCount)
        .unwrap_or(0)
}

pub fn get(env: &Env, index: u32) -> Option<Prediction> {
    if index >= len(env) {
        return None;
    }
    env.storage().persistent().get(&DataKey::Prediction(index))
}

/// Appends a prediction and returns its slot.
pub fn push(env: &Env, prediction: &Prediction) -> Result<u32, ContractError> {
    let index = len(env);
    let next = index.checked_add(1).ok_or(ContractError::Overflow)?;

    let key = DataKey::Prediction(index);
    env.storage().persistent().set(&key, prediction);
    extend_persistent(env, &key);
    set_len(env, next);

    Ok(index)
}

/// Removes the prediction at `index` in O(1) by moving the last prediction
/// into its slot. Returns `None` when the slot is empty.
pub fn swap_remove(env: &Env, index: u32) -> Option<Prediction> {
    let count = len(env);
    if index >= count {
        return None;
    }
    let last = count - 1;

    let removed: Prediction = env.storage().persistent().get(&DataKey::Prediction(index))?;

    if index != last {
        let moved: Prediction = env.storage().persistent().get(&DataKey::Prediction(last))?;
        let key = DataKey::Prediction(index);
        env.storage().persistent().set(&key, &moved);
        extend_persistent(env, &key);
    }

    env.storage().persistent().remove(&DataKey::Prediction(last));
    set_len(env, last);

    Some(removed)
}

fn set_len(env: &Env, count: u32) {
    let key = DataKey::PredictionCount;
    env.storage().persistent().set(&key, &count);
    extend_persistent(env, &key);
}
