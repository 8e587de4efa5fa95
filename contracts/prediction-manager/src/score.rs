//! User score bookkeeping and the fixed-point return metric.

use core::num::NonZeroU32;

use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::store::extend_persistent;
use crate::types::{DataKey, Direction, UserScore, RETURN_SCALE};

/// Return of a settled prediction, scaled by `RETURN_SCALE`.
///
/// Long positions are measured against the initial price and short positions
/// against the final price:
///
/// * long:  `(final - initial) / initial`
/// * short: `(initial - final) / final`
///
/// Division truncates toward zero.
pub fn directional_return(
    direction: Direction,
    initial: i128,
    final_price: i128,
) -> Result<i128, ContractError> {
    let (gain, base) = match direction {
        Direction::Long => (final_price.checked_sub(initial), initial),
        Direction::Short => (initial.checked_sub(final_price), final_price),
    };
    if base <= 0 {
        return Err(ContractError::InvalidOraclePrice);
    }

    gain.and_then(|g| g.checked_mul(RETURN_SCALE))
        .and_then(|scaled| scaled.checked_div(base))
        .ok_or(ContractError::Overflow)
}

/// A flat price is a miss for both directions.
pub fn is_correct(direction: Direction, initial: i128, final_price: i128) -> bool {
    match direction {
        Direction::Long => final_price > initial,
        Direction::Short => final_price < initial,
    }
}

/// Incremental mean: `avg + (sample - avg) / count`, truncating.
pub fn running_mean(avg: i128, sample: i128, count: NonZeroU32) -> Result<i128, ContractError> {
    sample
        .checked_sub(avg)
        .and_then(|delta| delta.checked_div(count.get() as i128))
        .and_then(|step| avg.checked_add(step))
        .ok_or(ContractError::Overflow)
}

impl UserScore {
    pub(crate) fn open(&mut self) -> Result<(), ContractError> {
        self.num_pending = self
            .num_pending
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;
        Ok(())
    }

    pub(crate) fn close_as_error(&mut self) -> Result<(), ContractError> {
        self.close()?;
        self.num_error = self.num_error.checked_add(1).ok_or(ContractError::Overflow)?;
        Ok(())
    }

    pub(crate) fn close_as_completed(
        &mut self,
        realized: i128,
        correct: bool,
    ) -> Result<(), ContractError> {
        self.close()?;

        let completed = NonZeroU32::MIN
            .checked_add(self.num_completed)
            .ok_or(ContractError::Overflow)?;
        self.avg_return = running_mean(self.avg_return, realized, completed)?;
        self.num_completed = completed.get();

        if correct {
            self.num_correct = self.num_correct.checked_add(1).ok_or(ContractError::Overflow)?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), ContractError> {
        self.num_pending = self
            .num_pending
            .checked_sub(1)
            .ok_or(ContractError::Overflow)?;
        Ok(())
    }
}

pub fn get(env: &Env, user: &Address) -> UserScore {
    env.storage()
        .persistent()
        .get(&DataKey::UserScore(user.clone()))
        .unwrap_or_default()
}

pub fn set(env: &Env, user: &Address, score: &UserScore) {
    let key = DataKey::UserScore(user.clone());
    env.storage().persistent().set(&key, score);
    extend_persistent(env, &key);
}
