//! Keeper-facing scan and settlement.
//!
//! `scan` finds the first prediction that needs action and `settle` acts on a
//! `(state, index)` pair. Both go through `classify`, so a pair produced by an
//! earlier scan is only acted on if it still describes the live prediction.

use soroban_sdk::{log, Env};

use crate::errors::ContractError;
use crate::price_feed::PriceFeedClient;
use crate::score;
use crate::store;
use crate::types::{Config, PriceData, Prediction, UpkeepState};
use crate::users;

/// Current classification of a live prediction.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// Grace window passed or the user lost authorization.
    Expired,
    /// The feed holds a usable reading inside `[expiry, expiry + tolerance]`.
    Ready(PriceData),
}

impl Verdict {
    pub fn state(&self) -> UpkeepState {
        match self {
            Verdict::Expired => UpkeepState::Expired,
            Verdict::Ready(_) => UpkeepState::Ready,
        }
    }
}

/// What a successful `settle` did, for event publishing.
#[derive(Clone, Debug, PartialEq)]
pub enum Settlement {
    Expired(Prediction),
    Completed {
        prediction: Prediction,
        realized: i128,
        correct: bool,
    },
}

/// Expired wins over Ready when both hold.
pub fn classify(
    env: &Env,
    feed: &PriceFeedClient,
    tolerance: u64,
    prediction: &Prediction,
) -> Option<Verdict> {
    let expiry = prediction.expiry();
    let deadline = expiry.saturating_add(tolerance);

    if env.ledger().timestamp() > deadline || !users::is_user(env, &prediction.user) {
        return Some(Verdict::Expired);
    }

    // A failing feed read leaves the prediction pending.
    if !matches!(feed.try_symbol_active(&prediction.symbol), Ok(Ok(true))) {
        return None;
    }
    let Ok(Ok(latest)) = feed.try_latest_price(&prediction.symbol) else {
        return None;
    };

    if latest.timestamp >= expiry && latest.timestamp <= deadline && latest.price > 0 {
        Some(Verdict::Ready(latest))
    } else {
        None
    }
}

/// Finds the first actionable prediction. Never writes to storage.
pub fn scan(env: &Env, config: &Config) -> Option<(UpkeepState, u32)> {
    let feed = PriceFeedClient::new(env, &config.price_feed);

    for index in 0..store::len(env) {
        let Some(prediction) = store::get(env, index) else {
            continue;
        };
        if let Some(verdict) = classify(env, &feed, config.tolerance, &prediction) {
            return Some((verdict.state(), index));
        }
    }

    None
}

/// Settles the prediction at `index` if it is still in `state`.
///
/// Returns `Ok(None)` without touching storage when the slot is empty or the
/// prediction no longer matches the claimed state.
pub fn settle(
    env: &Env,
    config: &Config,
    state: UpkeepState,
    index: u32,
) -> Result<Option<Settlement>, ContractError> {
    let Some(mut prediction) = store::get(env, index) else {
        log!(env, "upkeep skipped: no prediction at index {}", index);
        return Ok(None);
    };

    let feed = PriceFeedClient::new(env, &config.price_feed);
    let verdict = match classify(env, &feed, config.tolerance, &prediction) {
        Some(verdict) if verdict.state() == state => verdict,
        _ => {
            log!(env, "upkeep skipped: index {} is not {}", index, state.code());
            return Ok(None);
        }
    };

    let user = prediction.user.clone();
    let mut user_score = score::get(env, &user);

    let settlement = match verdict {
        Verdict::Expired => {
            user_score.close_as_error()?;
            Settlement::Expired(prediction)
        }
        Verdict::Ready(latest) => {
            let initial = prediction.initial_price.price;
            let realized = score::directional_return(prediction.direction, initial, latest.price)?;
            let correct = score::is_correct(prediction.direction, initial, latest.price);

            user_score.close_as_completed(realized, correct)?;
            prediction.final_price = latest;

            Settlement::Completed {
                prediction,
                realized,
                correct,
            }
        }
    };

    score::set(env, &user, &user_score);
    store::swap_remove(env, index);

    Ok(Some(settlement))
}
