//! Core contract implementation for the prediction ledger.

use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String, Symbol};

use crate::errors::ContractError;
use crate::price_feed::PriceFeedClient;
use crate::score;
use crate::store;
use crate::types::{
    Config, DataKey, Direction, PriceData, Prediction, UpkeepState, UserScore,
};
use crate::upkeep::{self, Settlement};
use crate::users;

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_BUMP_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

#[contract]
pub struct PredictionManagerContract;

#[contractimpl]
impl PredictionManagerContract {
    /// Binds the contract to its operator, price feed and time tolerance
    /// (one-time only; none of these can change afterwards)
    pub fn initialize(
        env: Env,
        admin: Address,
        price_feed: Address,
        tolerance: u64,
    ) -> Result<(), ContractError> {
        admin.require_auth();

        if env.storage().instance().has(&DataKey::Config) {
            return Err(ContractError::AlreadyInitialized);
        }

        let config = Config {
            admin: admin.clone(),
            price_feed: price_feed.clone(),
            tolerance,
        };
        env.storage().instance().set(&DataKey::Config, &config);
        Self::_extend_instance(&env);

        #[allow(deprecated)]
        env.events().publish(
            (symbol_short!("init"), symbol_short!("done")),
            (admin, price_feed, tolerance),
        );

        Ok(())
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        Self::_config(&env).ok().map(|config| config.admin)
    }

    pub fn get_price_feed(env: Env) -> Option<Address> {
        Self::_config(&env).ok().map(|config| config.price_feed)
    }

    pub fn get_tolerance(env: Env) -> Option<u64> {
        Self::_config(&env).ok().map(|config| config.tolerance)
    }

    /// Whitelists a user (admin only). Adding an existing user is a no-op.
    pub fn add_user(env: Env, user: Address) -> Result<(), ContractError> {
        let config = Self::_config(&env)?;
        config.admin.require_auth();

        users::add(&env, &user);

        #[allow(deprecated)]
        env.events()
            .publish((symbol_short!("user"), symbol_short!("added")), user);

        Ok(())
    }

    /// Removes a user from the whitelist (admin only). Their live predictions
    /// become expired on the next upkeep scan.
    pub fn remove_user(env: Env, user: Address) -> Result<(), ContractError> {
        let config = Self::_config(&env)?;
        config.admin.require_auth();

        users::remove(&env, &user);

        #[allow(deprecated)]
        env.events()
            .publish((symbol_short!("user"), symbol_short!("removed")), user);

        Ok(())
    }

    pub fn is_user(env: Env, user: Address) -> bool {
        users::is_user(&env, &user)
    }

    /// Records a prediction on behalf of a whitelisted user (admin only)
    ///
    /// Checks run in order and the first failure is returned:
    /// 1. user is whitelisted
    /// 2. symbol exists and is active in the price feed
    /// 3. `pred_timestamp` is within tolerance of the ledger time
    /// 4. `duration` is longer than the tolerance
    /// 5. the feed's latest reading is within tolerance of `pred_timestamp`
    /// 6. the latest price is positive
    /// 7. the settlement deadline fits in a `u64`
    ///
    /// The latest feed reading becomes the prediction's initial price.
    pub fn create_prediction(
        env: Env,
        user: Address,
        pred_timestamp: u64,
        symbol: Symbol,
        direction: Direction,
        duration: u64,
        metadata: String,
    ) -> Result<(), ContractError> {
        let config = Self::_config(&env)?;
        config.admin.require_auth();

        if !users::is_user(&env, &user) {
            return Err(ContractError::Unauthorized);
        }

        let feed = PriceFeedClient::new(&env, &config.price_feed);
        if !feed.symbol_exists(&symbol) {
            return Err(ContractError::SymbolDoesNotExist);
        }
        if !feed.symbol_active(&symbol) {
            return Err(ContractError::SymbolInactive);
        }

        let tolerance = config.tolerance;
        if env.ledger().timestamp().abs_diff(pred_timestamp) > tolerance {
            return Err(ContractError::TimestampOutOfTolerance);
        }

        if duration <= tolerance {
            return Err(ContractError::DurationTooShort);
        }

        let latest = feed.latest_price(&symbol);
        if latest.timestamp.abs_diff(pred_timestamp) > tolerance {
            return Err(ContractError::StaleOracleData);
        }
        if latest.price <= 0 {
            return Err(ContractError::InvalidOraclePrice);
        }

        pred_timestamp
            .checked_add(duration)
            .and_then(|expiry| expiry.checked_add(tolerance))
            .ok_or(ContractError::Overflow)?;

        let prediction = Prediction {
            user: user.clone(),
            pred_timestamp,
            symbol: symbol.clone(),
            direction,
            duration,
            metadata,
            initial_price: latest.clone(),
            final_price: PriceData::unset(),
        };
        let index = store::push(&env, &prediction)?;

        let mut user_score = score::get(&env, &user);
        user_score.open()?;
        score::set(&env, &user, &user_score);

        Self::_extend_instance(&env);

        #[allow(deprecated)]
        env.events().publish(
            (symbol_short!("pred"), symbol_short!("created")),
            (user, symbol, direction, pred_timestamp, duration, latest.price, index),
        );

        Ok(())
    }

    /// Finds at most one prediction needing keeper action.
    ///
    /// Returns `(true, (state, index))` for the first prediction that is either
    /// expired (state 0) or ready to settle (state 1), and `(false, (0, 0))`
    /// when there is nothing to do. Read-only; safe to simulate.
    pub fn check_upkeep(env: Env) -> (bool, (u32, u32)) {
        let Ok(config) = Self::_config(&env) else {
            return (false, (0, 0));
        };

        match upkeep::scan(&env, &config) {
            Some((state, index)) => (true, (state.code(), index)),
            None => (false, (0, 0)),
        }
    }

    /// Settles the prediction named by a `check_upkeep` result
    ///
    /// Callable by anyone. The claimed state is re-derived from current ledger,
    /// feed and whitelist data; a pair that no longer matches (already settled,
    /// index moved, conditions changed, unknown state code) is ignored without
    /// error.
    pub fn perform_upkeep(env: Env, perform_data: (u32, u32)) -> Result<(), ContractError> {
        let config = Self::_config(&env)?;

        let (code, index) = perform_data;
        let Some(state) = UpkeepState::from_code(code) else {
            log!(&env, "upkeep skipped: unknown state {}", code);
            return Ok(());
        };

        let Some(settlement) = upkeep::settle(&env, &config, state, index)? else {
            return Ok(());
        };

        match settlement {
            Settlement::Expired(prediction) => {
                #[allow(deprecated)]
                env.events().publish(
                    (symbol_short!("pred"), symbol_short!("expired")),
                    (prediction.user, prediction.symbol, index),
                );
            }
            Settlement::Completed {
                prediction,
                realized,
                correct,
            } => {
                #[allow(deprecated)]
                env.events().publish(
                    (symbol_short!("pred"), symbol_short!("settled")),
                    (
                        prediction.user,
                        prediction.symbol,
                        prediction.final_price.price,
                        realized,
                        correct,
                    ),
                );
            }
        }

        Ok(())
    }

    pub fn num_live_predictions(env: Env) -> u32 {
        store::len(&env)
    }

    /// Returns the live prediction at `index`. Indices shift as predictions
    /// are settled, so they are only meaningful between two writes.
    pub fn get_live_prediction(env: Env, index: u32) -> Option<Prediction> {
        store::get(&env, index)
    }

    /// Returns the user's score (all zeros for users never scored)
    pub fn get_user_score(env: Env, user: Address) -> UserScore {
        score::get(&env, &user)
    }

    fn _config(env: &Env) -> Result<Config, ContractError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(ContractError::NotInitialized)
    }

    fn _extend_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_BUMP_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
