#![no_std]
//! Time-bound directional price predictions, settled by keeper upkeep.
//!
//! The operator records `long`/`short` calls on feed symbols for whitelisted
//! users. A keeper polls `check_upkeep` and hands its `(state, index)` result
//! to `perform_upkeep`, which expires stale predictions or settles mature ones
//! against the feed and updates the user's score.

mod contract;
mod errors;
mod price_feed;
mod score;
mod store;
mod types;
mod upkeep;
mod users;

#[cfg(test)]
mod tests;

pub use contract::{PredictionManagerContract, PredictionManagerContractClient};
pub use errors::ContractError;
pub use price_feed::{PriceFeedClient, PriceFeedInterface};
pub use score::{directional_return, is_correct, running_mean};
pub use types::{
    Config, Direction, PriceData, Prediction, UpkeepState, UserScore, RETURN_SCALE,
};
