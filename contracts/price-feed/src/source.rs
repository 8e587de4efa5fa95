//! Interface of the per-symbol price source.

use soroban_sdk::{contractclient, Env};

use crate::types::RoundData;

#[contractclient(name = "PriceSourceClient")]
pub trait PriceSource {
    /// Most recent answer and the time it was updated.
    fn latest_round(env: Env) -> RoundData;
}
