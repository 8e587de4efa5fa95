//! Read-only view of the price feed contract the manager is bound to.

use soroban_sdk::{contractclient, Env, Symbol};

use crate::types::PriceData;

/// Capabilities the manager needs from a price feed. Any contract exposing
/// these three functions can be passed to `initialize`.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    fn symbol_exists(env: Env, symbol: Symbol) -> bool;

    fn symbol_active(env: Env, symbol: Symbol) -> bool;

    /// Latest `(price, timestamp)` for an active symbol. Fails for unknown or
    /// inactive symbols, so callers check `symbol_active` first.
    fn latest_price(env: Env, symbol: Symbol) -> PriceData;
}
