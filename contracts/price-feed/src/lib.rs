#![no_std]
//! Symbol registry and latest-price adapter.
//!
//! Each registered symbol is bound to a price source contract exposing an
//! aggregator-style `latest_round`. Only active symbols serve prices.

mod contract;
mod errors;
mod source;
mod types;

#[cfg(test)]
mod tests;

pub use contract::{PriceFeedManagerContract, PriceFeedManagerContractClient};
pub use errors::ContractError;
pub use source::{PriceSource, PriceSourceClient};
pub use types::{PriceData, RoundData, SymbolInfo};
