//! Type definitions for the price feed.

use soroban_sdk::{contracttype, Address, Symbol};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Symbol(Symbol),
}

/// Registry entry for one symbol
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SymbolInfo {
    pub oracle: Option<Address>, // price source, required before activation
    pub active: bool,
}

/// Latest reading served to consumers
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}

/// Latest round reported by a price source
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub answer: i128,
    pub updated_at: u64,
}

impl From<RoundData> for PriceData {
    fn from(round: RoundData) -> Self {
        PriceData {
            price: round.answer,
            timestamp: round.updated_at,
        }
    }
}
