//! Type definitions for the prediction ledger.

use soroban_sdk::{contracttype, Address, String, Symbol};

/// Fixed-point scale of `UserScore::avg_return` (8 decimals).
pub const RETURN_SCALE: i128 = 100_000_000;

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    User(Address),      // whitelist membership
    UserScore(Address),
    PredictionCount,    // number of occupied prediction slots
    Prediction(u32),    // slot index -> live prediction
}

/// Immutable deployment settings, written once by `initialize`
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub price_feed: Address,
    pub tolerance: u64, // seconds
}

/// Which way the price is expected to move
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Direction {
    Short = 0, // expect a decrease
    Long = 1,  // expect an increase
}

/// An oracle reading
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}

impl PriceData {
    /// Placeholder for a price that has not been observed yet.
    pub fn unset() -> Self {
        PriceData {
            price: 0,
            timestamp: 0,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub user: Address,
    pub pred_timestamp: u64,
    pub symbol: Symbol,
    pub direction: Direction,
    pub duration: u64,
    pub metadata: String,      // opaque off-chain reference (e.g. IPFS CID)
    pub initial_price: PriceData,
    pub final_price: PriceData, // unset until settlement
}

impl Prediction {
    pub fn expiry(&self) -> u64 {
        self.pred_timestamp.saturating_add(self.duration)
    }
}

/// Per-user track record
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserScore {
    pub num_pending: u32,
    pub num_completed: u32,
    pub num_correct: u32,
    pub num_error: u32,
    pub avg_return: i128, // scaled by RETURN_SCALE
}

/// Keeper action encoded in the first element of the perform data pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum UpkeepState {
    Expired = 0,
    Ready = 1,
}

impl UpkeepState {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(UpkeepState::Expired),
            1 => Some(UpkeepState::Ready),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}
