//! Error codes returned by the prediction manager.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    /// Not allowed to make predictions for non-authorized users
    Unauthorized = 10,

    /// Symbol does not exist
    SymbolDoesNotExist = 20,
    /// Symbol is not recognized or inactive
    SymbolInactive = 21,

    /// Block timestamp and prediction timestamp is beyond tolerance
    TimestampOutOfTolerance = 30,
    /// Prediction duration needs to be more than 1 * tolerance
    DurationTooShort = 31,
    /// Price feed timestamp and prediction time is beyond tolerance
    StaleOracleData = 32,

    /// Oracle price must be positive
    InvalidOraclePrice = 40,
    Overflow = 41,
}
