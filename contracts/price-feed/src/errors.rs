//! Error codes returned by the price feed.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    /// Symbol does not exist
    SymbolDoesNotExist = 10,
    /// Symbol is already registered
    SymbolAlreadyRegistered = 11,
    /// Symbol is not recognized or inactive
    SymbolInactive = 12,

    /// Symbol cannot be activated when oracle address is not set
    OracleNotSet = 20,
    /// Oracle address cannot be null value
    OracleAddressNull = 21,
    /// Unable to change oracle address when symbol is active, deactivate first
    OracleChangeWhileActive = 22,
}
