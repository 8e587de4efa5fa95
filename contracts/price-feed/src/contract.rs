//! Core contract implementation for the price feed.

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol};

use crate::errors::ContractError;
use crate::source::PriceSourceClient;
use crate::types::{DataKey, PriceData, SymbolInfo};

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_BUMP_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const BUMP_THRESHOLD: u32 = 14 * DAY_IN_LEDGERS;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

#[contract]
pub struct PriceFeedManagerContract;

#[contractimpl]
impl PriceFeedManagerContract {
    /// Sets the admin who manages the symbol registry (one-time only)
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        admin.require_auth();

        if env.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_BUMP_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        #[allow(deprecated)]
        env.events()
            .publish((symbol_short!("init"), symbol_short!("done")), admin);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Admin)
    }

    /// Adds a symbol with no oracle. New symbols start inactive.
    pub fn register_symbol(env: Env, symbol: Symbol) -> Result<(), ContractError> {
        Self::_require_admin(&env)?;

        if Self::_info(&env, &symbol).is_some() {
            return Err(ContractError::SymbolAlreadyRegistered);
        }

        let info = SymbolInfo {
            oracle: None,
            active: false,
        };
        Self::_set_info(&env, &symbol, &info);

        #[allow(deprecated)]
        env.events()
            .publish((symbol_short!("symbol"), symbol_short!("register")), symbol);

        Ok(())
    }

    /// Binds a symbol to its price source. The symbol must be inactive.
    pub fn set_oracle(
        env: Env,
        symbol: Symbol,
        oracle: Option<Address>,
    ) -> Result<(), ContractError> {
        Self::_require_admin(&env)?;

        let mut info = Self::_info(&env, &symbol).ok_or(ContractError::SymbolDoesNotExist)?;
        let oracle = oracle.ok_or(ContractError::OracleAddressNull)?;
        if info.active {
            return Err(ContractError::OracleChangeWhileActive);
        }

        info.oracle = Some(oracle.clone());
        Self::_set_info(&env, &symbol, &info);

        #[allow(deprecated)]
        env.events().publish(
            (symbol_short!("symbol"), symbol_short!("oracle")),
            (symbol, oracle),
        );

        Ok(())
    }

    pub fn activate_symbol(env: Env, symbol: Symbol) -> Result<(), ContractError> {
        Self::_require_admin(&env)?;

        let mut info = Self::_info(&env, &symbol).ok_or(ContractError::SymbolDoesNotExist)?;
        if info.oracle.is_none() {
            return Err(ContractError::OracleNotSet);
        }

        info.active = true;
        Self::_set_info(&env, &symbol, &info);

        #[allow(deprecated)]
        env.events()
            .publish((symbol_short!("symbol"), symbol_short!("activate")), symbol);

        Ok(())
    }

    pub fn deactivate_symbol(env: Env, symbol: Symbol) -> Result<(), ContractError> {
        Self::_require_admin(&env)?;

        let mut info = Self::_info(&env, &symbol).ok_or(ContractError::SymbolDoesNotExist)?;

        info.active = false;
        Self::_set_info(&env, &symbol, &info);

        #[allow(deprecated)]
        env.events()
            .publish((symbol_short!("symbol"), symbol_short!("deactiv")), symbol);

        Ok(())
    }

    pub fn symbol_exists(env: Env, symbol: Symbol) -> bool {
        Self::_info(&env, &symbol).is_some()
    }

    pub fn symbol_active(env: Env, symbol: Symbol) -> bool {
        Self::_info(&env, &symbol).is_some_and(|info| info.active)
    }

    pub fn get_symbol_info(env: Env, symbol: Symbol) -> Option<SymbolInfo> {
        Self::_info(&env, &symbol)
    }

    /// Latest reading from the symbol's price source
    pub fn latest_price(env: Env, symbol: Symbol) -> Result<PriceData, ContractError> {
        let info = Self::_info(&env, &symbol).ok_or(ContractError::SymbolDoesNotExist)?;
        if !info.active {
            return Err(ContractError::SymbolInactive);
        }
        let oracle = info.oracle.ok_or(ContractError::OracleNotSet)?;

        let round = PriceSourceClient::new(&env, &oracle).latest_round();
        Ok(round.into())
    }

    fn _require_admin(env: &Env) -> Result<(), ContractError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::NotInitialized)?;
        admin.require_auth();
        Ok(())
    }

    fn _info(env: &Env, symbol: &Symbol) -> Option<SymbolInfo> {
        env.storage()
            .persistent()
            .get(&DataKey::Symbol(symbol.clone()))
    }

    fn _set_info(env: &Env, symbol: &Symbol, info: &SymbolInfo) {
        let key = DataKey::Symbol(symbol.clone());
        env.storage().persistent().set(&key, info);
        env.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_AMOUNT);
    }
}
