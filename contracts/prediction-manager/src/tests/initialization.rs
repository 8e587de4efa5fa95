//! Tests for one-time configuration and behaviour before it.

use super::setup::{Setup, ONE_DAY};
use crate::contract::{PredictionManagerContract, PredictionManagerContractClient};
use crate::errors::ContractError;
use crate::types::{Direction, UserScore};
use soroban_sdk::{symbol_short, testutils::Address as _, Address, Env, String};

fn uninitialized() -> (Env, PredictionManagerContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(PredictionManagerContract, ());
    let client = PredictionManagerContractClient::new(&env, &contract_id);
    (env, client)
}

#[test]
fn test_initialize_stores_config() {
    let setup = Setup::new(7 * ONE_DAY);

    assert_eq!(setup.client.get_admin(), Some(setup.admin.clone()));
    assert_eq!(setup.client.get_price_feed(), Some(setup.feed_id.clone()));
    assert_eq!(setup.client.get_tolerance(), Some(7 * ONE_DAY));
    assert_eq!(setup.client.num_live_predictions(), 0);
}

#[test]
fn test_initialize_twice_fails() {
    let setup = Setup::new(ONE_DAY);
    let other = Address::generate(&setup.env);

    let result = setup
        .client
        .try_initialize(&other, &setup.feed_id, &(2 * ONE_DAY));
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));

    // Original settings survive
    assert_eq!(setup.client.get_admin(), Some(setup.admin.clone()));
    assert_eq!(setup.client.get_tolerance(), Some(ONE_DAY));
}

#[test]
fn test_getters_before_initialize() {
    let (_env, client) = uninitialized();

    assert_eq!(client.get_admin(), None);
    assert_eq!(client.get_price_feed(), None);
    assert_eq!(client.get_tolerance(), None);
    assert_eq!(client.num_live_predictions(), 0);
}

#[test]
fn test_check_upkeep_before_initialize() {
    let (_env, client) = uninitialized();

    assert_eq!(client.check_upkeep(), (false, (0, 0)));
}

#[test]
fn test_writes_before_initialize_fail() {
    let (env, client) = uninitialized();
    let user = Address::generate(&env);

    assert_eq!(
        client.try_add_user(&user),
        Err(Ok(ContractError::NotInitialized))
    );
    assert_eq!(
        client.try_remove_user(&user),
        Err(Ok(ContractError::NotInitialized))
    );
    assert_eq!(
        client.try_create_prediction(
            &user,
            &0,
            &symbol_short!("BTC"),
            &Direction::Long,
            &ONE_DAY,
            &String::from_str(&env, "ipfsCID"),
        ),
        Err(Ok(ContractError::NotInitialized))
    );
    assert_eq!(
        client.try_perform_upkeep(&(0, 0)),
        Err(Ok(ContractError::NotInitialized))
    );
}

#[test]
fn test_unknown_user_has_zero_score() {
    let setup = Setup::new(ONE_DAY);
    let stranger = Address::generate(&setup.env);

    assert_eq!(setup.client.get_user_score(&stranger), UserScore::default());
    assert!(!setup.client.is_user(&stranger));
}
