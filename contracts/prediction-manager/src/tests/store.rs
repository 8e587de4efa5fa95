//! Tests for live prediction slots.

use super::setup::{btc, Setup, BTC_PRICE, BTC_TIMESTAMP, ONE_DAY};
use crate::store;
use crate::types::{Direction, PriceData, Prediction};

fn prediction(setup: &Setup, duration: u64) -> Prediction {
    Prediction {
        user: setup.user.clone(),
        pred_timestamp: BTC_TIMESTAMP,
        symbol: btc(),
        direction: Direction::Long,
        duration,
        metadata: setup.metadata(),
        initial_price: PriceData {
            price: BTC_PRICE,
            timestamp: BTC_TIMESTAMP,
        },
        final_price: PriceData::unset(),
    }
}

fn durations(setup: &Setup) -> [Option<u64>; 4] {
    let at = |index| store::get(&setup.env, index).map(|p| p.duration);
    [at(0), at(1), at(2), at(3)]
}

#[test]
fn test_push_appends() {
    let setup = Setup::new(ONE_DAY);

    setup.env.as_contract(&setup.client.address, || {
        assert_eq!(store::len(&setup.env), 0);
        assert_eq!(store::push(&setup.env, &prediction(&setup, 2)), Ok(0));
        assert_eq!(store::push(&setup.env, &prediction(&setup, 3)), Ok(1));
        assert_eq!(store::len(&setup.env), 2);
        assert_eq!(store::get(&setup.env, 1), Some(prediction(&setup, 3)));
        assert_eq!(store::get(&setup.env, 2), None);
    });
}

#[test]
fn test_swap_remove_moves_last_into_gap() {
    let setup = Setup::new(ONE_DAY);

    setup.env.as_contract(&setup.client.address, || {
        for duration in [10, 20, 30, 40] {
            store::push(&setup.env, &prediction(&setup, duration)).unwrap();
        }

        let removed = store::swap_remove(&setup.env, 1).unwrap();
        assert_eq!(removed.duration, 20);
        assert_eq!(durations(&setup), [Some(10), Some(40), Some(30), None]);

        // Removing the last slot moves nothing
        let removed = store::swap_remove(&setup.env, 2).unwrap();
        assert_eq!(removed.duration, 30);
        assert_eq!(durations(&setup), [Some(10), Some(40), None, None]);

        store::swap_remove(&setup.env, 0).unwrap();
        store::swap_remove(&setup.env, 0).unwrap();
        assert_eq!(store::len(&setup.env), 0);
        assert_eq!(store::swap_remove(&setup.env, 0), None);
    });
}

#[test]
fn test_swap_remove_out_of_range() {
    let setup = Setup::new(ONE_DAY);

    setup.env.as_contract(&setup.client.address, || {
        store::push(&setup.env, &prediction(&setup, 10)).unwrap();
        assert_eq!(store::swap_remove(&setup.env, 1), None);
        assert_eq!(store::len(&setup.env), 1);
    });
}
