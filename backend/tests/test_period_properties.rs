//! Property tests: simulated period vs. permutation order
//!
//! The permutation order is computed from the cycle decomposition of a
//! single pass, so it never relies on repeated simulation.

use proptest::prelude::*;
use shuffle_period_core_rs::detector::matches_original;
use shuffle_period_core_rs::shuffle::{shuffle_pass, Permutation, Pickup};
use shuffle_period_core_rs::{compute_period_with, Deck, SimulationConfig, SimulationError};

fn pickup_strategy() -> impl Strategy<Value = Pickup> {
    prop_oneof![Just(Pickup::Stacked), Just(Pickup::Flipped)]
}

fn config(pickup: Pickup) -> SimulationConfig {
    SimulationConfig::default().with_pickup(pickup)
}

#[test]
fn test_period_equals_permutation_order_up_to_30() {
    for pickup in [Pickup::Stacked, Pickup::Flipped] {
        for num_cards in 1..=30u16 {
            let order = Permutation::of_pass(num_cards, pickup).order().unwrap();
            let period = compute_period_with(num_cards, &config(pickup)).unwrap();
            assert_eq!(
                u64::from(period),
                order,
                "{} cards, {} pickup",
                num_cards,
                pickup
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_period_matches_order(num_cards in 1u16..=120, pickup in pickup_strategy()) {
        let order = Permutation::of_pass(num_cards, pickup).order().unwrap();
        let result = compute_period_with(num_cards, &config(pickup));

        if order <= u64::from(u16::MAX) {
            prop_assert_eq!(result, Ok(order as u16));
        } else {
            prop_assert_eq!(result, Err(SimulationError::PassCountOverflow { num_cards }));
        }
    }

    #[test]
    fn prop_period_is_minimal(num_cards in 1u16..=60, pickup in pickup_strategy()) {
        let period = match compute_period_with(num_cards, &config(pickup)) {
            Ok(period) => period,
            Err(_) => return Ok(()),
        };
        prop_assert!(period >= 1);

        let mut deck = Deck::new(num_cards);
        for pass in 1..=period {
            shuffle_pass(&mut deck, pickup);
            prop_assert_eq!(
                matches_original(&deck),
                pass == period,
                "pass {} of period {}",
                pass,
                period
            );
        }
    }

    #[test]
    fn prop_pass_limit_below_period_fails(num_cards in 2u16..=60) {
        let period = compute_period_with(num_cards, &config(Pickup::Stacked)).unwrap();
        prop_assume!(period > 1);

        let bounded = config(Pickup::Stacked).with_max_passes(period - 1);
        prop_assert_eq!(
            compute_period_with(num_cards, &bounded),
            Err(SimulationError::PassLimitExceeded { limit: period - 1 })
        );
    }
}
