//! Tests for the Cycle Detector

use shuffle_period_core_rs::detector::{first_mismatch, matches_original};
use shuffle_period_core_rs::shuffle::{shuffle_pass, Pickup};
use shuffle_period_core_rs::{Card, Deck};

#[test]
fn test_fresh_deck_matches() {
    assert!(matches_original(&Deck::new(0)));
    assert!(matches_original(&Deck::new(1)));
    assert!(matches_original(&Deck::new(52)));
}

#[test]
fn test_single_card_matches_after_pass() {
    let mut deck = Deck::new(1);
    shuffle_pass(&mut deck, Pickup::Stacked);
    assert!(matches_original(&deck));
}

#[test]
fn test_swapped_pair_detected() {
    // [2, 1]: 2 should have no successor
    let mut deck = Deck::new(2);
    shuffle_pass(&mut deck, Pickup::Stacked);
    assert!(!matches_original(&deck));
    assert_eq!(first_mismatch(&deck), Some(Card::new(2)));
}

#[test]
fn test_first_broken_link_reported() {
    // [4, 2, 3, 1]: 2 → 3 holds, but 4 is first and broken
    let mut deck = Deck::new(4);
    shuffle_pass(&mut deck, Pickup::Stacked);
    assert_eq!(first_mismatch(&deck), Some(Card::new(4)));
}

#[test]
fn test_detector_agrees_with_order_equality() {
    // Walk a few periods and compare against plain order equality
    let original = Deck::new(11);
    let mut deck = original.clone();
    for _ in 0..60 {
        shuffle_pass(&mut deck, Pickup::Stacked);
        assert_eq!(
            matches_original(&deck),
            deck.cards() == original.cards(),
            "detector disagrees at {:?}",
            deck.cards()
        );
    }
}
