//! Cycle Detector
//!
//! Decides whether a deck is back in its original arrangement by comparing
//! successor links rather than whole orders:
//!
//! - every card's current successor must equal its original successor
//! - the last card must have no successor, as it had none originally
//!
//! If all links match, the arrangement is the original one: the deck holds
//! every card exactly once, so the chain of matching links starting at the
//! current top can only be the original chain.
//!
//! # Example
//!
//! ```rust
//! use shuffle_period_core_rs::detector::{first_mismatch, matches_original};
//! use shuffle_period_core_rs::shuffle::{shuffle_pass, Pickup};
//! use shuffle_period_core_rs::{Card, Deck};
//!
//! let mut deck = Deck::new(3);
//! assert!(matches_original(&deck));
//!
//! shuffle_pass(&mut deck, Pickup::Stacked); // [2, 3, 1]
//! assert!(!matches_original(&deck));
//! // 2 → 3 still holds, 3 → 1 does not
//! assert_eq!(first_mismatch(&deck), Some(Card::new(3)));
//! ```

use crate::models::{Card, Deck};

/// True iff every current successor link equals the original one
///
/// Stops at the first broken link. The empty deck matches.
pub fn matches_original(deck: &Deck) -> bool {
    first_mismatch(deck).is_none()
}

/// The first card, from the top, whose current successor differs from its
/// original successor
pub fn first_mismatch(deck: &Deck) -> Option<Card> {
    deck.current_successors()
        .find(|(card, next)| deck.original_successor(*card) != *next)
        .map(|(card, _)| card)
}
