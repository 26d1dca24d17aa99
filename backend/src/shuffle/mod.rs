//! Shuffle Step
//!
//! One pass deals the whole deck from the top, alternating between two
//! moves:
//!
//! 1. **Table**: the top card goes onto the table pile
//! 2. **Bottom**: the top card goes under the rest of the deck
//!
//! The first move of every pass is Table, and the last remaining card
//! always goes to the table. When the deck is empty the table pile is
//! picked up according to the [`Pickup`] policy and becomes the new deck.
//!
//! A pass never looks at card values, so every pass applies the same
//! position permutation (see [`permutation`]).
//!
//! # Example
//!
//! ```rust
//! use shuffle_period_core_rs::shuffle::{deal, Pickup};
//!
//! // 1 → table, 2 → bottom, 3 → table, 4 → bottom, 2 → table, 4 → table
//! assert_eq!(deal(vec![1, 2, 3, 4], Pickup::Stacked), vec![4, 2, 3, 1]);
//! assert_eq!(deal(vec![1, 2, 3, 4], Pickup::Flipped), vec![1, 3, 2, 4]);
//! ```

pub mod permutation;

pub use permutation::Permutation;

use crate::models::deck::Deck;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How the table pile becomes the next deck
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pickup {
    /// Pick the pile up as it lies: the last card placed is the new top
    #[default]
    Stacked,

    /// Flip the pile over: the first card placed is the new top
    Flipped,
}

impl Pickup {
    /// Turn a table pile (listed bottom first, in placement order) into a
    /// front-first deck order
    fn pick_up<T>(self, mut pile: Vec<T>) -> Vec<T> {
        match self {
            Pickup::Stacked => {
                pile.reverse();
                pile
            }
            Pickup::Flipped => pile,
        }
    }
}

impl std::fmt::Display for Pickup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pickup::Stacked => write!(f, "stacked"),
            Pickup::Flipped => write!(f, "flipped"),
        }
    }
}

/// Next move in the alternating deal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Table,
    Bottom,
}

/// Run one pass over `cards` (front first) and return the next order
///
/// Works on anything: the deck uses it on cards, the permutation
/// extraction on positions.
pub fn deal<T>(cards: Vec<T>, pickup: Pickup) -> Vec<T> {
    let mut hand: VecDeque<T> = cards.into();
    let mut pile = Vec::with_capacity(hand.len());
    let mut next = Move::Table;

    while let Some(card) = hand.pop_front() {
        // An empty hand here means this was the only card left
        if next == Move::Table || hand.is_empty() {
            pile.push(card);
            next = Move::Bottom;
        } else {
            hand.push_back(card);
            next = Move::Table;
        }
    }

    pickup.pick_up(pile)
}

/// Apply one pass to `deck` in place
///
/// # Example
///
/// ```rust
/// use shuffle_period_core_rs::shuffle::{shuffle_pass, Pickup};
/// use shuffle_period_core_rs::{Card, Deck};
///
/// let mut deck = Deck::new(3);
/// shuffle_pass(&mut deck, Pickup::Stacked);
/// assert_eq!(deck.cards(), &[Card::new(2), Card::new(3), Card::new(1)]);
/// ```
pub fn shuffle_pass(deck: &mut Deck, pickup: Pickup) {
    let cards = deck.take_cards();
    deck.restore(deal(cards, pickup));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_empty() {
        assert!(deal(Vec::<u16>::new(), Pickup::Stacked).is_empty());
    }

    #[test]
    fn test_deal_single_card() {
        assert_eq!(deal(vec![7], Pickup::Stacked), vec![7]);
        assert_eq!(deal(vec![7], Pickup::Flipped), vec![7]);
    }

    #[test]
    fn test_last_card_goes_to_table_even_on_bottom_move() {
        // 1 → table, then 2 is alone with Bottom pending
        assert_eq!(deal(vec![1, 2], Pickup::Flipped), vec![1, 2]);
        assert_eq!(deal(vec![1, 2], Pickup::Stacked), vec![2, 1]);
    }

    #[test]
    fn test_policies_are_mirror_images() {
        let cards: Vec<u16> = (1..=17).collect();
        let mut stacked = deal(cards.clone(), Pickup::Stacked);
        stacked.reverse();
        assert_eq!(stacked, deal(cards, Pickup::Flipped));
    }

    #[test]
    fn test_pickup_display() {
        assert_eq!(Pickup::Stacked.to_string(), "stacked");
        assert_eq!(Pickup::Flipped.to_string(), "flipped");
        assert_eq!(Pickup::default(), Pickup::Stacked);
    }
}
