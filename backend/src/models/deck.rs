//! Deck model
//!
//! A deck holds its cards in current front-to-back order (front = top)
//! together with the successor each card had when the deck was built.
//!
//! # Critical Invariants
//!
//! 1. **Fixed membership**: the deck always holds exactly the cards `1..=N`
//! 2. **Fixed original successors**: recorded once at construction, never
//!    updated; the last card's original successor is `None`
//! 3. **Index-based**: successors are looked up by card index, no links
//!    between cards are owned or mutated

use crate::models::card::Card;

/// An ordered deck of N distinct cards
///
/// # Example
///
/// ```rust
/// use shuffle_period_core_rs::{Card, Deck};
///
/// let deck = Deck::new(3);
/// assert_eq!(deck.len(), 3);
/// assert_eq!(deck.top(), Some(Card::new(1)));
/// assert_eq!(deck.original_successor(Card::new(1)), Some(Card::new(2)));
/// assert_eq!(deck.original_successor(Card::new(3)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Current arrangement, front (top) first
    cards: Vec<Card>,

    /// Original successor of each card, indexed by `Card::index()`
    original_next: Vec<Option<Card>>,
}

impl Deck {
    /// Build a deck of `num_cards` cards in ascending order, card 1 on top
    ///
    /// `num_cards == 0` yields the empty deck.
    pub fn new(num_cards: u16) -> Self {
        let cards: Vec<Card> = (1..=num_cards).map(Card::new).collect();

        let mut original_next = vec![None; cards.len()];
        for pair in cards.windows(2) {
            original_next[pair[0].index()] = Some(pair[1]);
        }

        Self {
            cards,
            original_next,
        }
    }

    /// Number of cards in the deck
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True for the zero-card deck
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Current arrangement, front (top) first
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card currently on top
    pub fn top(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// The card that followed `card` when the deck was built
    ///
    /// # Panics
    /// Panics if `card` does not belong to this deck
    pub fn original_successor(&self, card: Card) -> Option<Card> {
        self.original_next[card.index()]
    }

    /// Each card paired with the card currently following it
    ///
    /// # Example
    ///
    /// ```rust
    /// use shuffle_period_core_rs::{Card, Deck};
    ///
    /// let deck = Deck::new(2);
    /// let links: Vec<_> = deck.current_successors().collect();
    /// assert_eq!(
    ///     links,
    ///     vec![(Card::new(1), Some(Card::new(2))), (Card::new(2), None)]
    /// );
    /// ```
    pub fn current_successors(&self) -> impl Iterator<Item = (Card, Option<Card>)> + '_ {
        self.cards
            .iter()
            .enumerate()
            .map(move |(i, card)| (*card, self.cards.get(i + 1).copied()))
    }

    /// Take the current arrangement out for a pass, leaving the deck empty
    ///
    /// Must be followed by [`Deck::restore`] with a rearrangement of the
    /// same cards.
    pub(crate) fn take_cards(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Install the arrangement produced by a pass
    pub(crate) fn restore(&mut self, cards: Vec<Card>) {
        debug_assert_eq!(
            cards.len(),
            self.original_next.len(),
            "a pass must keep every card"
        );
        self.cards = cards;
    }
}
