//! Card model
//!
//! A card is identified by the position it held when the deck was built:
//! label 1 was on top, label N at the bottom.

use serde::{Deserialize, Serialize};

/// A labeled card in `[1, N]`
///
/// # Example
/// ```
/// use shuffle_period_core_rs::Card;
///
/// let card = Card::new(3);
/// assert_eq!(card.label(), 3);
/// assert_eq!(card.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card(u16);

impl Card {
    /// Create a card from its 1-based label
    ///
    /// # Panics
    /// Panics if `label` is 0
    pub fn new(label: u16) -> Self {
        assert!(label > 0, "card labels start at 1");
        Self(label)
    }

    /// Get the card's label
    pub fn label(&self) -> u16 {
        self.0
    }

    /// Position this card held when the deck was built (0 = top)
    pub fn index(&self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl From<Card> for u16 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "card labels start at 1")]
    fn test_zero_label_panics() {
        Card::new(0);
    }

    #[test]
    fn test_index_is_zero_based() {
        assert_eq!(Card::new(1).index(), 0);
        assert_eq!(Card::new(u16::MAX).index(), usize::from(u16::MAX) - 1);
    }

    #[test]
    fn test_cards_order_by_label() {
        assert!(Card::new(2) < Card::new(10));
    }
}
