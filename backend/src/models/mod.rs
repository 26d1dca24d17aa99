//! Domain models for the shuffle simulator

pub mod card;
pub mod deck;

// Re-exports
pub use card::Card;
pub use deck::Deck;
