//! Shuffle Period Core - Rust Engine
//!
//! Counts how many passes of the table/bottom shuffle bring a deck of N
//! cards back to its original order.
//!
//! # Architecture
//!
//! - **core**: Pass counting
//! - **models**: Domain types (Card, Deck)
//! - **shuffle**: The single-pass Shuffle Step and its position permutation
//! - **detector**: Cycle Detector (back to the original arrangement?)
//! - **orchestrator**: Simulation Driver (pass loop, limits, interruption)
//!
//! # Critical Invariants
//!
//! 1. A deck never gains or loses cards; only their order changes
//! 2. Original successors are recorded once, at construction
//! 3. Pass counts are u16 and never wrap; overflow is an error
//! 4. No global state: every simulation owns its own deck
//!
//! # Example
//!
//! ```rust
//! use shuffle_period_core_rs::{compute_period, compute_period_with, Pickup, SimulationConfig};
//!
//! assert_eq!(compute_period(2), Ok(2));
//!
//! let flipped = SimulationConfig::default().with_pickup(Pickup::Flipped);
//! assert_eq!(compute_period_with(2, &flipped), Ok(1));
//! ```

// Module declarations
pub mod core;
pub mod detector;
pub mod models;
pub mod orchestrator;
pub mod shuffle;

// Re-exports for convenience
pub use crate::core::pass_counter::PassCounter;
pub use models::{card::Card, deck::Deck};
pub use orchestrator::{
    compute_period, compute_period_with, CancellationToken, PassResult, Phase, Simulation,
    SimulationConfig, SimulationError,
};
pub use shuffle::{Permutation, Pickup};
