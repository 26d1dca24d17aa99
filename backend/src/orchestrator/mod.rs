//! Orchestrator - simulation driver
//!
//! Owns the deck and runs the pass loop until the original arrangement
//! comes back. See `engine.rs` for the state machine.

pub mod engine;
pub mod interrupt;


// Re-export main types for convenience
pub use engine::{
    compute_period, compute_period_with, PassResult, Phase, Simulation, SimulationConfig,
    SimulationError,
};
pub use interrupt::CancellationToken;
