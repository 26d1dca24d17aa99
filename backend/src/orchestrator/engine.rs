//! Simulation Engine
//!
//! Drives a deck through repeated shuffle passes until it returns to its
//! original arrangement.
//!
//! # Architecture
//!
//! ```text
//! Init:       deck built by `new`; the first step starts the clock
//!             and moves on                   → Simulating (→ Done if N = 0)
//! Simulating: for each pass p:
//!   1. Poll cancellation and timeout
//!   2. Enforce the pass limit
//!   3. Advance the pass counter (overflow is an error)
//!   4. Shuffle Step
//!   5. Cycle Detector                         → Done on match
//! Done:       report p, drop the deck
//! ```
//!
//! # Example
//!
//! ```rust
//! use shuffle_period_core_rs::{Pickup, Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::default().with_pickup(Pickup::Stacked);
//! let mut simulation = Simulation::new(3, config).unwrap();
//!
//! let first = simulation.step().unwrap();
//! assert_eq!(first.pass, 1);
//! assert!(!first.restored);
//!
//! assert_eq!(simulation.run().unwrap(), 3);
//! ```

use crate::core::pass_counter::PassCounter;
use crate::detector;
use crate::models::deck::Deck;
use crate::orchestrator::interrupt::CancellationToken;
use crate::shuffle::{self, Pickup};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;

// ============================================================================
// Configuration Types
// ============================================================================

/// Simulation configuration
///
/// # Fields
///
/// * `pickup` - How the table pile becomes the next deck
/// * `max_passes` - Stop with an error after this many passes without a
///   match (`None` = bounded only by the 16-bit pass counter)
/// * `timeout_ms` - Wall-clock budget in milliseconds, polled once per pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Table pile pickup policy
    pub pickup: Pickup,

    /// Pass limit
    pub max_passes: Option<u16>,

    /// Timeout in milliseconds
    pub timeout_ms: Option<u64>,
}

impl SimulationConfig {
    pub fn with_pickup(mut self, pickup: Pickup) -> Self {
        self.pickup = pickup;
        self
    }

    pub fn with_max_passes(mut self, max_passes: u16) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    /// Set the wall-clock budget, rounded up to whole milliseconds
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = (timeout.as_nanos() + 999_999) / 1_000_000;
        self.timeout_ms = Some(millis.try_into().unwrap_or(u64::MAX));
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Reject bounds that could never let a simulation run
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.max_passes == Some(0) {
            return Err(SimulationError::InvalidConfig(
                "max_passes must be > 0".to_string(),
            ));
        }

        if self.timeout_ms == Some(0) {
            return Err(SimulationError::InvalidConfig(
                "timeout_ms must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Errors and Results
// ============================================================================

/// Simulation error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Configured pass limit reached before the original order came back
    #[error("Pass limit exceeded: no match within {limit} passes")]
    PassLimitExceeded { limit: u16 },

    /// The period does not fit the 16-bit pass counter
    #[error("Pass count overflow: a deck of {num_cards} cards needs more than 65535 passes")]
    PassCountOverflow { num_cards: u16 },

    /// Cancellation token fired
    #[error("Simulation cancelled after {passes} passes")]
    Cancelled { passes: u16 },

    /// Wall-clock budget exhausted
    #[error("Simulation timed out after {passes} passes ({timeout_ms} ms budget)")]
    TimedOut { passes: u16, timeout_ms: u64 },
}

/// Driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Building the deck
    Init,
    /// Passes in progress, original order not seen yet
    Simulating,
    /// Original order restored; the pass count is final
    Done,
}

/// Result of a single pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassResult {
    /// Pass number (1-based)
    pub pass: u16,

    /// Whether this pass restored the original arrangement
    pub restored: bool,
}

// ============================================================================
// Simulation
// ============================================================================

/// Owns one deck and runs it to its period
///
/// Every simulation builds its own deck; nothing is shared between
/// simulations, so independent runs may happen on any thread.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,

    /// Deck under simulation
    deck: Deck,

    /// Size requested at construction
    num_cards: u16,

    /// Completed passes
    passes: PassCounter,

    phase: Phase,

    /// Start of the wall-clock budget, set by the first step
    started: Option<Instant>,

    cancellation: Option<CancellationToken>,
}

impl Simulation {
    /// Validate `config` and build the deck
    ///
    /// The simulation starts in [`Phase::Init`]. The timeout clock does not
    /// run until the first [`step`](Self::step).
    pub fn new(num_cards: u16, config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        Ok(Self {
            config,
            deck: Deck::new(num_cards),
            num_cards,
            passes: PassCounter::new(),
            phase: Phase::Init,
            started: None,
            cancellation: None,
        })
    }

    /// Attach a cancellation token, polled before every pass
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn num_cards(&self) -> u16 {
        self.num_cards
    }

    /// Passes completed so far
    pub fn passes(&self) -> u16 {
        self.passes.current_pass()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    // ========================================================================
    // Pass Loop
    // ========================================================================

    /// Run one pass
    ///
    /// The first call leaves [`Phase::Init`]. A zero-card deck is already
    /// in its original order, so it goes straight to [`Phase::Done`] with
    /// 0 passes. Once the simulation is done, further calls do nothing and
    /// report the final pass again with `restored: true`.
    pub fn step(&mut self) -> Result<PassResult, SimulationError> {
        match self.phase {
            Phase::Done => {
                return Ok(PassResult {
                    pass: self.passes(),
                    restored: true,
                });
            }
            Phase::Init => {
                self.started = Some(Instant::now());
                if self.deck.is_empty() {
                    self.phase = Phase::Done;
                    return Ok(PassResult {
                        pass: 0,
                        restored: true,
                    });
                }
                self.phase = Phase::Simulating;
            }
            Phase::Simulating => {}
        }

        self.check_interrupts()?;

        if self.passes.has_reached(self.config.max_passes) {
            let limit = self.passes();
            log::warn!(
                "deck of {} cards not restored within {} passes",
                self.num_cards,
                limit
            );
            return Err(SimulationError::PassLimitExceeded { limit });
        }

        let pass = self
            .passes
            .advance_pass()
            .ok_or(SimulationError::PassCountOverflow {
                num_cards: self.num_cards,
            })?;

        shuffle::shuffle_pass(&mut self.deck, self.config.pickup);
        let restored = detector::matches_original(&self.deck);
        log::trace!("pass {}: restored={}", pass, restored);

        if restored {
            self.phase = Phase::Done;
        }

        Ok(PassResult { pass, restored })
    }

    /// Run passes until the original arrangement returns and report the
    /// period
    pub fn run(mut self) -> Result<u16, SimulationError> {
        log::debug!(
            "simulating {} cards ({} pickup, limit {:?}, timeout {:?})",
            self.num_cards,
            self.config.pickup,
            self.config.max_passes,
            self.config.timeout()
        );

        while self.phase != Phase::Done {
            self.step()?;
        }

        let period = self.passes();
        log::debug!("{} cards restored after {} passes", self.num_cards, period);
        Ok(period)
    }

    fn check_interrupts(&self) -> Result<(), SimulationError> {
        if let Some(token) = &self.cancellation {
            if token.is_cancelled() {
                log::warn!("simulation cancelled after {} passes", self.passes());
                return Err(SimulationError::Cancelled {
                    passes: self.passes(),
                });
            }
        }

        if let (Some(timeout), Some(started)) = (self.config.timeout(), self.started) {
            if started.elapsed() >= timeout {
                log::warn!("simulation timed out after {} passes", self.passes());
                return Err(SimulationError::TimedOut {
                    passes: self.passes(),
                    timeout_ms: self.config.timeout_ms.unwrap_or_default(),
                });
            }
        }

        Ok(())
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Number of passes for a deck of `num_cards` to return to its original
/// order, with the default configuration
///
/// # Example
/// ```
/// use shuffle_period_core_rs::compute_period;
///
/// assert_eq!(compute_period(0), Ok(0));
/// assert_eq!(compute_period(1), Ok(1));
/// assert_eq!(compute_period(52), Ok(510));
/// ```
pub fn compute_period(num_cards: u16) -> Result<u16, SimulationError> {
    compute_period_with(num_cards, &SimulationConfig::default())
}

/// [`compute_period`] with an explicit configuration
pub fn compute_period_with(
    num_cards: u16,
    config: &SimulationConfig,
) -> Result<u16, SimulationError> {
    Simulation::new(num_cards, config.clone())?.run()
}
