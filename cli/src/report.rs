//! Printable results
//!
//! Every command produces one of these, either as a sentence for people
//! or as JSON with `--json`.

use serde::Serialize;
use shuffle_period_core_rs::{compute_period_with, Permutation, Pickup, SimulationConfig};

/// Outcome of simulating one deck size
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodReport {
    pub num_cards: u16,
    pub pickup: Pickup,
    /// Passes needed, absent when the simulation stopped early
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u16>,
    /// Why the simulation stopped early
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PeriodReport {
    pub fn simulate(num_cards: u16, config: &SimulationConfig) -> Self {
        let (period, error) = match compute_period_with(num_cards, config) {
            Ok(period) => (Some(period), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            num_cards,
            pickup: config.pickup,
            period,
            error,
        }
    }
}

impl std::fmt::Display for PeriodReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.period, &self.error) {
            (Some(period), _) => write!(
                f,
                "{} iterations are needed to return to starting pattern.",
                period
            ),
            (None, Some(error)) => write!(f, "{} cards: {}", self.num_cards, error),
            (None, None) => write!(f, "{} cards: no result", self.num_cards),
        }
    }
}

/// Cycle structure of one pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub num_cards: u16,
    pub pickup: Pickup,
    /// Cycles on 1-based positions
    pub cycles: Vec<Vec<usize>>,
    /// lcm of the cycle lengths, absent if it does not fit in a u64
    pub order: Option<u64>,
}

impl AnalysisReport {
    pub fn analyze(num_cards: u16, pickup: Pickup) -> Self {
        let pass = Permutation::of_pass(num_cards, pickup);
        Self {
            num_cards,
            pickup,
            cycles: pass
                .cycles()
                .into_iter()
                .map(|cycle| cycle.into_iter().map(|p| p + 1).collect())
                .collect(),
            order: pass.order(),
        }
    }
}

impl std::fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} cards, {} pickup", self.num_cards, self.pickup)?;
        writeln!(f, "cycles: {}", self.cycles.len())?;
        for cycle in &self.cycles {
            let positions: Vec<String> = cycle.iter().map(|p| p.to_string()).collect();
            writeln!(f, "  length {:>5}: ({})", cycle.len(), positions.join(" "))?;
        }
        match self.order {
            Some(order) => write!(f, "order: {}", order),
            None => write!(f, "order: exceeds {}", u64::MAX),
        }
    }
}
