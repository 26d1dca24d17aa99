//! Pass counting for the simulation
//!
//! The simulation advances in discrete passes. The count is bounded by the
//! 16-bit range; running past it is reported, never wrapped.

use serde::{Deserialize, Serialize};

/// Counts completed shuffle passes
///
/// # Example
/// ```
/// use shuffle_period_core_rs::PassCounter;
///
/// let mut passes = PassCounter::new();
/// assert_eq!(passes.current_pass(), 0);
///
/// passes.advance_pass().unwrap();
/// assert_eq!(passes.current_pass(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassCounter {
    /// Passes completed since the deck was built
    current_pass: u16,
}

impl PassCounter {
    /// Create a counter at pass 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one pass
    ///
    /// Returns the new pass number, or `None` if the count would leave
    /// the 16-bit range. The counter is unchanged on overflow.
    ///
    /// # Example
    /// ```
    /// use shuffle_period_core_rs::PassCounter;
    ///
    /// let mut passes = PassCounter::new();
    /// assert_eq!(passes.advance_pass(), Some(1));
    /// assert_eq!(passes.advance_pass(), Some(2));
    /// ```
    pub fn advance_pass(&mut self) -> Option<u16> {
        let next = self.current_pass.checked_add(1)?;
        self.current_pass = next;
        Some(next)
    }

    /// Get the number of completed passes
    pub fn current_pass(&self) -> u16 {
        self.current_pass
    }

    /// Check whether `limit` passes have already been completed
    ///
    /// `None` means unbounded and never reports reached.
    ///
    /// # Example
    /// ```
    /// use shuffle_period_core_rs::PassCounter;
    ///
    /// let mut passes = PassCounter::new();
    /// passes.advance_pass();
    /// assert!(passes.has_reached(Some(1)));
    /// assert!(!passes.has_reached(Some(2)));
    /// assert!(!passes.has_reached(None));
    /// ```
    pub fn has_reached(&self, limit: Option<u16>) -> bool {
        limit.map_or(false, |limit| self.current_pass >= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_leaves_counter_unchanged() {
        let mut passes = PassCounter {
            current_pass: u16::MAX,
        };
        assert_eq!(passes.advance_pass(), None);
        assert_eq!(passes.current_pass(), u16::MAX);
    }

    #[test]
    fn test_zero_limit_reached_immediately() {
        let passes = PassCounter::new();
        assert!(passes.has_reached(Some(0)));
    }
}
