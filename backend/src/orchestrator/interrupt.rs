//! Cooperative interruption
//!
//! Periods grow quickly with the deck size, so a caller may need to stop a
//! run from outside. The driver polls the token once per pass; nothing is
//! preempted mid-pass.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag
///
/// Clones observe the same flag, so one clone can be handed to the
/// simulation while another stays with the caller (or a signal handler).
///
/// # Example
/// ```
/// use shuffle_period_core_rs::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
///
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that any simulation holding this token stops before its
    /// next pass
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_from_another_thread() {
        let token = CancellationToken::new();
        let handle = token.clone();
        std::thread::spawn(move || handle.cancel())
            .join()
            .expect("cancel thread");
        assert!(token.is_cancelled());
    }
}
