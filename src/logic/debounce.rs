//! Trailing-edge debounce for interactive search input.
//!
//! The query engine itself is not time-gated; this is the contract that
//! bounds how often it runs while the user is typing. New input replaces the
//! pending query and restarts the window, so only the last value of a burst
//! is ever released. Purely clock-injected to stay testable.

use std::time::{Duration, Instant};

/// Debounce window for search input: the pending query is released only
/// after input has been quiet this long.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// Trailing-edge debouncer for a single text input.
#[derive(Debug)]
pub struct Debouncer {
    /// Quiet period required before the pending value is released.
    window: Duration,
    /// Latest submitted value, not yet released.
    pending: Option<String>,
    /// Time of the latest submit.
    last_change: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with an explicit window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            last_change: None,
        }
    }

    /// Debouncer with the standard search window.
    #[must_use]
    pub const fn search() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }

    /// What: Record new input, cancelling any pending invocation.
    ///
    /// Inputs:
    /// - `text`: Current input value.
    /// - `now`: Submission time.
    ///
    /// Output:
    /// - Replaces the pending value and restarts the quiet window.
    pub fn submit(&mut self, text: &str, now: Instant) {
        self.pending = Some(text.to_string());
        self.last_change = Some(now);
    }

    /// What: Release the pending value once the window has elapsed.
    ///
    /// Inputs:
    /// - `now`: Poll time.
    ///
    /// Output:
    /// - `Some(query)` exactly once per quiet period; `None` while input is
    ///   still settling or nothing is pending.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let changed = self.last_change?;
        if now.saturating_duration_since(changed) < self.window {
            return None;
        }
        self.last_change = None;
        self.pending.take()
    }

    /// Whether nothing is waiting to be released.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}
