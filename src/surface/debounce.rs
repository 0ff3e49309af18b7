//! Search input debouncing
//!
//! Re-rendering on every keystroke is wasted work while the user is still
//! typing, so search input is debounced: each new submission cancels the
//! pending one and restarts the idle window. Emission happens once, with the
//! latest value, after the window elapses with no further input. This is
//! debounce (reset-on-new-input), not throttling - a steady typist delays
//! emission indefinitely.
//!
//! Category and segment changes do not go through this path; they re-render
//! immediately.

use std::future;
use tokio::time::{sleep_until, Duration, Instant};

/// Idle window after the last keystroke before a search re-render
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(120);

/// Reset-on-input debouncer for a single pending value
///
/// Designed for a `select!` event loop: call [`submit`](Debouncer::submit)
/// on every input and poll [`ready`](Debouncer::ready) as one of the select
/// arms. `ready` stays pending forever while nothing is queued, so it never
/// wins the race spuriously.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(Instant, String)>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: None,
        }
    }

    /// Queue a value, replacing any pending one and restarting the window
    pub fn submit(&mut self, value: String) {
        self.pending = Some((Instant::now() + self.delay, value));
    }

    /// Whether nothing is waiting to be emitted
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    /// Wait for the idle window to elapse, then take the pending value
    ///
    /// Pending forever when nothing is queued. Cancel-safe: dropping this
    /// future (as `select!` does when another arm wins) leaves the queued
    /// value and its deadline in place.
    pub async fn ready(&mut self) -> String {
        match self.pending {
            Some((deadline, _)) => {
                sleep_until(deadline).await;
                // The deadline passed with no newer submit; emit.
                self.pending.take().map(|(_, value)| value).unwrap_or_default()
            }
            None => future::pending().await,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, timeout};

    #[tokio::test(start_paused = true)]
    async fn test_emits_after_idle_window() {
        let mut debouncer = Debouncer::default();
        debouncer.submit("savings".to_string());

        let value = debouncer.ready().await;
        assert_eq!(value, "savings");
        assert!(debouncer.is_idle());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_inputs_emit_once_with_latest_value() {
        let mut debouncer = Debouncer::default();

        // Three keystrokes 25ms apart - well inside the 120ms window.
        debouncer.submit("s".to_string());
        advance(Duration::from_millis(25)).await;
        debouncer.submit("sa".to_string());
        advance(Duration::from_millis(25)).await;
        debouncer.submit("sav".to_string());

        // 119ms after the last keystroke: still waiting.
        let early = timeout(Duration::from_millis(119), debouncer.ready()).await;
        assert!(early.is_err());

        // The window completes from the LAST keystroke, not the first.
        let value = debouncer.ready().await;
        assert_eq!(value, "sav");

        // Exactly one emission: the queue is now empty.
        assert!(debouncer.is_idle());
        let after = timeout(Duration::from_millis(500), debouncer.ready()).await;
        assert!(after.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_debouncer_never_emits() {
        let mut debouncer = Debouncer::default();
        let result = timeout(Duration::from_secs(10), debouncer.ready()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_wait_keeps_pending_value() {
        let mut debouncer = Debouncer::default();
        debouncer.submit("loan".to_string());

        // A select! losing arm drops the future mid-wait.
        let cancelled = timeout(Duration::from_millis(60), debouncer.ready()).await;
        assert!(cancelled.is_err());
        assert!(!debouncer.is_idle());

        // The original deadline still applies.
        let value = debouncer.ready().await;
        assert_eq!(value, "loan");
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_emissions_each_get_their_own_window() {
        let mut debouncer = Debouncer::default();

        debouncer.submit("first".to_string());
        assert_eq!(debouncer.ready().await, "first");

        debouncer.submit("second".to_string());
        assert_eq!(debouncer.ready().await, "second");
    }
}
