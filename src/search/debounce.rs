//! Cancel-and-replace debounce timer bookkeeping.
//!
//! Zellij timers cannot be cancelled once set, so cancellation is done with
//! generation tokens. Every [`Debouncer::arm`] call hands out a fresh token and
//! makes it the only one allowed to fire. The host fires timers of equal length
//! in the order they were set, so each `Timer` event is matched to the oldest
//! outstanding token; if that token has been superseded the tick is swallowed.

use std::collections::VecDeque;
use std::time::Duration;

/// Default quiet period before a typed query is searched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Tracks host timers armed for debouncing and decides which one may fire.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    next_token: u64,
    /// Tokens of timers set on the host that have not fired yet, oldest first.
    outstanding: VecDeque<u64>,
    /// The only token allowed to fire, `None` when cancelled or already fired.
    live: Option<u64>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_token: 0,
            outstanding: VecDeque::new(),
            live: None,
        }
    }

    /// Quiet period each armed timer waits for.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms a new timer, superseding any pending one.
    ///
    /// The caller must set exactly one host timer of [`Self::delay`] for every
    /// call.
    pub fn arm(&mut self) -> u64 {
        self.next_token += 1;
        let token = self.next_token;
        self.outstanding.push_back(token);
        self.live = Some(token);
        tracing::trace!(token, outstanding = self.outstanding.len(), "debounce armed");
        token
    }

    /// Cancels the pending timer; its eventual tick is ignored.
    pub fn cancel(&mut self) {
        if let Some(token) = self.live.take() {
            tracing::trace!(token, "debounce cancelled");
        }
    }

    /// Consumes one host timer tick.
    ///
    /// Returns `true` only when the tick belongs to the most recently armed,
    /// uncancelled timer.
    ///
    /// Ticks are matched to tokens by arrival order, not identity. Should the
    /// host ever deliver ticks out of order, the live timer's tick lands on an
    /// older slot and is swallowed, and the live slot is claimed by a later
    /// tick instead. The search is then late by at most one delay, and it
    /// still fires only once because `live` is cleared on the first match.
    pub fn fire(&mut self) -> bool {
        let Some(token) = self.outstanding.pop_front() else {
            tracing::debug!("timer tick with no outstanding debounce");
            return false;
        };

        if self.live == Some(token) {
            self.live = None;
            true
        } else {
            tracing::trace!(token, live = ?self.live, "stale debounce tick ignored");
            false
        }
    }

    /// Whether a timer is armed and has not fired or been cancelled.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.live.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_arm_fires_once() {
        let mut d = Debouncer::default();
        d.arm();
        assert!(d.is_pending());
        assert!(d.fire());
        assert!(!d.is_pending());
        assert!(!d.fire());
    }

    #[test]
    fn burst_collapses_to_last_timer() {
        let mut d = Debouncer::default();
        d.arm();
        d.arm();
        d.arm();

        assert!(!d.fire());
        assert!(!d.fire());
        assert!(d.fire());
    }

    #[test]
    fn cancel_swallows_pending_tick() {
        let mut d = Debouncer::default();
        d.arm();
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.fire());
    }

    #[test]
    fn rearm_after_cancel_only_fires_new_timer() {
        let mut d = Debouncer::default();
        d.arm();
        d.cancel();
        d.arm();

        assert!(!d.fire());
        assert!(d.fire());
    }

    #[test]
    fn live_token_fires_at_most_once_whatever_the_tick_count() {
        let mut d = Debouncer::default();
        d.arm();
        d.arm();
        d.arm();

        let fired = (0..6).filter(|_| d.fire()).count();
        assert_eq!(fired, 1);
        assert!(!d.is_pending());
    }

    #[test]
    fn spurious_tick_is_ignored() {
        let mut d = Debouncer::new(Duration::from_millis(100));
        assert!(!d.fire());
        assert_eq!(d.delay(), Duration::from_millis(100));
    }
}
