// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A single-slot debouncer.
//!
//! Each trigger replaces whatever was pending and restarts the quiet period.
//! Only when nothing has been triggered for `interval` does [`Debouncer::poll`]
//! hand the latest value out, once.
//!
//! The debouncer never reads a clock. Callers pass `now` in, which keeps it
//! usable from a browser timer callback, a terminal event loop or a test with a
//! fake clock.
//!
//! ```
//! use livesuggest::Debouncer;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut debouncer = Debouncer::new(Duration::from_millis(300));
//!
//! debouncer.trigger("kub", start);
//! debouncer.trigger("kube", start + Duration::from_millis(100));
//!
//! assert_eq!(debouncer.poll(start + Duration::from_millis(350)), None);
//! assert_eq!(debouncer.poll(start + Duration::from_millis(400)), Some("kube"));
//! assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
//! ```

use std::time::{Duration, Instant};

/// Quiet period used by the suggestion panel.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    interval: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(interval: Duration) -> Self {
        Debouncer {
            interval,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arm (or re-arm) the pending slot with `value`.
    pub fn trigger(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Take the pending value if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = match &self.pending {
            Some((_, armed_at)) => now.saturating_duration_since(*armed_at) >= self.interval,
            None => false,
        };
        if ready {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// When the pending value becomes ready, if there is one.
    ///
    /// `None` also when the deadline lies past what `Instant` can represent;
    /// such a value never becomes ready.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .and_then(|(_, armed_at)| armed_at.checked_add(self.interval))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without firing.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Debouncer::new(DEFAULT_DEBOUNCE)
    }
}
