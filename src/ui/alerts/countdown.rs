// SPDX-License-Identifier: MPL-2.0
//! Auto-hide countdown and the progress indicator that mirrors it.
//!
//! Each non-sticky alert owns exactly one [`Countdown`]. Starting it again
//! replaces whatever was pending, so there is never more than one live
//! deadline per alert. Pausing forgets the elapsed time: resuming always
//! grants the full delay again.

use std::time::{Duration, Instant};

use crate::domain::alert::AutoHideDelay;

#[derive(Debug, Clone, Copy, PartialEq)]
enum TimerState {
    Running { started_at: Instant },
    Paused,
    /// Dismissal began; the progress indicator stays where it was.
    Cancelled { remaining: f32 },
}

/// Per-alert auto-hide timer.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    delay: AutoHideDelay,
    state: TimerState,
    /// Number of times the countdown was (re)started.
    restarts: u32,
}

impl Countdown {
    /// Creates a countdown that is already running.
    #[must_use]
    pub fn started(delay: AutoHideDelay, now: Instant) -> Self {
        Self {
            delay,
            state: TimerState::Running { started_at: now },
            restarts: 1,
        }
    }

    /// (Re)starts the full-length countdown, replacing any pending one.
    ///
    /// Has no effect once the countdown was cancelled.
    pub fn start(&mut self, now: Instant) {
        if self.is_cancelled() {
            return;
        }
        self.state = TimerState::Running { started_at: now };
        self.restarts += 1;
    }

    /// Stops the countdown and resets the indicator to full.
    ///
    /// Returns false when there was nothing running to pause.
    pub fn pause(&mut self) -> bool {
        match self.state {
            TimerState::Running { .. } => {
                self.state = TimerState::Paused;
                true
            }
            TimerState::Paused | TimerState::Cancelled { .. } => false,
        }
    }

    /// Same as [`start`](Self::start): no partial time is remembered.
    pub fn resume(&mut self, now: Instant) {
        self.start(now);
    }

    /// Cancels for good, freezing the indicator at its current value.
    pub fn cancel(&mut self, now: Instant) {
        if !self.is_cancelled() {
            let remaining = self.remaining_fraction(now);
            self.state = TimerState::Cancelled { remaining };
        }
    }

    /// Instant at which the running countdown expires.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            TimerState::Running { started_at } => Some(started_at + self.delay.as_duration()),
            TimerState::Paused | TimerState::Cancelled { .. } => None,
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|deadline| now >= deadline)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(self.state, TimerState::Paused)
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self.state, TimerState::Cancelled { .. })
    }

    #[must_use]
    pub fn delay(&self) -> AutoHideDelay {
        self.delay
    }

    #[must_use]
    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    /// Remaining share of the delay, from 1.0 (just started) to 0.0.
    ///
    /// This drives the progress indicator width; paused reads as full.
    #[must_use]
    pub fn remaining_fraction(&self, now: Instant) -> f32 {
        match self.state {
            TimerState::Running { started_at } => {
                let total = self.delay.as_duration();
                if total.is_zero() {
                    return 0.0;
                }
                let elapsed = now.saturating_duration_since(started_at).min(total);
                1.0 - elapsed.as_secs_f32() / total.as_secs_f32()
            }
            TimerState::Paused => 1.0,
            TimerState::Cancelled { remaining } => remaining,
        }
    }

    /// Time left before expiry, if running.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
