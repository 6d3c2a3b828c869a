// SPDX-License-Identifier: MPL-2.0
//! Alert identity and timing newtypes.

use std::fmt;
use std::time::Duration;

// =============================================================================
// Timing Constants
// =============================================================================

/// Fixed alert animation and countdown durations.
pub mod timing {
    /// Default auto-hide delay in milliseconds.
    pub const DEFAULT_AUTO_HIDE_MS: u64 = 5000;
    /// Duration of the fade-in transition in milliseconds.
    pub const FADE_IN_MS: u64 = 300;
    /// Duration of the fade-out transition in milliseconds.
    pub const FADE_OUT_MS: u64 = 300;
}

// =============================================================================
// AutoHideDelay
// =============================================================================

/// How long a non-sticky alert stays on screen before it starts fading out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AutoHideDelay(Duration);

impl AutoHideDelay {
    /// Creates a delay from whole milliseconds.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns the delay in whole milliseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }

    /// Returns true for a zero-length delay.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl Default for AutoHideDelay {
    fn default() -> Self {
        Self::from_millis(timing::DEFAULT_AUTO_HIDE_MS)
    }
}

impl From<Duration> for AutoHideDelay {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

// =============================================================================
// AlertId
// =============================================================================

/// Process-unique identifier of one alert instance.
///
/// Only used to route host events (hover, close) back to their alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

impl AlertId {
    /// Allocates the next identifier.
    #[must_use]
    pub fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alert#{}", self.0)
    }
}
