// SPDX-License-Identifier: MPL-2.0
//! Built-in alert defaults.
//!
//! These form the bottom layer of option resolution; the configuration
//! file and per-call options override them field by field.
//!
//! # Categories
//!
//! - **Content**: header and body text
//! - **Behavior**: sticky and progress-bar switches
//! - **Timing**: auto-hide delay and fade durations
//! - **Diagnostics**: event log capacity

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Header shown when no title is given.
pub const DEFAULT_TITLE: &str = "Alert";

/// Body shown when no message is given.
pub const DEFAULT_MESSAGE: &str = "Your attention is required";

// ==========================================================================
// Behavior Defaults
// ==========================================================================

/// Alerts dismiss themselves unless asked otherwise.
pub const DEFAULT_STICKY: bool = false;

/// Countdown strip is shown for non-sticky alerts.
pub const DEFAULT_PROGRESS_BAR: bool = true;

// ==========================================================================
// Timing Defaults
// ==========================================================================

pub use crate::domain::alert::timing::{DEFAULT_AUTO_HIDE_MS, FADE_IN_MS, FADE_OUT_MS};

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

pub use crate::domain::diagnostics::event_capacity_bounds::DEFAULT as DEFAULT_EVENT_CAPACITY;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_defaults_are_not_empty() {
        assert!(!DEFAULT_TITLE.is_empty());
        assert!(!DEFAULT_MESSAGE.is_empty());
    }

    #[test]
    fn fades_fit_inside_default_delay() {
        assert!(FADE_IN_MS + FADE_OUT_MS < DEFAULT_AUTO_HIDE_MS);
    }
}
