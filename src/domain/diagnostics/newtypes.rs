// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

// =============================================================================
// Event Log Capacity Bounds
// =============================================================================

/// Lifecycle event log capacity bounds (16 to 4096 events).
pub mod event_capacity_bounds {
    /// Minimum number of retained events.
    pub const MIN: usize = 16;
    /// Maximum number of retained events.
    pub const MAX: usize = 4096;
    /// Default number of retained events.
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// EventCapacity
// =============================================================================

/// Number of lifecycle events kept by the diagnostics log.
///
/// Always within 16–4096; out-of-range requests are clamped.
///
/// ```ignore
/// assert_eq!(EventCapacity::new(1).value(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCapacity(usize);

impl EventCapacity {
    /// Creates a capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(event_capacity_bounds::MIN, event_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for EventCapacity {
    fn default() -> Self {
        Self(event_capacity_bounds::DEFAULT)
    }
}
