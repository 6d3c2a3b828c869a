// SPDX-License-Identifier: MPL-2.0
//! Alert lifecycle events captured for diagnostics.

use std::fmt;
use std::time::Instant;

use crate::domain::alert::{AlertId, Position, Severity};

/// Why an alert started disappearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The auto-hide countdown ran out.
    Expired,
    /// The close affordance was activated.
    Closed,
}

/// Host event that arrived for an alert which no longer accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredInput {
    HoverEnter,
    HoverLeave,
    Close,
}

/// What happened, with the data needed to correlate it.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertEventKind {
    /// A stacking container was created for a position.
    ContainerCreated { position: Position },
    /// An alert was inserted into its container.
    Shown {
        id: AlertId,
        severity: Severity,
        position: Position,
        sticky: bool,
    },
    /// Hover froze the countdown.
    Paused { id: AlertId },
    /// Hover ended and the countdown restarted from the full delay.
    Resumed { id: AlertId },
    /// The alert began fading out.
    Dismissed { id: AlertId, reason: DismissReason },
    /// The alert element was detached from its container.
    Removed { id: AlertId, position: Position },
    /// A late or unroutable host event was absorbed.
    Ignored { id: AlertId, input: IgnoredInput },
}

impl fmt::Display for AlertEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertEventKind::ContainerCreated { position } => {
                write!(f, "container created at {position}")
            }
            AlertEventKind::Shown {
                id,
                severity,
                position,
                sticky,
            } => write!(f, "{id} shown ({severity}, {position}, sticky={sticky})"),
            AlertEventKind::Paused { id } => write!(f, "{id} paused"),
            AlertEventKind::Resumed { id } => write!(f, "{id} resumed"),
            AlertEventKind::Dismissed { id, reason } => write!(f, "{id} dismissed ({reason:?})"),
            AlertEventKind::Removed { id, position } => write!(f, "{id} removed from {position}"),
            AlertEventKind::Ignored { id, input } => write!(f, "{id} ignored {input:?}"),
        }
    }
}

/// A lifecycle event stamped with the monotonic time it was recorded.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: AlertEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: AlertEventKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: AlertEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_is_stamped_now() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(AlertEventKind::ContainerCreated {
            position: Position::TopLeft,
        });
        assert!(event.timestamp >= before);
        assert!(event.timestamp <= Instant::now());
    }

    #[test]
    fn display_mentions_position_and_reason() {
        let id = AlertId::next();
        let shown = AlertEventKind::Shown {
            id,
            severity: Severity::Success,
            position: Position::TopRight,
            sticky: false,
        };
        assert!(shown.to_string().contains("top-right"));
        assert!(shown.to_string().contains("success"));

        let dismissed = AlertEventKind::Dismissed {
            id,
            reason: DismissReason::Expired,
        };
        assert!(dismissed.to_string().contains("Expired"));
    }
}
