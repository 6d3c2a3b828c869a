// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the alert lifecycle.
//!
//! Components record [`AlertEventKind`]s through a [`DiagnosticsHandle`];
//! the [`DiagnosticsCollector`] drains them into a bounded [`RingLog`] so a
//! host can inspect what happened to recent alerts.

mod buffer;
mod collector;
mod events;

pub use buffer::{EventCapacity, RingLog};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AlertEventKind, DiagnosticEvent, DismissReason, IgnoredInput};
