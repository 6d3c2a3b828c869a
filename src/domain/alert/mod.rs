// SPDX-License-Identifier: MPL-2.0
//! Alert domain types.
//!
//! Value objects describing an alert independently of how it is drawn.

pub mod newtypes;
pub mod types;

pub use newtypes::{timing, AlertId, AutoHideDelay};
pub use types::{HorizontalEdge, Position, Severity, ThemeKind, UnknownPosition, VerticalEdge};
