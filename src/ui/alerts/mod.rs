// SPDX-License-Identifier: MPL-2.0
//! Stacked, auto-dismissing alert boxes.
//!
//! Alerts are grouped in one stacking container per screen position. Each
//! alert fades in, counts down (unless sticky), pauses while hovered and
//! fades out when its countdown expires or its close button is pressed.
//!
//! # Components
//!
//! - [`style`] - theme + severity to icon and box class
//! - [`registry`] - one container per position, created on first use
//! - [`alert`] - per-alert state machine
//! - [`countdown`] - auto-hide timer and progress indicator
//! - [`options`] - alert options and default layering
//! - [`manager`] - `Manager` owning containers and live alerts
//! - [`global`] - thread-wide `show` entry point
//! - [`view`] - iced rendering
//!
//! # Usage
//!
//! Through the shared entry point:
//!
//! ```ignore
//! use alert_stack::ui::alerts::{self, AlertOverrides};
//!
//! alerts::show(AlertOverrides::new().title("Saved").message("Changes saved"));
//!
//! // In update():       alerts::update(message, Instant::now());
//! // In view():         alerts::overlay(Instant::now()).map(Message::Alerts)
//! // In subscription(): alerts::subscription().map(Message::Alerts)
//! ```
//!
//! Or with a manager owned by the application state:
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.show(AlertOverrides::new().title("Saved"), Instant::now());
//!
//! // In view(): alerts::view_overlay(&manager, Instant::now()).map(Message::Alerts)
//! ```

pub mod alert;
pub mod countdown;
pub mod global;
pub mod manager;
pub mod options;
pub mod registry;
pub mod style;
pub mod view;

pub use alert::{Alert, AlertElement, AlertState, CountdownState, Transition};
pub use countdown::Countdown;
pub use global::{overlay, set_defaults, show, show_at, subscription, update, with_manager};
pub use manager::{Manager, Message};
pub use options::{AlertOptions, AlertOverrides, CallbackData, CompletionHook, PendingCompletion};
pub use registry::{Container, ContainerRegistry, CONTAINER_CLASS};
pub use style::{resolve_style, resolve_style_lossy, AlertIcon, AlertStyle};
pub use view::{view_alert, view_overlay};
