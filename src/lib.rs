// SPDX-License-Identifier: MPL-2.0
//! `alert_stack` renders stacked, auto-dismissing alert boxes in Iced
//! applications.
//!
//! Alerts are grouped per screen position, fade in and out, pause their
//! countdown while hovered and can be closed by the user. A thread-wide
//! entry point ([`ui::alerts::show`]) mirrors the plugin-style usage, while
//! [`ui::alerts::Manager`] can be embedded directly in an application state.

#![doc(html_root_url = "https://docs.rs/alert_stack/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
