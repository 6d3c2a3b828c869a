// SPDX-License-Identifier: MPL-2.0
//! Domain layer: pure value types with no external dependencies.
//!
//! # Modules
//!
//! - [`alert`]: alert vocabulary ([`Severity`](alert::Severity),
//!   [`Position`](alert::Position), [`ThemeKind`](alert::ThemeKind),
//!   [`AutoHideDelay`](alert::AutoHideDelay))
//! - [`diagnostics`]: diagnostics bounds ([`EventCapacity`](diagnostics::EventCapacity))

pub mod alert;
pub mod diagnostics;
