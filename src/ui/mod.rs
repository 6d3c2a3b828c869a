// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`alerts`] - Alert stacks: lifecycle, timers, containers and rendering
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod alerts;
pub mod design_tokens;
