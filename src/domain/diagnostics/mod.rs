// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`EventCapacity`]: retention bound for the lifecycle event log

mod newtypes;

pub use newtypes::{event_capacity_bounds, EventCapacity};
