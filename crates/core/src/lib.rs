// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod actions;
mod apply;
mod context;
mod error;
mod permissions;
mod transitions;

#[cfg(test)]
mod tests;

pub use actions::{ActionAvailability, available_actions};
pub use apply::{TransitionOutcome, apply_transition};
pub use error::{CoreError, DenialReason};
pub use permissions::{
    can_delete, can_edit_details, can_edit_metrics, edit_permission_message,
};
pub use transitions::StatusAction;
