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

mod error;
mod readiness;
mod role;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use readiness::{
    ACTUAL_COST_LABEL, ACTUAL_ENQUIRIES_LABEL, ACTUAL_ORDERS_LABEL, is_ready_for_completion,
    missing_actual_values,
};
pub use role::Role;
pub use status::EventStatus;
pub use types::{Actor, BranchId, Event};
