// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::EventStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Event status string is not a recognized status.
    InvalidStatus(String),
    /// Role string is not a recognized role.
    InvalidRole(String),
    /// The requested status transition is not part of the event lifecycle.
    InvalidStatusTransition {
        /// The current status.
        from: EventStatus,
        /// The requested status.
        to: EventStatus,
        /// Why the transition is not allowed.
        reason: String,
    },
    /// The actor has no branch affiliation, so branch-scoped rules cannot
    /// be evaluated.
    MissingBranchAffiliation {
        /// The actor's identifier.
        actor_id: i64,
    },
    /// Actual outcome metrics were written outside the approved/completed
    /// window.
    MetricsLocked {
        /// The event's current status.
        status: EventStatus,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStatus(status) => write!(f, "Invalid event status: '{status}'"),
            Self::InvalidRole(role) => write!(f, "Invalid role: '{role}'"),
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(
                    f,
                    "Invalid status transition from '{}' to '{}': {reason}",
                    from.as_str(),
                    to.as_str()
                )
            }
            Self::MissingBranchAffiliation { actor_id } => {
                write!(
                    f,
                    "Actor {actor_id} has no branch affiliation; branch-scoped rules cannot be evaluated"
                )
            }
            Self::MetricsLocked { status } => {
                write!(
                    f,
                    "Actual outcome metrics cannot be recorded while the event is '{}'; the event must be approved first",
                    status.as_str()
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
