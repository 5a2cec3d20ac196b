// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dealer_promo_domain::{DomainError, EventStatus, Role};

/// Why a requested transition was denied.
///
/// Denials carry enough structure for the caller to render a specific,
/// actionable message rather than a generic failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenialReason {
    /// No edge from the current status to the requested status exists
    /// for anyone.
    UndefinedTransition,
    /// The edge exists, but the actor fails its role/ownership/branch
    /// predicate.
    NotPermitted {
        /// The actor's role.
        role: Role,
    },
    /// The `approved → completed` edge exists and the actor may take it,
    /// but the actual outcome fields are not all recorded yet.
    CompletionRequirementsUnmet {
        /// Display labels of the fields still blocking completion.
        missing: Vec<&'static str>,
    },
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedTransition => {
                write!(f, "no such transition is defined")
            }
            Self::NotPermitted { role } => {
                write!(
                    f,
                    "role '{}' does not satisfy the ownership or branch requirements for this transition",
                    role.as_str()
                )
            }
            Self::CompletionRequirementsUnmet { missing } => {
                write!(
                    f,
                    "actual outcomes must be recorded before completion; missing: {}",
                    missing.join(", ")
                )
            }
        }
    }
}

/// Errors produced by the workflow engine.
///
/// `TransitionDenied` is always recoverable: the caller should re-render
/// the available actions or surface the missing-field guidance.
/// `InvalidActorContext` is a precondition violation from a broken caller
/// and should be treated as a hard failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The requested transition does not exist, is not permitted for
    /// this actor, or is blocked by completion readiness.
    TransitionDenied {
        /// The event's current status.
        from: EventStatus,
        /// The requested status.
        to: EventStatus,
        /// Why the transition was denied.
        reason: DenialReason,
    },
    /// The actor lacks fields required to evaluate any predicate.
    InvalidActorContext(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TransitionDenied { from, to, reason } => {
                write!(
                    f,
                    "Transition from '{}' to '{}' denied: {reason}",
                    from.as_str(),
                    to.as_str()
                )
            }
            Self::InvalidActorContext(err) => write!(f, "Invalid actor context: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}
