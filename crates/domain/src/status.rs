// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event status tracking and lifecycle transition rules.
//!
//! This module defines the finite status set and which status edges exist
//! at all. *Who* may take an edge is decided by the workflow engine; the
//! lifecycle graph here is actor-agnostic.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Approval status of a marketing event.
///
/// An event is created in `Draft` and routed through the general manager
/// and marketing sign-off chain until it is approved and eventually
/// completed against recorded outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Being authored by its creator; not yet submitted.
    Draft,
    /// Awaiting general manager review at the owning branch.
    PendingGm,
    /// Awaiting marketing head review.
    PendingMarketing,
    /// Approved; awaiting actual outcome metrics and completion.
    Approved,
    /// Rejected during review; may be reworked and resubmitted.
    Rejected,
    /// Closed out with actual outcomes recorded.
    Completed,
}

impl EventStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::PendingGm => "pending_gm",
            Self::PendingMarketing => "pending_marketing",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "draft" => Ok(Self::Draft),
            "pending_gm" => Ok(Self::PendingGm),
            "pending_marketing" => Ok(Self::PendingMarketing),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }

    /// Returns true if this status is terminal (no outgoing transitions).
    ///
    /// `Rejected` is not terminal: a rejected event can be reworked and
    /// returned to `Draft`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns the statuses reachable from this one, in routing order.
    ///
    /// This is the lifecycle graph only; actor authorization is layered on
    /// top by the workflow engine.
    #[must_use]
    pub const fn reachable(&self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::PendingGm, Self::PendingMarketing],
            Self::PendingGm => &[Self::PendingMarketing, Self::Rejected, Self::Draft],
            Self::PendingMarketing => &[Self::Approved, Self::Rejected, Self::PendingGm],
            Self::Approved => &[Self::Completed],
            Self::Rejected => &[Self::Draft],
            Self::Completed => &[],
        }
    }

    /// Validates if a transition from this status to another is part of the
    /// event lifecycle.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: *self,
                to: new_status,
                reason: "completed events cannot change status".to_string(),
            });
        }

        if self.reachable().contains(&new_status) {
            return Ok(());
        }

        Err(DomainError::InvalidStatusTransition {
            from: *self,
            to: new_status,
            reason: "transition not permitted by the event lifecycle".to_string(),
        })
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}
