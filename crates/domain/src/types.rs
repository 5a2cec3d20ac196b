// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::role::Role;
use crate::status::EventStatus;
use serde::{Deserialize, Serialize};
use time::Date;

/// Identifier of a dealership branch.
///
/// Branches scope approval rights: general managers act only on events
/// owned by their own branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchId(i64);

impl BranchId {
    /// Creates a new branch identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// The user attempting an action, carrying role, branch, and identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Unique user identifier.
    pub id: i64,
    /// The actor's role.
    pub role: Role,
    /// Branch affiliation. Every real user has one; `None` indicates a
    /// broken caller and is rejected wherever a branch-scoped rule must
    /// be evaluated.
    pub branch_id: Option<BranchId>,
}

impl Actor {
    /// Creates a new actor.
    #[must_use]
    pub const fn new(id: i64, role: Role, branch_id: Option<BranchId>) -> Self {
        Self {
            id,
            role,
            branch_id,
        }
    }
}

/// A marketing event routed through the approval chain.
///
/// The `status` field is private: it only ever changes through
/// [`Event::with_status`], which enforces the lifecycle graph. Actor
/// authorization for a transition is layered on top by the workflow
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: i64,
    status: EventStatus,
    /// The user who authored the event. Immutable after creation.
    pub creator_id: i64,
    /// The owning branch. Immutable after creation.
    pub branch_id: BranchId,
    /// Short human-readable title.
    pub title: String,
    /// First day of the event.
    pub starts_on: Date,
    /// Last day of the event.
    pub ends_on: Date,
    /// Requested budget.
    pub budget: f64,
    /// Budget the branch plans to spend.
    pub planned_budget: f64,
    /// Enquiries the branch expects to generate.
    pub planned_enquiries: u32,
    /// Orders the branch expects to close.
    pub planned_orders: u32,
    /// Actual spend, recorded after approval. `None` until recorded;
    /// distinct from zero.
    pub actual_budget: Option<f64>,
    /// Actual enquiries generated. `None` until recorded.
    pub actual_enquiries: Option<u32>,
    /// Actual orders closed. `None` until recorded.
    pub actual_orders: Option<u32>,
}

impl Event {
    /// Creates a new event in `Draft` status with no actual outcomes
    /// recorded.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique event identifier
    /// * `creator_id` - The authoring user
    /// * `branch_id` - The owning branch
    /// * `title` - Short human-readable title
    /// * `starts_on` - First day of the event
    /// * `ends_on` - Last day of the event
    /// * `budget` - Requested budget
    /// * `planned_budget` - Planned spend
    /// * `planned_enquiries` - Expected enquiries
    /// * `planned_orders` - Expected orders
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        id: i64,
        creator_id: i64,
        branch_id: BranchId,
        title: String,
        starts_on: Date,
        ends_on: Date,
        budget: f64,
        planned_budget: f64,
        planned_enquiries: u32,
        planned_orders: u32,
    ) -> Self {
        Self {
            id,
            status: EventStatus::Draft,
            creator_id,
            branch_id,
            title,
            starts_on,
            ends_on,
            budget,
            planned_budget,
            planned_enquiries,
            planned_orders,
            actual_budget: None,
            actual_enquiries: None,
            actual_orders: None,
        }
    }

    /// Returns the current approval status.
    #[must_use]
    pub const fn status(&self) -> EventStatus {
        self.status
    }

    /// Returns a copy of this event with the given status.
    ///
    /// This is the only way the status changes. Callers should not invoke
    /// it directly; the workflow engine re-validates actor authorization
    /// before taking a lifecycle edge.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the edge does not
    /// exist in the event lifecycle.
    pub fn with_status(&self, new_status: EventStatus) -> Result<Self, DomainError> {
        self.status.validate_transition(new_status)?;

        let mut updated = self.clone();
        updated.status = new_status;
        Ok(updated)
    }

    /// Returns a copy of this event with the given actual outcomes
    /// recorded.
    ///
    /// Partial recording is allowed; fields passed as `None` keep their
    /// current value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MetricsLocked` unless the event is approved
    /// or completed. Structural fields freeze at approval; only outcome
    /// metrics remain writable, and only in those two statuses.
    pub fn with_actuals(
        &self,
        actual_budget: Option<f64>,
        actual_enquiries: Option<u32>,
        actual_orders: Option<u32>,
    ) -> Result<Self, DomainError> {
        if !matches!(
            self.status,
            EventStatus::Approved | EventStatus::Completed
        ) {
            return Err(DomainError::MetricsLocked {
                status: self.status,
            });
        }

        let mut updated = self.clone();
        if actual_budget.is_some() {
            updated.actual_budget = actual_budget;
        }
        if actual_enquiries.is_some() {
            updated.actual_enquiries = actual_enquiries;
        }
        if actual_orders.is_some() {
            updated.actual_orders = actual_orders;
        }
        Ok(updated)
    }
}
