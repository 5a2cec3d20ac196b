// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::context::build_context;
use crate::error::CoreError;
use crate::transitions::{StatusAction, rules_from};
use dealer_promo_domain::{
    Actor, Event, EventStatus, Role, is_ready_for_completion, missing_actual_values,
};

/// One entry in the action list offered to an actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionAvailability {
    /// The transition may be taken now.
    Ready(StatusAction),
    /// The actor is authorized to complete the event, but the actual
    /// outcome fields are not all recorded yet. Surfaces must tell the
    /// actor which fields are missing, not silently omit the action.
    CompletionBlocked {
        /// The completion action that would otherwise be offered.
        action: StatusAction,
        /// Display labels of the fields still blocking completion.
        missing: Vec<&'static str>,
    },
}

impl ActionAvailability {
    /// The status this entry targets, whether ready or blocked.
    #[must_use]
    pub const fn target(&self) -> EventStatus {
        match self {
            Self::Ready(action) | Self::CompletionBlocked { action, .. } => action.to,
        }
    }
}

/// Returns the transitions this actor may take on this event, in table
/// declaration order.
///
/// A permitted `approved → completed` edge whose readiness precondition
/// is unmet appears as [`ActionAvailability::CompletionBlocked`] rather
/// than being dropped. Admin bypasses role/ownership/branch predicates
/// but only along edges the table defines; the readiness gate is a data
/// precondition and applies to admin as well.
///
/// Pure and idempotent: same `(event, actor)` in, same list out.
///
/// # Errors
///
/// Returns `CoreError::InvalidActorContext` if a non-admin actor has no
/// branch affiliation.
pub fn available_actions(
    event: &Event,
    actor: &Actor,
) -> Result<Vec<ActionAvailability>, CoreError> {
    let ctx = build_context(event, actor)?;

    let mut actions: Vec<ActionAvailability> = Vec::new();
    for rule in rules_from(event.status()) {
        if ctx.role != Role::Admin && !(rule.permitted)(&ctx) {
            continue;
        }

        let action = rule.to_action(event.status());
        if rule.to == EventStatus::Completed && !is_ready_for_completion(event) {
            actions.push(ActionAvailability::CompletionBlocked {
                action,
                missing: missing_actual_values(event),
            });
        } else {
            actions.push(ActionAvailability::Ready(action));
        }
    }

    Ok(actions)
}
