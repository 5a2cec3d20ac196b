// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use dealer_promo_domain::{Actor, DomainError, Event, Role};

/// Everything a transition predicate needs to know about the actor,
/// evaluated once per query against a specific event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ActorContext {
    /// The actor's role.
    pub role: Role,
    /// Whether the actor authored the event.
    pub is_creator: bool,
    /// Whether the actor's branch is the event's owning branch.
    pub same_branch: bool,
}

/// Builds the actor context for the workflow engine path.
///
/// A non-admin actor without a branch affiliation cannot be evaluated
/// against branch-scoped rules; that indicates a broken caller, not a
/// business rule conflict, and is surfaced as a hard failure.
pub(crate) fn build_context(event: &Event, actor: &Actor) -> Result<ActorContext, CoreError> {
    let same_branch = match actor.branch_id {
        Some(branch) => branch == event.branch_id,
        None if actor.role == Role::Admin => false,
        None => {
            return Err(CoreError::InvalidActorContext(
                DomainError::MissingBranchAffiliation { actor_id: actor.id },
            ));
        }
    };

    Ok(ActorContext {
        role: actor.role,
        is_creator: actor.id == event.creator_id,
        same_branch,
    })
}

/// Builds the actor context for the advisory permission queries.
///
/// Affordance checks must never fail, so a missing branch simply
/// evaluates as "not the same branch". The engine path still hard-fails
/// on the broken context.
pub(crate) fn advisory_context(event: &Event, actor: &Actor) -> ActorContext {
    ActorContext {
        role: actor.role,
        is_creator: actor.id == event.creator_id,
        same_branch: actor
            .branch_id
            .is_some_and(|branch| branch == event.branch_id),
    }
}
