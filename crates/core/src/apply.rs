// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::actions::{ActionAvailability, available_actions};
use crate::error::{CoreError, DenialReason};
use crate::transitions::rules_from;
use dealer_promo_audit::AuditComment;
use dealer_promo_domain::{Actor, Event, EventStatus};
use time::OffsetDateTime;

/// The artifacts of a successful transition, for the caller to persist
/// atomically.
///
/// The engine itself never persists. Concurrent writers must be resolved
/// at the persistence boundary (version or etag check); on conflict the
/// caller re-fetches the event and retries.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionOutcome {
    /// The event with its new status.
    pub new_event: Event,
    /// The append-only record of the change.
    pub audit_comment: AuditComment,
}

/// Validates and applies a status transition.
///
/// Re-validates the request against [`available_actions`], so a caller
/// that skipped rendering affordances gets the same answer. On success,
/// returns the updated event and the audit comment to append; the input
/// event is untouched.
///
/// `recorded_at` is supplied by the caller so the engine stays a pure
/// function of its inputs.
///
/// # Arguments
///
/// * `event` - The freshly-read event to transition
/// * `actor` - The actor requesting the transition
/// * `to_status` - The requested status
/// * `comment` - Optional free-text rationale for the audit comment
/// * `recorded_at` - Timestamp for the audit comment
///
/// # Errors
///
/// * `CoreError::TransitionDenied` if the edge does not exist, the actor
///   fails its predicate, or completion readiness is unmet
/// * `CoreError::InvalidActorContext` if a non-admin actor has no branch
///   affiliation
pub fn apply_transition(
    event: &Event,
    actor: &Actor,
    to_status: EventStatus,
    comment: Option<String>,
    recorded_at: OffsetDateTime,
) -> Result<TransitionOutcome, CoreError> {
    let from = event.status();

    for availability in available_actions(event, actor)? {
        match availability {
            ActionAvailability::Ready(action) if action.to == to_status => {
                // Table rows are a subset of the lifecycle graph, so this
                // cannot fail for a ready action.
                let new_event = event.with_status(to_status).map_err(|_| {
                    CoreError::TransitionDenied {
                        from,
                        to: to_status,
                        reason: DenialReason::UndefinedTransition,
                    }
                })?;

                let audit_comment = AuditComment::new(
                    event.id,
                    actor.id,
                    comment,
                    from,
                    to_status,
                    recorded_at,
                );

                return Ok(TransitionOutcome {
                    new_event,
                    audit_comment,
                });
            }
            ActionAvailability::CompletionBlocked { action, missing }
                if action.to == to_status =>
            {
                return Err(CoreError::TransitionDenied {
                    from,
                    to: to_status,
                    reason: DenialReason::CompletionRequirementsUnmet { missing },
                });
            }
            ActionAvailability::Ready(_) | ActionAvailability::CompletionBlocked { .. } => {}
        }
    }

    // The actor cannot take this edge. Distinguish an edge nobody has
    // from one this actor fails the predicate for.
    let edge_exists = rules_from(from).iter().any(|rule| rule.to == to_status);
    let reason = if edge_exists {
        DenialReason::NotPermitted { role: actor.role }
    } else {
        DenialReason::UndefinedTransition
    };

    Err(CoreError::TransitionDenied {
        from,
        to: to_status,
        reason,
    })
}
