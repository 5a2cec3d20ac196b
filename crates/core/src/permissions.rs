// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived permission queries.
//!
//! Stateless answers to "what can this actor do to this record right
//! now", independent of transition intent. These are advisory, for
//! rendering state-appropriate controls; the server re-applies the
//! authoritative checks. A missing branch affiliation degrades to
//! "not the same branch" here rather than erroring, so affordance
//! rendering never fails.

use crate::context::advisory_context;
use dealer_promo_domain::{Actor, Event, EventStatus, Role};

/// Whether the actor may edit the event's structural details (title,
/// dates, budget request).
///
/// Structural fields freeze permanently once the event is approved; from
/// then on only the outcome metrics remain writable, via
/// [`can_edit_metrics`].
#[must_use]
pub fn can_edit_details(event: &Event, actor: &Actor) -> bool {
    let ctx = advisory_context(event, actor);

    match ctx.role {
        Role::Admin => true,
        Role::SalesManager => {
            ctx.is_creator
                && matches!(
                    event.status(),
                    EventStatus::Draft | EventStatus::Rejected | EventStatus::PendingGm
                )
        }
        Role::GeneralManager => {
            (ctx.same_branch || ctx.is_creator)
                && matches!(event.status(), EventStatus::Draft | EventStatus::PendingGm)
        }
        Role::MarketingHead => event.status() == EventStatus::PendingMarketing,
        Role::MarketingManager => false,
    }
}

/// Whether the actor may delete the event.
///
/// Never true once an event is approved or completed, for any role
/// including admin. Otherwise mirrors the branch/creator checks of
/// [`can_edit_details`].
#[must_use]
pub fn can_delete(event: &Event, actor: &Actor) -> bool {
    if matches!(
        event.status(),
        EventStatus::Approved | EventStatus::Completed
    ) {
        return false;
    }

    let ctx = advisory_context(event, actor);
    match ctx.role {
        Role::Admin => true,
        Role::SalesManager => {
            ctx.is_creator
                && matches!(
                    event.status(),
                    EventStatus::Draft | EventStatus::PendingGm | EventStatus::Rejected
                )
        }
        Role::GeneralManager => {
            (ctx.same_branch || ctx.is_creator)
                && matches!(event.status(), EventStatus::Draft | EventStatus::PendingGm)
        }
        Role::MarketingHead => event.status() == EventStatus::PendingMarketing,
        Role::MarketingManager => false,
    }
}

/// Whether the actor may record the actual outcome metrics.
///
/// This is the only path by which the actual fields are written, and it
/// is intentionally disjoint from [`can_edit_details`].
#[must_use]
pub fn can_edit_metrics(event: &Event, actor: &Actor) -> bool {
    let ctx = advisory_context(event, actor);
    let outcome_window = matches!(
        event.status(),
        EventStatus::Approved | EventStatus::Completed
    );

    match ctx.role {
        Role::Admin => true,
        Role::MarketingManager => outcome_window,
        Role::SalesManager => ctx.is_creator && outcome_window,
        Role::GeneralManager | Role::MarketingHead => false,
    }
}

/// A human-readable explanation of the actor's current edit affordance.
///
/// For UI guidance only; never a security boundary.
#[must_use]
pub fn edit_permission_message(event: &Event, actor: &Actor) -> String {
    if can_edit_details(event, actor) {
        return String::from("You can edit this event's details.");
    }
    if can_edit_metrics(event, actor) {
        return String::from(
            "Details are locked after approval; only the actual outcome metrics can be updated.",
        );
    }

    match event.status() {
        EventStatus::Draft | EventStatus::Rejected => {
            String::from("Only the event's creator may edit it before submission.")
        }
        EventStatus::PendingGm => String::from(
            "Only the creator or the branch general manager may edit while general manager review is pending.",
        ),
        EventStatus::PendingMarketing => {
            String::from("Only the marketing head may edit while marketing review is pending.")
        }
        EventStatus::Approved => String::from(
            "Approved events are locked; outcome metrics may be updated by the marketing manager or the event's creator.",
        ),
        EventStatus::Completed => String::from("Completed events are read-only."),
    }
}
