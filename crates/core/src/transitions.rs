// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The transition table.
//!
//! Every status edge and its authorization predicate is declared exactly
//! once, as data. The list, detail, and form surfaces all query this
//! table; none of them re-encode role or branch checks.

use crate::context::ActorContext;
use dealer_promo_domain::{EventStatus, Role};
use serde::Serialize;

/// A transition offered to an actor, with its presentation label.
///
/// The `requires_comment` flag is advisory: surfaces use it to prompt
/// for a rationale, but the engine never enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusAction {
    /// The event's current status.
    pub from: EventStatus,
    /// The status this action moves to.
    pub to: EventStatus,
    /// Stable human-readable label for the action.
    pub label: &'static str,
    /// Whether surfaces should prompt for a comment.
    pub requires_comment: bool,
}

/// One row of the transition table.
pub(crate) struct TransitionRule {
    pub to: EventStatus,
    pub label: &'static str,
    pub requires_comment: bool,
    /// Authorization predicate for non-admin actors. Admin bypasses the
    /// predicate but never invents edges absent from the table.
    pub permitted: fn(&ActorContext) -> bool,
}

impl TransitionRule {
    /// Materializes the row as an action offered from `from`.
    pub(crate) const fn to_action(&self, from: EventStatus) -> StatusAction {
        StatusAction {
            from,
            to: self.to,
            label: self.label,
            requires_comment: self.requires_comment,
        }
    }
}

fn creator_sales_manager(ctx: &ActorContext) -> bool {
    ctx.role == Role::SalesManager && ctx.is_creator
}

fn creator_branch_general_manager(ctx: &ActorContext) -> bool {
    ctx.role == Role::GeneralManager && ctx.is_creator && ctx.same_branch
}

fn branch_general_manager(ctx: &ActorContext) -> bool {
    ctx.role == Role::GeneralManager && ctx.same_branch
}

fn marketing_head(ctx: &ActorContext) -> bool {
    ctx.role == Role::MarketingHead
}

fn completion_roles(ctx: &ActorContext) -> bool {
    ctx.role == Role::MarketingManager
        || (matches!(ctx.role, Role::SalesManager | Role::GeneralManager) && ctx.is_creator)
}

fn creator_manager(ctx: &ActorContext) -> bool {
    ctx.is_creator && matches!(ctx.role, Role::SalesManager | Role::GeneralManager)
}

static DRAFT_RULES: [TransitionRule; 2] = [
    TransitionRule {
        to: EventStatus::PendingGm,
        label: "Submit for GM Approval",
        requires_comment: false,
        permitted: creator_sales_manager,
    },
    TransitionRule {
        to: EventStatus::PendingMarketing,
        label: "Submit to Marketing",
        requires_comment: false,
        permitted: creator_branch_general_manager,
    },
];

static PENDING_GM_RULES: [TransitionRule; 3] = [
    TransitionRule {
        to: EventStatus::PendingMarketing,
        label: "Approve & Forward to Marketing",
        requires_comment: false,
        permitted: branch_general_manager,
    },
    TransitionRule {
        to: EventStatus::Rejected,
        label: "Reject",
        requires_comment: true,
        permitted: branch_general_manager,
    },
    TransitionRule {
        to: EventStatus::Draft,
        label: "Recall to Draft",
        requires_comment: false,
        permitted: branch_general_manager,
    },
];

static PENDING_MARKETING_RULES: [TransitionRule; 3] = [
    TransitionRule {
        to: EventStatus::Approved,
        label: "Approve",
        requires_comment: false,
        permitted: marketing_head,
    },
    TransitionRule {
        to: EventStatus::Rejected,
        label: "Reject",
        requires_comment: true,
        permitted: marketing_head,
    },
    TransitionRule {
        to: EventStatus::PendingGm,
        label: "Send Back to GM",
        requires_comment: true,
        permitted: marketing_head,
    },
];

static APPROVED_RULES: [TransitionRule; 1] = [TransitionRule {
    to: EventStatus::Completed,
    label: "Mark Completed",
    requires_comment: false,
    permitted: completion_roles,
}];

static REJECTED_RULES: [TransitionRule; 1] = [TransitionRule {
    to: EventStatus::Draft,
    label: "Resubmit as Draft",
    requires_comment: false,
    permitted: creator_manager,
}];

/// Returns the table rows for a status, in declaration order.
///
/// `Completed` is terminal and has no rows for any actor.
pub(crate) fn rules_from(status: EventStatus) -> &'static [TransitionRule] {
    match status {
        EventStatus::Draft => &DRAFT_RULES,
        EventStatus::PendingGm => &PENDING_GM_RULES,
        EventStatus::PendingMarketing => &PENDING_MARKETING_RULES,
        EventStatus::Approved => &APPROVED_RULES,
        EventStatus::Rejected => &REJECTED_RULES,
        EventStatus::Completed => &[],
    }
}
