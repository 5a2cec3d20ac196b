// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_actor, create_test_event};
use crate::{can_delete, can_edit_details, can_edit_metrics, edit_permission_message};
use dealer_promo_domain::{Actor, Event, EventStatus, Role};

const ALL_ROLES: [Role; 5] = [
    Role::SalesManager,
    Role::GeneralManager,
    Role::MarketingManager,
    Role::MarketingHead,
    Role::Admin,
];

#[test]
fn test_admin_cannot_delete_a_completed_event() {
    let event: Event = create_test_event(EventStatus::Completed);
    let actor: Actor = create_test_actor(Role::Admin, false, false);

    assert!(!can_delete(&event, &actor));
}

#[test]
fn test_nobody_deletes_approved_or_completed_events() {
    for status in [EventStatus::Approved, EventStatus::Completed] {
        let event: Event = create_test_event(status);
        for role in ALL_ROLES {
            for is_creator in [false, true] {
                let actor: Actor = create_test_actor(role, is_creator, true);
                assert!(
                    !can_delete(&event, &actor),
                    "delete must be denied: status={status} role={role}"
                );
            }
        }
    }
}

#[test]
fn test_admin_deletes_anywhere_before_approval() {
    let actor: Actor = create_test_actor(Role::Admin, false, false);

    for status in [
        EventStatus::Draft,
        EventStatus::PendingGm,
        EventStatus::PendingMarketing,
        EventStatus::Rejected,
    ] {
        assert!(can_delete(&create_test_event(status), &actor));
    }
}

#[test]
fn test_creator_sales_manager_edit_window() {
    let actor: Actor = create_test_actor(Role::SalesManager, true, true);

    assert!(can_edit_details(&create_test_event(EventStatus::Draft), &actor));
    assert!(can_edit_details(&create_test_event(EventStatus::Rejected), &actor));
    assert!(can_edit_details(&create_test_event(EventStatus::PendingGm), &actor));

    assert!(!can_edit_details(
        &create_test_event(EventStatus::PendingMarketing),
        &actor
    ));
    assert!(!can_edit_details(&create_test_event(EventStatus::Approved), &actor));
    assert!(!can_edit_details(&create_test_event(EventStatus::Completed), &actor));
}

#[test]
fn test_non_creator_sales_manager_cannot_edit() {
    let actor: Actor = create_test_actor(Role::SalesManager, false, true);

    assert!(!can_edit_details(&create_test_event(EventStatus::Draft), &actor));
    assert!(!can_delete(&create_test_event(EventStatus::Draft), &actor));
}

#[test]
fn test_branch_general_manager_edit_window() {
    let same_branch: Actor = create_test_actor(Role::GeneralManager, false, true);
    let other_branch: Actor = create_test_actor(Role::GeneralManager, false, false);

    for status in [EventStatus::Draft, EventStatus::PendingGm] {
        let event: Event = create_test_event(status);
        assert!(can_edit_details(&event, &same_branch));
        assert!(!can_edit_details(&event, &other_branch));
    }

    // A GM edits rejected events only as creator, and only via the
    // creator path for draft resubmission, never cross-branch.
    let rejected: Event = create_test_event(EventStatus::Rejected);
    assert!(!can_edit_details(&rejected, &same_branch));
}

#[test]
fn test_creator_general_manager_edits_across_branches() {
    // Ownership substitutes for branch affiliation in the GM check.
    let actor: Actor = create_test_actor(Role::GeneralManager, true, false);

    assert!(can_edit_details(&create_test_event(EventStatus::Draft), &actor));
    assert!(can_edit_details(&create_test_event(EventStatus::PendingGm), &actor));
}

#[test]
fn test_marketing_head_edits_only_during_marketing_review() {
    let actor: Actor = create_test_actor(Role::MarketingHead, false, false);

    assert!(can_edit_details(
        &create_test_event(EventStatus::PendingMarketing),
        &actor
    ));
    assert!(can_delete(
        &create_test_event(EventStatus::PendingMarketing),
        &actor
    ));

    assert!(!can_edit_details(&create_test_event(EventStatus::Draft), &actor));
    assert!(!can_edit_details(&create_test_event(EventStatus::Approved), &actor));
}

#[test]
fn test_marketing_manager_never_edits_details() {
    let actor: Actor = create_test_actor(Role::MarketingManager, false, true);

    for status in [
        EventStatus::Draft,
        EventStatus::PendingGm,
        EventStatus::PendingMarketing,
        EventStatus::Approved,
        EventStatus::Rejected,
        EventStatus::Completed,
    ] {
        assert!(!can_edit_details(&create_test_event(status), &actor));
    }
}

#[test]
fn test_metrics_open_to_marketing_manager_after_approval() {
    let actor: Actor = create_test_actor(Role::MarketingManager, false, false);

    assert!(can_edit_metrics(&create_test_event(EventStatus::Approved), &actor));
    assert!(can_edit_metrics(&create_test_event(EventStatus::Completed), &actor));

    assert!(!can_edit_metrics(&create_test_event(EventStatus::Draft), &actor));
    assert!(!can_edit_metrics(
        &create_test_event(EventStatus::PendingMarketing),
        &actor
    ));
}

#[test]
fn test_metrics_open_to_creator_sales_manager_after_approval() {
    let creator: Actor = create_test_actor(Role::SalesManager, true, true);
    let other: Actor = create_test_actor(Role::SalesManager, false, true);
    let event: Event = create_test_event(EventStatus::Approved);

    assert!(can_edit_metrics(&event, &creator));
    assert!(!can_edit_metrics(&event, &other));
}

#[test]
fn test_metrics_closed_to_review_roles() {
    let event: Event = create_test_event(EventStatus::Approved);

    assert!(!can_edit_metrics(
        &event,
        &create_test_actor(Role::GeneralManager, true, true)
    ));
    assert!(!can_edit_metrics(
        &event,
        &create_test_actor(Role::MarketingHead, false, true)
    ));
}

#[test]
fn test_details_and_metrics_are_disjoint_after_approval() {
    // Once approved, structural fields freeze; only outcomes open up.
    let creator: Actor = create_test_actor(Role::SalesManager, true, true);

    for status in [EventStatus::Approved, EventStatus::Completed] {
        let event: Event = create_test_event(status);
        assert!(!can_edit_details(&event, &creator));
        assert!(can_edit_metrics(&event, &creator));
    }
}

#[test]
fn test_missing_branch_degrades_to_not_same_branch() {
    let event: Event = create_test_event(EventStatus::PendingGm);
    let actor: Actor = Actor::new(50, Role::GeneralManager, None);

    // Advisory queries never error; they just withhold the affordance.
    assert!(!can_edit_details(&event, &actor));
    assert!(!can_delete(&event, &actor));
}

#[test]
fn test_permission_message_for_an_editor() {
    let event: Event = create_test_event(EventStatus::Draft);
    let actor: Actor = create_test_actor(Role::SalesManager, true, true);

    assert_eq!(
        edit_permission_message(&event, &actor),
        "You can edit this event's details."
    );
}

#[test]
fn test_permission_message_after_approval_points_at_metrics() {
    let event: Event = create_test_event(EventStatus::Approved);
    let creator: Actor = create_test_actor(Role::SalesManager, true, true);
    let outsider: Actor = create_test_actor(Role::SalesManager, false, true);

    assert!(edit_permission_message(&event, &creator).contains("outcome metrics"));
    assert!(edit_permission_message(&event, &outsider).contains("locked"));
}

#[test]
fn test_permission_message_for_completed_events() {
    let event: Event = create_test_event(EventStatus::Completed);
    let actor: Actor = create_test_actor(Role::GeneralManager, false, true);

    assert_eq!(
        edit_permission_message(&event, &actor),
        "Completed events are read-only."
    );
}
