// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dealer_promo_domain::{Actor, BranchId, Event, EventStatus, Role};
use time::OffsetDateTime;
use time::macros::{date, datetime};

/// The event author used by every test event.
pub const CREATOR_ID: i64 = 7;
/// An actor id that is not the creator.
pub const OTHER_ID: i64 = 99;
/// The branch owning every test event.
pub const EVENT_BRANCH: i64 = 10;
/// A branch other than the event's.
pub const OTHER_BRANCH: i64 = 20;

pub fn create_test_timestamp() -> OffsetDateTime {
    datetime!(2026-08-24 09:30 UTC)
}

/// Creates a test event walked through real lifecycle edges to the
/// requested status.
pub fn create_test_event(status: EventStatus) -> Event {
    let event: Event = Event::new(
        1,
        CREATOR_ID,
        BranchId::new(EVENT_BRANCH),
        String::from("Monsoon Service Camp"),
        date!(2026 - 09 - 01),
        date!(2026 - 09 - 03),
        50_000.0,
        45_000.0,
        120,
        15,
    );

    let path: &[EventStatus] = match status {
        EventStatus::Draft => &[],
        EventStatus::PendingGm => &[EventStatus::PendingGm],
        EventStatus::PendingMarketing => {
            &[EventStatus::PendingGm, EventStatus::PendingMarketing]
        }
        EventStatus::Approved => &[
            EventStatus::PendingGm,
            EventStatus::PendingMarketing,
            EventStatus::Approved,
        ],
        EventStatus::Rejected => &[EventStatus::PendingGm, EventStatus::Rejected],
        EventStatus::Completed => &[
            EventStatus::PendingGm,
            EventStatus::PendingMarketing,
            EventStatus::Approved,
            EventStatus::Completed,
        ],
    };

    path.iter()
        .fold(event, |event, step| event.with_status(*step).unwrap())
}

/// Creates an approved event with all actual outcomes recorded, ready
/// for completion.
pub fn create_ready_event() -> Event {
    create_test_event(EventStatus::Approved)
        .with_actuals(Some(41_200.0), Some(96), Some(11))
        .unwrap()
}

/// Creates an actor positioned relative to the test event.
pub fn create_test_actor(role: Role, is_creator: bool, same_branch: bool) -> Actor {
    let id: i64 = if is_creator { CREATOR_ID } else { OTHER_ID };
    let branch: i64 = if same_branch { EVENT_BRANCH } else { OTHER_BRANCH };
    Actor::new(id, role, Some(BranchId::new(branch)))
}
