// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use dealer_promo_domain::EventStatus;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An immutable record of a single status change.
///
/// Every successful transition must produce exactly one audit comment.
/// Audit comments are append-only: once created they are never mutated or
/// deleted, and the type exposes no mutators. They capture:
/// - which event changed (`event_id`)
/// - who changed it (`author_id`)
/// - the status pair (`status_from`, `status_to`)
/// - an optional free-text rationale (`text`)
/// - when the change was recorded (`created_at`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditComment {
    /// The event whose status changed.
    pub event_id: i64,
    /// The actor who performed the transition.
    pub author_id: i64,
    /// Optional free-text rationale. Some transitions advise a comment,
    /// but none require one.
    pub text: Option<String>,
    /// The status before the transition.
    pub status_from: EventStatus,
    /// The status after the transition.
    pub status_to: EventStatus,
    /// When the change was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl AuditComment {
    /// Creates a new `AuditComment`.
    ///
    /// Once created, an audit comment is immutable.
    ///
    /// # Arguments
    ///
    /// * `event_id` - The event whose status changed
    /// * `author_id` - The actor who performed the transition
    /// * `text` - Optional free-text rationale
    /// * `status_from` - The status before the transition
    /// * `status_to` - The status after the transition
    /// * `created_at` - When the change was recorded
    #[must_use]
    pub const fn new(
        event_id: i64,
        author_id: i64,
        text: Option<String>,
        status_from: EventStatus,
        status_to: EventStatus,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            event_id,
            author_id,
            text,
            status_from,
            status_to,
            created_at,
        }
    }
}
