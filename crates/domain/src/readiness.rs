// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Completion readiness evaluation.
//!
//! An approved event may only be completed once its actual outcomes are
//! recorded. Readiness is **computed**, not stored. It's a pure function
//! of the event's actual metric fields.

use crate::types::Event;

/// Display label for the actual spend field.
pub const ACTUAL_COST_LABEL: &str = "Actual Cost";
/// Display label for the actual enquiries field.
pub const ACTUAL_ENQUIRIES_LABEL: &str = "Actual Enquiries";
/// Display label for the actual orders field.
pub const ACTUAL_ORDERS_LABEL: &str = "Actual Orders";

/// Returns true if the event's actual outcomes satisfy the completion
/// precondition.
///
/// Actual spend must be recorded and strictly positive. Actual enquiries
/// and orders must be recorded, but zero is a valid outcome for both —
/// a promotion can genuinely produce nothing.
#[must_use]
pub fn is_ready_for_completion(event: &Event) -> bool {
    let budget_recorded = event.actual_budget.is_some_and(|budget| budget > 0.0);

    budget_recorded && event.actual_enquiries.is_some() && event.actual_orders.is_some()
}

/// Returns the human-readable labels of the actual outcome fields still
/// blocking completion, in display order.
///
/// Empty exactly when [`is_ready_for_completion`] is true.
#[must_use]
pub fn missing_actual_values(event: &Event) -> Vec<&'static str> {
    let mut missing = Vec::new();

    if !event.actual_budget.is_some_and(|budget| budget > 0.0) {
        missing.push(ACTUAL_COST_LABEL);
    }
    if event.actual_enquiries.is_none() {
        missing.push(ACTUAL_ENQUIRIES_LABEL);
    }
    if event.actual_orders.is_none() {
        missing.push(ACTUAL_ORDERS_LABEL);
    }

    missing
}
