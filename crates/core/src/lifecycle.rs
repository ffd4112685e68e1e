// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The job order lifecycle engine.
//!
//! The lifecycle is strictly linear: `pending → cutting → weighing →
//! ready → shipped → completed`, with `completed` terminal. Which role
//! may drive each edge is an explicit table here, independent of any
//! view or page context. Transitions are operator-initiated only and
//! all-or-nothing: a rejected transition leaves the caller's snapshot
//! untouched.

use crate::error::CoreError;
use cutshop_domain::{JobOrder, JobStatus, Role};

/// Roles permitted to drive production-stage edges.
const PRODUCTION_ROLES: [Role; 3] = [Role::Cutter, Role::Supervisor, Role::Superadmin];

/// Roles permitted to drive delivery-stage edges.
const DELIVERY_ROLES: [Role; 2] = [Role::Delivery, Role::Superadmin];

/// Returns the roles permitted to drive the edge out of `from` to its
/// immediate successor.
///
/// The terminal status has no outgoing edge, so its role set is empty.
#[must_use]
pub const fn edge_roles(from: JobStatus) -> &'static [Role] {
    match from {
        JobStatus::Pending | JobStatus::Cutting | JobStatus::Weighing => &PRODUCTION_ROLES,
        JobStatus::Ready | JobStatus::Shipped => &DELIVERY_ROLES,
        JobStatus::Completed => &[],
    }
}

/// Returns the derived progress percentage for a status.
///
/// The mapping is strictly increasing along the lifecycle order, so a
/// valid transition never decreases progress.
#[must_use]
pub const fn progress_of(status: JobStatus) -> u8 {
    status.progress_percent()
}

/// Decides whether `acting_role` may move an order from `current` to
/// `target`.
///
/// True exactly when `target` is the immediate successor of `current`
/// (same-status and backward moves are rejected, and `completed` has no
/// outgoing edge) and `acting_role` is in the edge's permitted set.
#[must_use]
pub fn can_transition(current: JobStatus, target: JobStatus, acting_role: Role) -> bool {
    current.validate_step(target).is_ok() && edge_roles(current).contains(&acting_role)
}

/// Applies a status transition to a job order, producing a new snapshot.
///
/// On success the returned order carries the new status; reaching
/// `completed` also denormalizes `completed_quantity` to the full
/// ordered quantity. The input order is never mutated.
///
/// # Errors
///
/// Returns `CoreError::InvalidTransition` when [`can_transition`] is
/// false, with a reason distinguishing ordering violations from role
/// violations.
pub fn apply_transition(
    order: &JobOrder,
    target: JobStatus,
    acting_role: Role,
) -> Result<JobOrder, CoreError> {
    // Ordering first: a step that is not the immediate successor is
    // rejected regardless of who asks.
    if let Err(domain_err) = order.status.validate_step(target) {
        let reason = match domain_err {
            cutshop_domain::DomainError::InvalidStatusTransition { reason, .. } => reason,
            other => other.to_string(),
        };
        return Err(CoreError::InvalidTransition {
            from: order.status,
            to: target,
            acting_role,
            reason,
        });
    }

    if !edge_roles(order.status).contains(&acting_role) {
        return Err(CoreError::InvalidTransition {
            from: order.status,
            to: target,
            acting_role,
            reason: format!(
                "role '{acting_role}' is not permitted to drive this transition"
            ),
        });
    }

    let mut next = order.clone();
    next.status = target;
    if target == JobStatus::Completed {
        next.completed_quantity = next.quantity;
    }
    Ok(next)
}
