// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the job order lifecycle engine.

use crate::error::CoreError;
use crate::lifecycle::{apply_transition, can_transition, edge_roles, progress_of};
use cutshop_domain::{JobStatus, Role};

use super::helpers::create_test_order;

#[test]
fn test_progress_is_strictly_increasing_along_the_lifecycle() {
    let mut previous: Option<u8> = None;
    for status in JobStatus::ORDER {
        let progress = progress_of(status);
        if let Some(prev) = previous {
            assert!(progress > prev, "{status} must have progress above {prev}");
        }
        previous = Some(progress);
    }
}

#[test]
fn test_same_status_transition_is_always_rejected() {
    for status in JobStatus::ORDER {
        for role in Role::ALL {
            assert!(
                !can_transition(status, status, role),
                "same-status transition must be rejected for {status} as {role}"
            );
        }
    }
}

#[test]
fn test_completed_has_no_outgoing_transitions() {
    for target in JobStatus::ORDER {
        for role in Role::ALL {
            assert!(!can_transition(JobStatus::Completed, target, role));
        }
    }
    assert!(edge_roles(JobStatus::Completed).is_empty());
}

#[test]
fn test_production_edges_permit_cutter_supervisor_superadmin() {
    let production_edges = [
        (JobStatus::Pending, JobStatus::Cutting),
        (JobStatus::Cutting, JobStatus::Weighing),
        (JobStatus::Weighing, JobStatus::Ready),
    ];

    for (from, to) in production_edges {
        for role in [Role::Cutter, Role::Supervisor, Role::Superadmin] {
            assert!(can_transition(from, to, role), "{role} must drive {from}→{to}");
        }
        for role in [Role::Clerk, Role::Delivery, Role::Guest] {
            assert!(
                !can_transition(from, to, role),
                "{role} must not drive {from}→{to}"
            );
        }
    }
}

#[test]
fn test_delivery_edges_permit_delivery_and_superadmin_only() {
    let delivery_edges = [
        (JobStatus::Ready, JobStatus::Shipped),
        (JobStatus::Shipped, JobStatus::Completed),
    ];

    for (from, to) in delivery_edges {
        for role in [Role::Delivery, Role::Superadmin] {
            assert!(can_transition(from, to, role), "{role} must drive {from}→{to}");
        }
        for role in [Role::Clerk, Role::Supervisor, Role::Cutter, Role::Guest] {
            assert!(
                !can_transition(from, to, role),
                "{role} must not drive {from}→{to}"
            );
        }
    }
}

#[test]
fn test_skipping_a_status_is_rejected() {
    // cutting → ready skips weighing.
    assert!(!can_transition(JobStatus::Cutting, JobStatus::Ready, Role::Cutter));
    // pending → completed skips everything.
    assert!(!can_transition(
        JobStatus::Pending,
        JobStatus::Completed,
        Role::Superadmin
    ));
}

#[test]
fn test_backward_transition_is_rejected() {
    assert!(!can_transition(JobStatus::Cutting, JobStatus::Pending, Role::Superadmin));
    assert!(!can_transition(JobStatus::Shipped, JobStatus::Ready, Role::Delivery));
}

#[test]
fn test_apply_transition_advances_status() {
    let order = create_test_order(JobStatus::Cutting);

    let next = apply_transition(&order, JobStatus::Weighing, Role::Cutter)
        .expect("cutter must be able to move cutting → weighing");

    assert_eq!(next.status, JobStatus::Weighing);
    // Everything else carries over unchanged.
    assert_eq!(next.po_number, order.po_number);
    assert_eq!(next.quantity, order.quantity);
    assert_eq!(next.completed_quantity, order.completed_quantity);
}

#[test]
fn test_apply_transition_never_decreases_progress() {
    let mut order = create_test_order(JobStatus::Pending);

    // Walk the whole lifecycle with roles that may drive each edge.
    let steps = [
        (JobStatus::Cutting, Role::Cutter),
        (JobStatus::Weighing, Role::Cutter),
        (JobStatus::Ready, Role::Supervisor),
        (JobStatus::Shipped, Role::Delivery),
        (JobStatus::Completed, Role::Delivery),
    ];

    for (target, role) in steps {
        let before = progress_of(order.status);
        order = apply_transition(&order, target, role).expect("valid step must succeed");
        assert!(progress_of(order.status) > before);
    }
    assert_eq!(progress_of(order.status), 100);
}

#[test]
fn test_apply_transition_rejects_skip_with_reason() {
    let order = create_test_order(JobStatus::Cutting);

    let result = apply_transition(&order, JobStatus::Ready, Role::Cutter);

    match result {
        Err(CoreError::InvalidTransition { from, to, .. }) => {
            assert_eq!(from, JobStatus::Cutting);
            assert_eq!(to, JobStatus::Ready);
        }
        other => panic!("Expected InvalidTransition, got: {other:?}"),
    }
}

#[test]
fn test_apply_transition_rejects_unpermitted_role() {
    let order = create_test_order(JobStatus::Ready);

    // A cutter may not drive the delivery edge.
    let result = apply_transition(&order, JobStatus::Shipped, Role::Cutter);

    match result {
        Err(CoreError::InvalidTransition {
            acting_role,
            reason,
            ..
        }) => {
            assert_eq!(acting_role, Role::Cutter);
            assert!(reason.contains("not permitted"));
        }
        other => panic!("Expected InvalidTransition, got: {other:?}"),
    }
}

#[test]
fn test_rejected_transition_leaves_snapshot_unchanged() {
    let order = create_test_order(JobStatus::Cutting);
    let before = order.clone();

    let result = apply_transition(&order, JobStatus::Ready, Role::Cutter);

    assert!(result.is_err());
    assert_eq!(order, before);
}

#[test]
fn test_completion_denormalizes_completed_quantity() {
    let mut order = create_test_order(JobStatus::Shipped);
    order.completed_quantity = 30;

    let completed = apply_transition(&order, JobStatus::Completed, Role::Delivery)
        .expect("delivery must be able to complete a shipped order");

    assert_eq!(completed.completed_quantity, completed.quantity);
    // The input snapshot is untouched.
    assert_eq!(order.completed_quantity, 30);
}

#[test]
fn test_guest_may_drive_no_edge() {
    for from in JobStatus::ORDER {
        if let Some(to) = from.successor() {
            assert!(!can_transition(from, to, Role::Guest));
        }
    }
}
