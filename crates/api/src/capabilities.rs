// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities expose what actions a principal is permitted to perform
//! without leaking permission logic into views. They are advisory only
//! and never replace the checks at the API boundary.

use crate::auth::AuthorizationService;
use crate::request_response::{Capability, GlobalCapabilities, JobOrderCapabilities};
use cutshop::{Principal, edge_roles};
use cutshop_domain::JobOrder;

/// Computes global capabilities for a signed-in principal.
#[must_use]
pub fn compute_global_capabilities(principal: &Principal) -> GlobalCapabilities {
    let role = principal.role;

    GlobalCapabilities {
        can_create_job_order: Capability::from_bool(
            AuthorizationService::ORDER_INTAKE_ROLES.contains(&role),
        ),
        can_record_production: Capability::from_bool(
            AuthorizationService::PRODUCTION_ROLES.contains(&role),
        ),
        can_record_delivery: Capability::from_bool(matches!(
            role,
            cutshop_domain::Role::Delivery | cutshop_domain::Role::Superadmin
        )),
        can_manage_customers: Capability::from_bool(
            AuthorizationService::CUSTOMER_ROLES.contains(&role),
        ),
        can_manage_payroll: Capability::from_bool(
            AuthorizationService::PAYROLL_ROLES.contains(&role),
        ),
        can_manage_users: Capability::from_bool(
            AuthorizationService::USER_ADMIN_ROLES.contains(&role),
        ),
    }
}

/// Computes per-order capabilities for a signed-in principal.
///
/// An order can be advanced when it has a next status and the
/// principal's role is permitted to drive that edge.
#[must_use]
pub fn compute_job_order_capabilities(
    principal: &Principal,
    order: &JobOrder,
) -> JobOrderCapabilities {
    let next = order.status.successor();
    let can_advance =
        next.is_some() && edge_roles(order.status).contains(&principal.role);

    JobOrderCapabilities {
        can_advance: Capability::from_bool(can_advance),
        next_status: next.map(|status| status.as_str().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutshop_domain::{JobStatus, Priority, Role, SteelType};

    fn principal(role: Role) -> Principal {
        Principal::new(String::from("user-test"), role)
    }

    fn order(status: JobStatus) -> JobOrder {
        let mut order = JobOrder::new(
            String::from("PO-2026-001"),
            String::from("ABC Manufacturing"),
            String::from("procurement@abc-manufacturing.com"),
            String::from("+1 (555) 123-4567"),
            String::from("123 Industrial Avenue"),
            SteelType::CarbonSteel,
            50,
            100.0,
            200.0,
            5.0,
            Priority::Normal,
            String::from("2026-01-15T09:30:00Z"),
        );
        order.status = status;
        order
    }

    #[test]
    fn test_clerk_capabilities() {
        let caps = compute_global_capabilities(&principal(Role::Clerk));

        assert!(caps.can_create_job_order.is_allowed());
        assert!(caps.can_manage_customers.is_allowed());
        assert!(caps.can_manage_payroll.is_allowed());
        assert!(!caps.can_record_production.is_allowed());
        assert!(!caps.can_record_delivery.is_allowed());
        assert!(!caps.can_manage_users.is_allowed());
    }

    #[test]
    fn test_guest_has_no_capabilities() {
        let caps = compute_global_capabilities(&principal(Role::Guest));

        assert!(!caps.can_create_job_order.is_allowed());
        assert!(!caps.can_record_production.is_allowed());
        assert!(!caps.can_record_delivery.is_allowed());
        assert!(!caps.can_manage_customers.is_allowed());
        assert!(!caps.can_manage_payroll.is_allowed());
        assert!(!caps.can_manage_users.is_allowed());
    }

    #[test]
    fn test_superadmin_has_all_capabilities() {
        let caps = compute_global_capabilities(&principal(Role::Superadmin));

        assert!(caps.can_create_job_order.is_allowed());
        assert!(caps.can_record_production.is_allowed());
        assert!(caps.can_record_delivery.is_allowed());
        assert!(caps.can_manage_customers.is_allowed());
        assert!(caps.can_manage_payroll.is_allowed());
        assert!(caps.can_manage_users.is_allowed());
    }

    #[test]
    fn test_cutter_can_advance_production_stages_only() {
        let cutter = principal(Role::Cutter);

        let caps = compute_job_order_capabilities(&cutter, &order(JobStatus::Cutting));
        assert!(caps.can_advance.is_allowed());
        assert_eq!(caps.next_status.as_deref(), Some("weighing"));

        let caps = compute_job_order_capabilities(&cutter, &order(JobStatus::Ready));
        assert!(!caps.can_advance.is_allowed());
        assert_eq!(caps.next_status.as_deref(), Some("shipped"));
    }

    #[test]
    fn test_completed_order_cannot_advance() {
        let caps = compute_job_order_capabilities(
            &principal(Role::Superadmin),
            &order(JobStatus::Completed),
        );
        assert!(!caps.can_advance.is_allowed());
        assert_eq!(caps.next_status, None);
    }
}
