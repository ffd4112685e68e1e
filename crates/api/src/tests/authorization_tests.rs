// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authorization failure tests.
//!
//! Every role-gated handler must reject principals outside its
//! whitelist with `AccessDenied`, never silently proceed.

use crate::error::ApiError;
use crate::handlers::{
    adjust_salary, create_customer, create_job_order, generate_payslip, list_adjustments,
    list_customers, list_employees, list_profiles, production_summary, role_stats, set_role,
};
use crate::request_response::{
    AdjustSalaryRequest, CreateCustomerRequest, GeneratePayslipRequest, SetRoleRequest,
};
use cutshop_domain::Role;

use super::helpers::{create_test_order_request, principal, seed_employee, setup_persistence};

fn assert_denied(result: Result<impl std::fmt::Debug, ApiError>) {
    match result {
        Err(ApiError::AccessDenied { .. }) => {}
        other => panic!("Expected AccessDenied, got: {other:?}"),
    }
}

#[test]
fn test_create_job_order_rejects_non_intake_roles() {
    let mut persistence = setup_persistence();
    let request = create_test_order_request();

    for role in [Role::Cutter, Role::Delivery, Role::Guest] {
        assert_denied(create_job_order(&mut persistence, &request, &principal(role)));
    }
}

#[test]
fn test_create_job_order_denial_names_required_roles() {
    let mut persistence = setup_persistence();
    let request = create_test_order_request();

    let result = create_job_order(&mut persistence, &request, &principal(Role::Guest));
    match result {
        Err(ApiError::AccessDenied { resource, message }) => {
            assert_eq!(resource, "create_job_order");
            assert!(message.contains("superadmin"));
            assert!(message.contains("clerk"));
            assert!(message.contains("supervisor"));
        }
        other => panic!("Expected AccessDenied, got: {other:?}"),
    }
}

#[test]
fn test_production_summary_rejects_clerk_and_delivery() {
    let mut persistence = setup_persistence();

    for role in [Role::Clerk, Role::Delivery, Role::Guest] {
        assert_denied(production_summary(&mut persistence, &principal(role)));
    }
}

#[test]
fn test_customer_handlers_reject_non_office_roles() {
    let mut persistence = setup_persistence();
    let request = CreateCustomerRequest {
        name: String::from("ABC Manufacturing"),
        email: String::from("procurement@abc-manufacturing.com"),
        phone: String::from("+1 (555) 123-4567"),
        delivery_address: String::from("123 Industrial Avenue"),
    };

    for role in [Role::Cutter, Role::Delivery, Role::Guest] {
        assert_denied(create_customer(&mut persistence, &request, &principal(role)));
        assert_denied(list_customers(&mut persistence, &principal(role)));
    }
}

#[test]
fn test_user_administration_is_superadmin_only() {
    let mut persistence = setup_persistence();

    for role in [
        Role::Clerk,
        Role::Supervisor,
        Role::Cutter,
        Role::Delivery,
        Role::Guest,
    ] {
        assert_denied(list_profiles(&mut persistence, &principal(role)));
        assert_denied(role_stats(&mut persistence, &principal(role)));

        let request = SetRoleRequest {
            user_id: String::from("usr_target"),
            role: String::from("clerk"),
        };
        assert_denied(set_role(&mut persistence, &request, &principal(role)));
    }
}

#[test]
fn test_payroll_handlers_reject_non_payroll_roles() {
    let mut persistence = setup_persistence();
    let employee_id = seed_employee(&mut persistence, 2_500_000);

    let adjust = AdjustSalaryRequest {
        employee_id,
        amount: 100_000,
        reason: String::from("Raise"),
    };
    let payslip = GeneratePayslipRequest {
        employee_id,
        overtime: 0,
        bonus: 0,
        absence_deduction: 0,
    };

    for role in [Role::Supervisor, Role::Cutter, Role::Delivery, Role::Guest] {
        assert_denied(adjust_salary(&mut persistence, &adjust, &principal(role)));
        assert_denied(list_adjustments(&mut persistence, None, &principal(role)));
        assert_denied(list_employees(&mut persistence, &principal(role)));
        assert_denied(generate_payslip(&mut persistence, &payslip, &principal(role)));
    }
}

#[test]
fn test_unknown_role_string_in_set_role_is_denied() {
    let mut persistence = setup_persistence();

    let request = SetRoleRequest {
        user_id: String::from("usr_target"),
        role: String::from("manager"),
    };

    // Default deny: an unknown role string never acts as a wildcard.
    let result = set_role(&mut persistence, &request, &principal(Role::Superadmin));
    assert_denied(result);
}

#[test]
fn test_denied_mutations_leave_no_trace() {
    let mut persistence = setup_persistence();
    let request = create_test_order_request();

    let result = create_job_order(&mut persistence, &request, &principal(Role::Guest));
    assert_denied(result);

    // The denied creation wrote nothing.
    let all = crate::handlers::list_job_orders(&mut persistence, &principal(Role::Superadmin))
        .expect("listing must succeed");
    assert!(all.is_empty());
}
