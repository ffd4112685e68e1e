// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payroll handler tests.

use crate::error::ApiError;
use crate::handlers::{adjust_salary, generate_payslip, list_adjustments, list_employees};
use crate::request_response::{AdjustSalaryRequest, GeneratePayslipRequest};
use cutshop_domain::Role;

use super::helpers::{principal, seed_employee, setup_persistence};

#[test]
fn test_adjustment_updates_salary_and_history() {
    let mut persistence = setup_persistence();
    let employee_id = seed_employee(&mut persistence, 2_500_000);

    let request = AdjustSalaryRequest {
        employee_id,
        amount: 150_000,
        reason: String::from("Promotion"),
    };

    let response = adjust_salary(&mut persistence, &request, &principal(Role::Clerk))
        .expect("clerk must apply adjustments");

    assert_eq!(response.kind, "increase");
    assert_eq!(response.new_salary, Some(2_650_000));

    let employees = list_employees(&mut persistence, &principal(Role::Clerk)).unwrap();
    assert_eq!(employees[0].current_salary, 2_650_000);

    let history =
        list_adjustments(&mut persistence, Some(employee_id), &principal(Role::Clerk)).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].amount, 150_000);
}

#[test]
fn test_opposite_adjustments_restore_salary_exactly() {
    let mut persistence = setup_persistence();
    let employee_id = seed_employee(&mut persistence, 2_500_000);
    let clerk = principal(Role::Clerk);

    let up = AdjustSalaryRequest {
        employee_id,
        amount: 100_000,
        reason: String::from("Raise"),
    };
    let down = AdjustSalaryRequest {
        employee_id,
        amount: -100_000,
        reason: String::from("Correction"),
    };

    adjust_salary(&mut persistence, &up, &clerk).unwrap();
    let response = adjust_salary(&mut persistence, &down, &clerk).unwrap();

    assert_eq!(response.kind, "decrease");
    assert_eq!(response.new_salary, Some(2_500_000));

    // Both adjustments remain in the append-only history.
    let history = list_adjustments(&mut persistence, Some(employee_id), &clerk).unwrap();
    assert_eq!(history.len(), 2);
}

#[test]
fn test_zero_adjustment_is_rejected_without_mutation() {
    let mut persistence = setup_persistence();
    let employee_id = seed_employee(&mut persistence, 2_500_000);
    let clerk = principal(Role::Clerk);

    let request = AdjustSalaryRequest {
        employee_id,
        amount: 0,
        reason: String::from("No-op"),
    };

    let result = adjust_salary(&mut persistence, &request, &clerk);
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));

    let employees = list_employees(&mut persistence, &clerk).unwrap();
    assert_eq!(employees[0].current_salary, 2_500_000);
    assert!(list_adjustments(&mut persistence, Some(employee_id), &clerk)
        .unwrap()
        .is_empty());
}

#[test]
fn test_adjustment_for_missing_employee_is_not_found() {
    let mut persistence = setup_persistence();

    let request = AdjustSalaryRequest {
        employee_id: 999,
        amount: 100_000,
        reason: String::from("Raise"),
    };

    let result = adjust_salary(&mut persistence, &request, &principal(Role::Clerk));
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_payslip_net_is_income_minus_deductions() {
    let mut persistence = setup_persistence();
    let employee_id = seed_employee(&mut persistence, 2_800_000);

    let request = GeneratePayslipRequest {
        employee_id,
        overtime: 200_000,
        bonus: 100_000,
        absence_deduction: 50_000,
    };

    let payslip = generate_payslip(&mut persistence, &request, &principal(Role::Clerk))
        .expect("clerk must generate payslips");

    assert_eq!(payslip.gross_income, 3_100_000);
    assert_eq!(
        payslip.net_income,
        payslip.gross_income - payslip.total_deductions
    );
    assert_eq!(payslip.income.len(), 3);
    assert_eq!(payslip.deductions.len(), 3);

    // Social security is capped at ฿750 (75,000 minor units).
    let social_security = payslip
        .deductions
        .iter()
        .find(|item| item.description == "Social Security")
        .unwrap();
    assert_eq!(social_security.amount, 75_000);
}

#[test]
fn test_payslip_is_a_projection_not_a_mutation() {
    let mut persistence = setup_persistence();
    let employee_id = seed_employee(&mut persistence, 2_800_000);
    let clerk = principal(Role::Clerk);

    let request = GeneratePayslipRequest {
        employee_id,
        overtime: 200_000,
        bonus: 0,
        absence_deduction: 0,
    };

    // Generating twice changes nothing observable.
    let first = generate_payslip(&mut persistence, &request, &clerk).unwrap();
    let second = generate_payslip(&mut persistence, &request, &clerk).unwrap();
    assert_eq!(first, second);

    let employees = list_employees(&mut persistence, &clerk).unwrap();
    assert_eq!(employees[0].current_salary, 2_800_000);
}
