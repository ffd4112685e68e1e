// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee and salary adjustment persistence tests.

use super::setup;
use cutshop_domain::{AdjustmentKind, Employee, SalaryAdjustment, apply_adjustment};

fn create_test_employee() -> Employee {
    Employee {
        employee_id: None,
        name: String::from("Somchai P."),
        position: String::from("Senior Cutter"),
        employee_code: String::from("EMP-001"),
        start_date: String::from("2020-03-01"),
        bank_account: String::from("123-4-56789-0"),
        bank_name: String::from("Bangkok Bank"),
        base_salary: 2_500_000,
        current_salary: 2_500_000,
    }
}

#[test]
fn test_insert_and_fetch_employee() {
    let mut persistence = setup();

    let id = persistence.save_employee(&create_test_employee()).unwrap();
    assert!(id > 0);

    let fetched = persistence
        .get_employee(id)
        .unwrap()
        .expect("employee should exist");
    assert_eq!(fetched.employee_code, "EMP-001");
    assert_eq!(fetched.current_salary, 2_500_000);
}

#[test]
fn test_adjustment_history_is_append_only_and_ordered() {
    let mut persistence = setup();

    let id = persistence.save_employee(&create_test_employee()).unwrap();

    let first = SalaryAdjustment::new(
        id,
        100_000,
        String::from("Annual raise"),
        String::from("2026-01-01T00:00:00Z"),
    )
    .unwrap();
    let second = SalaryAdjustment::new(
        id,
        -40_000,
        String::from("Correction"),
        String::from("2026-02-01T00:00:00Z"),
    )
    .unwrap();

    persistence.append_adjustment(&first).unwrap();
    persistence.append_adjustment(&second).unwrap();

    let history = persistence.list_adjustments(Some(id)).unwrap();
    assert_eq!(history.len(), 2);
    // Newest first.
    assert_eq!(history[0].amount, -40_000);
    assert_eq!(history[0].kind, AdjustmentKind::Decrease);
    assert_eq!(history[1].amount, 100_000);
    assert_eq!(history[1].kind, AdjustmentKind::Increase);
}

#[test]
fn test_applying_and_persisting_adjustment_updates_salary() {
    let mut persistence = setup();

    let id = persistence.save_employee(&create_test_employee()).unwrap();
    let employee = persistence.get_employee(id).unwrap().unwrap();

    let adjustment = SalaryAdjustment::new(
        id,
        150_000,
        String::from("Promotion"),
        String::from("2026-03-01T00:00:00Z"),
    )
    .unwrap();

    let updated = apply_adjustment(&employee, &adjustment).unwrap();
    persistence.save_employee(&updated).unwrap();
    persistence.append_adjustment(&adjustment).unwrap();

    let fetched = persistence.get_employee(id).unwrap().unwrap();
    assert_eq!(fetched.current_salary, 2_650_000);
    // Base salary is untouched by adjustments.
    assert_eq!(fetched.base_salary, 2_500_000);
}

#[test]
fn test_adjustments_for_unknown_employee_are_rejected() {
    let mut persistence = setup();

    let adjustment = SalaryAdjustment::new(
        999,
        100_000,
        String::from("Raise"),
        String::from("2026-01-01T00:00:00Z"),
    )
    .unwrap();

    // Foreign key enforcement rejects history rows for unknown employees.
    assert!(persistence.append_adjustment(&adjustment).is_err());
}

#[test]
fn test_list_adjustments_across_employees() {
    let mut persistence = setup();

    let first_id = persistence.save_employee(&create_test_employee()).unwrap();
    let mut other = create_test_employee();
    other.employee_code = String::from("EMP-002");
    let second_id = persistence.save_employee(&other).unwrap();

    for (employee_id, amount) in [(first_id, 100_000), (second_id, 50_000)] {
        let adjustment = SalaryAdjustment::new(
            employee_id,
            amount,
            String::from("Raise"),
            String::from("2026-01-01T00:00:00Z"),
        )
        .unwrap();
        persistence.append_adjustment(&adjustment).unwrap();
    }

    assert_eq!(persistence.list_adjustments(None).unwrap().len(), 2);
    assert_eq!(persistence.list_adjustments(Some(first_id)).unwrap().len(), 1);
}
