// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for API tests.

use crate::request_response::{CreateJobOrderRequest, SignupRequest};
use cutshop::Principal;
use cutshop_domain::{Employee, JobStatus, Role};
use cutshop_persistence::Persistence;

/// Creates an isolated in-memory persistence adapter for a test.
pub fn setup_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Creates a principal with the given role.
pub fn principal(role: Role) -> Principal {
    Principal::new(format!("usr_{}", role.as_str()), role)
}

/// Creates a valid job order request.
pub fn create_test_order_request() -> CreateJobOrderRequest {
    CreateJobOrderRequest {
        po_number: String::from("PO-2026-001"),
        customer_name: String::from("ABC Manufacturing"),
        customer_email: String::from("procurement@abc-manufacturing.com"),
        customer_phone: String::from("+1 (555) 123-4567"),
        delivery_address: String::from("123 Industrial Avenue"),
        steel_type: String::from("Carbon Steel"),
        quantity: 50,
        width_mm: 100.0,
        length_mm: 200.0,
        thickness_mm: 5.0,
        priority: Some(String::from("high")),
        delivery_date: Some(String::from("2026-01-20")),
        special_instructions: None,
    }
}

/// Creates a valid signup request.
pub fn create_test_signup_request(email: &str) -> SignupRequest {
    SignupRequest {
        email: String::from(email),
        full_name: Some(String::from("Test User")),
        password: String::from("MyP@ssw0rd123"),
        confirmation: String::from("MyP@ssw0rd123"),
    }
}

/// Seeds a persisted job order in the given status. Returns its ID.
pub fn seed_order(persistence: &mut Persistence, status: JobStatus) -> i64 {
    let request = create_test_order_request();
    let response = crate::handlers::create_job_order(
        persistence,
        &request,
        &principal(Role::Clerk),
    )
    .expect("Failed to seed job order");
    let id = response.job_order_id;

    // Walk the order into the requested status directly through storage;
    // tests exercising the lifecycle rules drive transitions themselves.
    if status != JobStatus::Pending {
        let mut order = persistence
            .get_job_order(id)
            .expect("Failed to load seeded order")
            .expect("Seeded order should exist");
        order.status = status;
        persistence
            .save_job_order(&order)
            .expect("Failed to store seeded status");
    }
    id
}

/// Seeds a persisted employee. Returns the employee's ID.
pub fn seed_employee(persistence: &mut Persistence, current_salary: i64) -> i64 {
    let employee = Employee {
        employee_id: None,
        name: String::from("Somchai P."),
        position: String::from("Senior Cutter"),
        employee_code: String::from("EMP-001"),
        start_date: String::from("2020-03-01"),
        bank_account: String::from("123-4-56789-0"),
        bank_name: String::from("Bangkok Bank"),
        base_salary: current_salary,
        current_salary,
    };
    persistence
        .save_employee(&employee)
        .expect("Failed to seed employee")
}
