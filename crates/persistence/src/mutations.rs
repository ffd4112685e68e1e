// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write-side mutations against the SQLite schema.

use crate::data_models::{
    NewAdjustmentRow, NewCustomerRow, NewEmployeeRow, NewJobOrderRow, NewProfileRow, NewSessionRow,
};
use crate::diesel_schema;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use cutshop_domain::{Customer, Employee, JobOrder, Role, SalaryAdjustment};
use diesel::prelude::*;

/// Creates a new account with a bcrypt-hashed password.
///
/// Returns the new profile's row ID.
///
/// # Errors
///
/// Returns an error if hashing fails or the email or user ID is already
/// taken.
pub fn create_account(
    conn: &mut SqliteConnection,
    user_id: &str,
    email: &str,
    full_name: Option<&str>,
    password: &str,
    role: Role,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    let row = NewProfileRow {
        user_id: user_id.to_string(),
        email: email.to_string(),
        full_name: full_name.map(ToString::to_string),
        role: role.as_str().to_string(),
        password_hash,
        created_at: created_at.to_string(),
    };

    diesel::insert_into(diesel_schema::profiles::table)
        .values(&row)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Changes a profile's role assignment.
///
/// # Errors
///
/// Returns an error if the profile does not exist or the update fails.
pub fn set_profile_role(
    conn: &mut SqliteConnection,
    user_id: &str,
    role: Role,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        diesel_schema::profiles::table.filter(diesel_schema::profiles::user_id.eq(user_id)),
    )
    .set(diesel_schema::profiles::role.eq(role.as_str()))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Profile not found for user '{user_id}'"
        )));
    }
    Ok(())
}

/// Creates a new session for a user.
///
/// Returns the new session's row ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_session(
    conn: &mut SqliteConnection,
    token: &str,
    user_id: &str,
    created_at: &str,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    let row = NewSessionRow {
        token: token.to_string(),
        user_id: user_id.to_string(),
        created_at: created_at.to_string(),
        expires_at: expires_at.to_string(),
        last_seen_at: created_at.to_string(),
    };

    diesel::insert_into(diesel_schema::sessions::table)
        .values(&row)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Updates a session's last-seen timestamp.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_session_activity(
    conn: &mut SqliteConnection,
    session_id: i64,
    seen_at: &str,
) -> Result<(), PersistenceError> {
    diesel::update(diesel_schema::sessions::table.find(session_id))
        .set(diesel_schema::sessions::last_seen_at.eq(seen_at))
        .execute(conn)?;
    Ok(())
}

/// Deletes a session by token.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_session(conn: &mut SqliteConnection, token: &str) -> Result<(), PersistenceError> {
    diesel::delete(
        diesel_schema::sessions::table.filter(diesel_schema::sessions::token.eq(token)),
    )
    .execute(conn)?;
    Ok(())
}

/// Deletes all sessions that expired at or before `now`.
///
/// Timestamps are ISO 8601 strings, so lexicographic comparison matches
/// chronological order.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_expired_sessions(
    conn: &mut SqliteConnection,
    now: &str,
) -> Result<usize, PersistenceError> {
    diesel::delete(
        diesel_schema::sessions::table.filter(diesel_schema::sessions::expires_at.le(now)),
    )
    .execute(conn)
    .map_err(Into::into)
}

/// Inserts a customer record. Returns the new row ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_customer(
    conn: &mut SqliteConnection,
    customer: &Customer,
) -> Result<i64, PersistenceError> {
    let row = NewCustomerRow::from_customer(customer);

    diesel::insert_into(diesel_schema::customers::table)
        .values(&row)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Updates a customer record in place.
///
/// # Errors
///
/// Returns an error if the customer does not exist or the update fails.
pub fn update_customer(
    conn: &mut SqliteConnection,
    customer_id: i64,
    customer: &Customer,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(diesel_schema::customers::table.find(customer_id))
        .set((
            diesel_schema::customers::name.eq(&customer.name),
            diesel_schema::customers::email.eq(&customer.email),
            diesel_schema::customers::phone.eq(&customer.phone),
            diesel_schema::customers::delivery_address.eq(&customer.delivery_address),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Customer {customer_id} not found"
        )));
    }
    Ok(())
}

/// Inserts a job order. Returns the new row ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_job_order(
    conn: &mut SqliteConnection,
    order: &JobOrder,
) -> Result<i64, PersistenceError> {
    let row = NewJobOrderRow::from_job_order(order)?;

    diesel::insert_into(diesel_schema::job_orders::table)
        .values(&row)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Updates a job order snapshot in place.
///
/// # Errors
///
/// Returns an error if the order does not exist or the update fails.
pub fn update_job_order(
    conn: &mut SqliteConnection,
    job_order_id: i64,
    order: &JobOrder,
) -> Result<(), PersistenceError> {
    let row = NewJobOrderRow::from_job_order(order)?;

    let updated: usize = diesel::update(diesel_schema::job_orders::table.find(job_order_id))
        .set(&row)
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Job order {job_order_id} not found"
        )));
    }
    Ok(())
}

/// Inserts an employee record. Returns the new row ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_employee(
    conn: &mut SqliteConnection,
    employee: &Employee,
) -> Result<i64, PersistenceError> {
    let row = NewEmployeeRow::from_employee(employee);

    diesel::insert_into(diesel_schema::employees::table)
        .values(&row)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Updates an employee snapshot in place.
///
/// # Errors
///
/// Returns an error if the employee does not exist or the update fails.
pub fn update_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
    employee: &Employee,
) -> Result<(), PersistenceError> {
    let row = NewEmployeeRow::from_employee(employee);

    let updated: usize = diesel::update(diesel_schema::employees::table.find(employee_id))
        .set(&row)
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Employee {employee_id} not found"
        )));
    }
    Ok(())
}

/// Appends a salary adjustment to the history. Returns the new row ID.
///
/// History rows are append-only; there is no update or delete mutation
/// for adjustments.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_adjustment(
    conn: &mut SqliteConnection,
    adjustment: &SalaryAdjustment,
) -> Result<i64, PersistenceError> {
    let row = NewAdjustmentRow::from_adjustment(adjustment);

    diesel::insert_into(diesel_schema::salary_adjustments::table)
        .values(&row)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
