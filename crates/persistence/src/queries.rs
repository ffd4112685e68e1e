// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side queries against the SQLite schema.

use crate::data_models::{
    AccountData, AdjustmentRow, CustomerRow, EmployeeRow, JobOrderRow, SessionData,
};
use crate::diesel_schema;
use crate::error::PersistenceError;
use cutshop_domain::{Customer, Employee, JobOrder, Profile, SalaryAdjustment};
use diesel::prelude::*;

/// Retrieves an account (profile plus credential hash) by email.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_account_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<AccountData>, PersistenceError> {
    diesel_schema::profiles::table
        .filter(diesel_schema::profiles::email.eq(email))
        .first::<AccountData>(conn)
        .optional()
        .map_err(Into::into)
}

/// Retrieves an account by its opaque user ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_account_by_user_id(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Option<AccountData>, PersistenceError> {
    diesel_schema::profiles::table
        .filter(diesel_schema::profiles::user_id.eq(user_id))
        .first::<AccountData>(conn)
        .optional()
        .map_err(Into::into)
}

/// Lists all profiles, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored role is invalid.
pub fn list_profiles(conn: &mut SqliteConnection) -> Result<Vec<Profile>, PersistenceError> {
    let rows: Vec<AccountData> = diesel_schema::profiles::table
        .order(diesel_schema::profiles::profile_id.desc())
        .load::<AccountData>(conn)?;

    rows.iter().map(AccountData::to_profile).collect()
}

/// Retrieves a session by token.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_session_by_token(
    conn: &mut SqliteConnection,
    token: &str,
) -> Result<Option<SessionData>, PersistenceError> {
    diesel_schema::sessions::table
        .filter(diesel_schema::sessions::token.eq(token))
        .first::<SessionData>(conn)
        .optional()
        .map_err(Into::into)
}

/// Retrieves a customer by ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_customer(
    conn: &mut SqliteConnection,
    customer_id: i64,
) -> Result<Option<Customer>, PersistenceError> {
    let row: Option<CustomerRow> = diesel_schema::customers::table
        .find(customer_id)
        .first::<CustomerRow>(conn)
        .optional()?;

    Ok(row.map(CustomerRow::into_customer))
}

/// Lists all customers, newest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_customers(conn: &mut SqliteConnection) -> Result<Vec<Customer>, PersistenceError> {
    let rows: Vec<CustomerRow> = diesel_schema::customers::table
        .order(diesel_schema::customers::customer_id.desc())
        .load::<CustomerRow>(conn)?;

    Ok(rows.into_iter().map(CustomerRow::into_customer).collect())
}

/// Retrieves a job order by ID.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be mapped back
/// to a domain order.
pub fn get_job_order(
    conn: &mut SqliteConnection,
    job_order_id: i64,
) -> Result<Option<JobOrder>, PersistenceError> {
    let row: Option<JobOrderRow> = diesel_schema::job_orders::table
        .find(job_order_id)
        .first::<JobOrderRow>(conn)
        .optional()?;

    row.map(JobOrderRow::into_job_order).transpose()
}

/// Lists all job orders, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped back
/// to a domain order.
pub fn list_job_orders(conn: &mut SqliteConnection) -> Result<Vec<JobOrder>, PersistenceError> {
    let rows: Vec<JobOrderRow> = diesel_schema::job_orders::table
        .order(diesel_schema::job_orders::job_order_id.desc())
        .load::<JobOrderRow>(conn)?;

    rows.into_iter().map(JobOrderRow::into_job_order).collect()
}

/// Retrieves an employee by ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<Employee>, PersistenceError> {
    let row: Option<EmployeeRow> = diesel_schema::employees::table
        .find(employee_id)
        .first::<EmployeeRow>(conn)
        .optional()?;

    Ok(row.map(EmployeeRow::into_employee))
}

/// Lists all employees, by payroll code order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_employees(conn: &mut SqliteConnection) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<EmployeeRow> = diesel_schema::employees::table
        .order(diesel_schema::employees::employee_code.asc())
        .load::<EmployeeRow>(conn)?;

    Ok(rows.into_iter().map(EmployeeRow::into_employee).collect())
}

/// Lists salary adjustments, newest first, optionally for one employee.
///
/// # Errors
///
/// Returns an error if the query fails or a stored kind is invalid.
pub fn list_adjustments(
    conn: &mut SqliteConnection,
    employee_id: Option<i64>,
) -> Result<Vec<SalaryAdjustment>, PersistenceError> {
    let rows: Vec<AdjustmentRow> = match employee_id {
        Some(id) => diesel_schema::salary_adjustments::table
            .filter(diesel_schema::salary_adjustments::employee_id.eq(id))
            .order(diesel_schema::salary_adjustments::adjustment_id.desc())
            .load::<AdjustmentRow>(conn)?,
        None => diesel_schema::salary_adjustments::table
            .order(diesel_schema::salary_adjustments::adjustment_id.desc())
            .load::<AdjustmentRow>(conn)?,
    };

    rows.into_iter().map(AdjustmentRow::into_adjustment).collect()
}
