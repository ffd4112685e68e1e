// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage capabilities injected into the layers above the core.
//!
//! The core is storage-agnostic: it defines what a store must be able to
//! do and leaves the how to an adapter. Implementations persist where
//! they like; callers see only these traits.

use cutshop_domain::{Customer, Employee, JobOrder, Profile, Role, SalaryAdjustment};

/// Errors surfaced by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The requested record does not exist.
    NotFound(String),
    /// The underlying store failed.
    Storage(String),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Storage(msg) => write!(f, "Storage error: {msg}"),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Storage capability for job orders.
pub trait JobOrderRepository {
    /// Retrieves a job order by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn get_job_order(&mut self, job_order_id: i64) -> Result<Option<JobOrder>, RepositoryError>;

    /// Lists all job orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn list_job_orders(&mut self) -> Result<Vec<JobOrder>, RepositoryError>;

    /// Saves a job order snapshot, inserting when it has no ID and
    /// updating otherwise. Returns the order's ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn save_job_order(&mut self, order: &JobOrder) -> Result<i64, RepositoryError>;
}

/// Storage capability for customer records.
pub trait CustomerRepository {
    /// Retrieves a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn get_customer(&mut self, customer_id: i64) -> Result<Option<Customer>, RepositoryError>;

    /// Lists all customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn list_customers(&mut self) -> Result<Vec<Customer>, RepositoryError>;

    /// Saves a customer record. Returns the customer's ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn save_customer(&mut self, customer: &Customer) -> Result<i64, RepositoryError>;
}

/// Storage capability for principal profiles.
pub trait ProfileRepository {
    /// Retrieves a profile by its opaque user ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn get_profile(&mut self, user_id: &str) -> Result<Option<Profile>, RepositoryError>;

    /// Lists all profiles, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn list_profiles(&mut self) -> Result<Vec<Profile>, RepositoryError>;

    /// Changes a principal's role assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile does not exist or the store fails.
    fn set_role(&mut self, user_id: &str, role: Role) -> Result<(), RepositoryError>;
}

/// Storage capability for employees and their adjustment history.
pub trait EmployeeRepository {
    /// Retrieves an employee by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn get_employee(&mut self, employee_id: i64) -> Result<Option<Employee>, RepositoryError>;

    /// Lists all employees.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn list_employees(&mut self) -> Result<Vec<Employee>, RepositoryError>;

    /// Saves an employee snapshot. Returns the employee's ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn save_employee(&mut self, employee: &Employee) -> Result<i64, RepositoryError>;

    /// Appends an adjustment to the append-only history. Returns the
    /// adjustment's ID. History entries are never mutated or deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn append_adjustment(
        &mut self,
        adjustment: &SalaryAdjustment,
    ) -> Result<i64, RepositoryError>;

    /// Lists adjustments, newest first, optionally for one employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn list_adjustments(
        &mut self,
        employee_id: Option<i64>,
    ) -> Result<Vec<SalaryAdjustment>, RepositoryError>;
}
