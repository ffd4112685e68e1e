// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the cutshop workflow system.
//!
//! This crate provides SQLite persistence, built on Diesel, for
//! profiles, sessions, customers, job orders, employees, and the
//! salary adjustment history. It implements the repository capability
//! traits defined by the core crate, so everything above the adapter
//! stays storage-agnostic.
//!
//! `SQLite` is used in two configurations:
//!
//! - **In-memory** — development and tests. Each in-memory database gets
//!   a unique shared-cache name from an atomic counter, so tests are
//!   isolated without time-based collisions.
//! - **File-based** — the server. WAL mode is enabled for better read
//!   concurrency, and foreign key enforcement is verified at startup.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod repository;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{AccountData, SessionData};
pub use error::PersistenceError;

use cutshop_domain::{Customer, Employee, JobOrder, Profile, Role, SalaryAdjustment};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so
/// test databases never collide.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter over a `SQLite` connection.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter with an in-memory `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError(String::from("Invalid database path"))
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Accounts & Profiles
    // ========================================================================

    /// Creates a new account with a bcrypt-hashed password.
    ///
    /// Returns the new profile's row ID.
    ///
    /// # Arguments
    ///
    /// * `user_id` - Opaque stable identifier for the principal
    /// * `email` - Sign-in email (unique)
    /// * `full_name` - Optional display name
    /// * `password` - Plain-text password (hashed before storage)
    /// * `role` - Initial role assignment
    /// * `created_at` - Creation timestamp (ISO 8601)
    ///
    /// # Errors
    ///
    /// Returns an error if hashing fails or the email is already taken.
    pub fn create_account(
        &mut self,
        user_id: &str,
        email: &str,
        full_name: Option<&str>,
        password: &str,
        role: Role,
        created_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::create_account(
            &mut self.conn,
            user_id,
            email,
            full_name,
            password,
            role,
            created_at,
        )
    }

    /// Retrieves an account (profile plus credential hash) by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_account_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::get_account_by_email(&mut self.conn, email)
    }

    /// Retrieves an account by its opaque user ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_account_by_user_id(
        &mut self,
        user_id: &str,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::get_account_by_user_id(&mut self.conn, user_id)
    }

    /// Verifies a password against a stored bcrypt hash.
    ///
    /// # Errors
    ///
    /// Returns an error if verification itself fails (not on mismatch).
    pub fn verify_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, PersistenceError> {
        Ok(bcrypt::verify(password, password_hash)?)
    }

    // ========================================================================
    // Sessions
    // ========================================================================

    /// Creates a new session for a user. Returns the session row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_session(
        &mut self,
        token: &str,
        user_id: &str,
        created_at: &str,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::create_session(&mut self.conn, token, user_id, created_at, expires_at)
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_session_by_token(
        &mut self,
        token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::get_session_by_token(&mut self.conn, token)
    }

    /// Updates a session's last-seen timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_session_activity(
        &mut self,
        session_id: i64,
        seen_at: &str,
    ) -> Result<(), PersistenceError> {
        mutations::update_session_activity(&mut self.conn, session_id, seen_at)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_session(&mut self, token: &str) -> Result<(), PersistenceError> {
        mutations::delete_session(&mut self.conn, token)
    }

    /// Deletes all sessions that expired at or before `now`.
    ///
    /// Returns the number of sessions removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_expired_sessions(&mut self, now: &str) -> Result<usize, PersistenceError> {
        mutations::delete_expired_sessions(&mut self.conn, now)
    }

    // ========================================================================
    // Profiles (administrative view)
    // ========================================================================

    /// Retrieves a profile by its opaque user ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored role is invalid.
    pub fn get_profile(&mut self, user_id: &str) -> Result<Option<Profile>, PersistenceError> {
        queries::get_account_by_user_id(&mut self.conn, user_id)?
            .map(|account| account.to_profile())
            .transpose()
    }

    /// Lists all profiles, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored role is invalid.
    pub fn list_profiles(&mut self) -> Result<Vec<Profile>, PersistenceError> {
        queries::list_profiles(&mut self.conn)
    }

    /// Changes a profile's role assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile does not exist or the update fails.
    pub fn set_profile_role(&mut self, user_id: &str, role: Role) -> Result<(), PersistenceError> {
        mutations::set_profile_role(&mut self.conn, user_id, role)
    }

    // ========================================================================
    // Customers
    // ========================================================================

    /// Retrieves a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_customer(&mut self, customer_id: i64) -> Result<Option<Customer>, PersistenceError> {
        queries::get_customer(&mut self.conn, customer_id)
    }

    /// Lists all customers, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_customers(&mut self) -> Result<Vec<Customer>, PersistenceError> {
        queries::list_customers(&mut self.conn)
    }

    /// Saves a customer record, inserting when it has no ID and updating
    /// otherwise. Returns the customer's ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save_customer(&mut self, customer: &Customer) -> Result<i64, PersistenceError> {
        match customer.customer_id {
            Some(id) => {
                mutations::update_customer(&mut self.conn, id, customer)?;
                Ok(id)
            }
            None => mutations::insert_customer(&mut self.conn, customer),
        }
    }

    // ========================================================================
    // Job Orders
    // ========================================================================

    /// Retrieves a job order by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is invalid.
    pub fn get_job_order(
        &mut self,
        job_order_id: i64,
    ) -> Result<Option<JobOrder>, PersistenceError> {
        queries::get_job_order(&mut self.conn, job_order_id)
    }

    /// Lists all job orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is invalid.
    pub fn list_job_orders(&mut self) -> Result<Vec<JobOrder>, PersistenceError> {
        queries::list_job_orders(&mut self.conn)
    }

    /// Saves a job order snapshot, inserting when it has no ID and
    /// updating otherwise. Returns the order's ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save_job_order(&mut self, order: &JobOrder) -> Result<i64, PersistenceError> {
        match order.job_order_id {
            Some(id) => {
                mutations::update_job_order(&mut self.conn, id, order)?;
                Ok(id)
            }
            None => mutations::insert_job_order(&mut self.conn, order),
        }
    }

    // ========================================================================
    // Employees & Salary Adjustments
    // ========================================================================

    /// Retrieves an employee by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_employee(&mut self, employee_id: i64) -> Result<Option<Employee>, PersistenceError> {
        queries::get_employee(&mut self.conn, employee_id)
    }

    /// Lists all employees, by payroll code order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_employees(&mut self) -> Result<Vec<Employee>, PersistenceError> {
        queries::list_employees(&mut self.conn)
    }

    /// Saves an employee snapshot, inserting when it has no ID and
    /// updating otherwise. Returns the employee's ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save_employee(&mut self, employee: &Employee) -> Result<i64, PersistenceError> {
        match employee.employee_id {
            Some(id) => {
                mutations::update_employee(&mut self.conn, id, employee)?;
                Ok(id)
            }
            None => mutations::insert_employee(&mut self.conn, employee),
        }
    }

    /// Appends a salary adjustment to the append-only history. Returns
    /// the adjustment's ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn append_adjustment(
        &mut self,
        adjustment: &SalaryAdjustment,
    ) -> Result<i64, PersistenceError> {
        mutations::insert_adjustment(&mut self.conn, adjustment)
    }

    /// Lists adjustments, newest first, optionally for one employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_adjustments(
        &mut self,
        employee_id: Option<i64>,
    ) -> Result<Vec<SalaryAdjustment>, PersistenceError> {
        queries::list_adjustments(&mut self.conn, employee_id)
    }
}
