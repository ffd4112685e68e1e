// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Implementations of the core repository capability traits.
//!
//! The core stays storage-agnostic; this adapter is where its abstract
//! get/list/save capabilities meet SQLite.

use crate::Persistence;
use crate::error::PersistenceError;
use cutshop::{
    CustomerRepository, EmployeeRepository, JobOrderRepository, ProfileRepository, RepositoryError,
};
use cutshop_domain::{Customer, Employee, JobOrder, Profile, Role, SalaryAdjustment};

impl From<PersistenceError> for RepositoryError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound(msg)
            | PersistenceError::SessionNotFound(msg) => Self::NotFound(msg),
            other => Self::Storage(other.to_string()),
        }
    }
}

impl JobOrderRepository for Persistence {
    fn get_job_order(&mut self, job_order_id: i64) -> Result<Option<JobOrder>, RepositoryError> {
        Self::get_job_order(self, job_order_id).map_err(Into::into)
    }

    fn list_job_orders(&mut self) -> Result<Vec<JobOrder>, RepositoryError> {
        Self::list_job_orders(self).map_err(Into::into)
    }

    fn save_job_order(&mut self, order: &JobOrder) -> Result<i64, RepositoryError> {
        Self::save_job_order(self, order).map_err(Into::into)
    }
}

impl CustomerRepository for Persistence {
    fn get_customer(&mut self, customer_id: i64) -> Result<Option<Customer>, RepositoryError> {
        Self::get_customer(self, customer_id).map_err(Into::into)
    }

    fn list_customers(&mut self) -> Result<Vec<Customer>, RepositoryError> {
        Self::list_customers(self).map_err(Into::into)
    }

    fn save_customer(&mut self, customer: &Customer) -> Result<i64, RepositoryError> {
        Self::save_customer(self, customer).map_err(Into::into)
    }
}

impl ProfileRepository for Persistence {
    fn get_profile(&mut self, user_id: &str) -> Result<Option<Profile>, RepositoryError> {
        Self::get_profile(self, user_id).map_err(Into::into)
    }

    fn list_profiles(&mut self) -> Result<Vec<Profile>, RepositoryError> {
        Self::list_profiles(self).map_err(Into::into)
    }

    fn set_role(&mut self, user_id: &str, role: Role) -> Result<(), RepositoryError> {
        self.set_profile_role(user_id, role).map_err(Into::into)
    }
}

impl EmployeeRepository for Persistence {
    fn get_employee(&mut self, employee_id: i64) -> Result<Option<Employee>, RepositoryError> {
        Self::get_employee(self, employee_id).map_err(Into::into)
    }

    fn list_employees(&mut self) -> Result<Vec<Employee>, RepositoryError> {
        Self::list_employees(self).map_err(Into::into)
    }

    fn save_employee(&mut self, employee: &Employee) -> Result<i64, RepositoryError> {
        Self::save_employee(self, employee).map_err(Into::into)
    }

    fn append_adjustment(&mut self, adjustment: &SalaryAdjustment) -> Result<i64, RepositoryError> {
        Self::append_adjustment(self, adjustment).map_err(Into::into)
    }

    fn list_adjustments(
        &mut self,
        employee_id: Option<i64>,
    ) -> Result<Vec<SalaryAdjustment>, RepositoryError> {
        Self::list_adjustments(self, employee_id).map_err(Into::into)
    }
}
