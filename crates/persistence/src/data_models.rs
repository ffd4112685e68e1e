// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs bridging the Diesel schema and the domain types.

use std::str::FromStr;

use crate::diesel_schema::{
    customers, employees, job_orders, profiles, salary_adjustments, sessions,
};
use crate::error::PersistenceError;
use cutshop_domain::{
    AdjustmentKind, Customer, Employee, JobOrder, JobStatus, Priority, Profile, Role,
    SalaryAdjustment, SteelType,
};
use diesel::prelude::*;

/// A stored account: a profile row including the credential hash.
///
/// Exposed to the API layer for authentication; the hash never leaves
/// the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct AccountData {
    pub profile_id: i64,
    pub user_id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: String,
    pub password_hash: String,
    pub created_at: String,
}

impl AccountData {
    /// Converts the account row into a domain profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored role string is not a known role.
    pub fn to_profile(&self) -> Result<Profile, PersistenceError> {
        let role = Role::from_str(&self.role)
            .map_err(|e| PersistenceError::InvalidStoredValue(e.to_string()))?;
        Ok(Profile::new(
            self.user_id.clone(),
            self.email.clone(),
            self.full_name.clone(),
            role,
            self.created_at.clone(),
        ))
    }
}

/// Insertable profile row.
#[derive(Debug, Insertable)]
#[diesel(table_name = profiles)]
pub struct NewProfileRow {
    pub user_id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: String,
    pub password_hash: String,
    pub created_at: String,
}

/// A stored session.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct SessionData {
    pub session_id: i64,
    pub token: String,
    pub user_id: String,
    pub created_at: String,
    pub expires_at: String,
    pub last_seen_at: String,
}

/// Insertable session row.
#[derive(Debug, Insertable)]
#[diesel(table_name = sessions)]
pub struct NewSessionRow {
    pub token: String,
    pub user_id: String,
    pub created_at: String,
    pub expires_at: String,
    pub last_seen_at: String,
}

/// A stored customer row.
#[derive(Debug, Clone, Queryable)]
pub struct CustomerRow {
    pub customer_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub delivery_address: String,
    pub created_at: String,
}

impl CustomerRow {
    /// Converts the row into a domain customer.
    #[must_use]
    pub fn into_customer(self) -> Customer {
        Customer {
            customer_id: Some(self.customer_id),
            name: self.name,
            email: self.email,
            phone: self.phone,
            delivery_address: self.delivery_address,
            created_at: self.created_at,
        }
    }
}

/// Insertable customer row.
#[derive(Debug, Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub delivery_address: String,
    pub created_at: String,
}

impl NewCustomerRow {
    /// Builds an insertable row from a domain customer.
    #[must_use]
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            delivery_address: customer.delivery_address.clone(),
            created_at: customer.created_at.clone(),
        }
    }
}

/// A stored job order row.
#[derive(Debug, Clone, Queryable)]
pub struct JobOrderRow {
    pub job_order_id: i64,
    pub po_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub steel_type: String,
    pub quantity: i32,
    pub width_mm: f64,
    pub length_mm: f64,
    pub thickness_mm: f64,
    pub status: String,
    pub priority: String,
    pub weight_kg: Option<f64>,
    pub price: Option<i64>,
    pub created_at: String,
    pub delivery_date: Option<String>,
    pub special_instructions: Option<String>,
    pub assigned_cutter: Option<String>,
    pub completed_quantity: i32,
    pub completed_at: Option<String>,
}

impl JobOrderRow {
    /// Converts the row into a domain job order.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored enum string or count cannot be
    /// mapped back to its domain type.
    pub fn into_job_order(self) -> Result<JobOrder, PersistenceError> {
        let steel_type = SteelType::from_str(&self.steel_type)
            .map_err(|e| PersistenceError::InvalidStoredValue(e.to_string()))?;
        let status = JobStatus::from_str(&self.status)
            .map_err(|e| PersistenceError::InvalidStoredValue(e.to_string()))?;
        let priority = Priority::from_str(&self.priority)
            .map_err(|e| PersistenceError::InvalidStoredValue(e.to_string()))?;
        let quantity = u32::try_from(self.quantity).map_err(|_| {
            PersistenceError::InvalidStoredValue(format!("negative quantity {}", self.quantity))
        })?;
        let completed_quantity = u32::try_from(self.completed_quantity).map_err(|_| {
            PersistenceError::InvalidStoredValue(format!(
                "negative completed quantity {}",
                self.completed_quantity
            ))
        })?;

        Ok(JobOrder {
            job_order_id: Some(self.job_order_id),
            po_number: self.po_number,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            delivery_address: self.delivery_address,
            steel_type,
            quantity,
            width_mm: self.width_mm,
            length_mm: self.length_mm,
            thickness_mm: self.thickness_mm,
            status,
            priority,
            weight_kg: self.weight_kg,
            price: self.price,
            created_at: self.created_at,
            delivery_date: self.delivery_date,
            special_instructions: self.special_instructions,
            assigned_cutter: self.assigned_cutter,
            completed_quantity,
            completed_at: self.completed_at,
        })
    }
}

/// Insertable and updatable job order row.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = job_orders)]
#[diesel(treat_none_as_null = true)]
pub struct NewJobOrderRow {
    pub po_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub steel_type: String,
    pub quantity: i32,
    pub width_mm: f64,
    pub length_mm: f64,
    pub thickness_mm: f64,
    pub status: String,
    pub priority: String,
    pub weight_kg: Option<f64>,
    pub price: Option<i64>,
    pub created_at: String,
    pub delivery_date: Option<String>,
    pub special_instructions: Option<String>,
    pub assigned_cutter: Option<String>,
    pub completed_quantity: i32,
    pub completed_at: Option<String>,
}

impl NewJobOrderRow {
    /// Builds an insertable row from a domain job order.
    ///
    /// # Errors
    ///
    /// Returns an error if a count does not fit the storage type.
    pub fn from_job_order(order: &JobOrder) -> Result<Self, PersistenceError> {
        let quantity = i32::try_from(order.quantity).map_err(|_| {
            PersistenceError::InvalidStoredValue(format!("quantity {} too large", order.quantity))
        })?;
        let completed_quantity = i32::try_from(order.completed_quantity).map_err(|_| {
            PersistenceError::InvalidStoredValue(format!(
                "completed quantity {} too large",
                order.completed_quantity
            ))
        })?;

        Ok(Self {
            po_number: order.po_number.clone(),
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            customer_phone: order.customer_phone.clone(),
            delivery_address: order.delivery_address.clone(),
            steel_type: order.steel_type.as_str().to_string(),
            quantity,
            width_mm: order.width_mm,
            length_mm: order.length_mm,
            thickness_mm: order.thickness_mm,
            status: order.status.as_str().to_string(),
            priority: order.priority.as_str().to_string(),
            weight_kg: order.weight_kg,
            price: order.price,
            created_at: order.created_at.clone(),
            delivery_date: order.delivery_date.clone(),
            special_instructions: order.special_instructions.clone(),
            assigned_cutter: order.assigned_cutter.clone(),
            completed_quantity,
            completed_at: order.completed_at.clone(),
        })
    }
}

/// A stored employee row.
#[derive(Debug, Clone, Queryable)]
pub struct EmployeeRow {
    pub employee_id: i64,
    pub name: String,
    pub position: String,
    pub employee_code: String,
    pub start_date: String,
    pub bank_account: String,
    pub bank_name: String,
    pub base_salary: i64,
    pub current_salary: i64,
}

impl EmployeeRow {
    /// Converts the row into a domain employee.
    #[must_use]
    pub fn into_employee(self) -> Employee {
        Employee {
            employee_id: Some(self.employee_id),
            name: self.name,
            position: self.position,
            employee_code: self.employee_code,
            start_date: self.start_date,
            bank_account: self.bank_account,
            bank_name: self.bank_name,
            base_salary: self.base_salary,
            current_salary: self.current_salary,
        }
    }
}

/// Insertable and updatable employee row.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow {
    pub name: String,
    pub position: String,
    pub employee_code: String,
    pub start_date: String,
    pub bank_account: String,
    pub bank_name: String,
    pub base_salary: i64,
    pub current_salary: i64,
}

impl NewEmployeeRow {
    /// Builds an insertable row from a domain employee.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            position: employee.position.clone(),
            employee_code: employee.employee_code.clone(),
            start_date: employee.start_date.clone(),
            bank_account: employee.bank_account.clone(),
            bank_name: employee.bank_name.clone(),
            base_salary: employee.base_salary,
            current_salary: employee.current_salary,
        }
    }
}

/// A stored salary adjustment row.
#[derive(Debug, Clone, Queryable)]
pub struct AdjustmentRow {
    pub adjustment_id: i64,
    pub employee_id: i64,
    pub amount: i64,
    pub reason: String,
    pub kind: String,
    pub created_at: String,
}

impl AdjustmentRow {
    /// Converts the row into a domain salary adjustment.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored kind string is not valid.
    pub fn into_adjustment(self) -> Result<SalaryAdjustment, PersistenceError> {
        let kind = AdjustmentKind::from_str(&self.kind)
            .map_err(|e| PersistenceError::InvalidStoredValue(e.to_string()))?;
        Ok(SalaryAdjustment {
            adjustment_id: Some(self.adjustment_id),
            employee_id: self.employee_id,
            amount: self.amount,
            reason: self.reason,
            date: self.created_at,
            kind,
        })
    }
}

/// Insertable salary adjustment row.
#[derive(Debug, Insertable)]
#[diesel(table_name = salary_adjustments)]
pub struct NewAdjustmentRow {
    pub employee_id: i64,
    pub amount: i64,
    pub reason: String,
    pub kind: String,
    pub created_at: String,
}

impl NewAdjustmentRow {
    /// Builds an insertable row from a domain salary adjustment.
    #[must_use]
    pub fn from_adjustment(adjustment: &SalaryAdjustment) -> Self {
        Self {
            employee_id: adjustment.employee_id,
            amount: adjustment.amount,
            reason: adjustment.reason.clone(),
            kind: adjustment.kind.as_str().to_string(),
            created_at: adjustment.date.clone(),
        }
    }
}
