// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod customer;
mod error;
mod job_order;
mod job_status;
mod payroll;
mod priority;
mod profile;
mod role;
mod steel_type;
mod validation;

#[cfg(test)]
mod tests;

pub use customer::Customer;
pub use error::DomainError;
pub use job_order::JobOrder;
pub use job_status::JobStatus;
pub use payroll::{
    AdjustmentKind, Employee, PayPeriod, Payslip, PayslipInputs, PayslipItem, SalaryAdjustment,
    SOCIAL_SECURITY_CAP, apply_adjustment, compute_payslip,
};
pub use priority::Priority;
pub use profile::{Profile, RoleStats, count_by_role};
pub use role::Role;
pub use steel_type::SteelType;
pub use validation::{
    validate_customer_fields, validate_employee_fields, validate_job_order_fields,
    validate_profile_email,
};
