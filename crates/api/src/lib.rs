// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the cutshop workflow system.
//!
//! Everything that crosses the process boundary goes through here:
//! authentication and sessions, per-action authorization, request and
//! response DTOs, and the operation handlers that tie the core's
//! decision logic to the repositories. Domain and core errors never
//! leak past this layer; they are translated into [`ApiError`].

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

mod auth;
mod capabilities;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticationService, AuthorizationService, now_timestamp};
pub use capabilities::{compute_global_capabilities, compute_job_order_capabilities};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    adjust_salary, advance_job_status, assign_cutter, check_access, create_customer,
    create_employee, create_job_order, generate_payslip, get_customer, get_job_order,
    list_adjustments, list_customers, list_employees, list_job_orders, list_profiles,
    production_summary, role_stats, set_role,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    AdjustSalaryRequest, AdjustmentResponse, Capability, CreateCustomerRequest,
    CreateEmployeeRequest, CreateJobOrderRequest, CustomerResponse, EmployeeResponse,
    GeneratePayslipRequest, GlobalCapabilities, JobOrderCapabilities, JobOrderResponse,
    PayslipItemResponse, PayslipResponse, ProductionJobResponse, ProductionSummaryResponse,
    ProfileResponse, RoleStatsResponse, SetRoleRequest, SignupRequest,
};
