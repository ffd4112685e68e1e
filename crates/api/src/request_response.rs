// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs for the API boundary.
//!
//! These are distinct from domain types and represent the API contract.
//! Enum-valued fields travel as strings and are parsed at the boundary.

use cutshop_domain::{
    Customer, Employee, JobOrder, Payslip, PayslipItem, Profile, RoleStats, SalaryAdjustment,
};
use serde::{Deserialize, Serialize};

/// API request to register a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Sign-in email address.
    pub email: String,
    /// Optional display name.
    pub full_name: Option<String>,
    /// Plain-text password.
    pub password: String,
    /// Password confirmation.
    pub confirmation: String,
}

/// API request to create a new job order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateJobOrderRequest {
    /// The customer's purchase order number.
    pub po_number: String,
    /// Customer name.
    pub customer_name: String,
    /// Customer contact email.
    pub customer_email: String,
    /// Customer contact phone.
    pub customer_phone: String,
    /// Delivery address.
    pub delivery_address: String,
    /// Material from the shop catalog (display string).
    pub steel_type: String,
    /// Number of pieces to cut.
    pub quantity: u32,
    /// Piece width in millimeters.
    pub width_mm: f64,
    /// Piece length in millimeters.
    pub length_mm: f64,
    /// Piece thickness in millimeters.
    pub thickness_mm: f64,
    /// Scheduling priority (string form, defaults to `normal`).
    pub priority: Option<String>,
    /// Requested delivery date (ISO 8601 date).
    pub delivery_date: Option<String>,
    /// Free-form handling notes.
    pub special_instructions: Option<String>,
}

/// API representation of a job order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOrderResponse {
    /// The order's ID.
    pub job_order_id: i64,
    /// The customer's purchase order number.
    pub po_number: String,
    /// Customer name.
    pub customer_name: String,
    /// Customer contact email.
    pub customer_email: String,
    /// Customer contact phone.
    pub customer_phone: String,
    /// Delivery address.
    pub delivery_address: String,
    /// Material display string.
    pub steel_type: String,
    /// Number of pieces to cut.
    pub quantity: u32,
    /// Piece width in millimeters.
    pub width_mm: f64,
    /// Piece length in millimeters.
    pub length_mm: f64,
    /// Piece thickness in millimeters.
    pub thickness_mm: f64,
    /// Current lifecycle status.
    pub status: String,
    /// Derived progress percentage for the status.
    pub progress_percent: u8,
    /// Scheduling priority.
    pub priority: String,
    /// Measured weight in kilograms, if recorded.
    pub weight_kg: Option<f64>,
    /// Quoted price in minor currency units, if recorded.
    pub price: Option<i64>,
    /// Creation timestamp.
    pub created_at: String,
    /// Requested delivery date.
    pub delivery_date: Option<String>,
    /// Free-form handling notes.
    pub special_instructions: Option<String>,
    /// Assigned cutter, if any.
    pub assigned_cutter: Option<String>,
    /// Pieces cut so far.
    pub completed_quantity: u32,
    /// Completion timestamp, if completed.
    pub completed_at: Option<String>,
}

impl JobOrderResponse {
    /// Builds a response from a domain job order.
    ///
    /// The order must already be persisted (have an ID).
    #[must_use]
    pub fn from_job_order(order: &JobOrder) -> Self {
        Self {
            job_order_id: order.job_order_id.unwrap_or_default(),
            po_number: order.po_number.clone(),
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            customer_phone: order.customer_phone.clone(),
            delivery_address: order.delivery_address.clone(),
            steel_type: order.steel_type.as_str().to_string(),
            quantity: order.quantity,
            width_mm: order.width_mm,
            length_mm: order.length_mm,
            thickness_mm: order.thickness_mm,
            status: order.status.as_str().to_string(),
            progress_percent: order.progress_percent(),
            priority: order.priority.as_str().to_string(),
            weight_kg: order.weight_kg,
            price: order.price,
            created_at: order.created_at.clone(),
            delivery_date: order.delivery_date.clone(),
            special_instructions: order.special_instructions.clone(),
            assigned_cutter: order.assigned_cutter.clone(),
            completed_quantity: order.completed_quantity,
            completed_at: order.completed_at.clone(),
        }
    }
}

/// One job in the production summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionJobResponse {
    /// The order's ID.
    pub job_order_id: i64,
    /// The customer's purchase order number.
    pub po_number: String,
    /// Customer name.
    pub customer_name: String,
    /// Material display string.
    pub steel_type: String,
    /// Current lifecycle status.
    pub status: String,
    /// Scheduling priority.
    pub priority: String,
    /// Assigned cutter, if any.
    pub assigned_cutter: Option<String>,
    /// Pieces ordered.
    pub quantity: u32,
    /// Pieces cut so far.
    pub completed_quantity: u32,
    /// Production completion percentage from piece counts.
    pub completion_percent: u8,
}

/// API response for the production overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionSummaryResponse {
    /// Total number of job orders.
    pub total_jobs: usize,
    /// Orders waiting to start.
    pub pending_jobs: usize,
    /// Orders currently being cut.
    pub cutting_jobs: usize,
    /// Orders that reached the terminal status.
    pub completed_jobs: usize,
    /// Per-job production detail.
    pub jobs: Vec<ProductionJobResponse>,
}

/// API request to create a customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    /// Company or contact name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Default delivery address.
    pub delivery_address: String,
}

/// API representation of a customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    /// The customer's ID.
    pub customer_id: i64,
    /// Company or contact name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Default delivery address.
    pub delivery_address: String,
    /// Creation timestamp.
    pub created_at: String,
}

impl CustomerResponse {
    /// Builds a response from a domain customer.
    #[must_use]
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            customer_id: customer.customer_id.unwrap_or_default(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            delivery_address: customer.delivery_address.clone(),
            created_at: customer.created_at.clone(),
        }
    }
}

/// API representation of a principal profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Opaque stable identifier.
    pub user_id: String,
    /// Sign-in email.
    pub email: String,
    /// Display name, if provided.
    pub full_name: Option<String>,
    /// Current role.
    pub role: String,
    /// Human-readable role name.
    pub role_display_name: String,
    /// Creation timestamp.
    pub created_at: String,
}

impl ProfileResponse {
    /// Builds a response from a domain profile.
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            user_id: profile.user_id.clone(),
            email: profile.email.clone(),
            full_name: profile.full_name.clone(),
            role: profile.role.as_str().to_string(),
            role_display_name: profile.role.display_name().to_string(),
            created_at: profile.created_at.clone(),
        }
    }
}

/// API request to change a principal's role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRoleRequest {
    /// The principal whose role changes.
    pub user_id: String,
    /// The new role (string form).
    pub role: String,
}

/// API response for role statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleStatsResponse {
    /// Count per role, one entry for every known role.
    pub counts: Vec<(String, usize)>,
    /// Total number of profiles.
    pub total: usize,
}

impl RoleStatsResponse {
    /// Builds a response from domain role statistics.
    #[must_use]
    pub fn from_stats(stats: &RoleStats) -> Self {
        Self {
            counts: stats
                .counts
                .iter()
                .map(|(role, n)| (role.as_str().to_string(), *n))
                .collect(),
            total: stats.total(),
        }
    }
}

/// API request to add an employee to the payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Employee name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Short payroll code.
    pub employee_code: String,
    /// Employment start date (ISO 8601 date).
    pub start_date: String,
    /// Salary payment account number.
    pub bank_account: String,
    /// Salary payment bank name.
    pub bank_name: String,
    /// Starting salary in minor currency units.
    pub base_salary: i64,
}

/// API request to apply a salary adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustSalaryRequest {
    /// The employee to adjust.
    pub employee_id: i64,
    /// Signed delta in minor currency units.
    pub amount: i64,
    /// Why the adjustment is made.
    pub reason: String,
}

/// API representation of a salary adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentResponse {
    /// The adjustment's ID.
    pub adjustment_id: i64,
    /// The employee adjusted.
    pub employee_id: i64,
    /// Signed delta in minor currency units.
    pub amount: i64,
    /// Direction derived from the sign.
    pub kind: String,
    /// Why the adjustment was made.
    pub reason: String,
    /// When the adjustment was recorded.
    pub date: String,
    /// The employee's salary after this adjustment was applied, in
    /// minor currency units. Only present on the apply response.
    pub new_salary: Option<i64>,
}

impl AdjustmentResponse {
    /// Builds a response from a domain adjustment.
    #[must_use]
    pub fn from_adjustment(adjustment: &SalaryAdjustment) -> Self {
        Self {
            adjustment_id: adjustment.adjustment_id.unwrap_or_default(),
            employee_id: adjustment.employee_id,
            amount: adjustment.amount,
            kind: adjustment.kind.as_str().to_string(),
            reason: adjustment.reason.clone(),
            date: adjustment.date.clone(),
            new_salary: None,
        }
    }
}

/// API representation of an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    /// The employee's ID.
    pub employee_id: i64,
    /// Employee name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Short payroll code.
    pub employee_code: String,
    /// Employment start date.
    pub start_date: String,
    /// Salary payment account number.
    pub bank_account: String,
    /// Salary payment bank name.
    pub bank_name: String,
    /// Current salary in minor currency units.
    pub current_salary: i64,
}

impl EmployeeResponse {
    /// Builds a response from a domain employee.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.unwrap_or_default(),
            name: employee.name.clone(),
            position: employee.position.clone(),
            employee_code: employee.employee_code.clone(),
            start_date: employee.start_date.clone(),
            bank_account: employee.bank_account.clone(),
            bank_name: employee.bank_name.clone(),
            current_salary: employee.current_salary,
        }
    }
}

/// API request to generate a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratePayslipRequest {
    /// The employee the payslip is for.
    pub employee_id: i64,
    /// Overtime pay for the period, in minor currency units.
    #[serde(default)]
    pub overtime: i64,
    /// Bonus pay for the period, in minor currency units.
    #[serde(default)]
    pub bonus: i64,
    /// Absence deduction for the period, in minor currency units.
    #[serde(default)]
    pub absence_deduction: i64,
}

/// One payslip line on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipItemResponse {
    /// Line description.
    pub description: String,
    /// Line amount in minor currency units.
    pub amount: i64,
}

/// API representation of a payslip projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipResponse {
    /// The employee the payslip is for.
    pub employee: EmployeeResponse,
    /// Month name.
    pub month: String,
    /// Four-digit year.
    pub year: String,
    /// Payment due date.
    pub due_date: String,
    /// Income lines.
    pub income: Vec<PayslipItemResponse>,
    /// Deduction lines.
    pub deductions: Vec<PayslipItemResponse>,
    /// Sum of income lines.
    pub gross_income: i64,
    /// Sum of deduction lines.
    pub total_deductions: i64,
    /// Gross income minus deductions.
    pub net_income: i64,
}

impl PayslipResponse {
    /// Builds a response from a domain payslip.
    #[must_use]
    pub fn from_payslip(payslip: &Payslip) -> Self {
        let to_items = |items: &[PayslipItem]| {
            items
                .iter()
                .map(|item| PayslipItemResponse {
                    description: item.description.clone(),
                    amount: item.amount,
                })
                .collect()
        };

        Self {
            employee: EmployeeResponse::from_employee(&payslip.employee),
            month: payslip.period.month.clone(),
            year: payslip.period.year.clone(),
            due_date: payslip.period.due_date.clone(),
            income: to_items(&payslip.income),
            deductions: to_items(&payslip.deductions),
            gross_income: payslip.gross_income,
            total_deductions: payslip.total_deductions,
            net_income: payslip.net_income,
        }
    }
}

/// Whether an action is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl serde::Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(matches!(self, Self::Allowed))
    }
}

impl<'de> serde::Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let b = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(b))
    }
}

/// Advisory capability flags for a signed-in principal.
///
/// These drive UI gating only; every action is still enforced at the
/// API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalCapabilities {
    /// May create job orders.
    pub can_create_job_order: Capability,
    /// May use the production view.
    pub can_record_production: Capability,
    /// May record shipping and delivery.
    pub can_record_delivery: Capability,
    /// May manage customer records.
    pub can_manage_customers: Capability,
    /// May run payroll operations.
    pub can_manage_payroll: Capability,
    /// May administer users and roles.
    pub can_manage_users: Capability,
}

/// Advisory capability flags for one job order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOrderCapabilities {
    /// May drive the order's next transition.
    pub can_advance: Capability,
    /// The status the order would advance to, if any.
    pub next_status: Option<String>,
}
