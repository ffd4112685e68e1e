// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation handlers tying authorization, core logic, and storage.
//!
//! Every handler follows the same shape: authorize the acting principal,
//! translate the request into domain types, run the core operation, save
//! through a repository capability, and return a response DTO. Errors
//! are translated; nothing domain- or core-shaped escapes.

use std::str::FromStr;

use tracing::info;

use crate::auth::{AuthorizationService, now_timestamp};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AdjustSalaryRequest, AdjustmentResponse, CreateCustomerRequest, CreateEmployeeRequest,
    CreateJobOrderRequest, CustomerResponse, EmployeeResponse, GeneratePayslipRequest,
    JobOrderResponse, PayslipResponse, ProductionJobResponse, ProductionSummaryResponse,
    ProfileResponse, RoleStatsResponse, SetRoleRequest,
};
use cutshop::{
    AccessPolicy, CustomerRepository, Decision, EmployeeRepository, JobOrderRepository, Principal,
    PrincipalResolution, ProfileRepository, apply_transition,
};
use cutshop_domain::{
    Customer, Employee, JobOrder, JobStatus, PayPeriod, PayslipInputs, Priority, Role,
    SalaryAdjustment, SteelType, apply_adjustment, compute_payslip, count_by_role,
    validate_customer_fields, validate_employee_fields, validate_job_order_fields,
};

/// Evaluates a navigation request against the access policy.
///
/// Pure passthrough to the core evaluator; the caller renders, redirects,
/// or waits according to the decision.
#[must_use]
pub fn check_access(
    policy: &AccessPolicy,
    resource_path: &str,
    resolution: &PrincipalResolution,
) -> Decision {
    policy.evaluate_path(resource_path, resolution)
}

/// Creates a new job order in the `pending` status.
///
/// # Errors
///
/// Returns an error if the principal lacks an intake role, the request
/// fails field validation, or the store fails.
pub fn create_job_order(
    repo: &mut dyn JobOrderRepository,
    request: &CreateJobOrderRequest,
    principal: &Principal,
) -> Result<JobOrderResponse, ApiError> {
    AuthorizationService::authorize_create_job_order(principal)?;

    let steel_type: SteelType =
        SteelType::from_str(&request.steel_type).map_err(translate_domain_error)?;
    let priority: Priority = match &request.priority {
        Some(priority) => Priority::from_str(priority).map_err(translate_domain_error)?,
        None => Priority::default(),
    };

    let mut order: JobOrder = JobOrder::new(
        request.po_number.clone(),
        request.customer_name.clone(),
        request.customer_email.clone(),
        request.customer_phone.clone(),
        request.delivery_address.clone(),
        steel_type,
        request.quantity,
        request.width_mm,
        request.length_mm,
        request.thickness_mm,
        priority,
        now_timestamp()?,
    );
    order.delivery_date = request.delivery_date.clone();
    order.special_instructions = request.special_instructions.clone();

    validate_job_order_fields(&order).map_err(translate_domain_error)?;

    let job_order_id: i64 = repo.save_job_order(&order)?;
    order.job_order_id = Some(job_order_id);

    info!(
        job_order_id = job_order_id,
        po_number = %order.po_number,
        actor = %principal.id,
        "Created job order"
    );

    Ok(JobOrderResponse::from_job_order(&order))
}

/// Retrieves a job order.
///
/// # Errors
///
/// Returns an error if the principal lacks a staff role or the order
/// does not exist.
pub fn get_job_order(
    repo: &mut dyn JobOrderRepository,
    job_order_id: i64,
    principal: &Principal,
) -> Result<JobOrderResponse, ApiError> {
    AuthorizationService::authorize_view_job_order(principal)?;

    let order: JobOrder =
        repo.get_job_order(job_order_id)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Job order"),
                message: format!("Job order {job_order_id} does not exist"),
            })?;

    Ok(JobOrderResponse::from_job_order(&order))
}

/// Lists all job orders for the dashboard.
///
/// Open to any authenticated principal; the dashboard itself carries no
/// role whitelist.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_job_orders(
    repo: &mut dyn JobOrderRepository,
    _principal: &Principal,
) -> Result<Vec<JobOrderResponse>, ApiError> {
    let orders = repo.list_job_orders()?;
    Ok(orders.iter().map(JobOrderResponse::from_job_order).collect())
}

/// Advances a job order to a target status.
///
/// The lifecycle engine enforces both the ordering rule (immediate
/// successor only) and the edge's permitted roles; a rejection leaves
/// the stored order untouched. Reaching `completed` stamps the
/// completion timestamp.
///
/// # Errors
///
/// Returns an error if the order does not exist, the target status
/// string is unknown, or the transition is rejected.
pub fn advance_job_status(
    repo: &mut dyn JobOrderRepository,
    job_order_id: i64,
    target_status: &str,
    principal: &Principal,
) -> Result<JobOrderResponse, ApiError> {
    let target: JobStatus =
        JobStatus::from_str(target_status).map_err(translate_domain_error)?;

    let order: JobOrder =
        repo.get_job_order(job_order_id)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Job order"),
                message: format!("Job order {job_order_id} does not exist"),
            })?;

    let mut next: JobOrder =
        apply_transition(&order, target, principal.role).map_err(translate_core_error)?;
    if next.status == JobStatus::Completed {
        next.completed_at = Some(now_timestamp()?);
    }

    repo.save_job_order(&next)?;

    info!(
        job_order_id = job_order_id,
        from = %order.status,
        to = %next.status,
        actor = %principal.id,
        "Advanced job order status"
    );

    Ok(JobOrderResponse::from_job_order(&next))
}

/// Assigns a cutter to a job order.
///
/// # Errors
///
/// Returns an error if the principal lacks a production role, the order
/// does not exist, or the cutter name is empty.
pub fn assign_cutter(
    repo: &mut dyn JobOrderRepository,
    job_order_id: i64,
    cutter_name: &str,
    principal: &Principal,
) -> Result<JobOrderResponse, ApiError> {
    AuthorizationService::authorize_production(principal)?;

    if cutter_name.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("cutter_name"),
            message: String::from("Cutter name is required"),
        });
    }

    let mut order: JobOrder =
        repo.get_job_order(job_order_id)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Job order"),
                message: format!("Job order {job_order_id} does not exist"),
            })?;

    order.assigned_cutter = Some(cutter_name.to_string());
    repo.save_job_order(&order)?;

    Ok(JobOrderResponse::from_job_order(&order))
}

/// Builds the production overview: status counts plus per-job
/// completion percentages.
///
/// # Errors
///
/// Returns an error if the principal lacks a production role or the
/// store fails.
pub fn production_summary(
    repo: &mut dyn JobOrderRepository,
    principal: &Principal,
) -> Result<ProductionSummaryResponse, ApiError> {
    AuthorizationService::authorize_production(principal)?;

    let orders = repo.list_job_orders()?;

    let pending_jobs = orders
        .iter()
        .filter(|order| order.status == JobStatus::Pending)
        .count();
    let cutting_jobs = orders
        .iter()
        .filter(|order| order.status == JobStatus::Cutting)
        .count();
    let completed_jobs = orders
        .iter()
        .filter(|order| order.status == JobStatus::Completed)
        .count();

    let jobs: Vec<ProductionJobResponse> = orders
        .iter()
        .map(|order| ProductionJobResponse {
            job_order_id: order.job_order_id.unwrap_or_default(),
            po_number: order.po_number.clone(),
            customer_name: order.customer_name.clone(),
            steel_type: order.steel_type.as_str().to_string(),
            status: order.status.as_str().to_string(),
            priority: order.priority.as_str().to_string(),
            assigned_cutter: order.assigned_cutter.clone(),
            quantity: order.quantity,
            completed_quantity: order.completed_quantity,
            completion_percent: order.completion_percent(),
        })
        .collect();

    Ok(ProductionSummaryResponse {
        total_jobs: orders.len(),
        pending_jobs,
        cutting_jobs,
        completed_jobs,
        jobs,
    })
}

/// Creates a customer record.
///
/// # Errors
///
/// Returns an error if the principal lacks a customer role or the
/// record fails validation.
pub fn create_customer(
    repo: &mut dyn CustomerRepository,
    request: &CreateCustomerRequest,
    principal: &Principal,
) -> Result<CustomerResponse, ApiError> {
    AuthorizationService::authorize_manage_customers(principal)?;

    let mut customer: Customer = Customer::new(
        request.name.clone(),
        request.email.clone(),
        request.phone.clone(),
        request.delivery_address.clone(),
        now_timestamp()?,
    );
    validate_customer_fields(&customer).map_err(translate_domain_error)?;

    let customer_id: i64 = repo.save_customer(&customer)?;
    customer.customer_id = Some(customer_id);

    Ok(CustomerResponse::from_customer(&customer))
}

/// Retrieves a customer record.
///
/// # Errors
///
/// Returns an error if the principal lacks a customer role or the
/// customer does not exist.
pub fn get_customer(
    repo: &mut dyn CustomerRepository,
    customer_id: i64,
    principal: &Principal,
) -> Result<CustomerResponse, ApiError> {
    AuthorizationService::authorize_manage_customers(principal)?;

    let customer: Customer =
        repo.get_customer(customer_id)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Customer"),
                message: format!("Customer {customer_id} does not exist"),
            })?;

    Ok(CustomerResponse::from_customer(&customer))
}

/// Lists all customer records.
///
/// # Errors
///
/// Returns an error if the principal lacks a customer role or the
/// store fails.
pub fn list_customers(
    repo: &mut dyn CustomerRepository,
    principal: &Principal,
) -> Result<Vec<CustomerResponse>, ApiError> {
    AuthorizationService::authorize_manage_customers(principal)?;

    let customers = repo.list_customers()?;
    Ok(customers.iter().map(CustomerResponse::from_customer).collect())
}

/// Lists all principal profiles for the administrative view.
///
/// # Errors
///
/// Returns an error if the principal is not a superadmin or the store
/// fails.
pub fn list_profiles(
    repo: &mut dyn ProfileRepository,
    principal: &Principal,
) -> Result<Vec<ProfileResponse>, ApiError> {
    AuthorizationService::authorize_manage_users(principal)?;

    let profiles = repo.list_profiles()?;
    Ok(profiles.iter().map(ProfileResponse::from_profile).collect())
}

/// Changes a principal's role assignment.
///
/// A role string outside the known set is a denial (default deny),
/// never a wildcard.
///
/// # Errors
///
/// Returns an error if the acting principal is not a superadmin, the
/// role string is unknown, or the target profile does not exist.
pub fn set_role(
    repo: &mut dyn ProfileRepository,
    request: &SetRoleRequest,
    principal: &Principal,
) -> Result<ProfileResponse, ApiError> {
    AuthorizationService::authorize_manage_users(principal)?;

    let role: Role = Role::from_str(&request.role).map_err(translate_domain_error)?;

    repo.set_role(&request.user_id, role)?;

    let profile = repo
        .get_profile(&request.user_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Profile"),
            message: format!("Profile not found for user '{}'", request.user_id),
        })?;

    info!(
        user_id = %request.user_id,
        role = %role,
        actor = %principal.id,
        "Changed role assignment"
    );

    Ok(ProfileResponse::from_profile(&profile))
}

/// Computes per-role profile counts for the administrative dashboard.
///
/// # Errors
///
/// Returns an error if the principal is not a superadmin or the store
/// fails.
pub fn role_stats(
    repo: &mut dyn ProfileRepository,
    principal: &Principal,
) -> Result<RoleStatsResponse, ApiError> {
    AuthorizationService::authorize_manage_users(principal)?;

    let profiles = repo.list_profiles()?;
    let stats = count_by_role(&profiles);
    Ok(RoleStatsResponse::from_stats(&stats))
}

/// Adds an employee to the payroll.
///
/// The employee's current salary starts at the base salary; it moves
/// only through salary adjustments afterwards.
///
/// # Errors
///
/// Returns an error if the principal lacks a payroll role or the
/// record fails validation.
pub fn create_employee(
    repo: &mut dyn EmployeeRepository,
    request: &CreateEmployeeRequest,
    principal: &Principal,
) -> Result<EmployeeResponse, ApiError> {
    AuthorizationService::authorize_payroll(principal)?;

    let mut employee: Employee = Employee {
        employee_id: None,
        name: request.name.clone(),
        position: request.position.clone(),
        employee_code: request.employee_code.clone(),
        start_date: request.start_date.clone(),
        bank_account: request.bank_account.clone(),
        bank_name: request.bank_name.clone(),
        base_salary: request.base_salary,
        current_salary: request.base_salary,
    };
    validate_employee_fields(&employee).map_err(translate_domain_error)?;

    let employee_id: i64 = repo.save_employee(&employee)?;
    employee.employee_id = Some(employee_id);

    Ok(EmployeeResponse::from_employee(&employee))
}

/// Lists all employees for the payroll overview.
///
/// # Errors
///
/// Returns an error if the principal lacks a payroll role or the store
/// fails.
pub fn list_employees(
    repo: &mut dyn EmployeeRepository,
    principal: &Principal,
) -> Result<Vec<EmployeeResponse>, ApiError> {
    AuthorizationService::authorize_payroll(principal)?;

    let employees = repo.list_employees()?;
    Ok(employees.iter().map(EmployeeResponse::from_employee).collect())
}

/// Applies a salary adjustment to an employee.
///
/// The adjustment is appended to the append-only history and the
/// employee's current salary is updated atomically from the caller's
/// perspective: a rejected adjustment changes nothing.
///
/// # Errors
///
/// Returns an error if the principal lacks a payroll role, the amount
/// is zero, the reason is empty, or the employee does not exist.
pub fn adjust_salary(
    repo: &mut dyn EmployeeRepository,
    request: &AdjustSalaryRequest,
    principal: &Principal,
) -> Result<AdjustmentResponse, ApiError> {
    AuthorizationService::authorize_payroll(principal)?;

    let employee = repo
        .get_employee(request.employee_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee {} does not exist", request.employee_id),
        })?;

    let mut adjustment: SalaryAdjustment = SalaryAdjustment::new(
        request.employee_id,
        request.amount,
        request.reason.clone(),
        now_timestamp()?,
    )
    .map_err(translate_domain_error)?;

    let updated = apply_adjustment(&employee, &adjustment).map_err(translate_domain_error)?;

    repo.save_employee(&updated)?;
    let adjustment_id: i64 = repo.append_adjustment(&adjustment)?;
    adjustment.adjustment_id = Some(adjustment_id);

    info!(
        employee_id = request.employee_id,
        amount = request.amount,
        kind = %adjustment.kind.as_str(),
        actor = %principal.id,
        "Applied salary adjustment"
    );

    let mut response = AdjustmentResponse::from_adjustment(&adjustment);
    response.new_salary = Some(updated.current_salary);
    Ok(response)
}

/// Lists salary adjustments, optionally for one employee.
///
/// # Errors
///
/// Returns an error if the principal lacks a payroll role or the store
/// fails.
pub fn list_adjustments(
    repo: &mut dyn EmployeeRepository,
    employee_id: Option<i64>,
    principal: &Principal,
) -> Result<Vec<AdjustmentResponse>, ApiError> {
    AuthorizationService::authorize_payroll(principal)?;

    let adjustments = repo.list_adjustments(employee_id)?;
    Ok(adjustments
        .iter()
        .map(AdjustmentResponse::from_adjustment)
        .collect())
}

/// Generates a payslip projection for the current month.
///
/// The payslip is recomputed on demand and never persisted.
///
/// # Errors
///
/// Returns an error if the principal lacks a payroll role or the
/// employee does not exist.
pub fn generate_payslip(
    repo: &mut dyn EmployeeRepository,
    request: &GeneratePayslipRequest,
    principal: &Principal,
) -> Result<PayslipResponse, ApiError> {
    AuthorizationService::authorize_payroll(principal)?;

    let employee = repo
        .get_employee(request.employee_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee {} does not exist", request.employee_id),
        })?;

    let today = time::OffsetDateTime::now_utc().date();
    let period = PayPeriod::for_month(today).map_err(translate_domain_error)?;

    let inputs = PayslipInputs {
        overtime: request.overtime,
        bonus: request.bonus,
        absence_deduction: request.absence_deduction,
    };
    let payslip = compute_payslip(&employee, period, &inputs);

    Ok(PayslipResponse::from_payslip(&payslip))
}
