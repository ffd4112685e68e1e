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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use cutshop::{AccessPolicy, Decision};
use cutshop_api::{
    AdjustSalaryRequest, AdjustmentResponse, ApiError, AuthenticationService,
    CreateCustomerRequest, CreateEmployeeRequest, CreateJobOrderRequest, CustomerResponse,
    EmployeeResponse, GeneratePayslipRequest, GlobalCapabilities, JobOrderResponse,
    PayslipResponse, ProductionSummaryResponse, ProfileResponse, RoleStatsResponse,
    SetRoleRequest, SignupRequest, adjust_salary, advance_job_status, assign_cutter,
    check_access, compute_global_capabilities, create_customer, create_employee,
    create_job_order, generate_payslip, get_customer, get_job_order, list_adjustments,
    list_customers, list_employees, list_job_orders, list_profiles, now_timestamp,
    production_summary, role_stats, set_role,
};
use cutshop_domain::Role;
use cutshop_persistence::{Persistence, PersistenceError};

mod session;

use session::{SessionPrincipal, bearer_token};

/// Cutshop Server - HTTP server for the cutshop workflow system.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an
    /// in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Email for a bootstrap superadmin account, created at startup if
    /// it does not already exist. Requires `--superadmin-password`.
    #[arg(long)]
    superadmin_email: Option<String>,

    /// Password for the bootstrap superadmin account.
    #[arg(long)]
    superadmin_password: Option<String>,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer, wrapped for safe concurrent access.
    persistence: Arc<Mutex<Persistence>>,
    /// The declarative navigation access policy.
    policy: Arc<AccessPolicy>,
}

/// API request for signing in.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct LoginRequest {
    /// Sign-in email.
    email: String,
    /// Plain-text password.
    password: String,
}

/// API response for a successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoginResponse {
    /// The session token for subsequent requests.
    token: String,
    /// The signed-in profile.
    profile: ProfileResponse,
    /// Advisory capability flags for UI gating.
    capabilities: GlobalCapabilities,
}

/// API response for the current session.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MeResponse {
    /// The signed-in profile.
    profile: ProfileResponse,
    /// Advisory capability flags for UI gating.
    capabilities: GlobalCapabilities,
}

/// Query parameters for the access check endpoint.
#[derive(Debug, Deserialize)]
struct AccessCheckQuery {
    /// The resource path to evaluate.
    path: String,
}

/// API response for an access check.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccessCheckResponse {
    /// The evaluated resource path.
    path: String,
    /// The access decision.
    decision: String,
}

/// API request to advance a job order's status.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateStatusRequest {
    /// The target status.
    status: String,
}

/// API request to assign a cutter to a job order.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AssignCutterRequest {
    /// The cutter's name.
    cutter_name: String,
}

/// Query parameters for listing salary adjustments.
#[derive(Debug, Deserialize)]
struct ListAdjustmentsQuery {
    /// Restrict to one employee.
    employee_id: Option<i64>,
}

/// Generic response for write operations without a richer payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    /// Success indicator.
    success: bool,
    /// Optional message.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status = match &err {
            ApiError::AuthenticationFailed { .. } | ApiError::AuthRequired { .. } => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::AccessDenied { .. } => StatusCode::FORBIDDEN,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidInput { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidTransition { .. } | ApiError::DomainRuleViolation { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<cutshop_api::AuthError> for HttpError {
    fn from(err: cutshop_api::AuthError) -> Self {
        Self::from(ApiError::from(err))
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Maps an access decision to its wire label.
const fn decision_label(decision: Decision) -> &'static str {
    match decision {
        Decision::Pending => "pending",
        Decision::Admit => "admit",
        Decision::RedirectToAuth => "redirect_to_auth",
        Decision::Deny => "deny",
    }
}

/// Handler for POST `/auth/signup`.
///
/// Registers a new account; new principals always start as `guest`.
async fn handle_signup(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<ProfileResponse>, HttpError> {
    info!(email = %req.email, "Handling signup request");

    let mut persistence = app_state.persistence.lock().await;
    let profile = AuthenticationService::signup(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(ProfileResponse::from_profile(&profile)))
}

/// Handler for POST `/auth/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(email = %req.email, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let (token, principal, profile) =
        AuthenticationService::login(&mut persistence, &req.email, &req.password)?;
    drop(persistence);

    Ok(Json(LoginResponse {
        token,
        profile: ProfileResponse::from_profile(&profile),
        capabilities: compute_global_capabilities(&principal),
    }))
}

/// Handler for POST `/auth/logout`.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<WriteResponse>, HttpError> {
    let token = bearer_token(&headers).map_err(|_| HttpError {
        status: StatusCode::UNAUTHORIZED,
        message: String::from("Missing or invalid Authorization header"),
    })?;

    let mut persistence = app_state.persistence.lock().await;
    AuthenticationService::logout(&mut persistence, token)?;
    drop(persistence);

    Ok(Json(WriteResponse {
        success: true,
        message: Some(String::from("Signed out")),
    }))
}

/// Handler for GET `/auth/me`.
async fn handle_me(
    SessionPrincipal(principal, profile): SessionPrincipal,
) -> Json<MeResponse> {
    Json(MeResponse {
        profile: ProfileResponse::from_profile(&profile),
        capabilities: compute_global_capabilities(&principal),
    })
}

/// Handler for GET `/access/check`.
///
/// Evaluates a navigation request against the access policy. The caller
/// acts on the decision: render, redirect to sign-in, or show a denial.
async fn handle_check_access(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<AccessCheckQuery>,
    headers: HeaderMap,
) -> Json<AccessCheckResponse> {
    let token = bearer_token(&headers).ok();

    let mut persistence = app_state.persistence.lock().await;
    let resolution = AuthenticationService::resolve_principal(&mut persistence, token);
    drop(persistence);

    let decision = check_access(&app_state.policy, &query.path, &resolution);

    Json(AccessCheckResponse {
        path: query.path,
        decision: decision_label(decision).to_string(),
    })
}

/// Handler for POST `/job_orders`.
async fn handle_create_job_order(
    AxumState(app_state): AxumState<AppState>,
    SessionPrincipal(principal, _): SessionPrincipal,
    Json(req): Json<CreateJobOrderRequest>,
) -> Result<Json<JobOrderResponse>, HttpError> {
    info!(
        po_number = %req.po_number,
        actor = %principal.id,
        "Handling create_job_order request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response = create_job_order(&mut *persistence, &req, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/job_orders`.
async fn handle_list_job_orders(
    AxumState(app_state): AxumState<AppState>,
    SessionPrincipal(principal, _): SessionPrincipal,
) -> Result<Json<Vec<JobOrderResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = list_job_orders(&mut *persistence, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/job_orders/{id}`.
async fn handle_get_job_order(
    AxumState(app_state): AxumState<AppState>,
    Path(job_order_id): Path<i64>,
    SessionPrincipal(principal, _): SessionPrincipal,
) -> Result<Json<JobOrderResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = get_job_order(&mut *persistence, job_order_id, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/job_orders/{id}/status`.
///
/// Drives one lifecycle transition. The lifecycle engine enforces both
/// the ordering rule and the edge's permitted roles.
async fn handle_update_status(
    AxumState(app_state): AxumState<AppState>,
    Path(job_order_id): Path<i64>,
    SessionPrincipal(principal, _): SessionPrincipal,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<JobOrderResponse>, HttpError> {
    info!(
        job_order_id = job_order_id,
        target = %req.status,
        actor = %principal.id,
        "Handling status update request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response = advance_job_status(&mut *persistence, job_order_id, &req.status, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/job_orders/{id}/cutter`.
async fn handle_assign_cutter(
    AxumState(app_state): AxumState<AppState>,
    Path(job_order_id): Path<i64>,
    SessionPrincipal(principal, _): SessionPrincipal,
    Json(req): Json<AssignCutterRequest>,
) -> Result<Json<JobOrderResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response =
        assign_cutter(&mut *persistence, job_order_id, &req.cutter_name, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/production/summary`.
async fn handle_production_summary(
    AxumState(app_state): AxumState<AppState>,
    SessionPrincipal(principal, _): SessionPrincipal,
) -> Result<Json<ProductionSummaryResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = production_summary(&mut *persistence, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/customers`.
async fn handle_create_customer(
    AxumState(app_state): AxumState<AppState>,
    SessionPrincipal(principal, _): SessionPrincipal,
    Json(req): Json<CreateCustomerRequest>,
) -> Result<Json<CustomerResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = create_customer(&mut *persistence, &req, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/customers`.
async fn handle_list_customers(
    AxumState(app_state): AxumState<AppState>,
    SessionPrincipal(principal, _): SessionPrincipal,
) -> Result<Json<Vec<CustomerResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = list_customers(&mut *persistence, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/customers/{id}`.
async fn handle_get_customer(
    AxumState(app_state): AxumState<AppState>,
    Path(customer_id): Path<i64>,
    SessionPrincipal(principal, _): SessionPrincipal,
) -> Result<Json<CustomerResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = get_customer(&mut *persistence, customer_id, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/profiles`.
async fn handle_list_profiles(
    AxumState(app_state): AxumState<AppState>,
    SessionPrincipal(principal, _): SessionPrincipal,
) -> Result<Json<Vec<ProfileResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = list_profiles(&mut *persistence, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/profiles/role`.
async fn handle_set_role(
    AxumState(app_state): AxumState<AppState>,
    SessionPrincipal(principal, _): SessionPrincipal,
    Json(req): Json<SetRoleRequest>,
) -> Result<Json<ProfileResponse>, HttpError> {
    info!(
        user_id = %req.user_id,
        role = %req.role,
        actor = %principal.id,
        "Handling set_role request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response = set_role(&mut *persistence, &req, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/profiles/stats`.
async fn handle_role_stats(
    AxumState(app_state): AxumState<AppState>,
    SessionPrincipal(principal, _): SessionPrincipal,
) -> Result<Json<RoleStatsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = role_stats(&mut *persistence, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/payroll/employees`.
async fn handle_create_employee(
    AxumState(app_state): AxumState<AppState>,
    SessionPrincipal(principal, _): SessionPrincipal,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = create_employee(&mut *persistence, &req, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/payroll/employees`.
async fn handle_list_employees(
    AxumState(app_state): AxumState<AppState>,
    SessionPrincipal(principal, _): SessionPrincipal,
) -> Result<Json<Vec<EmployeeResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = list_employees(&mut *persistence, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/payroll/adjustments`.
async fn handle_adjust_salary(
    AxumState(app_state): AxumState<AppState>,
    SessionPrincipal(principal, _): SessionPrincipal,
    Json(req): Json<AdjustSalaryRequest>,
) -> Result<Json<AdjustmentResponse>, HttpError> {
    info!(
        employee_id = req.employee_id,
        amount = req.amount,
        actor = %principal.id,
        "Handling salary adjustment request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response = adjust_salary(&mut *persistence, &req, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/payroll/adjustments`.
async fn handle_list_adjustments(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListAdjustmentsQuery>,
    SessionPrincipal(principal, _): SessionPrincipal,
) -> Result<Json<Vec<AdjustmentResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = list_adjustments(&mut *persistence, query.employee_id, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/payroll/payslip`.
async fn handle_generate_payslip(
    AxumState(app_state): AxumState<AppState>,
    SessionPrincipal(principal, _): SessionPrincipal,
    Json(req): Json<GeneratePayslipRequest>,
) -> Result<Json<PayslipResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = generate_payslip(&mut *persistence, &req, &principal)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/signup", post(handle_signup))
        .route("/auth/login", post(handle_login))
        .route("/auth/logout", post(handle_logout))
        .route("/auth/me", get(handle_me))
        .route("/access/check", get(handle_check_access))
        .route("/job_orders", post(handle_create_job_order))
        .route("/job_orders", get(handle_list_job_orders))
        .route("/job_orders/{id}", get(handle_get_job_order))
        .route("/job_orders/{id}/status", post(handle_update_status))
        .route("/job_orders/{id}/cutter", post(handle_assign_cutter))
        .route("/production/summary", get(handle_production_summary))
        .route("/customers", post(handle_create_customer))
        .route("/customers", get(handle_list_customers))
        .route("/customers/{id}", get(handle_get_customer))
        .route("/profiles", get(handle_list_profiles))
        .route("/profiles/role", post(handle_set_role))
        .route("/profiles/stats", get(handle_role_stats))
        .route("/payroll/employees", post(handle_create_employee))
        .route("/payroll/employees", get(handle_list_employees))
        .route("/payroll/adjustments", post(handle_adjust_salary))
        .route("/payroll/adjustments", get(handle_list_adjustments))
        .route("/payroll/payslip", post(handle_generate_payslip))
        .with_state(app_state)
}

/// Creates the bootstrap superadmin account if configured and absent.
fn bootstrap_superadmin(
    persistence: &mut Persistence,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if persistence.get_account_by_email(email)?.is_some() {
        info!(email = %email, "Bootstrap superadmin already exists");
        return Ok(());
    }

    let created_at = now_timestamp().map_err(|e| e.to_string())?;
    persistence.create_account(
        "usr_bootstrap_superadmin",
        email,
        Some("Superadmin"),
        password,
        Role::Superadmin,
        &created_at,
    )?;
    info!(email = %email, "Created bootstrap superadmin account");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing cutshop server");

    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if let (Some(email), Some(password)) = (&args.superadmin_email, &args.superadmin_password) {
        bootstrap_superadmin(&mut persistence, email, password)?;
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        policy: Arc::new(AccessPolicy::default_routes()),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
