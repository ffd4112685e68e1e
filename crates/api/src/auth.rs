// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization services.

use time::{Duration, OffsetDateTime};

use crate::error::{ApiError, AuthError};
use crate::password_policy::PasswordPolicy;
use crate::request_response::SignupRequest;
use cutshop::{Principal, PrincipalResolution, evaluate};
use cutshop_domain::{Profile, Role, validate_profile_email};
use cutshop_persistence::{AccountData, Persistence, SessionData};

/// Returns the current UTC timestamp as an ISO 8601 string.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn now_timestamp() -> Result<String, ApiError> {
    OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to format timestamp: {e}"),
        })
}

/// Authentication service for session-based sign-in.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration duration (30 days).
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Registers a new account.
    ///
    /// New principals always start as `guest`; an administrator assigns
    /// a working role afterwards.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `request` - The signup request
    ///
    /// # Returns
    ///
    /// The created profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is malformed or taken, or the
    /// password does not meet policy.
    pub fn signup(
        persistence: &mut Persistence,
        request: &SignupRequest,
    ) -> Result<Profile, ApiError> {
        validate_profile_email(&request.email).map_err(crate::error::translate_domain_error)?;

        let policy: PasswordPolicy = PasswordPolicy::default();
        policy.validate(
            &request.password,
            &request.confirmation,
            &request.email,
            request.full_name.as_deref().unwrap_or(""),
        )?;

        if persistence
            .get_account_by_email(&request.email)
            .map_err(Self::internal)?
            .is_some()
        {
            return Err(ApiError::DomainRuleViolation {
                rule: String::from("unique_email"),
                message: format!("An account already exists for '{}'", request.email),
            });
        }

        let user_id: String = Self::generate_user_id();
        let created_at: String = now_timestamp()?;

        persistence
            .create_account(
                &user_id,
                &request.email,
                request.full_name.as_deref(),
                &request.password,
                Role::Guest,
                &created_at,
            )
            .map_err(Self::internal)?;

        Ok(Profile::new(
            user_id,
            request.email.clone(),
            request.full_name.clone(),
            Role::Guest,
            created_at,
        ))
    }

    /// Authenticates an account and creates a session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `email` - The sign-in email
    /// * `password` - The plain-text password
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `principal`, `profile`).
    ///
    /// # Errors
    ///
    /// Returns an error if the account is unknown, the password does not
    /// match, or the stored role is invalid.
    pub fn login(
        persistence: &mut Persistence,
        email: &str,
        password: &str,
    ) -> Result<(String, Principal, Profile), AuthError> {
        let account: AccountData = persistence
            .get_account_by_email(email)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Unknown email or wrong password"),
            })?;

        let password_matches: bool = persistence
            .verify_password(password, &account.password_hash)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Password verification failed: {e}"),
            })?;
        if !password_matches {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Unknown email or wrong password"),
            });
        }

        let profile: Profile =
            account
                .to_profile()
                .map_err(|e| AuthError::AuthenticationFailed {
                    reason: format!("Invalid stored role: {e}"),
                })?;

        let session_token: String = Self::generate_session_token();
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let expires_at: OffsetDateTime = now + Self::DEFAULT_SESSION_EXPIRATION;

        let now_str: String = Self::format_timestamp(now)?;
        let expires_str: String = Self::format_timestamp(expires_at)?;

        persistence
            .create_session(&session_token, &profile.user_id, &now_str, &expires_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        let principal: Principal = Principal::new(profile.user_id.clone(), profile.role);

        Ok((session_token, principal, profile))
    }

    /// Validates a session token and returns the signed-in principal.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to validate
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown or expired, or the
    /// account no longer exists.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<(Principal, Profile), AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(
            &session.expires_at,
            &time::format_description::well_known::Iso8601::DEFAULT,
        )
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to parse session expiration: {e}"),
        })?;

        let now: OffsetDateTime = OffsetDateTime::now_utc();
        if now > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let profile: Profile = persistence
            .get_profile(&session.user_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Account no longer exists"),
            })?;

        let now_str: String = Self::format_timestamp(now)?;
        persistence
            .update_session_activity(session.session_id, &now_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update session activity: {e}"),
            })?;

        Ok((Principal::new(profile.user_id.clone(), profile.role), profile))
    }

    /// Resolves the current principal from an optional session token.
    ///
    /// A missing, invalid, or expired token resolves to an absent
    /// principal; the access evaluator then redirects to sign-in where
    /// authentication is required. The `Pending` state never originates
    /// here: by the time a request carries a token, resolution is a
    /// synchronous lookup.
    #[must_use]
    pub fn resolve_principal(
        persistence: &mut Persistence,
        session_token: Option<&str>,
    ) -> PrincipalResolution {
        session_token.map_or(PrincipalResolution::Resolved(None), |token| {
            match Self::validate_session(persistence, token) {
                Ok((principal, _)) => PrincipalResolution::Resolved(Some(principal)),
                Err(_) => PrincipalResolution::Resolved(None),
            }
        })
    }

    /// Signs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })
    }

    /// Generates an opaque session token.
    fn generate_session_token() -> String {
        format!(
            "session_{:016x}{:016x}",
            rand::random::<u64>(),
            rand::random::<u64>()
        )
    }

    /// Generates an opaque stable user ID.
    fn generate_user_id() -> String {
        format!("usr_{:016x}", rand::random::<u64>())
    }

    /// Formats a timestamp for storage.
    fn format_timestamp(value: OffsetDateTime) -> Result<String, AuthError> {
        value
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format timestamp: {e}"),
            })
    }

    /// Maps persistence failures to internal API errors.
    fn internal(err: cutshop_persistence::PersistenceError) -> ApiError {
        ApiError::Internal {
            message: err.to_string(),
        }
    }
}

/// Authorization service for enforcing role-based access control.
///
/// Every check goes through the core evaluator, so there is exactly one
/// decision procedure in the system. Lifecycle edges are not checked
/// here; the lifecycle engine owns its own edge table.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Roles permitted to create job orders.
    pub const ORDER_INTAKE_ROLES: [Role; 3] = [Role::Superadmin, Role::Clerk, Role::Supervisor];

    /// Roles permitted to view individual job orders.
    pub const ORDER_VIEW_ROLES: [Role; 5] = [
        Role::Superadmin,
        Role::Clerk,
        Role::Supervisor,
        Role::Cutter,
        Role::Delivery,
    ];

    /// Roles permitted to use the production view and assign cutters.
    pub const PRODUCTION_ROLES: [Role; 3] = [Role::Superadmin, Role::Supervisor, Role::Cutter];

    /// Roles permitted to manage customer records.
    pub const CUSTOMER_ROLES: [Role; 3] = [Role::Superadmin, Role::Clerk, Role::Supervisor];

    /// Roles permitted to run payroll operations.
    pub const PAYROLL_ROLES: [Role; 2] = [Role::Superadmin, Role::Clerk];

    /// Roles permitted to administer users and roles.
    pub const USER_ADMIN_ROLES: [Role; 1] = [Role::Superadmin];

    /// Checks that a principal's role is within an action's permitted set.
    ///
    /// # Errors
    ///
    /// Returns an error if the role is outside the set.
    pub fn require_any_role(
        principal: &Principal,
        action: &str,
        allowed_roles: &[Role],
    ) -> Result<(), AuthError> {
        let resolution = PrincipalResolution::Resolved(Some(principal.clone()));
        if evaluate(&resolution, allowed_roles, true).is_admitted() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_roles: Self::roles_label(allowed_roles),
            })
        }
    }

    /// Checks if a principal may create a job order.
    ///
    /// # Errors
    ///
    /// Returns an error if the principal lacks an intake role.
    pub fn authorize_create_job_order(principal: &Principal) -> Result<(), AuthError> {
        Self::require_any_role(principal, "create_job_order", &Self::ORDER_INTAKE_ROLES)
    }

    /// Checks if a principal may view a job order.
    ///
    /// # Errors
    ///
    /// Returns an error if the principal lacks a staff role.
    pub fn authorize_view_job_order(principal: &Principal) -> Result<(), AuthError> {
        Self::require_any_role(principal, "view_job_order", &Self::ORDER_VIEW_ROLES)
    }

    /// Checks if a principal may use the production view.
    ///
    /// # Errors
    ///
    /// Returns an error if the principal lacks a production role.
    pub fn authorize_production(principal: &Principal) -> Result<(), AuthError> {
        Self::require_any_role(principal, "production", &Self::PRODUCTION_ROLES)
    }

    /// Checks if a principal may manage customer records.
    ///
    /// # Errors
    ///
    /// Returns an error if the principal lacks a customer role.
    pub fn authorize_manage_customers(principal: &Principal) -> Result<(), AuthError> {
        Self::require_any_role(principal, "manage_customers", &Self::CUSTOMER_ROLES)
    }

    /// Checks if a principal may run payroll operations.
    ///
    /// # Errors
    ///
    /// Returns an error if the principal lacks a payroll role.
    pub fn authorize_payroll(principal: &Principal) -> Result<(), AuthError> {
        Self::require_any_role(principal, "payroll", &Self::PAYROLL_ROLES)
    }

    /// Checks if a principal may administer users and roles.
    ///
    /// # Errors
    ///
    /// Returns an error if the principal is not a superadmin.
    pub fn authorize_manage_users(principal: &Principal) -> Result<(), AuthError> {
        Self::require_any_role(principal, "manage_users", &Self::USER_ADMIN_ROLES)
    }

    /// Joins a role set into a display label.
    fn roles_label(roles: &[Role]) -> String {
        roles
            .iter()
            .map(Role::as_str)
            .collect::<Vec<&str>>()
            .join(", ")
    }
}
