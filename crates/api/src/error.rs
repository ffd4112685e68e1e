// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use cutshop::{CoreError, RepositoryError};
use cutshop_domain::DomainError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// No principal is signed in and the action requires one.
    AuthRequired {
        /// The resource or action that was attempted.
        resource: String,
    },
    /// The principal is valid but not authorized.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The roles permitted to perform this action.
        required_roles: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::AuthRequired { resource } => {
                write!(f, "Authentication required for '{resource}'")
            }
            Self::Unauthorized {
                action,
                required_roles,
            } => {
                write!(f, "Unauthorized: '{action}' requires one of: {required_roles}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. Nothing here is fatal: denial renders a message, a missing
/// session redirects to sign-in, and a rejected transition leaves state
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// No principal is signed in; the caller should redirect to sign-in.
    AuthRequired {
        /// The resource or action that was attempted.
        resource: String,
    },
    /// The principal is valid but not authorized for this resource or
    /// action; the caller should render a denial, not redirect.
    AccessDenied {
        /// The resource or action that was attempted.
        resource: String,
        /// A human-readable description of the denial.
        message: String,
    },
    /// A job order status transition was rejected. No mutation occurred.
    InvalidTransition {
        /// The order's current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was rejected.
        reason: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::AuthRequired { resource } => {
                write!(f, "Authentication required for '{resource}'")
            }
            Self::AccessDenied { resource, message } => {
                write!(f, "Access denied for '{resource}': {message}")
            }
            Self::InvalidTransition { from, to, reason } => {
                write!(f, "Invalid transition from '{from}' to '{to}': {reason}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::AuthRequired { resource } => Self::AuthRequired { resource },
            AuthError::Unauthorized {
                action,
                required_roles,
            } => Self::AccessDenied {
                resource: action,
                message: format!("requires one of: {required_roles}"),
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(message) => Self::ResourceNotFound {
                resource_type: String::from("Record"),
                message,
            },
            RepositoryError::Storage(message) => Self::Internal { message },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit so domain errors are never leaked
/// directly. An unknown role string is translated to a denial: default
/// deny, never "any role".
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownRole(role) => ApiError::AccessDenied {
            resource: String::from("role"),
            message: format!("role '{role}' is not recognized"),
        },
        DomainError::UnknownStatus(status) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown job order status: '{status}'"),
        },
        DomainError::UnknownPriority(priority) => ApiError::InvalidInput {
            field: String::from("priority"),
            message: format!("Unknown priority: '{priority}'"),
        },
        DomainError::UnknownSteelType(steel_type) => ApiError::InvalidInput {
            field: String::from("steel_type"),
            message: format!("Unknown steel type: '{steel_type}'"),
        },
        DomainError::UnknownAdjustmentKind(kind) => ApiError::InvalidInput {
            field: String::from("kind"),
            message: format!("Unknown adjustment kind: '{kind}'"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => ApiError::InvalidTransition {
            from,
            to,
            reason,
        },
        DomainError::EmptyPoNumber => ApiError::InvalidInput {
            field: String::from("po_number"),
            message: String::from("Purchase order number is required"),
        },
        DomainError::EmptyCustomerName => ApiError::InvalidInput {
            field: String::from("customer_name"),
            message: String::from("Customer name is required"),
        },
        DomainError::EmptyEmployeeName => ApiError::InvalidInput {
            field: String::from("name"),
            message: String::from("Employee name is required"),
        },
        DomainError::EmptyEmployeeCode => ApiError::InvalidInput {
            field: String::from("employee_code"),
            message: String::from("Employee code is required"),
        },
        DomainError::EmptyAdjustmentReason => ApiError::InvalidInput {
            field: String::from("reason"),
            message: String::from("Adjustment reason is required"),
        },
        DomainError::InvalidQuantity { quantity } => ApiError::InvalidInput {
            field: String::from("quantity"),
            message: format!("Quantity must be greater than 0, got {quantity}"),
        },
        DomainError::InvalidDimension { field, value } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Must be greater than 0, got {value}"),
        },
        DomainError::CompletedQuantityExceedsQuantity {
            completed,
            quantity,
        } => ApiError::DomainRuleViolation {
            rule: String::from("completed_within_quantity"),
            message: format!("Completed quantity {completed} exceeds ordered quantity {quantity}"),
        },
        DomainError::InvalidWeight { value } => ApiError::InvalidInput {
            field: String::from("weight_kg"),
            message: format!("Weight must be greater than 0, got {value}"),
        },
        DomainError::InvalidPrice { value } => ApiError::InvalidInput {
            field: String::from("price"),
            message: format!("Price must not be negative, got {value}"),
        },
        DomainError::InvalidSalary { field, value } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Salary must not be negative, got {value}"),
        },
        DomainError::ZeroAdjustmentAmount => ApiError::InvalidInput {
            field: String::from("amount"),
            message: String::from("Adjustment amount must not be zero"),
        },
        DomainError::EmployeeMismatch { expected, found } => ApiError::DomainRuleViolation {
            rule: String::from("adjustment_targets_employee"),
            message: format!(
                "Adjustment targets employee {expected} but was applied to employee {found}"
            ),
        },
        DomainError::InvalidEmail(email) => ApiError::InvalidInput {
            field: String::from("email"),
            message: format!("Invalid email address: '{email}'"),
        },
        DomainError::DateOutOfRange { reason } => ApiError::Internal {
            message: format!("Date computation out of range: {reason}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit so core errors are never leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvalidTransition {
            from, to, reason, ..
        } => ApiError::InvalidTransition {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
            reason,
        },
    }
}
