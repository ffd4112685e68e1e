// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Role string is not part of the known role set.
    UnknownRole(String),
    /// Status string is not part of the job order lifecycle.
    UnknownStatus(String),
    /// Priority string is not part of the priority set.
    UnknownPriority(String),
    /// Steel type string is not part of the shop catalog.
    UnknownSteelType(String),
    /// Adjustment kind string is not recognized.
    UnknownAdjustmentKind(String),
    /// A status transition is not permitted by the lifecycle rules.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not permitted.
        reason: String,
    },
    /// Purchase order number is empty.
    EmptyPoNumber,
    /// Customer name is empty.
    EmptyCustomerName,
    /// Employee name is empty.
    EmptyEmployeeName,
    /// Employee code is empty.
    EmptyEmployeeCode,
    /// Adjustment reason is empty.
    EmptyAdjustmentReason,
    /// Quantity must be strictly positive.
    InvalidQuantity {
        /// The rejected quantity.
        quantity: u32,
    },
    /// A dimension field must be strictly positive and finite.
    InvalidDimension {
        /// The dimension field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Completed quantity exceeds ordered quantity.
    CompletedQuantityExceedsQuantity {
        /// The completed quantity.
        completed: u32,
        /// The ordered quantity.
        quantity: u32,
    },
    /// Weight must be strictly positive when present.
    InvalidWeight {
        /// The rejected weight in kilograms.
        value: f64,
    },
    /// Price must be non-negative when present.
    InvalidPrice {
        /// The rejected price in minor currency units.
        value: i64,
    },
    /// Salary values must be non-negative.
    InvalidSalary {
        /// The salary field name.
        field: &'static str,
        /// The rejected value in minor currency units.
        value: i64,
    },
    /// A salary adjustment of zero has no effect and is rejected.
    ZeroAdjustmentAmount,
    /// An adjustment was applied against the wrong employee.
    EmployeeMismatch {
        /// The employee the adjustment targets.
        expected: i64,
        /// The employee it was applied to.
        found: i64,
    },
    /// Email address failed validation.
    InvalidEmail(String),
    /// A calendar computation produced an out-of-range date.
    DateOutOfRange {
        /// Description of the computation that failed.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRole(role) => write!(f, "Unknown role: '{role}'"),
            Self::UnknownStatus(status) => write!(f, "Unknown job order status: '{status}'"),
            Self::UnknownPriority(priority) => write!(f, "Unknown priority: '{priority}'"),
            Self::UnknownSteelType(steel_type) => {
                write!(f, "Unknown steel type: '{steel_type}'")
            }
            Self::UnknownAdjustmentKind(kind) => {
                write!(f, "Unknown adjustment kind: '{kind}'")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Invalid status transition from '{from}' to '{to}': {reason}")
            }
            Self::EmptyPoNumber => write!(f, "Purchase order number must not be empty"),
            Self::EmptyCustomerName => write!(f, "Customer name must not be empty"),
            Self::EmptyEmployeeName => write!(f, "Employee name must not be empty"),
            Self::EmptyEmployeeCode => write!(f, "Employee code must not be empty"),
            Self::EmptyAdjustmentReason => {
                write!(f, "Salary adjustment reason must not be empty")
            }
            Self::InvalidQuantity { quantity } => {
                write!(f, "Quantity must be greater than 0, got {quantity}")
            }
            Self::InvalidDimension { field, value } => {
                write!(f, "Dimension '{field}' must be greater than 0, got {value}")
            }
            Self::CompletedQuantityExceedsQuantity {
                completed,
                quantity,
            } => {
                write!(
                    f,
                    "Completed quantity {completed} exceeds ordered quantity {quantity}"
                )
            }
            Self::InvalidWeight { value } => {
                write!(f, "Weight must be greater than 0, got {value}")
            }
            Self::InvalidPrice { value } => {
                write!(f, "Price must not be negative, got {value}")
            }
            Self::InvalidSalary { field, value } => {
                write!(f, "Salary field '{field}' must not be negative, got {value}")
            }
            Self::ZeroAdjustmentAmount => {
                write!(f, "Salary adjustment amount must not be zero")
            }
            Self::EmployeeMismatch { expected, found } => {
                write!(
                    f,
                    "Adjustment targets employee {expected} but was applied to employee {found}"
                )
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: '{email}'"),
            Self::DateOutOfRange { reason } => {
                write!(f, "Date computation out of range: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
