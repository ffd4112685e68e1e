// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cutshop_domain::{DomainError, JobStatus, Role};

/// Errors that can occur during core operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A job order status transition was rejected.
    ///
    /// No mutation occurs when a transition is rejected; the caller's
    /// order snapshot is left untouched.
    InvalidTransition {
        /// The order's current status.
        from: JobStatus,
        /// The requested status.
        to: JobStatus,
        /// The role that attempted the transition.
        acting_role: Role,
        /// Why the transition was rejected.
        reason: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidTransition {
                from,
                to,
                acting_role,
                reason,
            } => {
                write!(
                    f,
                    "Invalid transition from '{from}' to '{to}' as '{acting_role}': {reason}"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
