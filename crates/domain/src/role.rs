// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The closed role set used for authorization decisions.
//!
//! Roles apply to principals (signed-in people), never to job orders or
//! customers. A role string outside this set never parses; callers must
//! treat the failure as a denial, not as a wildcard.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Principal roles for the steel-cutting shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Unrestricted administrative authority, including user and role
    /// management. Never implicitly added to resource whitelists.
    Superadmin,
    /// Office clerk: order intake, customer records, payroll.
    Clerk,
    /// Production supervisor: order intake and production oversight.
    Supervisor,
    /// Steel cutter: drives production-stage status transitions.
    Cutter,
    /// Delivery staff: drives shipping and completion transitions.
    Delivery,
    /// Default role assigned to a newly registered principal pending
    /// administrative assignment.
    Guest,
}

impl Role {
    /// Every known role, in display order.
    pub const ALL: [Self; 6] = [
        Self::Superadmin,
        Self::Clerk,
        Self::Supervisor,
        Self::Cutter,
        Self::Delivery,
        Self::Guest,
    ];

    /// Returns the string representation of the role.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::Clerk => "clerk",
            Self::Supervisor => "supervisor",
            Self::Cutter => "cutter",
            Self::Delivery => "delivery",
            Self::Guest => "guest",
        }
    }

    /// Returns the human-readable display name for the role.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Superadmin => "Superadmin",
            Self::Clerk => "Office Clerk",
            Self::Supervisor => "Production Supervisor",
            Self::Cutter => "Steel Cutter",
            Self::Delivery => "Delivery Staff",
            Self::Guest => "Guest",
        }
    }

    /// Parses a role from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownRole` if the string is not a known role.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "superadmin" => Ok(Self::Superadmin),
            "clerk" => Ok(Self::Clerk),
            "supervisor" => Ok(Self::Supervisor),
            "cutter" => Ok(Self::Cutter),
            "delivery" => Ok(Self::Delivery),
            "guest" => Ok(Self::Guest),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
