// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job order status tracking and lifecycle ordering.
//!
//! The lifecycle is strictly linear with no branches and no cycles.
//! Status only advances via operator action; the system never advances
//! status on its own.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Job order status states, in canonical lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Order received, not yet in production.
    Pending,
    /// Steel is being cut.
    Cutting,
    /// Cut pieces are being weighed.
    Weighing,
    /// Weighed and priced, ready for shipment.
    Ready,
    /// Out for delivery.
    Shipped,
    /// Delivered and closed. Terminal.
    Completed,
}

impl JobStatus {
    /// Every status, in canonical lifecycle order.
    pub const ORDER: [Self; 6] = [
        Self::Pending,
        Self::Cutting,
        Self::Weighing,
        Self::Ready,
        Self::Shipped,
        Self::Completed,
    ];

    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Cutting => "cutting",
            Self::Weighing => "weighing",
            Self::Ready => "ready",
            Self::Shipped => "shipped",
            Self::Completed => "completed",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "cutting" => Ok(Self::Cutting),
            "weighing" => Ok(Self::Weighing),
            "ready" => Ok(Self::Ready),
            "shipped" => Ok(Self::Shipped),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }

    /// Returns the zero-based position of this status in the lifecycle order.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Pending => 0,
            Self::Cutting => 1,
            Self::Weighing => 2,
            Self::Ready => 3,
            Self::Shipped => 4,
            Self::Completed => 5,
        }
    }

    /// Returns the immediate successor in the lifecycle, or `None` for the
    /// terminal status.
    #[must_use]
    pub const fn successor(&self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Cutting),
            Self::Cutting => Some(Self::Weighing),
            Self::Weighing => Some(Self::Ready),
            Self::Ready => Some(Self::Shipped),
            Self::Shipped => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    /// Returns true if this status is terminal (no outgoing transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns the derived progress percentage for this status.
    ///
    /// The mapping is monotonically increasing along the lifecycle order;
    /// that property is an invariant of the mapping, not an accident of
    /// the literal values.
    #[must_use]
    pub const fn progress_percent(&self) -> u8 {
        match self {
            Self::Pending => 10,
            Self::Cutting => 40,
            Self::Weighing => 70,
            Self::Ready => 85,
            Self::Shipped => 95,
            Self::Completed => 100,
        }
    }

    /// Validates that `target` is the immediate successor of this status.
    ///
    /// This is the pure ordering half of the transition rule; which role
    /// may drive each edge is layered on top by the lifecycle engine.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the step is not
    /// the immediate successor (including same-status and backward steps,
    /// and any step out of the terminal status).
    pub fn validate_step(&self, target: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
                reason: String::from("no transitions are permitted out of a terminal status"),
            });
        }

        if *self == target {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
                reason: String::from("same-status transitions are not permitted"),
            });
        }

        if self.successor() != Some(target) {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
                reason: String::from("target is not the immediate successor in the lifecycle"),
            });
        }

        Ok(())
    }
}

impl FromStr for JobStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
