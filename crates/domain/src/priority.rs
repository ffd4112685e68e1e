// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Job order priority.
///
/// Priority is an independent axis from status; it never constrains
/// which status transitions are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait behind other work.
    Low,
    /// Ordinary scheduling.
    #[default]
    Normal,
    /// Should be worked ahead of normal orders.
    High,
    /// Front of the queue.
    Urgent,
}

impl Priority {
    /// Every priority, in ascending urgency order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Normal, Self::High, Self::Urgent];

    /// Returns the string representation of the priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Parses a priority from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownPriority` if the string is not valid.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(DomainError::UnknownPriority(s.to_string())),
        }
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_string_round_trip() {
        for priority in Priority::ALL {
            let s = priority.as_str();
            match Priority::from_str(s) {
                Ok(parsed) => assert_eq!(priority, parsed),
                Err(e) => panic!("Failed to parse priority string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_default_priority_is_normal() {
        assert_eq!(Priority::default(), Priority::Normal);
    }

    #[test]
    fn test_invalid_priority_string() {
        assert!(Priority::from_str("critical").is_err());
    }
}
