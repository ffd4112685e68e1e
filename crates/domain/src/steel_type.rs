// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The shop's steel catalog.
///
/// Order intake only accepts materials the shop actually cuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SteelType {
    CarbonSteel,
    StainlessSteel,
    Aluminum,
    GalvanizedSteel,
    ColdRolledSteel,
    HotRolledSteel,
    MildSteel,
    ToolSteel,
}

impl SteelType {
    /// Every catalog entry, in display order.
    pub const ALL: [Self; 8] = [
        Self::CarbonSteel,
        Self::StainlessSteel,
        Self::Aluminum,
        Self::GalvanizedSteel,
        Self::ColdRolledSteel,
        Self::HotRolledSteel,
        Self::MildSteel,
        Self::ToolSteel,
    ];

    /// Returns the display string for the steel type.
    ///
    /// This is the form used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CarbonSteel => "Carbon Steel",
            Self::StainlessSteel => "Stainless Steel",
            Self::Aluminum => "Aluminum",
            Self::GalvanizedSteel => "Galvanized Steel",
            Self::ColdRolledSteel => "Cold Rolled Steel",
            Self::HotRolledSteel => "Hot Rolled Steel",
            Self::MildSteel => "Mild Steel",
            Self::ToolSteel => "Tool Steel",
        }
    }

    /// Parses a steel type from its display string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownSteelType` if the string is not in the
    /// catalog.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "Carbon Steel" => Ok(Self::CarbonSteel),
            "Stainless Steel" => Ok(Self::StainlessSteel),
            "Aluminum" => Ok(Self::Aluminum),
            "Galvanized Steel" => Ok(Self::GalvanizedSteel),
            "Cold Rolled Steel" => Ok(Self::ColdRolledSteel),
            "Hot Rolled Steel" => Ok(Self::HotRolledSteel),
            "Mild Steel" => Ok(Self::MildSteel),
            "Tool Steel" => Ok(Self::ToolSteel),
            _ => Err(DomainError::UnknownSteelType(s.to_string())),
        }
    }
}

impl FromStr for SteelType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for SteelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steel_type_string_round_trip() {
        for steel_type in SteelType::ALL {
            let s = steel_type.as_str();
            match SteelType::from_str(s) {
                Ok(parsed) => assert_eq!(steel_type, parsed),
                Err(e) => panic!("Failed to parse steel type string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_unknown_steel_type_is_rejected() {
        assert!(SteelType::from_str("Titanium").is_err());
    }
}
