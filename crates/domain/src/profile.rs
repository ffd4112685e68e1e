// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Principal profile records and role statistics.

use crate::role::Role;
use serde::{Deserialize, Serialize};

/// A principal's profile as seen by the administrative view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Opaque stable identifier for the principal.
    pub user_id: String,
    /// Sign-in email address.
    pub email: String,
    /// Display name, if provided.
    pub full_name: Option<String>,
    /// Current role assignment.
    pub role: Role,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

impl Profile {
    /// Creates a new profile.
    #[must_use]
    pub const fn new(
        user_id: String,
        email: String,
        full_name: Option<String>,
        role: Role,
        created_at: String,
    ) -> Self {
        Self {
            user_id,
            email,
            full_name,
            role,
            created_at,
        }
    }
}

/// Per-role profile counts for the administrative dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleStats {
    /// Count per role, one entry for every known role in display order.
    pub counts: Vec<(Role, usize)>,
}

impl RoleStats {
    /// Returns the count for a specific role.
    #[must_use]
    pub fn count(&self, role: Role) -> usize {
        self.counts
            .iter()
            .find(|(r, _)| *r == role)
            .map_or(0, |(_, n)| *n)
    }

    /// Returns the total number of profiles counted.
    ///
    /// By construction this equals the length of the profile list the
    /// stats were computed from.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

/// Computes per-role counts over a list of profiles.
///
/// Every known role appears in the result, including roles with a count
/// of zero. The sum of the counts always equals `profiles.len()`.
#[must_use]
pub fn count_by_role(profiles: &[Profile]) -> RoleStats {
    let counts: Vec<(Role, usize)> = Role::ALL
        .iter()
        .map(|role| {
            let n = profiles.iter().filter(|p| p.role == *role).count();
            (*role, n)
        })
        .collect();
    RoleStats { counts }
}
