// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The access control evaluator.
//!
//! A single declarative rule table is consulted once per navigation,
//! replacing per-view permission branching. The evaluator is pure: it
//! takes a principal resolution and a rule, returns a decision, and has
//! no side effects. Rendering and redirecting are the caller's job.

use cutshop_domain::Role;

/// An authenticated principal: a stable identity plus a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Opaque stable identifier for the principal.
    pub id: String,
    /// The principal's current role.
    pub role: Role,
}

impl Principal {
    /// Creates a new principal.
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }
}

/// The observable states of principal resolution.
///
/// Resolution is a single-shot lookup of the current identity and role.
/// It is either still in flight, or resolved to a present or absent
/// principal. There is no cancellation: a requested resolution always
/// eventually completes or the navigation is abandoned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrincipalResolution {
    /// Resolution is still in flight. The evaluator must suspend rather
    /// than default to admit or deny.
    Pending,
    /// Resolution finished; the principal is present or absent.
    Resolved(Option<Principal>),
}

impl PrincipalResolution {
    /// Returns true while resolution is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns the resolved principal, if resolution finished with one.
    #[must_use]
    pub const fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Pending | Self::Resolved(None) => None,
            Self::Resolved(Some(principal)) => Some(principal),
        }
    }
}

/// The outcome of an access evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Principal resolution is still outstanding; the caller must wait
    /// for resolution and re-evaluate. Never a grant, never a denial.
    Pending,
    /// The principal may access the resource.
    Admit,
    /// No principal is signed in and the resource requires one; the
    /// caller should redirect to authentication.
    RedirectToAuth,
    /// The principal is valid but not authorized for this resource; the
    /// caller should render an access-denied view, not redirect.
    Deny,
}

impl Decision {
    /// Returns true if the decision grants access.
    #[must_use]
    pub const fn is_admitted(&self) -> bool {
        matches!(self, Self::Admit)
    }
}

/// An access rule for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRule {
    /// The resource path this rule governs.
    pub resource_path: String,
    /// Roles permitted to access the resource. An empty set means any
    /// authenticated principal may access it.
    pub allowed_roles: Vec<Role>,
    /// Whether the resource requires an authenticated principal.
    pub require_auth: bool,
}

impl AccessRule {
    /// Creates a rule for an authenticated resource with a role whitelist.
    #[must_use]
    pub const fn new(resource_path: String, allowed_roles: Vec<Role>) -> Self {
        Self {
            resource_path,
            allowed_roles,
            require_auth: true,
        }
    }

    /// Creates a rule for an authenticated resource open to any role.
    #[must_use]
    pub const fn any_authenticated(resource_path: String) -> Self {
        Self {
            resource_path,
            allowed_roles: Vec::new(),
            require_auth: true,
        }
    }
}

/// Evaluates an access request against a rule.
///
/// The decision procedure, in order:
///
/// 1. Resolution outstanding → [`Decision::Pending`]. The evaluator never
///    defaults to admit or deny while the principal is unknown.
/// 2. `require_auth` and no principal → [`Decision::RedirectToAuth`].
/// 3. Non-empty whitelist and the principal's role is not in it (or no
///    principal at all) → [`Decision::Deny`].
/// 4. Otherwise → [`Decision::Admit`].
///
/// Roles are already typed here; a role string outside the known set
/// must be rejected at the parsing boundary and treated as a denial.
#[must_use]
pub fn evaluate(
    resolution: &PrincipalResolution,
    allowed_roles: &[Role],
    require_auth: bool,
) -> Decision {
    match resolution {
        PrincipalResolution::Pending => Decision::Pending,
        PrincipalResolution::Resolved(None) => {
            if require_auth {
                Decision::RedirectToAuth
            } else if allowed_roles.is_empty() {
                Decision::Admit
            } else {
                // A whitelisted resource cannot be satisfied without a role.
                Decision::Deny
            }
        }
        PrincipalResolution::Resolved(Some(principal)) => {
            if allowed_roles.is_empty() || allowed_roles.contains(&principal.role) {
                Decision::Admit
            } else {
                Decision::Deny
            }
        }
    }
}

/// A declarative table of access rules, one per resource.
///
/// Rules are evaluated independently per navigation; there is no caching
/// and no session-scoped override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    /// The rule table.
    pub rules: Vec<AccessRule>,
}

impl AccessPolicy {
    /// Creates a policy from an explicit rule table.
    #[must_use]
    pub const fn new(rules: Vec<AccessRule>) -> Self {
        Self { rules }
    }

    /// The application's route table.
    ///
    /// Whitelists are exhaustive per resource: `superadmin` appears only
    /// where the resource explicitly lists it.
    #[must_use]
    pub fn default_routes() -> Self {
        use Role::{Clerk, Cutter, Delivery, Guest, Superadmin, Supervisor};

        Self::new(vec![
            AccessRule::any_authenticated(String::from("/")),
            AccessRule::new(String::from("/guest"), vec![Guest]),
            AccessRule::new(String::from("/superadmin"), vec![Superadmin]),
            AccessRule::new(
                String::from("/orders/new"),
                vec![Superadmin, Clerk, Supervisor],
            ),
            AccessRule::new(
                String::from("/orders/{id}"),
                vec![Superadmin, Clerk, Supervisor, Cutter, Delivery],
            ),
            AccessRule::new(
                String::from("/customers/{id}"),
                vec![Superadmin, Clerk, Supervisor],
            ),
            AccessRule::new(
                String::from("/production"),
                vec![Superadmin, Supervisor, Cutter],
            ),
            AccessRule::new(String::from("/payroll"), vec![Superadmin, Clerk]),
        ])
    }

    /// Looks up the rule for a resource path.
    #[must_use]
    pub fn rule_for(&self, resource_path: &str) -> Option<&AccessRule> {
        self.rules
            .iter()
            .find(|rule| rule.resource_path == resource_path)
    }

    /// Evaluates a navigation request against the policy.
    ///
    /// A path with no explicit rule falls back to requiring an
    /// authenticated principal with no role restriction, matching the
    /// application's default of wrapping every page in an authentication
    /// gate.
    #[must_use]
    pub fn evaluate_path(&self, resource_path: &str, resolution: &PrincipalResolution) -> Decision {
        self.rule_for(resource_path).map_or_else(
            || evaluate(resolution, &[], true),
            |rule| evaluate(resolution, &rule.allowed_roles, rule.require_auth),
        )
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::default_routes()
    }
}
