// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route guarding.
//!
//! Pages are guarded by a static table mapping route paths to the set of
//! roles which may open them. A registered path covers every path nested
//! below it, so `/admin/users` also guards `/admin/users/123`. Paths with no
//! matching entry are public, absence of a rule is how intentionally open
//! pages (the marketplace itself, the academy catalogue, auth screens) are
//! expressed.

use tracing::debug;

use crate::role::Role;
use crate::role_set::RoleSet;

/// The canonical route table of the platform.
const PLATFORM_ROUTES: &[(&str, &[Role])] = &[
    ("/admin", &[Role::Admin, Role::SuperAdmin]),
    ("/admin/users", &[Role::SuperAdmin]),
    ("/admin/settings", &[Role::SuperAdmin]),
    ("/admin/withdrawals", &[Role::Admin, Role::SuperAdmin]),
    ("/admin/disputes", &[Role::Admin, Role::SuperAdmin]),
    (
        "/admin/reports",
        &[Role::FieldOfficer, Role::Admin, Role::SuperAdmin],
    ),
    ("/marketplace/sell", &[Role::Seller, Role::Farmer]),
    ("/land/listings/new", &[Role::LandOwner]),
    (
        "/cooperative",
        &[
            Role::CooperativeMember,
            Role::FieldOfficer,
            Role::Admin,
            Role::SuperAdmin,
        ],
    ),
    ("/cooperative/loans", &[Role::CooperativeMember]),
    ("/cooperative/savings", &[Role::CooperativeMember]),
    ("/invest", &[Role::Investor]),
    (
        "/export",
        &[Role::ExportParticipant, Role::Admin, Role::SuperAdmin],
    ),
    (
        "/wave",
        &[
            Role::WaveParticipant,
            Role::FieldOfficer,
            Role::Admin,
            Role::SuperAdmin,
        ],
    ),
    ("/academy/manage", &[Role::Admin, Role::SuperAdmin]),
    ("/field", &[Role::FieldOfficer, Role::Admin, Role::SuperAdmin]),
];

/// A single route rule: a path and the roles permitted to open it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouteRule {
    path: String,
    roles: Vec<Role>,
}

impl RouteRule {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}

/// Access requirement resolved for a route path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RouteAccess<'a> {
    /// No rule matched the path, or the matched rule names no roles.
    Public,
    /// At least one of these roles is required.
    Restricted(&'a [Role]),
}

/// Immutable route table, built once at process start.
///
/// Lookups prefer an exact path match. Otherwise the longest registered
/// prefix which covers the path wins, so rules can be registered in any
/// order.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
    strict: bool,
}

impl RouteTable {
    /// The canonical Farmgate route table.
    pub fn platform() -> Self {
        Self::from_rules(
            PLATFORM_ROUTES
                .iter()
                .map(|(path, roles)| (*path, roles.to_vec())),
        )
    }

    /// Build a table from the given path and role-set pairs.
    pub fn from_rules<P, I>(rules: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = (P, Vec<Role>)>,
    {
        let rules = rules
            .into_iter()
            .map(|(path, roles)| RouteRule {
                path: path.into(),
                roles,
            })
            .collect();

        Self {
            rules,
            strict: false,
        }
    }

    /// Harden the table: unmatched paths and rules with an empty role set
    /// deny instead of falling back to public.
    ///
    /// Off by default. The permissive fallback is relied upon for
    /// intentionally open pages, strict tables are for deployments which
    /// register every route explicitly.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// All registered route paths.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.path.as_str())
    }

    /// Resolve the access requirement registered for a path.
    ///
    /// This reports the table content only. The decision function
    /// [`RouteTable::can_access`] additionally applies the strict-mode
    /// fallback.
    pub fn access(&self, path: &str) -> RouteAccess<'_> {
        match self.matched_rule(path) {
            Some(rule) if !rule.roles.is_empty() => RouteAccess::Restricted(&rule.roles),
            _ => RouteAccess::Public,
        }
    }

    /// Return true if a user holding the given roles may open the path.
    ///
    /// Restricted paths require at least one of the registered roles, not
    /// all of them.
    pub fn can_access(&self, roles: &RoleSet, path: &str) -> bool {
        match self.matched_rule(path) {
            Some(rule) if !rule.roles.is_empty() => {
                let permitted = roles.has_any(&rule.roles);
                debug!(path, rule = %rule.path, permitted, "restricted route");
                permitted
            }
            Some(_) => !self.strict,
            None => {
                // Unregistered paths are public by design.
                !self.strict
            }
        }
    }

    /// All registered paths a user holding the given roles may open.
    pub fn accessible(&self, roles: &RoleSet) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|rule| {
                if rule.roles.is_empty() {
                    !self.strict
                } else {
                    roles.has_any(&rule.roles)
                }
            })
            .map(|rule| rule.path.as_str())
            .collect()
    }

    fn matched_rule(&self, path: &str) -> Option<&RouteRule> {
        if let Some(rule) = self.rules.iter().find(|rule| rule.path == path) {
            return Some(rule);
        }

        // Longest registered prefix wins, registration order is never
        // observable.
        self.rules
            .iter()
            .filter(|rule| covers(&rule.path, path))
            .max_by_key(|rule| rule.path.len())
    }
}

/// A registered path covers itself and every path nested below it, but not
/// sibling paths sharing a string prefix ("/admin" covers "/admin/users",
/// not "/administration").
fn covers(prefix: &str, path: &str) -> bool {
    path.len() > prefix.len()
        && path.starts_with(prefix)
        && path.as_bytes()[prefix.len()] == b'/'
}
