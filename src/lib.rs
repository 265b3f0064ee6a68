// SPDX-License-Identifier: MIT OR Apache-2.0

//! Role-based access control for the Farmgate agricultural commerce
//! platform.
//!
//! This crate is the platform's authorization decision layer: a pure,
//! synchronous library with no I/O and no mutable state. Callers (route
//! guards, server-side action handlers, admin interfaces, enrollment flows)
//! hold the acting user's [`RoleSet`] and ask one of a small number of
//! questions:
//!
//! - May these roles open this route? ([`RouteTable::can_access`])
//! - May these roles perform this feature? ([`Feature::permits`])
//! - May this actor act on that user? ([`RoleSet::can_act_on`])
//! - Which roles may this actor hand out? ([`RoleSet::assignable_roles`])
//! - May a user of this gender hold this role? ([`Role::admits_gender`])
//!
//! All tables ([`Role`] attributes, the route table, the feature catalogue)
//! are immutable configuration fixed at build time, safe to share across
//! any number of concurrent requests.
//!
//! Unknown role or feature identifiers are rejected at the string boundary
//! with [`UnknownRoleError`] and [`UnknownFeatureError`]. Collaborators must
//! treat such a failure as a denial, never as an allow. The one deliberate
//! exception to fail-closed behaviour: a route path with no registered rule
//! is public, see [`RouteTable`].

mod features;
mod legacy;
mod role;
mod role_set;
mod routes;
#[cfg(test)]
mod tests;

pub use features::{Feature, UnknownFeatureError};
pub use legacy::LegacyRole;
pub use role::{Gender, Role, UnknownRoleError};
pub use role_set::RoleSet;
pub use routes::{RouteAccess, RouteRule, RouteTable};
