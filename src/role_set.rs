// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The set of roles held by a single user.
///
/// Role sets are owned by the session layer. The decision functions only ever
/// read them, nothing in this crate retains or mutates a set beyond the call
/// it was passed into.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct RoleSet(HashSet<Role>);

impl RoleSet {
    /// An empty role set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }

    /// Return true if the user holds the given role.
    pub fn has(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// Return true if the user holds at least one of the given roles.
    pub fn has_any(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has(*role))
    }

    /// Return true if the user holds every one of the given roles.
    ///
    /// An empty `roles` slice is vacuously true.
    pub fn has_all(&self, roles: &[Role]) -> bool {
        roles.iter().all(|role| self.has(*role))
    }

    /// Return true if the user holds an administrative role.
    pub fn is_admin(&self) -> bool {
        self.has_any(&[Role::Admin, Role::SuperAdmin])
    }

    /// Return true if the user holds the super admin role.
    pub fn is_super_admin(&self) -> bool {
        self.has(Role::SuperAdmin)
    }

    /// Highest hierarchy level across the held roles.
    ///
    /// The empty set has level 0, below every real role.
    pub fn highest_level(&self) -> u8 {
        self.iter().map(|role| role.level()).max().unwrap_or(0)
    }

    /// Return true if an actor holding this role set may act on a user
    /// holding `target`.
    ///
    /// Super admins may act on anyone. Everyone else needs a strictly higher
    /// hierarchy level than the target, equal levels never permit action.
    pub fn can_act_on(&self, target: &RoleSet) -> bool {
        if self.is_super_admin() {
            return true;
        }

        self.highest_level() > target.highest_level()
    }

    /// Every role an actor holding this role set may hand out.
    ///
    /// Bounded by the actor's own highest hierarchy level, which prevents
    /// escalation above that level and nothing more. This check alone does
    /// not restrict lateral assignment by non-admins, role-mutation surfaces
    /// must additionally gate on [`RoleSet::is_admin`].
    pub fn assignable_roles(&self) -> RoleSet {
        let level = self.highest_level();

        Role::ALL
            .iter()
            .filter(|role| role.level() <= level)
            .copied()
            .collect()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&[Role]> for RoleSet {
    fn from(roles: &[Role]) -> Self {
        roles.iter().copied().collect()
    }
}

impl<const N: usize> From<[Role; N]> for RoleSet {
    fn from(roles: [Role; N]) -> Self {
        roles.into_iter().collect()
    }
}
