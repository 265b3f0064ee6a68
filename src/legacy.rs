// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aliasing of role identifiers written by earlier platform releases.
//!
//! Earlier releases stored a smaller role vocabulary. Records carrying those
//! identifiers are mapped onto the current enumeration once, at the ingestion
//! boundary. The alias table is never consulted during authorization
//! decisions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::role::{Role, UnknownRoleError};

/// A role identifier from the deprecated vocabulary.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LegacyRole {
    Member,
    Exporter,
    Admin,
    Vendor,
    SuperAdmin,
}

impl LegacyRole {
    /// Every deprecated identifier in migration order.
    pub const ALL: [LegacyRole; 5] = [
        LegacyRole::Member,
        LegacyRole::Exporter,
        LegacyRole::Admin,
        LegacyRole::Vendor,
        LegacyRole::SuperAdmin,
    ];

    /// The current role this deprecated identifier maps onto.
    ///
    /// Total over the legacy vocabulary.
    pub const fn resolve(&self) -> Role {
        match self {
            LegacyRole::Member => Role::GeneralUser,
            LegacyRole::Exporter => Role::ExportParticipant,
            LegacyRole::Admin => Role::Admin,
            LegacyRole::Vendor => Role::Seller,
            LegacyRole::SuperAdmin => Role::SuperAdmin,
        }
    }

    /// Identifier as stored by earlier releases.
    pub const fn as_str(&self) -> &'static str {
        match self {
            LegacyRole::Member => "member",
            LegacyRole::Exporter => "exporter",
            LegacyRole::Admin => "admin",
            LegacyRole::Vendor => "vendor",
            LegacyRole::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for LegacyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LegacyRole {
    type Err = UnknownRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let legacy = match value {
            "member" => LegacyRole::Member,
            "exporter" => LegacyRole::Exporter,
            "admin" => LegacyRole::Admin,
            "vendor" => LegacyRole::Vendor,
            "super_admin" => LegacyRole::SuperAdmin,
            unknown => return Err(UnknownRoleError(unknown.to_string())),
        };

        Ok(legacy)
    }
}

impl Role {
    /// Resolve a role identifier as stored by earlier platform releases.
    ///
    /// Identifiers outside the deprecated vocabulary are rejected, they are
    /// never passed through unchanged.
    pub fn from_legacy_str(value: &str) -> Result<Role, UnknownRoleError> {
        value.parse::<LegacyRole>().map(|legacy| legacy.resolve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_table_is_total() {
        for legacy in LegacyRole::ALL {
            // Resolving never panics and lands inside the current enumeration.
            assert!(Role::ALL.contains(&legacy.resolve()));
        }
    }

    #[test]
    fn known_aliases() {
        assert_eq!(Role::from_legacy_str("vendor"), Ok(Role::Seller));
        assert_eq!(Role::from_legacy_str("member"), Ok(Role::GeneralUser));
        assert_eq!(Role::from_legacy_str("exporter"), Ok(Role::ExportParticipant));
        assert_eq!(Role::from_legacy_str("admin"), Ok(Role::Admin));
        assert_eq!(Role::from_legacy_str("super_admin"), Ok(Role::SuperAdmin));
    }

    #[test]
    fn current_identifiers_are_not_aliases() {
        // "seller" is a current identifier, not a legacy one. The migration
        // boundary must not accept it here.
        let result = Role::from_legacy_str("seller");
        assert!(matches!(result, Err(UnknownRoleError(_))));
    }
}
