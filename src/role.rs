// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A role identifier outside the closed platform enumeration was supplied.
///
/// Unknown identifiers are rejected at the ingestion boundary instead of being
/// silently treated as "no permission".
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown role identifier: {0}")]
pub struct UnknownRoleError(pub String);

/// Gender as recorded on a user profile.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    Female,
    Male,
}

/// The closed set of platform roles.
///
/// Roles are fixed at build time and never created or destroyed at runtime. A
/// user may hold several roles at once, see [`RoleSet`](crate::RoleSet).
///
/// Every role carries a hierarchy level. Higher levels hold strictly more
/// authority when roles are compared, see [`Role::level`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    GeneralUser,
    Buyer,
    Seller,
    LandOwner,
    Farmer,
    Investor,
    ExportParticipant,
    CooperativeMember,
    WaveParticipant,
    FieldOfficer,
    Admin,
    SuperAdmin,
}

impl Role {
    /// The full role enumeration.
    pub const ALL: [Role; 12] = [
        Role::GeneralUser,
        Role::Buyer,
        Role::Seller,
        Role::LandOwner,
        Role::Farmer,
        Role::Investor,
        Role::ExportParticipant,
        Role::CooperativeMember,
        Role::WaveParticipant,
        Role::FieldOfficer,
        Role::Admin,
        Role::SuperAdmin,
    ];

    /// Hierarchy level of this role.
    ///
    /// The level table is configuration, not derived data. Every role has
    /// exactly one level in the range 1 to 6.
    pub const fn level(&self) -> u8 {
        match self {
            Role::GeneralUser => 1,
            Role::Buyer | Role::Seller | Role::LandOwner | Role::Farmer | Role::Investor => 2,
            Role::ExportParticipant | Role::CooperativeMember | Role::WaveParticipant => 3,
            Role::FieldOfficer => 4,
            Role::Admin => 5,
            Role::SuperAdmin => 6,
        }
    }

    /// Human-readable display name.
    pub const fn label(&self) -> &'static str {
        match self {
            Role::GeneralUser => "General User",
            Role::Buyer => "Buyer",
            Role::Seller => "Seller",
            Role::LandOwner => "Land Owner",
            Role::Farmer => "Farmer",
            Role::Investor => "Investor",
            Role::ExportParticipant => "Export Participant",
            Role::CooperativeMember => "Cooperative Member",
            Role::WaveParticipant => "WAVE Participant",
            Role::FieldOfficer => "Field Officer",
            Role::Admin => "Admin",
            Role::SuperAdmin => "Super Admin",
        }
    }

    /// Identifier under which this role is stored and exchanged.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::GeneralUser => "general_user",
            Role::Buyer => "buyer",
            Role::Seller => "seller",
            Role::LandOwner => "land_owner",
            Role::Farmer => "farmer",
            Role::Investor => "investor",
            Role::ExportParticipant => "export_participant",
            Role::CooperativeMember => "cooperative_member",
            Role::WaveParticipant => "wave_participant",
            Role::FieldOfficer => "field_officer",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    /// Gender a user must have recorded in order to hold this role.
    ///
    /// Absence means the role is unrestricted. Only the WAVE training
    /// programme is restricted (to women).
    pub const fn gender_requirement(&self) -> Option<Gender> {
        match self {
            Role::WaveParticipant => Some(Gender::Female),
            _ => None,
        }
    }

    /// Return true if a user with the given recorded gender may hold this
    /// role.
    ///
    /// Unrestricted roles admit any gender, including none on record. A
    /// restricted role with no gender on record fails closed.
    pub fn admits_gender(&self, gender: Option<Gender>) -> bool {
        match self.gender_requirement() {
            None => true,
            Some(required) => gender == Some(required),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let role = match value {
            "general_user" => Role::GeneralUser,
            "buyer" => Role::Buyer,
            "seller" => Role::Seller,
            "land_owner" => Role::LandOwner,
            "farmer" => Role::Farmer,
            "investor" => Role::Investor,
            "export_participant" => Role::ExportParticipant,
            "cooperative_member" => Role::CooperativeMember,
            "wave_participant" => Role::WaveParticipant,
            "field_officer" => Role::FieldOfficer,
            "admin" => Role::Admin,
            "super_admin" => Role::SuperAdmin,
            unknown => return Err(UnknownRoleError(unknown.to_string())),
        };

        Ok(role)
    }
}

impl TryFrom<&str> for Role {
    type Error = UnknownRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
