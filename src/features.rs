// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named feature permissions.
//!
//! Server-side actions are guarded by a closed catalogue of feature names,
//! each mapped to the roles permitted to perform it. Unlike route guarding
//! there is no public fallback here: every feature names its roles
//! explicitly and a name outside the catalogue is an error, never an
//! implicit allow.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::role::Role;
use crate::role_set::RoleSet;

/// A feature name outside the closed catalogue was queried.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown feature name: {0}")]
pub struct UnknownFeatureError(pub String);

/// The closed catalogue of guarded platform features.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Feature {
    CanSellProducts,
    CanListLand,
    CanInvest,
    CanExportProduce,
    CanContributeSavings,
    CanRequestLoan,
    CanApproveLoans,
    CanApproveWithdrawals,
    CanReleaseEscrow,
    CanResolveDisputes,
    CanManageCourses,
    CanAccessWaveTraining,
    CanVerifyFarmers,
    CanViewReports,
    CanManageUsers,
    CanAssignRoles,
}

impl Feature {
    /// The full feature catalogue.
    pub const ALL: [Feature; 16] = [
        Feature::CanSellProducts,
        Feature::CanListLand,
        Feature::CanInvest,
        Feature::CanExportProduce,
        Feature::CanContributeSavings,
        Feature::CanRequestLoan,
        Feature::CanApproveLoans,
        Feature::CanApproveWithdrawals,
        Feature::CanReleaseEscrow,
        Feature::CanResolveDisputes,
        Feature::CanManageCourses,
        Feature::CanAccessWaveTraining,
        Feature::CanVerifyFarmers,
        Feature::CanViewReports,
        Feature::CanManageUsers,
        Feature::CanAssignRoles,
    ];

    /// The roles permitted to perform this feature.
    ///
    /// Total over the catalogue and never empty, the matrix is configuration
    /// with no catch-all entries.
    pub const fn roles(&self) -> &'static [Role] {
        match self {
            Feature::CanSellProducts => {
                &[Role::Seller, Role::Farmer, Role::Admin, Role::SuperAdmin]
            }
            Feature::CanListLand => &[Role::LandOwner, Role::Admin, Role::SuperAdmin],
            Feature::CanInvest => &[Role::Investor],
            Feature::CanExportProduce => {
                &[Role::ExportParticipant, Role::Admin, Role::SuperAdmin]
            }
            Feature::CanContributeSavings => &[Role::CooperativeMember],
            Feature::CanRequestLoan => &[Role::CooperativeMember],
            Feature::CanApproveLoans => &[Role::Admin, Role::SuperAdmin],
            Feature::CanApproveWithdrawals => &[Role::Admin, Role::SuperAdmin],
            Feature::CanReleaseEscrow => &[Role::Admin, Role::SuperAdmin],
            Feature::CanResolveDisputes => &[Role::Admin, Role::SuperAdmin],
            Feature::CanManageCourses => &[Role::Admin, Role::SuperAdmin],
            Feature::CanAccessWaveTraining => &[
                Role::WaveParticipant,
                Role::FieldOfficer,
                Role::Admin,
                Role::SuperAdmin,
            ],
            Feature::CanVerifyFarmers => &[Role::FieldOfficer, Role::Admin, Role::SuperAdmin],
            Feature::CanViewReports => &[Role::FieldOfficer, Role::Admin, Role::SuperAdmin],
            Feature::CanManageUsers => &[Role::Admin, Role::SuperAdmin],
            Feature::CanAssignRoles => &[Role::SuperAdmin],
        }
    }

    /// Return true if a user holding the given roles may perform this
    /// feature.
    ///
    /// At least one of the permitted roles suffices.
    pub fn permits(&self, roles: &RoleSet) -> bool {
        let permitted = roles.has_any(self.roles());
        debug!(feature = %self, permitted, "feature decision");
        permitted
    }

    /// Name under which this feature is stored and exchanged.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Feature::CanSellProducts => "canSellProducts",
            Feature::CanListLand => "canListLand",
            Feature::CanInvest => "canInvest",
            Feature::CanExportProduce => "canExportProduce",
            Feature::CanContributeSavings => "canContributeSavings",
            Feature::CanRequestLoan => "canRequestLoan",
            Feature::CanApproveLoans => "canApproveLoans",
            Feature::CanApproveWithdrawals => "canApproveWithdrawals",
            Feature::CanReleaseEscrow => "canReleaseEscrow",
            Feature::CanResolveDisputes => "canResolveDisputes",
            Feature::CanManageCourses => "canManageCourses",
            Feature::CanAccessWaveTraining => "canAccessWaveTraining",
            Feature::CanVerifyFarmers => "canVerifyFarmers",
            Feature::CanViewReports => "canViewReports",
            Feature::CanManageUsers => "canManageUsers",
            Feature::CanAssignRoles => "canAssignRoles",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Feature {
    type Err = UnknownFeatureError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .iter()
            .find(|feature| feature.as_str() == value)
            .copied()
            .ok_or_else(|| UnknownFeatureError(value.to_string()))
    }
}

impl TryFrom<&str> for Feature {
    type Error = UnknownFeatureError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_feature_names_at_least_one_role() {
        // Configuration invariant: no catch-all, no empty entries.
        for feature in Feature::ALL {
            assert!(!feature.roles().is_empty(), "{feature} has no roles");
        }
    }

    #[test]
    fn at_least_one_role_suffices() {
        let farmer = RoleSet::from([Role::Farmer]);
        let buyer = RoleSet::from([Role::Buyer]);

        assert!(Feature::CanSellProducts.permits(&farmer));
        assert!(!Feature::CanSellProducts.permits(&buyer));

        // Admins approve withdrawals, nobody below them does.
        assert!(Feature::CanApproveWithdrawals.permits(&RoleSet::from([Role::Admin])));
        assert!(!Feature::CanApproveWithdrawals.permits(&RoleSet::from([Role::FieldOfficer])));

        // Role assignment stays with the super admin.
        assert!(!Feature::CanAssignRoles.permits(&RoleSet::from([Role::Admin])));
        assert!(Feature::CanAssignRoles.permits(&RoleSet::from([Role::SuperAdmin])));
    }

    #[test]
    fn empty_role_set_is_never_permitted() {
        for feature in Feature::ALL {
            assert!(!feature.permits(&RoleSet::new()));
        }
    }

    #[test]
    fn name_round_trip() {
        for feature in Feature::ALL {
            assert_eq!(feature.as_str().parse::<Feature>(), Ok(feature));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let result = "canDeleteEverything".parse::<Feature>();
        assert!(matches!(result, Err(UnknownFeatureError(_))));

        // Identifier style matters, the catalogue is exact.
        assert!("can_sell_products".parse::<Feature>().is_err());
    }
}
