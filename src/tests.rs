// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scenario tests across the crate surface, written from the perspective of
//! the callers described in the crate docs.

use crate::{Feature, Gender, LegacyRole, Role, RoleSet, RouteTable, UnknownRoleError};

#[test]
fn route_guard_scenario() {
    // The middleware holds the canonical table and the session's role set.
    let table = RouteTable::platform();

    let mut visited = RoleSet::new();

    // An anonymous visitor (empty role set) browses public pages freely.
    assert!(table.can_access(&visited, "/"));
    assert!(table.can_access(&visited, "/marketplace"));
    assert!(table.can_access(&visited, "/academy/courses/intro-to-irrigation"));

    // They are turned away from every restricted section.
    assert!(!table.can_access(&visited, "/admin"));
    assert!(!table.can_access(&visited, "/cooperative/savings"));

    // After signing in as a farmer who also joined the cooperative.
    visited = RoleSet::from([Role::Farmer, Role::CooperativeMember]);
    assert!(table.can_access(&visited, "/marketplace/sell"));
    assert!(table.can_access(&visited, "/cooperative/loans"));
    assert!(!table.can_access(&visited, "/admin/withdrawals"));
}

#[test]
fn withdrawal_approval_scenario() {
    // A server action guards the mutation with the feature catalogue.
    let treasurer = RoleSet::from([Role::CooperativeMember]);
    let admin = RoleSet::from([Role::Admin]);

    // Members request, admins approve.
    assert!(Feature::CanRequestLoan.permits(&treasurer));
    assert!(!Feature::CanApproveWithdrawals.permits(&treasurer));
    assert!(Feature::CanApproveWithdrawals.permits(&admin));

    // The handler resolves the feature from its wire name first. An unknown
    // name is an error the caller must turn into a denial.
    let feature: Feature = "canApproveWithdrawals".parse().unwrap();
    assert!(feature.permits(&admin));
    assert!("canApproveEverything".parse::<Feature>().is_err());
}

#[test]
fn user_management_scenario() {
    // The admin UI edits another user's roles. Three checks compose: the
    // actor must be an admin, must outrank the target and may only hand out
    // roles up to their own level.
    let actor = RoleSet::from([Role::Admin]);
    let target = RoleSet::from([Role::Seller, Role::CooperativeMember]);

    assert!(actor.is_admin());
    assert!(actor.can_act_on(&target));

    let assignable = actor.assignable_roles();
    assert!(assignable.has(Role::FieldOfficer));
    assert!(assignable.has(Role::Admin));
    assert!(!assignable.has(Role::SuperAdmin));

    // A fellow admin is out of reach, only the super admin may intervene.
    let peer = RoleSet::from([Role::Admin]);
    assert!(!actor.can_act_on(&peer));
    assert!(RoleSet::from([Role::SuperAdmin]).can_act_on(&peer));

    // assignable_roles alone does not make a non-admin an editor: a buyer
    // nominally "assigns" level-2 roles, the UI must also require is_admin.
    let buyer = RoleSet::from([Role::Buyer]);
    assert!(!buyer.assignable_roles().is_empty());
    assert!(!buyer.is_admin());
}

#[test]
fn wave_enrollment_scenario() {
    // Enrollment into the WAVE training programme checks gender eligibility
    // before the role is ever granted.
    assert!(Role::WaveParticipant.admits_gender(Some(Gender::Female)));
    assert!(!Role::WaveParticipant.admits_gender(Some(Gender::Male)));
    assert!(!Role::WaveParticipant.admits_gender(None));

    // Once enrolled, the participant reaches the programme pages and
    // training material.
    let participant = RoleSet::from([Role::WaveParticipant]);
    let table = RouteTable::platform();
    assert!(table.can_access(&participant, "/wave"));
    assert!(Feature::CanAccessWaveTraining.permits(&participant));

    // Field officers supervise the programme without being participants.
    let officer = RoleSet::from([Role::FieldOfficer]);
    assert!(table.can_access(&officer, "/wave/sessions/3"));
}

#[test]
fn legacy_migration_scenario() {
    // A records migration maps stored identifiers onto the current
    // enumeration, trying the current vocabulary first.
    let stored = ["vendor", "cooperative_member", "member", "exporter"];

    let migrated: Result<RoleSet, UnknownRoleError> = stored
        .iter()
        .map(|value| {
            value
                .parse::<Role>()
                .or_else(|_| Role::from_legacy_str(value))
        })
        .collect::<Result<_, _>>();

    let migrated = migrated.unwrap();
    assert!(migrated.has(Role::Seller));
    assert!(migrated.has(Role::CooperativeMember));
    assert!(migrated.has(Role::GeneralUser));
    assert!(migrated.has(Role::ExportParticipant));

    // Identifiers unknown to both vocabularies fail the migration.
    let result = "shopkeeper"
        .parse::<Role>()
        .or_else(|_| Role::from_legacy_str("shopkeeper"));
    assert!(matches!(result, Err(UnknownRoleError(_))));

    // The legacy table itself is total.
    assert_eq!(LegacyRole::Member.resolve(), Role::GeneralUser);
    assert_eq!(LegacyRole::SuperAdmin.resolve(), Role::SuperAdmin);
}

#[cfg(feature = "serde")]
mod serde {
    use super::*;

    #[test]
    fn identifiers_on_the_wire() {
        // Role and feature identifiers serialize to the platform's stored
        // representation.
        assert_eq!(
            serde_json::to_string(&Role::WaveParticipant).unwrap(),
            "\"wave_participant\""
        );
        assert_eq!(
            serde_json::to_string(&Feature::CanSellProducts).unwrap(),
            "\"canSellProducts\""
        );
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");

        let role: Role = serde_json::from_str("\"land_owner\"").unwrap();
        assert_eq!(role, Role::LandOwner);

        // Unknown identifiers are a deserialization error, not a default.
        assert!(serde_json::from_str::<Role>("\"moderator\"").is_err());
    }

    #[test]
    fn role_set_round_trip() {
        let roles = RoleSet::from([Role::Buyer, Role::CooperativeMember]);

        let json = serde_json::to_string(&roles).unwrap();
        let parsed: RoleSet = serde_json::from_str(&json).unwrap();

        assert_eq!(roles, parsed);
    }
}
