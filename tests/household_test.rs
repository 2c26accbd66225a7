// ABOUTME: Integration tests for household profile selection
// ABOUTME: Tests active profile switching, unknown members and member removal
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

mod common;

use common::{member_allergic_to, sample_household};
use safeplate::errors::ErrorCode;
use safeplate::household::{ActiveProfile, Household};
use safeplate::intelligence::check_recipe_safety;
use safeplate::models::{DietaryProfile, Profile, Recipe};

#[test]
fn test_account_holder_is_active_by_default() {
    let household = sample_household();

    assert_eq!(household.active(), &ActiveProfile::User);
    let profile = household.active_profile().unwrap();
    assert!(matches!(profile, Profile::User(_)));
    assert_eq!(profile.display_name(), "Alex");
}

#[test]
fn test_selecting_member_switches_allergies() {
    let mut household = sample_household();

    household.select_member("kid-1").unwrap();

    let profile = household.active_profile().unwrap();
    assert_eq!(profile.id(), "kid-1");
    assert_eq!(profile.allergies()[0].name, "Peanuts");
}

#[test]
fn test_unknown_member_is_not_found_and_keeps_selection() {
    let mut household = sample_household();

    let error = household.select_member("nobody").unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.message.contains("nobody"));
    assert_eq!(household.active(), &ActiveProfile::User);
}

#[test]
fn test_cleared_selection_makes_checks_permissive() {
    let mut household = sample_household();
    let recipe = Recipe::new("Cheese Plate", 2).with_ingredient("200 g cheese");

    assert!(!check_recipe_safety(&recipe, household.active_profile().as_ref()).safe);

    household.clear_selection();

    assert!(household.active_profile().is_none());
    assert!(check_recipe_safety(&recipe, household.active_profile().as_ref()).safe);
}

#[test]
fn test_select_user_after_member() {
    let mut household = sample_household();
    household.select_member("kid-1").unwrap();

    household.select_user();

    assert_eq!(household.active_profile().unwrap().display_name(), "Alex");
}

#[test]
fn test_removing_active_member_falls_back_to_user() {
    let mut household =
        sample_household().with_member(member_allergic_to("kid-2", "Robin", &["Eggs"]));
    household.select_member("kid-2").unwrap();

    let removed = household.remove_member("kid-2").unwrap();

    assert_eq!(removed.name, "Robin");
    assert_eq!(household.active(), &ActiveProfile::User);
    assert!(household.member("kid-2").is_none());
    assert_eq!(
        household.remove_member("kid-2").unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}

#[test]
fn test_household_deserializes_with_family_members_alias() {
    let json = r#"{
        "user": {"id": "u1", "name": "Alex", "allergies": [{"id": "a1", "name": "Milk", "severity": "severe"}]},
        "familyMembers": [{"id": "kid-1", "name": "Sam", "relationship": "child"}]
    }"#;

    let mut household: Household = serde_json::from_str(json).unwrap();

    assert_eq!(household.family.len(), 1);
    assert_eq!(household.active(), &ActiveProfile::User);
    household.select_member("kid-1").unwrap();
    assert!(!household.active_profile().unwrap().has_allergies());
}
