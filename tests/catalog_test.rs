// ABOUTME: Integration tests for the seed recipe catalog and JSON document loaders
// ABOUTME: Uses temporary files for recipe, inventory and household documents
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

mod common;

use std::io::Write;
use std::ptr;

use common::{date, init_test_logging};
use safeplate::catalog::{
    load_household_file, load_inventory_file, load_recipes_file, seed_recipe, seed_recipes,
};
use safeplate::errors::ErrorCode;
use safeplate::models::{MealType, Recipe};
use tempfile::NamedTempFile;

fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ============================================================================
// Seed Catalog
// ============================================================================

#[test]
fn test_seed_catalog_is_built_once() {
    let first = seed_recipes();
    let second = seed_recipes();

    assert!(!first.is_empty());
    assert!(ptr::eq(first, second));
}

#[test]
fn test_seed_recipes_have_unique_ids_and_content() {
    let recipes = seed_recipes();

    for recipe in recipes {
        assert!(!recipe.ingredients.is_empty(), "{}", recipe.name);
        assert!(!recipe.instructions.is_empty(), "{}", recipe.name);
        assert!(recipe.source.is_some(), "{}", recipe.name);
        let same_id = recipes.iter().filter(|other| other.id == recipe.id).count();
        assert_eq!(same_id, 1, "{}", recipe.id);
    }
}

#[test]
fn test_seed_recipe_lookup_by_id() {
    let pancakes = seed_recipe("seed-fluffy-pancakes").unwrap();

    assert_eq!(pancakes.meal_type, Some(MealType::Breakfast));
    assert!(pancakes.allergens.iter().any(|tag| tag == "Milk"));
    assert!(seed_recipe("missing").is_none());
}

// ============================================================================
// Loaders
// ============================================================================

#[test]
fn test_load_recipes_file_with_app_field_names() {
    init_test_logging();
    let file = json_file(
        r#"[{
            "id": "r1",
            "name": "Hummus",
            "ingredients": ["1 can chickpeas", "2 tbsp tahini"],
            "allergens": ["Sesame"],
            "preparationTime": 10,
            "cuisineType": "Middle Eastern",
            "mealType": "snack",
            "isFavorite": true
        }]"#,
    );

    let recipes: Vec<Recipe> = load_recipes_file(file.path()).unwrap();

    assert_eq!(recipes.len(), 1);
    let hummus = &recipes[0];
    assert_eq!(hummus.preparation_time, 10);
    assert_eq!(hummus.servings, 1);
    assert!(hummus.is_favorite);
    assert_eq!(hummus.cuisine_type.as_deref(), Some("Middle Eastern"));
    assert_eq!(hummus.meal_type, Some(MealType::Snack));
}

#[test]
fn test_load_inventory_file_parses_dates_and_defaults() {
    let file = json_file(
        r#"[
            {"id": "i1", "name": "Milk", "expiryDate": "2025-03-12T00:00:00.000Z", "quantity": 1, "unit": "l"},
            {"id": "i2", "name": "Rice", "expiryDate": "", "quantity": 2, "unit": "kg", "category": "grains"},
            {"id": "i3", "name": "Crackers", "allergens": ["Wheat", "Sesame"]}
        ]"#,
    );

    let inventory = load_inventory_file(file.path()).unwrap();

    assert_eq!(inventory[0].expiry_date, Some(date(2025, 3, 12)));
    assert_eq!(inventory[0].category, "other");
    assert_eq!(inventory[1].expiry_date, None);
    assert_eq!(inventory[1].category, "grains");
    assert_eq!(inventory[2].declared_allergens().len(), 2);
}

#[test]
fn test_load_household_file() {
    let file = json_file(
        r#"{
            "user": {"id": "u1", "name": "Alex", "favoriteCuisines": ["Thai"]},
            "family": [{"id": "kid-1", "name": "Sam", "allergies": [{"id": "a1", "name": "Peanuts"}]}]
        }"#,
    );

    let household = load_household_file(file.path()).unwrap();

    assert_eq!(household.user.name, "Alex");
    assert_eq!(household.member("kid-1").unwrap().allergies.len(), 1);
    assert!(household.active_profile().is_some());
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();

    let error = load_recipes_file(dir.path().join("nope.json")).unwrap_err();

    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(error.message.contains("nope.json"));
}

#[test]
fn test_recipe_with_blank_name_is_missing_field() {
    let file = json_file(r#"[{"id": "r1", "name": "Soup"}, {"id": "r2", "name": "  "}]"#);

    let error = load_recipes_file(file.path()).unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert!(error.message.contains("recipes[1].name"));
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let file = json_file(r#"{"not": "an array"}"#);

    let error = load_inventory_file(file.path()).unwrap_err();

    assert_eq!(error.code, ErrorCode::SerializationError);
}
