// ABOUTME: Core data models for the SafePlate allergen safety engine
// ABOUTME: Allergies, user and family profiles, food items, recipes, and check results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

//! # Data Models
//!
//! All models serialize with `camelCase` field names so documents exported by the
//! mobile application load without translation.

/// Allergy records and severity levels
pub mod allergy;
/// Inventory and grocery list entries
pub mod food_item;
/// User profiles, family members, and the shared dietary capability trait
pub mod profile;
/// Recipes and recipe metadata
pub mod recipe;
/// Results produced by the safety evaluators
pub mod safety;

pub use allergy::{Allergy, Severity};
pub use food_item::FoodItem;
pub use profile::{DietaryProfile, FamilyMember, Profile, UserProfile};
pub use recipe::{Difficulty, MealType, Recipe};
pub use safety::{AllergenCheckResult, IngredientSubstitution, RecipeSafety, ScoredRecipe};
