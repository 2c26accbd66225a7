// ABOUTME: Allergen safety evaluators for ingredients, recipes, suggestions and grocery lists
// ABOUTME: Pure synchronous functions over caller-supplied data and static lookup tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

#![deny(unsafe_code)]

//! # SafePlate Intelligence
//!
//! Every evaluator takes the active profile as `Option<&P>` where
//! `P: DietaryProfile`. No profile means nothing to check against, and the
//! evaluators answer permissively: ingredients and recipes are safe, and no
//! suggestions are produced.

/// Scoring weights with environment overrides
pub mod config;

/// Ingredient text versus allergy names and aliases
pub mod matcher;

/// Structured allergen check with substitution alternatives
pub mod allergen_check;

/// Whole-recipe safety verdicts
pub mod recipe_safety;

/// Ranking of safe recipes
pub mod suggestions;

/// Shopping list generation from recipes and inventory
pub mod grocery;

/// Replacement plans for unsafe recipe lines
pub mod substitutions;

/// Expiry tracking for inventory items
pub mod inventory;

pub use allergen_check::{check_safety, CheckTarget};
pub use config::{ConfigError, ScoringConfig};
pub use grocery::{generate_grocery_list, parse_ingredient_line, ParsedIngredient};
pub use inventory::{days_until_expiry, expired, expiring_within};
pub use matcher::is_safe;
pub use recipe_safety::{check_recipe_safety, matching_allergen_tags};
pub use substitutions::suggest_substitutions;
pub use suggestions::{score_recipes, suggest_recipes, RecipeSuggester};
