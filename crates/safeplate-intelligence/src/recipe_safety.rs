// ABOUTME: Recipe safety evaluator combining declared allergen tags with ingredient scanning
// ABOUTME: Tag overlap short-circuits and reports tag names instead of ingredient lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

//! # Recipe Safety Evaluator
//!
//! When the recipe's declared allergen tags overlap the profile's allergies the
//! verdict is decided by the tags alone and ingredient lines are never scanned.
//! A recipe reported this way lists tag names, even if scanning its ingredients
//! would have flagged different lines or none at all.

use safeplate_core::models::{DietaryProfile, Recipe, RecipeSafety};
use tracing::debug;

use crate::matcher::{is_safe, normalize};

/// Uppercase the first character, leave the rest untouched
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Declared allergen tags that name one of the profile's allergies
///
/// Returned lowercased with the first letter capitalized, in recipe tag order.
#[must_use]
pub fn matching_allergen_tags<P>(recipe: &Recipe, profile: &P) -> Vec<String>
where
    P: DietaryProfile + ?Sized,
{
    let allergy_names: Vec<String> = profile
        .allergies()
        .iter()
        .map(|allergy| allergy.normalized_name())
        .collect();

    recipe
        .allergens
        .iter()
        .map(|tag| normalize(tag))
        .filter(|tag| allergy_names.contains(tag))
        .map(|tag| capitalize_first(&tag))
        .collect()
}

/// Check a recipe against a profile
#[must_use]
pub fn check_recipe_safety<P>(recipe: &Recipe, profile: Option<&P>) -> RecipeSafety
where
    P: DietaryProfile + ?Sized,
{
    let Some(profile) = profile else {
        return RecipeSafety::all_clear();
    };
    if !profile.has_allergies() {
        return RecipeSafety::all_clear();
    }

    let tag_matches = matching_allergen_tags(recipe, profile);
    if !tag_matches.is_empty() {
        debug!(
            recipe = %recipe.name,
            tags = ?tag_matches,
            "Recipe rejected by declared allergen tags"
        );
        return RecipeSafety::from_problems(tag_matches);
    }

    let problems: Vec<String> = recipe
        .ingredients
        .iter()
        .filter(|line| !is_safe(line, Some(profile)))
        .cloned()
        .collect();

    debug!(
        recipe = %recipe.name,
        problems = problems.len(),
        "Recipe ingredient scan completed"
    );
    RecipeSafety::from_problems(problems)
}
