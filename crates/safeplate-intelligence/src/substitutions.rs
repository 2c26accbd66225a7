// ABOUTME: Ingredient substitution planner pairing unsafe recipe lines with replacements
// ABOUTME: One record per substitute per triggered allergy per flagged ingredient line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

use safeplate_core::constants::substitutes_for;
use safeplate_core::models::{DietaryProfile, IngredientSubstitution, Recipe};
use tracing::debug;

use crate::allergen_check::check_safety;

/// Replacement suggestions for every unsafe ingredient line of a recipe
///
/// Empty when no profile is active or no line triggers an allergy. Allergies
/// missing from the substitution table contribute nothing.
#[must_use]
pub fn suggest_substitutions<P>(recipe: &Recipe, profile: Option<&P>) -> Vec<IngredientSubstitution>
where
    P: DietaryProfile + ?Sized,
{
    let Some(profile) = profile else {
        return Vec::new();
    };

    let mut plan = Vec::new();
    for line in &recipe.ingredients {
        let result = check_safety(line, Some(profile));
        for allergy in &result.allergies {
            plan.extend(
                substitutes_for(&allergy.name)
                    .iter()
                    .map(|option| IngredientSubstitution {
                        original: line.clone(),
                        substitute: option.substitute.to_owned(),
                        ratio: option.ratio.to_owned(),
                        notes: option.notes.to_owned(),
                    }),
            );
        }
    }

    debug!(
        recipe = %recipe.name,
        suggestions = plan.len(),
        "Planned ingredient substitutions"
    );
    plan
}
