// ABOUTME: Recipe suggestion scorer ranking safe recipes by inventory coverage and preferences
// ABOUTME: Unsafe recipes are filtered out before scoring; no profile means no suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

//! # Recipe Suggestion Scorer
//!
//! Score components:
//! - ingredient coverage by the current inventory, scaled, plus a bonus when
//!   most of the recipe is already on hand
//! - a dietary-preference keyword found in the name, description or tags
//! - a favorite cuisine match
//!
//! Weights come from [`ScoringConfig`].

use safeplate_core::models::{DietaryProfile, FoodItem, Recipe, ScoredRecipe};
use tracing::debug;

use crate::config::ScoringConfig;
use crate::matcher::normalize;
use crate::recipe_safety::check_recipe_safety;

/// Scores and ranks recipes for a profile
#[derive(Debug, Clone, Copy)]
pub struct RecipeSuggester<'c> {
    config: &'c ScoringConfig,
}

impl Default for RecipeSuggester<'static> {
    fn default() -> Self {
        Self::new(ScoringConfig::global())
    }
}

impl<'c> RecipeSuggester<'c> {
    /// Create a suggester with explicit weights
    #[must_use]
    pub const fn new(config: &'c ScoringConfig) -> Self {
        Self { config }
    }

    /// Fraction of ingredient lines mentioning any inventory item name
    #[must_use]
    pub fn ingredient_coverage(recipe: &Recipe, inventory_names: &[String]) -> f64 {
        if recipe.ingredients.is_empty() {
            return 0.0;
        }
        let available = recipe
            .ingredients
            .iter()
            .map(|line| normalize(line))
            .filter(|line| inventory_names.iter().any(|name| line.contains(name.as_str())))
            .count();
        available as f64 / recipe.ingredients.len() as f64
    }

    fn matches_preference<P>(recipe: &Recipe, profile: &P) -> bool
    where
        P: DietaryProfile + ?Sized,
    {
        let name = normalize(&recipe.name);
        let description = recipe
            .description
            .as_deref()
            .map(normalize)
            .unwrap_or_default();
        let tags: Vec<String> = recipe.tags.iter().map(|tag| normalize(tag)).collect();

        profile
            .dietary_preferences()
            .iter()
            .map(|preference| normalize(preference))
            .filter(|preference| !preference.is_empty())
            .any(|preference| {
                name.contains(&preference)
                    || description.contains(&preference)
                    || tags.iter().any(|tag| tag.contains(&preference))
            })
    }

    fn matches_cuisine<P>(recipe: &Recipe, profile: &P) -> bool
    where
        P: DietaryProfile + ?Sized,
    {
        let (Some(favorites), Some(cuisine)) =
            (profile.favorite_cuisines(), recipe.cuisine_type.as_deref())
        else {
            return false;
        };
        let cuisine = normalize(cuisine);
        favorites
            .iter()
            .any(|favorite| normalize(favorite) == cuisine)
    }

    /// Heuristic score of one recipe
    #[must_use]
    pub fn score<P>(&self, recipe: &Recipe, inventory_names: &[String], profile: &P) -> f64
    where
        P: DietaryProfile + ?Sized,
    {
        let coverage = Self::ingredient_coverage(recipe, inventory_names);
        let mut score = coverage * self.config.coverage_scale;
        if coverage >= self.config.coverage_bonus_threshold {
            score += self.config.coverage_bonus;
        }
        if Self::matches_preference(recipe, profile) {
            score += self.config.preference_bonus;
        }
        if Self::matches_cuisine(recipe, profile) {
            score += self.config.cuisine_bonus;
        }
        score
    }

    /// Safe recipes with their scores, highest first
    ///
    /// Ties keep their input order.
    #[must_use]
    pub fn score_recipes<'r, P>(
        &self,
        inventory: &[FoodItem],
        recipes: &'r [Recipe],
        profile: Option<&P>,
    ) -> Vec<ScoredRecipe<'r>>
    where
        P: DietaryProfile + ?Sized,
    {
        let Some(profile) = profile else {
            return Vec::new();
        };

        let inventory_names: Vec<String> = inventory.iter().map(FoodItem::normalized_name).collect();

        let mut scored: Vec<ScoredRecipe<'r>> = recipes
            .iter()
            .filter(|recipe| check_recipe_safety(recipe, Some(profile)).safe)
            .map(|recipe| ScoredRecipe {
                recipe,
                score: self.score(recipe, &inventory_names, profile),
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            profile = %profile.display_name(),
            candidates = recipes.len(),
            safe = scored.len(),
            "Scored recipe suggestions"
        );
        scored
    }

    /// Safe recipes ordered by descending score
    #[must_use]
    pub fn suggest<'r, P>(
        &self,
        inventory: &[FoodItem],
        recipes: &'r [Recipe],
        profile: Option<&P>,
    ) -> Vec<&'r Recipe>
    where
        P: DietaryProfile + ?Sized,
    {
        self.score_recipes(inventory, recipes, profile)
            .into_iter()
            .map(|scored| scored.recipe)
            .collect()
    }
}

/// Suggest safe recipes ranked with the global scoring configuration
///
/// Returns an empty list when no profile is active.
#[must_use]
pub fn suggest_recipes<'r, P>(
    inventory: &[FoodItem],
    recipes: &'r [Recipe],
    profile: Option<&P>,
) -> Vec<&'r Recipe>
where
    P: DietaryProfile + ?Sized,
{
    RecipeSuggester::default().suggest(inventory, recipes, profile)
}

/// Score safe recipes with the global scoring configuration
#[must_use]
pub fn score_recipes<'r, P>(
    inventory: &[FoodItem],
    recipes: &'r [Recipe],
    profile: Option<&P>,
) -> Vec<ScoredRecipe<'r>>
where
    P: DietaryProfile + ?Sized,
{
    RecipeSuggester::default().score_recipes(inventory, recipes, profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_of_empty_recipe_is_zero() {
        let recipe = Recipe::new("Air", 1);
        let names = vec!["flour".to_owned()];
        assert!(RecipeSuggester::ingredient_coverage(&recipe, &names).abs() < f64::EPSILON);
    }

    #[test]
    fn test_coverage_counts_lines_not_items() {
        let recipe = Recipe::new("Pancakes", 2).with_ingredients([
            "2 cups Flour",
            "1 cup milk",
            "2 eggs",
            "1 tbsp sugar",
        ]);
        let names = vec!["flour".to_owned(), "sugar".to_owned(), "salt".to_owned()];
        let coverage = RecipeSuggester::ingredient_coverage(&recipe, &names);
        assert!((coverage - 0.5).abs() < f64::EPSILON);
    }
}
