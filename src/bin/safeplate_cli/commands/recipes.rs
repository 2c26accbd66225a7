// ABOUTME: Recipe commands for safeplate-cli
// ABOUTME: Per-recipe safety verdicts with substitutions, and ranked suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

use std::path::Path;

use safeplate::catalog::load_inventory_file;
use safeplate::config::{AppConfig, ScoringConfig};
use safeplate::errors::AppResult;
use safeplate::intelligence::{check_recipe_safety, suggest_substitutions, RecipeSuggester};
use safeplate::models::{IngredientSubstitution, Recipe, RecipeSafety};
use serde::Serialize;
use tracing::info;

use crate::helpers::display::{display_recipe_safety, display_suggestions, print_json};
use crate::helpers::{load_household, resolve_recipes};
use crate::{OutputFormat, ProfileArgs};

type Result<T> = AppResult<T>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipeReport<'a> {
    #[serde(skip)]
    recipe: &'a Recipe,
    id: &'a str,
    name: &'a str,
    #[serde(flatten)]
    safety: RecipeSafety,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    substitutions: Vec<IngredientSubstitution>,
}

/// Safety verdict for every recipe
pub fn run(
    config: &AppConfig,
    args: &ProfileArgs,
    recipes: Option<&Path>,
    safe_only: bool,
    with_substitutions: bool,
    format: OutputFormat,
) -> Result<()> {
    let household = load_household(args)?;
    let profile = household.active_profile();
    let recipes = resolve_recipes(config, recipes)?;

    let reports: Vec<RecipeReport<'_>> = recipes
        .iter()
        .map(|recipe| {
            let safety = check_recipe_safety(recipe, profile.as_ref());
            let substitutions = if with_substitutions && !safety.safe {
                suggest_substitutions(recipe, profile.as_ref())
            } else {
                Vec::new()
            };
            RecipeReport {
                recipe,
                id: &recipe.id,
                name: &recipe.name,
                safety,
                substitutions,
            }
        })
        .filter(|report| !safe_only || report.safety.safe)
        .collect();

    let safe = reports.iter().filter(|report| report.safety.safe).count();
    info!(total = recipes.len(), safe, "Evaluated recipes");

    match format {
        OutputFormat::Json => print_json(&reports),
        OutputFormat::Text => {
            for report in &reports {
                display_recipe_safety(report.recipe, &report.safety, &report.substitutions);
            }
            Ok(())
        }
    }
}

/// Rank safe recipes for the active profile
pub fn suggest(
    config: &AppConfig,
    args: &ProfileArgs,
    inventory: &Path,
    recipes: Option<&Path>,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let household = load_household(args)?;
    let profile = household.active_profile();
    let inventory = load_inventory_file(inventory)?;
    let recipes = resolve_recipes(config, recipes)?;

    let suggester = RecipeSuggester::new(ScoringConfig::global());
    let mut scored = suggester.score_recipes(&inventory, &recipes, profile.as_ref());
    if let Some(limit) = limit {
        scored.truncate(limit);
    }
    info!(
        candidates = recipes.len(),
        suggested = scored.len(),
        "Ranked recipe suggestions"
    );

    match format {
        OutputFormat::Json => print_json(&scored),
        OutputFormat::Text => {
            display_suggestions(&scored);
            Ok(())
        }
    }
}
