// ABOUTME: Shared input helpers for safeplate-cli
// ABOUTME: Loads the household with its active member and resolves the recipe source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

pub mod display;

use std::path::Path;

use safeplate::catalog::{load_household_file, load_recipes_file, seed_recipes};
use safeplate::config::AppConfig;
use safeplate::errors::AppResult;
use safeplate::household::Household;
use safeplate::models::Recipe;
use tracing::debug;

use crate::ProfileArgs;

/// Load the household file and select the requested member, if any
pub fn load_household(args: &ProfileArgs) -> AppResult<Household> {
    let mut household = load_household_file(&args.profile)?;
    if let Some(member) = &args.member {
        household.select_member(member)?;
    }
    Ok(household)
}

/// Recipes from `--recipes`, then `SAFEPLATE_RECIPES_PATH`, then the seed catalog
pub fn resolve_recipes(config: &AppConfig, recipes: Option<&Path>) -> AppResult<Vec<Recipe>> {
    match recipes.or(config.recipes_path.as_deref()) {
        Some(path) => load_recipes_file(path),
        None => {
            debug!("Using the built-in recipe catalog");
            Ok(seed_recipes().to_vec())
        }
    }
}
