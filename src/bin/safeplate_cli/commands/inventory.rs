// ABOUTME: Inventory commands for safeplate-cli
// ABOUTME: Grocery list generation and expiry reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

use std::path::Path;

use chrono::{Local, NaiveDate};
use safeplate::catalog::load_inventory_file;
use safeplate::config::AppConfig;
use safeplate::errors::{AppError, AppResult};
use safeplate::intelligence::{expired, expiring_within, generate_grocery_list};
use safeplate::models::{FoodItem, Recipe};
use serde::Serialize;
use tracing::{info, warn};

use crate::helpers::display::{display_expiry_report, display_grocery_list, print_json};
use crate::helpers::resolve_recipes;
use crate::OutputFormat;

type Result<T> = AppResult<T>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExpiryReport<'a> {
    today: NaiveDate,
    days: u64,
    expired: Vec<&'a FoodItem>,
    expiring: Vec<&'a FoodItem>,
}

fn select_recipes(recipes: Vec<Recipe>, ids: &[String]) -> Result<Vec<Recipe>> {
    if ids.is_empty() {
        return Ok(recipes);
    }
    if let Some(missing) = ids
        .iter()
        .find(|id| !recipes.iter().any(|recipe| &recipe.id == *id))
    {
        return Err(AppError::not_found(format!("Recipe {missing}")));
    }
    Ok(recipes
        .into_iter()
        .filter(|recipe| ids.contains(&recipe.id))
        .collect())
}

/// Shopping list for the selected recipes minus inventory
pub fn grocery(
    config: &AppConfig,
    inventory: &Path,
    recipes: Option<&Path>,
    recipe_ids: &[String],
    format: OutputFormat,
) -> Result<()> {
    let inventory = load_inventory_file(inventory)?;
    let recipes = select_recipes(resolve_recipes(config, recipes)?, recipe_ids)?;

    let list = generate_grocery_list(&recipes, &inventory);
    info!(
        recipes = recipes.len(),
        items = list.len(),
        "Generated grocery list"
    );

    match format {
        OutputFormat::Json => print_json(&list),
        OutputFormat::Text => {
            display_grocery_list(&list);
            Ok(())
        }
    }
}

/// Expired and soon-to-expire inventory items
pub fn expiring(
    config: &AppConfig,
    inventory: &Path,
    days: Option<u64>,
    today: Option<NaiveDate>,
    format: OutputFormat,
) -> Result<()> {
    let inventory = load_inventory_file(inventory)?;
    let days = days.unwrap_or(config.expiry_warning_days);
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let report = ExpiryReport {
        today,
        days,
        expired: expired(&inventory, today),
        expiring: expiring_within(&inventory, today, days),
    };
    if !report.expired.is_empty() {
        warn!(count = report.expired.len(), "Inventory contains expired items");
    }

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            display_expiry_report(today, days, &report.expired, &report.expiring);
            Ok(())
        }
    }
}
