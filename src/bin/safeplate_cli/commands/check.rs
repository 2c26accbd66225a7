// ABOUTME: Ingredient check command for safeplate-cli
// ABOUTME: Checks a bare ingredient or a packaged item with declared allergens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

use safeplate::constants::grocery::DEFAULT_UNIT;
use safeplate::errors::AppResult;
use safeplate::intelligence::check_safety;
use safeplate::models::{DietaryProfile, FoodItem};
use tracing::info;

use crate::helpers::display::{display_check_result, print_json};
use crate::helpers::load_household;
use crate::{OutputFormat, ProfileArgs};

type Result<T> = AppResult<T>;

/// Check one ingredient against the active profile
pub fn run(
    args: &ProfileArgs,
    ingredient: &str,
    declared: Vec<String>,
    format: OutputFormat,
) -> Result<()> {
    let household = load_household(args)?;
    let profile = household.active_profile();

    let result = if declared.is_empty() {
        check_safety(ingredient, profile.as_ref())
    } else {
        let item = FoodItem::new(ingredient, 1.0, DEFAULT_UNIT).with_allergens(declared);
        check_safety(&item, profile.as_ref())
    };

    let profile_name = profile
        .as_ref()
        .map_or("no active profile", DietaryProfile::display_name);
    info!(
        ingredient = %ingredient,
        profile = %profile_name,
        safe = result.safe,
        "Checked ingredient"
    );

    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Text => {
            display_check_result(ingredient, profile_name, &result);
            Ok(())
        }
    }
}
