// ABOUTME: Output formatting helpers for safeplate-cli
// ABOUTME: Text rendering for check results, recipes, suggestions and item lists; JSON passthrough
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

use chrono::NaiveDate;
use safeplate::errors::AppResult;
use safeplate::intelligence::days_until_expiry;
use safeplate::models::{
    AllergenCheckResult, FoodItem, IngredientSubstitution, Recipe, RecipeSafety, ScoredRecipe,
};
use serde::Serialize;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display the outcome of a single allergen check
pub fn display_check_result(ingredient: &str, profile_name: &str, result: &AllergenCheckResult) {
    if result.safe {
        println!("SAFE    {ingredient} (for {profile_name})");
        return;
    }

    println!("UNSAFE  {ingredient} (for {profile_name})");
    for allergy in &result.allergies {
        println!("   - {} ({})", allergy.name, allergy.severity);
    }
    if let Some(alternatives) = &result.alternatives {
        println!("   Try instead: {}", alternatives.join(", "));
    }
}

/// Display one recipe verdict with optional substitutions
pub fn display_recipe_safety(
    recipe: &Recipe,
    safety: &RecipeSafety,
    substitutions: &[IngredientSubstitution],
) {
    let marker = if safety.safe { "SAFE  " } else { "UNSAFE" };
    println!("{marker}  {} [{}]", recipe.name, recipe.id);
    for problem in &safety.problem_ingredients {
        println!("   ! {problem}");
    }
    for sub in substitutions {
        println!(
            "   > {}: use {} ({}) - {}",
            sub.original, sub.substitute, sub.ratio, sub.notes
        );
    }
}

/// Display ranked suggestions
pub fn display_suggestions(scored: &[ScoredRecipe<'_>]) {
    if scored.is_empty() {
        println!("No safe recipes to suggest.");
        return;
    }
    for (rank, entry) in scored.iter().enumerate() {
        let cuisine = entry.recipe.cuisine_type.as_deref().unwrap_or("-");
        println!(
            "{:>2}. {:<28} score {:>5.2}  {cuisine}",
            rank + 1,
            entry.recipe.name,
            entry.score
        );
    }
}

/// Display a shopping list
pub fn display_grocery_list(items: &[FoodItem]) {
    if items.is_empty() {
        println!("Nothing to buy, the inventory covers every recipe.");
        return;
    }
    println!("Shopping list ({} items)", items.len());
    println!("{}", "=".repeat(40));
    for item in items {
        println!("   {:>6} {:<8} {}", item.quantity, item.unit, item.name);
    }
}

/// Display expired and soon-to-expire items
pub fn display_expiry_report(
    today: NaiveDate,
    days: u64,
    expired: &[&FoodItem],
    expiring: &[&FoodItem],
) {
    println!("Expired ({})", expired.len());
    for item in expired {
        let overdue = days_until_expiry(item, today).map_or(0, i64::abs);
        println!("   {} ({overdue} days ago)", item.name);
    }
    println!("Expiring within {days} days ({})", expiring.len());
    for item in expiring {
        match days_until_expiry(item, today) {
            Some(0) => println!("   {} (today)", item.name),
            Some(left) => println!("   {} (in {left} days)", item.name),
            None => {}
        }
    }
}
