// ABOUTME: Seed recipe catalog and JSON loaders for recipes, households and inventory
// ABOUTME: The catalog is built once on first use and is read-only afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

//! # Recipe Catalog
//!
//! Sample recipes shipped with the application, plus loaders for JSON documents
//! exported by it. Loaded documents use the same `camelCase` layout as the
//! models.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use safeplate_core::errors::{AppError, AppResult};
use safeplate_core::models::{Difficulty, FoodItem, MealType, Recipe};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::household::Household;

static SEED_RECIPES: OnceLock<Vec<Recipe>> = OnceLock::new();

/// Sample recipes, built on first access
#[must_use]
pub fn seed_recipes() -> &'static [Recipe] {
    SEED_RECIPES.get_or_init(build_seed_recipes)
}

/// Look up a seed recipe by id
#[must_use]
pub fn seed_recipe(id: &str) -> Option<&'static Recipe> {
    seed_recipes().iter().find(|recipe| recipe.id == id)
}

fn build_seed_recipes() -> Vec<Recipe> {
    let recipes = vec![
        Recipe::new("Fluffy Pancakes", 4)
            .with_id("seed-fluffy-pancakes")
            .with_description("Classic buttermilk-style pancakes for a weekend breakfast")
            .with_ingredients([
                "2 cups flour",
                "1.5 cups milk",
                "2 eggs",
                "2 tbsp sugar",
                "1 tbsp baking powder",
                "2 tbsp butter",
            ])
            .with_instruction("Whisk the dry ingredients together")
            .with_instruction("Beat in milk, eggs and melted butter until just combined")
            .with_instruction("Cook ladlefuls on a hot griddle until bubbles form, then flip")
            .with_allergen("Milk")
            .with_allergen("Eggs")
            .with_allergen("Wheat")
            .with_tag("vegetarian")
            .with_tag("breakfast")
            .with_cuisine("American")
            .with_meal_type(MealType::Breakfast)
            .with_difficulty(Difficulty::Easy)
            .with_preparation_time(25)
            .with_source("SafePlate Kitchen"),
        Recipe::new("Chickpea Coconut Curry", 4)
            .with_id("seed-chickpea-curry")
            .with_description("One-pot vegan curry with chickpeas and spinach")
            .with_ingredients([
                "2 cans chickpeas",
                "1 can coconut milk",
                "1 onion",
                "2 cloves garlic",
                "2 tbsp curry paste",
                "3 cups spinach",
                "1 cup rice",
            ])
            .with_instruction("Soften onion and garlic, then fry the curry paste")
            .with_instruction("Add chickpeas and coconut milk and simmer for 15 minutes")
            .with_instruction("Stir in spinach and serve over rice")
            .with_tag("vegan")
            .with_tag("vegetarian")
            .with_tag("dairy-free")
            .with_cuisine("Indian")
            .with_meal_type(MealType::Dinner)
            .with_difficulty(Difficulty::Easy)
            .with_preparation_time(35)
            .with_source("SafePlate Kitchen"),
        Recipe::new("Peanut Noodle Bowl", 2)
            .with_id("seed-peanut-noodles")
            .with_description("Cold rice noodles in a peanut and lime dressing")
            .with_ingredients([
                "200 g rice noodles",
                "3 tbsp peanut butter",
                "2 tbsp soy sauce",
                "1 lime",
                "1 cucumber",
                "2 carrots",
            ])
            .with_instruction("Cook the noodles and rinse under cold water")
            .with_instruction("Whisk peanut butter, soy sauce and lime juice into a dressing")
            .with_instruction("Toss everything together with sliced vegetables")
            .with_allergen("Peanuts")
            .with_allergen("Soy")
            .with_tag("vegetarian")
            .with_tag("quick")
            .with_cuisine("Thai")
            .with_meal_type(MealType::Lunch)
            .with_difficulty(Difficulty::Easy)
            .with_preparation_time(20)
            .with_source("SafePlate Kitchen"),
        Recipe::new("Lemon Herb Salmon", 2)
            .with_id("seed-lemon-salmon")
            .with_description("Oven-baked salmon with lemon, dill and roasted potatoes")
            .with_ingredients([
                "2 salmon fillets",
                "1 lemon",
                "1 tbsp olive oil",
                "500 g potatoes",
                "Fresh dill",
            ])
            .with_instruction("Roast the potatoes for 20 minutes")
            .with_instruction("Add salmon topped with lemon and dill and bake 12 minutes more")
            .with_allergen("Fish")
            .with_tag("gluten-free")
            .with_tag("high protein")
            .with_cuisine("Mediterranean")
            .with_meal_type(MealType::Dinner)
            .with_difficulty(Difficulty::Medium)
            .with_preparation_time(40)
            .with_source("SafePlate Kitchen"),
        Recipe::new("Tomato Basil Pasta", 4)
            .with_id("seed-tomato-pasta")
            .with_description("Quick weeknight pasta with a fresh tomato sauce")
            .with_ingredients([
                "400 g pasta",
                "6 tomatoes",
                "2 cloves garlic",
                "3 tbsp olive oil",
                "1 bunch basil",
                "50 g parmesan cheese",
            ])
            .with_instruction("Boil the pasta until al dente")
            .with_instruction("Cook tomatoes with garlic and olive oil until saucy")
            .with_instruction("Toss with pasta, basil and grated parmesan")
            .with_allergen("Wheat")
            .with_allergen("Milk")
            .with_tag("vegetarian")
            .with_cuisine("Italian")
            .with_meal_type(MealType::Dinner)
            .with_difficulty(Difficulty::Easy)
            .with_preparation_time(25)
            .with_source("SafePlate Kitchen"),
        Recipe::new("Sesame Stir-Fry", 2)
            .with_id("seed-sesame-stir-fry")
            .with_description("Crisp vegetables and tofu in a sesame ginger glaze")
            .with_ingredients([
                "300 g tofu",
                "1 broccoli",
                "1 red pepper",
                "1 tbsp sesame oil",
                "2 tbsp tamari",
                "1 tbsp ginger",
            ])
            .with_instruction("Press and cube the tofu, then fry until golden")
            .with_instruction("Stir-fry the vegetables and glaze with tamari, ginger and sesame oil")
            .with_allergen("Sesame")
            .with_allergen("Soy")
            .with_tag("vegan")
            .with_cuisine("Chinese")
            .with_meal_type(MealType::Dinner)
            .with_difficulty(Difficulty::Medium)
            .with_preparation_time(30)
            .with_source("SafePlate Kitchen"),
        Recipe::new("Berry Oat Smoothie", 1)
            .with_id("seed-berry-smoothie")
            .with_description("Dairy-free breakfast smoothie")
            .with_ingredients(["1 cup oat milk", "1 cup mixed berries", "1 banana", "2 tbsp oats"])
            .with_instruction("Blend everything until smooth")
            .with_tag("vegan")
            .with_tag("quick")
            .with_meal_type(MealType::Breakfast)
            .with_difficulty(Difficulty::Easy)
            .with_preparation_time(5)
            .with_source("SafePlate Kitchen"),
        Recipe::new("Shrimp Tacos", 3)
            .with_id("seed-shrimp-tacos")
            .with_description("Chili-lime shrimp in corn tortillas with slaw")
            .with_ingredients([
                "400 g shrimp",
                "6 corn tortillas",
                "2 cups cabbage",
                "1 lime",
                "1 tsp chili powder",
                "1 avocado",
            ])
            .with_instruction("Season shrimp with chili and lime and sear for 2 minutes per side")
            .with_instruction("Fill tortillas with cabbage, shrimp and sliced avocado")
            .with_allergen("Shellfish")
            .with_tag("gluten-free")
            .with_cuisine("Mexican")
            .with_meal_type(MealType::Dinner)
            .with_difficulty(Difficulty::Easy)
            .with_preparation_time(20)
            .with_source("SafePlate Kitchen"),
    ];
    debug!(count = recipes.len(), "Built seed recipe catalog");
    recipes
}

fn read_json_file<T: DeserializeOwned>(path: &Path, what: &str) -> AppResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Failed to read {what} file {}: {e}", path.display()))
            .with_source(e)
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        AppError::serialization(format!("Invalid {what} file {}: {e}", path.display()))
            .with_source(e)
    })
}

/// Load a JSON array of recipes
///
/// # Errors
///
/// Returns a storage error if the file cannot be read, a serialization error
/// if it is not a JSON array of recipes, or a missing field error for a recipe
/// with a blank name
pub fn load_recipes_file(path: impl AsRef<Path>) -> AppResult<Vec<Recipe>> {
    let path = path.as_ref();
    let recipes: Vec<Recipe> = read_json_file(path, "recipe")?;
    if let Some(index) = recipes.iter().position(|recipe| recipe.name.trim().is_empty()) {
        return Err(AppError::missing_field(format!("recipes[{index}].name")));
    }
    info!(path = %path.display(), count = recipes.len(), "Loaded recipes");
    Ok(recipes)
}

/// Load a JSON array of inventory items
///
/// # Errors
///
/// Returns a storage error if the file cannot be read, or a serialization error
/// if it is not a JSON array of food items
pub fn load_inventory_file(path: impl AsRef<Path>) -> AppResult<Vec<FoodItem>> {
    let path = path.as_ref();
    let inventory: Vec<FoodItem> = read_json_file(path, "inventory")?;
    info!(path = %path.display(), count = inventory.len(), "Loaded inventory");
    Ok(inventory)
}

/// Load a household document (`user` plus optional `family`)
///
/// The account holder is the active profile after loading.
///
/// # Errors
///
/// Returns a storage error if the file cannot be read, or a serialization error
/// if the document does not describe a household
pub fn load_household_file(path: impl AsRef<Path>) -> AppResult<Household> {
    let path = path.as_ref();
    let household: Household = read_json_file(path, "profile")?;
    info!(
        path = %path.display(),
        user = %household.user.name,
        family = household.family.len(),
        "Loaded household"
    );
    Ok(household)
}
