// ABOUTME: Grocery list generator merging recipe ingredient lines and subtracting inventory
// ABOUTME: Parses leading quantity and unit with a regex, falling back to one unit per line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

//! # Grocery List Generator
//!
//! Lines shaped like `"<number>[.<number>] [unit] <name>"` are parsed into a
//! quantity, an optional unit and a name. Anything else counts as one unit of
//! the whole line.
//!
//! Entries are merged by trimmed lowercase name. Units are never reconciled, so
//! `"2 cups flour"` and `"100 g flour"` sum to 102 cups. The first unit seen
//! for a name wins.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use safeplate_core::constants::grocery::{DEFAULT_QUANTITY, DEFAULT_UNIT, INGREDIENT_CATEGORY};
use safeplate_core::models::{FoodItem, Recipe};
use tracing::debug;

/// Quantity, optional unit, name
static INGREDIENT_LINE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+(\.\d+)?)\s*([a-zA-Z]+)?\s+(.+)$").ok());

/// One ingredient line broken into its parts
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIngredient {
    /// Leading quantity, or 1 when the line had none
    pub quantity: f64,
    /// Unit token, or `"unit"` when absent
    pub unit: String,
    /// Ingredient name as written
    pub name: String,
    /// Whether the quantity pattern matched
    pub parsed: bool,
}

impl ParsedIngredient {
    /// Trimmed lowercase name used as the merge key
    #[must_use]
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// Split an ingredient line into quantity, unit and name
#[must_use]
pub fn parse_ingredient_line(line: &str) -> ParsedIngredient {
    let captures = INGREDIENT_LINE_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.captures(line));

    if let Some(caps) = captures {
        let quantity = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok());
        let name = caps.get(4).map(|m| m.as_str());
        if let (Some(quantity), Some(name)) = (quantity, name) {
            return ParsedIngredient {
                quantity,
                unit: caps
                    .get(3)
                    .map_or_else(|| DEFAULT_UNIT.to_owned(), |m| m.as_str().to_owned()),
                name: name.to_owned(),
                parsed: true,
            };
        }
    }

    ParsedIngredient {
        quantity: DEFAULT_QUANTITY,
        unit: DEFAULT_UNIT.to_owned(),
        name: line.to_owned(),
        parsed: false,
    }
}

/// Merged shopping entries in first-seen order
#[derive(Debug, Default)]
struct GroceryAccumulator {
    index: HashMap<String, usize>,
    entries: Vec<Option<FoodItem>>,
}

impl GroceryAccumulator {
    fn add(&mut self, ingredient: ParsedIngredient) {
        let key = ingredient.key();
        if let Some(existing) = self
            .index
            .get(&key)
            .and_then(|&slot| self.entries.get_mut(slot))
            .and_then(Option::as_mut)
        {
            existing.quantity += ingredient.quantity;
            return;
        }

        let name = if ingredient.parsed {
            ingredient.name.trim().to_owned()
        } else {
            ingredient.name
        };
        let item = FoodItem::new(name, ingredient.quantity, ingredient.unit)
            .with_category(INGREDIENT_CATEGORY);
        self.index.insert(key, self.entries.len());
        self.entries.push(Some(item));
    }

    fn subtract(&mut self, stock: &FoodItem) {
        let Some(&slot) = self.index.get(&stock.normalized_name()) else {
            return;
        };
        let Some(entry) = self.entries.get_mut(slot) else {
            return;
        };
        let covered = match entry {
            Some(needed) if stock.quantity >= needed.quantity => true,
            Some(needed) => {
                needed.quantity -= stock.quantity;
                false
            }
            None => false,
        };
        if covered {
            *entry = None;
        }
    }

    fn into_items(self) -> Vec<FoodItem> {
        self.entries.into_iter().flatten().collect()
    }
}

/// Build a shopping list for the given recipes, minus what is already in stock
///
/// Synthesized items carry a fresh id, the `"ingredient"` category and no expiry
/// date. Callers should not rely on the order of the returned list.
#[must_use]
pub fn generate_grocery_list(recipes: &[Recipe], inventory: &[FoodItem]) -> Vec<FoodItem> {
    let mut accumulator = GroceryAccumulator::default();

    for line in recipes.iter().flat_map(|recipe| recipe.ingredients.iter()) {
        accumulator.add(parse_ingredient_line(line));
    }
    let required = accumulator.entries.len();

    for stock in inventory {
        accumulator.subtract(stock);
    }

    let items = accumulator.into_items();
    debug!(
        recipes = recipes.len(),
        required,
        to_buy = items.len(),
        "Generated grocery list"
    );
    items
}
