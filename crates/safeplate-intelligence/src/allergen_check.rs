// ABOUTME: Allergen check evaluator producing structured results for ingredients and food items
// ABOUTME: Collects triggered allergies and de-duplicated substitution suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

//! # Allergen Check Evaluator
//!
//! Each allergy is tested against three signals in order: the allergy name in
//! the item name, the allergy name among the item's declared allergens, then an
//! alias in the item name. The first signal that fires records the allergy and
//! moves on to the next one.

use safeplate_core::constants::substitutes_for;
use safeplate_core::models::{AllergenCheckResult, Allergy, DietaryProfile, FoodItem};
use tracing::debug;

use crate::matcher::{matching_alias, mentions_allergen_name, normalize};

/// What is being checked: a bare ingredient string or a food item
#[derive(Debug, Clone, Copy)]
pub enum CheckTarget<'a> {
    /// Free-text ingredient name
    Ingredient(&'a str),
    /// Inventory item, whose declared allergens are checked too
    Item(&'a FoodItem),
}

impl<'a> CheckTarget<'a> {
    /// Name used for text matching
    #[must_use]
    pub fn name(&self) -> &'a str {
        match *self {
            Self::Ingredient(text) => text,
            Self::Item(item) => &item.name,
        }
    }

    /// Declared allergens (always empty for bare strings)
    #[must_use]
    pub fn declared_allergens(&self) -> &'a [String] {
        match *self {
            Self::Ingredient(_) => &[],
            Self::Item(item) => item.declared_allergens(),
        }
    }
}

impl<'a> From<&'a str> for CheckTarget<'a> {
    fn from(text: &'a str) -> Self {
        Self::Ingredient(text)
    }
}

impl<'a> From<&'a String> for CheckTarget<'a> {
    fn from(text: &'a String) -> Self {
        Self::Ingredient(text)
    }
}

impl<'a> From<&'a FoodItem> for CheckTarget<'a> {
    fn from(item: &'a FoodItem) -> Self {
        Self::Item(item)
    }
}

fn triggers(normalized_name: &str, declared: &[String], allergy: &Allergy) -> bool {
    if mentions_allergen_name(normalized_name, allergy) {
        return true;
    }
    if declared.iter().any(|label| allergy.is_named(label)) {
        return true;
    }
    matching_alias(normalized_name, allergy).is_some()
}

/// Collect substitutes for the triggered allergies, first-seen order, no duplicates
fn collect_alternatives(triggered: &[Allergy]) -> Vec<String> {
    let mut alternatives: Vec<String> = Vec::new();
    for allergy in triggered {
        for option in substitutes_for(&allergy.name) {
            if !alternatives.iter().any(|known| known == option.substitute) {
                alternatives.push(option.substitute.to_owned());
            }
        }
    }
    alternatives
}

/// Check an ingredient or food item against a profile's allergies
///
/// Without a profile the result is safe with no allergies and no alternatives.
#[must_use]
pub fn check_safety<'a, T, P>(item: T, profile: Option<&P>) -> AllergenCheckResult
where
    T: Into<CheckTarget<'a>>,
    P: DietaryProfile + ?Sized,
{
    let Some(profile) = profile else {
        return AllergenCheckResult::permissive();
    };

    let target = item.into();
    let normalized = normalize(target.name());
    let declared = target.declared_allergens();

    let triggered: Vec<Allergy> = profile
        .allergies()
        .iter()
        .filter(|allergy| triggers(&normalized, declared, allergy))
        .cloned()
        .collect();

    let alternatives = collect_alternatives(&triggered);
    let result = AllergenCheckResult::from_triggered(triggered, alternatives);

    debug!(
        item = %target.name(),
        profile = %profile.display_name(),
        safe = result.safe,
        triggered = result.allergies.len(),
        "Allergen check completed"
    );
    result
}
