// ABOUTME: Transient result types produced by the allergen safety evaluators
// ABOUTME: AllergenCheckResult, RecipeSafety, IngredientSubstitution and ScoredRecipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

use serde::{Deserialize, Serialize};

use super::allergy::{Allergy, Severity};
use super::recipe::Recipe;

/// Outcome of checking one ingredient or food item against a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergenCheckResult {
    /// True when no allergy was triggered
    pub safe: bool,
    /// Allergies triggered by the item, each at most once
    pub allergies: Vec<Allergy>,
    /// Suggested replacement ingredients; never `Some` of an empty list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
}

impl AllergenCheckResult {
    /// Result used when there is nothing to check against
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            safe: true,
            allergies: Vec::new(),
            alternatives: None,
        }
    }

    /// Build a result from triggered allergies and collected alternatives
    #[must_use]
    pub fn from_triggered(allergies: Vec<Allergy>, alternatives: Vec<String>) -> Self {
        Self {
            safe: allergies.is_empty(),
            allergies,
            alternatives: (!alternatives.is_empty()).then_some(alternatives),
        }
    }

    /// Most severe triggered allergy, if any
    #[must_use]
    pub fn highest_severity(&self) -> Option<Severity> {
        self.allergies.iter().map(|allergy| allergy.severity).max()
    }
}

/// Outcome of checking a whole recipe against a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSafety {
    /// True when nothing problematic was found
    pub safe: bool,
    /// Matched allergen tags, or verbatim unsafe ingredient lines
    pub problem_ingredients: Vec<String>,
}

impl RecipeSafety {
    /// A recipe with no problems
    #[must_use]
    pub const fn all_clear() -> Self {
        Self {
            safe: true,
            problem_ingredients: Vec::new(),
        }
    }

    /// Build a verdict from the collected problems
    #[must_use]
    pub fn from_problems(problem_ingredients: Vec<String>) -> Self {
        Self {
            safe: problem_ingredients.is_empty(),
            problem_ingredients,
        }
    }
}

/// A suggested replacement for one ingredient line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSubstitution {
    /// The original ingredient line
    pub original: String,
    /// The replacement ingredient
    pub substitute: String,
    /// Replacement ratio
    pub ratio: String,
    /// Usage note
    pub notes: String,
}

/// A recipe together with its suggestion score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecipe<'a> {
    /// The scored recipe
    pub recipe: &'a Recipe,
    /// Heuristic score, higher is better
    pub score: f64,
}
