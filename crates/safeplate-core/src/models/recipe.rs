// ABOUTME: Recipe model with free-text ingredient lines and author-declared allergen tags
// ABOUTME: MealType and Difficulty enums plus builder methods for catalog and test fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Dessert
    Dessert,
    /// Unspecified or other meal type
    #[serde(other)]
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            "dessert" => Self::Dessert,
            _ => Self::Other,
        }
    }
}

/// Cooking difficulty
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Few steps, basic techniques
    Easy,
    /// Some technique required
    #[default]
    Medium,
    /// Involved preparation
    Hard,
}

/// A recipe as stored by the application or imported from the catalog
///
/// `allergens` is an author-declared tag list. It is checked independently of
/// whatever free-text matching against `ingredients` would find.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-text ingredient lines ("2 cups flour")
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Ordered cooking steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Author-declared allergen tags
    #[serde(default)]
    pub allergens: Vec<String>,
    /// Preparation time in minutes
    #[serde(default)]
    pub preparation_time: u32,
    /// Number of servings
    #[serde(default = "default_servings")]
    pub servings: u32,
    /// Whether the user marked this recipe as a favorite
    #[serde(default)]
    pub is_favorite: bool,
    /// Cuisine label ("Italian", "Thai", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<String>,
    /// Meal type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    /// Difficulty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Free-form tags ("vegetarian", "quick", ...)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Source attribution for imported recipes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

const fn default_servings() -> u32 {
    1
}

impl Recipe {
    /// Create a new recipe with basic information
    #[must_use]
    pub fn new(name: impl Into<String>, servings: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            allergens: Vec::new(),
            preparation_time: 0,
            servings,
            is_favorite: false,
            cuisine_type: None,
            meal_type: None,
            difficulty: None,
            tags: Vec::new(),
            source: None,
        }
    }

    /// Use an existing identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Add a description
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Add an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, line: impl Into<String>) -> Self {
        self.ingredients.push(line.into());
        self
    }

    /// Add multiple ingredient lines
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Add an instruction step
    #[must_use]
    pub fn with_instruction(mut self, step: impl Into<String>) -> Self {
        self.instructions.push(step.into());
        self
    }

    /// Add a declared allergen tag
    #[must_use]
    pub fn with_allergen(mut self, allergen: impl Into<String>) -> Self {
        self.allergens.push(allergen.into());
        self
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the cuisine
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine_type = Some(cuisine.into());
        self
    }

    /// Set preparation time
    #[must_use]
    pub const fn with_preparation_time(mut self, mins: u32) -> Self {
        self.preparation_time = mins;
        self
    }

    /// Set meal type
    #[must_use]
    pub const fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = Some(meal_type);
        self
    }

    /// Set difficulty
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Set source attribution
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Mark as favorite
    #[must_use]
    pub const fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }
}
