// ABOUTME: User profile and family member models with a shared dietary capability trait
// ABOUTME: Profile is a borrowed tagged union so evaluators never need the concrete type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::allergy::Allergy;

/// The capability surface the safety evaluators need from a profile
pub trait DietaryProfile {
    /// Display name of the person
    fn display_name(&self) -> &str;

    /// Declared allergies
    fn allergies(&self) -> &[Allergy];

    /// Free-text dietary preferences ("vegetarian", "low carb", ...)
    fn dietary_preferences(&self) -> &[String];

    /// Favorite cuisines, when the profile declares any
    fn favorite_cuisines(&self) -> Option<&[String]>;

    /// Whether the profile carries any allergy data at all
    fn has_allergies(&self) -> bool {
        !self.allergies().is_empty()
    }
}

/// The account holder's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique user identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Dietary preferences
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    /// Declared allergies
    #[serde(default)]
    pub allergies: Vec<Allergy>,
    /// Favorite cuisines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_cuisines: Option<Vec<String>>,
}

impl UserProfile {
    /// Create an empty profile with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: None,
            dietary_preferences: Vec::new(),
            allergies: Vec::new(),
            favorite_cuisines: None,
        }
    }

    /// Add an allergy
    #[must_use]
    pub fn with_allergy(mut self, allergy: Allergy) -> Self {
        self.allergies.push(allergy);
        self
    }

    /// Add a dietary preference
    #[must_use]
    pub fn with_dietary_preference(mut self, preference: impl Into<String>) -> Self {
        self.dietary_preferences.push(preference.into());
        self
    }

    /// Add a favorite cuisine
    #[must_use]
    pub fn with_favorite_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.favorite_cuisines
            .get_or_insert_with(Vec::new)
            .push(cuisine.into());
        self
    }
}

impl DietaryProfile for UserProfile {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn allergies(&self) -> &[Allergy] {
        &self.allergies
    }

    fn dietary_preferences(&self) -> &[String] {
        &self.dietary_preferences
    }

    fn favorite_cuisines(&self) -> Option<&[String]> {
        self.favorite_cuisines.as_deref()
    }
}

/// A household member managed by the account holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    /// Unique member identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Relationship to the account holder ("child", "partner", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    /// Dietary preferences
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    /// Declared allergies
    #[serde(default)]
    pub allergies: Vec<Allergy>,
    /// Favorite cuisines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_cuisines: Option<Vec<String>>,
}

impl FamilyMember {
    /// Create an empty family member with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            relationship: None,
            dietary_preferences: Vec::new(),
            allergies: Vec::new(),
            favorite_cuisines: None,
        }
    }

    /// Use an existing identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the relationship label
    #[must_use]
    pub fn with_relationship(mut self, relationship: impl Into<String>) -> Self {
        self.relationship = Some(relationship.into());
        self
    }

    /// Add an allergy
    #[must_use]
    pub fn with_allergy(mut self, allergy: Allergy) -> Self {
        self.allergies.push(allergy);
        self
    }

    /// Add a dietary preference
    #[must_use]
    pub fn with_dietary_preference(mut self, preference: impl Into<String>) -> Self {
        self.dietary_preferences.push(preference.into());
        self
    }
}

impl DietaryProfile for FamilyMember {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn allergies(&self) -> &[Allergy] {
        &self.allergies
    }

    fn dietary_preferences(&self) -> &[String] {
        &self.dietary_preferences
    }

    fn favorite_cuisines(&self) -> Option<&[String]> {
        self.favorite_cuisines.as_deref()
    }
}

/// Either kind of profile, borrowed from wherever it is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile<'a> {
    /// The account holder
    User(&'a UserProfile),
    /// A household member
    FamilyMember(&'a FamilyMember),
}

impl Profile<'_> {
    /// Identifier of the underlying record
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::User(user) => &user.id,
            Self::FamilyMember(member) => &member.id,
        }
    }
}

impl DietaryProfile for Profile<'_> {
    fn display_name(&self) -> &str {
        match self {
            Self::User(user) => user.display_name(),
            Self::FamilyMember(member) => member.display_name(),
        }
    }

    fn allergies(&self) -> &[Allergy] {
        match self {
            Self::User(user) => user.allergies(),
            Self::FamilyMember(member) => member.allergies(),
        }
    }

    fn dietary_preferences(&self) -> &[String] {
        match self {
            Self::User(user) => user.dietary_preferences(),
            Self::FamilyMember(member) => member.dietary_preferences(),
        }
    }

    fn favorite_cuisines(&self) -> Option<&[String]> {
        match self {
            Self::User(user) => user.favorite_cuisines(),
            Self::FamilyMember(member) => member.favorite_cuisines(),
        }
    }
}

impl<'a> From<&'a UserProfile> for Profile<'a> {
    fn from(user: &'a UserProfile) -> Self {
        Self::User(user)
    }
}

impl<'a> From<&'a FamilyMember> for Profile<'a> {
    fn from(member: &'a FamilyMember) -> Self {
        Self::FamilyMember(member)
    }
}
