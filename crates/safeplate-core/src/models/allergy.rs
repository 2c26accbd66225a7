// ABOUTME: Allergy record owned by a user profile or family member
// ABOUTME: Severity levels and case-insensitive name matching helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// How strongly a person reacts to an allergen
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Discomfort, no medical intervention expected
    Mild,
    /// Noticeable reaction, may need medication
    #[default]
    Moderate,
    /// Risk of anaphylaxis
    Severe,
}

impl Severity {
    /// Parse severity from string, defaulting to moderate
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "mild" => Self::Mild,
            "severe" => Self::Severe,
            _ => Self::Moderate,
        }
    }

    /// Lowercase name used in JSON and logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared food allergy
///
/// The `name` is the canonical allergen name and the join key into the alias and
/// substitution tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allergy {
    /// Unique allergy identifier
    pub id: String,
    /// Canonical allergen name ("Milk", "Peanuts", ...)
    pub name: String,
    /// Reaction severity
    #[serde(default)]
    pub severity: Severity,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Allergy {
    /// Create an allergy with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            severity,
            notes: None,
        }
    }

    /// Use an existing identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Attach notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Lowercased allergen name used for substring matching
    #[must_use]
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Case-insensitive equality against another allergen label
    #[must_use]
    pub fn is_named(&self, label: &str) -> bool {
        self.name.trim().to_lowercase() == label.trim().to_lowercase()
    }
}
