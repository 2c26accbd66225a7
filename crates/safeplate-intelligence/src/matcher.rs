// ABOUTME: Ingredient safety matcher comparing ingredient text against declared allergies
// ABOUTME: Case-insensitive substring matching on allergen names and their aliases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

//! # Ingredient Safety Matcher
//!
//! Matching is substring containment over lowercased text, in two directions:
//! the ingredient text contains the allergy name, or it contains one of the
//! aliases registered for that allergy name.
//!
//! Containment is deliberately loose. `"egg"` matches `"eggplant"` and
//! `"dairy"` matches `"dairy-free"`. A false alarm is preferred over a missed
//! allergen. A blank allergy name is contained in every text, so it flags
//! everything, the same way it does for declared labels and recipe tags.

use safeplate_core::constants::aliases_for;
use safeplate_core::models::{Allergy, DietaryProfile};
use tracing::debug;

/// Normalize free text for matching (trim, lowercase)
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whether normalized text contains the allergy name itself
#[must_use]
pub fn mentions_allergen_name(normalized_text: &str, allergy: &Allergy) -> bool {
    normalized_text.contains(&allergy.normalized_name())
}

/// First alias of the allergy found in normalized text
#[must_use]
pub fn matching_alias(normalized_text: &str, allergy: &Allergy) -> Option<&'static str> {
    aliases_for(&allergy.name)
        .iter()
        .copied()
        .find(|alias| normalized_text.contains(&alias.to_lowercase()))
}

/// Whether normalized text mentions the allergy by name or by alias
#[must_use]
pub fn mentions_allergy(normalized_text: &str, allergy: &Allergy) -> bool {
    mentions_allergen_name(normalized_text, allergy)
        || matching_alias(normalized_text, allergy).is_some()
}

/// Decide whether an ingredient is safe for a profile
///
/// Returns `true` when no profile is active or the profile declares no
/// allergies. Otherwise returns `false` as soon as any allergy is mentioned by
/// name or alias.
#[must_use]
pub fn is_safe<P>(ingredient_text: &str, profile: Option<&P>) -> bool
where
    P: DietaryProfile + ?Sized,
{
    let Some(profile) = profile else {
        return true;
    };
    if !profile.has_allergies() {
        return true;
    }

    let normalized = normalize(ingredient_text);
    let triggered = profile
        .allergies()
        .iter()
        .find(|allergy| mentions_allergy(&normalized, allergy));

    if let Some(allergy) = triggered {
        debug!(
            ingredient = %ingredient_text,
            allergy = %allergy.name,
            profile = %profile.display_name(),
            "Ingredient flagged as unsafe"
        );
        return false;
    }
    true
}
