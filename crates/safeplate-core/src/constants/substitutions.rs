// ABOUTME: Substitution table mapping canonical allergen names to replacement ingredients
// ABOUTME: Each option carries a replacement ratio and a short usage note
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

/// A single replacement ingredient for an allergen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstituteOption {
    /// Replacement ingredient name
    pub substitute: &'static str,
    /// Replacement ratio relative to the original ingredient
    pub ratio: &'static str,
    /// Usage note
    pub notes: &'static str,
}

const fn option(
    substitute: &'static str,
    ratio: &'static str,
    notes: &'static str,
) -> SubstituteOption {
    SubstituteOption {
        substitute,
        ratio,
        notes,
    }
}

/// Canonical allergen name to suggested substitutes, in preference order
pub const SUBSTITUTIONS: &[(&str, &[SubstituteOption])] = &[
    (
        "Milk",
        &[
            option("Oat milk", "1:1", "Neutral flavour, good for baking"),
            option("Almond milk", "1:1", "Avoid if also allergic to tree nuts"),
            option("Soy milk", "1:1", "Closest protein content to dairy milk"),
            option("Coconut milk", "1:1", "Richer texture, adds coconut flavour"),
        ],
    ),
    (
        "Eggs",
        &[
            option(
                "Flax egg",
                "1 tbsp ground flax + 3 tbsp water per egg",
                "Rest 5 minutes before using",
            ),
            option(
                "Chia egg",
                "1 tbsp chia seeds + 3 tbsp water per egg",
                "Works best in dense bakes",
            ),
            option("Applesauce", "1/4 cup per egg", "Adds moisture and sweetness"),
            option("Mashed banana", "1/4 cup per egg", "Adds banana flavour"),
        ],
    ),
    (
        "Peanuts",
        &[
            option("Sunflower seed butter", "1:1", "Can turn green when baked with baking soda"),
            option("Soy nut butter", "1:1", "Avoid if also allergic to soy"),
            option("Pumpkin seed butter", "1:1", "Earthy flavour"),
        ],
    ),
    (
        "Tree Nuts",
        &[
            option("Sunflower seeds", "1:1", "Toast for extra crunch"),
            option("Pumpkin seeds", "1:1", "Good in salads and granola"),
            option("Toasted oats", "1:1", "Replaces texture in crumbles"),
        ],
    ),
    (
        "Wheat",
        &[
            option("Rice flour", "1:1", "Combine with starch for better structure"),
            option("Oat flour", "1:1", "Use certified gluten-free oats if needed"),
            option("Almond flour", "1:1", "Avoid if also allergic to tree nuts"),
            option("Buckwheat flour", "1:1", "Naturally wheat-free despite the name"),
        ],
    ),
    (
        "Gluten",
        &[
            option("Rice flour", "1:1", "Combine with starch for better structure"),
            option("Gluten-free flour blend", "1:1", "Check the blend for xanthan gum"),
            option("Rice noodles", "1:1", "Replaces wheat pasta"),
            option("Quinoa", "1:1", "Replaces couscous or bulgur"),
        ],
    ),
    (
        "Soy",
        &[
            option("Coconut aminos", "1:1", "Replaces soy sauce, slightly sweeter"),
            option("Chickpeas", "1:1", "Replaces tofu in stir-fries and curries"),
            option("Sunflower lecithin", "1:1", "Replaces soy lecithin"),
        ],
    ),
    (
        "Fish",
        &[
            option("Chicken", "1:1", "Adjust cooking time"),
            option("Tofu", "1:1", "Avoid if also allergic to soy"),
            option("Jackfruit", "1:1", "Flaky texture for fish-style dishes"),
        ],
    ),
    (
        "Shellfish",
        &[
            option("Chicken", "1:1", "Adjust cooking time"),
            option("King oyster mushrooms", "1:1", "Slice into rounds to mimic scallops"),
            option("Hearts of palm", "1:1", "Works in crab-style salads"),
        ],
    ),
    (
        "Sesame",
        &[
            option("Sunflower seed butter", "1:1", "Replaces tahini"),
            option("Olive oil", "1:1", "Replaces sesame oil"),
            option("Poppy seeds", "1:1", "Replaces sesame seed topping"),
        ],
    ),
];

/// Look up the substitutes registered for an allergen name (case-insensitive).
#[must_use]
pub fn substitutes_for(allergen_name: &str) -> &'static [SubstituteOption] {
    let needle = allergen_name.trim();
    SUBSTITUTIONS
        .iter()
        .find(|(canonical, _)| canonical.eq_ignore_ascii_case(needle))
        .map(|(_, options)| *options)
        .unwrap_or_default()
}
