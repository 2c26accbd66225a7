// ABOUTME: Allergen alias table mapping canonical allergen names to alternate surface forms
// ABOUTME: Used to catch indirect mentions such as "whey" for Milk or "tahini" for Sesame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

/// Canonical allergen name to alternate textual forms.
///
/// Keys are matched case-insensitively against an allergy's `name`. Aliases are
/// stored lowercase because they are compared against lowercased ingredient text.
pub const ALLERGEN_ALIASES: &[(&str, &[&str])] = &[
    (
        "Milk",
        &[
            "dairy",
            "cream",
            "cheese",
            "butter",
            "whey",
            "casein",
            "lactose",
            "yogurt",
            "ghee",
            "custard",
        ],
    ),
    (
        "Eggs",
        &[
            "egg",
            "albumin",
            "mayonnaise",
            "meringue",
            "ovalbumin",
            "lysozyme",
        ],
    ),
    ("Peanuts", &["peanut", "groundnut", "arachis", "monkey nut"]),
    (
        "Tree Nuts",
        &[
            "almond",
            "cashew",
            "walnut",
            "pecan",
            "pistachio",
            "hazelnut",
            "macadamia",
            "brazil nut",
            "praline",
            "marzipan",
        ],
    ),
    (
        "Wheat",
        &[
            "flour", "bread", "pasta", "semolina", "couscous", "bulgur", "spelt", "farina",
        ],
    ),
    (
        "Gluten",
        &[
            "wheat", "barley", "rye", "malt", "seitan", "flour", "bread", "pasta",
        ],
    ),
    (
        "Soy",
        &[
            "soya", "soybean", "tofu", "edamame", "miso", "tempeh", "soy sauce", "tamari",
        ],
    ),
    (
        "Fish",
        &[
            "salmon",
            "tuna",
            "cod",
            "anchovy",
            "sardine",
            "haddock",
            "tilapia",
            "fish sauce",
        ],
    ),
    (
        "Shellfish",
        &[
            "shrimp", "prawn", "crab", "lobster", "crayfish", "scallop", "mussel", "oyster",
            "clam",
        ],
    ),
    ("Sesame", &["tahini", "sesame oil", "benne", "gomasio", "halva"]),
    ("Mustard", &["mustard seed", "dijon"]),
    ("Celery", &["celeriac", "celery salt"]),
    ("Lupin", &["lupine", "lupini"]),
    ("Sulphites", &["sulfite", "sulphur dioxide", "sulfur dioxide"]),
];

/// Look up the aliases registered for an allergen name (case-insensitive).
///
/// Unknown allergens have no aliases and fall back to direct name matching only.
#[must_use]
pub fn aliases_for(allergen_name: &str) -> &'static [&'static str] {
    let needle = allergen_name.trim();
    ALLERGEN_ALIASES
        .iter()
        .find(|(canonical, _)| canonical.eq_ignore_ascii_case(needle))
        .map(|(_, aliases)| *aliases)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(aliases_for("milk").contains(&"whey"));
        assert!(aliases_for("  MILK ").contains(&"dairy"));
    }

    #[test]
    fn test_unknown_allergen_has_no_aliases() {
        assert!(aliases_for("Kiwi").is_empty());
    }

    #[test]
    fn test_aliases_are_lowercase() {
        for (canonical, aliases) in ALLERGEN_ALIASES {
            for alias in *aliases {
                assert_eq!(
                    *alias,
                    alias.to_lowercase(),
                    "alias {alias} of {canonical} must be lowercase"
                );
            }
        }
    }
}
