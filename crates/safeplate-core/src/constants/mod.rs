// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Allergen alias and substitution tables plus grocery and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

//! Constants module
//!
//! Static lookup tables are plain `const` data, so they are initialized with the
//! binary and can never be mutated at runtime.

/// Allergen alias table (canonical name to alternate surface forms)
pub mod allergens;
/// Substitution table (canonical allergen name to replacement ingredients)
pub mod substitutions;

pub use allergens::{aliases_for, ALLERGEN_ALIASES};
pub use substitutions::{substitutes_for, SubstituteOption, SUBSTITUTIONS};

/// Defaults used when synthesizing grocery list entries
pub mod grocery {
    /// Category assigned to every synthesized grocery entry
    pub const INGREDIENT_CATEGORY: &str = "ingredient";
    /// Unit used when an ingredient line carries no unit token
    pub const DEFAULT_UNIT: &str = "unit";
    /// Quantity used when an ingredient line has no leading number
    pub const DEFAULT_QUANTITY: f64 = 1.0;
}

/// Inventory defaults
pub mod inventory {
    /// Category assigned to inventory items created without one
    pub const DEFAULT_CATEGORY: &str = "other";
    /// Default look-ahead window for expiry warnings
    pub const DEFAULT_EXPIRY_WARNING_DAYS: u64 = 3;
}

/// Service names for structured logging
pub mod service_names {
    /// Name reported by the CLI and library logging setup
    pub const SAFEPLATE: &str = "safeplate";
}
