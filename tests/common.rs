// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging plus profile, recipe and inventory builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `safeplate`
//!
//! Each integration test binary pulls in only what it needs; unused helpers are
//! expected.

use std::env;
use std::sync::Once;

use chrono::NaiveDate;
use safeplate::household::Household;
use safeplate::models::{Allergy, FamilyMember, FoodItem, Recipe, Severity, UserProfile};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Account holder allergic to each named allergen (moderate severity)
pub fn user_allergic_to(allergens: &[&str]) -> UserProfile {
    allergens.iter().fold(UserProfile::new("Alex"), |profile, name| {
        profile.with_allergy(Allergy::new(*name, Severity::Moderate))
    })
}

/// Family member allergic to each named allergen (severe)
pub fn member_allergic_to(id: &str, name: &str, allergens: &[&str]) -> FamilyMember {
    allergens.iter().fold(
        FamilyMember::new(name).with_id(id).with_relationship("child"),
        |member, allergen| member.with_allergy(Allergy::new(*allergen, Severity::Severe)),
    )
}

/// Account holder allergic to milk, with a peanut-allergic child `kid-1`
pub fn sample_household() -> Household {
    Household::new(user_allergic_to(&["Milk"]).with_favorite_cuisine("Italian"))
        .with_member(member_allergic_to("kid-1", "Sam", &["Peanuts"]))
}

/// Recipe with the given ingredient lines and nothing else
pub fn recipe_with(name: &str, ingredients: &[&str]) -> Recipe {
    Recipe::new(name, 2).with_ingredients(ingredients.iter().copied())
}

/// Inventory item without an expiry date
pub fn stock(name: &str, quantity: f64, unit: &str) -> FoodItem {
    FoodItem::new(name, quantity, unit).mark_in_inventory()
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
