// ABOUTME: Main library entry point for the SafePlate allergen safety engine
// ABOUTME: Re-exports the evaluators and adds config, logging, catalog and household selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

#![deny(unsafe_code)]

//! # SafePlate
//!
//! Allergen safety checks for a household that tracks food allergies. Checks
//! ingredients and packaged items against the active profile, filters and ranks
//! recipes, and builds grocery lists from recipes minus the kitchen inventory.
//!
//! ## Architecture
//!
//! - **`safeplate-core`**: models, lookup tables and errors
//! - **`safeplate-intelligence`**: the pure evaluators
//! - **this crate**: configuration, logging, the seed catalog, household
//!   selection and the `safeplate-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use safeplate::household::Household;
//! use safeplate::models::{Allergy, Severity, UserProfile};
//! use safeplate::intelligence::check_safety;
//!
//! let user = UserProfile::new("Alex").with_allergy(Allergy::new("Peanuts", Severity::Severe));
//! let household = Household::new(user);
//!
//! let result = check_safety("Peanut Butter Sandwich", household.active_profile().as_ref());
//! assert!(!result.safe);
//! ```

/// Seed recipe catalog and JSON loaders
pub mod catalog;

/// Environment-driven configuration
pub mod config;

/// Household profiles and active profile selection
pub mod household;

/// Logging configuration and setup
pub mod logging;

pub use safeplate_core::{constants, errors, models};
pub use safeplate_intelligence as intelligence;
