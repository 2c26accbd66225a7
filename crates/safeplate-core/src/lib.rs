// ABOUTME: Core types and constants for the SafePlate allergen safety engine
// ABOUTME: Foundation crate with error handling, domain models, and allergen lookup tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

#![deny(unsafe_code)]

//! # SafePlate Core
//!
//! Foundation crate providing shared types and constants for the SafePlate
//! allergen safety engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Allergen alias and substitution tables, grocery defaults
//! - **models**: Allergies, profiles, food items, recipes and check results

/// Unified error handling system with standard error codes
pub mod errors;

/// Static lookup tables and application constants organized by domain
pub mod constants;

/// Core data models (Allergy, profiles, `FoodItem`, Recipe, check results)
pub mod models;
