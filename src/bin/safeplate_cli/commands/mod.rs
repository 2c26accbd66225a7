// ABOUTME: Re-exports command modules for safeplate-cli
// ABOUTME: Ingredient checks, recipe verdicts and suggestions, grocery and expiry reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

pub mod check;
pub mod inventory;
pub mod recipes;
