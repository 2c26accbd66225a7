// ABOUTME: Configuration module for the SafePlate library and CLI
// ABOUTME: Environment-only configuration; scoring weights live in the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

/// Environment variables, runtime environment and log level
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel};
pub use safeplate_intelligence::config::ScoringConfig;
