// ABOUTME: Environment-driven application configuration for the SafePlate library and CLI
// ABOUTME: Runtime environment, log level, default recipe file and expiry warning window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

//! Application configuration read from environment variables

use std::env;
use std::fmt;
use std::path::PathBuf;

use safeplate_core::constants::inventory::DEFAULT_EXPIRY_WARNING_DAYS;
use safeplate_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Environment variable naming a JSON recipe file used instead of the seed catalog
pub const RECIPES_PATH_VAR: &str = "SAFEPLATE_RECIPES_PATH";
/// Environment variable overriding the expiry warning window in days
pub const EXPIRY_WARNING_DAYS_VAR: &str = "SAFEPLATE_EXPIRY_WARNING_DAYS";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Per-evaluation diagnostics
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Runtime environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Runtime environment
    pub environment: Environment,
    /// Default log level
    pub log_level: LogLevel,
    /// Recipe file loaded instead of the seed catalog, when set
    pub recipes_path: Option<PathBuf>,
    /// Look-ahead window for expiry warnings
    pub expiry_warning_days: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::default(),
            recipes_path: None,
            expiry_warning_days: DEFAULT_EXPIRY_WARNING_DAYS,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults. Empty `SAFEPLATE_RECIPES_PATH` is
    /// treated as unset.
    ///
    /// # Errors
    ///
    /// Returns a config error if `SAFEPLATE_EXPIRY_WARNING_DAYS` is not a
    /// non-negative integer
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var("ENVIRONMENT")
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let log_level = env::var("RUST_LOG")
            .map(|value| LogLevel::from_str_or_default(&value))
            .unwrap_or_default();

        let recipes_path = env::var(RECIPES_PATH_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let expiry_warning_days = match env::var(EXPIRY_WARNING_DAYS_VAR) {
            Ok(value) => value.trim().parse::<u64>().map_err(|e| {
                AppError::config(format!("Invalid {EXPIRY_WARNING_DAYS_VAR}: {value}"))
                    .with_source(e)
            })?,
            Err(_) => DEFAULT_EXPIRY_WARNING_DAYS,
        };

        Ok(Self {
            environment,
            log_level,
            recipes_path,
            expiry_warning_days,
        })
    }
}
