// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Covers AppConfig, LoggingConfig and scoring weight overrides; serialized on env access
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

use std::env;
use std::path::PathBuf;

use safeplate::config::environment::{EXPIRY_WARNING_DAYS_VAR, RECIPES_PATH_VAR};
use safeplate::config::{AppConfig, Environment, LogLevel, ScoringConfig};
use safeplate::errors::ErrorCode;
use safeplate::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const APP_VARS: &[&str] = &[
    "ENVIRONMENT",
    "RUST_LOG",
    "LOG_FORMAT",
    "LOG_INCLUDE_LOCATION",
    "SERVICE_NAME",
    RECIPES_PATH_VAR,
    EXPIRY_WARNING_DAYS_VAR,
];

fn clear_app_env() {
    for var in APP_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// AppConfig
// ============================================================================

#[test]
#[serial]
fn test_app_config_defaults() {
    clear_app_env();

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.recipes_path, None);
    assert_eq!(config.expiry_warning_days, 3);
}

#[test]
#[serial]
fn test_app_config_reads_environment() {
    clear_app_env();
    env::set_var("ENVIRONMENT", "prod");
    env::set_var("RUST_LOG", "DEBUG");
    env::set_var(RECIPES_PATH_VAR, "/data/recipes.json");
    env::set_var(EXPIRY_WARNING_DAYS_VAR, " 7 ");

    let config = AppConfig::from_env();
    clear_app_env();

    let config = config.unwrap();
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(
        config.recipes_path,
        Some(PathBuf::from("/data/recipes.json"))
    );
    assert_eq!(config.expiry_warning_days, 7);
}

#[test]
#[serial]
fn test_blank_recipes_path_is_ignored() {
    clear_app_env();
    env::set_var(RECIPES_PATH_VAR, "   ");

    let config = AppConfig::from_env();
    clear_app_env();

    assert_eq!(config.unwrap().recipes_path, None);
}

#[test]
#[serial]
fn test_invalid_expiry_window_is_config_error() {
    clear_app_env();
    env::set_var(EXPIRY_WARNING_DAYS_VAR, "-2");

    let result = AppConfig::from_env();
    clear_app_env();

    let error = result.unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains(EXPIRY_WARNING_DAYS_VAR));
}

#[test]
fn test_enum_parsing_falls_back() {
    assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    assert_eq!(Environment::from_str_or_default("TEST"), Environment::Testing);
    assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
    assert_eq!(LogLevel::from_str_or_default("warning"), LogLevel::Warn);
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}

// ============================================================================
// LoggingConfig
// ============================================================================

#[test]
#[serial]
fn test_logging_defaults_are_quiet_and_compact() {
    clear_app_env();

    let logging = LoggingConfig::from_env();

    assert_eq!(logging.level, "warn");
    assert_eq!(logging.format, LogFormat::Compact);
    assert!(!logging.include_location);
    assert_eq!(logging.service_name, "safeplate");
}

#[test]
#[serial]
fn test_production_logging_uses_json_with_location() {
    clear_app_env();
    env::set_var("ENVIRONMENT", "production");

    let logging = LoggingConfig::from_env();
    clear_app_env();

    assert_eq!(logging.format, LogFormat::Json);
    assert!(logging.include_location);
    assert!(logging.environment.is_production());
}

#[test]
#[serial]
fn test_verbose_raises_level_unless_rust_log_is_set() {
    clear_app_env();
    let raised = LoggingConfig::from_env().with_minimum_level(LogLevel::Debug);
    assert_eq!(raised.level, "debug");

    env::set_var("RUST_LOG", "error");
    let pinned = LoggingConfig::from_env().with_minimum_level(LogLevel::Debug);
    clear_app_env();
    assert_eq!(pinned.level, "error");
}

#[test]
fn test_minimum_level_never_lowers_verbosity() {
    let config = LoggingConfig {
        level: "trace".to_owned(),
        ..LoggingConfig::default()
    };

    // Only applies when RUST_LOG is unset; trace already exceeds debug either way
    assert_eq!(config.with_minimum_level(LogLevel::Debug).level, "trace");
}

// ============================================================================
// ScoringConfig
// ============================================================================

#[test]
#[serial]
fn test_scoring_overrides_from_environment() {
    env::set_var("SAFEPLATE_SCORE_PREFERENCE_BONUS", "5");
    env::set_var("SAFEPLATE_SCORE_COVERAGE_THRESHOLD", "0.5");

    let config = ScoringConfig::load();
    env::remove_var("SAFEPLATE_SCORE_PREFERENCE_BONUS");
    env::remove_var("SAFEPLATE_SCORE_COVERAGE_THRESHOLD");

    let config = config.unwrap();
    assert!((config.preference_bonus - 5.0).abs() < f64::EPSILON);
    assert!((config.coverage_bonus_threshold - 0.5).abs() < f64::EPSILON);
    assert!((config.coverage_scale - 5.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_scoring_threshold_above_one_fails_validation() {
    env::set_var("SAFEPLATE_SCORE_COVERAGE_THRESHOLD", "1.2");

    let result = ScoringConfig::load();
    env::remove_var("SAFEPLATE_SCORE_COVERAGE_THRESHOLD");

    assert!(result.is_err());
}
