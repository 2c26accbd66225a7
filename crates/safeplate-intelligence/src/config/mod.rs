// ABOUTME: Scoring configuration for recipe suggestions with environment overrides
// ABOUTME: Global read-only instance, validated once, falling back to defaults on error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

//! Recipe Suggestion Scoring Configuration
//!
//! Weights used by the suggestion scorer. Defaults reproduce the behavior of the
//! mobile application; each weight can be overridden through the environment.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static SCORING_CONFIG: OnceLock<ScoringConfig> = OnceLock::new();

/// Weights for the recipe suggestion score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Multiplier applied to the ingredient coverage fraction
    pub coverage_scale: f64,
    /// Coverage fraction at or above which the coverage bonus applies
    pub coverage_bonus_threshold: f64,
    /// Flat bonus for recipes mostly covered by the inventory
    pub coverage_bonus: f64,
    /// Bonus when a dietary preference keyword appears in the recipe
    pub preference_bonus: f64,
    /// Bonus when the recipe cuisine is one of the favorites
    pub cuisine_bonus: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            coverage_scale: 5.0,
            coverage_bonus_threshold: 0.75,
            coverage_bonus: 3.0,
            preference_bonus: 3.0,
            cuisine_bonus: 2.0,
        }
    }
}

impl ScoringConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        SCORING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load scoring config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is outside `[0, 1]` or any weight is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.coverage_bonus_threshold) {
            return Err(ConfigError::InvalidRange(
                "coverage_bonus_threshold must be between 0 and 1",
            ));
        }

        let weights = [
            self.coverage_scale,
            self.coverage_bonus,
            self.preference_bonus,
            self.cuisine_bonus,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "scoring weights must be finite and non-negative",
            ));
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable does not parse as a number
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("SAFEPLATE_SCORE_COVERAGE_SCALE", &mut self.coverage_scale)?;
        Self::apply_env_var(
            "SAFEPLATE_SCORE_COVERAGE_THRESHOLD",
            &mut self.coverage_bonus_threshold,
        )?;
        Self::apply_env_var("SAFEPLATE_SCORE_COVERAGE_BONUS", &mut self.coverage_bonus)?;
        Self::apply_env_var(
            "SAFEPLATE_SCORE_PREFERENCE_BONUS",
            &mut self.preference_bonus,
        )?;
        Self::apply_env_var("SAFEPLATE_SCORE_CUISINE_BONUS", &mut self.cuisine_bonus)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let config = ScoringConfig {
            coverage_bonus_threshold: 1.5,
            ..ScoringConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let config = ScoringConfig {
            cuisine_bonus: -1.0,
            ..ScoringConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    #[serial]
    fn test_env_override_applied() {
        env::set_var("SAFEPLATE_SCORE_CUISINE_BONUS", "4.5");
        let config = ScoringConfig::load();
        env::remove_var("SAFEPLATE_SCORE_CUISINE_BONUS");

        let config = config.unwrap();
        assert!((config.cuisine_bonus - 4.5).abs() < f64::EPSILON);
        assert!((config.preference_bonus - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_unparseable_env_value_is_an_error() {
        env::set_var("SAFEPLATE_SCORE_COVERAGE_SCALE", "lots");
        let result = ScoringConfig::load();
        env::remove_var("SAFEPLATE_SCORE_COVERAGE_SCALE");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
