//! # Grading Scheme
//!
//! The weighting scheme behind the calculation: two known components at
//! 33% each, the final component at 34%, passing average 3.0 on a 0–5
//! scale. Those are the compiled defaults; deployments can override them
//! from a small TOML file.
//!
//! - Loads from TOML config, path via `GRADE_SCHEME_PATH` or
//!   `config/grading.toml`.
//! - Falls back to the built-in defaults when the file is missing or
//!   malformed (with a warning), so the binary always starts.
//! - Validates that the weights cover the whole grade and that the final
//!   component actually carries weight.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

/// Default config path, relative to the runtime working dir.
pub const DEFAULT_SCHEME_PATH: &str = "config/grading.toml";
/// Env var overriding the config path.
pub const ENV_SCHEME_PATH: &str = "GRADE_SCHEME_PATH";

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights and passing threshold for a three-component grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradingScheme {
    /// Average needed to pass, on the same 0–5 scale as the scores.
    #[serde(default = "default_passing_average")]
    pub passing_average: f64,
    /// Weight of the first known component.
    #[serde(default = "default_weight_known")]
    pub weight_first: f64,
    /// Weight of the second known component.
    #[serde(default = "default_weight_known")]
    pub weight_second: f64,
    /// Weight of the final, still-ungraded component.
    #[serde(default = "default_weight_final")]
    pub weight_third: f64,
}

fn default_passing_average() -> f64 {
    3.0
}

fn default_weight_known() -> f64 {
    0.33
}

fn default_weight_final() -> f64 {
    0.34
}

impl Default for GradingScheme {
    fn default() -> Self {
        Self {
            passing_average: default_passing_average(),
            weight_first: default_weight_known(),
            weight_second: default_weight_known(),
            weight_third: default_weight_final(),
        }
    }
}

impl GradingScheme {
    /// Parse and validate a scheme from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let scheme: Self = toml::from_str(s).context("parse grading scheme TOML")?;
        scheme.validate()?;
        Ok(scheme)
    }

    /// Load a scheme from a TOML file, falling back to the compiled
    /// defaults on any error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => Self::from_toml_str(&s).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "bad grading scheme config, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Load from `GRADE_SCHEME_PATH` if set, otherwise the default path.
    pub fn load() -> Self {
        let path =
            std::env::var(ENV_SCHEME_PATH).unwrap_or_else(|_| DEFAULT_SCHEME_PATH.to_string());
        Self::load_from_file(path)
    }

    /// A scheme is usable when its weights sum to the whole grade and the
    /// final component carries positive weight (the formula divides by it).
    pub fn validate(&self) -> Result<()> {
        let sum = self.weight_first + self.weight_second + self.weight_third;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            bail!("component weights must sum to 1.0, got {sum}");
        }
        if self.weight_third <= 0.0 {
            bail!("final component weight must be positive, got {}", self.weight_third);
        }
        if self.weight_first < 0.0 || self.weight_second < 0.0 {
            bail!("component weights must not be negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let s = GradingScheme::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.passing_average, 3.0);
        assert_eq!(s.weight_third, 0.34);
    }

    #[test]
    fn parses_full_toml() {
        let s = GradingScheme::from_toml_str(
            r#"
            passing_average = 3.5
            weight_first = 0.3
            weight_second = 0.3
            weight_third = 0.4
            "#,
        )
        .unwrap();
        assert_eq!(s.passing_average, 3.5);
        assert_eq!(s.weight_third, 0.4);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let s = GradingScheme::from_toml_str("passing_average = 2.5").unwrap();
        assert_eq!(s.passing_average, 2.5);
        assert_eq!(s.weight_first, 0.33);
        assert_eq!(s.weight_third, 0.34);
    }

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let err = GradingScheme::from_toml_str(
            r#"
            weight_first = 0.5
            weight_second = 0.5
            weight_third = 0.5
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn rejects_zero_final_weight() {
        let err = GradingScheme::from_toml_str(
            r#"
            weight_first = 0.5
            weight_second = 0.5
            weight_third = 0.0
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let s = GradingScheme::load_from_file("definitely/not/here.toml");
        assert_eq!(s, GradingScheme::default());
    }
}
