//! Detector configuration with file + environment resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::RuleConfig;
use crate::constants;
use crate::errors::ConfigError;

/// How many contradictions a single record may contribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportingMode {
    /// Every qualifying candidate, in extraction order.
    #[default]
    Aggregated,
    /// Only the first qualifying candidate.
    FirstOnly,
}

impl std::str::FromStr for ReportingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aggregated" => Ok(Self::Aggregated),
            "first_only" | "first-only" => Ok(Self::FirstOnly),
            other => Err(format!("unknown reporting mode '{other}'")),
        }
    }
}

/// Configuration for the consistency detector.
///
/// Treated as immutable once a detector is built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Differences at or below this fraction of the declared value are rounding.
    pub tolerance_threshold: f64,
    /// Values that are always suppressed as expected intermediates.
    pub intermediate_values: Vec<f64>,
    /// Absolute tolerance for equality and deduplication.
    pub epsilon: f64,
    /// Snippet characters captured on each side of a match.
    pub context_window: usize,
    /// Characters of solution text scanned before truncation.
    pub max_scan_chars: usize,
    /// Matches taken from a single rule before it stops.
    pub max_matches_per_rule: usize,
    pub reporting_mode: ReportingMode,
    /// Whether the built-in extraction rules run ahead of `rules`.
    pub use_builtin_rules: bool,
    /// Extra extraction rules, applied after the built-ins in order.
    pub rules: Vec<RuleConfig>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            tolerance_threshold: constants::DEFAULT_TOLERANCE_THRESHOLD,
            intermediate_values: Vec::new(),
            epsilon: constants::DEFAULT_EPSILON,
            context_window: constants::DEFAULT_CONTEXT_WINDOW,
            max_scan_chars: constants::DEFAULT_MAX_SCAN_CHARS,
            max_matches_per_rule: constants::DEFAULT_MAX_MATCHES_PER_RULE,
            reporting_mode: ReportingMode::default(),
            use_builtin_rules: true,
            rules: Vec::new(),
        }
    }
}

impl DetectorConfig {
    /// Load configuration.
    ///
    /// Resolution order (highest priority first):
    /// 1. Environment variables (`QUIZCHECK_*`)
    /// 2. The TOML file at `path`, if given
    /// 3. Compiled defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file without applying environment overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.tolerance_threshold) {
            return Err(invalid("tolerance_threshold", "must be between 0.0 and 1.0"));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(invalid("epsilon", "must be a finite value greater than 0"));
        }
        if self.max_scan_chars == 0 {
            return Err(invalid("max_scan_chars", "must be greater than 0"));
        }
        if self.max_matches_per_rule == 0 {
            return Err(invalid("max_matches_per_rule", "must be greater than 0"));
        }
        if self.intermediate_values.iter().any(|v| !v.is_finite()) {
            return Err(invalid("intermediate_values", "must all be finite"));
        }
        if !self.use_builtin_rules && !self.rules.iter().any(RuleConfig::is_enabled) {
            return Err(invalid(
                "rules",
                "at least one rule must be enabled when built-in rules are off",
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `QUIZCHECK_TOLERANCE_THRESHOLD`, `QUIZCHECK_EPSILON`, etc.
    /// `QUIZCHECK_INTERMEDIATE_VALUES` is a comma-separated list. Custom
    /// `rules` are file-only. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = env_parse::<f64>("QUIZCHECK_TOLERANCE_THRESHOLD") {
            self.tolerance_threshold = v;
        }
        if let Some(v) = env_parse::<f64>("QUIZCHECK_EPSILON") {
            self.epsilon = v;
        }
        if let Some(v) = env_parse::<usize>("QUIZCHECK_CONTEXT_WINDOW") {
            self.context_window = v;
        }
        if let Some(v) = env_parse::<usize>("QUIZCHECK_MAX_SCAN_CHARS") {
            self.max_scan_chars = v;
        }
        if let Some(v) = env_parse::<usize>("QUIZCHECK_MAX_MATCHES_PER_RULE") {
            self.max_matches_per_rule = v;
        }
        if let Some(v) = env_parse::<ReportingMode>("QUIZCHECK_REPORTING_MODE") {
            self.reporting_mode = v;
        }
        if let Some(v) = env_parse::<bool>("QUIZCHECK_USE_BUILTIN_RULES") {
            self.use_builtin_rules = v;
        }
        if let Some(v) = env_list::<f64>("QUIZCHECK_INTERMEDIATE_VALUES") {
            self.intermediate_values = v;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// All-or-nothing: one bad element ignores the whole variable.
fn env_list<T: std::str::FromStr>(key: &str) -> Option<Vec<T>> {
    let raw = std::env::var(key).ok()?;
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse().ok())
        .collect()
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
