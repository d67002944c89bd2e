//! User-defined extraction rules.

use serde::{Deserialize, Serialize};

/// A TOML-defined extraction rule, appended after the built-in rules.
///
/// ```toml
/// [[rules]]
/// tag = "percent_of"
/// pattern = '(?P<value>[0-9]+(?:\.[0-9]+)?)\s*percent'
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Name reported as the `pattern_tag` of values this rule extracts.
    pub tag: String,
    /// Regex with a named `value` capture group holding the numeric literal.
    pub pattern: String,
    /// Per-rule snippet size; falls back to the detector's `context_window`.
    #[serde(default)]
    pub context_window: Option<usize>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl RuleConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}
