use serde::{Deserialize, Serialize};

use super::Severity;

/// Snippets on both sides of a conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContradictionContexts {
    /// Where the solution states the declared value, if it does.
    pub declared: Option<String>,
    /// Where the conflicting value was found.
    pub found: String,
}

impl ContradictionContexts {
    /// Declared-side snippet when present, else the found-side one.
    pub fn first(&self) -> &str {
        self.declared.as_deref().unwrap_or(&self.found)
    }
}

/// A value in the worked solution that disagrees with the declared answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contradiction {
    pub question_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    pub declared_value: f64,
    pub conflicting_value: f64,
    pub contexts: ContradictionContexts,
    /// Always non-negative.
    pub percentage_difference: f64,
    pub severity: Severity,
    /// Rule that extracted `conflicting_value`.
    pub pattern_tag: String,
    pub suggested_resolution: String,
}
