use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Contradiction, ProcessingStats, Severity};
use crate::constants::{NONE_FOUND_LINE, RENDERED_CONTEXT_CHARS};

/// Result of one detection run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Input record order, then extraction order within a record.
    pub contradictions: Vec<Contradiction>,
    pub stats: ProcessingStats,
}

impl DetectionReport {
    pub fn is_empty(&self) -> bool {
        self.contradictions.is_empty()
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.contradictions
            .iter()
            .filter(|c| c.severity == severity)
            .count()
    }

    /// Deterministic human-readable rendering.
    ///
    /// A run with no contradictions renders as a single line.
    pub fn render(&self) -> String {
        if self.contradictions.is_empty() {
            return NONE_FOUND_LINE.to_string();
        }

        let tiers: Vec<String> = Severity::ALL
            .iter()
            .rev()
            .map(|s| format!("{} {s}", self.count_by_severity(*s)))
            .collect();
        let mut out = format!(
            "Mathematical consistency report: {} analyzed, {} values extracted, {} contradiction(s) ({})",
            self.stats.questions_analyzed,
            self.stats.values_extracted,
            self.stats.contradictions_found,
            tiers.join(", "),
        );

        for c in &self.contradictions {
            match &c.question_id {
                Some(id) => out.push_str(&format!("\n\nQuestion {} ({id})", c.question_index)),
                None => out.push_str(&format!("\n\nQuestion {}", c.question_index)),
            }
            out.push_str(&format!(
                "\n  Values: declared {}, found {}",
                c.declared_value, c.conflicting_value
            ));
            out.push_str(&format!("\n  Difference: {:.1}%", c.percentage_difference));
            out.push_str(&format!("\n  Severity: {}", c.severity));
            out.push_str(&format!(
                "\n  Context: \"{}\"",
                truncate_context(c.contexts.first())
            ));
        }

        out
    }
}

impl fmt::Display for DetectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Flatten whitespace and cap the snippet length.
fn truncate_context(context: &str) -> String {
    let flat = context.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= RENDERED_CONTEXT_CHARS {
        return flat;
    }
    let mut cut: String = flat.chars().take(RENDERED_CONTEXT_CHARS).collect();
    cut.push_str("...");
    cut
}
