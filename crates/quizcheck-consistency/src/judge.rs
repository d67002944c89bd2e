//! Declared answer vs. extracted candidates.
//!
//! Checks run cheapest first: equality, rounding tolerance, then the
//! intermediate filter. Whatever survives is a contradiction.

use quizcheck_core::config::{DetectorConfig, ReportingMode};
use quizcheck_core::models::{Contradiction, ContradictionContexts, ExtractedValue, QuestionRecord};
use tracing::trace;

use crate::intermediate::{IntermediateFilter, SuppressionReason};
use crate::severity;

/// Outcome of comparing one candidate with the declared value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Within epsilon of the declared value.
    SameValue,
    /// Within the rounding tolerance.
    Rounding { percentage_difference: f64 },
    /// Far off, but an expected intermediate.
    Intermediate {
        percentage_difference: f64,
        reason: SuppressionReason,
    },
    Conflict { percentage_difference: f64 },
}

#[derive(Debug, Clone)]
pub struct ContradictionJudge {
    tolerance_threshold: f64,
    epsilon: f64,
    mode: ReportingMode,
    filter: IntermediateFilter,
}

impl ContradictionJudge {
    pub fn new(
        tolerance_threshold: f64,
        epsilon: f64,
        mode: ReportingMode,
        filter: IntermediateFilter,
    ) -> Self {
        Self {
            tolerance_threshold,
            epsilon,
            mode,
            filter,
        }
    }

    pub fn from_config(config: &DetectorConfig) -> Self {
        Self::new(
            config.tolerance_threshold,
            config.epsilon,
            config.reporting_mode,
            IntermediateFilter::from_config(config),
        )
    }

    pub fn assess(&self, declared: f64, candidate: &ExtractedValue) -> Verdict {
        if (declared - candidate.value).abs() < self.epsilon {
            return Verdict::SameValue;
        }

        let pct = percentage_difference(declared, candidate.value, self.epsilon);
        if pct <= self.tolerance_threshold * 100.0 {
            return Verdict::Rounding {
                percentage_difference: pct,
            };
        }

        match self.filter.is_intermediate(candidate) {
            Some(reason) => Verdict::Intermediate {
                percentage_difference: pct,
                reason,
            },
            None => Verdict::Conflict {
                percentage_difference: pct,
            },
        }
    }

    /// Contradictions for one record, in candidate order.
    ///
    /// In [`ReportingMode::FirstOnly`] at most one is returned.
    pub fn judge(
        &self,
        record: &QuestionRecord,
        declared: f64,
        candidates: &[ExtractedValue],
    ) -> Vec<Contradiction> {
        let declared_context = candidates
            .iter()
            .find(|c| (declared - c.value).abs() < self.epsilon)
            .map(|c| c.context.clone());

        let mut contradictions = Vec::new();
        for candidate in candidates {
            let pct = match self.assess(declared, candidate) {
                Verdict::Conflict {
                    percentage_difference,
                } => percentage_difference,
                Verdict::Intermediate {
                    percentage_difference,
                    reason,
                } => {
                    trace!(
                        index = record.index,
                        value = candidate.value,
                        pct = percentage_difference,
                        ?reason,
                        "candidate suppressed as intermediate"
                    );
                    continue;
                }
                Verdict::SameValue | Verdict::Rounding { .. } => continue,
            };

            contradictions.push(Contradiction {
                question_index: record.index,
                question_id: record.id.clone(),
                declared_value: declared,
                conflicting_value: candidate.value,
                contexts: ContradictionContexts {
                    declared: declared_context.clone(),
                    found: candidate.context.clone(),
                },
                percentage_difference: pct,
                severity: severity::classify(pct),
                pattern_tag: candidate.pattern_tag.clone(),
                suggested_resolution: suggest_resolution(declared, candidate, pct),
            });

            if self.mode == ReportingMode::FirstOnly {
                break;
            }
        }

        contradictions
    }
}

/// `|declared - found| / max(|declared|, epsilon) * 100`, never negative.
pub fn percentage_difference(declared: f64, found: f64, epsilon: f64) -> f64 {
    (declared - found).abs() / declared.abs().max(epsilon) * 100.0
}

fn suggest_resolution(declared: f64, candidate: &ExtractedValue, pct: f64) -> String {
    format!(
        "Declared answer {declared} differs from {} ({}) in the worked solution by {pct:.1}%; \
         update the answer key or correct the explanation so they agree.",
        candidate.literal,
        candidate.pattern_tag.replace('_', " "),
    )
}
