//! ConsistencyDetector: drives extraction and judgment over a record
//! sequence and aggregates a fresh report per call.

use quizcheck_core::config::DetectorConfig;
use quizcheck_core::errors::{ConfigError, RecordError};
use quizcheck_core::models::{Contradiction, DetectionReport, ProcessingStats, QuestionRecord};
use quizcheck_core::{detection_span, record_span};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::extraction::ValueExtractor;
use crate::judge::ContradictionJudge;

/// What happened to a single record.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    Skipped(RecordError),
    Analyzed {
        values_extracted: usize,
        overflowed: bool,
        contradictions: Vec<Contradiction>,
    },
}

/// Detector built once from a validated config. Holds no run state, so a
/// single instance can serve concurrent `detect` calls.
#[derive(Debug, Clone)]
pub struct ConsistencyDetector {
    config: DetectorConfig,
    extractor: ValueExtractor,
    judge: ContradictionJudge,
}

impl ConsistencyDetector {
    pub fn new(config: DetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let extractor = ValueExtractor::from_config(&config)?;
        let judge = ContradictionJudge::from_config(&config);
        Ok(Self {
            config,
            extractor,
            judge,
        })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn extractor(&self) -> &ValueExtractor {
        &self.extractor
    }

    /// Analyze one record.
    pub fn analyze(&self, record: &QuestionRecord) -> RecordOutcome {
        let _span = record_span!(record.index).entered();

        let (declared, text) = match record.analyzable() {
            Ok(parts) => parts,
            Err(e) => {
                debug!(error = %e, "skipping record");
                return RecordOutcome::Skipped(e);
            }
        };

        let extraction = self.extractor.extract(text);
        let contradictions = self.judge.judge(record, declared, &extraction.values);
        debug!(
            values = extraction.values.len(),
            contradictions = contradictions.len(),
            "record analyzed"
        );

        RecordOutcome::Analyzed {
            values_extracted: extraction.values.len(),
            overflowed: extraction.overflowed,
            contradictions,
        }
    }

    /// Run detection over `records` sequentially.
    pub fn detect(&self, records: &[QuestionRecord]) -> DetectionReport {
        let _span = detection_span!(records.len()).entered();
        let outcomes = records.iter().map(|r| self.analyze(r));
        finish(aggregate(outcomes))
    }

    /// Run detection with records analyzed in parallel.
    ///
    /// Outcomes are merged in input order, so the report equals [`detect`](Self::detect).
    pub fn detect_parallel(&self, records: &[QuestionRecord]) -> DetectionReport {
        let _span = detection_span!(records.len()).entered();
        let outcomes: Vec<RecordOutcome> = records.par_iter().map(|r| self.analyze(r)).collect();
        finish(aggregate(outcomes))
    }
}

/// One-shot detection with a throwaway detector.
pub fn detect(
    records: &[QuestionRecord],
    config: DetectorConfig,
) -> Result<DetectionReport, ConfigError> {
    Ok(ConsistencyDetector::new(config)?.detect(records))
}

fn aggregate(outcomes: impl IntoIterator<Item = RecordOutcome>) -> DetectionReport {
    let mut report = DetectionReport::default();
    for outcome in outcomes {
        match outcome {
            RecordOutcome::Skipped(_) => report.stats.questions_skipped += 1,
            RecordOutcome::Analyzed {
                values_extracted,
                overflowed,
                contradictions,
            } => {
                report.stats.questions_analyzed += 1;
                report.stats.values_extracted += values_extracted;
                if overflowed {
                    report.stats.extraction_overflows += 1;
                }
                report.contradictions.extend(contradictions);
            }
        }
    }
    report.stats.contradictions_found = report.contradictions.len();
    report
}

fn finish(report: DetectionReport) -> DetectionReport {
    let ProcessingStats {
        questions_analyzed,
        values_extracted,
        contradictions_found,
        questions_skipped,
        extraction_overflows,
    } = report.stats;
    info!(
        questions_analyzed,
        values_extracted,
        contradictions_found,
        questions_skipped,
        extraction_overflows,
        "detection complete"
    );
    report
}
