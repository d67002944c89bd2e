//! # quizcheck-core
//!
//! Foundation crate for the quizcheck consistency engine.
//! Defines the question/report data model, errors, detector configuration,
//! constants, and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::{DetectorConfig, ReportingMode, RuleConfig};
pub use errors::{ConfigError, RecordError};
pub use models::{
    Contradiction, ContradictionContexts, DetectionReport, ExtractedValue, ProcessingStats,
    QuestionRecord, Severity,
};
