//! # quizcheck-consistency
//!
//! Flags question records whose worked solution states a number that
//! disagrees with the declared answer.
//!
//! ## Pipeline (per record)
//! 1. **Extraction**: contextual regex rules pull candidate values from the text
//! 2. **Judgment**: candidates equal to the declared answer or within the
//!    rounding tolerance are dropped
//! 3. **Intermediate filtering**: configured intermediates and arithmetic
//!    operands are dropped
//! 4. **Severity**: the remaining conflicts are tiered by percentage difference
//!
//! The [`ConsistencyDetector`] drives the pipeline over a record sequence and
//! returns a fresh [`DetectionReport`](quizcheck_core::DetectionReport) per call.

pub mod detector;
pub mod extraction;
pub mod intermediate;
pub mod judge;
pub mod severity;

pub use detector::{detect, ConsistencyDetector, RecordOutcome};
pub use extraction::{Extraction, ExtractionRule, ValueExtractor};
pub use intermediate::{IntermediateFilter, SuppressionReason};
pub use judge::{ContradictionJudge, Verdict};
