//! Span definitions for detection runs.

/// Create a span covering one detection run.
#[macro_export]
macro_rules! detection_span {
    ($record_count:expr) => {
        tracing::info_span!(
            $crate::tracing_setup::spans::names::DETECTION,
            record_count = $record_count
        )
    };
}

/// Create a span covering the analysis of one question record.
#[macro_export]
macro_rules! record_span {
    ($index:expr) => {
        tracing::debug_span!($crate::tracing_setup::spans::names::RECORD, index = $index)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const DETECTION: &str = "quizcheck.detection";
    pub const RECORD: &str = "quizcheck.record";
}
