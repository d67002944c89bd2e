/// quizcheck version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default fraction of the declared value treated as benign rounding.
pub const DEFAULT_TOLERANCE_THRESHOLD: f64 = 0.05;

/// Default absolute tolerance for value equality and deduplication.
pub const DEFAULT_EPSILON: f64 = 1e-3;

/// Default snippet size captured on each side of a match (characters).
pub const DEFAULT_CONTEXT_WINDOW: usize = 30;

/// Default cap on the number of characters scanned per solution text.
pub const DEFAULT_MAX_SCAN_CHARS: usize = 20_000;

/// Default cap on matches taken from a single rule per record.
pub const DEFAULT_MAX_MATCHES_PER_RULE: usize = 64;

/// Percentage difference above which a contradiction is severe.
pub const SEVERE_THRESHOLD_PCT: f64 = 20.0;

/// Percentage difference at or above which a contradiction is moderate.
pub const MODERATE_THRESHOLD_PCT: f64 = 10.0;

/// Maximum characters of context shown per block in the rendered report.
pub const RENDERED_CONTEXT_CHARS: usize = 80;

/// Line emitted by the renderer when a run found nothing.
pub const NONE_FOUND_LINE: &str = "No mathematical contradictions found.";

/// Environment variable read by [`crate::tracing_setup::init_tracing`].
pub const LOG_ENV_VAR: &str = "QUIZCHECK_LOG";
