use serde::{Deserialize, Serialize};

/// Counters accumulated over one detection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub questions_analyzed: usize,
    pub values_extracted: usize,
    pub contradictions_found: usize,
    /// Records with a missing field or an unparseable declared answer.
    pub questions_skipped: usize,
    /// Analyzed records whose text or match count hit an extraction cap.
    pub extraction_overflows: usize,
}

impl ProcessingStats {
    /// Fold another run's counters into this one.
    pub fn merge(&mut self, other: &ProcessingStats) {
        self.questions_analyzed += other.questions_analyzed;
        self.values_extracted += other.values_extracted;
        self.contradictions_found += other.contradictions_found;
        self.questions_skipped += other.questions_skipped;
        self.extraction_overflows += other.extraction_overflows;
    }
}
