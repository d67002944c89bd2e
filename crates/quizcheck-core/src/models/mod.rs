mod contradiction;
mod extracted_value;
mod question;
mod report;
mod severity;
mod stats;

pub use contradiction::{Contradiction, ContradictionContexts};
pub use extracted_value::ExtractedValue;
pub use question::QuestionRecord;
pub use report::DetectionReport;
pub use severity::Severity;
pub use stats::ProcessingStats;
