/// Reasons a question record cannot be analyzed.
///
/// These never escape a detection run: the detector counts the record as
/// skipped and moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("question {index}: missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("question {index}: declared answer '{raw}' is not a real number")]
    UnparseableDeclaredAnswer { index: usize, raw: String },
}

impl RecordError {
    /// Index of the record that failed.
    pub fn index(&self) -> usize {
        match self {
            Self::MissingField { index, .. } | Self::UnparseableDeclaredAnswer { index, .. } => {
                *index
            }
        }
    }
}
