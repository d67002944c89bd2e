use serde::{Deserialize, Serialize};

use crate::errors::RecordError;

/// A generated question as supplied by the caller.
///
/// Field aliases accept the shapes question banks are usually exported in
/// (`answer`/`correct_answer`, `feedback`/`solution`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Position in the input sequence.
    #[serde(default)]
    pub index: usize,
    /// Optional caller identifier, carried into the report.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "answer", alias = "correct_answer")]
    pub declared_answer: Option<String>,
    #[serde(default, alias = "feedback", alias = "solution")]
    pub solution_text: Option<String>,
}

impl QuestionRecord {
    pub fn new(
        index: usize,
        declared_answer: impl Into<String>,
        solution_text: impl Into<String>,
    ) -> Self {
        Self {
            index,
            id: None,
            declared_answer: Some(declared_answer.into()),
            solution_text: Some(solution_text.into()),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Parse the declared answer as a finite real number.
    pub fn parse_declared(&self) -> Result<f64, RecordError> {
        let raw = self
            .declared_answer
            .as_deref()
            .ok_or(RecordError::MissingField {
                index: self.index,
                field: "declared_answer",
            })?;

        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(RecordError::UnparseableDeclaredAnswer {
                index: self.index,
                raw: raw.to_string(),
            }),
        }
    }

    /// The declared value and solution text, or why the record cannot be analyzed.
    pub fn analyzable(&self) -> Result<(f64, &str), RecordError> {
        let declared = self.parse_declared()?;
        let text = self
            .solution_text
            .as_deref()
            .ok_or(RecordError::MissingField {
                index: self.index,
                field: "solution_text",
            })?;
        Ok((declared, text))
    }
}
