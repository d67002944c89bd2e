use serde::{Deserialize, Serialize};

/// A number pulled from solution text by an extraction rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedValue {
    pub value: f64,
    /// Snippet of the solution text surrounding the match.
    pub context: String,
    /// Tag of the rule that produced this value.
    pub pattern_tag: String,
    /// The numeric literal exactly as it appeared in the text.
    pub literal: String,
    /// Byte offset of `literal` inside `context`.
    pub literal_offset: usize,
}

impl ExtractedValue {
    /// Context text preceding the literal.
    pub fn before_literal(&self) -> &str {
        self.context.get(..self.literal_offset).unwrap_or("")
    }

    /// Context text following the literal.
    pub fn after_literal(&self) -> &str {
        self.context
            .get(self.literal_offset + self.literal.len()..)
            .unwrap_or("")
    }
}
