//! Candidate value extraction from worked-solution text.
//!
//! Rules run in priority order over a length-capped copy of the text; their
//! matches are unioned and values within epsilon of an earlier one are dropped.

pub mod rules;

use quizcheck_core::config::DetectorConfig;
use quizcheck_core::errors::ConfigError;
use quizcheck_core::models::ExtractedValue;
use tracing::warn;

pub use rules::{builtin_rules, ExtractionRule};

/// Deduplicated candidates from one text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub values: Vec<ExtractedValue>,
    /// The text or a rule's match count hit a cap; `values` is partial.
    pub overflowed: bool,
}

/// Applies an ordered rule list to solution text.
#[derive(Debug, Clone)]
pub struct ValueExtractor {
    rules: Vec<ExtractionRule>,
    epsilon: f64,
    max_scan_chars: usize,
    max_matches_per_rule: usize,
}

impl ValueExtractor {
    pub fn new(
        rules: Vec<ExtractionRule>,
        epsilon: f64,
        max_scan_chars: usize,
        max_matches_per_rule: usize,
    ) -> Self {
        Self {
            rules,
            epsilon,
            max_scan_chars,
            max_matches_per_rule,
        }
    }

    /// Built-in rules (unless disabled) followed by the enabled custom rules.
    pub fn from_config(config: &DetectorConfig) -> Result<Self, ConfigError> {
        let mut rules = if config.use_builtin_rules {
            builtin_rules(config.context_window)
        } else {
            Vec::new()
        };
        for def in config.rules.iter().filter(|r| r.is_enabled()) {
            rules.push(ExtractionRule::from_config(def, config.context_window)?);
        }

        Ok(Self::new(
            rules,
            config.epsilon,
            config.max_scan_chars,
            config.max_matches_per_rule,
        ))
    }

    pub fn rules(&self) -> &[ExtractionRule] {
        &self.rules
    }

    pub fn extract(&self, text: &str) -> Extraction {
        let mut extraction = Extraction::default();
        if text.trim().is_empty() {
            return extraction;
        }

        let (text, truncated) = truncate_chars(text, self.max_scan_chars);
        if truncated {
            warn!(
                max_scan_chars = self.max_scan_chars,
                "solution text truncated before extraction"
            );
            extraction.overflowed = true;
        }

        for rule in &self.rules {
            let (matches, capped) = rule.find(text, self.max_matches_per_rule);
            if capped {
                warn!(
                    rule = rule.tag(),
                    max_matches = self.max_matches_per_rule,
                    "extraction rule hit its match cap"
                );
                extraction.overflowed = true;
            }

            for m in matches {
                let Some(value) = parse_literal(m.literal) else {
                    continue;
                };
                if extraction
                    .values
                    .iter()
                    .any(|seen| (seen.value - value).abs() < self.epsilon)
                {
                    continue;
                }

                let (lo, hi) = window_bounds(text, m.match_start, m.match_end, rule.context_window());
                extraction.values.push(ExtractedValue {
                    value,
                    context: text[lo..hi].to_string(),
                    pattern_tag: rule.tag().to_string(),
                    literal: m.literal.to_string(),
                    literal_offset: m.literal_start - lo,
                });
            }
        }

        extraction
    }
}

/// Parse a matched literal, dropping digit-group commas and folding a
/// `× 10^n` scale (or a bare `10^n`) into the value.
fn parse_literal(literal: &str) -> Option<f64> {
    let literal = literal.replace(',', "").replace('−', "-");
    let normalized = match literal.split_once("10^") {
        Some((head, exponent)) => {
            let exponent = exponent.trim_start_matches('{').trim_end_matches('}');
            let mantissa = match head.trim_end() {
                "" => "1",
                "-" => "-1",
                head => head
                    .strip_suffix(['×', '*', 'x', '·'])
                    .or_else(|| head.strip_suffix(r"\times"))?
                    .trim_end(),
            };
            format!("{mantissa}e{exponent}")
        }
        None => literal,
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Cut `text` to at most `max_chars` characters.
fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => (&text[..cut], true),
        None => (text, false),
    }
}

/// Byte range covering `window` characters either side of `start..end`.
fn window_bounds(text: &str, start: usize, end: usize, window: usize) -> (usize, usize) {
    let lo = text[..start]
        .char_indices()
        .rev()
        .take(window)
        .last()
        .map_or(start, |(i, _)| i);
    let hi = text[end..]
        .char_indices()
        .nth(window)
        .map_or(text.len(), |(i, _)| end + i);
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_clamped_to_text() {
        let text = "ab=12cd";
        assert_eq!(window_bounds(text, 2, 5, 1), (1, 6));
        assert_eq!(window_bounds(text, 2, 5, 30), (0, text.len()));
        assert_eq!(window_bounds(text, 2, 5, 0), (2, 5));
    }

    #[test]
    fn window_respects_char_boundaries() {
        let text = "ΩΩ=1ΩΩ";
        let start = text.find('=').unwrap();
        let end = start + 2;
        let (lo, hi) = window_bounds(text, start, end, 1);
        assert_eq!(&text[lo..hi], "Ω=1Ω");
    }

    #[test]
    fn truncation_counts_chars() {
        assert_eq!(truncate_chars("ΩΩΩ", 2), ("ΩΩ", true));
        assert_eq!(truncate_chars("abc", 3), ("abc", false));
    }

    #[test]
    fn grouped_and_scaled_literals_parse() {
        assert_eq!(parse_literal("1,200"), Some(1200.0));
        assert_eq!(parse_literal("-12,345.5"), Some(-12345.5));
        assert_eq!(parse_literal("2.5 × 10^-3"), Some(0.0025));
        assert_eq!(parse_literal("3*10^{4}"), Some(30000.0));
        assert_eq!(parse_literal(r"6.02 \times 10^{23}"), Some(6.02e23));
        assert_eq!(parse_literal("10^−3"), Some(0.001));
        assert_eq!(parse_literal("-10^2"), Some(-100.0));
        assert_eq!(parse_literal("110^3"), None);
    }

    #[test]
    fn power_of_ten_is_one_value() {
        let extractor = ValueExtractor::new(builtin_rules(30), 1e-3, 1_000, 16);
        let values: Vec<(f64, String)> = extractor
            .extract("I = 2.5 × 10^-3 A, and the leak is 10^-6 A.")
            .values
            .into_iter()
            .map(|v| (v.value, v.literal))
            .collect();
        assert_eq!(
            values,
            vec![
                (0.0025, "2.5 × 10^-3".to_string()),
                (1e-6, "10^-6".to_string()),
            ]
        );
    }

    #[test]
    fn comma_grouped_number_is_one_value() {
        let extractor = ValueExtractor::new(builtin_rules(30), 1e-3, 1_000, 16);
        let values: Vec<f64> = extractor
            .extract("P = 1,200 W")
            .values
            .iter()
            .map(|v| v.value)
            .collect();
        assert_eq!(values, vec![1200.0]);
    }

    #[test]
    fn non_finite_literals_are_dropped() {
        assert_eq!(parse_literal("1e999"), None);
        assert_eq!(parse_literal("-2.5"), Some(-2.5));
    }
}
