//! Extraction rules: a tagged regex with a `value` capture group.
//!
//! Built-in rules in priority order:
//! 1. `assignment`: `V_T = 0.8116`
//! 2. `approximation`: `≈ 0.812`, `approx. 3.1`
//! 3. `final_answer`: `Final answer: V_T = 0.776`
//! 4. `unit_suffix`: `0.8116 V`, `12 %`

use std::sync::LazyLock;

use quizcheck_core::config::RuleConfig;
use quizcheck_core::errors::ConfigError;
use regex::Regex;

/// Numeric literal shared by the built-in rules: a bare power of ten
/// (`10^-3`), or a plain or comma-grouped number (`1,200`) with an optional
/// `e` exponent and an optional `× 10^n` scale.
macro_rules! number {
    () => {
        concat!(
            r"-?(?:10\^\{?[-+−]?[0-9]+\}?|(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]+)?",
            r"(?:[eE][-+]?[0-9]+)?(?:\s*(?:×|\*|x|·|\\times)\s*10\^\{?[-+−]?[0-9]+\}?)?)"
        )
    };
}

/// Unit tokens recognised after a number.
macro_rules! unit {
    () => {
        r"(?:(?:kV|mV|V|kA|mA|A|kW|mW|W|kJ|J|kN|N|kPa|Pa|MHz|kHz|Hz|km|cm|mm|m|kg|mg|g|ms|s|K|mol|mL|L|ohms?)\b|Ω|%|°C)"
    };
}

/// Name of the capture group every rule must expose.
pub const VALUE_GROUP: &str = "value";

pub mod tags {
    pub const ASSIGNMENT: &str = "assignment";
    pub const APPROXIMATION: &str = "approximation";
    pub const FINAL_ANSWER: &str = "final_answer";
    pub const UNIT_SUFFIX: &str = "unit_suffix";
}

static ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:^|[^\w.^{])\\?[A-Za-z][A-Za-z0-9_{}^']*\s*=\s*(?P<value>",
        number!(),
        r")"
    ))
    .unwrap()
});

static APPROXIMATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(?:≈|~|\\approx|\\sim|\bapproximately|\bapprox\.?)\s*(?P<value>",
        number!(),
        r")"
    ))
    .unwrap()
});

/// Phrase, then up to three tokens, then a separator before the number so a
/// digit inside a symbol name (`V2`) is never taken as the answer.
static FINAL_ANSWER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:final\s+answer|the\s+answer\s+is|final\s+result)\b",
        r"(?:\s*\S+?){0,3}?(?:\s+|\s*[:=($]\s*)(?P<value>",
        number!(),
        r")"
    ))
    .unwrap()
});

/// The left boundary excludes `^`, `{` and signs so an exponent such as the
/// `-3` in `10^-3 A` is never read on its own.
static UNIT_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:^|[^\w.^{+\-−])(?P<value>",
        number!(),
        r")\s?",
        unit!()
    ))
    .unwrap()
});

/// A unit token at the very start of a string.
pub(crate) static LEADING_UNIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(concat!(r"^", unit!())).unwrap());

/// One extraction rule: matcher, snippet size, and tag.
#[derive(Debug, Clone)]
pub struct ExtractionRule {
    tag: String,
    regex: Regex,
    context_window: usize,
}

/// A numeric literal located by a rule.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RuleMatch<'t> {
    pub match_start: usize,
    pub match_end: usize,
    pub literal_start: usize,
    pub literal: &'t str,
}

impl ExtractionRule {
    /// Compile a rule. The pattern must contain a `value` capture group.
    pub fn new(
        tag: impl Into<String>,
        pattern: &str,
        context_window: usize,
    ) -> Result<Self, ConfigError> {
        let tag = tag.into();
        let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
            tag: tag.clone(),
            message: e.to_string(),
        })?;
        Self::from_regex(tag, regex, context_window)
    }

    /// Compile a rule from its TOML definition.
    pub fn from_config(def: &RuleConfig, default_window: usize) -> Result<Self, ConfigError> {
        Self::new(
            def.tag.clone(),
            &def.pattern,
            def.context_window.unwrap_or(default_window),
        )
    }

    fn from_regex(tag: String, regex: Regex, context_window: usize) -> Result<Self, ConfigError> {
        if !regex.capture_names().flatten().any(|n| n == VALUE_GROUP) {
            return Err(ConfigError::MissingValueGroup { tag });
        }
        Ok(Self {
            tag,
            regex,
            context_window,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn context_window(&self) -> usize {
        self.context_window
    }

    /// Find up to `limit` literals in `text`. The flag is set when more exist.
    pub(crate) fn find<'t>(&self, text: &'t str, limit: usize) -> (Vec<RuleMatch<'t>>, bool) {
        let mut matches = Vec::new();
        for caps in self.regex.captures_iter(text) {
            let Some(value) = caps.name(VALUE_GROUP) else {
                continue;
            };
            if matches.len() == limit {
                return (matches, true);
            }
            let whole = caps.get(0).map_or((value.start(), value.end()), |m| (m.start(), m.end()));
            matches.push(RuleMatch {
                match_start: whole.0,
                match_end: whole.1,
                literal_start: value.start(),
                literal: value.as_str(),
            });
        }
        (matches, false)
    }
}

/// The built-in rules in priority order.
pub fn builtin_rules(context_window: usize) -> Vec<ExtractionRule> {
    [
        (tags::ASSIGNMENT, &*ASSIGNMENT_RE),
        (tags::APPROXIMATION, &*APPROXIMATION_RE),
        (tags::FINAL_ANSWER, &*FINAL_ANSWER_RE),
        (tags::UNIT_SUFFIX, &*UNIT_SUFFIX_RE),
    ]
    .into_iter()
    .map(|(tag, regex)| ExtractionRule {
        tag: tag.to_string(),
        regex: regex.clone(),
        context_window,
    })
    .collect()
}
