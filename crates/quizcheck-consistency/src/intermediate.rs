//! Suppression of expected intermediate quantities.
//!
//! Worked solutions pass through many numbers on the way to the answer.
//! A candidate is suppressed when it is a configured intermediate or when
//! its context shows it as an operand inside an arithmetic expression.

use quizcheck_core::config::DetectorConfig;
use quizcheck_core::models::ExtractedValue;

use crate::extraction::rules::LEADING_UNIT_RE;

/// Characters that can open or continue an expression to the left of a number.
const LEFT_EXPRESSION_CHARS: &[char] = &['+', '-', '*', '/', '×', '÷', '·', '=', '('];

/// Characters that can continue or close an expression to the right of a number.
const RIGHT_EXPRESSION_CHARS: &[char] = &['+', '-', '*', '/', '×', '÷', '·', '^', ')', '='];

const ARITHMETIC_OPERATORS: &[char] = &['+', '-', '*', '/', '×', '÷', '·', '^'];

/// Why a candidate was not compared against the declared answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressionReason {
    /// Matches a configured intermediate value.
    KnownIntermediate,
    /// Sits between expression characters, e.g. `= 0.5 +`.
    ArithmeticOperand,
}

#[derive(Debug, Clone, Default)]
pub struct IntermediateFilter {
    known_values: Vec<f64>,
    epsilon: f64,
}

impl IntermediateFilter {
    pub fn new(known_values: Vec<f64>, epsilon: f64) -> Self {
        Self {
            known_values,
            epsilon,
        }
    }

    pub fn from_config(config: &DetectorConfig) -> Self {
        Self::new(config.intermediate_values.clone(), config.epsilon)
    }

    pub fn is_intermediate(&self, candidate: &ExtractedValue) -> Option<SuppressionReason> {
        if self.is_known(candidate.value) {
            return Some(SuppressionReason::KnownIntermediate);
        }
        if is_arithmetic_operand(candidate) {
            return Some(SuppressionReason::ArithmeticOperand);
        }
        None
    }

    fn is_known(&self, value: f64) -> bool {
        self.known_values
            .iter()
            .any(|known| (known - value).abs() < self.epsilon)
    }
}

/// Both neighbours are expression characters and at least one is an operator.
///
/// A leading minus inside the literal counts as the sign, not a neighbour.
/// A unit token right after the literal is skipped, so `0.4 V + 0.5 V`
/// reads as a sum; a compound unit such as `km/h` ends the expression.
pub fn is_arithmetic_operand(candidate: &ExtractedValue) -> bool {
    let left = candidate.before_literal().trim_end().chars().next_back();
    let after = candidate.after_literal().trim_start();
    let right = match LEADING_UNIT_RE.find(after) {
        // `km/h`, `m/s^2`: the unit continues, nothing follows the quantity.
        Some(unit) if after[unit.end()..].starts_with(['/', '^']) => None,
        Some(unit) => after[unit.end()..].trim_start().chars().next(),
        None => after.chars().next(),
    };

    match (left, right) {
        (Some(l), Some(r)) => {
            LEFT_EXPRESSION_CHARS.contains(&l)
                && RIGHT_EXPRESSION_CHARS.contains(&r)
                && (ARITHMETIC_OPERATORS.contains(&l) || ARITHMETIC_OPERATORS.contains(&r))
        }
        _ => false,
    }
}
