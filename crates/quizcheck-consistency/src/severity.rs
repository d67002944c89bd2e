//! Percentage difference → severity tier.

use quizcheck_core::constants::{MODERATE_THRESHOLD_PCT, SEVERE_THRESHOLD_PCT};
use quizcheck_core::models::Severity;

/// `> 20%` severe, `10%..=20%` moderate, anything lower minor.
pub fn classify(percentage_difference: f64) -> Severity {
    if percentage_difference > SEVERE_THRESHOLD_PCT {
        Severity::Severe
    } else if percentage_difference >= MODERATE_THRESHOLD_PCT {
        Severity::Moderate
    } else {
        Severity::Minor
    }
}
