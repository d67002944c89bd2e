//! Configuration for the consistency detector.
//! TOML-based, resolved as env > file > defaults.

pub mod detector_config;
pub mod rule_config;

pub use detector_config::{DetectorConfig, ReportingMode};
pub use rule_config::RuleConfig;
