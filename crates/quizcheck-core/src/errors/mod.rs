//! Error handling for quizcheck.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod record_error;

pub use config_error::ConfigError;
pub use record_error::RecordError;
