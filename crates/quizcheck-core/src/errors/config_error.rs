/// Errors raised while loading, validating, or compiling detector configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config at {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("extraction rule '{tag}' has an invalid pattern: {message}")]
    InvalidPattern { tag: String, message: String },

    #[error("extraction rule '{tag}' has no `value` capture group")]
    MissingValueGroup { tag: String },
}
