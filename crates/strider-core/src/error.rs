use thiserror::Error;

/// Top-level error type for strider crates.
#[derive(Debug, Error)]
pub enum StriderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration errors.
///
/// Solve outcomes are not errors: the solver reports degenerate chains and
/// unreachable targets as data (see `strider-ik`), because a continuously
/// re-solving animation loop degrades gracefully instead of faulting.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Leg must have at least one segment")]
    NoSegments,
}

impl ConfigError {
    /// Shorthand for an [`InvalidValue`](Self::InvalidValue) error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}
