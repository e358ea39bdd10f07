//! Domain error types

use thiserror::Error;

/// Error when a requesting location cannot be reduced to an origin
#[derive(Debug, Clone, Error)]
pub enum OriginError {
    #[error("Invalid location \"{input}\": {message}")]
    InvalidUrl { input: String, message: String },

    #[error("Location \"{0}\" has no host")]
    MissingHost(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_error_mentions_input() {
        let err = OriginError::InvalidUrl {
            input: "not a url".to_string(),
            message: "relative URL without a base".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("not a url"));
        assert!(msg.contains("relative URL"));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::ParseError("expected an array".to_string());
        assert!(err.to_string().contains("expected an array"));
    }
}
