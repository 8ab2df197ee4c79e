//! Error types for Beacon Dash
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Request never produced a response (refused, reset, timed out)
    #[snafu(display("Network error calling {url}: {source}"))]
    Network { url: String, source: reqwest::Error },

    /// Backend answered with a non-2xx status
    #[snafu(display("HTTP {status} from {url}"))]
    Http { status: u16, url: String },

    /// Response body did not match the expected shape
    #[snafu(display("Failed to decode response from {url}: {source}"))]
    Decode { url: String, source: reqwest::Error },

    /// User input rejected before reaching the network
    #[snafu(display("Validation failed: {message}"))]
    Validation { message: String },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl Error {
    /// Whether the failure happened below HTTP (no status was received)
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network { .. })
    }

    /// HTTP status code, if the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_exposes_status() {
        let err = Error::Http {
            status: 503,
            url: "http://localhost:3030/beacon/blocks".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert!(!err.is_network());
        assert_eq!(
            err.to_string(),
            "HTTP 503 from http://localhost:3030/beacon/blocks"
        );
    }

    #[test]
    fn validation_error_has_no_status() {
        let err = Error::Validation {
            message: "slot must be greater than 7".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("slot must be greater than 7"));
    }
}
