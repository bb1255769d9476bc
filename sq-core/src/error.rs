//! Global error types for the SleepIQ client.
//!
//! All error categories across the workspace are unified into a single
//! `SqError` enum with conversions from underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using SqError.
pub type SqResult<T> = Result<T, SqError>;

/// Unified error type covering all error categories in the SleepIQ client.
#[derive(Error, Debug)]
pub enum SqError {
    // -- Configuration errors --
    /// Failed to load or parse application configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Network errors --
    /// HTTP request failed before a response was received.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Server returned a non-success status after the re-login retry.
    #[error("server error (status {status}): {message}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Response body returned by the server.
        message: String,
    },

    /// The session was still unauthorized after re-authenticating.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    // -- Data errors --
    /// Fetched beds, sleepers and statuses do not reference each other consistently.
    #[error("inconsistent data: {0}")]
    DataConsistency(String),

    /// A raw attribute is absent from an API object.
    #[error("{view} has no attribute `{attribute}`")]
    MissingAttribute {
        /// View type the attribute was requested from.
        view: &'static str,
        /// Raw (camelCase) attribute key.
        attribute: String,
    },

    /// A positional bed index does not exist in the freshly fetched bed list.
    #[error("bed index {index} out of range ({count} beds)")]
    BedIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of beds returned by the server.
        count: usize,
    },

    /// A command argument is outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Generic --
    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SqError {
    /// HTTP status carried by this error, if it came from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerError { status, .. } => Some(*status),
            Self::AuthFailed(_) => Some(401),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SqError {
    fn from(e: serde_json::Error) -> Self {
        SqError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for SqError {
    fn from(e: toml::de::Error) -> Self {
        SqError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sq_error_display() {
        let err = SqError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "configuration error: bad value");
    }

    #[test]
    fn test_missing_attribute_display() {
        let err = SqError::MissingAttribute {
            view: "Bed",
            attribute: "sleeperLeftId".into(),
        };
        assert_eq!(err.to_string(), "Bed has no attribute `sleeperLeftId`");
    }

    #[test]
    fn test_status_extraction() {
        let err = SqError::ServerError {
            status: 503,
            message: String::new(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(SqError::AuthFailed("expired".into()).status(), Some(401));
        assert_eq!(SqError::Http("refused".into()).status(), None);
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: SqError = parse.unwrap_err().into();
        assert!(matches!(err, SqError::Serialization(_)));
    }
}
