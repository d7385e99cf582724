//! Error types for ytdata
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Errors fall into three client-visible classes:
//! - validation errors, raised before any network call and never retried
//! - fetch errors, raised by the transport and propagated immediately
//! - format errors, scoped to a single on-demand field conversion

use thiserror::Error;

/// The main error type for ytdata
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors (raised before any network call)
    // ============================================================================
    #[error("Unknown resource: {resource}")]
    UnknownResource { resource: String },

    #[error("Unsupported parts for '{resource}': {}", .parts.join(", "))]
    UnsupportedParts { resource: String, parts: Vec<String> },

    #[error("No filter supplied for '{resource}'; exactly one is required")]
    MissingFilter { resource: String },

    #[error("Conflicting filters for '{resource}': {}; supply exactly one", .params.join(", "))]
    ConflictingFilters { resource: String, params: Vec<String> },

    #[error("Filter '{param}' is not supported by '{resource}'")]
    UnsupportedFilter { resource: String, param: String },

    // ============================================================================
    // Fetch Errors (transport and API failures)
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}{}: {message}", .reason.as_deref().map(|r| format!(" ({r})")).unwrap_or_default())]
    Api {
        status: u16,
        reason: Option<String>,
        message: String,
    },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Format Errors (on-demand field conversions)
    // ============================================================================
    #[error("Malformed ISO-8601 duration: {value:?}")]
    MalformedDuration { value: String },

    #[error("Malformed timestamp: {value:?}")]
    MalformedTimestamp { value: String },

    // ============================================================================
    // Normalization Errors
    // ============================================================================
    #[error("Failed to normalize '{kind}' response: {message}")]
    Normalize { kind: String, message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O and Generic Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an unknown-resource error
    pub fn unknown_resource(resource: impl Into<String>) -> Self {
        Self::UnknownResource {
            resource: resource.into(),
        }
    }

    /// Create an unsupported-parts error; the offending parts are sorted
    /// so messages are reproducible.
    pub fn unsupported_parts<I, S>(resource: impl Into<String>, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parts: Vec<String> = parts.into_iter().map(Into::into).collect();
        parts.sort();
        Self::UnsupportedParts {
            resource: resource.into(),
            parts,
        }
    }

    /// Create a missing-filter error
    pub fn missing_filter(resource: impl Into<String>) -> Self {
        Self::MissingFilter {
            resource: resource.into(),
        }
    }

    /// Create a conflicting-filters error
    pub fn conflicting_filters<I, S>(resource: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ConflictingFilters {
            resource: resource.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an unsupported-filter error
    pub fn unsupported_filter(resource: impl Into<String>, param: impl Into<String>) -> Self {
        Self::UnsupportedFilter {
            resource: resource.into(),
            param: param.into(),
        }
    }

    /// Create an API error from a decoded error envelope
    pub fn api(status: u16, reason: Option<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            reason,
            message: message.into(),
        }
    }

    /// Create a normalization error
    pub fn normalize(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Normalize {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Stable symbolic code for this error, independent of the display text.
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnknownResource { .. } => "unknownResource",
            Error::UnsupportedParts { .. } => "unsupportedParts",
            Error::MissingFilter { .. } => "missingFilter",
            Error::ConflictingFilters { .. } => "conflictingFilters",
            Error::UnsupportedFilter { .. } => "unsupportedFilter",
            Error::Http(_) => "httpError",
            Error::Api { .. } => "apiError",
            Error::Timeout { .. } => "timeout",
            Error::MalformedDuration { .. } => "malformedDuration",
            Error::MalformedTimestamp { .. } => "malformedTimestamp",
            Error::Normalize { .. } => "normalizeError",
            Error::JsonParse(_) => "jsonParseError",
            Error::Config { .. } => "configError",
            Error::YamlParse(_) => "yamlParseError",
            Error::InvalidUrl(_) => "invalidUrl",
            Error::Io(_) => "ioError",
            Error::Other(_) => "other",
            Error::Anyhow(_) => "other",
        }
    }

    /// Check if this error was raised by client-side request validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::UnknownResource { .. }
                | Error::UnsupportedParts { .. }
                | Error::MissingFilter { .. }
                | Error::ConflictingFilters { .. }
                | Error::UnsupportedFilter { .. }
        )
    }

    /// Check if this error is scoped to a single field conversion
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            Error::MalformedDuration { .. } | Error::MalformedTimestamp { .. }
        )
    }

    /// Check if this error is retryable at the transport layer
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::Timeout { .. } => true,
            Error::Api { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for ytdata
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unknown_resource("gadgets");
        assert_eq!(err.to_string(), "Unknown resource: gadgets");

        let err = Error::unsupported_parts("channels", ["zzz", "bogusPart"]);
        assert_eq!(
            err.to_string(),
            "Unsupported parts for 'channels': bogusPart, zzz"
        );

        let err = Error::api(403, Some("quotaExceeded".to_string()), "Daily limit reached");
        assert_eq!(
            err.to_string(),
            "API error 403 (quotaExceeded): Daily limit reached"
        );

        let err = Error::api(500, None, "boom");
        assert_eq!(err.to_string(), "API error 500: boom");
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            Error::unsupported_parts("videos", ["x"]).code(),
            "unsupportedParts"
        );
        assert_eq!(Error::missing_filter("videos").code(), "missingFilter");
        assert_eq!(
            Error::MalformedDuration {
                value: "PT".to_string()
            }
            .code(),
            "malformedDuration"
        );
        assert_eq!(Error::api(404, None, "").code(), "apiError");
    }

    #[test]
    fn test_classification() {
        assert!(Error::missing_filter("videos").is_validation());
        assert!(Error::conflicting_filters("videos", ["id", "mine"]).is_validation());
        assert!(!Error::api(500, None, "").is_validation());

        assert!(Error::MalformedTimestamp {
            value: "yesterday".to_string()
        }
        .is_format());
        assert!(!Error::missing_filter("videos").is_format());
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::api(429, None, "").is_retryable());
        assert!(Error::api(500, None, "").is_retryable());
        assert!(Error::api(503, None, "").is_retryable());

        assert!(!Error::api(400, None, "").is_retryable());
        assert!(!Error::api(403, None, "").is_retryable());
        assert!(!Error::missing_filter("videos").is_retryable());
    }
}
