//! Error types for the explorer core.
//!
//! - [`ValidationError`] - incomplete configuration form
//! - [`StorageError`] - key-value persistence failures
//! - [`ConfigError`] - everything a configuration save can fail with
//! - [`TransportError`] - the request never produced a response
//! - [`FetchError`] - a listing fetch failed

use std::fmt;

use thiserror::Error;

/// A configuration field the user has to fill in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigField {
    FolderId,
    ApiKey,
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FolderId => write!(f, "Folder ID"),
            Self::ApiKey => write!(f, "API Key"),
        }
    }
}

/// Configuration form validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty after trimming.
    #[error("{0} is required. Please enter both Folder ID and API Key")]
    MissingField(ConfigField),
}

/// Key-value persistence errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store is not available (e.g. storage disabled).
    #[error("storage not available")]
    Unavailable,
    /// Writing a key failed (e.g. quota exceeded).
    #[error("failed to save '{0}'")]
    WriteFailed(String),
}

/// Errors returned by a configuration save.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("could not persist configuration: {0}")]
    Storage(#[from] StorageError),
}

/// Transport-level failures: no HTTP response was received.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be sent or was rejected (CORS, offline, ...).
    #[error("{0}")]
    Network(String),
    /// The transport gave up waiting for a response.
    #[error("request timed out")]
    TimedOut,
}

/// Listing fetch errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The remote rejected the credentials (401/403).
    #[error("HTTP {status}: {status_text}")]
    Unauthorized { status: u16, status_text: String },
    /// Any other non-2xx response.
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    /// No usable response: transport failure, timeout or malformed body.
    #[error("Network error: {0}")]
    Network(String),
}

impl FetchError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, status_text: &str) -> Self {
        let status_text = if status_text.trim().is_empty() {
            canonical_reason(status).to_string()
        } else {
            status_text.trim().to_string()
        };

        match status {
            401 | 403 => Self::Unauthorized {
                status,
                status_text,
            },
            _ => Self::Http {
                status,
                status_text,
            },
        }
    }

    /// Numeric HTTP status, if the remote answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Http { status, .. } => Some(*status),
            Self::Network(_) => None,
        }
    }

    /// Message shown in the error panel.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized { .. } => format!(
                "Failed to load files ({}). Please check your API key and folder ID.",
                self
            ),
            Self::Http { .. } | Self::Network(_) => format!("Failed to load files ({}).", self),
        }
    }
}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        Self::Network(err.to_string())
    }
}

/// Reason phrase for statuses whose text the transport left empty (HTTP/2).
fn canonical_reason(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        408 => "Request Timeout",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Unknown Status",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            FetchError::from_status(403, "Forbidden"),
            FetchError::Unauthorized { status: 403, .. }
        ));
        assert!(matches!(
            FetchError::from_status(401, "Unauthorized"),
            FetchError::Unauthorized { status: 401, .. }
        ));
        assert!(matches!(
            FetchError::from_status(404, "Not Found"),
            FetchError::Http { status: 404, .. }
        ));
    }

    #[test]
    fn test_empty_status_text_gets_reason() {
        let err = FetchError::from_status(403, "");
        assert_eq!(err.to_string(), "HTTP 403: Forbidden");

        let err = FetchError::from_status(599, " ");
        assert_eq!(err.to_string(), "HTTP 599: Unknown Status");
    }

    #[test]
    fn test_user_message_embeds_status() {
        let msg = FetchError::from_status(403, "Forbidden").user_message();
        assert!(msg.contains("403"));
        assert!(msg.contains("Forbidden"));
        assert!(msg.contains("API key"));

        let msg = FetchError::from_status(500, "Internal Server Error").user_message();
        assert!(msg.contains("500"));
    }

    #[test]
    fn test_transport_error_is_network() {
        let err: FetchError = TransportError::TimedOut.into();
        assert_eq!(err, FetchError::Network("request timed out".to_string()));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_validation_message_names_field() {
        let err = ValidationError::MissingField(ConfigField::ApiKey);
        assert!(err.to_string().starts_with("API Key is required"));
    }
}
