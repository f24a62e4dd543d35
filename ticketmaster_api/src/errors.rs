//! Error types for the API client.

/// Errors that can occur when building or sending API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A search option could not be encoded. Raised before any request is sent.
    #[error("Invalid value for '{option}': {reason}")]
    Validation { option: String, reason: String },
    /// The HTTP transport failed (connection, TLS, timeout, DNS).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API returned a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Api { status: u16, message: String },
    /// A lookup by ID found no such entity.
    #[error("No {resource} found with id '{id}'")]
    NotFound { resource: &'static str, id: String },
    /// The response body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    Deserialization(#[from] serde_json::Error),
    /// The configured base URL could not be turned into a request URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    pub(crate) fn validation(option: &str, reason: impl Into<String>) -> Self {
        Error::Validation {
            option: option.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// HTTP status reported by the API, if the error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::NotFound { .. } => Some(404),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
