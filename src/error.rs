//! Error types for the service.

use thiserror::Error;

/// Errors raised while bootstrapping the service.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ServiceError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ServiceError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Failure reported by a [`Transport`](crate::translate::Transport).
#[derive(Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl TransportError {
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Outcome of a failed call to the translation provider.
#[derive(Error, Debug)]
pub enum TranslateError {
    /// The request never produced a response. Carried through untouched.
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("bad HTTP status code: {0}")]
    BadStatus(u16),

    #[error("decoding provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("empty translations")]
    EmptyTranslations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display_is_passed_through() {
        let err = TranslateError::from(TransportError::other("connection refused"));
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_bad_status_mentions_code() {
        assert_eq!(
            TranslateError::BadStatus(403).to_string(),
            "bad HTTP status code: 403"
        );
    }
}
