//! Application Error Types
//!
//! Centralized error handling for every call the client makes against the
//! remote API and local storage.

use serde_json::Value;

use crate::i18n::Translator;
use super::validation::{server_message, FieldErrors};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response; the raw JSON body is kept for field extraction.
    #[error("Request failed with status {status}: {}", message_or_status(.body, .status))]
    Api { status: u16, body: Value },

    #[error("Validation error: {}", first_field_error(.0))]
    Validation(FieldErrors),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The owning page scope was dropped before the request finished.
    #[error("Request cancelled")]
    Cancelled,
}

fn message_or_status(body: &Value, status: &u16) -> String {
    server_message(body).unwrap_or_else(|| format!("HTTP {}", status))
}

fn first_field_error(errors: &FieldErrors) -> String {
    errors
        .iter()
        .next()
        .map(|(field, message)| format!("{}: {}", field, message))
        .unwrap_or_else(|| "Validation failed".into())
}

impl AppError {
    /// Message the server supplied, if any (`detail`, `error` or `message`).
    pub fn server_message(&self) -> Option<String> {
        match self {
            AppError::Api { body, .. } => server_message(body),
            AppError::Unauthorized(msg) | AppError::NotFound(msg) if !msg.is_empty() => {
                Some(msg.clone())
            }
            _ => None,
        }
    }

    /// HTTP status of a failed response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Unauthorized(_) => Some(401),
            AppError::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Whether the failure means the stored token is no longer accepted.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }

    /// Render the error for the user.
    ///
    /// Network failures become the localized generic network message, server
    /// failures show the server text verbatim when present, and everything else
    /// falls back to `fallback_key` / `fallback`.
    pub fn user_message(&self, i18n: &Translator, fallback_key: &str, fallback: &str) -> String {
        match self {
            AppError::Network(_) => i18n.t(
                "common.networkError",
                Some("Network error, please check your connection"),
            ),
            AppError::Validation(errors) => first_field_error(errors),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::Cancelled => String::new(),
            other => other
                .server_message()
                .unwrap_or_else(|| i18n.t(fallback_key, Some(fallback))),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(e: config::ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_display_uses_server_detail() {
        let err = AppError::Api {
            status: 403,
            body: json!({"detail": "Active membership required to feature items"}),
        };

        assert_eq!(
            err.to_string(),
            "Request failed with status 403: Active membership required to feature items"
        );
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_api_error_display_without_message() {
        let err = AppError::Api {
            status: 500,
            body: Value::Null,
        };

        assert_eq!(err.to_string(), "Request failed with status 500: HTTP 500");
        assert!(err.server_message().is_none());
    }

    #[test]
    fn test_validation_display_picks_first_field() {
        let mut errors = FieldErrors::new();
        errors.insert("email".into(), "Email must end with @ait.ac.th".into());
        errors.insert("username".into(), "taken".into());

        let err = AppError::Validation(errors);
        assert_eq!(err.to_string(), "Validation error: email: Email must end with @ait.ac.th");
    }

    #[test]
    fn test_unauthorized_flag() {
        assert!(AppError::Unauthorized("expired".into()).is_unauthorized());
        assert!(!AppError::Network("down".into()).is_unauthorized());
    }
}
