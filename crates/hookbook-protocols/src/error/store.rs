//! Subscription store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Subscription not found: {0}")]
    NotFound(String),

    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),
}

impl StoreError {
    /// The message reported to diagnostics.
    ///
    /// For API errors this is the store's own `message` field, unadorned.
    pub fn detail(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status carried by the error, if the store answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error() {
        let err = StoreError::Network("connection refused".to_string());
        assert!(err.to_string().contains("Network error"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_api_error() {
        let err = StoreError::Api {
            status: 401,
            message: "unauthorized".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("401"));
        assert!(display.contains("unauthorized"));
    }

    #[test]
    fn test_api_error_detail_is_bare_message() {
        let err = StoreError::Api {
            status: 401,
            message: "unauthorized".to_string(),
        };
        assert_eq!(err.detail(), "unauthorized");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_non_api_detail_uses_display() {
        let err = StoreError::Timeout(30);
        assert_eq!(err.detail(), "Timeout after 30 seconds");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_not_found_error() {
        let err = StoreError::NotFound("wh_1".to_string());
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("wh_1"));
    }

    #[test]
    fn test_invalid_config_error() {
        let err = StoreError::InvalidConfig("relative URL without a base".to_string());
        assert!(err.to_string().contains("Invalid store configuration"));
    }

    #[test]
    fn test_error_debug() {
        let err = StoreError::Decode("expected value".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("Decode"));
    }
}
