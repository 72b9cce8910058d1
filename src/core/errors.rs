use thiserror::Error;

#[derive(Error, Debug)]
pub enum BybitError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {code} - {message}")]
    ApiError { code: i64, message: String },

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A narrowed query answered with a number of records other than the one expected.
    #[error("unexpected result cardinality: expected {expected}, got {actual}")]
    UnexpectedCardinality { expected: usize, actual: usize },
}

impl BybitError {
    /// Whether the failure came from the transport or the upstream service,
    /// as opposed to a shape check done by this crate.
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::UnexpectedCardinality { .. })
    }

    /// Upstream `ret_code` (or HTTP status) for API rejections.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinality_is_not_transport() {
        let err = BybitError::UnexpectedCardinality {
            expected: 1,
            actual: 0,
        };
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "unexpected result cardinality: expected 1, got 0"
        );
    }

    #[test]
    fn test_api_code() {
        let err = BybitError::ApiError {
            code: 10001,
            message: "params error".to_string(),
        };
        assert!(err.is_transport());
        assert_eq!(err.api_code(), Some(10001));
        assert_eq!(BybitError::AuthError("x".into()).api_code(), None);
    }
}
