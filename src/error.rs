//! Error types for ipinfo.io requests.

use thiserror::Error;

/// Error returned by ipinfo.io client operations.
///
/// Only authentication and rate limiting failures surface as errors at
/// request time. Malformed, empty or otherwise unexpected responses yield an
/// empty [`Host`](crate::Host) instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IpinfoError {
    /// The API rejected the configured token.
    #[error("invalid token: {message}")]
    InvalidToken {
        /// Message returned by the API, if any.
        message: String,
    },

    /// The API refused the request because the rate limit was reached.
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    /// The given name is not one of the recognized host fields.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The HTTP transport failed.
    #[error("http error: {0}")]
    Http(
        #[from]
        #[source]
        reqwest::Error,
    ),
}

impl IpinfoError {
    /// Creates an InvalidToken error.
    pub fn invalid_token(message: impl Into<String>) -> Self {
        IpinfoError::InvalidToken {
            message: message.into(),
        }
    }

    /// Returns true if this error is [`IpinfoError::InvalidToken`].
    #[must_use]
    pub fn is_invalid_token(&self) -> bool {
        matches!(self, IpinfoError::InvalidToken { .. })
    }

    /// Returns true if this error is [`IpinfoError::RateLimitExceeded`].
    #[must_use]
    pub fn is_rate_limit_exceeded(&self) -> bool {
        matches!(self, IpinfoError::RateLimitExceeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", IpinfoError::invalid_token("Unknown token")),
            "invalid token: Unknown token".to_owned(),
        );
        assert_eq!(
            format!("{}", IpinfoError::RateLimitExceeded),
            "rate limit exceeded".to_owned(),
        );
        assert_eq!(
            format!("{}", IpinfoError::UnknownField("planet".to_owned())),
            "unknown field: planet".to_owned(),
        );
    }

    #[test]
    fn test_error_kind_predicates() {
        assert!(IpinfoError::invalid_token("").is_invalid_token());
        assert!(!IpinfoError::invalid_token("").is_rate_limit_exceeded());
        assert!(IpinfoError::RateLimitExceeded.is_rate_limit_exceeded());
        assert!(!IpinfoError::UnknownField("x".into()).is_invalid_token());
    }
}
