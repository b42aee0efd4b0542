//! Client configuration.

use std::time::Duration;

/// Base URL of the ipinfo.io API.
pub const DEFAULT_BASE_URL: &str = "https://ipinfo.io";

/// Request timeout used unless [`Options::timeout`] overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Options for [`Ipinfo`](crate::Ipinfo).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use ipinfo::Options;
///
/// // No token, debug logging off.
/// let opts = Options::default();
///
/// // Authenticated client with verbose request logging.
/// let opts = Options::default()
///     .token("0123456789abcd")
///     .debug(true)
///     .timeout(Duration::from_secs(3));
/// assert_eq!(opts.token_value(), Some("0123456789abcd"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    token: Option<String>,
    debug: bool,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            token: None,
            debug: false,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("ipinfo-rust/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl Options {
    /// Authenticate requests with `token`.
    ///
    /// Surrounding whitespace is dropped, and a token that is blank after
    /// trimming is the same as no token.
    #[must_use]
    pub fn token(mut self, token: impl AsRef<str>) -> Self {
        let token = token.as_ref().trim();
        self.token = (!token.is_empty()).then(|| token.to_owned());
        self
    }

    /// Log every request URL and raw response at `info` level instead of
    /// `trace`.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Send requests to `base_url` instead of [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Abort requests that take longer than `timeout`.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the User-Agent header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The configured token, if any.
    #[must_use]
    pub fn token_value(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether debug logging is on.
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// The API base URL, without a trailing slash.
    #[must_use]
    pub fn base_url_value(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// The request timeout.
    #[must_use]
    pub fn timeout_value(&self) -> Duration {
        self.timeout
    }

    /// The User-Agent header value.
    #[must_use]
    pub fn user_agent_value(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert_eq!(opts.token_value(), None);
        assert!(!opts.is_debug());
        assert_eq!(opts.base_url_value(), "https://ipinfo.io");
        assert_eq!(opts.timeout_value(), DEFAULT_TIMEOUT);
        assert!(opts.user_agent_value().starts_with("ipinfo-rust/"));
    }

    #[test]
    fn test_blank_token_is_no_token() {
        assert_eq!(Options::default().token(" ").token_value(), None);
        assert_eq!(Options::default().token("\t\n").token_value(), None);
        assert_eq!(Options::default().token(" ").token(""), Options::default());
    }

    #[test]
    fn test_token_is_trimmed() {
        assert_eq!(
            Options::default().token(" abc123 ").token_value(),
            Some("abc123")
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let opts = Options::default().base_url("http://localhost:8080/");
        assert_eq!(opts.base_url_value(), "http://localhost:8080");
    }
}
