//! HTTP transport used by the client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::error::IpinfoError;

/// Status and body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as text.
    pub body: String,
}

impl RawResponse {
    /// Creates a response from a status code and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        RawResponse {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx status codes.
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP GET request.
///
/// [`HttpTransport`] is the implementation used by default. Substitute
/// another one with [`Ipinfo::with_transport`](crate::Ipinfo::with_transport)
/// to serve canned responses.
pub trait Transport {
    /// Fetches `url`. Any status code is a successful fetch; only failures
    /// to complete the exchange are errors.
    fn get(&self, url: &str) -> Result<RawResponse, IpinfoError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<RawResponse, IpinfoError> {
        (**self).get(url)
    }
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds the underlying HTTP client.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<HttpTransport, IpinfoError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<RawResponse, IpinfoError> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(RawResponse { status, body })
    }
}
