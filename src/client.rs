//! ipinfo.io client implementation.

use log::{log, warn, Level};

use crate::error::IpinfoError;
use crate::host::{Field, Host};
use crate::options::Options;
use crate::transport::{HttpTransport, RawResponse, Transport};

/// Path segment of the reduced geolocation endpoint.
const GEO_SEGMENT: &str = "geo";

/// Path segment returning the full record for the caller's own IP.
const OWN_IP_SEGMENT: &str = "json";

/// Prefix of the body ipinfo.io sends once the rate limit is reached.
const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded";

/// A client for the ipinfo.io API.
///
/// Every call performs exactly one blocking GET request. Only an invalid
/// token and rate limiting are reported as errors; any other failure,
/// including unreachable servers and malformed bodies, produces an empty
/// [`Host`] (or an empty string for single fields).
///
/// # Example
///
/// ```no_run
/// use ipinfo::{Field, Ipinfo, Options};
///
/// # fn main() -> Result<(), ipinfo::IpinfoError> {
/// let ipinfo = Ipinfo::with_options(Options::default().token("0123456789abcd"))?;
///
/// let host = ipinfo.get_full_ip_details("8.8.8.8")?;
/// println!("{} is in {}, {}", host.ip(), host.city(), host.country());
///
/// let country = ipinfo.get_your_own_ip_specific_field(Field::Country)?;
/// println!("You are in {}", country);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ipinfo<T: Transport = HttpTransport> {
    options: Options,
    transport: T,
}

impl Ipinfo<HttpTransport> {
    /// Creates an unauthenticated client with default options.
    pub fn new() -> Result<Ipinfo<HttpTransport>, IpinfoError> {
        Ipinfo::with_options(Options::default())
    }

    /// Creates a client sending requests over HTTP with `options`.
    pub fn with_options(options: Options) -> Result<Ipinfo<HttpTransport>, IpinfoError> {
        let transport = HttpTransport::new(options.timeout_value(), options.user_agent_value())?;
        Ok(Ipinfo::with_transport(options, transport))
    }
}

impl<T: Transport> Ipinfo<T> {
    /// Creates a client that performs its requests through `transport`.
    pub fn with_transport(options: Options, transport: T) -> Ipinfo<T> {
        Ipinfo { options, transport }
    }

    /// The options this client was created with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Looks up every field of `ip`. An empty `ip` looks up the caller's
    /// own address.
    pub fn get_full_ip_details(&self, ip: &str) -> Result<Host, IpinfoError> {
        let segment = ip.is_empty().then_some(OWN_IP_SEGMENT);
        let body = self.fetch(&self.build_url(ip, segment))?;
        Ok(parse_host(body.as_deref()))
    }

    /// Looks up `ip` on the faster geo endpoint. Hostname, org and phone
    /// are always empty in the result.
    pub fn get_ip_geo_details(&self, ip: &str) -> Result<Host, IpinfoError> {
        let body = self.fetch(&self.build_url(ip, Some(GEO_SEGMENT)))?;
        Ok(parse_host(body.as_deref()).into_geo())
    }

    /// Looks up a single field of `ip`.
    ///
    /// The value is the same one [`get_full_ip_details`](Self::get_full_ip_details)
    /// would report for `field`, fetched from the API's per-field endpoint.
    ///
    /// ```no_run
    /// use ipinfo::{Field, Ipinfo};
    ///
    /// # fn main() -> Result<(), ipinfo::IpinfoError> {
    /// let client = Ipinfo::new()?;
    /// let field: Field = "city".parse()?;
    /// let city = client.get_specific_field("8.8.8.8", field)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_specific_field(&self, ip: &str, field: Field) -> Result<String, IpinfoError> {
        let body = self.fetch(&self.build_url(ip, Some(field.as_str())))?;
        Ok(body
            .map(|body| body.trim_end().to_owned())
            .unwrap_or_default())
    }

    /// Looks up every field of the caller's own IP address.
    pub fn get_your_own_ip_details(&self) -> Result<Host, IpinfoError> {
        self.get_full_ip_details("")
    }

    /// Looks up a single field of the caller's own IP address.
    pub fn get_your_own_ip_specific_field(&self, field: Field) -> Result<String, IpinfoError> {
        self.get_specific_field("", field)
    }

    fn build_url(&self, ip: &str, segment: Option<&str>) -> String {
        let mut url = self.options.base_url_value().to_owned();
        for part in [Some(ip), segment].into_iter().flatten() {
            if !part.is_empty() {
                url.push('/');
                url.push_str(part);
            }
        }
        if let Some(token) = self.options.token_value() {
            url.push_str("?token=");
            url.push_str(token);
        }
        url
    }

    /// Performs the request and classifies the response. `Ok(None)` means
    /// the API returned nothing usable.
    fn fetch(&self, url: &str) -> Result<Option<String>, IpinfoError> {
        let level = if self.options.is_debug() {
            Level::Info
        } else {
            Level::Trace
        };
        let shown_url = redact(url);
        log!(level, "GET {}", shown_url);

        let response = match self.transport.get(url) {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", shown_url, e);
                return Ok(None);
            }
        };
        log!(
            level,
            "Response from {}: status {}, body {:?}",
            shown_url,
            response.status,
            response.body
        );

        classify(response)
    }
}

fn classify(response: RawResponse) -> Result<Option<String>, IpinfoError> {
    if response.status == 429 || response.body.trim_start().starts_with(RATE_LIMIT_MESSAGE) {
        return Err(IpinfoError::RateLimitExceeded);
    }
    if matches!(response.status, 401 | 403) && mentions_token(&response.body) {
        return Err(IpinfoError::invalid_token(error_message(&response.body)));
    }
    if !response.is_success() {
        warn!("Unexpected status {} from ipinfo.io", response.status);
        return Ok(None);
    }
    Ok(Some(response.body))
}

fn parse_host(body: Option<&str>) -> Host {
    match body.map(Host::from_json) {
        Some(Some(host)) => host,
        Some(None) => {
            warn!("Malformed response from ipinfo.io");
            Host::default()
        }
        None => Host::default(),
    }
}

fn mentions_token(body: &str) -> bool {
    body.to_ascii_lowercase().contains("token")
}

/// Extracts a readable message from an error body such as
/// `{"error": {"title": "Unknown token", "message": "..."}}`.
fn error_message(body: &str) -> String {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return body.trim().to_owned(),
    };
    let error = &value["error"];
    if let Some(message) = error.as_str() {
        return message.to_owned();
    }
    [&error["title"], &error["message"]]
        .into_iter()
        .filter_map(serde_json::Value::as_str)
        .collect::<Vec<_>>()
        .join(": ")
}

fn redact(url: &str) -> String {
    match url.split_once("?token=") {
        Some((path, _)) => format!("{path}?token=<redacted>"),
        None => url.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(
                r#"{"status": 403, "error": {"title": "Unknown token", "message": "Please ensure you've entered your token correctly."}}"#
            ),
            "Unknown token: Please ensure you've entered your token correctly."
        );
        assert_eq!(
            error_message(r#"{"error": "Please provide a valid token"}"#),
            "Please provide a valid token"
        );
        assert_eq!(
            error_message("Please provide a valid token\n"),
            "Please provide a valid token"
        );
    }

    #[test]
    fn test_redact() {
        assert_eq!(
            redact("https://ipinfo.io/8.8.8.8?token=secret"),
            "https://ipinfo.io/8.8.8.8?token=<redacted>"
        );
        assert_eq!(redact("https://ipinfo.io/json"), "https://ipinfo.io/json");
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify(RawResponse::new(200, "{}")).unwrap(),
            Some("{}".to_owned())
        );
        assert_eq!(classify(RawResponse::new(404, "Not found")).unwrap(), None);
        assert_eq!(classify(RawResponse::new(403, "Forbidden")).unwrap(), None);
        assert!(classify(RawResponse::new(429, ""))
            .unwrap_err()
            .is_rate_limit_exceeded());
        assert!(classify(RawResponse::new(
            200,
            "Rate limit exceeded. Subscribe to a paid plan to increase your usage limits"
        ))
        .unwrap_err()
        .is_rate_limit_exceeded());
        assert!(classify(RawResponse::new(401, "Invalid token"))
            .unwrap_err()
            .is_invalid_token());
    }
}
