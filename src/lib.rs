#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]
//! # ipinfo.io client
//!
//! A blocking client for the [ipinfo.io](https://ipinfo.io) IP geolocation
//! API.
//!
//! ## Features
//!
//! - **`default-tls`** (default: enabled): HTTPS through the platform's
//!   native TLS library
//! - **`rustls-tls`** (default: disabled): HTTPS through `rustls`
//!
//! ## Errors
//!
//! Only two conditions fail a lookup: the API rejecting the token
//! ([`IpinfoError::InvalidToken`]) and the API rate limiting the caller
//! ([`IpinfoError::RateLimitExceeded`]). Anything else that goes wrong,
//! from an unreachable server to a garbled body, yields a [`Host`] whose
//! fields are all empty. No request is ever retried.
//!
//! ## Thread Safety
//!
//! `Ipinfo` is `Send` and `Sync` with the default transport, so one client
//! can be shared across threads.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ipinfo::{Field, Ipinfo};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ipinfo = Ipinfo::new()?;
//!
//!     let host = ipinfo.get_full_ip_details("8.8.8.8")?;
//!     println!("{} ({}) is in {}", host.ip(), host.org(), host.city());
//!
//!     // Only the location, from the faster endpoint
//!     let geo = ipinfo.get_ip_geo_details("8.8.8.8")?;
//!     println!("Coordinates: {}", geo.loc());
//!
//!     // A single field of the caller's own address
//!     let country = ipinfo.get_your_own_ip_specific_field(Field::Country)?;
//!     println!("You are in {}", country);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Transports
//!
//! Requests go through the [`Transport`] trait. Supplying a different
//! implementation serves canned responses without touching the network:
//!
//! ```
//! use ipinfo::{Ipinfo, IpinfoError, Options, RawResponse, Transport};
//!
//! struct Offline;
//!
//! impl Transport for Offline {
//!     fn get(&self, _url: &str) -> Result<RawResponse, IpinfoError> {
//!         Ok(RawResponse::new(200, r#"{"ip": "192.0.2.1", "country": "NL"}"#))
//!     }
//! }
//!
//! let ipinfo = Ipinfo::with_transport(Options::default(), Offline);
//! let host = ipinfo.get_full_ip_details("192.0.2.1").unwrap();
//! assert_eq!(host.country(), "NL");
//! assert_eq!(host.org(), "");
//! ```

mod client;
mod error;
mod host;
mod options;
mod transport;

// Re-export public types
pub use client::Ipinfo;
pub use error::IpinfoError;
pub use host::{Field, Host};
pub use options::{Options, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use transport::{HttpTransport, RawResponse, Transport};


#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_client_is_send_and_sync() {
        assert_send_sync::<Ipinfo>();
        assert_send_sync::<Host>();
        assert_send_sync::<IpinfoError>();
    }

    #[test]
    fn test_new_client_uses_defaults() {
        let ipinfo = Ipinfo::new().unwrap();
        assert_eq!(ipinfo.options(), &Options::default());
        assert_eq!(ipinfo.options().base_url_value(), DEFAULT_BASE_URL);
    }
}
