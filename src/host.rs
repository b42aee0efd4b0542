//! Host record structures.
//!
//! [`Host`] is the typed form of the JSON object ipinfo.io returns for an IP
//! address. Every recognized [`Field`] is always present and defaults to the
//! empty string when the response omits it.
//!
//! # Example
//!
//! ```
//! use ipinfo::{Field, Host};
//!
//! let host = Host::from_json(r#"{"ip": "8.8.8.8", "city": "Mountain View"}"#).unwrap();
//! assert_eq!(host.city(), "Mountain View");
//! assert_eq!(host.get(Field::Ip), "8.8.8.8");
//! assert_eq!(host.phone(), "");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::IpinfoError;

/// A field of the [`Host`] record.
///
/// The wire name of each variant is its lower-case name, which is also the
/// path segment used to ask ipinfo.io for that single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// City name.
    City,
    /// Two-letter ISO 3166-1 country code.
    Country,
    /// Reverse DNS hostname.
    Hostname,
    /// The IP address itself.
    Ip,
    /// Latitude and longitude, comma separated.
    Loc,
    /// Organization, usually prefixed with the AS number.
    Org,
    /// Phone area code.
    Phone,
    /// Postal code.
    Postal,
    /// Region or state name.
    Region,
    /// IANA time zone name.
    Timezone,
    /// Link to the API documentation, returned for unauthenticated requests.
    Readme,
}

impl Field {
    /// All recognized fields.
    pub const ALL: [Field; 11] = [
        Field::City,
        Field::Country,
        Field::Hostname,
        Field::Ip,
        Field::Loc,
        Field::Org,
        Field::Phone,
        Field::Postal,
        Field::Region,
        Field::Timezone,
        Field::Readme,
    ];

    /// Returns the wire name of this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::City => "city",
            Field::Country => "country",
            Field::Hostname => "hostname",
            Field::Ip => "ip",
            Field::Loc => "loc",
            Field::Org => "org",
            Field::Phone => "phone",
            Field::Postal => "postal",
            Field::Region => "region",
            Field::Timezone => "timezone",
            Field::Readme => "readme",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = IpinfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| IpinfoError::UnknownField(s.to_owned()))
    }
}

/// Geolocation and ownership record for a single IP address.
///
/// Unknown keys in the source object are ignored, as are values that are
/// not strings.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Host {
    #[serde(deserialize_with = "lenient_string")]
    city: String,
    #[serde(deserialize_with = "lenient_string")]
    country: String,
    #[serde(deserialize_with = "lenient_string")]
    hostname: String,
    #[serde(deserialize_with = "lenient_string")]
    ip: String,
    #[serde(deserialize_with = "lenient_string")]
    loc: String,
    #[serde(deserialize_with = "lenient_string")]
    org: String,
    #[serde(deserialize_with = "lenient_string")]
    phone: String,
    #[serde(deserialize_with = "lenient_string")]
    postal: String,
    #[serde(deserialize_with = "lenient_string")]
    region: String,
    #[serde(deserialize_with = "lenient_string")]
    timezone: String,
    #[serde(deserialize_with = "lenient_string")]
    readme: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

impl Host {
    /// Builds a host from `(name, value)` pairs. Names that are not
    /// recognized fields are skipped.
    ///
    /// ```
    /// use ipinfo::Host;
    ///
    /// let host = Host::from_properties([("city", "Bartlett"), ("planet", "Earth")]);
    /// assert_eq!(host.city(), "Bartlett");
    /// assert_eq!(host.properties().len(), 11);
    /// ```
    pub fn from_properties<I, K, V>(properties: I) -> Host
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut host = Host::default();
        for (name, value) in properties {
            if let Ok(field) = name.as_ref().parse::<Field>() {
                *host.slot(field) = value.into();
            }
        }
        host
    }

    /// Parses a host from a JSON object.
    ///
    /// Returns `None` if `body` is not a JSON object.
    #[must_use]
    pub fn from_json(body: &str) -> Option<Host> {
        match serde_json::from_str(body) {
            Ok(value @ serde_json::Value::Object(_)) => Host::deserialize(value).ok(),
            _ => None,
        }
    }

    /// Returns a copy restricted to the fields of the geo endpoint, with
    /// hostname, org and phone cleared.
    #[must_use]
    pub fn into_geo(mut self) -> Host {
        self.hostname.clear();
        self.org.clear();
        self.phone.clear();
        self
    }

    /// Returns the value of `field`, or "" if the response omitted it.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::City => &self.city,
            Field::Country => &self.country,
            Field::Hostname => &self.hostname,
            Field::Ip => &self.ip,
            Field::Loc => &self.loc,
            Field::Org => &self.org,
            Field::Phone => &self.phone,
            Field::Postal => &self.postal,
            Field::Region => &self.region,
            Field::Timezone => &self.timezone,
            Field::Readme => &self.readme,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::City => &mut self.city,
            Field::Country => &mut self.country,
            Field::Hostname => &mut self.hostname,
            Field::Ip => &mut self.ip,
            Field::Loc => &mut self.loc,
            Field::Org => &mut self.org,
            Field::Phone => &mut self.phone,
            Field::Postal => &mut self.postal,
            Field::Region => &mut self.region,
            Field::Timezone => &mut self.timezone,
            Field::Readme => &mut self.readme,
        }
    }

    /// City name.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Two-letter country code.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Reverse DNS hostname.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// IP address.
    #[must_use]
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// Latitude and longitude, e.g. "41.9950,-88.1856".
    #[must_use]
    pub fn loc(&self) -> &str {
        &self.loc
    }

    /// Organization.
    #[must_use]
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Phone area code.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Postal code.
    #[must_use]
    pub fn postal(&self) -> &str {
        &self.postal
    }

    /// Region name.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Time zone.
    #[must_use]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Documentation link returned for unauthenticated requests.
    #[must_use]
    pub fn readme(&self) -> &str {
        &self.readme
    }

    /// Returns every recognized field keyed by its wire name.
    #[must_use]
    pub fn properties(&self) -> BTreeMap<String, String> {
        Field::ALL
            .into_iter()
            .map(|field| (field.as_str().to_owned(), self.get(field).to_owned()))
            .collect()
    }

    /// Returns true if every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
