//! ISO 3166-1 alpha-2 country codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which leg of the shipment a country code describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryRole {
    Origin,
    Destination,
}

/// Validation errors returned by [`CountryCode::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCodeError {
    role: CountryRole,
}

impl fmt::Display for CountryCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            CountryRole::Origin => write!(
                f,
                "Origin country ID must be ISO 3166-1 alpha-2 format (e.g., 'MY')"
            ),
            CountryRole::Destination => write!(
                f,
                "Destination country ID must be ISO 3166-1 alpha-2 format (e.g., 'ID')"
            ),
        }
    }
}

impl std::error::Error for CountryCodeError {}

/// Two uppercase ASCII letters.
///
/// # Examples
/// ```
/// use tracking_backend::domain::{CountryCode, CountryRole};
///
/// let code = CountryCode::parse(" my ", CountryRole::Origin).expect("valid code");
/// assert_eq!(code.as_ref(), "MY");
/// assert!(CountryCode::parse("USA", CountryRole::Origin).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Trim, upper-case, and validate raw input.
    pub fn parse(raw: &str, role: CountryRole) -> Result<Self, CountryCodeError> {
        match raw.trim().as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => Err(CountryCodeError { role }),
        }
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        // Both bytes are ASCII letters by construction.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CountryCode> for String {
    fn from(value: CountryCode) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CountryCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value, CountryRole::Origin)
    }
}
