//! Tracking number value type and its derivation.
//!
//! A tracking number is the origin and destination country codes followed by
//! a base-36 suffix derived from two chained SHA-256 digests:
//!
//! 1. `sha256(origin + destination + weight + customer_id + customer_slug)`
//!    rendered as lowercase hex;
//! 2. `sha256(digest_hex + created_at_micros + correlation_id_simple)`;
//! 3. the first six bytes of the second digest, base-36 encoded and cut to
//!    ten characters.
//!
//! The result is upper-cased and capped at [`TRACKING_NUMBER_MAX_LEN`]
//! characters. Derivation is pure: the same input and correlation identifier
//! always yield the same number.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{CorrelationId, GenerationInput};

/// Upper bound on tracking number length.
pub const TRACKING_NUMBER_MAX_LEN: usize = 16;

const SUFFIX_LEN: usize = 10;
const SUFFIX_SOURCE_BYTES: usize = 6;
const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Error returned when a string is not a well-formed tracking number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("tracking number must match [A-Z0-9]{{1,16}}: {value:?}")]
pub struct TrackingNumberFormatError {
    value: String,
}

/// Uppercase alphanumeric identifier of at most 16 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Validate a tracking number received from outside the generator.
    pub fn new(value: impl Into<String>) -> Result<Self, TrackingNumberFormatError> {
        let value = value.into();
        let well_formed = !value.is_empty()
            && value.len() <= TRACKING_NUMBER_MAX_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if well_formed {
            Ok(Self(value))
        } else {
            Err(TrackingNumberFormatError { value })
        }
    }
}

impl AsRef<str> for TrackingNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<TrackingNumber> for String {
    fn from(value: TrackingNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for TrackingNumber {
    type Error = TrackingNumberFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Derive the tracking number for `input` under `correlation_id`.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use tracking_backend::domain::{
///     generate_tracking_number, CorrelationId, CountryCode, CountryRole, CustomerName,
///     CustomerSlug, GenerationInput, Weight,
/// };
///
/// let input = GenerationInput {
///     origin: CountryCode::parse("MY", CountryRole::Origin).unwrap(),
///     destination: CountryCode::parse("ID", CountryRole::Destination).unwrap(),
///     weight: Weight::parse("1.234").unwrap(),
///     created_at: DateTime::parse_from_rfc3339("2018-11-20T19:29:32+08:00").unwrap(),
///     customer_id: "de619854-b59b-425e-9db4-943979e1bd49".parse().unwrap(),
///     customer_name: CustomerName::new("RedBox Logistics").unwrap(),
///     customer_slug: CustomerSlug::new("redbox-logistics").unwrap(),
/// };
/// let correlation_id: CorrelationId = "4f9e6b3a-1c2d-4e5f-8a7b-9c0d1e2f3a4b".parse().unwrap();
///
/// let number = generate_tracking_number(&input, &correlation_id);
/// assert_eq!(number.as_ref(), "MYIDF50EDWNIQ");
/// ```
#[must_use]
pub fn generate_tracking_number(
    input: &GenerationInput,
    correlation_id: &CorrelationId,
) -> TrackingNumber {
    let identity_seed = format!(
        "{}{}{}{}{}",
        input.origin,
        input.destination,
        input.weight.seed_repr(),
        input.customer_id.hyphenated(),
        input.customer_slug,
    );
    let identity_digest = hex::encode(Sha256::digest(identity_seed.as_bytes()));

    let attempt_seed = format!(
        "{identity_digest}{}{}",
        input.created_at.timestamp_micros(),
        correlation_id.simple(),
    );
    let attempt_digest = Sha256::digest(attempt_seed.as_bytes());

    let suffix_source = attempt_digest[..SUFFIX_SOURCE_BYTES]
        .iter()
        .fold(0_u64, |acc, byte| (acc << 8) | u64::from(*byte));
    let suffix: String = to_base36(suffix_source).chars().take(SUFFIX_LEN).collect();

    let mut number = format!("{}{}{suffix}", input.origin, input.destination);
    number.truncate(TRACKING_NUMBER_MAX_LEN);
    TrackingNumber(number.to_ascii_uppercase())
}

/// Encode `value` in base 36 using the digits `0-9A-Z`, without padding.
#[must_use]
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while value > 0 {
        let index = usize::try_from(value % 36).unwrap_or_default();
        digits.push(char::from(BASE36_DIGITS[index]));
        value /= 36;
    }
    digits.iter().rev().collect()
}

#[cfg(test)]
#[path = "tracking_number_tests.rs"]
mod tests;
