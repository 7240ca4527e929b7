//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every invalid field is collected so a single response reports all of them
//! as `{ "<field>": ["<message>", ...] }`.

use std::collections::BTreeMap;
use std::fmt::Display;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::TrackingError;

/// Message reported for an absent required field.
pub(crate) const REQUIRED_MESSAGE: &str = "This field is required.";

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Accumulator for per-field validation messages.
#[derive(Debug, Default)]
pub(crate) struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub(crate) fn push(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.entry(field.as_str()).or_default().push(message.into());
    }

    /// Return the value, recording a required-field error when it is absent.
    pub(crate) fn require(&mut self, field: FieldName, value: Option<String>) -> Option<String> {
        if value.is_none() {
            self.push(field, REQUIRED_MESSAGE);
        }
        value
    }

    /// Validate a present value, recording the error message on failure.
    pub(crate) fn check<T, E, F>(
        &mut self,
        field: FieldName,
        value: Option<String>,
        parse: F,
    ) -> Option<T>
    where
        E: Display,
        F: FnOnce(&str) -> Result<T, E>,
    {
        let raw = self.require(field, value)?;
        match parse(&raw) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                self.push(field, err.to_string());
                None
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert the collected messages into a validation failure.
    pub(crate) fn into_error(self) -> TrackingError {
        let details = self
            .0
            .into_iter()
            .map(|(field, messages)| {
                let messages = messages.into_iter().map(Value::String).collect();
                (field.to_owned(), Value::Array(messages))
            })
            .collect();
        TrackingError::Validation {
            details: Value::Object(details),
        }
    }
}

/// Parse a UUID into its canonical lowercase hyphenated form.
pub(crate) fn parse_uuid(value: &str) -> Result<Uuid, &'static str> {
    Uuid::parse_str(value.trim()).map_err(|_| {
        "customer_id must be a valid UUID (e.g., 'de619854-b59b-425e-9db4-943979e1bd49')"
    })
}

/// Parse an RFC 3339 timestamp keeping its offset.
pub(crate) fn parse_rfc3339_timestamp(value: &str) -> Result<DateTime<FixedOffset>, &'static str> {
    DateTime::parse_from_rfc3339(value.trim()).map_err(|_| {
        "created_at must be RFC 3339 timestamp format (e.g., '2018-11-20T19:29:32+08:00')"
    })
}
