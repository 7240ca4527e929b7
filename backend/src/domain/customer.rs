//! Customer identity carried on a tracking request.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::slug::is_valid_slug;

/// Maximum length, in characters, of customer names and slugs.
pub const CUSTOMER_FIELD_MAX: usize = 255;

/// Validation errors for customer names and slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerValidationError {
    EmptyName,
    NameTooLong { max: usize },
    InvalidSlug,
    SlugTooLong { max: usize },
}

impl fmt::Display for CustomerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "This field may not be blank."),
            Self::NameTooLong { max } | Self::SlugTooLong { max } => {
                write!(f, "Ensure this field has no more than {max} characters.")
            }
            Self::InvalidSlug => write!(
                f,
                "customer_slug must be kebab-case format (e.g., 'redbox-logistics')"
            ),
        }
    }
}

impl std::error::Error for CustomerValidationError {}

/// Customer display name. Not part of the tracking number hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerName(String);

impl CustomerName {
    /// Trim and validate a display name.
    pub fn new(name: impl AsRef<str>) -> Result<Self, CustomerValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(CustomerValidationError::EmptyName);
        }
        if name.chars().count() > CUSTOMER_FIELD_MAX {
            return Err(CustomerValidationError::NameTooLong {
                max: CUSTOMER_FIELD_MAX,
            });
        }
        Ok(Self(name.to_owned()))
    }
}

/// Kebab-case customer handle, e.g. `redbox-logistics`.
///
/// # Examples
/// ```
/// use tracking_backend::domain::CustomerSlug;
///
/// assert!(CustomerSlug::new("redbox-logistics").is_ok());
/// assert!(CustomerSlug::new("RedBox").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerSlug(String);

impl CustomerSlug {
    /// Trim and validate a slug.
    pub fn new(slug: impl AsRef<str>) -> Result<Self, CustomerValidationError> {
        let slug = slug.as_ref().trim();
        if slug.chars().count() > CUSTOMER_FIELD_MAX {
            return Err(CustomerValidationError::SlugTooLong {
                max: CUSTOMER_FIELD_MAX,
            });
        }
        if !is_valid_slug(&slug) {
            return Err(CustomerValidationError::InvalidSlug);
        }
        Ok(Self(slug.to_owned()))
    }
}

macro_rules! string_newtype_impls {
    ($ty:ident) => {
        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = CustomerValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

string_newtype_impls!(CustomerName);
string_newtype_impls!(CustomerSlug);
