//! Parcel weight in kilograms with gram precision.
//!
//! Weights are stored as whole grams so the value survives formatting and
//! persistence without floating-point drift.

use std::fmt;

/// Maximum number of fractional digits accepted on input.
pub const WEIGHT_DECIMAL_PLACES: usize = 3;
/// Maximum number of significant digits accepted on input.
pub const WEIGHT_MAX_DIGITS: usize = 10;

const GRAMS_PER_KG: u64 = 1_000;
// Any larger exponent on a non-zero mantissa exceeds the digit limit.
const MAX_EXPONENT: u32 = 32;

/// Validation errors returned by [`Weight::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeightError {
    NotANumber,
    TooManyDecimalPlaces { max: usize },
    TooManyDigits { max: usize },
    TooManyWholeDigits { max: usize },
    BelowMinimum,
}

impl fmt::Display for WeightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "A valid number is required."),
            Self::TooManyDecimalPlaces { max } => {
                write!(f, "Ensure that there are no more than {max} decimal places.")
            }
            Self::TooManyDigits { max } => {
                write!(f, "Ensure that there are no more than {max} digits in total.")
            }
            Self::TooManyWholeDigits { max } => write!(
                f,
                "Ensure that there are no more than {max} digits before the decimal point."
            ),
            Self::BelowMinimum => write!(f, "Ensure this value is greater than or equal to 0.001."),
        }
    }
}

impl std::error::Error for WeightError {}

/// Strictly positive weight.
///
/// # Examples
/// ```
/// use tracking_backend::domain::Weight;
///
/// let weight = Weight::parse("1.5").expect("valid weight");
/// assert_eq!(weight.grams(), 1_500);
/// assert_eq!(weight.to_string(), "1.500");
/// assert_eq!(weight.seed_repr(), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u64);

impl Weight {
    /// Construct from whole grams. Returns `None` for zero.
    #[must_use]
    pub fn from_grams(grams: u64) -> Option<Self> {
        (grams > 0).then_some(Self(grams))
    }

    /// Parse a decimal kilogram string such as `"1.234"` or `"1.5e-2"`.
    pub fn parse(raw: &str) -> Result<Self, WeightError> {
        let raw = raw.trim();
        let (negative, unsigned) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };
        let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (
                mantissa,
                exponent
                    .parse::<i32>()
                    .map_err(|_| WeightError::NotANumber)?,
            ),
            None => (unsigned, 0),
        };
        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(WeightError::NotANumber);
        }
        let (whole, fraction) = shift_point(whole, fraction, exponent)?;

        let significant_whole = whole.trim_start_matches('0');
        if significant_whole.len() + fraction.len() > WEIGHT_MAX_DIGITS {
            return Err(WeightError::TooManyDigits {
                max: WEIGHT_MAX_DIGITS,
            });
        }
        if fraction.len() > WEIGHT_DECIMAL_PLACES {
            return Err(WeightError::TooManyDecimalPlaces {
                max: WEIGHT_DECIMAL_PLACES,
            });
        }
        let max_whole = WEIGHT_MAX_DIGITS - WEIGHT_DECIMAL_PLACES;
        if significant_whole.len() > max_whole {
            return Err(WeightError::TooManyWholeDigits { max: max_whole });
        }

        let kilograms = parse_digits(significant_whole);
        let fractional_grams = format!("{fraction:0<width$}", width = WEIGHT_DECIMAL_PLACES);
        let grams = kilograms * GRAMS_PER_KG + parse_digits(&fractional_grams);

        if negative || grams == 0 {
            return Err(WeightError::BelowMinimum);
        }
        Ok(Self(grams))
    }

    /// Weight in whole grams.
    #[must_use]
    pub fn grams(&self) -> u64 {
        self.0
    }

    /// Shortest decimal rendering with at least one fractional digit.
    ///
    /// This is the form hashed into the tracking number seed.
    #[must_use]
    pub fn seed_repr(&self) -> String {
        let fraction = format!("{:03}", self.0 % GRAMS_PER_KG);
        let trimmed = fraction.trim_end_matches('0');
        let fraction = if trimmed.is_empty() { "0" } else { trimmed };
        format!("{}.{fraction}", self.0 / GRAMS_PER_KG)
    }
}

// Moves the decimal point `exponent` places to the right, padding with zeros.
fn shift_point(
    whole: &str,
    fraction: &str,
    exponent: i32,
) -> Result<(String, String), WeightError> {
    let digits = format!("{whole}{fraction}");
    if exponent.unsigned_abs() > MAX_EXPONENT {
        return if digits.bytes().all(|b| b == b'0') {
            Err(WeightError::BelowMinimum)
        } else {
            Err(WeightError::TooManyDigits {
                max: WEIGHT_MAX_DIGITS,
            })
        };
    }
    let shift = usize::try_from(exponent.unsigned_abs()).unwrap_or(usize::MAX);
    if exponent >= 0 {
        let point = whole.len() + shift;
        let padded = format!("{digits:0<point$}");
        let (whole, fraction) = padded.split_at(point);
        return Ok((whole.to_owned(), fraction.to_owned()));
    }
    if shift >= whole.len() {
        let zeros = "0".repeat(shift - whole.len());
        return Ok(("0".to_owned(), format!("{zeros}{digits}")));
    }
    let (whole, fraction) = digits.split_at(whole.len() - shift);
    Ok((whole.to_owned(), fraction.to_owned()))
}

// Inputs are bounded to ten ASCII digits, so the accumulator cannot overflow.
fn parse_digits(digits: &str) -> u64 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u64::from(b - b'0'))
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.0 / GRAMS_PER_KG, self.0 % GRAMS_PER_KG)
    }
}
