//! Major/minor currency unit conversion.
//!
//! Paystack expects amounts in the smallest unit of the currency (kobo,
//! pesewas, cents). Every currency the bridge handles has exactly two
//! decimal places, so one major unit is always 100 minor units.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ValidationError;

/// Number of decimal places kept before converting to minor units.
const MINOR_DIGITS: u32 = 2;

/// Converts a major-unit amount to minor units.
///
/// The amount is first quantized to two decimal places with half-up
/// rounding (`10.005` becomes `10.01`), then scaled by 100. Returns `None`
/// only when the result does not fit in an `i64`.
pub fn checked_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .round_dp_with_strategy(MINOR_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .trunc()
        .to_i64()
}

/// A strictly positive amount in major currency units (e.g. `10.50`).
///
/// The minor-unit value is computed once at construction, so
/// [`MajorAmount::to_minor_units`] cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MajorAmount {
    value: Decimal,
    minor: i64,
}

impl MajorAmount {
    /// Creates a new amount, rejecting zero, negative and out-of-range values.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }
        let minor = checked_minor_units(value).ok_or(ValidationError::AmountTooLarge)?;
        Ok(Self { value, minor })
    }

    /// Parses an amount from its textual form.
    ///
    /// Accepts plain decimals (`"10.50"`) as well as scientific notation
    /// (`"1.05e1"`); surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if let Some(value) = parse_decimal(raw) {
            return Self::new(value);
        }
        // Numeric text a Decimal cannot hold (scale above 28 or beyond its range).
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => Self::from_float(f),
            _ => Err(ValidationError::NonNumericAmount),
        }
    }

    /// Extracts an amount from a raw JSON field.
    ///
    /// JSON numbers and numeric strings are accepted. `null` counts as
    /// missing; any other JSON type is not a number.
    pub fn from_json(value: Option<&serde_json::Value>) -> Result<Self, ValidationError> {
        match value {
            None | Some(serde_json::Value::Null) => Err(ValidationError::MissingAmount),
            Some(serde_json::Value::String(s)) => Self::parse(s),
            Some(serde_json::Value::Number(n)) => Self::parse(&n.to_string()),
            Some(_) => Err(ValidationError::NonNumericAmount),
        }
    }

    fn from_float(f: f64) -> Result<Self, ValidationError> {
        if f <= 0.0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        match Decimal::from_f64(f).filter(|d| *d > Decimal::ZERO) {
            Some(value) => Self::new(value),
            // Smaller than the finest Decimal step: positive, but zero minor units.
            None if f < 1.0 => Ok(Self {
                value: Decimal::new(1, Decimal::MAX_SCALE),
                minor: 0,
            }),
            None => Err(ValidationError::AmountTooLarge),
        }
    }

    /// The amount in major units, as supplied.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// The amount in minor units (major × 100, half-up rounded).
    pub fn to_minor_units(&self) -> i64 {
        self.minor
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

impl fmt::Display for MajorAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
