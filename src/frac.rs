//! Exact rational aspect ratios
//!
//! A [`Frac`] keeps width and height of an aspect ratio as a fraction so the
//! colon form handed to the media player (`"16:9"`, `"2.35:1"`) survives a
//! round trip unchanged. Decimal input is quantized to steps of
//! 1/[`QUANTIZATION_BASE`], which is the granularity of the aspect-ratio slider.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Denominator ceiling used when reducing a decimal to a fraction
pub const QUANTIZATION_BASE: i32 = 128;

/// Separator of the external ratio text form
const RATIO_SEPARATOR: char = ':';

/// Aspect ratio as numerator / denominator
///
/// Values are stored verbatim; only [`Frac::from_decimal`] reduces. A zero
/// denominator is accepted and yields the usual infinite/NaN results from
/// [`Frac::to_decimal`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Frac {
    numerator: f64,
    denominator: f64,
}

impl Frac {
    /// The ratio 1:1
    pub const ONE: Self = Self::new(1.0, 1.0);

    pub const fn new(numerator: f64, denominator: f64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> f64 {
        self.numerator
    }

    pub fn denominator(&self) -> f64 {
        self.denominator
    }

    /// Decimal value (`numerator / denominator`)
    pub fn to_decimal(&self) -> f64 {
        self.numerator / self.denominator
    }

    /// Base-2 logarithm of the decimal value
    ///
    /// NaN for ratios that are zero or negative, `-inf` for exactly zero.
    /// Use [`Frac::checked_exponent`] to get an error instead.
    pub fn to_exponent(&self) -> f64 {
        self.to_decimal().log2()
    }

    /// Like [`Frac::to_exponent`], but rejects ratios outside `(0, inf)`
    pub fn checked_exponent(&self) -> Result<f64> {
        let decimal = self.to_decimal();
        if decimal > 0.0 {
            Ok(decimal.log2())
        } else {
            Err(Error::NonPositiveRatio(self.to_string()))
        }
    }

    /// Quantize a decimal to 1/128 steps and reduce to lowest terms.
    ///
    /// The scaled value is truncated toward zero. Zero reduces to `0/1`.
    pub fn from_decimal(value: f64) -> Self {
        // `as` truncates toward zero and saturates; NaN becomes 0
        let whole = (value * QUANTIZATION_BASE as f64) as i32;
        let divisor = gcd(whole, QUANTIZATION_BASE);

        Self::new(
            (whole / divisor) as f64,
            (QUANTIZATION_BASE / divisor) as f64,
        )
    }

    /// Ratio `2^value`, quantized like [`Frac::from_decimal`]
    pub fn from_exponent(value: f64) -> Self {
        Self::from_decimal(2f64.powf(value))
    }

    /// Re-normalize through the decimal value
    pub fn reduced(&self) -> Self {
        Self::from_decimal(self.to_decimal())
    }

    /// Colon form understood by the player, e.g. `"16:9"`
    pub fn to_ratio_text(&self) -> String {
        format!("{}{}{}", self.numerator, RATIO_SEPARATOR, self.denominator)
    }

    /// Parse the colon form. Both sides may be fractional (`"2.35:1"`).
    pub fn from_ratio_text(text: &str) -> Result<Self> {
        let mut fields = text.split(RATIO_SEPARATOR);
        let (Some(numerator), Some(denominator), None) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(Error::InvalidRatioText(text.to_string()));
        };

        Ok(Self::new(parse_field(numerator)?, parse_field(denominator)?))
    }
}

fn parse_field(field: &str) -> Result<f64> {
    let field = field.trim();
    field.parse().map_err(|source| Error::InvalidNumber {
        value: field.to_string(),
        source,
    })
}

/// Euclid on truncating remainders.
///
/// `gcd(0, b)` is `b`. Negative inputs can yield a negative divisor, which
/// moves the sign onto the denominator of the reduced fraction.
fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

impl fmt::Display for Frac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Frac {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_ratio_text(s)
    }
}

impl TryFrom<String> for Frac {
    type Error = Error;

    fn try_from(text: String) -> Result<Self> {
        Self::from_ratio_text(&text)
    }
}

impl From<Frac> for String {
    fn from(frac: Frac) -> Self {
        frac.to_ratio_text()
    }
}

impl Add for Frac {
    type Output = Frac;

    fn add(self, rhs: Frac) -> Frac {
        Frac::new(
            self.numerator * rhs.denominator + rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Sub for Frac {
    type Output = Frac;

    fn sub(self, rhs: Frac) -> Frac {
        Frac::new(
            self.numerator * rhs.denominator - rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Mul for Frac {
    type Output = Frac;

    fn mul(self, rhs: Frac) -> Frac {
        Frac::new(
            self.numerator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Div for Frac {
    type Output = Frac;

    fn div(self, rhs: Frac) -> Frac {
        Frac::new(
            self.numerator * rhs.denominator,
            self.denominator * rhs.numerator,
        )
    }
}

impl Neg for Frac {
    type Output = Frac;

    fn neg(self) -> Frac {
        Frac::new(-self.numerator, self.denominator)
    }
}
