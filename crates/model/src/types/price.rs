// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Represents a price in a market with a specified precision.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use sextant_core::correctness::FAILED;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::fixed::{check_fixed_precision, f64_to_fixed_i64, fixed_i64_to_f64};

/// Represents a price in a market with a specified precision.
///
/// The number of decimal places may vary. For certain asset classes, prices may
/// be negative values (e.g. prices for options instruments can be negative under
/// certain conditions).
#[repr(C)]
#[derive(Clone, Copy, Default, Eq)]
pub struct Price {
    /// The raw fixed-point value, with `precision` defining the number of decimal places.
    pub raw: i64,
    /// The number of decimal places.
    pub precision: u8,
}

impl Price {
    /// Creates a new [`Price`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not finite, or `precision` is invalid.
    pub fn new_checked(value: f64, precision: u8) -> anyhow::Result<Self> {
        if !value.is_finite() {
            anyhow::bail!("invalid f64 for 'value', was {value}");
        }
        check_fixed_precision(precision)?;
        Ok(Self {
            raw: f64_to_fixed_i64(value, precision),
            precision,
        })
    }

    /// Creates a new [`Price`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails.
    pub fn new(value: f64, precision: u8) -> Self {
        Self::new_checked(value, precision).expect(FAILED)
    }

    /// Creates a new [`Price`] instance from a raw fixed-point value.
    ///
    /// # Panics
    ///
    /// Panics if `precision` exceeds the maximum fixed-point precision.
    #[must_use]
    pub fn from_raw(raw: i64, precision: u8) -> Self {
        check_fixed_precision(precision).expect(FAILED);
        Self { raw, precision }
    }

    /// Creates a new [`Price`] instance with a value of zero.
    #[must_use]
    pub fn zero(precision: u8) -> Self {
        Self::new(0.0, precision)
    }

    /// Returns whether the price has a value of zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.raw == 0
    }

    /// Returns whether the price has a positive value.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.raw > 0
    }

    /// Returns the value of the price as an `f64`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        fixed_i64_to_f64(self.raw)
    }
}

impl FromStr for Price {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let float_from_input = value
            .parse::<f64>()
            .map_err(|e| anyhow::anyhow!("Error parsing `input` string '{value}' as f64: {e}"))?;
        let precision = value
            .split_once('.')
            .map_or(0, |(_, fraction)| fraction.len()) as u8;
        Self::new_checked(float_from_input, precision)
    }
}

impl From<&str> for Price {
    /// Creates a [`Price`] from a decimal string, inferring the precision from
    /// the number of fractional digits.
    ///
    /// # Panics
    ///
    /// Panics if the `value` string is not a valid decimal.
    fn from(value: &str) -> Self {
        Self::from_str(value).expect(FAILED)
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl Hash for Price {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl Neg for Price {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            raw: -self.raw,
            precision: self.precision,
        }
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            raw: self
                .raw
                .checked_add(rhs.raw)
                .expect("Overflow occurred when adding `Price`"),
            precision: self.precision.max(rhs.precision),
        }
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            raw: self
                .raw
                .checked_sub(rhs.raw)
                .expect("Underflow occurred when subtracting `Price`"),
            precision: self.precision.max(rhs.precision),
        }
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Price {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Debug for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({self})", stringify!(Price))
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.*}", self.precision as usize, self.as_f64())
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_new() {
        let price = Price::new(1.23456, 5);
        assert_eq!(price.precision, 5);
        assert_eq!(price.as_f64(), 1.23456);
        assert!(price.is_positive());
        assert!(!price.is_zero());
    }

    #[rstest]
    fn test_zero() {
        let price = Price::zero(2);
        assert!(price.is_zero());
        assert!(!price.is_positive());
    }

    #[rstest]
    #[case("1.00000", 5, 1.0)]
    #[case("0.1", 1, 0.1)]
    #[case("-10.5", 1, -10.5)]
    #[case("100", 0, 100.0)]
    fn test_from_str(#[case] input: &str, #[case] precision: u8, #[case] value: f64) {
        let price = Price::from(input);
        assert_eq!(price.precision, precision);
        assert_eq!(price.as_f64(), value);
    }

    #[rstest]
    fn test_from_str_invalid() {
        assert!(Price::from_str("not-a-price").is_err());
        assert!(Price::from_str("1.0000000001").is_err()); // precision too high
    }

    #[rstest]
    fn test_equality_and_ordering() {
        assert_eq!(Price::new(1.0, 1), Price::new(1.0, 1));
        assert!(Price::new(1.1, 1) > Price::new(1.0, 1));
        assert!(Price::new(-1.0, 1) < Price::zero(1));
    }

    #[rstest]
    fn test_arithmetic() {
        let a = Price::new(1.5, 2);
        let b = Price::new(0.5, 2);
        assert_eq!(a + b, Price::new(2.0, 2));
        assert_eq!(a - b, Price::new(1.0, 2));
        assert_eq!(-a, Price::new(-1.5, 2));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Price::new(1.0, 5).to_string(), "1.00000");
        assert_eq!(format!("{:?}", Price::new(1.0, 2)), "Price(1.00)");
    }

    #[rstest]
    fn test_serde_round_trip() {
        let price = Price::new(1.23, 2);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"1.23\"");
        let deserialized: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, price);
    }
}
