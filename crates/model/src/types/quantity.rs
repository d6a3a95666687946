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

//! Represents a quantity with a non-negative value and a specified precision.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

use sextant_core::correctness::{FAILED, check_non_negative_f64};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::fixed::{check_fixed_precision, f64_to_fixed_u64, fixed_u64_to_f64};

/// Represents a quantity with a non-negative value and a specified precision.
///
/// Capable of storing either a whole number (no decimal places) of 'contracts'
/// or 'shares', or a decimal value containing decimal places for non-share
/// quantity asset classes.
#[repr(C)]
#[derive(Clone, Copy, Default, Eq)]
pub struct Quantity {
    /// The raw fixed-point value, with `precision` defining the number of decimal places.
    pub raw: u64,
    /// The number of decimal places.
    pub precision: u8,
}

impl Quantity {
    /// Creates a new [`Quantity`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is negative or not finite, or `precision` is invalid.
    pub fn new_checked(value: f64, precision: u8) -> anyhow::Result<Self> {
        check_non_negative_f64(value, stringify!(value))?;
        check_fixed_precision(precision)?;
        Ok(Self {
            raw: f64_to_fixed_u64(value, precision),
            precision,
        })
    }

    /// Creates a new [`Quantity`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails.
    pub fn new(value: f64, precision: u8) -> Self {
        Self::new_checked(value, precision).expect(FAILED)
    }

    /// Creates a new [`Quantity`] instance from a raw fixed-point value.
    ///
    /// # Panics
    ///
    /// Panics if `precision` exceeds the maximum fixed-point precision.
    #[must_use]
    pub fn from_raw(raw: u64, precision: u8) -> Self {
        check_fixed_precision(precision).expect(FAILED);
        Self { raw, precision }
    }

    /// Creates a new [`Quantity`] instance with a value of zero.
    #[must_use]
    pub fn zero(precision: u8) -> Self {
        Self::new(0.0, precision)
    }

    /// Returns whether the quantity has a value of zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.raw == 0
    }

    /// Returns whether the quantity has a positive value.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.raw > 0
    }

    /// Returns the value of the quantity as an `f64`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        fixed_u64_to_f64(self.raw)
    }
}

impl FromStr for Quantity {
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

impl From<&str> for Quantity {
    /// Creates a [`Quantity`] from a decimal string, inferring the precision
    /// from the number of fractional digits.
    ///
    /// # Panics
    ///
    /// Panics if the `value` string is not a valid decimal.
    fn from(value: &str) -> Self {
        Self::from_str(value).expect(FAILED)
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quantity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl Hash for Quantity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            raw: self
                .raw
                .checked_add(rhs.raw)
                .expect("Overflow occurred when adding `Quantity`"),
            precision: self.precision.max(rhs.precision),
        }
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            raw: self
                .raw
                .checked_sub(rhs.raw)
                .expect("Underflow occurred when subtracting `Quantity`"),
            precision: self.precision.max(rhs.precision),
        }
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Debug for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({self})", stringify!(Quantity))
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.*}", self.precision as usize, self.as_f64())
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Quantity {
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
        let qty = Quantity::new(100_000.0, 0);
        assert_eq!(qty.precision, 0);
        assert_eq!(qty.as_f64(), 100_000.0);
        assert!(qty.is_positive());
    }

    #[rstest]
    #[should_panic]
    fn test_negative_value_panics() {
        let _ = Quantity::new(-1.0, 0);
    }

    #[rstest]
    #[case("0.1", 1, 0.1)]
    #[case("100", 0, 100.0)]
    #[case("1.000000001", 9, 1.000000001)]
    fn test_from_str(#[case] input: &str, #[case] precision: u8, #[case] value: f64) {
        let qty = Quantity::from(input);
        assert_eq!(qty.precision, precision);
        assert!((qty.as_f64() - value).abs() < 1e-12);
    }

    #[rstest]
    fn test_arithmetic() {
        let a = Quantity::new(3.0, 1);
        let b = Quantity::new(1.5, 1);
        assert_eq!(a + b, Quantity::new(4.5, 1));
        assert_eq!(a - b, Quantity::new(1.5, 1));
    }

    #[rstest]
    #[should_panic(expected = "Underflow occurred when subtracting `Quantity`")]
    fn test_subtract_underflow_panics() {
        let _ = Quantity::new(1.0, 0) - Quantity::new(2.0, 0);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Quantity::new(100.0, 0).to_string(), "100");
        assert_eq!(Quantity::new(0.5, 2).to_string(), "0.50");
    }

    #[rstest]
    fn test_serde_round_trip() {
        let qty = Quantity::new(0.25, 2);
        let json = serde_json::to_string(&qty).unwrap();
        let deserialized: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, qty);
    }
}
