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

//! Represents an amount of money in a specified currency denomination.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use sextant_core::correctness::FAILED;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{
    currency::Currency,
    fixed::{f64_to_fixed_i64, fixed_i64_to_f64},
};

/// Represents an amount of money in a specified currency denomination.
///
/// The amount precision is taken from the currency.
#[repr(C)]
#[derive(Clone, Copy, Eq)]
pub struct Money {
    /// The raw fixed-point amount, with the currency precision defining the number of decimal places.
    pub raw: i64,
    /// The currency denomination associated with the money amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is not finite.
    pub fn new_checked(amount: f64, currency: Currency) -> anyhow::Result<Self> {
        if !amount.is_finite() {
            anyhow::bail!("invalid f64 for 'amount', was {amount}");
        }
        Ok(Self {
            raw: f64_to_fixed_i64(amount, currency.precision),
            currency,
        })
    }

    /// Creates a new [`Money`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is not finite.
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self::new_checked(amount, currency).expect(FAILED)
    }

    /// Creates a new [`Money`] instance from a raw fixed-point amount.
    #[must_use]
    pub const fn from_raw(raw: i64, currency: Currency) -> Self {
        Self { raw, currency }
    }

    /// Creates a new [`Money`] instance with an amount of zero.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::new(0.0, currency)
    }

    /// Returns whether the money has an amount of zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.raw == 0
    }

    /// Returns the amount of money as an `f64`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        fixed_i64_to_f64(self.raw)
    }
}

impl FromStr for Money {
    type Err = anyhow::Error;

    /// Parses a money string in the format "<amount> <currency>"
    /// (e.g. "1.25 USD").
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (amount_part, currency_part) = value.split_once(' ').ok_or_else(|| {
            anyhow::anyhow!(
                "Error parsing `Money` from '{value}': expected '<amount> <currency>' format"
            )
        })?;
        let amount = amount_part
            .parse::<f64>()
            .map_err(|e| anyhow::anyhow!("Error parsing amount '{amount_part}' as f64: {e}"))?;
        let currency = Currency::from_str(currency_part)?;
        Self::new_checked(amount, currency)
    }
}

impl From<&str> for Money {
    /// Creates a [`Money`] from an "<amount> <currency>" string.
    ///
    /// # Panics
    ///
    /// Panics if the `value` string is not valid.
    fn from(value: &str) -> Self {
        Self::from_str(value).expect(FAILED)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.raw == other.raw
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        assert_eq!(
            self.currency, other.currency,
            "Cannot compare `Money` of different currencies"
        );
        self.raw.cmp(&other.raw)
    }
}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
        self.currency.hash(state);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            raw: -self.raw,
            currency: self.currency,
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.currency, rhs.currency,
            "Cannot add `Money` of different currencies"
        );
        Self {
            raw: self
                .raw
                .checked_add(rhs.raw)
                .expect("Overflow occurred when adding `Money`"),
            currency: self.currency,
        }
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.currency, rhs.currency,
            "Cannot subtract `Money` of different currencies"
        );
        Self {
            raw: self
                .raw
                .checked_sub(rhs.raw)
                .expect("Underflow occurred when subtracting `Money`"),
            currency: self.currency,
        }
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({self})", stringify!(Money))
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.*} {}",
            self.currency.precision as usize,
            self.as_f64(),
            self.currency
        )
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
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
        let money = Money::new(100.50, Currency::USD());
        assert_eq!(money.as_f64(), 100.50);
        assert_eq!(money.currency, Currency::USD());
    }

    #[rstest]
    fn test_from_str() {
        let money = Money::from("1.25 USD");
        assert_eq!(money, Money::new(1.25, Currency::USD()));
    }

    #[rstest]
    #[case("1.25")] // missing currency
    #[case("1.25 XYZ-UNKNOWN")] // unknown currency
    #[case("abc USD")] // invalid amount
    fn test_from_str_invalid(#[case] input: &str) {
        assert!(Money::from_str(input).is_err());
    }

    #[rstest]
    fn test_arithmetic() {
        let a = Money::new(10.0, Currency::USD());
        let b = Money::new(2.5, Currency::USD());
        assert_eq!(a + b, Money::new(12.5, Currency::USD()));
        assert_eq!(a - b, Money::new(7.5, Currency::USD()));
        assert_eq!(-a, Money::new(-10.0, Currency::USD()));
    }

    #[rstest]
    #[should_panic(expected = "Cannot add `Money` of different currencies")]
    fn test_add_different_currencies_panics() {
        let _ = Money::new(1.0, Currency::USD()) + Money::new(1.0, Currency::EUR());
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Money::new(100.5, Currency::USD()).to_string(), "100.50 USD");
        assert_eq!(Money::new(100.0, Currency::JPY()).to_string(), "100 JPY");
    }

    #[rstest]
    fn test_serde_round_trip() {
        let money = Money::new(5.5, Currency::AUD());
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, "\"5.50 AUD\"");
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, money);
    }
}
