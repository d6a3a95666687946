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

//! A `UnixNanos` type for working with timestamps in nanoseconds since the UNIX epoch.
//!
//! This module provides a strongly-typed representation of timestamps as nanoseconds
//! since the UNIX epoch (January 1, 1970, 00:00:00 UTC), with conversion utilities,
//! arithmetic operations and comparison methods.
//!
//! # Parsing and Serialization
//!
//! `UnixNanos` can be created from and serialized to various formats:
//!
//! * Integer values are interpreted as nanoseconds since the UNIX epoch.
//! * Floating-point values are interpreted as seconds since the UNIX epoch.
//! * String values may be a numeric string, an RFC 3339 timestamp, or a
//!   `YYYY-MM-DD` date (midnight UTC).
//!
//! These string forms are for the edges of the system only; the core never
//! parses strings into time.
//!
//! # Limitations
//!
//! * Negative timestamps are invalid and will result in an error.
//! * Arithmetic operations will panic on overflow/underflow rather than wrapping.

use std::{
    cmp::Ordering,
    fmt::Display,
    ops::{Add, AddAssign, Deref, Sub, SubAssign},
    str::FromStr,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};

/// Represents a duration in nanoseconds.
pub type DurationNanos = u64;

/// Represents a timestamp in nanoseconds since the UNIX epoch.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct UnixNanos(u64);

impl UnixNanos {
    /// Creates a new [`UnixNanos`] instance.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying value as `u64`.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Returns the underlying value as `i64`.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0 as i64
    }

    /// Returns the underlying value as `f64`.
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Converts the underlying value to a datetime (UTC).
    #[must_use]
    pub const fn to_datetime_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.0 as i64)
    }

    /// Converts the underlying value to an ISO 8601 (RFC 3339) string.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.to_datetime_utc().to_rfc3339()
    }

    /// Calculates the duration in nanoseconds since another [`UnixNanos`] instance.
    ///
    /// Returns `Some(duration)` if `self` is later than `other`, otherwise `None`.
    #[must_use]
    pub const fn duration_since(&self, other: &Self) -> Option<DurationNanos> {
        self.0.checked_sub(other.0)
    }

    /// Saturating addition of a duration in nanoseconds.
    #[must_use]
    pub const fn saturating_add_ns(&self, rhs: DurationNanos) -> Self {
        Self(self.0.saturating_add(rhs))
    }

    /// Saturating subtraction of a duration in nanoseconds.
    #[must_use]
    pub const fn saturating_sub_ns(&self, rhs: DurationNanos) -> Self {
        Self(self.0.saturating_sub(rhs))
    }

    fn parse_string(s: &str) -> Result<Self, String> {
        // Try parsing as an integer (nanoseconds)
        if let Ok(int_value) = s.parse::<u64>() {
            return Ok(Self(int_value));
        }

        // Try parsing as a floating point number (seconds)
        if let Ok(float_value) = s.parse::<f64>() {
            if float_value < 0.0 {
                return Err("UNIX timestamp cannot be negative".into());
            }
            let nanos = (float_value * 1_000_000_000.0).round() as u64;
            return Ok(Self(nanos));
        }

        // Try parsing as an RFC 3339 timestamp
        if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
            let nanos = datetime
                .timestamp_nanos_opt()
                .ok_or_else(|| "Timestamp out of range".to_string())?;
            if nanos < 0 {
                return Err("UNIX timestamp cannot be negative".into());
            }
            return Ok(Self(nanos as u64));
        }

        // Try parsing as a simple date string (YYYY-MM-DD format)
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            let datetime = date
                .and_hms_opt(0, 0, 0)
                .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
                .ok_or_else(|| "Invalid date".to_string())?;
            let nanos = datetime
                .timestamp_nanos_opt()
                .ok_or_else(|| "Timestamp out of range".to_string())?;
            return Ok(Self(nanos as u64));
        }

        Err(format!("Invalid format: {s}"))
    }
}

impl Deref for UnixNanos {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<u64> for UnixNanos {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<u64> for UnixNanos {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl PartialEq<UnixNanos> for u64 {
    fn eq(&self, other: &UnixNanos) -> bool {
        *self == other.0
    }
}

impl PartialOrd<UnixNanos> for u64 {
    fn partial_cmp(&self, other: &UnixNanos) -> Option<Ordering> {
        self.partial_cmp(&other.0)
    }
}

impl From<u64> for UnixNanos {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UnixNanos> for u64 {
    fn from(value: UnixNanos) -> Self {
        value.0
    }
}

impl From<&str> for UnixNanos {
    fn from(value: &str) -> Self {
        value
            .parse()
            .unwrap_or_else(|e| panic!("Failed to parse string into UnixNanos: {e}"))
    }
}

impl From<String> for UnixNanos {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<DateTime<Utc>> for UnixNanos {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from(value.timestamp_nanos_opt().expect("Invalid timestamp") as u64)
    }
}

impl FromStr for UnixNanos {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_string(s).map_err(std::convert::Into::into)
    }
}

impl Add for UnixNanos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(
            self.0
                .checked_add(rhs.0)
                .expect("Error adding with overflow"),
        )
    }
}

impl Add<u64> for UnixNanos {
    type Output = Self;

    fn add(self, rhs: u64) -> Self::Output {
        Self(self.0.checked_add(rhs).expect("Error adding with overflow"))
    }
}

impl Sub for UnixNanos {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(
            self.0
                .checked_sub(rhs.0)
                .expect("Error subtracting with underflow"),
        )
    }
}

impl Sub<u64> for UnixNanos {
    type Output = Self;

    fn sub(self, rhs: u64) -> Self::Output {
        Self(
            self.0
                .checked_sub(rhs)
                .expect("Error subtracting with underflow"),
        )
    }
}

impl AddAssign for UnixNanos {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<u64> for UnixNanos {
    fn add_assign(&mut self, rhs: u64) {
        *self = *self + rhs;
    }
}

impl SubAssign for UnixNanos {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl SubAssign<u64> for UnixNanos {
    fn sub_assign(&mut self, rhs: u64) {
        *self = *self - rhs;
    }
}

impl Display for UnixNanos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for UnixNanos {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(UnixNanosVisitor)
    }
}

struct UnixNanosVisitor;

impl Visitor<'_> for UnixNanosVisitor {
    type Value = UnixNanos;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an integer, float, or string representing a UNIX timestamp")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(UnixNanos(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if value < 0 {
            return Err(E::custom("UNIX timestamp cannot be negative"));
        }
        Ok(UnixNanos(value as u64))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if value < 0.0 {
            return Err(E::custom("UNIX timestamp cannot be negative"));
        }
        Ok(UnixNanos((value * 1_000_000_000.0).round() as u64))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        UnixNanos::parse_string(value).map_err(E::custom)
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
        let nanos = UnixNanos::new(123);
        assert_eq!(nanos.as_u64(), 123);
        assert_eq!(nanos.as_i64(), 123);
    }

    #[rstest]
    fn test_from_u64() {
        let nanos = UnixNanos::from(123);
        assert_eq!(nanos.as_u64(), 123);
    }

    #[rstest]
    fn test_default() {
        let nanos = UnixNanos::default();
        assert_eq!(nanos.as_u64(), 0);
    }

    #[rstest]
    fn test_into_u64() {
        let nanos = UnixNanos::from(456);
        let value: u64 = nanos.into();
        assert_eq!(value, 456);
    }

    #[rstest]
    fn test_partial_eq_u64() {
        let nanos = UnixNanos::from(123);
        assert_eq!(nanos, 123);
        assert_eq!(123, nanos);
    }

    #[rstest]
    fn test_partial_ord_u64() {
        let nanos = UnixNanos::from(123);
        assert!(nanos < 124);
        assert!(nanos > 122);
        assert!(123 <= nanos);
    }

    #[rstest]
    fn test_arithmetic() {
        let lhs = UnixNanos::from(100);
        let rhs = UnixNanos::from(25);
        assert_eq!(lhs + rhs, 125);
        assert_eq!(lhs - rhs, 75);
        assert_eq!(lhs + 10, 110);
        assert_eq!(lhs - 10, 90);
    }

    #[rstest]
    fn test_add_assign() {
        let mut nanos = UnixNanos::from(100);
        nanos += 50u64;
        assert_eq!(nanos, 150);
        nanos += UnixNanos::from(25);
        assert_eq!(nanos, 175);
    }

    #[rstest]
    #[should_panic(expected = "Error subtracting with underflow")]
    fn test_subtract_underflow_panics() {
        let _ = UnixNanos::from(1) - UnixNanos::from(2);
    }

    #[rstest]
    #[should_panic(expected = "Error adding with overflow")]
    fn test_add_overflow_panics() {
        let _ = UnixNanos::from(u64::MAX) + 1u64;
    }

    #[rstest]
    fn test_saturating_ops() {
        assert_eq!(UnixNanos::from(1).saturating_sub_ns(2), 0);
        assert_eq!(UnixNanos::from(u64::MAX).saturating_add_ns(1), u64::MAX);
    }

    #[rstest]
    fn test_duration_since() {
        let later = UnixNanos::from(100);
        let earlier = UnixNanos::from(75);
        assert_eq!(later.duration_since(&earlier), Some(25));
        assert_eq!(earlier.duration_since(&later), None);
    }

    #[rstest]
    fn test_to_datetime_utc() {
        let nanos = UnixNanos::from(1_000_000_000);
        assert_eq!(nanos.to_datetime_utc().timestamp(), 1);
    }

    #[rstest]
    #[case("123", 123)]
    #[case("1970-01-01T00:00:01+00:00", 1_000_000_000)]
    #[case("1970-01-02", 86_400_000_000_000)]
    fn test_from_str_valid(#[case] input: &str, #[case] expected: u64) {
        let nanos: UnixNanos = input.parse().unwrap();
        assert_eq!(nanos.as_u64(), expected);
    }

    #[rstest]
    #[case("not-a-timestamp")]
    #[case("-100")]
    fn test_from_str_invalid(#[case] input: &str) {
        assert!(input.parse::<UnixNanos>().is_err());
    }

    #[rstest]
    fn test_rfc3339_round_trip() {
        let nanos = UnixNanos::from(1_500_000_000_000_000_123);
        let s = nanos.to_rfc3339();
        let parsed: UnixNanos = s.parse().unwrap();
        assert_eq!(parsed, nanos);
    }

    #[rstest]
    fn test_serde_json_round_trip() {
        let nanos = UnixNanos::from(123);
        let json = serde_json::to_string(&nanos).unwrap();
        let deserialized: UnixNanos = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, nanos);
    }

    #[rstest]
    fn test_deserialize_from_string() {
        let deserialized: UnixNanos = serde_json::from_str("\"123\"").unwrap();
        assert_eq!(deserialized, 123);
    }
}
