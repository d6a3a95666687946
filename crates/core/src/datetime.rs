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

//! Common data and time functions.
//!
//! Conversions between time units and to/from ISO 8601 strings live here; these
//! helpers are intended for the edges of the system only. Internally everything
//! is a [`UnixNanos`].

use chrono::{DateTime, SecondsFormat, Utc};

use crate::nanos::UnixNanos;

/// The number of nanoseconds in one second.
pub const NANOSECONDS_IN_SECOND: u64 = 1_000_000_000;

/// The number of nanoseconds in one millisecond.
pub const NANOSECONDS_IN_MILLISECOND: u64 = 1_000_000;

/// The number of nanoseconds in one microsecond.
pub const NANOSECONDS_IN_MICROSECOND: u64 = 1_000;

/// The number of milliseconds in one second.
pub const MILLISECONDS_IN_SECOND: u64 = 1_000;

/// Converts seconds to nanoseconds (ns).
#[must_use]
pub fn secs_to_nanos(secs: f64) -> u64 {
    (secs * NANOSECONDS_IN_SECOND as f64) as u64
}

/// Converts seconds to milliseconds (ms).
#[must_use]
pub fn secs_to_millis(secs: f64) -> u64 {
    (secs * MILLISECONDS_IN_SECOND as f64) as u64
}

/// Converts milliseconds (ms) to nanoseconds (ns).
#[must_use]
pub const fn millis_to_nanos(millis: u64) -> u64 {
    millis * NANOSECONDS_IN_MILLISECOND
}

/// Converts microseconds (μs) to nanoseconds (ns).
#[must_use]
pub const fn micros_to_nanos(micros: u64) -> u64 {
    micros * NANOSECONDS_IN_MICROSECOND
}

/// Converts nanoseconds (ns) to seconds.
#[must_use]
pub fn nanos_to_secs(nanos: u64) -> f64 {
    nanos as f64 / NANOSECONDS_IN_SECOND as f64
}

/// Converts nanoseconds (ns) to milliseconds (ms).
#[must_use]
pub const fn nanos_to_millis(nanos: u64) -> u64 {
    nanos / NANOSECONDS_IN_MILLISECOND
}

/// Converts nanoseconds (ns) to microseconds (μs).
#[must_use]
pub const fn nanos_to_micros(nanos: u64) -> u64 {
    nanos / NANOSECONDS_IN_MICROSECOND
}

/// Floors the given nanoseconds to the nearest microsecond.
#[must_use]
pub const fn floor_to_nearest_microsecond(unix_nanos: u64) -> u64 {
    (unix_nanos / NANOSECONDS_IN_MICROSECOND) * NANOSECONDS_IN_MICROSECOND
}

/// Converts a UNIX nanoseconds timestamp to an ISO 8601 (RFC 3339) format string
/// with nanosecond precision.
#[must_use]
pub fn unix_nanos_to_iso8601(unix_nanos: UnixNanos) -> String {
    unix_nanos
        .to_datetime_utc()
        .to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Converts an ISO 8601 (RFC 3339) format string to UNIX nanoseconds.
///
/// # Errors
///
/// Returns an error if the string is not a valid RFC 3339 timestamp, or if the
/// timestamp is before the UNIX epoch or out of range.
pub fn iso8601_to_unix_nanos(value: &str) -> anyhow::Result<UnixNanos> {
    let datetime = DateTime::parse_from_rfc3339(value)?;
    let nanos = datetime
        .timestamp_nanos_opt()
        .ok_or_else(|| anyhow::anyhow!("Timestamp out of range, was '{value}'"))?;
    if nanos < 0 {
        anyhow::bail!("UNIX timestamp cannot be negative, was '{value}'");
    }
    Ok(UnixNanos::from(nanos as u64))
}

/// Converts a UNIX nanoseconds timestamp to a `DateTime<Utc>`.
#[must_use]
pub const fn unix_nanos_to_datetime_utc(unix_nanos: UnixNanos) -> DateTime<Utc> {
    unix_nanos.to_datetime_utc()
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 0)]
    #[case(1.0, 1_000_000_000)]
    #[case(1.1, 1_100_000_000)]
    #[case(42.0, 42_000_000_000)]
    fn test_secs_to_nanos(#[case] value: f64, #[case] expected: u64) {
        assert_eq!(secs_to_nanos(value), expected);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1_000_000)]
    #[case(1_000, 1_000_000_000)]
    fn test_millis_to_nanos(#[case] value: u64, #[case] expected: u64) {
        assert_eq!(millis_to_nanos(value), expected);
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(1_500_000_000, 1.5)]
    fn test_nanos_to_secs(#[case] value: u64, #[case] expected: f64) {
        assert_eq!(nanos_to_secs(value), expected);
    }

    #[rstest]
    #[case(1_000_000_001, 1_000_000_000)]
    #[case(1_000_001_999, 1_000_001_000)]
    #[case(0, 0)]
    fn test_floor_to_nearest_microsecond(#[case] value: u64, #[case] expected: u64) {
        assert_eq!(floor_to_nearest_microsecond(value), expected);
    }

    #[rstest]
    fn test_unix_nanos_to_iso8601() {
        let s = unix_nanos_to_iso8601(UnixNanos::from(1_000_000_123));
        assert_eq!(s, "1970-01-01T00:00:01.000000123Z");
    }

    #[rstest]
    fn test_iso8601_round_trip() {
        let nanos = UnixNanos::from(1_650_000_000_123_456_789);
        let s = unix_nanos_to_iso8601(nanos);
        let parsed = iso8601_to_unix_nanos(&s).unwrap();
        assert_eq!(parsed, nanos);
    }

    #[rstest]
    #[case("not-a-timestamp")]
    #[case("1969-12-31T23:59:59Z")]
    fn test_iso8601_to_unix_nanos_invalid(#[case] value: &str) {
        assert!(iso8601_to_unix_nanos(value).is_err());
    }
}
