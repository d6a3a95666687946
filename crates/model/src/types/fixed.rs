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

//! Fixed-point arithmetic for the monetary value types.
//!
//! All monetary values are backed by integer mantissas scaled by [`FIXED_SCALAR`],
//! with a per-value decimal `precision` in the range [0, [`FIXED_PRECISION`]].

use sextant_core::correctness::check_in_range_inclusive_u8;

/// The maximum fixed-point precision (number of decimal places).
pub const FIXED_PRECISION: u8 = 9;

/// The scalar value corresponding to the maximum precision (10^9).
pub const FIXED_SCALAR: f64 = 1_000_000_000.0;

/// Checks the fixed-point `precision` is in range.
///
/// # Errors
///
/// Returns an error if `precision` exceeds [`FIXED_PRECISION`].
pub fn check_fixed_precision(precision: u8) -> anyhow::Result<()> {
    check_in_range_inclusive_u8(precision, 0, FIXED_PRECISION, "precision")
}

/// Converts an `f64` value to a raw fixed-point `i64`, rounded to `precision` decimals.
#[must_use]
pub fn f64_to_fixed_i64(value: f64, precision: u8) -> i64 {
    let pow1 = 10_i64.pow(u32::from(precision));
    let pow2 = 10_i64.pow(u32::from(FIXED_PRECISION - precision));
    let rounded = (value * pow1 as f64).round() as i64;
    rounded * pow2
}

/// Converts an `f64` value to a raw fixed-point `u64`, rounded to `precision` decimals.
#[must_use]
pub fn f64_to_fixed_u64(value: f64, precision: u8) -> u64 {
    let pow1 = 10_u64.pow(u32::from(precision));
    let pow2 = 10_u64.pow(u32::from(FIXED_PRECISION - precision));
    let rounded = (value * pow1 as f64).round() as u64;
    rounded * pow2
}

/// Converts a raw fixed-point `i64` to an `f64` value.
#[must_use]
pub fn fixed_i64_to_f64(value: i64) -> f64 {
    value as f64 / FIXED_SCALAR
}

/// Converts a raw fixed-point `u64` to an `f64` value.
#[must_use]
pub fn fixed_u64_to_f64(value: u64) -> f64 {
    value as f64 / FIXED_SCALAR
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0u8)]
    #[case(9u8)]
    fn test_check_fixed_precision_valid(#[case] precision: u8) {
        assert!(check_fixed_precision(precision).is_ok());
    }

    #[rstest]
    fn test_check_fixed_precision_invalid() {
        assert!(check_fixed_precision(FIXED_PRECISION + 1).is_err());
    }

    #[rstest]
    #[case(0.0, 0, 0)]
    #[case(1.0, 0, 1_000_000_000)]
    #[case(1.5, 1, 1_500_000_000)]
    #[case(-1.5, 1, -1_500_000_000)]
    #[case(1.0001, 2, 1_000_000_000)] // rounded away at precision 2
    #[case(123_456.789, 3, 123_456_789_000_000)]
    fn test_f64_to_fixed_i64(#[case] value: f64, #[case] precision: u8, #[case] expected: i64) {
        assert_eq!(f64_to_fixed_i64(value, precision), expected);
    }

    #[rstest]
    #[case(1.5, 1, 1_500_000_000)]
    #[case(100_000.0, 0, 100_000_000_000_000)]
    fn test_f64_to_fixed_u64(#[case] value: f64, #[case] precision: u8, #[case] expected: u64) {
        assert_eq!(f64_to_fixed_u64(value, precision), expected);
    }

    #[rstest]
    fn test_fixed_round_trip() {
        let raw = f64_to_fixed_i64(42.123_456_789, FIXED_PRECISION);
        assert!((fixed_i64_to_f64(raw) - 42.123_456_789).abs() < 1e-9);
    }
}
