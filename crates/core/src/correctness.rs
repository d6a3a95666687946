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

//! Functions for condition and predicate checks similar to the *design by contract* philosophy.
//!
//! This module provides validation checking of function or method conditions.
//!
//! A condition is a predicate which must be true just prior to the execution of
//! some section of code, for correct behavior as per the design specification.
//!
//! An [`anyhow::Result`] is returned with a descriptive message when the
//! condition check fails.

use std::fmt::{Debug, Display};

/// A message prefix that can be used with calls to `expect` on a `Result`.
pub const FAILED: &str = "Condition failed";

/// Checks the `predicate` is true.
///
/// # Errors
///
/// Returns an error if `predicate` is false.
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if !predicate {
        anyhow::bail!("{fail_msg}")
    }
    Ok(())
}

/// Checks the `predicate` is false.
///
/// # Errors
///
/// Returns an error if `predicate` is true.
pub fn check_predicate_false(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if predicate {
        anyhow::bail!("{fail_msg}")
    }
    Ok(())
}

/// Checks the string `s` has semantic meaning and contains only ASCII characters.
///
/// # Errors
///
/// Returns an error if:
/// - The string `s` is empty.
/// - The string `s` consists solely of whitespace characters.
/// - The string `s` contains a non-ASCII character.
pub fn check_valid_string<T: AsRef<str>>(s: T, param: &str) -> anyhow::Result<()> {
    let s = s.as_ref();

    if s.is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty")
    } else if s.chars().all(char::is_whitespace) {
        anyhow::bail!("invalid string for '{param}', was all whitespace")
    } else if !s.is_ascii() {
        anyhow::bail!("invalid string for '{param}' contained a non-ASCII char, was '{s}'")
    } else {
        Ok(())
    }
}

/// Checks the string `s` if Some, contains only ASCII characters and has semantic meaning.
///
/// # Errors
///
/// Returns an error if `s` is Some and would fail [`check_valid_string`].
pub fn check_valid_string_optional<T: AsRef<str>>(s: Option<T>, param: &str) -> anyhow::Result<()> {
    if let Some(s) = s {
        check_valid_string(s, param)?;
    }
    Ok(())
}

/// Checks the string `s` contains the pattern `pat`.
///
/// # Errors
///
/// Returns an error if the string does not contain the pattern.
pub fn check_string_contains<T: AsRef<str>>(s: T, pat: &str, param: &str) -> anyhow::Result<()> {
    let s = s.as_ref();
    if !s.contains(pat) {
        anyhow::bail!("invalid string for '{param}' did not contain '{pat}', was '{s}'")
    }
    Ok(())
}

/// Checks the values are equal.
///
/// # Errors
///
/// Returns an error if the values are not equal.
pub fn check_equal<T: PartialEq + Debug + Display>(
    lhs: &T,
    rhs: &T,
    lhs_param: &str,
    rhs_param: &str,
) -> anyhow::Result<()> {
    if lhs != rhs {
        anyhow::bail!("'{lhs_param}' {lhs} was not equal to '{rhs_param}' {rhs}")
    }
    Ok(())
}

/// Checks the `u64` value is positive (> 0).
///
/// # Errors
///
/// Returns an error if the value is not positive.
pub fn check_positive_u64(value: u64, param: &str) -> anyhow::Result<()> {
    if value == 0 {
        anyhow::bail!("invalid u64 for '{param}' not positive, was {value}")
    }
    Ok(())
}

/// Checks the `i64` value is positive (> 0).
///
/// # Errors
///
/// Returns an error if the value is not positive.
pub fn check_positive_i64(value: i64, param: &str) -> anyhow::Result<()> {
    if value <= 0 {
        anyhow::bail!("invalid i64 for '{param}' not positive, was {value}")
    }
    Ok(())
}

/// Checks the `f64` value is non-negative (< 0).
///
/// # Errors
///
/// Returns an error if the value is negative or NaN.
pub fn check_non_negative_f64(value: f64, param: &str) -> anyhow::Result<()> {
    if value.is_nan() || value.is_infinite() {
        anyhow::bail!("invalid f64 for '{param}', was {value}")
    }
    if value < 0.0 {
        anyhow::bail!("invalid f64 for '{param}' negative, was {value}")
    }
    Ok(())
}

/// Checks the `u8` value is in range [`l`, `r`] (inclusive).
///
/// # Errors
///
/// Returns an error if the value is out of range.
pub fn check_in_range_inclusive_u8(value: u8, l: u8, r: u8, param: &str) -> anyhow::Result<()> {
    if value < l || value > r {
        anyhow::bail!("invalid u8 for '{param}' not in range [{l}, {r}], was {value}")
    }
    Ok(())
}

/// Checks the `usize` value is in range [`l`, `r`] (inclusive).
///
/// # Errors
///
/// Returns an error if the value is out of range.
pub fn check_in_range_inclusive_usize(
    value: usize,
    l: usize,
    r: usize,
    param: &str,
) -> anyhow::Result<()> {
    if value < l || value > r {
        anyhow::bail!("invalid usize for '{param}' not in range [{l}, {r}], was {value}")
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(false, "the predicate was false")]
    fn test_check_predicate_true_when_false(#[case] predicate: bool, #[case] fail_msg: &str) {
        let result = check_predicate_true(predicate, fail_msg);
        assert_eq!(result.unwrap_err().to_string(), fail_msg);
    }

    #[rstest]
    fn test_check_predicate_true_when_true() {
        assert!(check_predicate_true(true, "should not fail").is_ok());
    }

    #[rstest]
    fn test_check_predicate_false() {
        assert!(check_predicate_false(false, "should not fail").is_ok());
        assert!(check_predicate_false(true, "the predicate was true").is_err());
    }

    #[rstest]
    #[case(" a")]
    #[case("a ")]
    #[case("abc")]
    #[case("a-b_c.d")]
    fn test_check_valid_string_with_valid_value(#[case] s: &str) {
        assert!(check_valid_string(s, "value").is_ok());
    }

    #[rstest]
    #[case("")] // empty
    #[case(" ")] // whitespace-only
    #[case("  ")] // whitespace-only
    #[case("🦀")] // non-ASCII
    fn test_check_valid_string_with_invalid_values(#[case] s: &str) {
        assert!(check_valid_string(s, "value").is_err());
    }

    #[rstest]
    fn test_check_valid_string_optional_with_none() {
        assert!(check_valid_string_optional(None::<&str>, "value").is_ok());
    }

    #[rstest]
    #[case("a", "a")]
    #[case("abc", "b")]
    fn test_check_string_contains_when_contains(#[case] s: &str, #[case] pat: &str) {
        assert!(check_string_contains(s, pat, "value").is_ok());
    }

    #[rstest]
    #[case("a", "b")]
    fn test_check_string_contains_when_does_not_contain(#[case] s: &str, #[case] pat: &str) {
        assert!(check_string_contains(s, pat, "value").is_err());
    }

    #[rstest]
    #[case(1u64, true)]
    #[case(0u64, false)]
    fn test_check_positive_u64(#[case] value: u64, #[case] expected: bool) {
        assert_eq!(check_positive_u64(value, "value").is_ok(), expected);
    }

    #[rstest]
    #[case(0u8, 0u8, 255u8, true)]
    #[case(255u8, 0u8, 255u8, true)]
    #[case(10u8, 0u8, 9u8, false)]
    fn test_check_in_range_inclusive_u8(
        #[case] value: u8,
        #[case] l: u8,
        #[case] r: u8,
        #[case] expected: bool,
    ) {
        assert_eq!(
            check_in_range_inclusive_u8(value, l, r, "value").is_ok(),
            expected
        );
    }

    #[rstest]
    fn test_check_equal() {
        assert!(check_equal(&1, &1, "lhs", "rhs").is_ok());
        assert!(check_equal(&1, &2, "lhs", "rhs").is_err());
    }

    #[rstest]
    fn test_check_non_negative_f64() {
        assert!(check_non_negative_f64(0.0, "value").is_ok());
        assert!(check_non_negative_f64(1.0, "value").is_ok());
        assert!(check_non_negative_f64(-0.1, "value").is_err());
        assert!(check_non_negative_f64(f64::NAN, "value").is_err());
    }
}
