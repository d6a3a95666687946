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

//! Represents a valid trade match ID (assigned by a trading venue).

use sextant_core::correctness::{FAILED, check_in_range_inclusive_usize, check_valid_string};
use ustr::Ustr;

/// The maximum length of ASCII characters for a `TradeId` string value.
pub const TRADE_ID_LEN: usize = 36;

/// Represents a valid trade match ID (assigned by a trading venue).
///
/// Can correspond to the `TradeID <1003>` field of the FIX protocol.
///
/// Maximum length is 36 characters.
#[repr(C)]
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TradeId(Ustr);

impl TradeId {
    /// Creates a new [`TradeId`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a valid string, or exceeds 36 characters.
    pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
        let value = value.as_ref();
        check_valid_string(value, stringify!(value))?;
        check_in_range_inclusive_usize(value.len(), 1, TRADE_ID_LEN, "value length")?;
        Ok(Self(Ustr::from(value)))
    }

    /// Creates a new [`TradeId`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a valid string, or exceeds 36 characters.
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self::new_checked(value).expect(FAILED)
    }

    /// Returns the inner identifier value.
    #[must_use]
    pub const fn inner(&self) -> Ustr {
        self.0
    }

    /// Returns the inner identifier value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl_from_str_for_identifier!(TradeId);
impl_display_debug_for_identifier!(TradeId);
impl_as_ref_for_identifier!(TradeId);
impl_serialization_for_identifier!(TradeId);

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_string_reprs() {
        let trade_id = TradeId::new("1234567890");
        assert_eq!(trade_id.as_str(), "1234567890");
        assert_eq!(format!("{trade_id}"), "1234567890");
    }

    #[rstest]
    fn test_max_length_accepted() {
        let value = "a".repeat(TRADE_ID_LEN);
        assert_eq!(TradeId::new(&value).as_str(), value);
    }

    #[rstest]
    fn test_exceeds_max_length() {
        let value = "a".repeat(TRADE_ID_LEN + 1);
        assert!(TradeId::new_checked(value).is_err());
    }

    #[rstest]
    #[should_panic]
    fn test_empty_string_panics() {
        TradeId::new("");
    }
}
