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

//! Represents a valid strategy ID.

use sextant_core::correctness::{FAILED, check_string_contains, check_valid_string};
use ustr::Ustr;

/// The identifier for all 'external' strategy IDs (not local to this system instance).
const EXTERNAL_STRATEGY_ID: &str = "EXTERNAL";

/// Represents a valid strategy ID.
///
/// Must be correctly formatted with two valid strings either side of a hyphen.
/// It is expected a strategy ID is the class name of the strategy,
/// with an order ID tag number separated by a hyphen.
///
/// Example: "EMACross-001".
///
/// The reason for the numerical component of the ID is so that order and position IDs
/// do not collide with those from another strategy within the node instance.
#[repr(C)]
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrategyId(Ustr);

impl StrategyId {
    /// Creates a new [`StrategyId`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a valid string, or is missing a '-' separator
    /// (the constant "EXTERNAL" is exempt from the separator requirement).
    pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
        let value = value.as_ref();
        check_valid_string(value, stringify!(value))?;
        if value != EXTERNAL_STRATEGY_ID {
            check_string_contains(value, "-", stringify!(value))?;
        }
        Ok(Self(Ustr::from(value)))
    }

    /// Creates a new [`StrategyId`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a valid string.
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

    /// Returns the 'external' strategy ID.
    #[must_use]
    pub fn external() -> Self {
        Self(Ustr::from(EXTERNAL_STRATEGY_ID))
    }

    /// Returns whether this is the 'external' strategy ID.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.0 == EXTERNAL_STRATEGY_ID
    }

    /// Returns the numerical tag portion of the strategy ID.
    ///
    /// # Panics
    ///
    /// Panics if the internal ID does not contain a hyphen separator.
    #[must_use]
    pub fn get_tag(&self) -> &str {
        // SAFETY: Strategy ID is guaranteed to contain a hyphen (except EXTERNAL)
        self.0.rsplit_once('-').unwrap().1
    }
}

impl_from_str_for_identifier!(StrategyId);
impl_display_debug_for_identifier!(StrategyId);
impl_as_ref_for_identifier!(StrategyId);
impl_serialization_for_identifier!(StrategyId);

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_string_reprs() {
        let strategy_id = StrategyId::new("EMACross-001");
        assert_eq!(strategy_id.as_str(), "EMACross-001");
        assert_eq!(format!("{strategy_id}"), "EMACross-001");
    }

    #[rstest]
    fn test_get_tag() {
        assert_eq!(StrategyId::new("EMACross-001").get_tag(), "001");
    }

    #[rstest]
    fn test_external() {
        assert!(StrategyId::external().is_external());
        assert_eq!(StrategyId::external().as_str(), "EXTERNAL");
    }

    #[rstest]
    #[should_panic]
    fn test_missing_hyphen_panics() {
        StrategyId::new("EMACross001");
    }
}
