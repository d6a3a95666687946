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

//! Represents a valid trading venue ID.

use sextant_core::correctness::{FAILED, check_valid_string};
use ustr::Ustr;

/// The identifier for a 'synthetic' venue (instruments synthesized by the system).
pub const SYNTHETIC_VENUE: &str = "SYNTH";

/// Represents a valid trading venue ID.
#[repr(C)]
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Venue(Ustr);

impl Venue {
    /// Creates a new [`Venue`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a valid string.
    pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
        let value = value.as_ref();
        check_valid_string(value, stringify!(value))?;
        Ok(Self(Ustr::from(value)))
    }

    /// Creates a new [`Venue`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a valid string.
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self::new_checked(value).expect(FAILED)
    }

    /// Creates a new [`Venue`] instance from a string without validation.
    #[must_use]
    pub fn from_str_unchecked<T: AsRef<str>>(value: T) -> Self {
        Self(Ustr::from(value.as_ref()))
    }

    /// Creates a new [`Venue`] instance from an interned string without validation.
    #[must_use]
    pub const fn from_ustr_unchecked(value: Ustr) -> Self {
        Self(value)
    }

    /// Returns the 'synthetic' venue.
    #[must_use]
    pub fn synthetic() -> Self {
        Self(Ustr::from(SYNTHETIC_VENUE))
    }

    /// Returns whether this is the 'synthetic' venue.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.0 == SYNTHETIC_VENUE
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

impl_from_str_for_identifier!(Venue);
impl_display_debug_for_identifier!(Venue);
impl_as_ref_for_identifier!(Venue);
impl_serialization_for_identifier!(Venue);

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_string_reprs() {
        let venue = Venue::new("BINANCE");
        assert_eq!(venue.as_str(), "BINANCE");
        assert_eq!(format!("{venue}"), "BINANCE");
    }

    #[rstest]
    fn test_synthetic() {
        assert!(Venue::synthetic().is_synthetic());
        assert!(!Venue::new("SIM").is_synthetic());
    }

    #[rstest]
    #[should_panic]
    fn test_empty_string_panics() {
        Venue::new("");
    }
}
