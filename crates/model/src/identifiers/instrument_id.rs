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

//! Represents a valid instrument ID.

use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use sextant_core::correctness::check_valid_string;
use serde::{Deserialize, Deserializer, Serialize};

use crate::identifiers::{Symbol, Venue};

/// Represents a valid instrument ID.
///
/// The symbol and venue combination should uniquely identify the instrument.
/// The textual form is `<SYMBOL>.<VENUE>`.
#[repr(C)]
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct InstrumentId {
    /// The instruments ticker symbol.
    pub symbol: Symbol,
    /// The instruments trading venue.
    pub venue: Venue,
}

impl InstrumentId {
    /// Creates a new [`InstrumentId`] instance.
    #[must_use]
    pub const fn new(symbol: Symbol, venue: Venue) -> Self {
        Self { symbol, venue }
    }

    /// Returns whether the instrument is synthesized by the system.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.venue.is_synthetic()
    }
}

impl FromStr for InstrumentId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.rsplit_once('.') {
            Some((symbol_part, venue_part)) => {
                check_valid_string(symbol_part, stringify!(symbol_part))?;
                check_valid_string(venue_part, stringify!(venue_part))?;
                Ok(Self {
                    symbol: Symbol::new(symbol_part),
                    venue: Venue::new(venue_part),
                })
            }
            None => {
                anyhow::bail!(
                    "Error parsing `InstrumentId` from '{s}': missing '.' separator between symbol and venue components"
                )
            }
        }
    }
}

impl From<&str> for InstrumentId {
    /// Creates an [`InstrumentId`] from a string slice.
    ///
    /// # Panics
    ///
    /// Panics if the `value` string is not valid.
    fn from(value: &str) -> Self {
        Self::from_str(value).unwrap()
    }
}

impl From<String> for InstrumentId {
    /// Creates an [`InstrumentId`] from a string.
    ///
    /// # Panics
    ///
    /// Panics if the `value` string is not valid.
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl Debug for InstrumentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}.{}\"", self.symbol, self.venue)
    }
}

impl Display for InstrumentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.symbol, self.venue)
    }
}

impl Serialize for InstrumentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for InstrumentId {
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
    fn test_instrument_id_parse_success() {
        let instrument_id = InstrumentId::from("ETH/USDT.BINANCE");
        assert_eq!(instrument_id.symbol.as_str(), "ETH/USDT");
        assert_eq!(instrument_id.venue.as_str(), "BINANCE");
    }

    #[rstest]
    fn test_instrument_id_parse_rsplit() {
        // Only the last '.' separates symbol from venue
        let instrument_id = InstrumentId::from("BTC.PERP.DYDX");
        assert_eq!(instrument_id.symbol.as_str(), "BTC.PERP");
        assert_eq!(instrument_id.venue.as_str(), "DYDX");
    }

    #[rstest]
    fn test_instrument_id_parse_failure_no_dot() {
        let result = InstrumentId::from_str("ETHUSDT-BINANCE");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("missing '.' separator")
        );
    }

    #[rstest]
    fn test_string_reprs() {
        let instrument_id = InstrumentId::from("ETHUSDT.BINANCE");
        assert_eq!(instrument_id.to_string(), "ETHUSDT.BINANCE");
        assert_eq!(format!("{instrument_id:?}"), "\"ETHUSDT.BINANCE\"");
    }

    #[rstest]
    fn test_serde_round_trip() {
        let instrument_id = InstrumentId::from("EURUSD.SIM");
        let json = serde_json::to_string(&instrument_id).unwrap();
        let deserialized: InstrumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, instrument_id);
    }
}
