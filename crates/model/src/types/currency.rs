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

//! Represents a medium of exchange in a specified denomination with a fixed decimal precision.

use std::{
    collections::HashMap,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
    sync::{Mutex, OnceLock},
};

use sextant_core::correctness::{FAILED, check_valid_string};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

use crate::{enums::CurrencyType, types::fixed::check_fixed_precision};

static CURRENCY_MAP: OnceLock<Mutex<HashMap<String, Currency>>> = OnceLock::new();

/// Represents a medium of exchange in a specified denomination with a fixed
/// decimal precision.
///
/// Handles up to 9 decimals of precision.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq)]
pub struct Currency {
    /// The currency code as an alpha-3 string (e.g., "USD", "EUR").
    pub code: Ustr,
    /// The currency decimal precision.
    pub precision: u8,
    /// The ISO 4217 currency code.
    pub iso4217: u16,
    /// The full name of the currency.
    pub name: Ustr,
    /// The currency type, indicating its category (e.g. FIAT, CRYPTO).
    pub currency_type: CurrencyType,
}

impl Currency {
    /// Creates a new [`Currency`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `code` or `name` are not valid strings, or if
    /// `precision` is invalid.
    pub fn new_checked<T: AsRef<str>>(
        code: T,
        precision: u8,
        iso4217: u16,
        name: T,
        currency_type: CurrencyType,
    ) -> anyhow::Result<Self> {
        check_valid_string(&code, stringify!(code))?;
        check_valid_string(&name, stringify!(name))?;
        check_fixed_precision(precision)?;
        Ok(Self {
            code: Ustr::from(code.as_ref()),
            precision,
            iso4217,
            name: Ustr::from(name.as_ref()),
            currency_type,
        })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails.
    pub fn new<T: AsRef<str>>(
        code: T,
        precision: u8,
        iso4217: u16,
        name: T,
        currency_type: CurrencyType,
    ) -> Self {
        Self::new_checked(code, precision, iso4217, name, currency_type).expect(FAILED)
    }

    /// Registers the given `currency` in the internal currency map, allowing it
    /// to be resolved by code with [`Currency::from_str`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lock on the currency map cannot be acquired.
    pub fn register(currency: Self, overwrite: bool) -> anyhow::Result<()> {
        let mut map = currency_map()
            .lock()
            .map_err(|e| anyhow::anyhow!("Error acquiring lock on `CURRENCY_MAP`: {e}"))?;

        if !overwrite && map.contains_key(currency.code.as_str()) {
            return Ok(());
        }

        map.insert(currency.code.to_string(), currency);
        Ok(())
    }

    /// Returns whether the currency is a fiat currency.
    #[must_use]
    pub fn is_fiat(&self) -> bool {
        self.currency_type == CurrencyType::Fiat
    }

    /// Returns whether the currency is a cryptocurrency.
    #[must_use]
    pub fn is_crypto(&self) -> bool {
        self.currency_type == CurrencyType::Crypto
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let map_guard = currency_map()
            .lock()
            .map_err(|e| anyhow::anyhow!("Error acquiring lock on `CURRENCY_MAP`: {e}"))?;
        map_guard
            .get(s)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Unknown currency code: '{s}'"))
    }
}

impl From<&str> for Currency {
    /// Creates a [`Currency`] from a currency code.
    ///
    /// # Panics
    ///
    /// Panics if the `value` is not a known currency code.
    fn from(value: &str) -> Self {
        value.parse().expect(FAILED)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code.as_str())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&code).map_err(serde::de::Error::custom)
    }
}

fn currency_map() -> &'static Mutex<HashMap<String, Currency>> {
    CURRENCY_MAP.get_or_init(|| {
        let mut map = HashMap::new();
        for currency in [
            Currency::AUD(),
            Currency::EUR(),
            Currency::GBP(),
            Currency::JPY(),
            Currency::USD(),
            Currency::BTC(),
            Currency::ETH(),
            Currency::USDT(),
        ] {
            map.insert(currency.code.to_string(), currency);
        }
        Mutex::new(map)
    })
}

/// Built-in currency constants.
#[allow(non_snake_case)]
impl Currency {
    /// Returns the Australian dollar.
    #[must_use]
    pub fn AUD() -> Self {
        Self {
            code: Ustr::from("AUD"),
            precision: 2,
            iso4217: 36,
            name: Ustr::from("Australian dollar"),
            currency_type: CurrencyType::Fiat,
        }
    }

    /// Returns the Euro.
    #[must_use]
    pub fn EUR() -> Self {
        Self {
            code: Ustr::from("EUR"),
            precision: 2,
            iso4217: 978,
            name: Ustr::from("Euro"),
            currency_type: CurrencyType::Fiat,
        }
    }

    /// Returns the British pound sterling.
    #[must_use]
    pub fn GBP() -> Self {
        Self {
            code: Ustr::from("GBP"),
            precision: 2,
            iso4217: 826,
            name: Ustr::from("British pound"),
            currency_type: CurrencyType::Fiat,
        }
    }

    /// Returns the Japanese yen.
    #[must_use]
    pub fn JPY() -> Self {
        Self {
            code: Ustr::from("JPY"),
            precision: 0,
            iso4217: 392,
            name: Ustr::from("Japanese yen"),
            currency_type: CurrencyType::Fiat,
        }
    }

    /// Returns the United States dollar.
    #[must_use]
    pub fn USD() -> Self {
        Self {
            code: Ustr::from("USD"),
            precision: 2,
            iso4217: 840,
            name: Ustr::from("United States dollar"),
            currency_type: CurrencyType::Fiat,
        }
    }

    /// Returns Bitcoin.
    #[must_use]
    pub fn BTC() -> Self {
        Self {
            code: Ustr::from("BTC"),
            precision: 8,
            iso4217: 0,
            name: Ustr::from("Bitcoin"),
            currency_type: CurrencyType::Crypto,
        }
    }

    /// Returns Ether.
    #[must_use]
    pub fn ETH() -> Self {
        Self {
            code: Ustr::from("ETH"),
            precision: 9,
            iso4217: 0,
            name: Ustr::from("Ether"),
            currency_type: CurrencyType::Crypto,
        }
    }

    /// Returns Tether.
    #[must_use]
    pub fn USDT() -> Self {
        Self {
            code: Ustr::from("USDT"),
            precision: 8,
            iso4217: 0,
            name: Ustr::from("Tether"),
            currency_type: CurrencyType::Crypto,
        }
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
    fn test_registered_currencies_resolve() {
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::USD());
        assert_eq!(Currency::from_str("BTC").unwrap(), Currency::BTC());
    }

    #[rstest]
    fn test_unknown_currency_code() {
        assert!(Currency::from_str("XYZ-UNKNOWN").is_err());
    }

    #[rstest]
    fn test_register_custom_currency() {
        let currency = Currency::new("DOGE", 8, 0, "Dogecoin", CurrencyType::Crypto);
        Currency::register(currency, false).unwrap();
        assert_eq!(Currency::from_str("DOGE").unwrap(), currency);
    }

    #[rstest]
    fn test_currency_type_predicates() {
        assert!(Currency::USD().is_fiat());
        assert!(Currency::ETH().is_crypto());
        assert!(!Currency::ETH().is_fiat());
    }

    #[rstest]
    #[should_panic]
    fn test_invalid_precision_panics() {
        let _ = Currency::new("USD", 10, 840, "United States dollar", CurrencyType::Fiat);
    }

    #[rstest]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Currency::USD()).unwrap();
        assert_eq!(json, "\"USD\"");
        let currency: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(currency, Currency::USD());
    }
}
