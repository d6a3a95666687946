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

//! Account balance types.

use std::fmt::{Display, Formatter};

use sextant_core::correctness::FAILED;
use serde::{Deserialize, Serialize};

use crate::{
    identifiers::InstrumentId,
    types::{currency::Currency, money::Money},
};

/// Represents an account balance denominated in a particular currency.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// The currency of the balance.
    pub currency: Currency,
    /// The total account balance.
    pub total: Money,
    /// The account balance locked (assigned to pending orders).
    pub locked: Money,
    /// The account balance free for trading.
    pub free: Money,
}

impl AccountBalance {
    /// Creates a new [`AccountBalance`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if the currencies are inconsistent, or if
    /// `total` does not equal `locked + free`.
    pub fn new_checked(total: Money, locked: Money, free: Money) -> anyhow::Result<Self> {
        if total.currency != locked.currency || total.currency != free.currency {
            anyhow::bail!(
                "money currencies were inconsistent: {}, {}, {}",
                total.currency,
                locked.currency,
                free.currency,
            );
        }
        if total.raw != locked.raw + free.raw {
            anyhow::bail!(
                "total balance {total} was not equal to locked {locked} plus free {free}"
            );
        }
        Ok(Self {
            currency: total.currency,
            total,
            locked,
            free,
        })
    }

    /// Creates a new [`AccountBalance`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails.
    pub fn new(total: Money, locked: Money, free: Money) -> Self {
        Self::new_checked(total, locked, free).expect(FAILED)
    }
}

impl Display for AccountBalance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(total={}, locked={}, free={})",
            stringify!(AccountBalance),
            self.total,
            self.locked,
            self.free,
        )
    }
}

/// Represents a margin balance optionally associated with a particular instrument.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginBalance {
    /// The currency of the margin.
    pub currency: Currency,
    /// The initial (order) margin requirement for the instrument.
    pub initial: Money,
    /// The maintenance (position) margin requirement for the instrument.
    pub maintenance: Money,
    /// The instrument ID associated with the margin.
    pub instrument_id: InstrumentId,
}

impl MarginBalance {
    /// Creates a new [`MarginBalance`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if the currencies are inconsistent.
    pub fn new_checked(
        initial: Money,
        maintenance: Money,
        instrument_id: InstrumentId,
    ) -> anyhow::Result<Self> {
        if initial.currency != maintenance.currency {
            anyhow::bail!(
                "money currencies were inconsistent: {}, {}",
                initial.currency,
                maintenance.currency,
            );
        }
        Ok(Self {
            currency: initial.currency,
            initial,
            maintenance,
            instrument_id,
        })
    }

    /// Creates a new [`MarginBalance`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails.
    pub fn new(initial: Money, maintenance: Money, instrument_id: InstrumentId) -> Self {
        Self::new_checked(initial, maintenance, instrument_id).expect(FAILED)
    }
}

impl Display for MarginBalance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(initial={}, maintenance={}, instrument_id={})",
            stringify!(MarginBalance),
            self.initial,
            self.maintenance,
            self.instrument_id,
        )
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
    fn test_account_balance_new() {
        let balance = AccountBalance::new(
            Money::from("100.00 USD"),
            Money::from("25.00 USD"),
            Money::from("75.00 USD"),
        );
        assert_eq!(balance.currency, Currency::USD());
        assert_eq!(balance.total, Money::from("100.00 USD"));
    }

    #[rstest]
    fn test_account_balance_invariant_violated() {
        let result = AccountBalance::new_checked(
            Money::from("100.00 USD"),
            Money::from("30.00 USD"),
            Money::from("75.00 USD"),
        );
        assert!(result.is_err());
    }

    #[rstest]
    fn test_account_balance_mixed_currencies() {
        let result = AccountBalance::new_checked(
            Money::from("100.00 USD"),
            Money::from("25.00 EUR"),
            Money::from("75.00 USD"),
        );
        assert!(result.is_err());
    }

    #[rstest]
    fn test_margin_balance_new() {
        let margin = MarginBalance::new(
            Money::from("10.00 USD"),
            Money::from("5.00 USD"),
            InstrumentId::from("EURUSD.SIM"),
        );
        assert_eq!(margin.currency, Currency::USD());
        assert_eq!(margin.initial, Money::from("10.00 USD"));
        assert_eq!(margin.maintenance, Money::from("5.00 USD"));
    }

    #[rstest]
    fn test_margin_balance_mixed_currencies() {
        let result = MarginBalance::new_checked(
            Money::from("10.00 USD"),
            Money::from("5.00 EUR"),
            InstrumentId::from("EURUSD.SIM"),
        );
        assert!(result.is_err());
    }
}
