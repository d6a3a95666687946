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

use std::fmt::{Display, Formatter};

use sextant_core::{UUID4, UnixNanos};
use sextant_model::identifiers::{ClientId, InstrumentId, StrategyId, TraderId};
use serde::{Deserialize, Serialize};

use crate::messages::submit::SubmitOrder;

/// A command to submit a list of orders to the execution venue atomically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct SubmitOrderList {
    /// The trader ID for the command.
    pub trader_id: TraderId,
    /// The execution client ID for the command.
    pub client_id: ClientId,
    /// The strategy ID for the command.
    pub strategy_id: StrategyId,
    /// The instrument ID for the command.
    pub instrument_id: InstrumentId,
    /// The orders to submit.
    pub orders: Vec<SubmitOrder>,
    /// The unique identifier for the command.
    pub command_id: UUID4,
    /// UNIX timestamp (nanoseconds) when the command was initialized.
    pub ts_init: UnixNanos,
}

impl SubmitOrderList {
    /// Creates a new [`SubmitOrderList`] instance.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        trader_id: TraderId,
        client_id: ClientId,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        orders: Vec<SubmitOrder>,
        command_id: UUID4,
        ts_init: UnixNanos,
    ) -> Self {
        Self {
            trader_id,
            client_id,
            strategy_id,
            instrument_id,
            orders,
            command_id,
            ts_init,
        }
    }
}

impl Display for SubmitOrderList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(instrument_id={}, orders={})",
            stringify!(SubmitOrderList),
            self.instrument_id,
            self.orders.len(),
        )
    }
}
