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
use sextant_model::{
    enums::OrderSide,
    identifiers::{ClientId, InstrumentId, StrategyId, TraderId},
};
use serde::{Deserialize, Serialize};

/// A command to cancel all orders for an instrument, optionally filtered to
/// one side of the market (`OrderSide::NoOrderSide` cancels both sides).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct CancelAllOrders {
    /// The trader ID for the command.
    pub trader_id: TraderId,
    /// The execution client ID for the command.
    pub client_id: ClientId,
    /// The strategy ID for the command.
    pub strategy_id: StrategyId,
    /// The instrument ID for the command.
    pub instrument_id: InstrumentId,
    /// The order side to cancel.
    pub order_side: OrderSide,
    /// The unique identifier for the command.
    pub command_id: UUID4,
    /// UNIX timestamp (nanoseconds) when the command was initialized.
    pub ts_init: UnixNanos,
}

impl CancelAllOrders {
    /// Creates a new [`CancelAllOrders`] instance.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        trader_id: TraderId,
        client_id: ClientId,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        order_side: OrderSide,
        command_id: UUID4,
        ts_init: UnixNanos,
    ) -> Self {
        Self {
            trader_id,
            client_id,
            strategy_id,
            instrument_id,
            order_side,
            command_id,
            ts_init,
        }
    }
}

impl Display for CancelAllOrders {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(instrument_id={}, order_side={})",
            stringify!(CancelAllOrders),
            self.instrument_id,
            self.order_side,
        )
    }
}
