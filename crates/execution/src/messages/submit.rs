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
    enums::{OrderSide, OrderType, TimeInForce},
    identifiers::{ClientId, ClientOrderId, InstrumentId, StrategyId, TraderId},
    types::{Price, Quantity},
};
use serde::{Deserialize, Serialize};

/// A command to submit a new order to the execution venue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct SubmitOrder {
    /// The trader ID for the command.
    pub trader_id: TraderId,
    /// The execution client ID for the command.
    pub client_id: ClientId,
    /// The strategy ID for the command.
    pub strategy_id: StrategyId,
    /// The instrument ID for the command.
    pub instrument_id: InstrumentId,
    /// The client order ID for the order to submit.
    pub client_order_id: ClientOrderId,
    /// The order side.
    pub order_side: OrderSide,
    /// The order type.
    pub order_type: OrderType,
    /// The order quantity.
    pub quantity: Quantity,
    /// The order time in force.
    pub time_in_force: TimeInForce,
    /// The order price (LIMIT).
    pub price: Option<Price>,
    /// The order trigger price (STOP).
    pub trigger_price: Option<Price>,
    /// The unique identifier for the command.
    pub command_id: UUID4,
    /// UNIX timestamp (nanoseconds) when the command was initialized.
    pub ts_init: UnixNanos,
}

impl SubmitOrder {
    /// Creates a new [`SubmitOrder`] instance.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        trader_id: TraderId,
        client_id: ClientId,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        order_side: OrderSide,
        order_type: OrderType,
        quantity: Quantity,
        time_in_force: TimeInForce,
        price: Option<Price>,
        trigger_price: Option<Price>,
        command_id: UUID4,
        ts_init: UnixNanos,
    ) -> Self {
        Self {
            trader_id,
            client_id,
            strategy_id,
            instrument_id,
            client_order_id,
            order_side,
            order_type,
            quantity,
            time_in_force,
            price,
            trigger_price,
            command_id,
            ts_init,
        }
    }
}

impl Display for SubmitOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(instrument_id={}, client_order_id={}, order_side={}, order_type={}, quantity={})",
            stringify!(SubmitOrder),
            self.instrument_id,
            self.client_order_id,
            self.order_side,
            self.order_type,
            self.quantity,
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
    fn test_display() {
        let command = SubmitOrder::new(
            TraderId::default(),
            ClientId::default(),
            StrategyId::default(),
            InstrumentId::from("ETHUSDT.BINANCE"),
            ClientOrderId::from("O-1"),
            OrderSide::Buy,
            OrderType::Limit,
            Quantity::new(1.0, 1),
            TimeInForce::Gtc,
            Some(Price::new(2500.0, 2)),
            None,
            UUID4::new(),
            UnixNanos::from(1),
        );
        assert_eq!(
            command.to_string(),
            "SubmitOrder(instrument_id=ETHUSDT.BINANCE, client_order_id=O-1, order_side=BUY, order_type=LIMIT, quantity=1.0)"
        );
    }
}
