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

use std::fmt::{Debug, Display, Formatter};

use sextant_core::{UUID4, UnixNanos};
use serde::{Deserialize, Serialize};

use crate::{
    enums::{LiquiditySide, OrderSide, OrderType},
    identifiers::{
        AccountId, ClientOrderId, InstrumentId, PositionId, StrategyId, TradeId, TraderId,
        VenueOrderId,
    },
    types::{Currency, Money, Price, Quantity},
};

/// Represents an event where an order has been filled at the trading venue.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct OrderFilled {
    /// The trader ID associated with the event.
    pub trader_id: TraderId,
    /// The strategy ID associated with the event.
    pub strategy_id: StrategyId,
    /// The instrument ID associated with the event.
    pub instrument_id: InstrumentId,
    /// The client order ID associated with the event.
    pub client_order_id: ClientOrderId,
    /// The venue order ID (assigned by the venue).
    pub venue_order_id: VenueOrderId,
    /// The account ID associated with the event.
    pub account_id: AccountId,
    /// The trade match ID (assigned by the venue).
    pub trade_id: TradeId,
    /// The order side.
    pub order_side: OrderSide,
    /// The order type.
    pub order_type: OrderType,
    /// The fill quantity for this execution.
    pub last_qty: Quantity,
    /// The fill price for this execution.
    pub last_px: Price,
    /// The currency of the `last_px`.
    pub currency: Currency,
    /// The liquidity side of the execution.
    pub liquidity_side: LiquiditySide,
    /// The unique identifier for the event.
    pub event_id: UUID4,
    /// UNIX timestamp (nanoseconds) when the event occurred.
    pub ts_event: UnixNanos,
    /// UNIX timestamp (nanoseconds) when the event was initialized.
    pub ts_init: UnixNanos,
    /// If the event was generated during reconciliation.
    pub reconciliation: bool,
    /// The position ID (assigned by the venue).
    pub position_id: Option<PositionId>,
    /// The commission generated from this execution.
    pub commission: Option<Money>,
}

impl OrderFilled {
    /// Creates a new [`OrderFilled`] instance.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        trader_id: TraderId,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        account_id: AccountId,
        trade_id: TradeId,
        order_side: OrderSide,
        order_type: OrderType,
        last_qty: Quantity,
        last_px: Price,
        currency: Currency,
        liquidity_side: LiquiditySide,
        event_id: UUID4,
        ts_event: UnixNanos,
        ts_init: UnixNanos,
        reconciliation: bool,
        position_id: Option<PositionId>,
        commission: Option<Money>,
    ) -> Self {
        Self {
            trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            account_id,
            trade_id,
            order_side,
            order_type,
            last_qty,
            last_px,
            currency,
            liquidity_side,
            event_id,
            ts_event,
            ts_init,
            reconciliation,
            position_id,
            commission,
        }
    }

    /// Returns whether the fill was on the buy side.
    #[must_use]
    pub fn is_buy(&self) -> bool {
        self.order_side == OrderSide::Buy
    }

    /// Returns whether the fill was on the sell side.
    #[must_use]
    pub fn is_sell(&self) -> bool {
        self.order_side == OrderSide::Sell
    }
}

impl Debug for OrderFilled {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(trader_id={}, strategy_id={}, {self})",
            stringify!(OrderFilled),
            self.trader_id,
            self.strategy_id,
        )
    }
}

impl Display for OrderFilled {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "instrument_id={}, client_order_id={}, venue_order_id={}, account_id={}, trade_id={}, position_id={}, order_side={}, order_type={}, last_qty={}, last_px={} {}, commission={}, liquidity_side={}, ts_event={}",
            self.instrument_id,
            self.client_order_id,
            self.venue_order_id,
            self.account_id,
            self.trade_id,
            self.position_id
                .map_or("None".to_string(), |position_id| format!("{position_id}")),
            self.order_side,
            self.order_type,
            self.last_qty,
            self.last_px,
            self.currency,
            self.commission
                .map_or("None".to_string(), |commission| format!("{commission}")),
            self.liquidity_side,
            self.ts_event,
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

    fn test_fill() -> OrderFilled {
        OrderFilled::new(
            TraderId::default(),
            StrategyId::default(),
            InstrumentId::from("ETHUSDT.BINANCE"),
            ClientOrderId::from("O-1"),
            VenueOrderId::from("123456"),
            AccountId::from("SIM-001"),
            TradeId::from("T-1"),
            OrderSide::Buy,
            OrderType::Limit,
            Quantity::new(0.5, 1),
            Price::new(2500.0, 2),
            Currency::USDT(),
            LiquiditySide::Maker,
            UUID4::new(),
            UnixNanos::from(1),
            UnixNanos::from(2),
            false,
            Some(PositionId::from("P-1")),
            Some(Money::new(1.25, Currency::USDT())),
        )
    }

    #[rstest]
    fn test_side_predicates() {
        let fill = test_fill();
        assert!(fill.is_buy());
        assert!(!fill.is_sell());
    }

    #[rstest]
    fn test_display() {
        let fill = test_fill();
        assert_eq!(
            fill.to_string(),
            "instrument_id=ETHUSDT.BINANCE, client_order_id=O-1, venue_order_id=123456, \
             account_id=SIM-001, trade_id=T-1, position_id=P-1, order_side=BUY, \
             order_type=LIMIT, last_qty=0.5, last_px=2500.00 USDT, commission=1.25000000 USDT, \
             liquidity_side=MAKER, ts_event=1"
        );
    }

    #[rstest]
    fn test_serde_round_trip() {
        let fill = test_fill();
        let json = serde_json::to_string(&fill).unwrap();
        let deserialized: OrderFilled = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, fill);
    }
}
