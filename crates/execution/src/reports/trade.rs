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
    enums::{LiquiditySide, OrderSide},
    identifiers::{AccountId, ClientOrderId, InstrumentId, PositionId, TradeId, VenueOrderId},
    types::{Money, Price, Quantity},
};
use serde::{Deserialize, Serialize};

/// Represents a single trade (fill) report from a trading venue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct TradeReport {
    /// The account ID associated with the report.
    pub account_id: AccountId,
    /// The instrument ID associated with the report.
    pub instrument_id: InstrumentId,
    /// The client order ID (`None` when not assigned by the system).
    pub client_order_id: Option<ClientOrderId>,
    /// The venue assigned order ID.
    pub venue_order_id: VenueOrderId,
    /// The trade match ID (assigned by the venue).
    pub trade_id: TradeId,
    /// The order side for the trade.
    pub order_side: OrderSide,
    /// The trade quantity.
    pub last_qty: Quantity,
    /// The trade price.
    pub last_px: Price,
    /// The commission generated from the trade.
    pub commission: Option<Money>,
    /// The liquidity side for the trade.
    pub liquidity_side: LiquiditySide,
    /// The position ID (assigned by the venue).
    pub venue_position_id: Option<PositionId>,
    /// The unique identifier for the report.
    pub report_id: UUID4,
    /// UNIX timestamp (nanoseconds) when the trade occurred.
    pub ts_event: UnixNanos,
    /// UNIX timestamp (nanoseconds) when the report was initialized.
    pub ts_init: UnixNanos,
}

impl TradeReport {
    /// Creates a new [`TradeReport`] instance.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        account_id: AccountId,
        instrument_id: InstrumentId,
        client_order_id: Option<ClientOrderId>,
        venue_order_id: VenueOrderId,
        trade_id: TradeId,
        order_side: OrderSide,
        last_qty: Quantity,
        last_px: Price,
        commission: Option<Money>,
        liquidity_side: LiquiditySide,
        venue_position_id: Option<PositionId>,
        report_id: UUID4,
        ts_event: UnixNanos,
        ts_init: UnixNanos,
    ) -> Self {
        Self {
            account_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            trade_id,
            order_side,
            last_qty,
            last_px,
            commission,
            liquidity_side,
            venue_position_id,
            report_id,
            ts_event,
            ts_init,
        }
    }
}

impl Display for TradeReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(account_id={}, instrument_id={}, venue_order_id={}, trade_id={}, order_side={}, last_qty={}, last_px={}, liquidity_side={}, ts_event={})",
            stringify!(TradeReport),
            self.account_id,
            self.instrument_id,
            self.venue_order_id,
            self.trade_id,
            self.order_side,
            self.last_qty,
            self.last_px,
            self.liquidity_side,
            self.ts_event,
        )
    }
}
