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

use indexmap::IndexMap;
use sextant_core::{UUID4, UnixNanos};
use sextant_model::identifiers::{AccountId, ClientId, Venue, VenueOrderId};
use serde::{Deserialize, Serialize};

use crate::reports::{order::OrderStatusReport, trade::TradeReport};

/// Represents an execution mass status report for an execution client,
/// including order status and trade reports keyed by venue order ID.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct ExecutionMassStatus {
    /// The client ID for the report.
    pub client_id: ClientId,
    /// The account ID for the report.
    pub account_id: AccountId,
    /// The venue for the report.
    pub venue: Venue,
    /// The unique identifier for the report.
    pub report_id: UUID4,
    /// UNIX timestamp (nanoseconds) when the report was initialized.
    pub ts_init: UnixNanos,
    order_reports: IndexMap<VenueOrderId, OrderStatusReport>,
    trade_reports: IndexMap<VenueOrderId, Vec<TradeReport>>,
}

impl ExecutionMassStatus {
    /// Creates a new [`ExecutionMassStatus`] instance.
    #[must_use]
    pub fn new(
        client_id: ClientId,
        account_id: AccountId,
        venue: Venue,
        report_id: UUID4,
        ts_init: UnixNanos,
    ) -> Self {
        Self {
            client_id,
            account_id,
            venue,
            report_id,
            ts_init,
            order_reports: IndexMap::new(),
            trade_reports: IndexMap::new(),
        }
    }

    /// Adds the given order status reports, keyed by venue order ID.
    pub fn add_order_reports(&mut self, reports: Vec<OrderStatusReport>) {
        for report in reports {
            self.order_reports.insert(report.venue_order_id, report);
        }
    }

    /// Adds the given trade reports, grouped by venue order ID.
    pub fn add_trade_reports(&mut self, reports: Vec<TradeReport>) {
        for report in reports {
            self.trade_reports
                .entry(report.venue_order_id)
                .or_default()
                .push(report);
        }
    }

    /// Returns the order status reports keyed by venue order ID.
    #[must_use]
    pub const fn order_reports(&self) -> &IndexMap<VenueOrderId, OrderStatusReport> {
        &self.order_reports
    }

    /// Returns the trade reports grouped by venue order ID.
    #[must_use]
    pub const fn trade_reports(&self) -> &IndexMap<VenueOrderId, Vec<TradeReport>> {
        &self.trade_reports
    }
}

impl Display for ExecutionMassStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(client_id={}, account_id={}, venue={}, order_reports={}, trade_reports={}, ts_init={})",
            stringify!(ExecutionMassStatus),
            self.client_id,
            self.account_id,
            self.venue,
            self.order_reports.len(),
            self.trade_reports.len(),
            self.ts_init,
        )
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use sextant_model::{
        enums::{LiquiditySide, OrderSide, OrderStatus, OrderType, TimeInForce},
        identifiers::{ClientOrderId, InstrumentId, TradeId},
        types::{Price, Quantity},
    };

    use super::*;

    fn order_report(venue_order_id: &str) -> OrderStatusReport {
        OrderStatusReport::new(
            AccountId::from("SIM-001"),
            InstrumentId::from("ETHUSDT.BINANCE"),
            Some(ClientOrderId::from("O-1")),
            VenueOrderId::from(venue_order_id),
            OrderSide::Buy,
            OrderType::Limit,
            TimeInForce::Gtc,
            OrderStatus::Accepted,
            Quantity::new(1.0, 1),
            Quantity::zero(1),
            UUID4::new(),
            UnixNanos::from(1),
            UnixNanos::from(2),
            UnixNanos::from(3),
        )
    }

    fn trade_report(venue_order_id: &str, trade_id: &str) -> TradeReport {
        TradeReport::new(
            AccountId::from("SIM-001"),
            InstrumentId::from("ETHUSDT.BINANCE"),
            Some(ClientOrderId::from("O-1")),
            VenueOrderId::from(venue_order_id),
            TradeId::from(trade_id),
            OrderSide::Buy,
            Quantity::new(0.5, 1),
            Price::new(2500.0, 2),
            None,
            LiquiditySide::Maker,
            None,
            UUID4::new(),
            UnixNanos::from(1),
            UnixNanos::from(2),
        )
    }

    #[rstest]
    fn test_add_and_get_reports() {
        let mut mass_status = ExecutionMassStatus::new(
            ClientId::from("BINANCE"),
            AccountId::from("SIM-001"),
            Venue::from("BINANCE"),
            UUID4::new(),
            UnixNanos::from(1),
        );

        mass_status.add_order_reports(vec![order_report("V-1"), order_report("V-2")]);
        mass_status.add_trade_reports(vec![
            trade_report("V-1", "T-1"),
            trade_report("V-1", "T-2"),
        ]);

        assert_eq!(mass_status.order_reports().len(), 2);
        assert_eq!(mass_status.trade_reports().len(), 1);
        assert_eq!(
            mass_status.trade_reports()[&VenueOrderId::from("V-1")].len(),
            2
        );
    }
}
