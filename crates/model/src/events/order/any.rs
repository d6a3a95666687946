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
use serde::{Deserialize, Serialize};

use crate::{
    events::order::{
        accepted::OrderAccepted, cancel_rejected::OrderCancelRejected, canceled::OrderCanceled,
        expired::OrderExpired, filled::OrderFilled, modify_rejected::OrderModifyRejected,
        pending_cancel::OrderPendingCancel, pending_update::OrderPendingUpdate,
        rejected::OrderRejected, submitted::OrderSubmitted, triggered::OrderTriggered,
        updated::OrderUpdated,
    },
    identifiers::{AccountId, ClientOrderId, InstrumentId, StrategyId, TraderId, VenueOrderId},
};

/// Wraps an order lifecycle event allowing polymorphism without dynamic dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEventAny {
    /// An order submitted event.
    Submitted(OrderSubmitted),
    /// An order accepted event.
    Accepted(OrderAccepted),
    /// An order rejected event.
    Rejected(OrderRejected),
    /// An order pending update event.
    PendingUpdate(OrderPendingUpdate),
    /// An order pending cancel event.
    PendingCancel(OrderPendingCancel),
    /// An order modify rejected event.
    ModifyRejected(OrderModifyRejected),
    /// An order cancel rejected event.
    CancelRejected(OrderCancelRejected),
    /// An order updated event.
    Updated(OrderUpdated),
    /// An order canceled event.
    Canceled(OrderCanceled),
    /// An order triggered event.
    Triggered(OrderTriggered),
    /// An order expired event.
    Expired(OrderExpired),
    /// An order filled event.
    Filled(OrderFilled),
}

impl OrderEventAny {
    /// Returns the unique identifier for the event.
    #[must_use]
    pub const fn event_id(&self) -> UUID4 {
        match self {
            Self::Submitted(event) => event.event_id,
            Self::Accepted(event) => event.event_id,
            Self::Rejected(event) => event.event_id,
            Self::PendingUpdate(event) => event.event_id,
            Self::PendingCancel(event) => event.event_id,
            Self::ModifyRejected(event) => event.event_id,
            Self::CancelRejected(event) => event.event_id,
            Self::Updated(event) => event.event_id,
            Self::Canceled(event) => event.event_id,
            Self::Triggered(event) => event.event_id,
            Self::Expired(event) => event.event_id,
            Self::Filled(event) => event.event_id,
        }
    }

    /// Returns the trader ID associated with the event.
    #[must_use]
    pub const fn trader_id(&self) -> TraderId {
        match self {
            Self::Submitted(event) => event.trader_id,
            Self::Accepted(event) => event.trader_id,
            Self::Rejected(event) => event.trader_id,
            Self::PendingUpdate(event) => event.trader_id,
            Self::PendingCancel(event) => event.trader_id,
            Self::ModifyRejected(event) => event.trader_id,
            Self::CancelRejected(event) => event.trader_id,
            Self::Updated(event) => event.trader_id,
            Self::Canceled(event) => event.trader_id,
            Self::Triggered(event) => event.trader_id,
            Self::Expired(event) => event.trader_id,
            Self::Filled(event) => event.trader_id,
        }
    }

    /// Returns the strategy ID associated with the event.
    #[must_use]
    pub const fn strategy_id(&self) -> StrategyId {
        match self {
            Self::Submitted(event) => event.strategy_id,
            Self::Accepted(event) => event.strategy_id,
            Self::Rejected(event) => event.strategy_id,
            Self::PendingUpdate(event) => event.strategy_id,
            Self::PendingCancel(event) => event.strategy_id,
            Self::ModifyRejected(event) => event.strategy_id,
            Self::CancelRejected(event) => event.strategy_id,
            Self::Updated(event) => event.strategy_id,
            Self::Canceled(event) => event.strategy_id,
            Self::Triggered(event) => event.strategy_id,
            Self::Expired(event) => event.strategy_id,
            Self::Filled(event) => event.strategy_id,
        }
    }

    /// Returns the instrument ID associated with the event.
    #[must_use]
    pub const fn instrument_id(&self) -> InstrumentId {
        match self {
            Self::Submitted(event) => event.instrument_id,
            Self::Accepted(event) => event.instrument_id,
            Self::Rejected(event) => event.instrument_id,
            Self::PendingUpdate(event) => event.instrument_id,
            Self::PendingCancel(event) => event.instrument_id,
            Self::ModifyRejected(event) => event.instrument_id,
            Self::CancelRejected(event) => event.instrument_id,
            Self::Updated(event) => event.instrument_id,
            Self::Canceled(event) => event.instrument_id,
            Self::Triggered(event) => event.instrument_id,
            Self::Expired(event) => event.instrument_id,
            Self::Filled(event) => event.instrument_id,
        }
    }

    /// Returns the client order ID associated with the event.
    #[must_use]
    pub const fn client_order_id(&self) -> ClientOrderId {
        match self {
            Self::Submitted(event) => event.client_order_id,
            Self::Accepted(event) => event.client_order_id,
            Self::Rejected(event) => event.client_order_id,
            Self::PendingUpdate(event) => event.client_order_id,
            Self::PendingCancel(event) => event.client_order_id,
            Self::ModifyRejected(event) => event.client_order_id,
            Self::CancelRejected(event) => event.client_order_id,
            Self::Updated(event) => event.client_order_id,
            Self::Canceled(event) => event.client_order_id,
            Self::Triggered(event) => event.client_order_id,
            Self::Expired(event) => event.client_order_id,
            Self::Filled(event) => event.client_order_id,
        }
    }

    /// Returns the venue order ID associated with the event (if assigned).
    #[must_use]
    pub const fn venue_order_id(&self) -> Option<VenueOrderId> {
        match self {
            Self::Submitted(_) => None,
            Self::Rejected(_) => None,
            Self::Accepted(event) => Some(event.venue_order_id),
            Self::PendingUpdate(event) => event.venue_order_id,
            Self::PendingCancel(event) => event.venue_order_id,
            Self::ModifyRejected(event) => event.venue_order_id,
            Self::CancelRejected(event) => event.venue_order_id,
            Self::Updated(event) => event.venue_order_id,
            Self::Canceled(event) => event.venue_order_id,
            Self::Triggered(event) => event.venue_order_id,
            Self::Expired(event) => event.venue_order_id,
            Self::Filled(event) => Some(event.venue_order_id),
        }
    }

    /// Returns the account ID associated with the event (if assigned).
    #[must_use]
    pub const fn account_id(&self) -> Option<AccountId> {
        match self {
            Self::Submitted(event) => Some(event.account_id),
            Self::Accepted(event) => Some(event.account_id),
            Self::Rejected(event) => Some(event.account_id),
            Self::PendingUpdate(event) => Some(event.account_id),
            Self::PendingCancel(event) => Some(event.account_id),
            Self::ModifyRejected(event) => event.account_id,
            Self::CancelRejected(event) => event.account_id,
            Self::Updated(event) => event.account_id,
            Self::Canceled(event) => event.account_id,
            Self::Triggered(event) => event.account_id,
            Self::Expired(event) => event.account_id,
            Self::Filled(event) => Some(event.account_id),
        }
    }

    /// Returns the UNIX timestamp (nanoseconds) when the event occurred.
    #[must_use]
    pub const fn ts_event(&self) -> UnixNanos {
        match self {
            Self::Submitted(event) => event.ts_event,
            Self::Accepted(event) => event.ts_event,
            Self::Rejected(event) => event.ts_event,
            Self::PendingUpdate(event) => event.ts_event,
            Self::PendingCancel(event) => event.ts_event,
            Self::ModifyRejected(event) => event.ts_event,
            Self::CancelRejected(event) => event.ts_event,
            Self::Updated(event) => event.ts_event,
            Self::Canceled(event) => event.ts_event,
            Self::Triggered(event) => event.ts_event,
            Self::Expired(event) => event.ts_event,
            Self::Filled(event) => event.ts_event,
        }
    }

    /// Returns the UNIX timestamp (nanoseconds) when the event was initialized.
    #[must_use]
    pub const fn ts_init(&self) -> UnixNanos {
        match self {
            Self::Submitted(event) => event.ts_init,
            Self::Accepted(event) => event.ts_init,
            Self::Rejected(event) => event.ts_init,
            Self::PendingUpdate(event) => event.ts_init,
            Self::PendingCancel(event) => event.ts_init,
            Self::ModifyRejected(event) => event.ts_init,
            Self::CancelRejected(event) => event.ts_init,
            Self::Updated(event) => event.ts_init,
            Self::Canceled(event) => event.ts_init,
            Self::Triggered(event) => event.ts_init,
            Self::Expired(event) => event.ts_init,
            Self::Filled(event) => event.ts_init,
        }
    }
}

impl Display for OrderEventAny {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Submitted(event) => write!(f, "{event}"),
            Self::Accepted(event) => write!(f, "{event}"),
            Self::Rejected(event) => write!(f, "{event}"),
            Self::PendingUpdate(event) => write!(f, "{event}"),
            Self::PendingCancel(event) => write!(f, "{event}"),
            Self::ModifyRejected(event) => write!(f, "{event}"),
            Self::CancelRejected(event) => write!(f, "{event}"),
            Self::Updated(event) => write!(f, "{event}"),
            Self::Canceled(event) => write!(f, "{event}"),
            Self::Triggered(event) => write!(f, "{event}"),
            Self::Expired(event) => write!(f, "{event}"),
            Self::Filled(event) => write!(f, "{event}"),
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
    fn test_accessors_for_submitted() {
        let event = OrderSubmitted::new(
            TraderId::default(),
            StrategyId::default(),
            InstrumentId::from("ETHUSDT.BINANCE"),
            ClientOrderId::from("O-1"),
            AccountId::from("SIM-001"),
            UUID4::new(),
            UnixNanos::from(1),
            UnixNanos::from(2),
        );
        let any = OrderEventAny::Submitted(event);

        assert_eq!(any.event_id(), event.event_id);
        assert_eq!(any.client_order_id(), event.client_order_id);
        assert_eq!(any.venue_order_id(), None);
        assert_eq!(any.account_id(), Some(event.account_id));
        assert_eq!(any.ts_event(), 1);
        assert_eq!(any.ts_init(), 2);
    }

    #[rstest]
    fn test_accessors_for_accepted() {
        let event = OrderAccepted::new(
            TraderId::default(),
            StrategyId::default(),
            InstrumentId::from("ETHUSDT.BINANCE"),
            ClientOrderId::from("O-1"),
            VenueOrderId::from("123456"),
            AccountId::from("SIM-001"),
            UUID4::new(),
            UnixNanos::from(1),
            UnixNanos::from(2),
            false,
        );
        let any = OrderEventAny::Accepted(event);

        assert_eq!(any.venue_order_id(), Some(event.venue_order_id));
        assert_eq!(any.instrument_id(), event.instrument_id);
    }
}
