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

//! Trading command messages for the execution client command surface.

pub mod cancel;
pub mod cancel_all;
pub mod modify;
pub mod query;
pub mod submit;
pub mod submit_list;

use std::fmt::{Display, Formatter};

use sextant_core::{UUID4, UnixNanos};
use sextant_model::identifiers::{ClientId, InstrumentId, StrategyId, TraderId};
use serde::{Deserialize, Serialize};

// Re-exports
pub use crate::messages::{
    cancel::CancelOrder, cancel_all::CancelAllOrders, modify::ModifyOrder, query::QueryOrder,
    submit::SubmitOrder, submit_list::SubmitOrderList,
};

/// Wraps a trading command allowing polymorphism without dynamic dispatch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradingCommand {
    /// A submit order command.
    SubmitOrder(SubmitOrder),
    /// A submit order list command.
    SubmitOrderList(SubmitOrderList),
    /// A modify order command.
    ModifyOrder(ModifyOrder),
    /// A cancel order command.
    CancelOrder(CancelOrder),
    /// A cancel all orders command.
    CancelAllOrders(CancelAllOrders),
    /// A query order command.
    QueryOrder(QueryOrder),
}

impl TradingCommand {
    /// Returns the trader ID for the command.
    #[must_use]
    pub const fn trader_id(&self) -> TraderId {
        match self {
            Self::SubmitOrder(command) => command.trader_id,
            Self::SubmitOrderList(command) => command.trader_id,
            Self::ModifyOrder(command) => command.trader_id,
            Self::CancelOrder(command) => command.trader_id,
            Self::CancelAllOrders(command) => command.trader_id,
            Self::QueryOrder(command) => command.trader_id,
        }
    }

    /// Returns the execution client ID for the command.
    #[must_use]
    pub const fn client_id(&self) -> ClientId {
        match self {
            Self::SubmitOrder(command) => command.client_id,
            Self::SubmitOrderList(command) => command.client_id,
            Self::ModifyOrder(command) => command.client_id,
            Self::CancelOrder(command) => command.client_id,
            Self::CancelAllOrders(command) => command.client_id,
            Self::QueryOrder(command) => command.client_id,
        }
    }

    /// Returns the strategy ID for the command.
    #[must_use]
    pub const fn strategy_id(&self) -> StrategyId {
        match self {
            Self::SubmitOrder(command) => command.strategy_id,
            Self::SubmitOrderList(command) => command.strategy_id,
            Self::ModifyOrder(command) => command.strategy_id,
            Self::CancelOrder(command) => command.strategy_id,
            Self::CancelAllOrders(command) => command.strategy_id,
            Self::QueryOrder(command) => command.strategy_id,
        }
    }

    /// Returns the instrument ID for the command.
    #[must_use]
    pub const fn instrument_id(&self) -> InstrumentId {
        match self {
            Self::SubmitOrder(command) => command.instrument_id,
            Self::SubmitOrderList(command) => command.instrument_id,
            Self::ModifyOrder(command) => command.instrument_id,
            Self::CancelOrder(command) => command.instrument_id,
            Self::CancelAllOrders(command) => command.instrument_id,
            Self::QueryOrder(command) => command.instrument_id,
        }
    }

    /// Returns the unique identifier for the command.
    #[must_use]
    pub const fn command_id(&self) -> UUID4 {
        match self {
            Self::SubmitOrder(command) => command.command_id,
            Self::SubmitOrderList(command) => command.command_id,
            Self::ModifyOrder(command) => command.command_id,
            Self::CancelOrder(command) => command.command_id,
            Self::CancelAllOrders(command) => command.command_id,
            Self::QueryOrder(command) => command.command_id,
        }
    }

    /// Returns the UNIX timestamp (nanoseconds) when the command was initialized.
    #[must_use]
    pub const fn ts_init(&self) -> UnixNanos {
        match self {
            Self::SubmitOrder(command) => command.ts_init,
            Self::SubmitOrderList(command) => command.ts_init,
            Self::ModifyOrder(command) => command.ts_init,
            Self::CancelOrder(command) => command.ts_init,
            Self::CancelAllOrders(command) => command.ts_init,
            Self::QueryOrder(command) => command.ts_init,
        }
    }
}

impl Display for TradingCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SubmitOrder(command) => write!(f, "{command}"),
            Self::SubmitOrderList(command) => write!(f, "{command}"),
            Self::ModifyOrder(command) => write!(f, "{command}"),
            Self::CancelOrder(command) => write!(f, "{command}"),
            Self::CancelAllOrders(command) => write!(f, "{command}"),
            Self::QueryOrder(command) => write!(f, "{command}"),
        }
    }
}
