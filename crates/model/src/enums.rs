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

//! Enumerations for the trading domain model.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, FromRepr};

/// The type of a trading account.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// An account with unleveraged cash assets only.
    Cash = 1,
    /// An account which facilitates trading on margin, using account assets as collateral.
    Margin = 2,
    /// An account specific to betting markets.
    Betting = 3,
}

/// The type of a currency.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurrencyType {
    /// A type of cryptocurrency or crypto token.
    Crypto = 1,
    /// A type of currency issued by governments which is not backed by a commodity.
    Fiat = 2,
    /// A type of currency that is based on the value of an underlying commodity.
    CommodityBacked = 3,
}

/// The liquidity side for a specific execution.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiquiditySide {
    /// No liquidity side specified.
    NoLiquiditySide = 0,
    /// The order passively provided liquidity to the market (made a market).
    Maker = 1,
    /// The order aggressively took liquidity from the market.
    Taker = 2,
}

/// The order management system (OMS) type for a trading venue or trading strategy.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OmsType {
    /// There is no specific type of order management specified (will defer to the venue OMS).
    Unspecified = 0,
    /// The netting type where there is one position per instrument.
    Netting = 1,
    /// The hedging type where there can be multiple positions per instrument.
    /// This can be in LONG/SHORT directions, by position/ticket ID, or tracked virtually by
    /// Sextant.
    Hedging = 2,
}

/// The order side for a specific order, or action related to orders.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// No order side is specified.
    #[default]
    NoOrderSide = 0,
    /// The order is a BUY.
    Buy = 1,
    /// The order is a SELL.
    Sell = 2,
}

/// The status for a specific order.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// The order is initialized (instantiated) within the Sextant system.
    Initialized = 1,
    /// The order was submitted by the Sextant system to the external service or trading venue.
    Submitted = 2,
    /// The order was acknowledged by the trading venue as being received and valid (may now be working).
    Accepted = 3,
    /// The order was rejected by the trading venue.
    Rejected = 4,
    /// The order was canceled (closed/done).
    Canceled = 5,
    /// The order reached a GTD expiration (closed/done).
    Expired = 6,
    /// The order STOP price was triggered on a trading venue.
    Triggered = 7,
    /// The order is currently pending a request to modify on a trading venue.
    PendingUpdate = 8,
    /// The order is currently pending a request to cancel on a trading venue.
    PendingCancel = 9,
    /// The order has been partially filled on a trading venue.
    PartiallyFilled = 10,
    /// The order has been completely filled on a trading venue (closed/done).
    Filled = 11,
}

/// The type of order.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// A market order to buy or sell at the best available price in the current market.
    Market = 1,
    /// A limit order to buy or sell at a specific price or better.
    Limit = 2,
    /// A stop market order to buy or sell once the price reaches the specified stop/trigger price.
    StopMarket = 3,
    /// A stop limit order to buy or sell which combines the features of a stop order and a limit order.
    StopLimit = 4,
    /// A market-to-limit order is a market order that is to be executed as a limit order at the
    /// current best market price after reaching the market.
    MarketToLimit = 5,
    /// A market-if-touched order effectively becomes a market order when the specified trigger price is reached.
    MarketIfTouched = 6,
    /// A limit-if-touched order effectively becomes a limit order when the specified trigger price is reached.
    LimitIfTouched = 7,
    /// A trailing stop market order sets the stop/trigger price at a fixed "trailing offset" amount from the market.
    TrailingStopMarket = 8,
    /// A trailing stop limit order combines the features of a trailing stop order with those of a limit order.
    TrailingStopLimit = 9,
}

/// The time in force for a specific order.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Good-till-canceled is in force until canceled by the client.
    Gtc = 1,
    /// Immediate-or-cancel is in force only while on the order book (filled or canceled immediately).
    Ioc = 2,
    /// Fill-or-kill is in force at execution (filled in its entirety, or canceled immediately).
    Fok = 3,
    /// Good-till-date is in force until the expiration date and time reached.
    Gtd = 4,
    /// Day orders are in force for the trading day (e.g. expire at session close).
    Day = 5,
    /// At-the-open is in force only at the market open.
    AtTheOpen = 6,
    /// At-the-close is in force only at the market close.
    AtTheClose = 7,
}

/// The trigger type for the stop/trigger price of an order.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    /// No trigger type is specified (invalid for orders with a trigger).
    NoTrigger = 0,
    /// The default trigger type set by the trading venue.
    Default = 1,
    /// Based on the last traded price for the instrument.
    LastPrice = 2,
    /// Based on the mid-point of the bid and ask prices for the instrument.
    MidPoint = 3,
    /// Based on the bid price for the instrument.
    BidAsk = 4,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(OrderSide::NoOrderSide, "NO_ORDER_SIDE")]
    #[case(OrderSide::Buy, "BUY")]
    #[case(OrderSide::Sell, "SELL")]
    fn test_order_side_display(#[case] value: OrderSide, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case("BUY", OrderSide::Buy)]
    #[case("buy", OrderSide::Buy)]
    #[case("SELL", OrderSide::Sell)]
    fn test_order_side_from_str(#[case] input: &str, #[case] expected: OrderSide) {
        assert_eq!(OrderSide::from_str(input).unwrap(), expected);
    }

    #[rstest]
    fn test_order_side_from_str_invalid() {
        assert!(OrderSide::from_str("SHORT").is_err());
    }

    #[rstest]
    #[case(OmsType::Unspecified, "UNSPECIFIED")]
    #[case(OmsType::Netting, "NETTING")]
    #[case(OmsType::Hedging, "HEDGING")]
    fn test_oms_type_display(#[case] value: OmsType, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case(LiquiditySide::Maker, "MAKER")]
    #[case(LiquiditySide::Taker, "TAKER")]
    fn test_liquidity_side_display(#[case] value: LiquiditySide, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn test_order_type_from_repr() {
        assert_eq!(OrderType::from_repr(1), Some(OrderType::Market));
        assert_eq!(OrderType::from_repr(2), Some(OrderType::Limit));
        assert_eq!(OrderType::from_repr(255), None);
    }

    #[rstest]
    fn test_enum_serde_round_trip() {
        let json = serde_json::to_string(&TimeInForce::Gtc).unwrap();
        assert_eq!(json, "\"GTC\"");
        let value: TimeInForce = serde_json::from_str(&json).unwrap();
        assert_eq!(value, TimeInForce::Gtc);
    }
}
