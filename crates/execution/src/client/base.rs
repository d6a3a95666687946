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

//! Base execution client functionality.

use std::{any::Any, cell::RefCell, rc::Rc};

use sextant_common::{
    cache::Cache,
    clock::Clock,
    component::{Component, ComponentCore},
    enums::ComponentState,
    msgbus::{self, MessageBus, switchboard::MessagingSwitchboard},
    timer::TimeEvent,
};
use sextant_core::{UUID4, UnixNanos};
use sextant_model::{
    enums::{AccountType, LiquiditySide, OmsType, OrderSide, OrderType},
    events::{
        AccountState, OrderAccepted, OrderCancelRejected, OrderCanceled, OrderEventAny,
        OrderExpired, OrderFilled, OrderModifyRejected, OrderPendingCancel, OrderPendingUpdate,
        OrderRejected, OrderSubmitted, OrderTriggered, OrderUpdated,
    },
    identifiers::{
        AccountId, ClientId, ClientOrderId, ComponentId, InstrumentId, PositionId, StrategyId,
        TradeId, TraderId, Venue, VenueOrderId,
    },
    types::{AccountBalance, Currency, MarginBalance, Money, Price, Quantity},
};
use ustr::Ustr;

use crate::reports::{ExecutionMassStatus, OrderStatusReport, TradeReport};

/// A base execution client to be embedded by venue adapter implementations.
///
/// Synthesizes order lifecycle events and routes them over the message bus to
/// the execution engine; routes account state to the portfolio. The client
/// itself never mutates order state.
#[derive(Debug)]
pub struct BaseExecutionClient {
    /// The trader ID for the client.
    pub trader_id: TraderId,
    /// The unique client ID.
    pub client_id: ClientId,
    /// The venue for the client (if applicable).
    pub venue: Option<Venue>,
    /// The order management system type for the client.
    pub oms_type: OmsType,
    /// The account type for the client.
    pub account_type: AccountType,
    /// The base currency for the account (if applicable).
    pub base_currency: Option<Currency>,
    account_id: AccountId,
    is_connected: bool,
    core: ComponentCore,
    clock: Rc<RefCell<dyn Clock>>,
    cache: Rc<RefCell<Cache>>,
    msgbus: Rc<RefCell<MessageBus>>,
}

impl BaseExecutionClient {
    /// Creates a new [`BaseExecutionClient`] instance in the `Ready` state.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `oms_type` is `OmsType::Unspecified`.
    /// - The `account_id` issuer does not equal the `client_id`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trader_id: TraderId,
        client_id: ClientId,
        venue: Option<Venue>,
        oms_type: OmsType,
        account_id: AccountId,
        account_type: AccountType,
        base_currency: Option<Currency>,
        clock: Rc<RefCell<dyn Clock>>,
        cache: Rc<RefCell<Cache>>,
        msgbus: Rc<RefCell<MessageBus>>,
    ) -> anyhow::Result<Self> {
        if oms_type == OmsType::Unspecified {
            anyhow::bail!("`oms_type` must be specified for execution client {client_id}");
        }
        check_account_issuer(&account_id, &client_id)?;

        let mut core = ComponentCore::new(
            ComponentId::new(client_id.as_str()),
            Some(msgbus.clone()),
        );
        core.initialize()?;

        Ok(Self {
            trader_id,
            client_id,
            venue,
            oms_type,
            account_type,
            base_currency,
            account_id,
            is_connected: false,
            core,
            clock,
            cache,
            msgbus,
        })
    }

    /// Returns the account ID for the client.
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Returns whether the client is connected to the venue.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.is_connected
    }

    /// Sets the connection status for the client.
    pub const fn set_connected(&mut self, is_connected: bool) {
        self.is_connected = is_connected;
    }

    /// Sets the account ID for the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the `account_id` issuer does not equal the client ID.
    pub fn set_account_id(&mut self, account_id: AccountId) -> anyhow::Result<()> {
        check_account_issuer(&account_id, &self.client_id)?;
        self.account_id = account_id;
        Ok(())
    }

    /// Returns the latest cached account state for the client (if any).
    #[must_use]
    pub fn get_account(&self) -> Option<AccountState> {
        self.cache.borrow().account(&self.account_id).cloned()
    }

    /// Generates an [`AccountState`] event and routes it to the portfolio.
    ///
    /// # Errors
    ///
    /// Cannot currently fail; the `Result` keeps the generator surface uniform
    /// for adapters which validate balances upstream.
    pub fn generate_account_state(
        &self,
        balances: Vec<AccountBalance>,
        margins: Vec<MarginBalance>,
        reported: bool,
        ts_event: UnixNanos,
    ) -> anyhow::Result<()> {
        let account_state = AccountState::new(
            self.account_id,
            self.account_type,
            balances,
            margins,
            reported,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            self.base_currency,
        );
        self.send_account_state(account_state);
        Ok(())
    }

    pub fn generate_order_submitted(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        ts_event: UnixNanos,
    ) {
        let event = OrderSubmitted::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            self.account_id,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
        );
        self.send_order_event(OrderEventAny::Submitted(event));
    }

    pub fn generate_order_rejected(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        reason: &str,
        ts_event: UnixNanos,
    ) {
        let event = OrderRejected::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            self.account_id,
            Ustr::from(reason),
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            false,
        );
        self.send_order_event(OrderEventAny::Rejected(event));
    }

    pub fn generate_order_accepted(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        ts_event: UnixNanos,
    ) {
        let event = OrderAccepted::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            self.account_id,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            false,
        );
        self.send_order_event(OrderEventAny::Accepted(event));
    }

    pub fn generate_order_pending_update(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        ts_event: UnixNanos,
    ) {
        let event = OrderPendingUpdate::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            self.account_id,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            false,
            Some(venue_order_id),
        );
        self.send_order_event(OrderEventAny::PendingUpdate(event));
    }

    pub fn generate_order_pending_cancel(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        ts_event: UnixNanos,
    ) {
        let event = OrderPendingCancel::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            self.account_id,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            false,
            Some(venue_order_id),
        );
        self.send_order_event(OrderEventAny::PendingCancel(event));
    }

    pub fn generate_order_modify_rejected(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        reason: &str,
        ts_event: UnixNanos,
    ) {
        let event = OrderModifyRejected::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            Ustr::from(reason),
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            false,
            Some(venue_order_id),
            Some(self.account_id),
        );
        self.send_order_event(OrderEventAny::ModifyRejected(event));
    }

    pub fn generate_order_cancel_rejected(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        reason: &str,
        ts_event: UnixNanos,
    ) {
        let event = OrderCancelRejected::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            Ustr::from(reason),
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            false,
            Some(venue_order_id),
            Some(self.account_id),
        );
        self.send_order_event(OrderEventAny::CancelRejected(event));
    }

    /// Generates an [`OrderUpdated`] event and routes it to the execution engine.
    ///
    /// When `venue_order_id_modified` is false the supplied `venue_order_id`
    /// is verified against the cache's current index for `client_order_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the supplied `venue_order_id` does not match the
    /// cached venue order ID for the `client_order_id`.
    #[allow(clippy::too_many_arguments)]
    pub fn generate_order_updated(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        quantity: Quantity,
        price: Option<Price>,
        trigger_price: Option<Price>,
        ts_event: UnixNanos,
        venue_order_id_modified: bool,
    ) -> anyhow::Result<()> {
        if !venue_order_id_modified {
            let cache = self.cache.borrow();
            if let Some(existing) = cache.venue_order_id(&client_order_id) {
                if *existing != venue_order_id {
                    anyhow::bail!(
                        "Existing venue order ID {existing} does not match provided venue order ID {venue_order_id}",
                    );
                }
            }
        }

        let event = OrderUpdated::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            quantity,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            false,
            Some(venue_order_id),
            Some(self.account_id),
            price,
            trigger_price,
        );
        self.send_order_event(OrderEventAny::Updated(event));
        Ok(())
    }

    pub fn generate_order_canceled(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        ts_event: UnixNanos,
    ) {
        let event = OrderCanceled::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            false,
            Some(venue_order_id),
            Some(self.account_id),
        );
        self.send_order_event(OrderEventAny::Canceled(event));
    }

    pub fn generate_order_triggered(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        ts_event: UnixNanos,
    ) {
        let event = OrderTriggered::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            false,
            Some(venue_order_id),
            Some(self.account_id),
        );
        self.send_order_event(OrderEventAny::Triggered(event));
    }

    pub fn generate_order_expired(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        ts_event: UnixNanos,
    ) {
        let event = OrderExpired::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            false,
            Some(venue_order_id),
            Some(self.account_id),
        );
        self.send_order_event(OrderEventAny::Expired(event));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn generate_order_filled(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        venue_position_id: Option<PositionId>,
        trade_id: TradeId,
        order_side: OrderSide,
        order_type: OrderType,
        last_qty: Quantity,
        last_px: Price,
        quote_currency: Currency,
        commission: Option<Money>,
        liquidity_side: LiquiditySide,
        ts_event: UnixNanos,
    ) {
        let event = OrderFilled::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            self.account_id,
            trade_id,
            order_side,
            order_type,
            last_qty,
            last_px,
            quote_currency,
            liquidity_side,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            false,
            venue_position_id,
            commission,
        );
        self.send_order_event(OrderEventAny::Filled(event));
    }

    fn send_account_state(&self, account_state: AccountState) {
        let endpoint = MessagingSwitchboard::portfolio_update_account();
        msgbus::send(&self.msgbus, endpoint, &account_state as &dyn Any);
    }

    fn send_order_event(&self, event: OrderEventAny) {
        let endpoint = MessagingSwitchboard::exec_engine_process();
        msgbus::send(&self.msgbus, endpoint, &event as &dyn Any);
    }

    /// Routes an [`ExecutionMassStatus`] report to the execution engine.
    pub fn send_mass_status_report(&self, report: ExecutionMassStatus) {
        let endpoint = MessagingSwitchboard::exec_engine_reconcile_mass_status();
        msgbus::send(&self.msgbus, endpoint, &report as &dyn Any);
    }

    /// Routes an [`OrderStatusReport`] to the execution engine.
    pub fn send_order_status_report(&self, report: OrderStatusReport) {
        let endpoint = MessagingSwitchboard::exec_engine_reconcile_report();
        msgbus::send(&self.msgbus, endpoint, &report as &dyn Any);
    }

    /// Routes a [`TradeReport`] to the execution engine.
    pub fn send_trade_report(&self, report: TradeReport) {
        let endpoint = MessagingSwitchboard::exec_engine_reconcile_report();
        msgbus::send(&self.msgbus, endpoint, &report as &dyn Any);
    }
}

impl Component for BaseExecutionClient {
    fn id(&self) -> ComponentId {
        self.core.component_id
    }

    fn state(&self) -> ComponentState {
        self.core.state()
    }

    fn start(&mut self) -> anyhow::Result<()> {
        self.core.start()
    }

    fn stop(&mut self) -> anyhow::Result<()> {
        self.core.stop()
    }

    fn resume(&mut self) -> anyhow::Result<()> {
        self.core.resume()
    }

    fn reset(&mut self) -> anyhow::Result<()> {
        self.core.reset()
    }

    fn dispose(&mut self) -> anyhow::Result<()> {
        self.core.dispose()
    }

    fn degrade(&mut self) -> anyhow::Result<()> {
        self.core.degrade()
    }

    fn fault(&mut self) -> anyhow::Result<()> {
        self.core.fault()
    }

    fn handle_event(&mut self, event: TimeEvent) {
        log::debug!("{} received {event}", self.client_id);
    }
}

fn check_account_issuer(account_id: &AccountId, client_id: &ClientId) -> anyhow::Result<()> {
    if account_id.get_issuer().as_str() != client_id.as_str() {
        anyhow::bail!(
            "Account ID issuer '{}' does not match client ID '{client_id}'",
            account_id.get_issuer(),
        );
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use sextant_common::{
        clock::TestClock,
        msgbus::{ShareableMessageHandler, TypedMessageHandler},
    };

    use super::*;

    struct TestHarness {
        msgbus: Rc<RefCell<MessageBus>>,
        cache: Rc<RefCell<Cache>>,
        clock: Rc<RefCell<TestClock>>,
        order_events: Rc<RefCell<Vec<OrderEventAny>>>,
        account_states: Rc<RefCell<Vec<AccountState>>>,
    }

    fn harness() -> TestHarness {
        let msgbus = MessageBus::default().into_shared();
        let cache = Rc::new(RefCell::new(Cache::new()));
        let clock = Rc::new(RefCell::new(TestClock::new()));
        clock.borrow().set_time(UnixNanos::from(2_000));

        let order_events: Rc<RefCell<Vec<OrderEventAny>>> = Rc::new(RefCell::new(Vec::new()));
        let order_events_clone = order_events.clone();
        let exec_handler = ShareableMessageHandler::from(TypedMessageHandler::with_id(
            "ExecEngine.process",
            move |event: &OrderEventAny| order_events_clone.borrow_mut().push(*event),
        ));

        let account_states: Rc<RefCell<Vec<AccountState>>> = Rc::new(RefCell::new(Vec::new()));
        let account_states_clone = account_states.clone();
        let portfolio_handler = ShareableMessageHandler::from(TypedMessageHandler::with_id(
            "Portfolio.update_account",
            move |state: &AccountState| account_states_clone.borrow_mut().push(state.clone()),
        ));

        {
            let mut bus = msgbus.borrow_mut();
            let exec_handler_id = bus.register_handler(exec_handler);
            bus.register_endpoint("ExecEngine.process", exec_handler_id)
                .unwrap();
            let portfolio_handler_id = bus.register_handler(portfolio_handler);
            bus.register_endpoint("Portfolio.update_account", portfolio_handler_id)
                .unwrap();
        }

        TestHarness {
            msgbus,
            cache,
            clock,
            order_events,
            account_states,
        }
    }

    fn test_client(harness: &TestHarness) -> BaseExecutionClient {
        BaseExecutionClient::new(
            TraderId::default(),
            ClientId::new("SIM"),
            Some(Venue::new("SIM")),
            OmsType::Netting,
            AccountId::new("SIM-001"),
            AccountType::Margin,
            Some(Currency::USD()),
            harness.clock.clone(),
            harness.cache.clone(),
            harness.msgbus.clone(),
        )
        .unwrap()
    }

    #[rstest]
    fn test_unspecified_oms_type_rejected() {
        let harness = harness();
        let result = BaseExecutionClient::new(
            TraderId::default(),
            ClientId::new("SIM"),
            Some(Venue::new("SIM")),
            OmsType::Unspecified,
            AccountId::new("SIM-001"),
            AccountType::Margin,
            None,
            harness.clock.clone(),
            harness.cache.clone(),
            harness.msgbus.clone(),
        );
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("`oms_type` must be specified")
        );
    }

    #[rstest]
    fn test_account_issuer_mismatch_rejected() {
        let harness = harness();
        let result = BaseExecutionClient::new(
            TraderId::default(),
            ClientId::new("SIM"),
            Some(Venue::new("SIM")),
            OmsType::Netting,
            AccountId::new("OTHER-001"),
            AccountType::Margin,
            None,
            harness.clock.clone(),
            harness.cache.clone(),
            harness.msgbus.clone(),
        );
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("does not match client ID")
        );
    }

    #[rstest]
    fn test_set_account_id_enforces_issuer() {
        let harness = harness();
        let mut client = test_client(&harness);

        assert!(client.set_account_id(AccountId::new("SIM-002")).is_ok());
        assert_eq!(client.account_id(), AccountId::new("SIM-002"));

        let result = client.set_account_id(AccountId::new("OTHER-002"));
        assert!(result.is_err());
        assert_eq!(client.account_id(), AccountId::new("SIM-002"));
    }

    #[rstest]
    fn test_client_component_lifecycle() {
        let harness = harness();
        let mut client = test_client(&harness);

        assert_eq!(client.id(), ComponentId::new("SIM"));
        assert_eq!(client.state(), ComponentState::Ready);

        client.start().unwrap();
        assert!(client.is_running());

        client.stop().unwrap();
        assert!(client.is_stopped());
    }

    #[rstest]
    fn test_generate_order_filled_routes_to_exec_engine() {
        let harness = harness();
        let client = test_client(&harness);

        let trade_id = TradeId::new("T-0001");
        client.generate_order_filled(
            StrategyId::new("EMACross-001"),
            InstrumentId::from("ETHUSDT.SIM"),
            ClientOrderId::new("O-1"),
            VenueOrderId::new("V-1"),
            Some(PositionId::new("P-1")),
            trade_id,
            OrderSide::Buy,
            OrderType::Limit,
            Quantity::new(0.5, 1),
            Price::new(2500.0, 2),
            Currency::USDT(),
            Some(Money::new(1.25, Currency::USDT())),
            LiquiditySide::Maker,
            UnixNanos::from(1_000),
        );

        let events = harness.order_events.borrow();
        assert_eq!(events.len(), 1);
        match &events[0] {
            OrderEventAny::Filled(fill) => {
                assert_eq!(fill.trader_id, TraderId::default());
                assert_eq!(fill.account_id, AccountId::new("SIM-001"));
                assert_eq!(fill.client_order_id, ClientOrderId::new("O-1"));
                assert_eq!(fill.venue_order_id, VenueOrderId::new("V-1"));
                assert_eq!(fill.trade_id, trade_id);
                assert_eq!(fill.ts_event, 1_000);
                assert_eq!(fill.ts_init, 2_000);
                assert!(fill.ts_init >= fill.ts_event);
            }
            event => panic!("Unexpected event {event}"),
        }
    }

    #[rstest]
    fn test_generate_account_state_routes_to_portfolio() {
        let harness = harness();
        let client = test_client(&harness);

        client
            .generate_account_state(
                vec![AccountBalance::new(
                    Money::from("100.00 USD"),
                    Money::from("0.00 USD"),
                    Money::from("100.00 USD"),
                )],
                vec![],
                true,
                UnixNanos::from(1_000),
            )
            .unwrap();

        let states = harness.account_states.borrow();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].account_id, AccountId::new("SIM-001"));
        assert_eq!(states[0].account_type, AccountType::Margin);
        assert_eq!(states[0].base_currency, Some(Currency::USD()));
        assert!(states[0].ts_init >= states[0].ts_event);
        assert!(harness.order_events.borrow().is_empty());
    }

    #[rstest]
    fn test_repeated_events_have_unique_event_ids() {
        let harness = harness();
        let client = test_client(&harness);

        for _ in 0..2 {
            client.generate_order_accepted(
                StrategyId::new("EMACross-001"),
                InstrumentId::from("ETHUSDT.SIM"),
                ClientOrderId::new("O-1"),
                VenueOrderId::new("V-1"),
                UnixNanos::from(1_000),
            );
        }

        let events = harness.order_events.borrow();
        assert_eq!(events.len(), 2);
        assert_ne!(events[0].event_id(), events[1].event_id());
        assert_eq!(events[0].client_order_id(), events[1].client_order_id());
    }

    #[rstest]
    fn test_generate_order_updated_with_stale_venue_order_id_errors() {
        let harness = harness();
        let client = test_client(&harness);

        harness
            .cache
            .borrow_mut()
            .add_venue_order_id(&ClientOrderId::new("O-1"), &VenueOrderId::new("V-1"), false)
            .unwrap();

        let result = client.generate_order_updated(
            StrategyId::new("EMACross-001"),
            InstrumentId::from("ETHUSDT.SIM"),
            ClientOrderId::new("O-1"),
            VenueOrderId::new("V-STALE"),
            Quantity::new(1.0, 1),
            Some(Price::new(2500.0, 2)),
            None,
            UnixNanos::from(1_000),
            false,
        );

        assert!(result.unwrap_err().to_string().contains("does not match"));
        assert!(harness.order_events.borrow().is_empty());
    }

    #[rstest]
    fn test_generate_order_updated_with_modified_venue_order_id() {
        let harness = harness();
        let client = test_client(&harness);

        harness
            .cache
            .borrow_mut()
            .add_venue_order_id(&ClientOrderId::new("O-1"), &VenueOrderId::new("V-1"), false)
            .unwrap();

        client
            .generate_order_updated(
                StrategyId::new("EMACross-001"),
                InstrumentId::from("ETHUSDT.SIM"),
                ClientOrderId::new("O-1"),
                VenueOrderId::new("V-2"),
                Quantity::new(1.0, 1),
                None,
                None,
                UnixNanos::from(1_000),
                true,
            )
            .unwrap();

        let events = harness.order_events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].venue_order_id(), Some(VenueOrderId::new("V-2")));
    }

    #[rstest]
    fn test_reports_route_to_reconcile_endpoints() {
        let harness = harness();
        let client = test_client(&harness);

        let reports: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        let reports_clone = reports.clone();
        let report_handler = ShareableMessageHandler::from(TypedMessageHandler::with_id(
            "ExecEngine.reconcile_report",
            move |report: &TradeReport| {
                reports_clone.borrow_mut().push(report.trade_id.to_string());
            },
        ));
        let mass_reports: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let mass_reports_clone = mass_reports.clone();
        let mass_handler = ShareableMessageHandler::from(TypedMessageHandler::with_id(
            "ExecEngine.reconcile_mass_status",
            move |report: &ExecutionMassStatus| {
                mass_reports_clone
                    .borrow_mut()
                    .push(report.client_id.to_string());
            },
        ));

        {
            let mut bus = harness.msgbus.borrow_mut();
            let report_handler_id = bus.register_handler(report_handler);
            bus.register_endpoint("ExecEngine.reconcile_report", report_handler_id)
                .unwrap();
            let mass_handler_id = bus.register_handler(mass_handler);
            bus.register_endpoint("ExecEngine.reconcile_mass_status", mass_handler_id)
                .unwrap();
        }

        client.send_trade_report(TradeReport::new(
            AccountId::new("SIM-001"),
            InstrumentId::from("ETHUSDT.SIM"),
            Some(ClientOrderId::new("O-1")),
            VenueOrderId::new("V-1"),
            TradeId::new("T-1"),
            OrderSide::Buy,
            Quantity::new(0.5, 1),
            Price::new(2500.0, 2),
            None,
            LiquiditySide::Maker,
            None,
            UUID4::new(),
            UnixNanos::from(1_000),
            UnixNanos::from(2_000),
        ));
        client.send_mass_status_report(ExecutionMassStatus::new(
            ClientId::new("SIM"),
            AccountId::new("SIM-001"),
            Venue::new("SIM"),
            UUID4::new(),
            UnixNanos::from(2_000),
        ));

        assert_eq!(*reports.borrow(), vec!["T-1"]);
        assert_eq!(*mass_reports.borrow(), vec!["SIM"]);
    }
}
