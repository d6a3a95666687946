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

//! The messaging switchboard for built-in endpoint addresses and topic names.

use sextant_model::identifiers::{ComponentId, StrategyId};
use ustr::Ustr;

use crate::enums::ComponentState;

/// Provides the built-in endpoint addresses and topic naming conventions for
/// a Sextant system instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct MessagingSwitchboard;

impl MessagingSwitchboard {
    /// Returns the endpoint address for the portfolio to update an account.
    #[must_use]
    pub fn portfolio_update_account() -> Ustr {
        Ustr::from("Portfolio.update_account")
    }

    /// Returns the endpoint address for the execution engine to process an order event.
    #[must_use]
    pub fn exec_engine_process() -> Ustr {
        Ustr::from("ExecEngine.process")
    }

    /// Returns the endpoint address for the execution engine to reconcile an
    /// execution mass status.
    #[must_use]
    pub fn exec_engine_reconcile_mass_status() -> Ustr {
        Ustr::from("ExecEngine.reconcile_mass_status")
    }

    /// Returns the endpoint address for the execution engine to reconcile an
    /// order status or trade report.
    #[must_use]
    pub fn exec_engine_reconcile_report() -> Ustr {
        Ustr::from("ExecEngine.reconcile_report")
    }

    /// Returns the topic for order events of the given `strategy_id`.
    #[must_use]
    pub fn topic_order_events(strategy_id: StrategyId) -> Ustr {
        Ustr::from(&format!("events.order.{strategy_id}"))
    }

    /// Returns the topic for state transition events of the given component.
    #[must_use]
    pub fn topic_component_state(component_id: ComponentId, state: ComponentState) -> Ustr {
        Ustr::from(&format!("events.system.component.{component_id}.{state}"))
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
    fn test_endpoint_addresses() {
        assert_eq!(
            MessagingSwitchboard::portfolio_update_account(),
            "Portfolio.update_account"
        );
        assert_eq!(
            MessagingSwitchboard::exec_engine_process(),
            "ExecEngine.process"
        );
        assert_eq!(
            MessagingSwitchboard::exec_engine_reconcile_mass_status(),
            "ExecEngine.reconcile_mass_status"
        );
        assert_eq!(
            MessagingSwitchboard::exec_engine_reconcile_report(),
            "ExecEngine.reconcile_report"
        );
    }

    #[rstest]
    fn test_topic_component_state() {
        let topic = MessagingSwitchboard::topic_component_state(
            ComponentId::new("RiskEngine"),
            ComponentState::Running,
        );
        assert_eq!(topic, "events.system.component.RiskEngine.RUNNING");
    }
}
