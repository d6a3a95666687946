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

//! Order lifecycle events.

pub mod accepted;
pub mod any;
pub mod cancel_rejected;
pub mod canceled;
pub mod expired;
pub mod filled;
pub mod modify_rejected;
pub mod pending_cancel;
pub mod pending_update;
pub mod rejected;
pub mod submitted;
pub mod triggered;
pub mod updated;

// Re-exports
pub use crate::events::order::{
    accepted::OrderAccepted, any::OrderEventAny, cancel_rejected::OrderCancelRejected,
    canceled::OrderCanceled, expired::OrderExpired, filled::OrderFilled,
    modify_rejected::OrderModifyRejected, pending_cancel::OrderPendingCancel,
    pending_update::OrderPendingUpdate, rejected::OrderRejected, submitted::OrderSubmitted,
    triggered::OrderTriggered, updated::OrderUpdated,
};
