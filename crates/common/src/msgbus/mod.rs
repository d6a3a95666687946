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

//! A common in-memory `MessageBus` supporting multiple messaging patterns:
//!
//! - Point-to-Point
//! - Pub/Sub
//! - Request/Response
//!
//! Pub/Sub wildcard patterns for hierarchical topics are possible:
//! - `*` asterisk matches zero or more characters in a pattern.
//! - `?` question mark matches a single character in a pattern.
//!
//! For example, `comp*` matches anything beginning with `comp` which means
//! `comp`, `complete`, and `computer` are all matched. `c?mp` matches `camp`
//! and `comp` but not `cmp` or `champ`.
//!
//! Handlers are registered with the bus-owned [`HandlerRegistry`] and referred
//! to by opaque [`HandlerId`] tokens in every routing table. Message dispatch
//! is performed by the module-level functions ([`send`], [`publish`],
//! [`request`], [`response`]) which resolve handlers under a short borrow of
//! the bus and invoke them after the borrow is released, so handlers may
//! publish and send messages reentrantly.

pub mod handler;
pub mod matching;
pub mod switchboard;


use std::{
    any::Any,
    cell::RefCell,
    fmt::Debug,
    hash::{Hash, Hasher},
    rc::Rc,
};

use ahash::{AHashMap, AHashSet};
use indexmap::IndexSet;
use sextant_core::{UUID4, correctness::check_valid_string};
use sextant_model::identifiers::TraderId;
use ustr::Ustr;

// Re-exports
pub use crate::msgbus::{
    handler::{HandlerId, HandlerRegistry, MessageHandler, ShareableMessageHandler,
        TypedMessageHandler},
    matching::is_matching,
    switchboard::MessagingSwitchboard,
};

/// Represents a subscription to a particular topic pattern.
///
/// This is an internal type used by the message bus to organize patterns and
/// their subscribers.
///
/// # Warnings
///
/// Assigning priority handling is an advanced feature which *shouldn't
/// normally be needed by most users*. **Only assign a higher priority to the
/// subscription if you are certain of what you're doing**. If an inappropriate
/// priority is assigned then the handler may receive messages before core
/// system components have been able to process necessary calculations and
/// produce potential side effects for logically sound behavior.
#[derive(Clone, Copy, Debug)]
pub struct Subscription {
    /// The topic pattern for the subscription.
    pub pattern: Ustr,
    /// The handler ID for the subscription.
    pub handler_id: HandlerId,
    /// The priority for the subscription, determining the ordering of handlers
    /// receiving messages (higher priorities receive messages first).
    pub priority: u8,
    /// The bus-wide monotonic sequence number assigned at subscription time,
    /// breaking priority ties in subscription order.
    sequence: usize,
}

impl Subscription {
    /// Creates a new [`Subscription`] instance.
    #[must_use]
    pub fn new<T: AsRef<str>>(
        pattern: T,
        handler_id: HandlerId,
        priority: Option<u8>,
        sequence: usize,
    ) -> Self {
        Self {
            pattern: Ustr::from(pattern.as_ref()),
            handler_id,
            priority: priority.unwrap_or(0),
            sequence,
        }
    }
}

impl PartialEq for Subscription {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.handler_id == other.handler_id
    }
}

impl Eq for Subscription {}

impl Hash for Subscription {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.handler_id.hash(state);
    }
}

impl PartialOrd for Subscription {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Subscription {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Descending priority, then ascending subscription sequence
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Monotonic delivery counters for a message bus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MessageBusCounters {
    /// The count of messages sent to endpoints.
    pub sent: u64,
    /// The count of requests sent.
    pub req: u64,
    /// The count of responses delivered.
    pub res: u64,
    /// The count of publish calls.
    pub published: u64,
}

/// A generic message bus to facilitate various messaging patterns.
///
/// The bus provides both a producer and consumer API for Pub/Sub, Req/Rep, as
/// well as direct point-to-point messaging to registered endpoints.
#[derive(Debug)]
pub struct MessageBus {
    /// The trader ID associated with the message bus.
    pub trader_id: TraderId,
    /// The instance ID associated with the message bus.
    pub instance_id: UUID4,
    /// The name for the message bus.
    pub name: String,
    /// The registry owning the handler callables for this bus.
    handlers: HandlerRegistry,
    /// Index of endpoint addresses and their handlers.
    endpoints: indexmap::IndexMap<Ustr, HandlerId>,
    /// All subscriptions for the bus, in subscription order.
    subscriptions: IndexSet<Subscription>,
    /// Memoized resolution of topic to matching subscriptions, in delivery
    /// order. Invalidated wholesale on any subscribe or unsubscribe.
    patterns_cache: AHashMap<Ustr, Vec<Subscription>>,
    /// Index of outstanding request correlation IDs and their response handlers.
    pending: AHashMap<UUID4, HandlerId>,
    counters: MessageBusCounters,
    sub_sequence: usize,
}

impl MessageBus {
    /// Creates a new [`MessageBus`] instance.
    #[must_use]
    pub fn new(trader_id: TraderId, instance_id: UUID4, name: Option<String>) -> Self {
        Self {
            trader_id,
            instance_id,
            name: name.unwrap_or_else(|| stringify!(MessageBus).to_owned()),
            handlers: HandlerRegistry::new(),
            endpoints: indexmap::IndexMap::new(),
            subscriptions: IndexSet::new(),
            patterns_cache: AHashMap::new(),
            pending: AHashMap::new(),
            counters: MessageBusCounters::default(),
            sub_sequence: 0,
        }
    }

    /// Wraps the bus for shared single-threaded access.
    #[must_use]
    pub fn into_shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    /// Registers the given `handler` with the bus registry, returning its ID.
    pub fn register_handler(&mut self, handler: impl Into<ShareableMessageHandler>) -> HandlerId {
        self.handlers.insert(handler.into())
    }

    /// Deregisters the handler for the given `handler_id` from the bus registry.
    ///
    /// Routing table entries referring to the handler become dead and are
    /// skipped (with an error log) at delivery time.
    pub fn deregister_handler(&mut self, handler_id: &HandlerId) {
        self.handlers.remove(handler_id);
    }

    /// Returns the handler for the given `handler_id`.
    #[must_use]
    pub fn handler(&self, handler_id: &HandlerId) -> Option<ShareableMessageHandler> {
        self.handlers.get(handler_id).cloned()
    }

    /// Registers the `handler_id` to receive messages for the `endpoint` address.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `endpoint` is not a valid string.
    /// - No handler is registered for `handler_id`.
    /// - The `endpoint` address is already registered.
    pub fn register_endpoint<T: AsRef<str>>(
        &mut self,
        endpoint: T,
        handler_id: HandlerId,
    ) -> anyhow::Result<()> {
        check_valid_string(&endpoint, stringify!(endpoint))?;
        let endpoint = Ustr::from(endpoint.as_ref());

        if !self.handlers.contains(&handler_id) {
            anyhow::bail!("No handler registered for ID '{handler_id}'");
        }
        if self.endpoints.contains_key(&endpoint) {
            anyhow::bail!("Endpoint '{endpoint}' already registered");
        }

        log::debug!("Registering endpoint '{endpoint}' with handler ID '{handler_id}'");
        self.endpoints.insert(endpoint, handler_id);
        Ok(())
    }

    /// Deregisters the handler for the `endpoint` address.
    ///
    /// Deregistering an unknown endpoint is a no-op.
    pub fn deregister_endpoint<T: AsRef<str>>(&mut self, endpoint: T) {
        let endpoint = Ustr::from(endpoint.as_ref());
        log::debug!("Deregistering endpoint '{endpoint}'");
        self.endpoints.shift_remove(&endpoint);
    }

    /// Subscribes the `handler_id` to the topic `pattern` with an optional `priority`.
    ///
    /// An identical `(pattern, handler_id)` subscription is idempotent; the
    /// original subscription (and its priority) is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `pattern` is not a valid string.
    /// - No handler is registered for `handler_id`.
    pub fn subscribe<T: AsRef<str>>(
        &mut self,
        pattern: T,
        handler_id: HandlerId,
        priority: Option<u8>,
    ) -> anyhow::Result<()> {
        check_valid_string(&pattern, stringify!(pattern))?;

        if !self.handlers.contains(&handler_id) {
            anyhow::bail!("No handler registered for ID '{handler_id}'");
        }

        let sub = Subscription::new(pattern, handler_id, priority, self.sub_sequence);
        if self.subscriptions.contains(&sub) {
            log::warn!("{sub:?} already exists");
            return Ok(());
        }

        log::debug!("Subscribing handler ID '{handler_id}' to pattern '{}'", sub.pattern);
        self.sub_sequence += 1;
        self.subscriptions.insert(sub);
        self.patterns_cache.clear();
        Ok(())
    }

    /// Unsubscribes the `handler_id` from the topic `pattern`.
    ///
    /// Unsubscribing a non-existent subscription is a silent no-op.
    pub fn unsubscribe<T: AsRef<str>>(&mut self, pattern: T, handler_id: HandlerId) {
        let sub = Subscription::new(pattern, handler_id, None, 0);
        if self.subscriptions.shift_remove(&sub) {
            log::debug!(
                "Unsubscribed handler ID '{handler_id}' from pattern '{}'",
                sub.pattern,
            );
            self.patterns_cache.clear();
        } else {
            log::debug!("No subscription found for {sub:?}");
        }
    }

    /// Returns whether the `handler_id` is subscribed to the given `pattern`.
    #[must_use]
    pub fn is_subscribed<T: AsRef<str>>(&self, pattern: T, handler_id: HandlerId) -> bool {
        self.subscriptions
            .contains(&Subscription::new(pattern, handler_id, None, 0))
    }

    /// Returns whether there is a registered endpoint for the given address.
    #[must_use]
    pub fn is_registered<T: AsRef<str>>(&self, endpoint: T) -> bool {
        self.endpoints.contains_key(&Ustr::from(endpoint.as_ref()))
    }

    /// Returns the registered endpoint addresses.
    #[must_use]
    pub fn endpoints(&self) -> Vec<&str> {
        self.endpoints.keys().map(Ustr::as_str).collect()
    }

    /// Returns the topic patterns for active subscriptions.
    #[must_use]
    pub fn topics(&self) -> Vec<&str> {
        self.subscriptions
            .iter()
            .map(|sub| sub.pattern.as_str())
            .collect()
    }

    /// Returns all subscriptions for the bus.
    #[must_use]
    pub fn subscriptions(&self) -> Vec<&Subscription> {
        self.subscriptions.iter().collect()
    }

    /// Returns the count of subscriptions matching the given `topic`.
    #[must_use]
    pub fn subscriptions_count<T: AsRef<str>>(&self, topic: T) -> usize {
        self.matching_subscriptions(&Ustr::from(topic.as_ref()))
            .len()
    }

    /// Returns the current delivery counters.
    #[must_use]
    pub const fn counters(&self) -> MessageBusCounters {
        self.counters
    }

    /// Returns the subscriptions matching the given `topic`, in delivery order.
    ///
    /// Delivery order is descending priority then ascending subscription
    /// sequence, with at most one entry per handler ID (the highest-ranked
    /// entry wins when multiple patterns of one handler match).
    #[must_use]
    pub fn matching_subscriptions(&self, topic: &Ustr) -> Vec<Subscription> {
        let mut matching: Vec<Subscription> = self
            .subscriptions
            .iter()
            .filter(|sub| is_matching(topic, &sub.pattern))
            .copied()
            .collect();
        matching.sort();

        // Invoke each handler exactly once even if multiple patterns match
        let mut seen: AHashSet<HandlerId> = AHashSet::with_capacity(matching.len());
        matching.retain(|sub| seen.insert(sub.handler_id));
        matching
    }

    fn matching_subscriptions_cached(&mut self, topic: &Ustr) -> Vec<Subscription> {
        if let Some(subs) = self.patterns_cache.get(topic) {
            return subs.clone();
        }
        let subs = self.matching_subscriptions(topic);
        self.patterns_cache.insert(*topic, subs.clone());
        subs
    }

    /// Registers a response handler for the given `correlation_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No handler is registered for `handler_id`.
    /// - The `correlation_id` already has a registered response handler.
    pub fn register_response_handler(
        &mut self,
        correlation_id: &UUID4,
        handler_id: HandlerId,
    ) -> anyhow::Result<()> {
        if !self.handlers.contains(&handler_id) {
            anyhow::bail!("No handler registered for ID '{handler_id}'");
        }
        if self.pending.contains_key(correlation_id) {
            anyhow::bail!("Correlation ID '{correlation_id}' already has a registered handler");
        }
        self.pending.insert(*correlation_id, handler_id);
        Ok(())
    }

    fn endpoint_handler(&self, endpoint: &Ustr) -> Option<ShareableMessageHandler> {
        self.endpoints
            .get(endpoint)
            .and_then(|handler_id| self.handlers.get(handler_id))
            .cloned()
    }

    fn take_response_handler(&mut self, correlation_id: &UUID4) -> Option<HandlerId> {
        self.pending.remove(correlation_id)
    }
}

impl Default for MessageBus {
    /// Creates a new default [`MessageBus`] instance.
    fn default() -> Self {
        Self::new(TraderId::default(), UUID4::new(), None)
    }
}

/// Sends the `message` to the `endpoint`.
///
/// Sending to an unknown endpoint is "no delivery": logged at DEBUG with no
/// error raised. The `sent` counter advances on every send attempt.
pub fn send<T: AsRef<str>>(msgbus: &Rc<RefCell<MessageBus>>, endpoint: T, message: &dyn Any) {
    let endpoint = Ustr::from(endpoint.as_ref());
    let handler = {
        let mut bus = msgbus.borrow_mut();
        bus.counters.sent += 1;
        bus.endpoint_handler(&endpoint)
    };

    match handler {
        Some(handler) => {
            if let Err(e) = handler.0.handle(message) {
                log::error!("Error handling message sent to endpoint '{endpoint}': {e}");
            }
        }
        None => log::debug!("No endpoint registered at '{endpoint}' (no delivery)"),
    }
}

/// Publishes the `message` to the `topic`.
///
/// Every handler with a matching pattern subscription is invoked exactly once,
/// synchronously on the caller's thread, in descending priority then ascending
/// subscription order. A failing handler is logged at ERROR and does not
/// suppress deliveries to the remaining handlers.
pub fn publish<T: AsRef<str>>(msgbus: &Rc<RefCell<MessageBus>>, topic: T, message: &dyn Any) {
    let topic = Ustr::from(topic.as_ref());
    log::trace!("Publishing topic '{topic}'");

    let handlers: Vec<(HandlerId, Option<ShareableMessageHandler>)> = {
        let mut bus = msgbus.borrow_mut();
        bus.counters.published += 1;
        bus.matching_subscriptions_cached(&topic)
            .iter()
            .map(|sub| (sub.handler_id, bus.handler(&sub.handler_id)))
            .collect()
    };

    log::trace!("Matched {} subscriptions", handlers.len());

    for (handler_id, handler) in handlers {
        match handler {
            Some(handler) => {
                if let Err(e) = handler.0.handle(message) {
                    log::error!("Error handling message published to '{topic}': {e}");
                }
            }
            None => log::error!(
                "Handler '{handler_id}' subscribed to '{topic}' not found in registry"
            ),
        }
    }
}

/// Sends a request `message` to the `endpoint`, registering the `handler_id`
/// to receive the future response for `request_id`.
///
/// The `req` counter advances; the `sent` counter does not. Sending to an
/// unknown endpoint is "no delivery" as for [`send`].
///
/// # Errors
///
/// Returns an error if the `request_id` already has a registered response
/// handler, or if no handler is registered for `handler_id`.
pub fn request<T: AsRef<str>>(
    msgbus: &Rc<RefCell<MessageBus>>,
    endpoint: T,
    request_id: UUID4,
    handler_id: HandlerId,
    message: &dyn Any,
) -> anyhow::Result<()> {
    let endpoint = Ustr::from(endpoint.as_ref());
    let handler = {
        let mut bus = msgbus.borrow_mut();
        bus.register_response_handler(&request_id, handler_id)?;
        bus.counters.req += 1;
        bus.endpoint_handler(&endpoint)
    };

    match handler {
        Some(handler) => {
            if let Err(e) = handler.0.handle(message) {
                log::error!("Error handling request sent to endpoint '{endpoint}': {e}");
            }
        }
        None => log::debug!("No endpoint registered at '{endpoint}' (no delivery)"),
    }
    Ok(())
}

/// Delivers the response `message` to the handler registered for the
/// `correlation_id` (if found), removing the pending entry.
///
/// An unknown correlation ID drops the response silently (logged at DEBUG);
/// the `res` counter advances only when a pending entry was found.
pub fn response(msgbus: &Rc<RefCell<MessageBus>>, correlation_id: &UUID4, message: &dyn Any) {
    let handler = {
        let mut bus = msgbus.borrow_mut();
        match bus.take_response_handler(correlation_id) {
            Some(handler_id) => {
                bus.counters.res += 1;
                bus.handler(&handler_id)
            }
            None => {
                log::debug!(
                    "No response handler found for correlation ID '{correlation_id}' (dropping)"
                );
                return;
            }
        }
    };

    match handler {
        Some(handler) => {
            if let Err(e) = handler.0.handle(message) {
                log::error!("Error handling response for correlation ID '{correlation_id}': {e}");
            }
        }
        None => log::error!("Response handler for correlation ID '{correlation_id}' not found"),
    }
}

/// Delivers the `message` directly to the handler registered for `handler_id`.
///
/// Used by runners to dispatch time events to their registered handlers.
pub fn send_to_handler(
    msgbus: &Rc<RefCell<MessageBus>>,
    handler_id: &HandlerId,
    message: &dyn Any,
) {
    let handler = msgbus.borrow().handler(handler_id);
    match handler {
        Some(handler) => {
            if let Err(e) = handler.0.handle(message) {
                log::error!("Error handling message sent to handler '{handler_id}': {e}");
            }
        }
        None => log::error!("No handler registered for ID '{handler_id}'"),
    }
}
