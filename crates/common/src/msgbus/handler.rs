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

//! Message handler functionality for the message bus system.
//!
//! Handlers are referred to by opaque [`HandlerId`] tokens throughout the bus
//! routing tables. The [`HandlerRegistry`] owned by the message bus maps each
//! token to the underlying callable, which keeps foreign callables out of the
//! routing tables and gives the registry full ownership of handler lifetimes.

use std::{
    any::Any,
    fmt::{Debug, Display, Formatter},
    rc::Rc,
};

use indexmap::IndexMap;
use sextant_core::UUID4;
use ustr::Ustr;

/// An opaque token referring to a registered message handler.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandlerId(Ustr);

impl HandlerId {
    /// Creates a new [`HandlerId`] instance from the given string.
    #[must_use]
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self(Ustr::from(value.as_ref()))
    }

    /// Creates a new unique [`HandlerId`] instance.
    #[must_use]
    pub fn unique() -> Self {
        Self(Ustr::from(&UUID4::new().to_string()))
    }

    /// Returns the inner identifier value.
    #[must_use]
    pub const fn inner(&self) -> Ustr {
        self.0
    }

    /// Returns the inner identifier value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Debug for HandlerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Display for HandlerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HandlerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A handler which can receive messages routed over the message bus.
pub trait MessageHandler: Any {
    /// Returns the unique identifier for this handler.
    fn id(&self) -> HandlerId;

    /// Handles a message of any type.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be handled; the dispatching
    /// operation logs the error and continues with any remaining deliveries.
    fn handle(&self, message: &dyn Any) -> anyhow::Result<()>;

    /// Returns this handler as a trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A message handler which downcasts received messages to a concrete type.
pub struct TypedMessageHandler<T: 'static> {
    id: HandlerId,
    callback: Box<dyn Fn(&T) -> anyhow::Result<()>>,
}

impl<T: 'static> TypedMessageHandler<T> {
    /// Creates a new handler with an optional custom ID.
    pub fn new<S, F>(id: Option<S>, callback: F) -> Self
    where
        S: AsRef<str>,
        F: Fn(&T) -> anyhow::Result<()> + 'static,
    {
        let id = id.map_or_else(HandlerId::unique, HandlerId::new);
        Self {
            id,
            callback: Box::new(callback),
        }
    }

    /// Creates a new handler with an auto-generated ID from an infallible callback.
    pub fn from<F>(callback: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        Self::new(None::<&str>, move |message: &T| {
            callback(message);
            Ok(())
        })
    }

    /// Creates a new handler with the given ID from an infallible callback.
    pub fn with_id<S, F>(id: S, callback: F) -> Self
    where
        S: AsRef<str>,
        F: Fn(&T) + 'static,
    {
        Self::new(Some(id), move |message: &T| {
            callback(message);
            Ok(())
        })
    }
}

impl<T: 'static> MessageHandler for TypedMessageHandler<T> {
    fn id(&self) -> HandlerId {
        self.id
    }

    fn handle(&self, message: &dyn Any) -> anyhow::Result<()> {
        match message.downcast_ref::<T>() {
            Some(message) => (self.callback)(message),
            None => anyhow::bail!(
                "Invalid message type {:?} for handler '{}'",
                message.type_id(),
                self.id,
            ),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: 'static> Debug for TypedMessageHandler<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(id={})",
            stringify!(TypedMessageHandler),
            self.id.as_str(),
        )
    }
}

/// A shareable reference-counted message handler.
#[derive(Clone)]
#[repr(transparent)]
pub struct ShareableMessageHandler(pub Rc<dyn MessageHandler>);

impl ShareableMessageHandler {
    /// Returns the unique identifier for the handler.
    #[must_use]
    pub fn id(&self) -> HandlerId {
        self.0.id()
    }
}

impl Debug for ShareableMessageHandler {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(id={})",
            stringify!(ShareableMessageHandler),
            self.0.id().as_str(),
        )
    }
}

impl From<Rc<dyn MessageHandler>> for ShareableMessageHandler {
    fn from(value: Rc<dyn MessageHandler>) -> Self {
        Self(value)
    }
}

impl<T: 'static> From<TypedMessageHandler<T>> for ShareableMessageHandler {
    fn from(value: TypedMessageHandler<T>) -> Self {
        Self(Rc::new(value))
    }
}

/// The registry owning the message handler callables for a message bus.
///
/// Routing tables refer to handlers only by [`HandlerId`]; the registry must
/// outlive every table entry referring to one of its handlers.
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    handlers: IndexMap<HandlerId, ShareableMessageHandler>,
}

impl HandlerRegistry {
    /// Creates a new empty [`HandlerRegistry`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: IndexMap::new(),
        }
    }

    /// Inserts the given `handler`, returning its [`HandlerId`].
    ///
    /// Inserting a handler with an ID which is already registered replaces the
    /// existing callable.
    pub fn insert(&mut self, handler: ShareableMessageHandler) -> HandlerId {
        let handler_id = handler.id();
        self.handlers.insert(handler_id, handler);
        handler_id
    }

    /// Removes the handler for the given `handler_id`.
    pub fn remove(&mut self, handler_id: &HandlerId) -> Option<ShareableMessageHandler> {
        self.handlers.shift_remove(handler_id)
    }

    /// Returns the handler for the given `handler_id`.
    #[must_use]
    pub fn get(&self, handler_id: &HandlerId) -> Option<&ShareableMessageHandler> {
        self.handlers.get(handler_id)
    }

    /// Returns whether a handler is registered for the given `handler_id`.
    #[must_use]
    pub fn contains(&self, handler_id: &HandlerId) -> bool {
        self.handlers.contains_key(handler_id)
    }

    /// Returns the count of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns the registered handler IDs.
    #[must_use]
    pub fn handler_ids(&self) -> Vec<HandlerId> {
        self.handlers.keys().copied().collect()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_handler_id_new_and_unique() {
        let handler_id = HandlerId::new("Portfolio.update_account");
        assert_eq!(handler_id.as_str(), "Portfolio.update_account");
        assert_ne!(HandlerId::unique(), HandlerId::unique());
    }

    #[rstest]
    fn test_typed_handler_downcasts() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let received_clone = received.clone();
        let handler = TypedMessageHandler::with_id("recorder", move |message: &u64| {
            received_clone.borrow_mut().push(*message);
        });

        handler.handle(&42u64 as &dyn Any).unwrap();
        assert_eq!(*received.borrow(), vec![42]);
    }

    #[rstest]
    fn test_typed_handler_wrong_type_errors() {
        let handler = TypedMessageHandler::with_id("recorder", |_: &u64| {});
        let result = handler.handle(&"wrong" as &dyn Any);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_fallible_handler_propagates_error() {
        let handler: TypedMessageHandler<u64> =
            TypedMessageHandler::new(Some("failing"), |_: &u64| anyhow::bail!("boom"));
        let result = handler.handle(&1u64 as &dyn Any);
        assert_eq!(result.unwrap_err().to_string(), "boom");
    }

    #[rstest]
    fn test_registry_insert_get_remove() {
        let mut registry = HandlerRegistry::new();
        let handler = ShareableMessageHandler::from(TypedMessageHandler::with_id(
            "recorder",
            |_: &u64| {},
        ));

        let handler_id = registry.insert(handler);
        assert!(registry.contains(&handler_id));
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&handler_id).is_some());

        registry.remove(&handler_id);
        assert!(registry.is_empty());
        assert!(registry.get(&handler_id).is_none());
    }
}
