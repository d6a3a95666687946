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

//! Real-time and static `Clock` implementations.

use std::{
    collections::{BinaryHeap, HashMap},
    fmt::Debug,
    ops::Deref,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use chrono::{DateTime, Utc};
use futures::Stream;
use indexmap::IndexMap;
use sextant_core::{
    AtomicTime, UnixNanos,
    correctness::{check_positive_u64, check_predicate_true, check_valid_string},
    time::get_atomic_clock_realtime,
};
use tokio::sync::Mutex;
use ustr::Ustr;

use crate::{
    msgbus::HandlerId,
    timer::{LiveTimer, TestTimer, TimeEvent, TimeEventHandler, create_valid_interval},
};

/// Represents a type of clock.
///
/// # Notes
///
/// An active timer is one which has not expired.
pub trait Clock: Debug {
    /// Returns the current date and time as a timezone-aware `DateTime<Utc>`.
    fn utc_now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.timestamp_ns().as_i64())
    }

    /// Returns the current UNIX timestamp in nanoseconds (ns).
    fn timestamp_ns(&self) -> UnixNanos;

    /// Returns the current UNIX timestamp in microseconds (μs).
    fn timestamp_us(&self) -> u64;

    /// Returns the current UNIX timestamp in milliseconds (ms).
    fn timestamp_ms(&self) -> u64;

    /// Returns the current UNIX timestamp in seconds.
    fn timestamp(&self) -> f64;

    /// Returns the names of active timers in the clock.
    fn timer_names(&self) -> Vec<&str>;

    /// Returns the count of active timers in the clock.
    fn timer_count(&self) -> usize;

    /// Registers a default handler ID for the clock.
    ///
    /// If a timer does not have an event handler, then this handler is used.
    fn register_default_handler(&mut self, handler_id: HandlerId);

    /// Returns the handler for the given [`TimeEvent`].
    ///
    /// # Panics
    ///
    /// Panics if no event-specific or default handler has been registered for
    /// the event.
    fn get_handler(&self, event: TimeEvent) -> TimeEventHandler;

    /// Sets a timer to alert once at the specified time.
    ///
    /// An alert time in the past is clamped to the current time for firing at
    /// the next dispatch opportunity.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `name` is not a valid string.
    /// - A timer with `name` already exists.
    /// - No `callback_id` is provided and no default handler is registered.
    fn set_time_alert_ns(
        &mut self,
        name: &str,
        alert_time_ns: UnixNanos,
        callback_id: Option<HandlerId>,
    ) -> anyhow::Result<()>;

    /// Sets a timer to fire time events at every interval between the start
    /// and stop time (`None` for open-ended).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `name` is not a valid string.
    /// - A timer with `name` already exists.
    /// - `interval_ns` is not positive.
    /// - `stop_time_ns` is not after `start_time_ns`.
    /// - No `callback_id` is provided and no default handler is registered.
    fn set_timer_ns(
        &mut self,
        name: &str,
        interval_ns: u64,
        start_time_ns: UnixNanos,
        stop_time_ns: Option<UnixNanos>,
        callback_id: Option<HandlerId>,
    ) -> anyhow::Result<()>;

    /// Returns the time at which the timer `name` will next fire.
    ///
    /// If the timer doesn't exist `None` is returned.
    fn next_time_ns(&self, name: &str) -> Option<UnixNanos>;

    /// Cancels the timer with `name`.
    ///
    /// Canceling an unknown timer is a silent no-op; canceling twice is
    /// equivalent to canceling once.
    fn cancel_timer(&mut self, name: &str);

    /// Cancels all timers.
    fn cancel_timers(&mut self);

    /// Resets the clock by clearing its internal state.
    fn reset(&mut self);
}

/// A static test clock.
///
/// Stores the current timestamp internally which can be advanced explicitly,
/// generating the time events which became due in the advanced interval.
#[derive(Debug)]
pub struct TestClock {
    time: AtomicTime,
    // Insertion order of this map is timer registration order, which breaks
    // ts_event ties when advancing
    timers: IndexMap<Ustr, TestTimer>,
    callbacks: HashMap<Ustr, HandlerId>,
    default_handler: Option<HandlerId>,
}

impl TestClock {
    /// Creates a new [`TestClock`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            time: AtomicTime::new(false, UnixNanos::default()),
            timers: IndexMap::new(),
            callbacks: HashMap::new(),
            default_handler: None,
        }
    }

    /// Returns a reference to the internal timers for the clock.
    #[must_use]
    pub const fn get_timers(&self) -> &IndexMap<Ustr, TestTimer> {
        &self.timers
    }

    /// Sets the internal clock to the given time, without firing any timers.
    pub fn set_time(&self, to_time_ns: UnixNanos) {
        self.time.set_time(to_time_ns);
    }

    /// Advances the internal clock to `to_time_ns`, returning every
    /// [`TimeEvent`] which became due, in ascending `ts_event` order with ties
    /// broken by timer registration order.
    ///
    /// If `set_time` is `true` the internal clock will be updated to
    /// `to_time_ns` afterwards, otherwise the current time is unchanged.
    /// Recurring timers produce every due firing in the interval; expired
    /// timers (including fired alerts) are removed.
    ///
    /// # Panics
    ///
    /// Panics if `to_time_ns` is less than the current internal clock time.
    pub fn advance_time(&mut self, to_time_ns: UnixNanos, set_time: bool) -> Vec<TimeEvent> {
        // Time should be non-decreasing
        assert!(
            to_time_ns >= self.time.get_time_ns(),
            "`to_time_ns` {to_time_ns} was < `self.time.get_time_ns()` {}",
            self.time.get_time_ns(),
        );

        if set_time {
            self.time.set_time(to_time_ns);
        }

        // Advance timers in registration order and collect events,
        // retaining only alive timers
        let mut events: Vec<TimeEvent> = Vec::new();
        self.timers.retain(|_, timer| {
            events.extend(timer.advance(to_time_ns));
            !timer.is_expired()
        });

        // Stable sort preserves registration order for equal `ts_event`
        events.sort_by(|a, b| a.ts_event.cmp(&b.ts_event));
        events
    }

    /// Matches the given `events` with their corresponding handlers.
    ///
    /// # Panics
    ///
    /// Panics if any event has neither a named nor default handler registered.
    #[must_use]
    pub fn match_handlers(&self, events: Vec<TimeEvent>) -> Vec<TimeEventHandler> {
        events
            .into_iter()
            .map(|event| self.get_handler(event))
            .collect()
    }
}

impl Default for TestClock {
    /// Creates a new default [`TestClock`] instance.
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for TestClock {
    type Target = AtomicTime;

    fn deref(&self) -> &Self::Target {
        &self.time
    }
}

impl Clock for TestClock {
    fn timestamp_ns(&self) -> UnixNanos {
        self.time.get_time_ns()
    }

    fn timestamp_us(&self) -> u64 {
        self.time.get_time_us()
    }

    fn timestamp_ms(&self) -> u64 {
        self.time.get_time_ms()
    }

    fn timestamp(&self) -> f64 {
        self.time.get_time()
    }

    fn timer_names(&self) -> Vec<&str> {
        self.timers
            .iter()
            .filter(|(_, timer)| !timer.is_expired())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    fn timer_count(&self) -> usize {
        self.timers
            .values()
            .filter(|timer| !timer.is_expired())
            .count()
    }

    fn register_default_handler(&mut self, handler_id: HandlerId) {
        self.default_handler = Some(handler_id);
    }

    fn get_handler(&self, event: TimeEvent) -> TimeEventHandler {
        let handler_id = self
            .callbacks
            .get(&event.name)
            .copied()
            .or(self.default_handler)
            .unwrap_or_else(|| panic!("Event '{}' should have an associated handler", event.name));

        TimeEventHandler::new(event, handler_id)
    }

    fn set_time_alert_ns(
        &mut self,
        name: &str,
        mut alert_time_ns: UnixNanos,
        callback_id: Option<HandlerId>,
    ) -> anyhow::Result<()> {
        check_valid_string(name, stringify!(name))?;

        let name = Ustr::from(name);
        if self.timers.contains_key(&name) {
            anyhow::bail!("Timer '{name}' already exists");
        }

        check_predicate_true(
            callback_id.is_some() | self.default_handler.is_some(),
            "No callbacks provided",
        )?;

        if let Some(callback_id) = callback_id {
            self.callbacks.insert(name, callback_id);
        }

        let ts_now = self.time.get_time_ns();
        if alert_time_ns < ts_now {
            log::warn!(
                "Timer '{name}' alert time {} was in the past, adjusted to current time for firing at the next advance",
                alert_time_ns.to_rfc3339(),
            );
            alert_time_ns = ts_now;
        }

        let interval_ns = create_valid_interval((alert_time_ns - ts_now).into());
        let timer = TestTimer::new(name, interval_ns, ts_now, Some(alert_time_ns));
        self.timers.insert(name, timer);

        Ok(())
    }

    fn set_timer_ns(
        &mut self,
        name: &str,
        interval_ns: u64,
        start_time_ns: UnixNanos,
        stop_time_ns: Option<UnixNanos>,
        callback_id: Option<HandlerId>,
    ) -> anyhow::Result<()> {
        check_valid_string(name, stringify!(name))?;
        check_positive_u64(interval_ns, stringify!(interval_ns))?;

        let name = Ustr::from(name);
        if self.timers.contains_key(&name) {
            anyhow::bail!("Timer '{name}' already exists");
        }

        check_predicate_true(
            callback_id.is_some() | self.default_handler.is_some(),
            "No callbacks provided",
        )?;

        if let Some(callback_id) = callback_id {
            self.callbacks.insert(name, callback_id);
        }

        let mut start_time_ns = start_time_ns;
        if start_time_ns == 0 {
            // Zero start time indicates no explicit start; use the current time
            start_time_ns = self.time.get_time_ns();
        }

        if let Some(stop_time_ns) = stop_time_ns {
            if stop_time_ns <= start_time_ns {
                anyhow::bail!(
                    "Timer '{name}' stop time {} must be after start time {}",
                    stop_time_ns.to_rfc3339(),
                    start_time_ns.to_rfc3339(),
                );
            }
        }

        let interval_ns = create_valid_interval(interval_ns);
        let timer = TestTimer::new(name, interval_ns, start_time_ns, stop_time_ns);
        self.timers.insert(name, timer);

        Ok(())
    }

    fn next_time_ns(&self, name: &str) -> Option<UnixNanos> {
        self.timers
            .get(&Ustr::from(name))
            .map(TestTimer::next_time_ns)
    }

    fn cancel_timer(&mut self, name: &str) {
        if let Some(mut timer) = self.timers.shift_remove(&Ustr::from(name)) {
            timer.cancel();
        }
    }

    fn cancel_timers(&mut self) {
        for timer in self.timers.values_mut() {
            timer.cancel();
        }
        self.timers.clear();
    }

    fn reset(&mut self) {
        self.time = AtomicTime::new(false, UnixNanos::default());
        self.timers = IndexMap::new();
        self.callbacks = HashMap::new();
    }
}

/// A real-time clock which uses system time.
///
/// Timestamps are guaranteed to be unique and monotonically increasing.
/// Timers run on the async runtime and push their events onto a shared heap
/// drained by the dispatch loop via [`TimeEventStream`].
#[derive(Debug)]
pub struct LiveClock {
    time: &'static AtomicTime,
    timers: HashMap<Ustr, LiveTimer>,
    callbacks: HashMap<Ustr, HandlerId>,
    default_handler: Option<HandlerId>,
    heap: Arc<Mutex<BinaryHeap<TimeEvent>>>,
}

impl LiveClock {
    /// Creates a new [`LiveClock`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            time: get_atomic_clock_realtime(),
            timers: HashMap::new(),
            callbacks: HashMap::new(),
            default_handler: None,
            heap: Arc::new(Mutex::new(BinaryHeap::new())),
        }
    }

    /// Returns a stream of time events from the clock's shared heap.
    #[must_use]
    pub fn get_event_stream(&self) -> TimeEventStream {
        TimeEventStream::new(self.heap.clone())
    }

    /// Returns a reference to the internal timers for the clock.
    #[must_use]
    pub const fn get_timers(&self) -> &HashMap<Ustr, LiveTimer> {
        &self.timers
    }

    // Clean up expired timers, retaining only live ones
    fn clear_expired_timers(&mut self) {
        self.timers.retain(|_, timer| !timer.is_expired());
    }
}

impl Default for LiveClock {
    /// Creates a new default [`LiveClock`] instance.
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for LiveClock {
    fn timestamp_ns(&self) -> UnixNanos {
        self.time.get_time_ns()
    }

    fn timestamp_us(&self) -> u64 {
        self.time.get_time_us()
    }

    fn timestamp_ms(&self) -> u64 {
        self.time.get_time_ms()
    }

    fn timestamp(&self) -> f64 {
        self.time.get_time()
    }

    fn timer_names(&self) -> Vec<&str> {
        self.timers
            .iter()
            .filter(|(_, timer)| !timer.is_expired())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    fn timer_count(&self) -> usize {
        self.timers
            .values()
            .filter(|timer| !timer.is_expired())
            .count()
    }

    fn register_default_handler(&mut self, handler_id: HandlerId) {
        self.default_handler = Some(handler_id);
    }

    fn get_handler(&self, event: TimeEvent) -> TimeEventHandler {
        let handler_id = self
            .callbacks
            .get(&event.name)
            .copied()
            .or(self.default_handler)
            .unwrap_or_else(|| panic!("Event '{}' should have an associated handler", event.name));

        TimeEventHandler::new(event, handler_id)
    }

    fn set_time_alert_ns(
        &mut self,
        name: &str,
        mut alert_time_ns: UnixNanos,
        callback_id: Option<HandlerId>,
    ) -> anyhow::Result<()> {
        check_valid_string(name, stringify!(name))?;

        let name = Ustr::from(name);
        self.clear_expired_timers();
        if self.timers.contains_key(&name) {
            anyhow::bail!("Timer '{name}' already exists");
        }

        check_predicate_true(
            callback_id.is_some() | self.default_handler.is_some(),
            "No callbacks provided",
        )?;

        if let Some(callback_id) = callback_id {
            self.callbacks.insert(name, callback_id);
        }

        let ts_now = self.time.get_time_ns();
        if alert_time_ns < ts_now {
            log::warn!(
                "Timer '{name}' alert time {} was in the past, adjusted to current time for firing at the next dispatch",
                alert_time_ns.to_rfc3339(),
            );
            alert_time_ns = ts_now;
        }

        let interval_ns = create_valid_interval((alert_time_ns - ts_now).into());
        let mut timer = LiveTimer::new(
            name,
            interval_ns,
            ts_now,
            Some(alert_time_ns),
            self.heap.clone(),
        );
        timer.start();

        self.timers.insert(name, timer);
        Ok(())
    }

    fn set_timer_ns(
        &mut self,
        name: &str,
        interval_ns: u64,
        start_time_ns: UnixNanos,
        stop_time_ns: Option<UnixNanos>,
        callback_id: Option<HandlerId>,
    ) -> anyhow::Result<()> {
        check_valid_string(name, stringify!(name))?;
        check_positive_u64(interval_ns, stringify!(interval_ns))?;

        let name = Ustr::from(name);
        self.clear_expired_timers();
        if self.timers.contains_key(&name) {
            anyhow::bail!("Timer '{name}' already exists");
        }

        check_predicate_true(
            callback_id.is_some() | self.default_handler.is_some(),
            "No callbacks provided",
        )?;

        if let Some(callback_id) = callback_id {
            self.callbacks.insert(name, callback_id);
        }

        let mut start_time_ns = start_time_ns;
        if start_time_ns == 0 {
            // Zero start time indicates no explicit start; use the current time
            start_time_ns = self.time.get_time_ns();
        }

        if let Some(stop_time_ns) = stop_time_ns {
            if stop_time_ns <= start_time_ns {
                anyhow::bail!(
                    "Timer '{name}' stop time {} must be after start time {}",
                    stop_time_ns.to_rfc3339(),
                    start_time_ns.to_rfc3339(),
                );
            }
        }

        let interval_ns = create_valid_interval(interval_ns);
        let mut timer = LiveTimer::new(
            name,
            interval_ns,
            start_time_ns,
            stop_time_ns,
            self.heap.clone(),
        );
        timer.start();

        self.timers.insert(name, timer);
        Ok(())
    }

    fn next_time_ns(&self, name: &str) -> Option<UnixNanos> {
        self.timers
            .get(&Ustr::from(name))
            .map(LiveTimer::next_time_ns)
    }

    fn cancel_timer(&mut self, name: &str) {
        if let Some(mut timer) = self.timers.remove(&Ustr::from(name)) {
            timer.cancel();
        }
    }

    fn cancel_timers(&mut self) {
        for timer in self.timers.values_mut() {
            timer.cancel();
        }
        self.timers.clear();
    }

    fn reset(&mut self) {
        self.timers = HashMap::new();
        self.callbacks = HashMap::new();
        self.heap = Arc::new(Mutex::new(BinaryHeap::new()));
    }
}

/// Streams time events from a live clock's shared heap.
#[derive(Debug)]
pub struct TimeEventStream {
    heap: Arc<Mutex<BinaryHeap<TimeEvent>>>,
}

impl TimeEventStream {
    /// Creates a new [`TimeEventStream`] instance.
    #[must_use]
    pub const fn new(heap: Arc<Mutex<BinaryHeap<TimeEvent>>>) -> Self {
        Self { heap }
    }
}

impl Stream for TimeEventStream {
    type Item = TimeEvent;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut heap = match self.heap.try_lock() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Unable to get LiveClock heap lock: {e}");
                cx.waker().wake_by_ref();
                return Poll::Pending;
            }
        };

        if let Some(event) = heap.pop() {
            Poll::Ready(Some(event))
        } else {
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
