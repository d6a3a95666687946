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

//! Real-time and test timers for use with `Clock` implementations.

use std::{
    cmp::Ordering,
    collections::BinaryHeap,
    fmt::Display,
    num::NonZeroU64,
    sync::{
        Arc,
        atomic::{self, AtomicU64},
    },
};

use sextant_core::{
    UUID4, UnixNanos,
    correctness::{FAILED, check_valid_string},
    datetime::floor_to_nearest_microsecond,
    time::get_atomic_clock_realtime,
};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{Duration, Instant},
};
use ustr::Ustr;

use crate::{msgbus::HandlerId, runtime::get_runtime};

/// Creates a valid nanoseconds interval that is guaranteed to be positive.
///
/// # Panics
///
/// Cannot panic in practice (the interval is clamped to a minimum of one).
#[must_use]
pub fn create_valid_interval(interval_ns: u64) -> NonZeroU64 {
    NonZeroU64::new(interval_ns.max(1)).expect("interval guaranteed to be >= 1")
}

/// Represents a time event occurring at the event timestamp.
///
/// A `TimeEvent` carries the name of its originating timer, a unique event ID,
/// and timestamps indicating when the event was scheduled to occur and when it
/// was initialized.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq)]
pub struct TimeEvent {
    /// The event name, identifying the nature or purpose of the event.
    pub name: Ustr,
    /// The unique identifier for the event.
    pub event_id: UUID4,
    /// UNIX timestamp (nanoseconds) when the event occurred.
    pub ts_event: UnixNanos,
    /// UNIX timestamp (nanoseconds) when the instance was initialized.
    pub ts_init: UnixNanos,
}

impl TimeEvent {
    /// Creates a new [`TimeEvent`] instance.
    #[must_use]
    pub const fn new(name: Ustr, event_id: UUID4, ts_event: UnixNanos, ts_init: UnixNanos) -> Self {
        Self {
            name,
            event_id,
            ts_event,
            ts_init,
        }
    }
}

impl PartialEq for TimeEvent {
    fn eq(&self, other: &Self) -> bool {
        self.event_id == other.event_id
    }
}

// Reverse order for `TimeEvent` comparison to be used in a max heap
impl PartialOrd for TimeEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reverse order for `TimeEvent` comparison to be used in a max heap
impl Ord for TimeEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        other.ts_event.cmp(&self.ts_event)
    }
}

impl Display for TimeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(name={}, event_id={}, ts_event={}, ts_init={})",
            stringify!(TimeEvent),
            self.name,
            self.event_id,
            self.ts_event,
            self.ts_init,
        )
    }
}

/// Associates a [`TimeEvent`] with the handler registered for its callback.
///
/// The handler ID resolves through the message bus registry at dispatch time.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct TimeEventHandler {
    /// The time event.
    pub event: TimeEvent,
    /// The ID of the handler for the event.
    pub handler_id: HandlerId,
}

impl TimeEventHandler {
    /// Creates a new [`TimeEventHandler`] instance.
    #[must_use]
    pub const fn new(event: TimeEvent, handler_id: HandlerId) -> Self {
        Self { event, handler_id }
    }
}

impl PartialEq for TimeEventHandler {
    fn eq(&self, other: &Self) -> bool {
        self.event.ts_event == other.event.ts_event
    }
}

impl Eq for TimeEventHandler {}

impl PartialOrd for TimeEventHandler {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeEventHandler {
    fn cmp(&self, other: &Self) -> Ordering {
        self.event.ts_event.cmp(&other.event.ts_event)
    }
}

/// A test timer for use with a `TestClock`.
///
/// `TestTimer` simulates time progression in a controlled environment,
/// allowing for precise control over event generation in test scenarios.
#[derive(Clone, Copy, Debug)]
pub struct TestTimer {
    /// The name of the timer.
    pub name: Ustr,
    /// The interval between timer events in nanoseconds.
    pub interval_ns: NonZeroU64,
    /// The start time of the timer in UNIX nanoseconds.
    pub start_time_ns: UnixNanos,
    /// The optional stop time of the timer in UNIX nanoseconds.
    pub stop_time_ns: Option<UnixNanos>,
    next_time_ns: UnixNanos,
    is_expired: bool,
}

impl TestTimer {
    /// Creates a new [`TestTimer`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid string.
    #[must_use]
    pub fn new(
        name: Ustr,
        interval_ns: NonZeroU64,
        start_time_ns: UnixNanos,
        stop_time_ns: Option<UnixNanos>,
    ) -> Self {
        check_valid_string(name, stringify!(name)).expect(FAILED);

        Self {
            name,
            interval_ns,
            start_time_ns,
            stop_time_ns,
            next_time_ns: start_time_ns + interval_ns.get(),
            is_expired: false,
        }
    }

    /// Returns the next time in UNIX nanoseconds when the timer will fire.
    #[must_use]
    pub const fn next_time_ns(&self) -> UnixNanos {
        self.next_time_ns
    }

    /// Returns whether the timer is expired.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.is_expired
    }

    /// Advances the timer to the given time, generating an event for every
    /// firing with a `ts_event` less than or equal to `to_time_ns`.
    ///
    /// This allows multiple time intervals to fire within a single step.
    pub fn advance(&mut self, to_time_ns: UnixNanos) -> Vec<TimeEvent> {
        let mut events = Vec::new();
        while !self.is_expired && self.next_time_ns <= to_time_ns {
            events.push(TimeEvent::new(
                self.name,
                UUID4::new(),
                self.next_time_ns,
                self.next_time_ns,
            ));

            // Expire on reaching the stop time
            if let Some(stop_time_ns) = self.stop_time_ns {
                if self.next_time_ns >= stop_time_ns {
                    self.is_expired = true;
                }
            }

            self.next_time_ns += self.interval_ns.get();
        }
        events
    }

    /// Cancels the timer (the timer will not generate further events).
    pub const fn cancel(&mut self) {
        self.is_expired = true;
    }
}

/// A live timer for use with a `LiveClock`.
///
/// `LiveTimer` schedules events at specified intervals in a real-time
/// environment, using Tokio's async runtime for scheduling. Generated events
/// are pushed onto the clock's shared heap for consumption by the dispatch
/// loop.
#[derive(Debug)]
pub struct LiveTimer {
    /// The name of the timer.
    pub name: Ustr,
    /// The interval between timer events in nanoseconds.
    pub interval_ns: NonZeroU64,
    /// The start time of the timer in UNIX nanoseconds.
    pub start_time_ns: UnixNanos,
    /// The optional stop time of the timer in UNIX nanoseconds.
    pub stop_time_ns: Option<UnixNanos>,
    next_time_ns: Arc<AtomicU64>,
    heap: Arc<Mutex<BinaryHeap<TimeEvent>>>,
    task_handle: Option<JoinHandle<()>>,
}

impl LiveTimer {
    /// Creates a new [`LiveTimer`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid string.
    #[must_use]
    pub fn new(
        name: Ustr,
        interval_ns: NonZeroU64,
        start_time_ns: UnixNanos,
        stop_time_ns: Option<UnixNanos>,
        heap: Arc<Mutex<BinaryHeap<TimeEvent>>>,
    ) -> Self {
        check_valid_string(name, stringify!(name)).expect(FAILED);

        log::debug!("Creating timer '{name}'");
        Self {
            name,
            interval_ns,
            start_time_ns,
            stop_time_ns,
            next_time_ns: Arc::new(AtomicU64::new(start_time_ns.as_u64() + interval_ns.get())),
            heap,
            task_handle: None,
        }
    }

    /// Returns the next time in UNIX nanoseconds when the timer will fire.
    #[must_use]
    pub fn next_time_ns(&self) -> UnixNanos {
        UnixNanos::from(self.next_time_ns.load(atomic::Ordering::SeqCst))
    }

    /// Returns whether the timer is expired.
    ///
    /// An expired timer will not trigger any further events.
    /// A timer that has not been started is not expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.task_handle
            .as_ref()
            .is_some_and(tokio::task::JoinHandle::is_finished)
    }

    /// Starts the timer.
    ///
    /// Time events will be pushed onto the shared heap at each interval until
    /// the stop time is reached (if any) or the timer is canceled.
    pub fn start(&mut self) {
        let event_name = self.name;
        let stop_time_ns = self.stop_time_ns;
        let interval_ns = self.interval_ns.get();
        let heap = self.heap.clone();
        let next_time_atomic = self.next_time_ns.clone();

        let clock = get_atomic_clock_realtime();
        let now_ns = clock.get_time_ns();

        // Clamp a next time already in the past to the current time for an
        // immediate first fire
        let mut next_time_ns = self.next_time_ns.load(atomic::Ordering::SeqCst);
        if next_time_ns <= now_ns.as_u64() {
            log::warn!(
                "Timer '{event_name}' next time {next_time_ns} was in the past, adjusted to current time for immediate fire",
            );
            next_time_ns = now_ns.as_u64();
            self.next_time_ns
                .store(next_time_ns, atomic::Ordering::SeqCst);
        }

        // Floor the next time to the nearest microsecond, within timer accuracy
        let mut next_time_ns = UnixNanos::from(floor_to_nearest_microsecond(next_time_ns));

        let rt = get_runtime();
        let handle = rt.spawn(async move {
            let clock = get_atomic_clock_realtime();

            // 1-millisecond delay to account for the overhead of initializing a tokio timer
            let overhead = Duration::from_millis(1);
            let delay_ns = next_time_ns.as_u64().saturating_sub(now_ns.as_u64());
            let delay = Duration::from_nanos(delay_ns).saturating_sub(overhead);
            let start = Instant::now() + delay;

            let mut timer = tokio::time::interval_at(start, Duration::from_nanos(interval_ns));

            loop {
                timer.tick().await;
                let now_ns = clock.get_time_ns();

                let event = TimeEvent::new(event_name, UUID4::new(), next_time_ns, now_ns);
                heap.lock().await.push(event);

                // Prepare next interval
                next_time_ns += interval_ns;
                next_time_atomic.store(next_time_ns.as_u64(), atomic::Ordering::SeqCst);

                if let Some(stop_time_ns) = stop_time_ns {
                    if std::cmp::max(next_time_ns, now_ns) >= stop_time_ns {
                        break; // Timer expired
                    }
                }
            }
        });

        self.task_handle = Some(handle);
    }

    /// Cancels the timer.
    ///
    /// The timer will not generate a final event. Canceling a timer which was
    /// never started, or was already canceled, is a no-op.
    pub fn cancel(&mut self) {
        log::debug!("Canceling timer '{}'", self.name);
        if let Some(ref handle) = self.task_handle {
            handle.abort();
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::num::NonZeroU64;

    use rstest::rstest;
    use sextant_core::UnixNanos;
    use ustr::Ustr;

    use super::*;

    #[rstest]
    fn test_advance_within_first_interval_generates_nothing() {
        let mut timer = TestTimer::new(
            Ustr::from("TEST_TIMER"),
            NonZeroU64::new(5).unwrap(),
            UnixNanos::default(),
            None,
        );
        assert_eq!(timer.advance(UnixNanos::from(1)).len(), 0);
        assert_eq!(timer.advance(UnixNanos::from(4)).len(), 0);
        assert_eq!(timer.next_time_ns(), 5);
        assert!(!timer.is_expired());
    }

    #[rstest]
    fn test_advance_up_to_next_time_ns() {
        let mut timer = TestTimer::new(
            Ustr::from("TEST_TIMER"),
            NonZeroU64::new(1).unwrap(),
            UnixNanos::default(),
            None,
        );
        assert_eq!(timer.advance(UnixNanos::from(1)).len(), 1);
        assert!(!timer.is_expired());
    }

    #[rstest]
    fn test_advance_covers_multiple_intervals() {
        let mut timer = TestTimer::new(
            Ustr::from("TEST_TIMER"),
            NonZeroU64::new(250).unwrap(),
            UnixNanos::default(),
            None,
        );
        let events = timer.advance(UnixNanos::from(1_000));
        assert_eq!(events.len(), 4);
        assert_eq!(*events[0].ts_event, 250);
        assert_eq!(*events[3].ts_event, 1_000);
        assert_eq!(timer.next_time_ns(), 1_250);
    }

    #[rstest]
    fn test_advance_expires_at_stop_time() {
        let mut timer = TestTimer::new(
            Ustr::from("TEST_TIMER"),
            NonZeroU64::new(1).unwrap(),
            UnixNanos::default(),
            Some(UnixNanos::from(2)),
        );
        assert_eq!(timer.advance(UnixNanos::from(5)).len(), 2);
        assert!(timer.is_expired());
    }

    #[rstest]
    fn test_advance_exact_boundary() {
        let mut timer = TestTimer::new(
            Ustr::from("TEST_TIMER"),
            NonZeroU64::new(5).unwrap(),
            UnixNanos::from(0),
            None,
        );
        assert_eq!(timer.advance(UnixNanos::from(5)).len(), 1);
        assert_eq!(timer.advance(UnixNanos::from(10)).len(), 1);
    }

    #[rstest]
    fn test_cancel_stops_event_generation() {
        let mut timer = TestTimer::new(
            Ustr::from("TEST_TIMER"),
            NonZeroU64::new(1).unwrap(),
            UnixNanos::default(),
            None,
        );
        timer.cancel();
        assert!(timer.is_expired());
        assert_eq!(timer.advance(UnixNanos::from(100)).len(), 0);
    }

    #[rstest]
    fn test_time_event_heap_ordering_is_reversed() {
        let earlier = TimeEvent::new(
            Ustr::from("A"),
            UUID4::new(),
            UnixNanos::from(1),
            UnixNanos::from(1),
        );
        let later = TimeEvent::new(
            Ustr::from("B"),
            UUID4::new(),
            UnixNanos::from(2),
            UnixNanos::from(2),
        );

        let mut heap = BinaryHeap::new();
        heap.push(later);
        heap.push(earlier);

        // Max-heap pops the earliest event first due to reversed ordering
        assert_eq!(heap.pop().unwrap().name, "A");
        assert_eq!(heap.pop().unwrap().name, "B");
    }

    #[rstest]
    fn test_create_valid_interval() {
        assert_eq!(create_valid_interval(0).get(), 1);
        assert_eq!(create_valid_interval(100).get(), 100);
    }
}
