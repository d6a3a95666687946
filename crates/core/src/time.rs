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

//! The core `AtomicTime` real-time and static clocks.

use std::{
    ops::Deref,
    sync::{
        OnceLock,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use crate::{
    datetime::{NANOSECONDS_IN_MICROSECOND, NANOSECONDS_IN_MILLISECOND, NANOSECONDS_IN_SECOND},
    nanos::UnixNanos,
};

static ATOMIC_CLOCK_REALTIME: OnceLock<AtomicTime> = OnceLock::new();
static ATOMIC_CLOCK_STATIC: OnceLock<AtomicTime> = OnceLock::new();

/// Returns a static reference to the global atomic clock in real-time mode.
pub fn get_atomic_clock_realtime() -> &'static AtomicTime {
    ATOMIC_CLOCK_REALTIME.get_or_init(AtomicTime::default)
}

/// Returns a static reference to the global atomic clock in static mode.
pub fn get_atomic_clock_static() -> &'static AtomicTime {
    ATOMIC_CLOCK_STATIC.get_or_init(|| AtomicTime::new(false, UnixNanos::default()))
}

/// Returns the duration since the UNIX epoch based on system time.
///
/// # Panics
///
/// Panics if the system clock reads earlier than the UNIX epoch.
#[must_use]
pub fn duration_since_unix_epoch() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Error calling `SystemTime::now.duration_since`")
}

/// Represents an atomic timekeeping structure.
///
/// [`AtomicTime`] can act as a real-time clock or static clock based on its mode.
/// It uses an [`AtomicU64`] to atomically update the value using only immutable
/// references.
///
/// In real-time mode returned timestamps are guaranteed to be strictly
/// monotonically increasing and unique across threads: concurrent readers each
/// observe a distinct nanosecond value even when the system clock stalls or
/// steps backwards.
#[derive(Debug)]
pub struct AtomicTime {
    /// Whether the clock is real-time mode.
    pub realtime: bool,
    /// The last recorded time for the clock in UNIX nanoseconds.
    timestamp_ns: AtomicU64,
}

impl Deref for AtomicTime {
    type Target = AtomicU64;

    fn deref(&self) -> &Self::Target {
        &self.timestamp_ns
    }
}

impl Default for AtomicTime {
    /// Creates a new default [`AtomicTime`] instance in real-time mode.
    fn default() -> Self {
        Self::new(true, UnixNanos::default())
    }
}

impl AtomicTime {
    /// Creates a new [`AtomicTime`] instance.
    ///
    /// A clock in real-time mode reads system time; a static clock returns
    /// whatever value was last set.
    #[must_use]
    pub fn new(realtime: bool, time: UnixNanos) -> Self {
        Self {
            realtime,
            timestamp_ns: AtomicU64::new(time.into()),
        }
    }

    /// Returns the current UNIX timestamp in nanoseconds (ns).
    #[must_use]
    pub fn get_time_ns(&self) -> UnixNanos {
        if self.realtime {
            self.time_since_epoch()
        } else {
            UnixNanos::from(self.timestamp_ns.load(Ordering::Relaxed))
        }
    }

    /// Returns the current UNIX timestamp in microseconds (μs).
    #[must_use]
    pub fn get_time_us(&self) -> u64 {
        self.get_time_ns().as_u64() / NANOSECONDS_IN_MICROSECOND
    }

    /// Returns the current UNIX timestamp in milliseconds (ms).
    #[must_use]
    pub fn get_time_ms(&self) -> u64 {
        self.get_time_ns().as_u64() / NANOSECONDS_IN_MILLISECOND
    }

    /// Returns the current UNIX timestamp in seconds.
    #[must_use]
    pub fn get_time(&self) -> f64 {
        self.get_time_ns().as_f64() / (NANOSECONDS_IN_SECOND as f64)
    }

    /// Stores the given `time` for a static clock.
    pub fn set_time(&self, time: UnixNanos) {
        self.store(time.into(), Ordering::Relaxed);
    }

    /// Returns a strictly monotonic, unique timestamp derived from system time.
    ///
    /// If the system clock has not advanced past the last returned value the
    /// stored value is incremented by one nanosecond and returned instead.
    pub fn time_since_epoch(&self) -> UnixNanos {
        let now = duration_since_unix_epoch().as_nanos() as u64;
        let mut last = self.timestamp_ns.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self.timestamp_ns.compare_exchange_weak(
                last,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return UnixNanos::from(next),
                Err(observed) => last = observed,
            }
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
    fn test_static_mode_get_set() {
        let time = AtomicTime::new(false, UnixNanos::from(500));
        assert_eq!(time.get_time_ns(), 500);

        time.set_time(UnixNanos::from(1_000_000_123));
        assert_eq!(time.get_time_ns(), 1_000_000_123);
        assert_eq!(time.get_time_us(), 1_000_000);
        assert_eq!(time.get_time_ms(), 1_000);
    }

    #[rstest]
    fn test_realtime_mode_is_strictly_increasing() {
        let time = AtomicTime::new(true, UnixNanos::default());
        let mut last = time.get_time_ns();
        for _ in 0..1_000 {
            let next = time.get_time_ns();
            assert!(next > last);
            last = next;
        }
    }

    #[rstest]
    fn test_global_clocks_initialize() {
        let realtime = get_atomic_clock_realtime();
        assert!(realtime.get_time_ns() > 0);

        let static_clock = get_atomic_clock_static();
        static_clock.set_time(UnixNanos::from(42));
        assert_eq!(static_clock.get_time_ns(), 42);
    }
}
