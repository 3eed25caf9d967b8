//! The monotonic clock and deadline helpers.
//!
//! A deadline is a [`Micros`] instant on the same clock as [`now_us`]. Comparing deadlines
//! taken from different clocks is meaningless.

use core::cell::Cell;

use critical_section::Mutex;
use log::{debug, warn};

#[cfg(not(feature = "embassy-time"))]
use crate::{abort::system_abort, config::NO_CLOCK_MESSAGE};
use crate::time::Micros;

pub trait Clock {
    /// Current monotonic time in microseconds. Must never go backwards
    fn now(&self) -> Micros;

    /// The instant `delay` from now
    fn calculate_deadline(&self, delay: Micros) -> Micros {
        self.now() + delay
    }

    /// Only true once the clock is strictly past the deadline
    fn deadline_elapsed(&self, deadline: Micros) -> bool {
        deadline < self.now()
    }
}

impl Clock for fn() -> Micros {
    fn now(&self) -> Micros {
        self()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Micros {
        (**self).now()
    }
}

static CLOCK: Mutex<Cell<Option<&'static (dyn Clock + Sync)>>> = Mutex::new(Cell::new(None));

/// Register the process wide clock used by [`now_us`], [`calculate_deadline`] and
/// [`deadline_elapsed`]
pub fn set_clock(clock: &'static (dyn Clock + Sync)) {
    let previous = critical_section::with(|cs| CLOCK.borrow(cs).replace(Some(clock)));

    if previous.is_some() {
        warn!("Clock source replaced. Existing deadlines may no longer be valid");
    } else {
        debug!("Clock source registered");
    }
}

fn clock() -> &'static (dyn Clock + Sync) {
    match critical_section::with(|cs| CLOCK.borrow(cs).get()) {
        Some(clock) => clock,
        None => default_clock(),
    }
}

#[cfg(feature = "embassy-time")]
fn default_clock() -> &'static (dyn Clock + Sync) {
    &EmbassyClock
}

#[cfg(not(feature = "embassy-time"))]
fn default_clock() -> &'static (dyn Clock + Sync) {
    system_abort(NO_CLOCK_MESSAGE)
}

pub fn now_us() -> Micros {
    clock().now()
}

/// Returns `now_us() + delay`
pub fn calculate_deadline(delay: impl Into<Micros>) -> Micros {
    clock().calculate_deadline(delay.into())
}

/// Returns `deadline < now_us()`. A deadline equal to now has not elapsed yet
pub fn deadline_elapsed(deadline: Micros) -> bool {
    clock().deadline_elapsed(deadline)
}

/// Reads the embassy time driver
#[cfg(feature = "embassy-time")]
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy-time")]
impl Clock for EmbassyClock {
    fn now(&self) -> Micros {
        embassy_time::Instant::now().into()
    }
}

/// Microseconds since the clock was created
#[cfg(feature = "std")]
pub struct StdClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now(&self) -> Micros {
        Micros::new(self.start.elapsed().as_micros() as i64)
    }
}
