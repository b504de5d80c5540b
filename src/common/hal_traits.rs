// src/common/hal_traits.rs

use super::address::DeviceAddr;
use super::characteristic::{Characteristic, CHARACTERISTIC_MAX_LEN};
use super::error::LinkFault;
use arrayvec::ArrayVec;
use core::fmt::Debug;
use core::ops::Sub;
use core::time::Duration;

/// Monotonic instant used for read deadlines.
pub trait LinkInstant: Copy + Ord + Sub<Self, Output = Duration> {
    /// `self + duration`, or `None` if the result does not fit the clock.
    fn checked_add(self, duration: Duration) -> Option<Self>;
}

#[cfg(feature = "std")]
impl LinkInstant for std::time::Instant {
    fn checked_add(self, duration: Duration) -> Option<Self> {
        std::time::Instant::checked_add(&self, duration)
    }
}

/// Abstraction for the clock and delay operations a session needs.
pub trait SessionTimer {
    type Instant: LinkInstant;

    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);

    /// Monotonic now, for deadlines.
    fn now(&self) -> Self::Instant;

    /// Wall-clock milliseconds since the Unix epoch, for packet timestamps.
    fn unix_millis(&self) -> u64;

    /// Sleeps for a `Duration`, split into millisecond and microsecond parts.
    fn delay(&mut self, duration: Duration) {
        let ms = duration.as_millis();
        if ms > 0 {
            self.delay_ms(ms.min(u32::MAX as u128) as u32);
        }
        let us = duration.subsec_micros() % 1000;
        if us > 0 {
            self.delay_us(us);
        }
    }
}

/// Abstraction over the short-range wireless link to the sword sensor.
///
/// One physical link is shared by all four characteristics, so callers must
/// never have more than one read outstanding.
pub trait SensorLink {
    /// Transport error; classified through [`LinkFault`].
    type Error: LinkFault;

    /// Opens the connection to the device. Blocks until connected or failed.
    fn connect(&mut self, address: &DeviceAddr) -> Result<(), Self::Error>;

    /// Attempts to read one characteristic.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` while the read is still in flight;
    /// the caller polls until a result or its own deadline.
    fn read_characteristic(
        &mut self,
        characteristic: Characteristic,
    ) -> nb::Result<ArrayVec<u8, CHARACTERISTIC_MAX_LEN>, Self::Error>;

    /// Tears the connection down. Safe to call on an already closed link.
    fn disconnect(&mut self) -> Result<(), Self::Error>;
}

/// Blocking text-to-speech playback.
pub trait Announcer {
    type Error: Debug;

    /// Speaks an SSML cue and returns once playback has finished.
    fn announce(&mut self, ssml: &str) -> Result<(), Self::Error>;
}
