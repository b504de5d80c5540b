// src/common/std_timer.rs

use super::hal_traits::SessionTimer;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Host timer: `thread::sleep` for delays, `Instant` for deadlines and the
/// system clock for packet timestamps.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdTimer;

impl StdTimer {
    pub fn new() -> Self {
        StdTimer
    }
}

impl SessionTimer for StdTimer {
    type Instant = Instant;

    fn delay_us(&mut self, us: u32) {
        thread::sleep(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(ms as u64));
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn unix_millis(&self) -> u64 {
        // A clock set before 1970 reports the epoch rather than failing the sample.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
