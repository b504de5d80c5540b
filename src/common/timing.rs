// src/common/timing.rs

use core::time::Duration;

// Nominal defaults for a training session. `SessionConfig` starts from these
// and lets a caller override each one.

// === Sampling ===

/// Pause after each published sample before the next characteristic sweep.
pub const INTER_SAMPLE_DELAY: Duration = Duration::from_millis(15);
/// Samples taken per drill class in the stock script.
pub const SAMPLES_PER_CLASS: usize = 4;
/// Strike classes get a spoken countdown every this many samples.
pub const COUNTDOWN_INTERVAL: usize = 4;

// === Speech ===

/// Pause after a cue finishes playing, before anything else happens.
pub const AFTER_SPEECH_DELAY: Duration = Duration::from_millis(100);

// === Link ===

/// Settle time before the first connection attempt of a session.
pub const STARTUP_DELAY: Duration = Duration::from_secs(2);
/// Sleep after a link failure before the retry wrapper decides what to do.
pub const RETRY_BACKOFF: Duration = Duration::from_secs(2);
/// Deadline for a single characteristic read to complete.
pub const CHARACTERISTIC_READ_TIMEOUT: Duration = Duration::from_secs(1);
/// Sleep between polls of a pending characteristic read.
pub const LINK_POLL_INTERVAL: Duration = Duration::from_micros(500);
