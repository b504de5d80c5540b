// src/lib.rs

#![no_std] // Core pipeline runs without std; host helpers sit behind the `std` feature

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod common;
pub mod drill;
pub mod publish;
pub mod session;

// Re-export key types for convenience
pub use common::{decode, DeviceAddr, LinkError, SensorReading, TelemetryPacket};
pub use drill::{DrillClass, DrillScript};
pub use session::{RetryPolicy, SessionConfig, SessionController, SessionError, SessionReport};
