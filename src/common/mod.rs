// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod characteristic;
pub mod decode;
pub mod error;
pub mod hal_traits;
pub mod timing;
pub mod types;

#[cfg(feature = "std")]
pub mod std_timer;

// --- Re-export key types/traits/functions for easier access ---

// From address.rs
pub use address::{AddressError, DeviceAddr};

// From characteristic.rs
pub use characteristic::{Characteristic, CHARACTERISTIC_MAX_LEN};

// From decode.rs
pub use decode::{decode, derive_temp, REQUIRED_BUFFER_LEN};

// From error.rs
pub use error::{DecodeError, LinkError, LinkErrorKind, LinkFault};

// From hal_traits.rs
pub use hal_traits::{Announcer, LinkInstant, SensorLink, SessionTimer};

// From types.rs
pub use types::{CharacteristicBuffer, RawSample, SensorReading, TelemetryPacket};

// timing.rs constants are reached as common::timing::*

#[cfg(feature = "std")]
pub use std_timer::StdTimer;
