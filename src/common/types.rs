// src/common/types.rs

use super::characteristic::{Characteristic, CHARACTERISTIC_MAX_LEN};
use super::decode::decode;
use super::error::DecodeError;
use arrayvec::ArrayVec;
use serde::Serialize;

pub type CharacteristicBuffer = ArrayVec<u8, CHARACTERISTIC_MAX_LEN>;

// --- Raw Sample ---

/// The four buffers of one characteristic sweep, `b1..b4` in read order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSample {
    buffers: [CharacteristicBuffer; 4],
}

impl RawSample {
    pub fn new(
        b1: CharacteristicBuffer,
        b2: CharacteristicBuffer,
        b3: CharacteristicBuffer,
        b4: CharacteristicBuffer,
    ) -> Self {
        RawSample { buffers: [b1, b2, b3, b4] }
    }

    /// Copies slices into a sample. Returns `None` if any slice is longer
    /// than a characteristic can carry.
    pub fn from_slices(b1: &[u8], b2: &[u8], b3: &[u8], b4: &[u8]) -> Option<Self> {
        let mut sample = RawSample::default();
        for (slot, src) in [b1, b2, b3, b4].into_iter().enumerate() {
            sample.buffers[slot].try_extend_from_slice(src).ok()?;
        }
        Some(sample)
    }

    #[inline]
    pub fn buffer(&self, characteristic: Characteristic) -> &[u8] {
        &self.buffers[characteristic.slot()]
    }

    pub(crate) fn set(&mut self, characteristic: Characteristic, buffer: CharacteristicBuffer) {
        self.buffers[characteristic.slot()] = buffer;
    }

    /// Decodes the sample; consumes it since the raw bytes are not needed afterwards.
    pub fn decode(self) -> Result<SensorReading, DecodeError> {
        let [b1, b2, b3, b4] = &self.buffers;
        decode(b1, b2, b3, b4)
    }
}

// --- Sensor Reading ---

/// One decoded IMU reading.
///
/// Field order is the wire/CSV order. `temp` is derived from `ax2`, it is not
/// carried by any characteristic.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SensorReading {
    pub ax: i32,
    pub ay: i32,
    pub az: i32,
    pub gx: i32,
    pub gy: i32,
    pub gz: i32,
    pub ax2: i32,
    pub ay2: i32,
    pub az2: i32,
    pub gx2: i32,
    pub gy2: i32,
    pub gz2: i32,
    pub mx: i32,
    pub my: i32,
    pub mz: i32,
    pub steps: i32,
    pub temp: i32,
}

impl SensorReading {
    pub const FIELD_COUNT: usize = 17;

    /// All fields in wire order.
    pub fn fields(&self) -> [i32; Self::FIELD_COUNT] {
        [
            self.ax, self.ay, self.az, self.gx, self.gy, self.gz, self.ax2, self.ay2, self.az2,
            self.gx2, self.gy2, self.gz2, self.mx, self.my, self.mz, self.steps, self.temp,
        ]
    }
}

// --- Telemetry Packet ---

/// A class-labeled, timestamped reading ready for publishing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TelemetryPacket {
    /// Seconds since the Unix epoch, millisecond precision.
    pub timestamp: f64,
    pub reading: SensorReading,
    /// Index of the drill class the reading was taken for.
    pub classification: usize,
}

impl TelemetryPacket {
    pub fn new(unix_millis: u64, reading: SensorReading, classification: usize) -> Self {
        TelemetryPacket {
            timestamp: unix_millis as f64 / 1000.0,
            reading,
            classification,
        }
    }
}
