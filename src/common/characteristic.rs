// src/common/characteristic.rs

use core::fmt;

/// Largest payload a single characteristic read can return.
pub const CHARACTERISTIC_MAX_LEN: usize = 20;

/// The four fixed data channels exposed by the sword sensor.
///
/// They are always read in declaration order; [`Characteristic::ALL`] is the
/// canonical sweep.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Characteristic {
    /// `ax ay az gx` (0x3A19).
    MotionPrimary,
    /// `gy gz ax2 ay2` (0x3A20).
    MotionSecondary,
    /// `az2 gx2 gy2 gz2` (0x3A21).
    GyroSecondary,
    /// `mx my mz steps` (0x3A22).
    MagnetSteps,
}

impl Characteristic {
    pub const ALL: [Characteristic; 4] = [
        Characteristic::MotionPrimary,
        Characteristic::MotionSecondary,
        Characteristic::GyroSecondary,
        Characteristic::MagnetSteps,
    ];

    /// 16-bit short UUID as advertised by the device.
    #[inline]
    pub const fn short_uuid(&self) -> u16 {
        match self {
            Characteristic::MotionPrimary => 0x3A19,
            Characteristic::MotionSecondary => 0x3A20,
            Characteristic::GyroSecondary => 0x3A21,
            Characteristic::MagnetSteps => 0x3A22,
        }
    }

    /// Full 128-bit UUID on the Bluetooth base UUID.
    pub const fn uuid_str(&self) -> &'static str {
        match self {
            Characteristic::MotionPrimary => "00003a19-0000-1000-8000-00805f9b34fb",
            Characteristic::MotionSecondary => "00003a20-0000-1000-8000-00805f9b34fb",
            Characteristic::GyroSecondary => "00003a21-0000-1000-8000-00805f9b34fb",
            Characteristic::MagnetSteps => "00003a22-0000-1000-8000-00805f9b34fb",
        }
    }

    /// Position in the read sweep (0 for `b1` .. 3 for `b4`).
    #[inline]
    pub const fn slot(&self) -> usize {
        match self {
            Characteristic::MotionPrimary => 0,
            Characteristic::MotionSecondary => 1,
            Characteristic::GyroSecondary => 2,
            Characteristic::MagnetSteps => 3,
        }
    }

    pub fn from_short_uuid(uuid: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.short_uuid() == uuid)
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}", self.short_uuid())
    }
}
