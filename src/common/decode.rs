// src/common/decode.rs

//! Fixed-layout decoder for the sword sensor's characteristic buffers.
//!
//! Every field is a little-endian `i32` at a fixed offset within one of the
//! four buffers:
//!
//! | Buffer | Offset 0 | Offset 4 | Offset 8 | Offset 12 |
//! |--------|----------|----------|----------|-----------|
//! | `b1` (3A19) | `ax`  | `ay`  | `az`  | `gx`    |
//! | `b2` (3A20) | `gy`  | `gz`  | `ax2` | `ay2`   |
//! | `b3` (3A21) | `az2` | `gx2` | `gy2` | `gz2`   |
//! | `b4` (3A22) | `mx`  | `my`  | `mz`  | `steps` |
//!
//! `temp` is derived, not read: `floor(sqrt(|ax2|))`.

use super::characteristic::Characteristic;
use super::error::DecodeError;
use super::types::SensorReading;

/// Bytes each buffer must hold: the last field sits at offset 12.
pub const REQUIRED_BUFFER_LEN: usize = 16;

// --- Internal Helpers ---

/// Reads the `i32` at `offset`. Callers run `check_len` first, so a short
/// buffer fails before any field is produced.
#[inline]
fn read_i32_le(buffer: &[u8], offset: usize) -> i32 {
    let bytes = [buffer[offset], buffer[offset + 1], buffer[offset + 2], buffer[offset + 3]];
    i32::from_le_bytes(bytes)
}

#[inline]
fn check_len(buffer: &[u8], characteristic: Characteristic) -> Result<(), DecodeError> {
    if buffer.len() < REQUIRED_BUFFER_LEN {
        return Err(DecodeError::BufferTooShort {
            characteristic,
            needed: REQUIRED_BUFFER_LEN,
            got: buffer.len(),
        });
    }
    Ok(())
}

/// Floor of the square root, exact for the whole `u32` range.
fn isqrt(n: u32) -> u32 {
    if n < 2 {
        return n;
    }
    // Newton iteration from an over-estimate converges downward.
    let n = n as u64;
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x as u32
}

/// Derived `temp` field.
#[inline]
pub fn derive_temp(ax2: i32) -> i32 {
    // isqrt(2^31) = 46340, always fits.
    isqrt(ax2.unsigned_abs()) as i32
}

// --- Public Decoding Function ---

/// Decodes one reading from the four characteristic buffers.
///
/// Buffers may be longer than [`REQUIRED_BUFFER_LEN`]; trailing bytes are
/// ignored. Pure and deterministic.
pub fn decode(b1: &[u8], b2: &[u8], b3: &[u8], b4: &[u8]) -> Result<SensorReading, DecodeError> {
    check_len(b1, Characteristic::MotionPrimary)?;
    check_len(b2, Characteristic::MotionSecondary)?;
    check_len(b3, Characteristic::GyroSecondary)?;
    check_len(b4, Characteristic::MagnetSteps)?;

    let ax2 = read_i32_le(b2, 8);

    Ok(SensorReading {
        ax: read_i32_le(b1, 0),
        ay: read_i32_le(b1, 4),
        az: read_i32_le(b1, 8),
        gx: read_i32_le(b1, 12),

        gy: read_i32_le(b2, 0),
        gz: read_i32_le(b2, 4),
        ax2,
        ay2: read_i32_le(b2, 12),

        az2: read_i32_le(b3, 0),
        gx2: read_i32_le(b3, 4),
        gy2: read_i32_le(b3, 8),
        gz2: read_i32_le(b3, 12),

        mx: read_i32_le(b4, 0),
        my: read_i32_le(b4, 4),
        mz: read_i32_le(b4, 8),
        steps: read_i32_le(b4, 12),

        temp: derive_temp(ax2),
    })
}
