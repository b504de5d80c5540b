// src/common/error.rs

use super::characteristic::Characteristic;
use core::fmt::Debug;

/// Whether a link failure is worth another connection attempt.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LinkErrorKind {
    /// Link drop or timeout; the device is probably still there.
    Transient,
    /// Device not found, authentication failure and similar.
    Fatal,
}

/// Classification hook for transport-level errors.
///
/// Implemented by the error type of a [`SensorLink`](super::hal_traits::SensorLink)
/// so that `LinkError::Io` can be sorted into transient and fatal failures.
pub trait LinkFault: Debug {
    fn kind(&self) -> LinkErrorKind;
}

impl LinkFault for () {
    fn kind(&self) -> LinkErrorKind {
        LinkErrorKind::Transient
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LinkError<E = ()>
where
    E: Debug,
{
    /// Underlying error from the wireless transport, classified by its
    /// [`LinkFault`] impl.
    #[error("Link I/O error: {0:?}")]
    Io(E),

    /// A characteristic read did not complete before its deadline.
    #[error("Characteristic read timed out")]
    Timeout,

    /// A read was attempted without an established connection.
    #[error("Link is not connected")]
    NotConnected,
}

impl<E: LinkFault> LinkError<E> {
    pub fn kind(&self) -> LinkErrorKind {
        match self {
            LinkError::Io(e) => e.kind(),
            LinkError::Timeout => LinkErrorKind::Transient,
            LinkError::NotConnected => LinkErrorKind::Fatal,
        }
    }

    #[inline]
    pub fn is_transient(&self) -> bool {
        self.kind() == LinkErrorKind::Transient
    }
}

/// Failure to turn a raw sample into a reading.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// A characteristic buffer ended before the last field it carries.
    #[error("Buffer for {characteristic} too short: needed {needed}, got {got}")]
    BufferTooShort {
        characteristic: Characteristic,
        needed: usize,
        got: usize,
    },
}
