// src/session/link_helpers.rs

use super::{LinkState, SessionController};
use crate::common::{
    error::LinkError,
    hal_traits::{Announcer, LinkInstant, SensorLink, SessionTimer},
    Characteristic, RawSample,
};
use crate::publish::{LogSink, PublishSink};
use nb::Result as NbResult;

impl<'cfg, IF, A, P, G> SessionController<'cfg, IF, A, P, G>
where
    IF: SensorLink + SessionTimer,
    A: Announcer,
    P: PublishSink,
    G: LogSink,
{
    /// Polls a non-blocking link operation (`f`) until it stops returning
    /// `WouldBlock`, or fails with `LinkError::Timeout` once the read timeout
    /// has passed. A timeout too large for the clock means no deadline.
    pub(super) fn execute_blocking_read_with_timeout<FN, T>(
        &mut self,
        mut f: FN,
    ) -> Result<T, LinkError<IF::Error>>
    where
        FN: FnMut(&mut IF) -> NbResult<T, IF::Error>,
    {
        let deadline = self.interface.now().checked_add(self.config.read_timeout);
        let poll_us = self.config.link_poll_interval.as_micros().min(u32::MAX as u128) as u32;

        loop {
            match f(&mut self.interface) {
                Ok(result) => return Ok(result),
                Err(nb::Error::WouldBlock) => {
                    if deadline.map_or(false, |d| self.interface.now() >= d) {
                        return Err(LinkError::Timeout);
                    }
                    self.interface.delay_us(poll_us);
                }
                Err(nb::Error::Other(e)) => return Err(LinkError::Io(e)),
            }
        }
    }

    /// Reads all four characteristics, in `b1..b4` order, into one sample.
    pub(super) fn read_raw_sample(&mut self) -> Result<RawSample, LinkError<IF::Error>> {
        if !self.connection.is_connected() {
            return Err(LinkError::NotConnected);
        }

        let mut sample = RawSample::default();
        for characteristic in Characteristic::ALL {
            let buffer = self
                .execute_blocking_read_with_timeout(|iface| iface.read_characteristic(characteristic))?;
            log::trace!("Read {} bytes from {}", buffer.len(), characteristic);
            sample.set(characteristic, buffer);
        }
        Ok(sample)
    }

    /// Connects to the configured device and records the outcome on the
    /// connection.
    pub(super) fn open_link(&mut self) -> Result<(), LinkError<IF::Error>> {
        let address = self.connection.address;
        log::info!("Connecting to {}...", address);

        match self.interface.connect(&address) {
            Ok(()) => {
                self.connection.state = LinkState::Connected;
                log::info!("Connected to {}", address);
                Ok(())
            }
            Err(e) => {
                self.connection.state = LinkState::Error;
                Err(LinkError::Io(e))
            }
        }
    }

    /// Disconnects. Failures are logged and otherwise ignored.
    pub(super) fn close_link(&mut self) {
        if let Err(e) = self.interface.disconnect() {
            log::warn!("Disconnect from {} failed: {:?}", self.connection.address, e);
        }
        self.connection.state = LinkState::Disconnected;
    }
}
