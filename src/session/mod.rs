// src/session/mod.rs

//! The session controller: walks a [`DrillScript`], speaks cues, samples the
//! sensor and forwards telemetry.
//!
//! The implementation is split across files by concern:
//! - `sequencing`: the state machine's single transitions
//! - `link_helpers`: connection handling and the polled characteristic reads
//! - `retry`: `run()`, the retry wrapper around the whole walk

mod config;
mod link_helpers;
mod retry;
mod sequencing;
mod state;

#[cfg(test)]
pub(crate) mod mock;

pub use config::{RetryPolicy, SessionConfig};
pub use state::{
    CountdownCue, LinkState, SensorLinkConnection, SessionReport, SessionState, Termination,
};

use crate::common::{
    error::LinkError,
    hal_traits::{Announcer, SensorLink, SessionTimer},
    DeviceAddr,
};
use crate::drill::DrillScript;
use crate::publish::{LogSink, NoLog, PublishSink};
use core::fmt::Debug;

/// Errors that end `run()` without a session having taken place.
#[derive(Debug, thiserror::Error)]
pub enum SessionError<E = ()>
where
    E: Debug,
{
    /// The link could not be opened at session start.
    #[error("Could not connect to sensor at {address}: {cause}")]
    ConnectFailed { address: DeviceAddr, cause: LinkError<E> },

    /// `run()` was called on a controller that already ran.
    #[error("Session already finished")]
    AlreadyFinished,
}

/// Drives one training session, synchronously, start to finish.
///
/// `IF` provides both the wireless link and the clock, the way a board
/// support package usually does.
#[derive(Debug)]
pub struct SessionController<'cfg, IF, A, P, G = NoLog>
where
    IF: SensorLink + SessionTimer,
    A: Announcer,
    P: PublishSink,
    G: LogSink,
{
    interface: IF,
    announcer: A,
    publisher: P,
    log_sink: Option<G>,
    config: &'cfg SessionConfig,
    script: DrillScript,
    state: SessionState,
    connection: SensorLinkConnection,
    report: SessionReport,
}

impl<'cfg, IF, A, P> SessionController<'cfg, IF, A, P, NoLog>
where
    IF: SensorLink + SessionTimer,
    A: Announcer,
    P: PublishSink,
{
    pub fn new(
        interface: IF,
        announcer: A,
        publisher: P,
        script: DrillScript,
        config: &'cfg SessionConfig,
    ) -> Self {
        SessionController {
            interface,
            announcer,
            publisher,
            log_sink: None,
            config,
            script,
            state: SessionState::Idle,
            connection: SensorLinkConnection::new(config.device_address),
            report: SessionReport::default(),
        }
    }
}

impl<'cfg, IF, A, P, G> SessionController<'cfg, IF, A, P, G>
where
    IF: SensorLink + SessionTimer,
    A: Announcer,
    P: PublishSink,
    G: LogSink,
{
    /// Attaches a flat log. Rows are only written while `csv_log` is set in
    /// the configuration.
    pub fn with_log_sink<S: LogSink>(self, sink: S) -> SessionController<'cfg, IF, A, P, S> {
        SessionController {
            interface: self.interface,
            announcer: self.announcer,
            publisher: self.publisher,
            log_sink: Some(sink),
            config: self.config,
            script: self.script,
            state: self.state,
            connection: self.connection,
            report: self.report,
        }
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    pub fn report(&self) -> &SessionReport {
        &self.report
    }

    #[inline]
    pub fn connection(&self) -> &SensorLinkConnection {
        &self.connection
    }

    #[inline]
    pub fn script(&self) -> &DrillScript {
        &self.script
    }

    pub fn interface(&self) -> &IF {
        &self.interface
    }

    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub fn log_sink(&self) -> Option<&G> {
        self.log_sink.as_ref()
    }

    /// Gives back the collaborators once the session is over.
    pub fn into_parts(self) -> (IF, A, P, Option<G>) {
        (self.interface, self.announcer, self.publisher, self.log_sink)
    }
}
