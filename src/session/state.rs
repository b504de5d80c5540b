// src/session/state.rs

use crate::common::{DeviceAddr, LinkErrorKind};

/// Position of the session in its walk over the drill script.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SessionState {
    /// Nothing announced or sampled yet.
    Idle,
    /// About to speak the cue for `class`.
    Announcing { class: usize },
    /// About to take sample `sample` of `class`. `cued` is set once the
    /// countdown for this sample has been spoken.
    Sampling { class: usize, sample: usize, cued: bool },
    /// Speaking one part of the countdown before a strike sample.
    Countdown { class: usize, sample: usize, cue: CountdownCue },
    /// Terminal.
    Complete,
}

impl SessionState {
    /// Drill class the state belongs to, if any.
    pub fn class(&self) -> Option<usize> {
        match *self {
            SessionState::Announcing { class }
            | SessionState::Sampling { class, .. }
            | SessionState::Countdown { class, .. } => Some(class),
            SessionState::Idle | SessionState::Complete => None,
        }
    }
}

/// Parts of the countdown sub-phase, in speaking order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CountdownCue {
    GetReady,
    Number,
    Go,
}

// --- Link Connection ---

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LinkState {
    Disconnected,
    Connected,
    Error,
}

/// The controller's view of its link to the sensor.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SensorLinkConnection {
    pub address: DeviceAddr,
    pub state: LinkState,
}

impl SensorLinkConnection {
    pub fn new(address: DeviceAddr) -> Self {
        SensorLinkConnection {
            address,
            state: LinkState::Disconnected,
        }
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.state == LinkState::Connected
    }
}

// --- Report ---

/// How a session ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Termination {
    #[default]
    NotStarted,
    /// Every class was walked.
    Completed,
    /// A link failure while sampling ended the session.
    LinkLost(LinkErrorKind),
    /// The link could not be opened at session start.
    ConnectFailed(LinkErrorKind),
}

/// Counters collected over one session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct SessionReport {
    /// Packets built from decoded readings.
    pub packets: usize,
    pub decode_failures: usize,
    pub publish_failures: usize,
    pub log_failures: usize,
    pub announce_failures: usize,
    /// Link errors seen by the retry wrapper, connect failures included.
    pub link_failures: usize,
    pub reconnects: usize,
    pub termination: Termination,
}

impl SessionReport {
    #[inline]
    pub fn completed(&self) -> bool {
        self.termination == Termination::Completed
    }
}
