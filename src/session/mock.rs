// src/session/mock.rs

//! Test doubles shared by the session tests: a sensor link with a fake clock,
//! plus recording announcer, publisher and log sink that all write into one
//! event journal so cross-component ordering can be asserted.

use super::{SessionConfig, SessionController};
use crate::common::{
    error::{LinkErrorKind, LinkFault},
    hal_traits::{Announcer, LinkInstant, SensorLink, SessionTimer},
    Characteristic, CharacteristicBuffer, DeviceAddr, TelemetryPacket,
};
use crate::drill::DrillScript;
use crate::publish::{log_sink::log_row, LogSink, PublishError, PublishSink};
use core::cell::RefCell;
use core::time::Duration;
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// --- Mock Instant ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct MockInstant(u64);

impl LinkInstant for MockInstant {
    fn checked_add(self, duration: Duration) -> Option<Self> {
        let us = u64::try_from(duration.as_micros()).ok()?;
        self.0.checked_add(us).map(MockInstant)
    }
}

impl core::ops::Sub<MockInstant> for MockInstant {
    type Output = Duration;
    fn sub(self, rhs: MockInstant) -> Duration {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

// --- Mock Fault ---
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum MockFault {
    /// Connection dropped mid-read.
    Dropped,
    /// Device refused or not found.
    Refused,
}

impl LinkFault for MockFault {
    fn kind(&self) -> LinkErrorKind {
        match self {
            MockFault::Dropped => LinkErrorKind::Transient,
            MockFault::Refused => LinkErrorKind::Fatal,
        }
    }
}

// --- Journal ---
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Connect,
    Disconnect,
    /// A characteristic sweep started; carries the sweep number.
    Sweep(usize),
    Cue(String),
    /// A packet was published; carries its classification.
    Publish(usize),
}

pub(crate) type Journal = Rc<RefCell<Vec<Event>>>;

// --- Mock Interface ---
pub(crate) struct MockInterface {
    current_time_us: u64,
    sweeps: usize,
    connected: bool,
    /// Every read returns `WouldBlock`.
    pub stall_reads: bool,
    /// Fail the first read of this sweep once, dropping the connection.
    pub fail_sweep: Option<(usize, MockFault)>,
    /// Sweep whose `b1` comes back truncated.
    pub short_buffer_sweep: Option<usize>,
    connect_results: heapless::Deque<Result<(), MockFault>, 8>,
    journal: Journal,
}

impl MockInterface {
    pub(crate) fn new() -> Self {
        MockInterface {
            current_time_us: 0,
            sweeps: 0,
            connected: false,
            stall_reads: false,
            fail_sweep: None,
            short_buffer_sweep: None,
            connect_results: heapless::Deque::new(),
            journal: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Queues the outcome of the next `connect` call. Unqueued calls succeed.
    pub(crate) fn queue_connect(&mut self, result: Result<(), MockFault>) {
        self.connect_results.push_back(result).unwrap();
    }

    pub(crate) fn journal(&self) -> Journal {
        self.journal.clone()
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.journal.borrow().clone()
    }

    pub(crate) fn sweeps(&self) -> usize {
        self.sweeps
    }

    pub(crate) fn elapsed(&self) -> Duration {
        Duration::from_micros(self.current_time_us)
    }

    fn advance_time(&mut self, us: u64) {
        self.current_time_us = self.current_time_us.saturating_add(us);
    }

    /// `b1` carries the sweep number as `ax`; everything else is zero.
    fn buffer_for(&self, characteristic: Characteristic) -> CharacteristicBuffer {
        let mut buffer = CharacteristicBuffer::new();
        let mut bytes = [0u8; 16];
        let mut len = bytes.len();
        if characteristic == Characteristic::MotionPrimary {
            bytes[..4].copy_from_slice(&(self.sweeps as i32).to_le_bytes());
            if self.short_buffer_sweep == Some(self.sweeps) {
                len = 12;
            }
        }
        buffer.try_extend_from_slice(&bytes[..len]).unwrap();
        buffer
    }
}

impl SessionTimer for MockInterface {
    type Instant = MockInstant;
    fn delay_us(&mut self, us: u32) {
        self.advance_time(us as u64);
    }
    fn delay_ms(&mut self, ms: u32) {
        self.advance_time((ms as u64) * 1000);
    }
    fn now(&self) -> Self::Instant {
        MockInstant(self.current_time_us)
    }
    fn unix_millis(&self) -> u64 {
        1_700_000_000_000 + self.current_time_us / 1000
    }
}

impl SensorLink for MockInterface {
    type Error = MockFault;

    fn connect(&mut self, _address: &DeviceAddr) -> Result<(), Self::Error> {
        self.journal.borrow_mut().push(Event::Connect);
        let result = self.connect_results.pop_front().unwrap_or(Ok(()));
        self.connected = result.is_ok();
        result
    }

    fn read_characteristic(
        &mut self,
        characteristic: Characteristic,
    ) -> nb::Result<CharacteristicBuffer, Self::Error> {
        if !self.connected {
            return Err(nb::Error::Other(MockFault::Dropped));
        }
        if self.stall_reads {
            return Err(nb::Error::WouldBlock);
        }
        if characteristic == Characteristic::MotionPrimary {
            self.sweeps += 1;
            self.journal.borrow_mut().push(Event::Sweep(self.sweeps));
            if let Some((sweep, fault)) = self.fail_sweep {
                if sweep == self.sweeps {
                    self.fail_sweep = None;
                    self.connected = false;
                    return Err(nb::Error::Other(fault));
                }
            }
        }
        Ok(self.buffer_for(characteristic))
    }

    fn disconnect(&mut self) -> Result<(), Self::Error> {
        self.journal.borrow_mut().push(Event::Disconnect);
        self.connected = false;
        Ok(())
    }
}

// --- Recording Collaborators ---

pub(crate) struct RecordingAnnouncer {
    journal: Journal,
    pub fail: bool,
}

impl RecordingAnnouncer {
    pub(crate) fn new(journal: Journal) -> Self {
        RecordingAnnouncer { journal, fail: false }
    }

    pub(crate) fn cues(&self) -> Vec<String> {
        self.journal
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Cue(cue) => Some(cue.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Announcer for RecordingAnnouncer {
    type Error = ();

    fn announce(&mut self, ssml: &str) -> Result<(), Self::Error> {
        if self.fail {
            return Err(());
        }
        self.journal.borrow_mut().push(Event::Cue(ssml.to_string()));
        Ok(())
    }
}

pub(crate) struct RecordingPublisher {
    journal: Journal,
    packets: Vec<TelemetryPacket>,
    pub reject: bool,
}

impl RecordingPublisher {
    pub(crate) fn new(journal: Journal) -> Self {
        RecordingPublisher { journal, packets: Vec::new(), reject: false }
    }

    pub(crate) fn packets(&self) -> &[TelemetryPacket] {
        &self.packets
    }
}

impl PublishSink for RecordingPublisher {
    type Error = ();

    fn publish(&mut self, packet: &TelemetryPacket) -> Result<(), PublishError<Self::Error>> {
        if self.reject {
            return Err(PublishError::Broker(()));
        }
        self.journal.borrow_mut().push(Event::Publish(packet.classification));
        self.packets.push(*packet);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingLog {
    pub rows: Vec<String>,
}

impl LogSink for RecordingLog {
    type Error = ();

    fn append(&mut self, packet: &TelemetryPacket) -> Result<(), Self::Error> {
        self.rows.push(log_row(packet));
        Ok(())
    }
}

pub(crate) type MockController<'cfg> =
    SessionController<'cfg, MockInterface, RecordingAnnouncer, RecordingPublisher>;

/// Controller wired to recording collaborators that share the interface's
/// journal.
pub(crate) fn quiet_controller(
    iface: MockInterface,
    config: &SessionConfig,
    script: DrillScript,
) -> MockController<'_> {
    let journal = iface.journal();
    SessionController::new(
        iface,
        RecordingAnnouncer::new(journal.clone()),
        RecordingPublisher::new(journal),
        script,
        config,
    )
}
