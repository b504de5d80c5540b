// src/publish/mod.rs

//! Outbound telemetry: the broker publish path and the flat archival log.

pub mod log_sink;

pub use log_sink::{LogSink, NoLog};
#[cfg(feature = "std")]
pub use log_sink::CsvLogSink;

use crate::common::{SensorReading, TelemetryPacket};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use serde::Serialize;

/// Broker delivery guarantee.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum QoS {
    AtMostOnce = 0,
    AtLeastOnce = 1,
    ExactlyOnce = 2,
}

/// The message-broker client, as far as this crate needs it.
///
/// `publish` hands the message over and returns; it must not wait for the
/// broker's acknowledgement.
pub trait BrokerClient {
    type Error: Debug;

    fn publish(&mut self, topic: &str, payload: &[u8], qos: QoS) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError<E = ()>
where
    E: Debug,
{
    #[error("Failed to serialize telemetry: {0}")]
    Serialize(serde_json::Error),

    #[error("Broker rejected publish: {0:?}")]
    Broker(E),
}

impl<E: Debug> From<serde_json::Error> for PublishError<E> {
    fn from(e: serde_json::Error) -> Self {
        PublishError::Serialize(e)
    }
}

/// Destination for telemetry packets.
pub trait PublishSink {
    type Error: Debug;

    /// Fire-and-forget: returns once the packet is handed off.
    fn publish(&mut self, packet: &TelemetryPacket) -> Result<(), PublishError<Self::Error>>;
}

// --- Payload ---

/// Flat wire form: the reading's fields followed by `classification`.
#[derive(Serialize)]
struct FlatPayload<'a> {
    #[serde(flatten)]
    reading: &'a SensorReading,
    classification: usize,
}

/// Serializes a packet to the flat JSON object the broker topic carries:
/// `{"ax":..,..,"steps":..,"temp":..,"classification":..}`.
pub fn payload_json(packet: &TelemetryPacket) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&FlatPayload {
        reading: &packet.reading,
        classification: packet.classification,
    })
}

// --- Broker Sink ---

/// Publishes every packet to one topic at QoS 1.
#[derive(Debug)]
pub struct BrokerSink<C> {
    client: C,
    topic: String,
    qos: QoS,
}

impl<C: BrokerClient> BrokerSink<C> {
    pub fn new(client: C, topic: impl Into<String>) -> Self {
        BrokerSink {
            client,
            topic: topic.into(),
            qos: QoS::AtLeastOnce,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn into_client(self) -> C {
        self.client
    }
}

impl<C: BrokerClient> PublishSink for BrokerSink<C> {
    type Error = C::Error;

    fn publish(&mut self, packet: &TelemetryPacket) -> Result<(), PublishError<C::Error>> {
        let payload = payload_json(packet)?;
        self.client
            .publish(&self.topic, &payload, self.qos)
            .map_err(PublishError::Broker)
    }
}
