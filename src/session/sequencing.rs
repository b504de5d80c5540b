// src/session/sequencing.rs

use super::{CountdownCue, SessionController, SessionState};
use crate::common::{
    error::LinkError,
    hal_traits::{Announcer, SensorLink, SessionTimer},
    TelemetryPacket,
};
use crate::drill::cues;
use crate::publish::{LogSink, PublishSink};
use log::Level;

impl<'cfg, IF, A, P, G> SessionController<'cfg, IF, A, P, G>
where
    IF: SensorLink + SessionTimer,
    A: Announcer,
    P: PublishSink,
    G: LogSink,
{
    /// Steps until the script is walked or a link error surfaces.
    ///
    /// On error the state is left where the failure happened, so calling
    /// `walk` again resumes at the sample that failed.
    pub(super) fn walk(&mut self) -> Result<(), LinkError<IF::Error>> {
        while self.state != SessionState::Complete {
            self.step()?;
        }
        Ok(())
    }

    /// Performs one transition of the session state machine.
    ///
    /// The state only advances once the work of the current state has
    /// succeeded; a failed sample keeps its state.
    pub(super) fn step(&mut self) -> Result<(), LinkError<IF::Error>> {
        self.state = match self.state {
            SessionState::Idle => self.enter_class(0),

            SessionState::Announcing { class } => match self.script.get(class) {
                None => SessionState::Complete,
                Some(drill_class) => {
                    let cue = drill_class.cue.clone();
                    let sample_count = drill_class.sample_count;
                    log::info!("Class {}: {}", class, drill_class.label);
                    self.announce(&cue);
                    self.interface.delay(self.config.after_speech_delay);
                    if sample_count == 0 {
                        self.enter_class(class + 1)
                    } else {
                        SessionState::Sampling { class, sample: 0, cued: false }
                    }
                }
            },

            SessionState::Sampling { class, sample, cued } => {
                let is_strike = self.script.get(class).map_or(false, |c| c.is_strike);
                if !cued && is_strike && self.config.countdown_due(sample) {
                    SessionState::Countdown { class, sample, cue: CountdownCue::GetReady }
                } else {
                    self.take_sample(class)?;
                    self.after_sample(class, sample)
                }
            }

            SessionState::Countdown { class, sample, cue } => match cue {
                CountdownCue::GetReady => {
                    // Countdown cues only run with speech on.
                    self.announce(cues::GET_READY);
                    self.interface.delay(self.config.after_speech_delay);
                    SessionState::Countdown { class, sample, cue: CountdownCue::Number }
                }
                CountdownCue::Number => {
                    let number = sample / self.config.countdown_interval.max(1) + 1;
                    self.announce(cues::countdown(number).as_str());
                    SessionState::Countdown { class, sample, cue: CountdownCue::Go }
                }
                CountdownCue::Go => {
                    self.announce(cues::OK);
                    SessionState::Sampling { class, sample, cued: true }
                }
            },

            SessionState::Complete => SessionState::Complete,
        };
        Ok(())
    }

    fn enter_class(&self, class: usize) -> SessionState {
        if class < self.script.len() {
            SessionState::Announcing { class }
        } else {
            SessionState::Complete
        }
    }

    fn after_sample(&self, class: usize, sample: usize) -> SessionState {
        let sample_count = self.script.get(class).map_or(0, |c| c.sample_count);
        if sample + 1 < sample_count {
            SessionState::Sampling { class, sample: sample + 1, cued: false }
        } else {
            self.enter_class(class + 1)
        }
    }

    /// Reads, decodes and forwards one sample, then waits out the
    /// inter-sample delay. Decode failures drop the sample.
    fn take_sample(&mut self, class: usize) -> Result<(), LinkError<IF::Error>> {
        let raw = self.read_raw_sample()?;

        match raw.decode() {
            Ok(reading) => {
                let packet = TelemetryPacket::new(self.interface.unix_millis(), reading, class);
                self.emit(&packet);
            }
            Err(e) => {
                self.report.decode_failures += 1;
                log::error!("Dropping sample for class {}: {}", class, e);
            }
        }

        self.interface.delay(self.config.inter_sample_delay);
        Ok(())
    }

    /// Hands a packet to the enabled sinks. Sink failures are counted and
    /// logged, never propagated.
    fn emit(&mut self, packet: &TelemetryPacket) {
        let level = if self.config.verbose { Level::Info } else { Level::Debug };
        log::log!(level, "Packet {}: {:?}", self.report.packets, packet);
        self.report.packets += 1;

        if self.config.publish {
            if let Err(e) = self.publisher.publish(packet) {
                self.report.publish_failures += 1;
                log::warn!("Publish to {} failed: {:?}", self.config.topic, e);
            }
        }

        if self.config.csv_log {
            if let Some(sink) = self.log_sink.as_mut() {
                if let Err(e) = sink.append(packet) {
                    self.report.log_failures += 1;
                    log::warn!("Log append failed: {:?}", e);
                }
            }
        }
    }

    /// Speaks a cue if speech is enabled.
    pub(super) fn announce(&mut self, ssml: &str) {
        if !self.config.speech {
            return;
        }
        let level = if self.config.verbose { Level::Info } else { Level::Debug };
        log::log!(level, "Playing {}", ssml);

        if let Err(e) = self.announcer.announce(ssml) {
            self.report.announce_failures += 1;
            log::warn!("Announcement failed: {:?}", e);
        }
    }
}
