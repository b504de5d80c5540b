// src/session/config.rs

use crate::common::{timing, DeviceAddr};
use alloc::string::String;
use core::time::Duration;

/// What the retry wrapper does after a link failure while sampling.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum RetryPolicy {
    /// Log, back off, end the session.
    #[default]
    SingleAttempt,
    /// Reconnect after transient failures and resume at the sample that
    /// failed, up to `max_reconnects` times. Fatal failures still end the
    /// session.
    ResumeTransient { max_reconnects: usize },
}

/// Everything a session reads from startup configuration.
///
/// Built once and lent to the [`SessionController`](super::SessionController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub device_address: DeviceAddr,
    /// Broker topic packets are published on.
    pub topic: String,
    /// Play cues through the announcer.
    pub speech: bool,
    /// Spoken countdown before strike samples. Needs `speech`.
    pub countdown: bool,
    /// Log cues and payloads at info level instead of debug.
    pub verbose: bool,
    /// Hand packets to the publish sink.
    pub publish: bool,
    /// Append rows to the log sink, if one is attached.
    pub csv_log: bool,
    pub countdown_interval: usize,
    pub inter_sample_delay: Duration,
    pub after_speech_delay: Duration,
    pub startup_delay: Duration,
    pub retry_backoff: Duration,
    pub read_timeout: Duration,
    pub link_poll_interval: Duration,
    pub retry_policy: RetryPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            device_address: DeviceAddr::DEFAULT_ADDRESS,
            topic: String::from("sdk/test/Python"),
            speech: true,
            countdown: false,
            verbose: false,
            publish: true,
            csv_log: false,
            countdown_interval: timing::COUNTDOWN_INTERVAL,
            inter_sample_delay: timing::INTER_SAMPLE_DELAY,
            after_speech_delay: timing::AFTER_SPEECH_DELAY,
            startup_delay: timing::STARTUP_DELAY,
            retry_backoff: timing::RETRY_BACKOFF,
            read_timeout: timing::CHARACTERISTIC_READ_TIMEOUT,
            link_poll_interval: timing::LINK_POLL_INTERVAL,
            retry_policy: RetryPolicy::SingleAttempt,
        }
    }
}

impl SessionConfig {
    pub fn with_device_address(mut self, address: DeviceAddr) -> Self {
        self.device_address = address;
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn with_speech(mut self, enabled: bool) -> Self {
        self.speech = enabled;
        self
    }

    pub fn with_countdown(mut self, enabled: bool) -> Self {
        self.countdown = enabled;
        self
    }

    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    pub fn with_publish(mut self, enabled: bool) -> Self {
        self.publish = enabled;
        self
    }

    pub fn with_csv_log(mut self, enabled: bool) -> Self {
        self.csv_log = enabled;
        self
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// True when the countdown sub-phase runs before sample `sample` of a
    /// strike class.
    pub fn countdown_due(&self, sample: usize) -> bool {
        self.speech
            && self.countdown
            && self.countdown_interval > 0
            && sample % self.countdown_interval == 0
    }
}
