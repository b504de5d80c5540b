// src/session/retry.rs

use super::{
    LinkState, RetryPolicy, SessionController, SessionError, SessionReport, SessionState,
    Termination,
};
use crate::common::hal_traits::{Announcer, SensorLink, SessionTimer};
use crate::drill::cues;
use crate::publish::{LogSink, PublishSink};

impl<'cfg, IF, A, P, G> SessionController<'cfg, IF, A, P, G>
where
    IF: SensorLink + SessionTimer,
    A: Announcer,
    P: PublishSink,
    G: LogSink,
{
    /// Runs the whole session: intro, connect, every drill class, closing cue.
    ///
    /// Link failures while sampling do not fail the call; they end the walk
    /// (or trigger a reconnect, per [`RetryPolicy`]) and show up in the
    /// returned report. Only a failed initial connect is an `Err`.
    pub fn run(&mut self) -> Result<SessionReport, SessionError<IF::Error>> {
        if self.state != SessionState::Idle {
            return Err(SessionError::AlreadyFinished);
        }

        self.announce(cues::INTRO);
        log::info!("Accepting sensor data...");
        self.interface.delay(self.config.startup_delay);

        if let Err(cause) = self.open_link() {
            self.report.link_failures += 1;
            self.report.termination = Termination::ConnectFailed(cause.kind());
            log::error!("Connecting to {} failed: {}", self.connection.address, cause);
            self.interface.delay(self.config.retry_backoff);
            self.finish();
            return Err(SessionError::ConnectFailed {
                address: self.connection.address,
                cause,
            });
        }

        let mut pending = self.walk();
        while let Err(e) = pending {
            self.report.link_failures += 1;
            self.connection.state = LinkState::Error;
            log::warn!("Link error while sampling, retrying: {}", e);
            self.interface.delay(self.config.retry_backoff);

            let resume = match self.config.retry_policy {
                RetryPolicy::SingleAttempt => false,
                RetryPolicy::ResumeTransient { max_reconnects } => {
                    e.is_transient() && self.report.reconnects < max_reconnects
                }
            };
            if !resume {
                log::error!("Ending session after link failure in {:?}", self.state);
                self.report.termination = Termination::LinkLost(e.kind());
                break;
            }

            self.report.reconnects += 1;
            log::info!("Reconnect {} at {:?}", self.report.reconnects, self.state);
            self.close_link();
            pending = self.open_link().and_then(|()| self.walk());
        }

        if self.state == SessionState::Complete {
            self.report.termination = Termination::Completed;
        }
        self.finish();
        Ok(self.report)
    }

    fn finish(&mut self) {
        let completed = self.report.completed();
        log::info!(
            "Session finished ({:?}): {} packets, {} link failures",
            self.report.termination,
            self.report.packets,
            self.report.link_failures
        );
        self.announce(&cues::closing(completed, self.report.packets));
        self.close_link();
        self.state = SessionState::Complete;
    }
}
