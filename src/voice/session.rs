//! RecognitionSession - keeps one streaming recognizer alive and turns its
//! results into dispatched commands.
//!
//! All recognizer signals and restart timers are handled on the caller's
//! thread. Signals are fed in through [`RecognitionSession::handle_event`] or
//! queued on the sender from [`RecognitionSession::event_sender`] and drained
//! by [`RecognitionSession::poll`], which also fires due restarts.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::Hypothesis;

use super::actions::TranscriptMatcher;
use super::dedup::DedupFilter;
use super::dispatcher::CommandDispatcher;
use super::error::VoiceError;
use super::history::CommandHistory;
use super::ports::{Actor, Recognizer, StatusSink};
use super::types::{ABORTED_REASON, RecognizerEvent, SessionConfig, SessionState};

const STATUS_NOT_SUPPORTED: &str = "Not Supported";
const STATUS_STARTING: &str = "Starting";
const STATUS_LISTENING: &str = "Listening";
const STATUS_RESTARTING: &str = "Restarting";
const STATUS_STOPPED: &str = "Stopped";
const STATUS_FAILED: &str = "Stopped (Error)";
const STATUS_START_FAILED: &str = "Failed to Start";

#[derive(Debug, Clone, Copy)]
struct PendingRestart {
    due: Instant,
}

/// Recognition session state machine
pub struct RecognitionSession<R: Recognizer> {
    recognizer: R,
    config: SessionConfig,
    state: SessionState,
    matcher: TranscriptMatcher,
    dedup: DedupFilter,
    dispatcher: CommandDispatcher,
    sink: Box<dyn StatusSink>,
    pending_restart: Option<PendingRestart>,
    event_tx: Sender<RecognizerEvent>,
    event_rx: Receiver<RecognizerEvent>,
    last_error: Option<String>,
}

impl<R: Recognizer> RecognitionSession<R> {
    /// Create a new session.
    ///
    /// Fails with [`VoiceError::UnsupportedEnvironment`] when the recognizer
    /// reports no recognition capability; the sink is told once.
    pub fn new(
        recognizer: R,
        config: SessionConfig,
        matcher: TranscriptMatcher,
        sink: impl StatusSink + 'static,
    ) -> Result<Self, VoiceError> {
        let mut sink: Box<dyn StatusSink> = Box::new(sink);
        if !recognizer.is_supported() {
            error!("Speech recognition not supported in this environment");
            sink.on_status_changed(STATUS_NOT_SUPPORTED);
            return Err(VoiceError::UnsupportedEnvironment);
        }

        let (event_tx, event_rx) = mpsc::channel();
        let dispatcher = CommandDispatcher::new(config.ephemeral_display);
        Ok(Self {
            recognizer,
            config,
            state: SessionState::Idle,
            matcher,
            dedup: DedupFilter::new(),
            dispatcher,
            sink,
            pending_restart: None,
            event_tx,
            event_rx,
            last_error: None,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    pub fn recognizer_mut(&mut self) -> &mut R {
        &mut self.recognizer
    }

    /// Reason of the most recent recognizer or start failure
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn history(&self) -> &CommandHistory {
        self.dispatcher.history()
    }

    /// Sender for queueing recognizer events from callbacks or other threads
    pub fn event_sender(&self) -> Sender<RecognizerEvent> {
        self.event_tx.clone()
    }

    /// When the scheduled restart is due, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_restart.map(|p| p.due)
    }

    /// Bind (or replace) the actor commands are applied to
    pub fn bind_actor<A: Actor + 'static>(&mut self, actor: &Rc<RefCell<A>>) {
        self.dispatcher.bind_actor(actor);
    }

    pub fn unbind_actor(&mut self) {
        self.dispatcher.unbind_actor();
    }

    /// Request a new recognizer stream.
    ///
    /// Rejected without side effects while the session is already active.
    pub fn start(&mut self) -> Result<(), VoiceError> {
        if self.state.is_active() {
            return Err(VoiceError::AlreadyActive(self.state));
        }

        self.pending_restart = None;
        self.dedup.clear();

        match self.recognizer.start(&self.config.recognizer_config()) {
            Ok(()) => {
                info!("Starting recognition");
                self.last_error = None;
                self.enter(SessionState::Starting, STATUS_STARTING);
                Ok(())
            }
            Err(e) => {
                error!("Error starting voice control: {}", e);
                self.last_error = Some(e.to_string());
                self.enter(SessionState::Stopped, STATUS_START_FAILED);
                self.sink.on_ephemeral_message(
                    "Error Starting Voice Control",
                    self.config.ephemeral_display,
                );
                Err(VoiceError::StartFailed(e))
            }
        }
    }

    /// Halt recognition. A pending restart is cancelled before the recognizer
    /// is asked to shut down, so no restart can fire afterwards.
    pub fn stop(&mut self) {
        if self.state == SessionState::Stopped {
            return;
        }

        self.pending_restart = None;
        let was_active = self.state.is_active();
        if was_active {
            match self.recognizer.stop() {
                Ok(()) => info!("Recognition stopped"),
                Err(e) => error!("Error stopping recognition: {}", e),
            }
        }

        self.dedup.clear();
        self.enter(SessionState::Stopped, STATUS_STOPPED);
        if was_active {
            self.sink
                .on_ephemeral_message("Voice Control Stopped", self.config.ephemeral_display);
        }
    }

    /// Start when inactive, stop when active
    pub fn toggle(&mut self) -> Result<(), VoiceError> {
        if self.state.is_active() {
            self.stop();
            Ok(())
        } else {
            self.start()
        }
    }

    /// Handle a recognizer event now
    pub fn handle_event(&mut self, event: RecognizerEvent) {
        self.handle_event_at(event, Instant::now());
    }

    /// Handle a recognizer event, scheduling any restart relative to `now`
    pub fn handle_event_at(&mut self, event: RecognizerEvent, now: Instant) {
        match event {
            RecognizerEvent::Started => self.on_started(),
            RecognizerEvent::Result(batch) => {
                if self.state.is_listening() {
                    self.process_batch(&batch);
                } else {
                    debug!("Ignoring result batch while {}", self.state);
                }
            }
            RecognizerEvent::Error { reason } => self.on_error(&reason, now),
            RecognizerEvent::Ended => self.on_ended(now),
        }
    }

    /// Drain queued events and fire a due restart
    pub fn poll(&mut self) {
        self.poll_at(Instant::now());
    }

    pub fn poll_at(&mut self, now: Instant) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event_at(event, now);
        }
        self.fire_due_restart(now);
    }

    fn on_started(&mut self) {
        if self.state != SessionState::Starting {
            debug!("Ignoring started signal while {}", self.state);
            return;
        }
        info!("Recognition started");
        self.enter(SessionState::Listening, STATUS_LISTENING);
        self.sink
            .on_ephemeral_message(STATUS_LISTENING, self.config.ephemeral_display);
    }

    fn on_error(&mut self, reason: &str, now: Instant) {
        if !matches!(self.state, SessionState::Starting | SessionState::Listening) {
            debug!("Ignoring recognizer error '{}' while {}", reason, self.state);
            return;
        }

        self.last_error = Some(reason.to_string());
        if reason == ABORTED_REASON {
            info!("Recognition aborted");
            self.pending_restart = None;
            self.enter(SessionState::Stopped, STATUS_STOPPED);
            return;
        }

        // A stream that never started is not retried
        if self.state == SessionState::Starting {
            error!("Recognition failed before starting: {}", reason);
            self.pending_restart = None;
            self.sink.on_status_changed(&format!("Error: {}", reason));
            self.enter(SessionState::Stopped, STATUS_STOPPED);
            return;
        }

        warn!("Recognition error: {}, restarting", reason);
        self.schedule_restart(now + self.config.restart_delay_after_error);
        self.enter(SessionState::RestartPending, &format!("Error: {}", reason));
    }

    fn on_ended(&mut self, now: Instant) {
        match self.state {
            SessionState::Listening => {
                info!("Recognition ended, restarting");
                self.schedule_restart(now + self.config.restart_delay_after_end);
                self.enter(SessionState::RestartPending, STATUS_RESTARTING);
            }
            SessionState::Starting => {
                warn!("Recognition ended before starting");
                self.pending_restart = None;
                self.enter(SessionState::Stopped, STATUS_STOPPED);
            }
            _ => debug!("Ignoring end signal while {}", self.state),
        }
    }

    fn schedule_restart(&mut self, due: Instant) {
        self.pending_restart = Some(PendingRestart { due });
    }

    fn fire_due_restart(&mut self, now: Instant) {
        let Some(pending) = self.pending_restart else {
            return;
        };
        if pending.due > now {
            return;
        }
        self.pending_restart = None;
        if self.state != SessionState::RestartPending {
            return;
        }

        self.dedup.clear();
        match self.recognizer.start(&self.config.recognizer_config()) {
            Ok(()) => {
                info!("Restarting recognition");
                self.enter(SessionState::Starting, STATUS_STARTING);
            }
            Err(e) => {
                error!("Failed to restart recognition: {}", e);
                self.last_error = Some(e.to_string());
                self.enter(SessionState::Failed, STATUS_FAILED);
            }
        }
    }

    /// Scan alternatives from most to least likely; the first accepted match
    /// is dispatched and the rest of the batch is ignored.
    fn process_batch(&mut self, batch: &[Hypothesis]) {
        let mut ordered: Vec<&Hypothesis> = batch.iter().collect();
        ordered.sort_by_key(|h| h.alternative_rank);

        let mut admitted_interim = false;
        let mut saw_repeat = false;

        for hypothesis in ordered {
            let required = self.config.required_confidence(hypothesis.is_final);
            if hypothesis.confidence.is_nan() || hypothesis.confidence < required {
                debug!(
                    "Below confidence gate: \"{}\" ({:.2} < {:.2})",
                    hypothesis.transcript, hypothesis.confidence, required
                );
                continue;
            }

            if !self.dedup.admit(hypothesis) {
                debug!("Already processed: \"{}\"", hypothesis.transcript);
                saw_repeat = true;
                continue;
            }

            debug!(
                "Detected: \"{}\" (Confidence: {:.2}{})",
                hypothesis.transcript,
                hypothesis.confidence,
                if hypothesis.is_final { "" } else { ", Interim" }
            );

            if let Some(result) = self.matcher.match_text(&hypothesis.transcript) {
                self.dedup.record_match(hypothesis);
                self.dispatcher.dispatch(&result, self.sink.as_mut());
                return;
            }
            if !hypothesis.is_final {
                admitted_interim = true;
            }
        }

        // The utterance moved on without triggering anything
        if admitted_interim && !saw_repeat {
            self.dedup.clear();
        }
    }

    fn enter(&mut self, state: SessionState, status: &str) {
        debug!("Session {} -> {}", self.state, state);
        self.state = state;
        self.sink.on_status_changed(status);
    }
}

impl<R: Recognizer> Drop for RecognitionSession<R> {
    fn drop(&mut self) {
        if self.state.is_active() {
            self.pending_restart = None;
            let _ = self.recognizer.stop();
        }
    }
}
