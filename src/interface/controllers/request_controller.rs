//! # Request Controller
//!
//! Owns the interaction state and drives one submission at a time through
//! `Idle → Submitting → Succeeded | Failed`.
//!
//! Dispatch never blocks: [`RequestController::submit`] spawns the network
//! call on the tokio runtime and returns immediately. The outcome comes back
//! over a channel and is applied by [`RequestController::poll`] or
//! [`RequestController::wait_for_outcome`]. Every exit path lowers the
//! loading flag, including a worker task that panics.

use crate::error::{DecodeError, SubmitError};
use crate::interface::codec::{self, RequestPayload, ResultState, TransportMode};
use crate::interface::events::ControllerEvent;
use crate::interface::models::{InputModel, Phase, SubmissionModel};
use crate::interface::services::{ProcessingService, ServiceReply};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

type Outcome = Result<ResultState, SubmitError>;

/// Read-only copy of the controller state for renderers
#[derive(Debug, Clone)]
pub struct ControllerSnapshot {
    pub mode: TransportMode,
    pub input: String,
    pub can_submit: bool,
    pub phase: Phase,
    pub is_loading: bool,
    pub result: Option<ResultState>,
    pub error: Option<String>,
    pub duration_ms: Option<u64>,
}

pub struct RequestController {
    mode: TransportMode,
    service: Arc<dyn ProcessingService>,
    /// No limit unless configured; a hung request then stays in `Submitting`
    timeout: Option<Duration>,
    input: InputModel,
    submission: SubmissionModel,
    outcome_receiver: mpsc::Receiver<Outcome>,
    outcome_sender: mpsc::Sender<Outcome>,
}

impl RequestController {
    pub fn new(service: Arc<dyn ProcessingService>, mode: TransportMode) -> Self {
        let (outcome_sender, outcome_receiver) = mpsc::channel(1);
        Self {
            mode,
            service,
            timeout: None,
            input: InputModel::new(),
            submission: SubmissionModel::new(),
            outcome_receiver,
            outcome_sender,
        }
    }

    /// Abort submissions that take longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub fn input(&self) -> &str {
        self.input.text()
    }

    pub fn phase(&self) -> Phase {
        self.submission.phase()
    }

    pub fn is_loading(&self) -> bool {
        self.submission.is_loading()
    }

    pub fn result(&self) -> Option<&ResultState> {
        self.submission.result()
    }

    pub fn error(&self) -> Option<&str> {
        self.submission.error()
    }

    pub fn submission(&self) -> &SubmissionModel {
        &self.submission
    }

    /// Replace the input text; allowed in every phase
    pub fn update_input<S: Into<String>>(&mut self, text: S) {
        self.input.set_text(text);
    }

    /// Whether [`submit`](Self::submit) would dispatch a request right now
    pub fn can_submit(&self) -> bool {
        self.input.is_submittable() && self.submission.phase().accepts_submission()
    }

    /// Start a submission of the current input
    ///
    /// Returns `None` without touching any state when the input is blank,
    /// a submission is already in flight, or no tokio runtime is running.
    pub fn submit(&mut self) -> Option<ControllerEvent> {
        if !self.input.is_submittable() {
            tracing::debug!("Ignoring submit: input is empty");
            return None;
        }
        if !self.submission.phase().accepts_submission() {
            tracing::debug!("Ignoring submit: a submission is already in flight");
            return None;
        }
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::error!("Ignoring submit: no tokio runtime to run the request on");
            return None;
        };

        self.submission.begin();
        let payload = codec::encode(self.input.text(), self.mode);
        tracing::info!(
            "Submitting {} bytes of input in {} mode",
            self.input.len(),
            self.mode
        );

        let service = Arc::clone(&self.service);
        let sender = self.outcome_sender.clone();
        let mode = self.mode;
        let timeout = self.timeout;
        runtime.spawn(async move {
            let worker = tokio::spawn(run_submission(service, payload, mode, timeout));
            let outcome = match worker.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("Submission task failed: {e}");
                    Err(SubmitError::Transport(format!("Submission task failed: {e}")))
                }
            };
            // Ignore send errors (the controller might have been dropped)
            let _ = sender.send(outcome).await;
        });

        Some(ControllerEvent::SubmissionStarted {
            mode: self.mode,
            input_len: self.input.len(),
        })
    }

    /// Apply a finished submission if one is ready (non-blocking)
    pub fn poll(&mut self) -> Option<ControllerEvent> {
        if self.submission.phase() != Phase::Submitting {
            return None;
        }
        let outcome = self.outcome_receiver.try_recv().ok()?;
        Some(self.apply_outcome(outcome))
    }

    /// Wait for the in-flight submission to finish and apply its outcome
    ///
    /// Returns `None` immediately when nothing is in flight.
    pub async fn wait_for_outcome(&mut self) -> Option<ControllerEvent> {
        if self.submission.phase() != Phase::Submitting {
            return None;
        }
        let outcome = match self.outcome_receiver.recv().await {
            Some(outcome) => outcome,
            None => Err(SubmitError::Transport(
                "Submission channel closed".to_string(),
            )),
        };
        Some(self.apply_outcome(outcome))
    }

    /// Submit the current input and wait for the terminal outcome
    ///
    /// Returns `None` when nothing was dispatched.
    pub async fn submit_and_wait(&mut self) -> Option<ControllerEvent> {
        self.submit()?;
        self.wait_for_outcome().await
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            mode: self.mode,
            input: self.input.text().to_string(),
            can_submit: self.can_submit(),
            phase: self.submission.phase(),
            is_loading: self.submission.is_loading(),
            result: self.submission.result().cloned(),
            error: self.submission.error().map(str::to_string),
            duration_ms: self.submission.timing().duration_ms(),
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome) -> ControllerEvent {
        match outcome {
            Ok(result) => {
                self.submission.succeed(result.clone());
                tracing::info!(
                    "Submission succeeded in {:?} ms",
                    self.submission.timing().duration_ms()
                );
                ControllerEvent::SubmissionSucceeded { result }
            }
            Err(error) => {
                let message = error.user_message();
                tracing::warn!("Submission failed: {message}");
                self.submission.fail(message.clone());
                ControllerEvent::SubmissionFailed { message }
            }
        }
    }
}

async fn run_submission(
    service: Arc<dyn ProcessingService>,
    payload: RequestPayload,
    mode: TransportMode,
    timeout: Option<Duration>,
) -> Outcome {
    let reply = match timeout {
        Some(limit) => tokio::time::timeout(limit, service.process(&payload))
            .await
            .map_err(|_| {
                SubmitError::Transport(format!(
                    "Request timed out after {} ms",
                    limit.as_millis()
                ))
            })??,
        None => service.process(&payload).await?,
    };
    interpret_reply(reply, mode)
}

/// Turn a raw service reply into a result or an error
pub fn interpret_reply(reply: ServiceReply, mode: TransportMode) -> Outcome {
    if !reply.is_success() {
        return Err(SubmitError::service(reply.status, reply.error_detail()));
    }
    let body: serde_json::Value = serde_json::from_str(&reply.body)
        .map_err(|e| DecodeError::new(format!("body is not valid JSON ({e})")))?;
    Ok(codec::decode(&body, mode)?)
}
