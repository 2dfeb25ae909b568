//! Submission model for the request lifecycle
//!
//! Holds everything a renderer needs to know about the current and previous
//! submissions: the lifecycle phase, the loading flag, the last result and
//! the last error. It only changes through the transitions defined here.

use crate::interface::codec::ResultState;
use std::time::{Duration, Instant};

/// Lifecycle phase of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing has been submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Submitting,
    /// The last submission produced a result
    Succeeded,
    /// The last submission produced an error
    Failed,
}

impl Phase {
    /// Whether a new submission may start from this phase
    pub fn accepts_submission(self) -> bool {
        self != Phase::Submitting
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Succeeded | Phase::Failed)
    }
}

/// Client-side timing of one submission
#[derive(Debug, Clone, Default)]
pub struct SubmissionTiming {
    pub start_time: Option<Instant>,
    pub duration: Option<Duration>,
}

impl SubmissionTiming {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.duration = None;
    }

    pub fn finish(&mut self) {
        if let Some(start) = self.start_time {
            self.duration = Some(start.elapsed());
        }
    }

    /// Round-trip time in milliseconds
    pub fn duration_ms(&self) -> Option<u64> {
        self.duration.map(|d| d.as_millis() as u64)
    }
}

/// State of the submission lifecycle
///
/// A failed submission does not clear the previous result: the last good
/// result stays available next to the new error message.
#[derive(Debug, Clone, Default)]
pub struct SubmissionModel {
    phase: Phase,
    is_loading: bool,
    result: Option<ResultState>,
    error: Option<String>,
    timing: SubmissionTiming,
}

impl SubmissionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn result(&self) -> Option<&ResultState> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn timing(&self) -> &SubmissionTiming {
        &self.timing
    }

    /// Enter `Submitting`: raise the loading flag and clear the last error
    pub fn begin(&mut self) {
        self.phase = Phase::Submitting;
        self.is_loading = true;
        self.error = None;
        self.timing.start();
    }

    /// Record a successful outcome and lower the loading flag
    pub fn succeed(&mut self, result: ResultState) {
        self.result = Some(result);
        self.finish(Phase::Succeeded);
    }

    /// Record a failed outcome and lower the loading flag
    ///
    /// The previous result, if any, is kept.
    pub fn fail<S: Into<String>>(&mut self, message: S) {
        self.error = Some(message.into());
        self.finish(Phase::Failed);
    }

    fn finish(&mut self, phase: Phase) {
        self.phase = phase;
        self.timing.finish();
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::codec::TextResult;

    fn text_result(text: &str) -> ResultState {
        ResultState::Text(TextResult {
            text: text.to_string(),
            node_count: None,
            processing_time: None,
        })
    }

    #[test]
    fn submission_model_should_start_idle() {
        let model = SubmissionModel::new();

        assert_eq!(model.phase(), Phase::Idle);
        assert!(!model.is_loading());
        assert!(model.result().is_none());
        assert!(model.error().is_none());
    }

    #[test]
    fn begin_should_set_loading_and_clear_error() {
        let mut model = SubmissionModel::new();
        model.begin();
        model.fail("boom");

        model.begin();

        assert_eq!(model.phase(), Phase::Submitting);
        assert!(model.is_loading());
        assert!(model.error().is_none());
        assert!(model.timing().start_time.is_some());
    }

    #[test]
    fn succeed_should_store_result_and_clear_loading() {
        let mut model = SubmissionModel::new();
        model.begin();
        model.succeed(text_result("ok"));

        assert_eq!(model.phase(), Phase::Succeeded);
        assert!(!model.is_loading());
        assert_eq!(model.result().map(|r| r.display_text()), Some("ok"));
        assert!(model.timing().duration_ms().is_some());
    }

    #[test]
    fn fail_should_keep_previous_result() {
        let mut model = SubmissionModel::new();
        model.begin();
        model.succeed(text_result("first"));

        model.begin();
        model.fail("model overloaded");

        assert_eq!(model.phase(), Phase::Failed);
        assert!(!model.is_loading());
        assert_eq!(model.error(), Some("model overloaded"));
        assert_eq!(model.result().map(|r| r.display_text()), Some("first"));
    }

    #[test]
    fn phase_should_reject_submission_only_while_submitting() {
        assert!(Phase::Idle.accepts_submission());
        assert!(Phase::Succeeded.accepts_submission());
        assert!(Phase::Failed.accepts_submission());
        assert!(!Phase::Submitting.accepts_submission());
        assert!(Phase::Failed.is_terminal());
        assert!(!Phase::Idle.is_terminal());
    }
}
