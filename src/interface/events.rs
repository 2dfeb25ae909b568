//! # Controller Events
//!
//! Emitted by the request controller on every lifecycle transition so
//! observers can react without inspecting the whole state.

use crate::interface::codec::{ResultState, TransportMode};

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    /// A request was dispatched
    SubmissionStarted { mode: TransportMode, input_len: usize },

    /// The service answered and the answer decoded
    SubmissionSucceeded { result: ResultState },

    /// The submission ended with an error message
    SubmissionFailed { message: String },
}

impl ControllerEvent {
    /// Whether this event ends a submission
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ControllerEvent::SubmissionStarted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_started_event_should_be_non_terminal() {
        let started = ControllerEvent::SubmissionStarted {
            mode: TransportMode::PlainText,
            input_len: 2,
        };
        let failed = ControllerEvent::SubmissionFailed {
            message: "boom".to_string(),
        };

        assert!(!started.is_terminal());
        assert!(failed.is_terminal());
    }
}
