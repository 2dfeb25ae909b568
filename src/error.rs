//! # Submission Errors
//!
//! Every way a submission can end in failure. The controller converts these
//! into the error message it exposes for rendering; they never escape it.

use thiserror::Error;

/// Fallback message when the service fails without a readable detail
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process input";

/// The response body did not have the shape the transport mode expects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid response: {0}")]
pub struct DecodeError(pub String);

impl DecodeError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self(message.into())
    }
}

/// Failure of a single submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request could not be sent or the response could not be read
    #[error("{0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("{message}")]
    Service { status: u16, message: String },

    /// The response body did not match the configured mode
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl SubmitError {
    /// Build a service error, falling back to the generic message when the
    /// service gave no usable detail
    pub fn service(status: u16, detail: Option<String>) -> Self {
        let message = detail
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        Self::Service { status, message }
    }

    /// Message shown in the error banner
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(error: reqwest::Error) -> Self {
        // Show the full source chain, the outermost message alone is rarely useful
        let mut message = error.to_string();
        let mut source = std::error::Error::source(&error);
        while let Some(cause) = source {
            message.push_str(&format!("\n  Caused by: {cause}"));
            source = cause.source();
        }
        Self::Transport(message)
    }
}
