//! # Services Layer
//!
//! Abstracts the external processing service so the controller can be
//! driven by the real HTTP client or by an in-process double.

pub mod http;

pub use http::{HttpService, DEFAULT_ENDPOINT, PROCESS_PATH};

use crate::error::SubmitError;
use crate::interface::codec::RequestPayload;
use async_trait::async_trait;
use serde::Deserialize;

/// Raw answer of the processing service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReply {
    pub status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl ServiceReply {
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check if the status indicates success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Human-readable `detail` from an error body, if the service sent one
    ///
    /// Only string details count; structured details (such as validation
    /// error lists) are not readable as a message.
    pub fn error_detail(&self) -> Option<String> {
        let body: ErrorBody = serde_json::from_str(&self.body).ok()?;
        match body.detail? {
            serde_json::Value::String(detail) => Some(detail),
            _ => None,
        }
    }
}

/// The black-box service that processes a payload
#[async_trait]
pub trait ProcessingService: Send + Sync {
    /// Deliver `payload` and return whatever the service answered
    ///
    /// Only failures to send the request or read the answer are errors here;
    /// non-success statuses come back as a [`ServiceReply`].
    async fn process(&self, payload: &RequestPayload) -> Result<ServiceReply, SubmitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_reply_should_classify_status() {
        assert!(ServiceReply::new(200, "").is_success());
        assert!(ServiceReply::new(204, "").is_success());
        assert!(!ServiceReply::new(404, "").is_success());
        assert!(!ServiceReply::new(500, "").is_success());
    }

    #[test]
    fn error_detail_should_read_string_detail() {
        let reply = ServiceReply::new(500, r#"{"detail":"model overloaded"}"#);
        assert_eq!(reply.error_detail(), Some("model overloaded".to_string()));
    }

    #[test]
    fn error_detail_should_ignore_unreadable_bodies() {
        assert_eq!(ServiceReply::new(500, "").error_detail(), None);
        assert_eq!(ServiceReply::new(500, "<html>oops</html>").error_detail(), None);
        assert_eq!(ServiceReply::new(500, r#"{"error":"x"}"#).error_detail(), None);
        assert_eq!(
            ServiceReply::new(422, r#"{"detail":[{"loc":["body","text"]}]}"#).error_detail(),
            None
        );
    }
}
