//! In-process stand-in for the processing service, used by unit tests.

use crate::error::SubmitError;
use crate::interface::codec::RequestPayload;
use crate::interface::services::{ProcessingService, ServiceReply};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

type Reply = Result<ServiceReply, SubmitError>;

/// Replays queued replies and records every payload it receives
///
/// A gated service holds each call until [`release`](Self::release) is
/// called once for it.
#[derive(Default)]
pub struct MockProcessingService {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<RequestPayload>>,
    calls: AtomicUsize,
    gate: Option<Notify>,
    panics: bool,
}

impl MockProcessingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::default()
        }
    }

    pub fn panicking() -> Self {
        Self {
            panics: true,
            ..Self::default()
        }
    }

    pub fn push_reply(&self, status: u16, body: serde_json::Value) {
        self.push_raw_reply(status, &body.to_string());
    }

    pub fn push_raw_reply(&self, status: u16, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(ServiceReply::new(status, body)));
    }

    pub fn push_transport_error(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(SubmitError::Transport(message.to_string())));
    }

    /// Let one gated call proceed
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RequestPayload> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessingService for MockProcessingService {
    async fn process(&self, payload: &RequestPayload) -> Result<ServiceReply, SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(payload.clone());

        if self.panics {
            panic!("mock processing service panicked");
        }
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SubmitError::Transport("no reply queued".to_string())))
    }
}
