//! # Payload Codec
//!
//! Converts user input into the wire payload and the service response back
//! into displayable data. Two transport modes coexist:
//!
//! - **Byte array**: input travels as its UTF-8 bytes, one integer per byte
//! - **Plain text**: input travels verbatim in a `text` field
//!
//! Both are pure functions over their inputs; the only ambient value is the
//! timestamp stamped by [`encode`].

pub mod byte_array;
pub mod plain_text;

pub use byte_array::{ByteArrayCodec, ByteResult};
pub use plain_text::{PlainTextCodec, TextResult};

use crate::error::DecodeError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Request type sent with every payload
pub const REQUEST_TYPE: &str = "text_generation";

/// Shared interface of the per-mode encoders/decoders
pub trait PayloadCodec {
    /// Build the payload body for `input`
    fn encode_body(&self, input: &str) -> PayloadBody;

    /// Interpret a successful response body
    fn decode(&self, response: &Value) -> Result<ResultState, DecodeError>;
}

/// Payload shape used to talk to the processing service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TransportMode {
    /// Input sent as an ordered list of byte values
    #[value(name = "byte-array", aliases = ["bytes", "byte"])]
    ByteArray,
    /// Input sent verbatim as a string
    #[default]
    #[value(name = "plain-text", alias = "text")]
    PlainText,
}

impl TransportMode {
    fn codec(self) -> &'static dyn PayloadCodec {
        match self {
            TransportMode::ByteArray => &ByteArrayCodec,
            TransportMode::PlainText => &PlainTextCodec,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::ByteArray => "byte-array",
            TransportMode::PlainText => "plain-text",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "byte-array" | "bytes" | "byte" => Ok(TransportMode::ByteArray),
            "plain-text" | "text" => Ok(TransportMode::PlainText),
            other => Err(format!(
                "Unknown transport mode '{other}' (expected 'byte-array' or 'plain-text')"
            )),
        }
    }
}

/// Metadata attached to every request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Metadata {
    /// Metadata stamped with the given instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            timestamp: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
            kind: REQUEST_TYPE.to_string(),
        }
    }

    /// Metadata stamped with the current instant
    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}

/// Mode-specific part of the payload; exactly one field is ever present
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PayloadBody {
    Data { data: Vec<u8> },
    Text { text: String },
}

/// Body of one processing request, built fresh per submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestPayload {
    #[serde(flatten)]
    pub body: PayloadBody,
    pub metadata: Metadata,
}

impl RequestPayload {
    /// Byte values when built in byte-array mode
    pub fn data(&self) -> Option<&[u8]> {
        match &self.body {
            PayloadBody::Data { data } => Some(data),
            PayloadBody::Text { .. } => None,
        }
    }

    /// Input text when built in plain-text mode
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            PayloadBody::Text { text } => Some(text),
            PayloadBody::Data { .. } => None,
        }
    }
}

/// Decoded response of a successful submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultState {
    Bytes(ByteResult),
    Text(TextResult),
}

impl ResultState {
    /// Text to show as the result
    pub fn display_text(&self) -> &str {
        match self {
            ResultState::Bytes(result) => &result.decoded_text,
            ResultState::Text(result) => &result.text,
        }
    }

    pub fn processing_time(&self) -> Option<&serde_json::Number> {
        match self {
            ResultState::Bytes(result) => result.processing_time.as_ref(),
            ResultState::Text(result) => result.processing_time.as_ref(),
        }
    }

    pub fn mode(&self) -> TransportMode {
        match self {
            ResultState::Bytes(_) => TransportMode::ByteArray,
            ResultState::Text(_) => TransportMode::PlainText,
        }
    }
}

/// Encode `input` for `mode`, stamped with the current instant
pub fn encode(input: &str, mode: TransportMode) -> RequestPayload {
    encode_at(input, mode, Metadata::now())
}

/// Encode `input` for `mode` with explicit metadata
pub fn encode_at(input: &str, mode: TransportMode, metadata: Metadata) -> RequestPayload {
    RequestPayload {
        body: mode.codec().encode_body(input),
        metadata,
    }
}

/// Decode a successful response body for `mode`
pub fn decode(response: &Value, mode: TransportMode) -> Result<ResultState, DecodeError> {
    mode.codec().decode(response)
}
