//! Byte-array transport: input travels as its UTF-8 bytes.

use super::{PayloadBody, PayloadCodec, ResultState};
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Response of a byte-array submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteResult {
    /// Byte values exactly as returned by the service
    pub data: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<Number>,
    /// `data` decoded as UTF-8, malformed sequences replaced
    pub decoded_text: String,
    /// Any other fields the service sent along
    #[serde(flatten)]
    pub passthrough: Map<String, Value>,
}

impl ByteResult {
    /// Number of elements in the returned `data`
    pub fn output_size(&self) -> usize {
        self.data.len()
    }
}

/// Wire shape of a successful byte-array response
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ByteArrayReply {
    data: Vec<u8>,
    #[serde(default)]
    processing_time: Option<Number>,
    #[serde(flatten)]
    passthrough: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ByteArrayCodec;

impl ByteArrayCodec {
    /// Decode bytes as UTF-8 without ever failing
    pub fn decode_text(data: &[u8]) -> String {
        let (text, had_errors) = encoding_rs::UTF_8.decode_without_bom_handling(data);
        if had_errors {
            tracing::warn!(
                "Response data is not valid UTF-8, {} bytes decoded with replacements",
                data.len()
            );
        }
        text.into_owned()
    }
}

impl PayloadCodec for ByteArrayCodec {
    fn encode_body(&self, input: &str) -> PayloadBody {
        PayloadBody::Data {
            data: input.as_bytes().to_vec(),
        }
    }

    fn decode(&self, response: &Value) -> Result<ResultState, DecodeError> {
        let reply =
            ByteArrayReply::deserialize(response).map_err(|e| DecodeError::new(e.to_string()))?;

        let mut passthrough = reply.passthrough;
        // A stale decodedText from the service would shadow ours
        passthrough.remove("decodedText");

        let decoded_text = Self::decode_text(&reply.data);
        Ok(ResultState::Bytes(ByteResult {
            data: reply.data,
            processing_time: reply.processing_time,
            decoded_text,
            passthrough,
        }))
    }
}
