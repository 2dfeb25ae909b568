//! Plain-text transport: input travels verbatim as a string.

use super::{PayloadBody, PayloadCodec, ResultState};
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Response of a plain-text submission
///
/// `node_count` and `processing_time` are optional: a service that omits
/// them leaves them unknown rather than failing the submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextResult {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_count: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<Number>,
}

impl TextResult {
    /// Number of characters in the returned text
    pub fn output_size(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextCodec;

impl PayloadCodec for PlainTextCodec {
    fn encode_body(&self, input: &str) -> PayloadBody {
        PayloadBody::Text {
            text: input.to_string(),
        }
    }

    fn decode(&self, response: &Value) -> Result<ResultState, DecodeError> {
        TextResult::deserialize(response)
            .map(ResultState::Text)
            .map_err(|e| DecodeError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode_text(response: Value) -> Result<TextResult, DecodeError> {
        match PlainTextCodec.decode(&response)? {
            ResultState::Text(result) => Ok(result),
            other => panic!("Expected text result, got {other:?}"),
        }
    }

    #[test]
    fn encode_should_pass_input_unchanged() {
        assert_eq!(
            PlainTextCodec.encode_body("  hello\n"),
            PayloadBody::Text {
                text: "  hello\n".to_string()
            }
        );
    }

    #[test]
    fn decode_should_reproduce_response_verbatim() {
        let response = json!({"text": "HELLO", "nodeCount": 3, "processingTime": 50});
        let result = decode_text(response.clone()).unwrap();

        assert_eq!(
            result,
            TextResult {
                text: "HELLO".to_string(),
                node_count: Some(Number::from(3)),
                processing_time: Some(Number::from(50)),
            }
        );
        assert_eq!(serde_json::to_value(&result).unwrap(), response);
    }

    #[test]
    fn decode_should_keep_fractional_processing_time() {
        let result = decode_text(json!({"text": "x", "processingTime": 812.37})).unwrap();
        assert_eq!(result.processing_time.unwrap().as_f64(), Some(812.37));
    }

    #[test]
    fn decode_should_treat_missing_details_as_unknown() {
        let result = decode_text(json!({"text": "HELLO"})).unwrap();

        assert_eq!(result.node_count, None);
        assert_eq!(result.processing_time, None);
        assert_eq!(result.output_size(), 5);
    }

    #[test]
    fn decode_should_reject_missing_text() {
        let err = decode_text(json!({"nodeCount": 3})).unwrap_err();
        assert!(err.to_string().contains("missing field `text`"));
    }

    #[test]
    fn decode_should_reject_wrong_field_types() {
        assert!(decode_text(json!({"text": 42})).is_err());
        assert!(decode_text(json!({"text": "x", "nodeCount": "three"})).is_err());
    }

    #[test]
    fn decode_should_accept_any_numeric_node_count() {
        let response = json!({"text": "x", "nodeCount": 3.0});
        let result = decode_text(response.clone()).unwrap();
        assert_eq!(result.node_count.as_ref().and_then(Number::as_f64), Some(3.0));
        assert_eq!(serde_json::to_value(&result).unwrap(), response);

        let result = decode_text(json!({"text": "x", "nodeCount": -1})).unwrap();
        assert_eq!(result.node_count, Some(Number::from(-1)));
    }

    #[test]
    fn decode_should_ignore_unknown_fields() {
        let result = decode_text(json!({"text": "x", "model": "tiny"})).unwrap();
        assert_eq!(result.text, "x");
    }
}
