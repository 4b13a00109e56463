//! The uniform Supervisor response wrapper.
//!
//! ```json
//! { "result": "ok", "data": { ... } }
//! { "result": "error", "message": "...", "job_id": "...", "error_key": "...", "extra_fields": { ... } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Discriminator of an [`Envelope`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    Ok,
    Error,
}

/// A decoded response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub result: ResultType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_fields: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    /// An ok envelope carrying an optional payload.
    pub fn ok(data: Option<Value>) -> Self {
        Self {
            result: ResultType::Ok,
            message: None,
            job_id: None,
            error_key: None,
            extra_fields: None,
            data,
        }
    }

    /// An error envelope with a message.
    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            result: ResultType::Error,
            message: Some(message.into()),
            ..Self::ok(None)
        }
    }

    pub fn with_error_key<S: Into<String>>(mut self, key: S) -> Self {
        self.error_key = Some(key.into());
        self
    }

    pub fn with_job_id<S: Into<String>>(mut self, job_id: S) -> Self {
        self.job_id = Some(job_id.into());
        self
    }

    pub fn with_extra_fields(mut self, extra: Map<String, Value>) -> Self {
        self.extra_fields = Some(extra);
        self
    }

    pub fn is_ok(&self) -> bool {
        self.result == ResultType::Ok
    }

    /// Parse an envelope from a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_ok_envelope() {
        let env = Envelope::from_slice(br#"{"result":"ok","data":{"version":"2024.01.0"}}"#)
            .unwrap();
        assert!(env.is_ok());
        assert_eq!(env.data, Some(json!({"version": "2024.01.0"})));
    }

    #[test]
    fn test_decode_ok_without_data() {
        let env = Envelope::from_slice(br#"{"result":"ok"}"#).unwrap();
        assert!(env.is_ok());
        assert!(env.data.is_none());
    }

    #[test]
    fn test_decode_error_envelope() {
        let env = Envelope::from_slice(
            br#"{"result":"error","message":"boom","job_id":"abc","error_key":"some_error","extra_fields":{"slug":"core_ssh"}}"#,
        )
        .unwrap();
        assert_eq!(env.result, ResultType::Error);
        assert_eq!(env.message.as_deref(), Some("boom"));
        assert_eq!(env.job_id.as_deref(), Some("abc"));
        assert_eq!(env.error_key.as_deref(), Some("some_error"));
        assert_eq!(env.extra_fields.unwrap()["slug"], json!("core_ssh"));
    }

    #[test]
    fn test_builder_encodes_only_set_fields() {
        let env = Envelope::error("nope").with_job_id("123");
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"result": "error", "message": "nope", "job_id": "123"})
        );
    }
}
