//! Successful call results.

use bytes::Bytes;
use hasupervisor_core::ResponseModel;
use serde_json::Value;

use crate::SupervisorError;
use crate::streaming::ByteStream;

/// Body of a successful response, shaped by the requested [`ResponseKind`](crate::ResponseKind).
#[derive(Debug)]
pub enum Payload {
    Empty,
    /// The envelope's `data` (JSON `null` when absent).
    Json(Value),
    Text(String),
    Stream(ByteStream),
}

/// A successful Supervisor response.
#[derive(Debug)]
pub struct ApiResponse {
    status: http::StatusCode,
    job_id: Option<String>,
    payload: Payload,
}

impl ApiResponse {
    pub(crate) fn new(status: http::StatusCode, job_id: Option<String>, payload: Payload) -> Self {
        Self {
            status,
            job_id,
            payload,
        }
    }

    pub fn status(&self) -> http::StatusCode {
        self.status
    }

    /// Job id attached to the envelope, for calls that start background jobs.
    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }

    /// The raw envelope `data`.
    pub fn into_json(self) -> Result<Value, SupervisorError> {
        match self.payload {
            Payload::Json(value) => Ok(value),
            other => Err(unexpected("JSON", &other)),
        }
    }

    /// Decode the envelope `data` into a response model.
    pub fn decode<T: ResponseModel>(self) -> Result<T, SupervisorError> {
        T::from_wire(self.into_json()?)
            .map_err(|e| SupervisorError::Response(format!("failed to decode response data: {e}")))
    }

    pub fn into_text(self) -> Result<String, SupervisorError> {
        match self.payload {
            Payload::Text(text) => Ok(text),
            other => Err(unexpected("text", &other)),
        }
    }

    pub fn into_stream(self) -> Result<ByteStream, SupervisorError> {
        match self.payload {
            Payload::Stream(stream) => Ok(stream),
            other => Err(unexpected("stream", &other)),
        }
    }

    /// Read the whole body, whatever the payload kind.
    pub async fn into_bytes(self) -> Result<Bytes, SupervisorError> {
        match self.payload {
            Payload::Empty => Ok(Bytes::new()),
            Payload::Json(value) => serde_json::to_vec(&value)
                .map(Bytes::from)
                .map_err(|e| SupervisorError::Response(e.to_string())),
            Payload::Text(text) => Ok(Bytes::from(text)),
            Payload::Stream(stream) => stream.collect_bytes().await,
        }
    }
}

fn unexpected(wanted: &str, got: &Payload) -> SupervisorError {
    let got = match got {
        Payload::Empty => "empty",
        Payload::Json(_) => "JSON",
        Payload::Text(_) => "text",
        Payload::Stream(_) => "stream",
    };
    SupervisorError::Response(format!("expected {wanted} payload, got {got}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Slug {
        slug: String,
    }
    impl ResponseModel for Slug {}

    fn ok(payload: Payload) -> ApiResponse {
        ApiResponse::new(http::StatusCode::OK, None, payload)
    }

    #[test]
    fn test_decode_model() {
        let slug: Slug = ok(Payload::Json(json!({"slug": "abc"}))).decode().unwrap();
        assert_eq!(slug.slug, "abc");
    }

    #[test]
    fn test_decode_missing_field_is_response_error() {
        let err = ok(Payload::Json(json!({}))).decode::<Slug>().unwrap_err();
        assert!(matches!(err, SupervisorError::Response(_)));
    }

    #[test]
    fn test_wrong_payload_kind() {
        let err = ok(Payload::Empty).into_text().unwrap_err();
        assert_eq!(err.to_string(), "unusable response: expected text payload, got empty");
    }

    #[tokio::test]
    async fn test_into_bytes_for_text() {
        let bytes = ok(Payload::Text("# Changelog".into())).into_bytes().await.unwrap();
        assert_eq!(bytes, Bytes::from_static(b"# Changelog"));
    }
}
