//! Per-call options.
//!
//! [`CallOptions`] carries everything about a single Supervisor call besides
//! its method and path: the expected [`ResponseKind`], query parameters,
//! the request body and the timeout override.

use std::time::Duration;

use bytes::Bytes;
use hasupervisor_core::RequestModel;
use http::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::SupervisorError;
use crate::transport::MultipartUpload;

/// How a successful response body is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    /// Discard the body.
    None,
    /// Decode the JSON envelope and return its `data`.
    Json,
    /// Return the body as text.
    Text,
    /// Return a lazy byte stream over the live connection.
    Stream,
}

impl ResponseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::None => "none",
            ResponseKind::Json => "json",
            ResponseKind::Text => "text",
            ResponseKind::Stream => "stream",
        }
    }

    /// Value of the `Accept` header for this kind.
    pub fn accept(&self) -> &'static str {
        match self {
            ResponseKind::Text => "text/plain, */*",
            _ => "application/json, text/plain, */*",
        }
    }
}

/// Timeout policy for a call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CallTimeout {
    /// Use the client's request timeout.
    #[default]
    Default,
    After(Duration),
    /// Wait indefinitely (backups, updates, installs).
    Disabled,
}

impl CallTimeout {
    pub(crate) fn resolve(self, default: Option<Duration>) -> Option<Duration> {
        match self {
            CallTimeout::Default => default,
            CallTimeout::After(d) => Some(d),
            CallTimeout::Disabled => None,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Raw(Bytes),
    Multipart(MultipartUpload),
}

/// Options for a single Supervisor call.
///
/// # Example
///
/// ```ignore
/// use hasupervisor_client::{CallOptions, ResponseKind};
///
/// let options = CallOptions::new()
///     .response(ResponseKind::Stream)
///     .query("location", ".local")
///     .no_timeout();
///
/// let response = client.api().get("backups/abc123/download", options).await?;
/// ```
#[derive(Debug, Default)]
pub struct CallOptions {
    pub(crate) response: Option<ResponseKind>,
    pub(crate) timeout: CallTimeout,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: RequestBody,
    pub(crate) headers: HeaderMap,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected response kind. Defaults to JSON for GET and none otherwise.
    pub fn response(mut self, kind: ResponseKind) -> Self {
        self.response = Some(kind);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = CallTimeout::After(timeout);
        self
    }

    pub fn no_timeout(mut self) -> Self {
        self.timeout = CallTimeout::Disabled;
        self
    }

    pub fn get_timeout(&self) -> CallTimeout {
        self.timeout
    }

    /// Append a query parameter. Repeating a key sends it multiple times.
    pub fn query<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append one query parameter per value, all under `key`.
    pub fn query_all<K, I, V>(mut self, key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let key = key.into();
        for value in values {
            self.query.push((key.clone(), value.into()));
        }
        self
    }

    /// Send an already encoded JSON body.
    pub fn json_value(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    /// Encode a request model as the JSON body.
    pub fn json<T: RequestModel>(self, model: &T) -> Result<Self, SupervisorError> {
        let map = model
            .to_wire()
            .map_err(|e| SupervisorError::Encode(e.to_string()))?;
        Ok(self.json_value(Value::Object(map)))
    }

    /// Encode an optional request model; `None` sends no body.
    pub fn json_opt<T: RequestModel>(self, model: Option<&T>) -> Result<Self, SupervisorError> {
        match model {
            Some(model) => self.json(model),
            None => Ok(self),
        }
    }

    /// Send raw bytes as `application/octet-stream`.
    pub fn raw(mut self, data: impl Into<Bytes>) -> Self {
        self.body = RequestBody::Raw(data.into());
        self
    }

    pub fn multipart(mut self, upload: MultipartUpload) -> Self {
        self.body = RequestBody::Multipart(upload);
        self
    }

    /// Add a custom header for this call.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}
