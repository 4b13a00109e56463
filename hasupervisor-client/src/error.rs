//! Client-side Supervisor error types.
//!
//! [`SupervisorError`] is returned by every call. Remote failures carry an
//! [`ErrorKind`] selected from the HTTP status and the optional `error_key`;
//! local failures (connection, timeout, unusable response, bad path) have
//! their own variants.

use hasupervisor_core::ErrorKind;
use serde_json::{Map, Value};

/// Errors raised by Supervisor calls.
#[derive(Clone, Debug, thiserror::Error)]
pub enum SupervisorError {
    /// The Supervisor answered with an error.
    #[error("{}", describe_status(.kind, .status, .message))]
    Status {
        kind: ErrorKind,
        status: u16,
        message: Option<String>,
        job_id: Option<String>,
        extra_fields: Option<Map<String, Value>>,
    },

    /// Network-level failure reaching the Supervisor.
    #[error("connection error: {0}")]
    Connection(String),

    /// No response within the allotted time.
    #[error("timeout: {0}")]
    Timeout(String),

    /// Response had the wrong content type or could not be decoded.
    #[error("unusable response: {0}")]
    Response(String),

    /// Request body could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Resource path rejected before any network I/O.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// The client's own session was closed.
    #[error("client session is closed")]
    Closed,
}

fn describe_status(kind: &ErrorKind, status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("{kind} error (HTTP {status})"),
    }
}

impl SupervisorError {
    /// Create a remote error with only a kind and status.
    pub fn from_kind(kind: ErrorKind, status: u16) -> Self {
        SupervisorError::Status {
            kind,
            status,
            message: None,
            job_id: None,
            extra_fields: None,
        }
    }

    /// Get the error kind.
    ///
    /// Local variants map onto the taxonomy:
    /// - Connection, Closed: `Connection`
    /// - Timeout: `Timeout`
    /// - Response: `Response`
    /// - Encode, InvalidPath: `Generic`
    pub fn kind(&self) -> ErrorKind {
        match self {
            SupervisorError::Status { kind, .. } => *kind,
            SupervisorError::Connection(_) | SupervisorError::Closed => ErrorKind::Connection,
            SupervisorError::Timeout(_) => ErrorKind::Timeout,
            SupervisorError::Response(_) => ErrorKind::Response,
            SupervisorError::Encode(_) | SupervisorError::InvalidPath(_) => ErrorKind::Generic,
        }
    }

    /// Returns true if this error is `kind` or belongs to its family.
    ///
    /// ```
    /// use hasupervisor_client::{ErrorKind, SupervisorError};
    ///
    /// let err = SupervisorError::from_kind(ErrorKind::AddonNotSupportedMachineType, 400);
    /// assert!(err.is(ErrorKind::AddonNotSupported));
    /// assert!(err.is(ErrorKind::BadRequest));
    /// assert!(!err.is(ErrorKind::NotFound));
    /// ```
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind().is_a(kind)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SupervisorError::Status { message, .. } => message.as_deref(),
            SupervisorError::Connection(msg)
            | SupervisorError::Timeout(msg)
            | SupervisorError::Response(msg)
            | SupervisorError::Encode(msg)
            | SupervisorError::InvalidPath(msg) => Some(msg),
            SupervisorError::Closed => None,
        }
    }

    /// The Supervisor job associated with the failure, if any.
    pub fn job_id(&self) -> Option<&str> {
        match self {
            SupervisorError::Status { job_id, .. } => job_id.as_deref(),
            _ => None,
        }
    }

    pub fn extra_fields(&self) -> Option<&Map<String, Value>> {
        match self {
            SupervisorError::Status { extra_fields, .. } => extra_fields.as_ref(),
            _ => None,
        }
    }

    /// HTTP status of a remote error.
    pub fn status(&self) -> Option<u16> {
        match self {
            SupervisorError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors building a client or transport.
#[derive(Clone, Debug, thiserror::Error)]
pub enum BuildError {
    #[error("invalid api host {0:?}: {1}")]
    InvalidHost(String, String),

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),

    #[error("tls configuration error: {0}")]
    Tls(String),
}

impl From<BuildError> for SupervisorError {
    fn from(err: BuildError) -> Self {
        SupervisorError::Connection(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_display_prefers_message() {
        let err = SupervisorError::Status {
            kind: ErrorKind::NotFound,
            status: 404,
            message: Some("Addon core_ssh does not exist".into()),
            job_id: None,
            extra_fields: None,
        };
        assert_eq!(err.to_string(), "Addon core_ssh does not exist");

        let err = SupervisorError::from_kind(ErrorKind::Forbidden, 403);
        assert_eq!(err.to_string(), "forbidden error (HTTP 403)");
        assert_eq!(err.message(), None);
    }

    #[test]
    fn test_local_variants_map_to_kinds() {
        assert_eq!(SupervisorError::Connection("refused".into()).kind(), ErrorKind::Connection);
        assert_eq!(SupervisorError::Closed.kind(), ErrorKind::Connection);
        assert_eq!(SupervisorError::Timeout("10s".into()).kind(), ErrorKind::Timeout);
        assert_eq!(SupervisorError::Response("bad".into()).kind(), ErrorKind::Response);
        assert!(SupervisorError::InvalidPath("../x".into()).is(ErrorKind::Generic));
        assert!(!SupervisorError::Timeout("10s".into()).is(ErrorKind::Connection));
    }

    #[test]
    fn test_accessors() {
        let extra = json!({"slug": "core_ssh"}).as_object().cloned();
        let err = SupervisorError::Status {
            kind: ErrorKind::AddonNotSupported,
            status: 400,
            message: None,
            job_id: Some("abc123".into()),
            extra_fields: extra,
        };
        assert_eq!(err.job_id(), Some("abc123"));
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.extra_fields().unwrap()["slug"], json!("core_ssh"));
        assert!(err.is(ErrorKind::BadRequest));
    }

    #[test]
    fn test_build_error_becomes_connection_error() {
        let err: SupervisorError = BuildError::Tls("no crypto provider".into()).into();
        assert!(matches!(err, SupervisorError::Connection(_)));
    }
}
