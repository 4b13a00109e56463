//! Error response parsing.
//!
//! Turns a Supervisor error response into a [`SupervisorError`]:
//!
//! 1. The HTTP status selects the base kind (400, 401, 403, 404, 503, other).
//! 2. A JSON error envelope supplies the message, job id and extra fields.
//! 3. A registered `error_key` refines the kind. Older Supervisor versions
//!    send no key, so 400 messages are also matched against the known
//!    message templates.
//!
//! Non-JSON error bodies produce the status kind with no message.

use std::sync::LazyLock;

use hasupervisor_core::{Envelope, ErrorKind};
use http::HeaderMap;
use regex::Regex;
use serde_json::{Map, Value};

use crate::SupervisorError;

/// Returns true if the `Content-Type` header indicates JSON.
pub(crate) fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"))
}

/// Parse an error response (status >= 400).
pub(crate) fn parse_error_response(status: u16, headers: &HeaderMap, body: &[u8]) -> SupervisorError {
    let base = ErrorKind::from_status(status);
    if !is_json(headers) {
        return SupervisorError::from_kind(base, status);
    }
    match Envelope::from_slice(body) {
        Ok(envelope) => error_from_envelope(status, envelope),
        Err(_) => SupervisorError::from_kind(base, status),
    }
}

/// Build the most specific error for an error envelope.
pub(crate) fn error_from_envelope(status: u16, envelope: Envelope) -> SupervisorError {
    let base = ErrorKind::from_status(status);
    let mut extra_fields = envelope.extra_fields;

    let kind = match envelope.error_key.as_deref() {
        Some(key) => ErrorKind::from_error_key(key).unwrap_or(base),
        None if base == ErrorKind::BadRequest => {
            match envelope.message.as_deref().and_then(match_legacy_message) {
                Some((kind, fields)) => {
                    extra_fields.get_or_insert_with(Map::new).extend(fields);
                    kind
                }
                None => base,
            }
        }
        None => base,
    };

    let message = envelope
        .message
        .or_else(|| extra_fields.as_ref().and_then(|extra| kind.render_message(extra)));

    SupervisorError::Status {
        kind,
        status,
        message,
        job_id: envelope.job_id,
        extra_fields,
    }
}

struct LegacyPattern {
    kind: ErrorKind,
    regex: Regex,
    list_field: &'static str,
}

static LEGACY_PATTERNS: LazyLock<Vec<LegacyPattern>> = LazyLock::new(|| {
    let pattern = |kind, regex: &str, list_field| LegacyPattern {
        kind,
        regex: Regex::new(regex).expect("legacy pattern should be valid"),
        list_field,
    };
    vec![
        pattern(
            ErrorKind::AddonNotSupportedArchitecture,
            r"^Add-on (?P<slug>\S+) not supported on this platform, supported architectures: (?P<architectures>.+)$",
            "architectures",
        ),
        pattern(
            ErrorKind::AddonNotSupportedMachineType,
            r"^Add-on (?P<slug>\S+) not supported on this machine, supported machine types: (?P<machine_types>.+)$",
            "machine_types",
        ),
        pattern(
            ErrorKind::AddonNotSupportedHomeAssistantVersion,
            r"^Add-on (?P<slug>\S+) not supported on this system, requires Home Assistant version (?P<version>\S+) or greater$",
            "version",
        ),
    ]
});

/// Match a message from a Supervisor that predates `error_key`.
fn match_legacy_message(message: &str) -> Option<(ErrorKind, Map<String, Value>)> {
    LEGACY_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.regex.captures(message)?;
        let mut fields = Map::new();
        fields.insert("slug".into(), Value::String(caps["slug"].to_owned()));
        fields.insert(
            pattern.list_field.into(),
            Value::String(caps[pattern.list_field].to_owned()),
        );
        Some((pattern.kind, fields))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use serde_json::json;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers
    }

    #[test]
    fn test_non_json_body_uses_status_kind() {
        let err = parse_error_response(404, &HeaderMap::new(), b"404: Not Found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), None);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let err = parse_error_response(503, &json_headers(), b"{not json");
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(err.message(), None);
    }

    #[test]
    fn test_envelope_message_and_job_id() {
        let body = br#"{"result":"error","message":"Backup in progress","job_id":"a1b2"}"#;
        let err = parse_error_response(500, &json_headers(), body);
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.message(), Some("Backup in progress"));
        assert_eq!(err.job_id(), Some("a1b2"));
    }

    #[test]
    fn test_registered_error_key() {
        let body = json!({
            "result": "error",
            "message": "Add-on core_ssh not supported on this platform, supported architectures: i386",
            "error_key": "addon_not_supported_architecture_error",
            "extra_fields": {"slug": "core_ssh", "architectures": ["i386"]}
        });
        let err = parse_error_response(400, &json_headers(), body.to_string().as_bytes());
        assert_eq!(err.kind(), ErrorKind::AddonNotSupportedArchitecture);
        assert_eq!(err.extra_fields().unwrap()["slug"], json!("core_ssh"));
    }

    #[test]
    fn test_unknown_error_key_keeps_status_kind() {
        let body = br#"{"result":"error","message":"nope","error_key":"brand_new_error"}"#;
        let err = parse_error_response(400, &json_headers(), body);
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_unknown_addon_key_maps_to_family() {
        let body = br#"{"result":"error","message":"nope","error_key":"addon_not_supported_kernel_error"}"#;
        let err = parse_error_response(400, &json_headers(), body);
        assert_eq!(err.kind(), ErrorKind::AddonNotSupported);
    }

    #[test]
    fn test_message_rendered_from_extra_fields() {
        let body = json!({
            "result": "error",
            "error_key": "addon_not_supported_home_assistant_version_error",
            "extra_fields": {"slug": "core_mosquitto", "version": "2024.12.0"}
        });
        let err = parse_error_response(400, &json_headers(), body.to_string().as_bytes());
        assert_eq!(
            err.message(),
            Some("Add-on core_mosquitto not supported on this system, requires Home Assistant version 2024.12.0 or greater")
        );
    }

    #[test]
    fn test_legacy_message_specialization() {
        let body = br#"{"result":"error","message":"Add-on core_ssh not supported on this machine, supported machine types: odroid-n2, green"}"#;
        let err = parse_error_response(400, &json_headers(), body);
        assert_eq!(err.kind(), ErrorKind::AddonNotSupportedMachineType);
        let extra = err.extra_fields().unwrap();
        assert_eq!(extra["slug"], json!("core_ssh"));
        assert_eq!(extra["machine_types"], json!("odroid-n2, green"));
    }

    #[test]
    fn test_legacy_matching_only_applies_to_bad_request() {
        let body = br#"{"result":"error","message":"Add-on core_ssh not supported on this machine, supported machine types: green"}"#;
        let err = parse_error_response(500, &json_headers(), body);
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert!(err.extra_fields().is_none());
    }
}
