//! Supervisor error kinds.
//!
//! This module provides the closed taxonomy used to classify failures:
//! - [`ErrorKind`]: Every error category and its parent family
//! - HTTP status anchoring via [`ErrorKind::from_status`]
//! - The static `error_key` registry via [`ErrorKind::from_error_key`]

use std::str::FromStr;

use serde_json::{Map, Value};

/// Error categories, organised as a shallow tree rooted at [`ErrorKind::Generic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Generic,
    Connection,
    Timeout,
    BadRequest,
    Authentication,
    Forbidden,
    NotFound,
    ServiceUnavailable,
    /// Unusable response (wrong content type or undecodable body).
    Response,
    AddonNotSupported,
    AddonNotSupportedArchitecture,
    AddonNotSupportedMachineType,
    AddonNotSupportedHomeAssistantVersion,
}

/// Prefix shared by every add-on availability error key.
const ADDON_NOT_SUPPORTED_PREFIX: &str = "addon_not_supported";

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Generic => "generic",
            ErrorKind::Connection => "connection",
            ErrorKind::Timeout => "timeout",
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::Authentication => "authentication",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not_found",
            ErrorKind::ServiceUnavailable => "service_unavailable",
            ErrorKind::Response => "response",
            ErrorKind::AddonNotSupported => "addon_not_supported",
            ErrorKind::AddonNotSupportedArchitecture => "addon_not_supported_architecture",
            ErrorKind::AddonNotSupportedMachineType => "addon_not_supported_machine_type",
            ErrorKind::AddonNotSupportedHomeAssistantVersion => {
                "addon_not_supported_home_assistant_version"
            }
        }
    }

    /// The family this kind belongs to. `None` only for [`ErrorKind::Generic`].
    pub fn parent(&self) -> Option<ErrorKind> {
        match self {
            ErrorKind::Generic => None,
            ErrorKind::AddonNotSupportedArchitecture
            | ErrorKind::AddonNotSupportedMachineType
            | ErrorKind::AddonNotSupportedHomeAssistantVersion => {
                Some(ErrorKind::AddonNotSupported)
            }
            ErrorKind::AddonNotSupported => Some(ErrorKind::BadRequest),
            _ => Some(ErrorKind::Generic),
        }
    }

    /// Returns true if `self` is `other` or descends from it.
    ///
    /// ```
    /// use hasupervisor_core::ErrorKind;
    ///
    /// let kind = ErrorKind::AddonNotSupportedArchitecture;
    /// assert!(kind.is_a(ErrorKind::AddonNotSupported));
    /// assert!(kind.is_a(ErrorKind::BadRequest));
    /// assert!(kind.is_a(ErrorKind::Generic));
    /// assert!(!kind.is_a(ErrorKind::NotFound));
    /// ```
    pub fn is_a(&self, other: ErrorKind) -> bool {
        let mut current = Some(*self);
        while let Some(kind) = current {
            if kind == other {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    /// Select the kind anchored to an HTTP error status.
    pub fn from_status(status: u16) -> ErrorKind {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Authentication,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            503 => ErrorKind::ServiceUnavailable,
            _ => ErrorKind::Generic,
        }
    }

    /// The `error_key` the Supervisor sends for this kind, if it has one.
    pub fn error_key(&self) -> Option<&'static str> {
        match self {
            ErrorKind::AddonNotSupportedArchitecture => {
                Some("addon_not_supported_architecture_error")
            }
            ErrorKind::AddonNotSupportedMachineType => {
                Some("addon_not_supported_machine_type_error")
            }
            ErrorKind::AddonNotSupportedHomeAssistantVersion => {
                Some("addon_not_supported_home_assistant_version_error")
            }
            _ => None,
        }
    }

    /// Look up an `error_key` in the registry.
    ///
    /// Keys this client does not know fall back to their family when the
    /// family is recognizable from the key prefix.
    pub fn from_error_key(key: &str) -> Option<ErrorKind> {
        REGISTERED
            .iter()
            .copied()
            .find(|kind| kind.error_key() == Some(key))
            .or_else(|| {
                key.starts_with(ADDON_NOT_SUPPORTED_PREFIX)
                    .then_some(ErrorKind::AddonNotSupported)
            })
    }

    /// Render the human readable message for a keyed error from its extra fields.
    ///
    /// Returns `None` for kinds without a template or when a placeholder is missing.
    pub fn render_message(&self, extra: &Map<String, Value>) -> Option<String> {
        let field = |name: &str| extra.get(name).map(display_value);
        match self {
            ErrorKind::AddonNotSupportedArchitecture => Some(format!(
                "Add-on {} not supported on this platform, supported architectures: {}",
                field("slug")?,
                field("architectures")?
            )),
            ErrorKind::AddonNotSupportedMachineType => Some(format!(
                "Add-on {} not supported on this machine, supported machine types: {}",
                field("slug")?,
                field("machine_types")?
            )),
            ErrorKind::AddonNotSupportedHomeAssistantVersion => Some(format!(
                "Add-on {} not supported on this system, requires Home Assistant version {} or greater",
                field("slug")?,
                field("version")?
            )),
            _ => None,
        }
    }
}

/// Kinds that carry a registered `error_key`.
const REGISTERED: &[ErrorKind] = &[
    ErrorKind::AddonNotSupportedArchitecture,
    ErrorKind::AddonNotSupportedMachineType,
    ErrorKind::AddonNotSupportedHomeAssistantVersion,
];

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an [`ErrorKind`] from a string fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseErrorKindError(());

impl std::fmt::Display for ParseErrorKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown error kind")
    }
}

impl std::error::Error for ParseErrorKindError {}

impl FromStr for ErrorKind {
    type Err = ParseErrorKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or(ParseErrorKindError(()))
    }
}

const ALL: &[ErrorKind] = &[
    ErrorKind::Generic,
    ErrorKind::Connection,
    ErrorKind::Timeout,
    ErrorKind::BadRequest,
    ErrorKind::Authentication,
    ErrorKind::Forbidden,
    ErrorKind::NotFound,
    ErrorKind::ServiceUnavailable,
    ErrorKind::Response,
    ErrorKind::AddonNotSupported,
    ErrorKind::AddonNotSupportedArchitecture,
    ErrorKind::AddonNotSupportedMachineType,
    ErrorKind::AddonNotSupportedHomeAssistantVersion,
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_status() {
        assert_eq!(ErrorKind::from_status(400), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Authentication);
        assert_eq!(ErrorKind::from_status(403), ErrorKind::Forbidden);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(503), ErrorKind::ServiceUnavailable);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::Generic);
        assert_eq!(ErrorKind::from_status(418), ErrorKind::Generic);
    }

    #[test]
    fn test_registry_lookup() {
        assert_eq!(
            ErrorKind::from_error_key("addon_not_supported_architecture_error"),
            Some(ErrorKind::AddonNotSupportedArchitecture)
        );
        assert_eq!(
            ErrorKind::from_error_key("addon_not_supported_home_assistant_version_error"),
            Some(ErrorKind::AddonNotSupportedHomeAssistantVersion)
        );
        assert_eq!(
            ErrorKind::from_error_key("addon_not_supported_kernel_error"),
            Some(ErrorKind::AddonNotSupported)
        );
        assert_eq!(ErrorKind::from_error_key("some_other_error"), None);
    }

    #[test]
    fn test_every_registered_key_maps_back() {
        for kind in REGISTERED {
            let key = kind.error_key().unwrap();
            assert_eq!(ErrorKind::from_error_key(key), Some(*kind));
        }
    }

    #[test]
    fn test_parent_chain() {
        assert_eq!(ErrorKind::Generic.parent(), None);
        assert_eq!(ErrorKind::NotFound.parent(), Some(ErrorKind::Generic));
        assert!(ErrorKind::AddonNotSupported.is_a(ErrorKind::BadRequest));
        assert!(!ErrorKind::BadRequest.is_a(ErrorKind::AddonNotSupported));
        assert!(ErrorKind::Timeout.is_a(ErrorKind::Generic));
    }

    #[test]
    fn test_render_message() {
        let extra = json!({"slug": "core_ssh", "architectures": ["amd64", "aarch64"]});
        let msg = ErrorKind::AddonNotSupportedArchitecture
            .render_message(extra.as_object().unwrap())
            .unwrap();
        assert_eq!(
            msg,
            "Add-on core_ssh not supported on this platform, supported architectures: amd64, aarch64"
        );

        let missing = json!({"slug": "core_ssh"});
        assert!(
            ErrorKind::AddonNotSupportedMachineType
                .render_message(missing.as_object().unwrap())
                .is_none()
        );
        assert!(ErrorKind::NotFound.render_message(&Map::new()).is_none());
    }

    #[test]
    fn test_round_trip_str() {
        for kind in ALL {
            assert_eq!(kind.as_str().parse::<ErrorKind>(), Ok(*kind));
        }
        assert!("nope".parse::<ErrorKind>().is_err());
    }
}
