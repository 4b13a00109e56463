//! Client builder.
//!
//! Provides a fluent API for configuring and building a [`SupervisorClient`].

use std::sync::Arc;
use std::time::Duration;

use crate::BuildError;
use crate::client::ApiClient;
use crate::root::SupervisorClient;
use crate::transport::HyperTransport;

/// Environment variable holding the api host.
pub const API_URL_ENV: &str = "SUPERVISOR_API_URL";
/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "SUPERVISOR_TOKEN";

/// Default deadline for a single call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builder for creating a [`SupervisorClient`].
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use hasupervisor_client::SupervisorClientBuilder;
///
/// let client = SupervisorClientBuilder::new("http://supervisor", token)
///     .request_timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub struct SupervisorClientBuilder {
    api_host: String,
    token: String,
    request_timeout: Option<Duration>,
    session: Option<HyperTransport>,
    user_agent: String,
}

impl std::fmt::Debug for SupervisorClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupervisorClientBuilder")
            .field("api_host", &self.api_host)
            .field("token", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("session", &self.session.is_some())
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl SupervisorClientBuilder {
    /// Create a builder for the given api host, e.g. `http://supervisor`.
    pub fn new<H: Into<String>, T: Into<String>>(api_host: H, token: T) -> Self {
        Self {
            api_host: api_host.into(),
            token: token.into(),
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
            session: None,
            user_agent: concat!("hasupervisor-rs/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }

    /// Read the api host and token from `SUPERVISOR_API_URL` and `SUPERVISOR_TOKEN`.
    pub fn from_env() -> Result<Self, BuildError> {
        let api_host = read_env(API_URL_ENV)?;
        let token = read_env(TOKEN_ENV)?;
        Ok(Self::new(api_host, token))
    }

    /// Deadline applied to calls that do not set their own.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Let calls without their own deadline wait indefinitely.
    pub fn no_request_timeout(mut self) -> Self {
        self.request_timeout = None;
        self
    }

    /// Use a caller-owned session. The client never closes it.
    ///
    /// Without one, the client creates its own on first use and releases it
    /// on [`SupervisorClient::close`].
    pub fn session(mut self, transport: HyperTransport) -> Self {
        self.session = Some(transport);
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<SupervisorClient, BuildError> {
        let api = ApiClient::new(
            &self.api_host,
            &self.token,
            &self.user_agent,
            self.request_timeout,
            self.session,
        )?;
        Ok(SupervisorClient::from_api(Arc::new(api)))
    }
}

fn read_env(name: &'static str) -> Result<String, BuildError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(BuildError::MissingEnv(name)),
    }
}
