//! Low-level Supervisor API client.
//!
//! [`ApiClient`] issues one HTTP call per invocation: it validates the
//! resource path, attaches authentication, applies the timeout, classifies
//! the outcome and decodes the body according to the requested
//! [`ResponseKind`]. Component clients are thin wrappers around it.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use bytes::Bytes;
use hasupervisor_core::Envelope;
use http::{HeaderValue, Method, Request, header};
use http_body_util::BodyExt;
use hyper::body::Incoming;

#[cfg(feature = "tracing")]
use tracing::{Instrument, debug, info_span};

use crate::error_parser::{error_from_envelope, is_json, parse_error_response};
use crate::options::{CallOptions, RequestBody, ResponseKind};
use crate::response::{ApiResponse, Payload};
use crate::streaming::ByteStream;
use crate::transport::{HyperTransport, TransportBody};
use crate::{BuildError, SupervisorError};

/// Ownership of the HTTP session.
#[derive(Debug)]
enum Session {
    /// Not created yet; built on first use and then owned.
    Pending,
    Owned(HyperTransport),
    /// Supplied by the caller. Never closed by this client.
    Shared(HyperTransport),
    Closed,
}

/// Low-level client shared by every component client.
#[derive(Debug)]
pub struct ApiClient {
    base_url: String,
    authorization: HeaderValue,
    user_agent: HeaderValue,
    request_timeout: Option<Duration>,
    session: Mutex<Session>,
}

impl ApiClient {
    pub(crate) fn new(
        api_host: &str,
        token: &str,
        user_agent: &str,
        request_timeout: Option<Duration>,
        session: Option<HyperTransport>,
    ) -> Result<Self, BuildError> {
        let base_url = normalize_host(api_host)?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| BuildError::InvalidHeader("authorization"))?;
        authorization.set_sensitive(true);
        let user_agent =
            HeaderValue::from_str(user_agent).map_err(|_| BuildError::InvalidHeader("user-agent"))?;

        Ok(Self {
            base_url,
            authorization,
            user_agent,
            request_timeout,
            session: Mutex::new(match session {
                Some(transport) => Session::Shared(transport),
                None => Session::Pending,
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Returns true if the session is owned by this client (created or pending).
    pub fn owns_session(&self) -> bool {
        matches!(*self.lock_session(), Session::Pending | Session::Owned(_))
    }

    pub fn is_closed(&self) -> bool {
        matches!(*self.lock_session(), Session::Closed)
    }

    /// Release the session if this client owns it. A shared session is left alone.
    pub fn close(&self) {
        let mut session = self.lock_session();
        if matches!(*session, Session::Pending | Session::Owned(_)) {
            *session = Session::Closed;
        }
    }

    fn lock_session(&self) -> std::sync::MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn transport(&self) -> Result<HyperTransport, SupervisorError> {
        let mut session = self.lock_session();
        match &*session {
            Session::Owned(transport) | Session::Shared(transport) => return Ok(transport.clone()),
            Session::Closed => return Err(SupervisorError::Closed),
            Session::Pending => {}
        }
        let transport = HyperTransport::new()?;
        *session = Session::Owned(transport.clone());
        Ok(transport)
    }

    /// GET, expecting JSON unless overridden.
    pub async fn get(&self, path: &str, options: CallOptions) -> Result<ApiResponse, SupervisorError> {
        self.request(Method::GET, path, options).await
    }

    /// POST, expecting no body unless overridden.
    pub async fn post(&self, path: &str, options: CallOptions) -> Result<ApiResponse, SupervisorError> {
        self.request(Method::POST, path, options).await
    }

    pub async fn put(&self, path: &str, options: CallOptions) -> Result<ApiResponse, SupervisorError> {
        self.request(Method::PUT, path, options).await
    }

    pub async fn delete(&self, path: &str, options: CallOptions) -> Result<ApiResponse, SupervisorError> {
        self.request(Method::DELETE, path, options).await
    }

    /// Issue a call.
    ///
    /// The path is relative to the api host and is rejected before any I/O if
    /// it would leave it.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: CallOptions,
    ) -> Result<ApiResponse, SupervisorError> {
        validate_path(path)?;
        let kind = options.response.unwrap_or(if method == Method::GET {
            ResponseKind::Json
        } else {
            ResponseKind::None
        });

        #[cfg(feature = "tracing")]
        let span = info_span!(
            "supervisor.request",
            http.method = %method,
            url.path = %path,
            response.kind = kind.as_str(),
        );

        let call = self.dispatch(method, path, kind, options);
        #[cfg(feature = "tracing")]
        let call = call.instrument(span);
        call.await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        kind: ResponseKind,
        options: CallOptions,
    ) -> Result<ApiResponse, SupervisorError> {
        let transport = self.transport()?;
        let timeout = options.timeout.resolve(self.request_timeout);
        let req = self.build_request(method, path, kind, options)?;

        #[cfg(feature = "tracing")]
        debug!(timeout = ?timeout, "dispatching");

        // For streams the deadline covers the response head only; the body
        // is read by the caller after this returns.
        let call = async {
            let response = transport.request(req).await?;
            handle_response(response, kind).await
        };

        match timeout {
            Some(t) => tokio::time::timeout(t, call)
                .await
                .map_err(|_| SupervisorError::Timeout(format!("no response within {t:?}")))?,
            None => call.await,
        }
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        kind: ResponseKind,
        options: CallOptions,
    ) -> Result<Request<TransportBody>, SupervisorError> {
        let url = self.url(path, &options.query);

        let mut builder = Request::builder()
            .method(method)
            .uri(&url)
            .header(header::AUTHORIZATION, self.authorization.clone())
            .header(header::ACCEPT, kind.accept())
            .header(header::USER_AGENT, self.user_agent.clone());

        let body = match options.body {
            RequestBody::Empty => TransportBody::empty(),
            RequestBody::Json(value) => {
                let data = serde_json::to_vec(&value)
                    .map_err(|e| SupervisorError::Encode(e.to_string()))?;
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                TransportBody::buffered(data)
            }
            RequestBody::Raw(data) => {
                builder = builder.header(header::CONTENT_TYPE, "application/octet-stream");
                TransportBody::buffered(data)
            }
            RequestBody::Multipart(upload) => {
                builder = builder.header(header::CONTENT_TYPE, upload.content_type());
                TransportBody::from(upload)
            }
        };

        if let Some(headers) = builder.headers_mut() {
            headers.extend(options.headers);
        }

        builder
            .body(body)
            .map_err(|e| SupervisorError::InvalidPath(format!("{path}: {e}")))
    }

    fn url(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if !query.is_empty() {
            url.push('?');
            url.push_str(&encode_query(query));
        }
        url
    }
}

async fn handle_response(
    response: http::Response<Incoming>,
    kind: ResponseKind,
) -> Result<ApiResponse, SupervisorError> {
    let status = response.status();
    let json = is_json(response.headers());

    if status.as_u16() >= 400 {
        let (parts, body) = response.into_parts();
        let body = read_body(body).await?;
        let err = parse_error_response(status.as_u16(), &parts.headers, &body);
        #[cfg(feature = "tracing")]
        debug!(status = status.as_u16(), kind = %err.kind(), "supervisor returned an error");
        return Err(err);
    }

    match kind {
        ResponseKind::None => {
            // Drain so the connection can go back to the pool.
            read_body(response.into_body()).await?;
            Ok(ApiResponse::new(status, None, Payload::Empty))
        }
        ResponseKind::Json => {
            if !json {
                return Err(SupervisorError::Response(format!(
                    "expected application/json, got {:?}",
                    response.headers().get(header::CONTENT_TYPE)
                )));
            }
            let body = read_body(response.into_body()).await?;
            let envelope = Envelope::from_slice(&body)
                .map_err(|e| SupervisorError::Response(format!("invalid response envelope: {e}")))?;
            if !envelope.is_ok() {
                return Err(error_from_envelope(status.as_u16(), envelope));
            }
            Ok(ApiResponse::new(
                status,
                envelope.job_id,
                Payload::Json(envelope.data.unwrap_or(serde_json::Value::Null)),
            ))
        }
        ResponseKind::Text => {
            let body = read_body(response.into_body()).await?;
            let text = String::from_utf8(body.to_vec())
                .map_err(|e| SupervisorError::Response(format!("response is not UTF-8: {e}")))?;
            Ok(ApiResponse::new(status, None, Payload::Text(text)))
        }
        ResponseKind::Stream => {
            let content_length = response
                .headers()
                .get(header::CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            #[cfg(feature = "tracing")]
            debug!(content_length = ?content_length, "handing off response stream");
            Ok(ApiResponse::new(
                status,
                None,
                Payload::Stream(ByteStream::new(response.into_body(), content_length)),
            ))
        }
    }
}

async fn read_body(body: Incoming) -> Result<Bytes, SupervisorError> {
    Ok(body
        .collect()
        .await
        .map_err(|e| SupervisorError::Connection(format!("failed to read response body: {e}")))?
        .to_bytes())
}

/// Validate the api host and strip any trailing slash.
fn normalize_host(api_host: &str) -> Result<String, BuildError> {
    let invalid = |reason: &str| BuildError::InvalidHost(api_host.to_owned(), reason.to_owned());
    let uri: http::Uri = api_host.parse().map_err(|e: http::uri::InvalidUri| invalid(&e.to_string()))?;
    match uri.scheme_str() {
        Some("http") | Some("https") => {}
        _ => return Err(invalid("scheme must be http or https")),
    }
    if uri.authority().is_none() {
        return Err(invalid("missing host"));
    }
    if uri.query().is_some() {
        return Err(invalid("must not contain a query"));
    }
    Ok(api_host.trim_end_matches('/').to_owned())
}

/// Reject resource paths that would navigate outside the api host.
///
/// Checked on both the raw and the percent-decoded form, so `..`,
/// `%2E%2E` and encoded separators are all caught.
pub(crate) fn validate_path(path: &str) -> Result<(), SupervisorError> {
    let invalid = || SupervisorError::InvalidPath(path.to_owned());

    if path.contains(['?', '#', '\\']) {
        return Err(invalid());
    }
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    for segment in trimmed.split('/') {
        let decoded = urlencoding::decode(segment).map_err(|_| invalid())?;
        if decoded == ".." || decoded == "." || decoded.contains(['/', '\\']) {
            return Err(invalid());
        }
    }
    Ok(())
}

fn encode_query(query: &[(String, String)]) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
