//! Async client for the Home Assistant Supervisor API.
//!
//! This crate provides a typed client for the HTTP API the Supervisor exposes
//! to add-ons and integrations, built on hyper with the response envelope,
//! error mapping and model codec handled for you.
//!
//! ## Features
//!
//! - One component client per resource group (add-ons, backups, store, ...)
//! - Typed request and response models with forward-compatible enums
//! - Distinct error kinds for known Supervisor error keys
//! - Streaming backup downloads and multipart backup uploads
//! - Per-call timeouts, with long-running operations exempt by default
//!
//! ## Example
//!
//! ```ignore
//! use hasupervisor_client::SupervisorClient;
//!
//! let client = SupervisorClient::new("http://supervisor", token)?;
//!
//! let info = client.info().await?;
//! println!("supervisor {} on {}", info.supervisor, info.arch);
//!
//! for addon in client.addons().list().await? {
//!     println!("{}: {:?}", addon.base.slug, addon.state);
//! }
//!
//! client.close();
//! ```
//!
//! Inside an add-on the api host and token come from the environment:
//!
//! ```ignore
//! use hasupervisor_client::SupervisorClientBuilder;
//!
//! let client = SupervisorClientBuilder::from_env()?.build()?;
//! ```
//!
//! ## Sending Options
//!
//! Options models have only optional fields. Leave a field at
//! [`Field::Unset`] to omit it, or set [`Field::Null`] to clear it on the
//! Supervisor side:
//!
//! ```ignore
//! use hasupervisor_client::Field;
//! use hasupervisor_client::models::addons::AddonsOptions;
//!
//! let options = AddonsOptions {
//!     auto_update: true.into(),
//!     watchdog: Field::Null,
//!     ..Default::default()
//! };
//! client.addons().addon_options("core_ssh", &options).await?;
//! ```
//!
//! An options model with nothing set fails with
//! [`SupervisorError::Encode`] before any request is made.
//!
//! ## Errors
//!
//! Every call returns [`SupervisorError`]. Use [`SupervisorError::kind`] to
//! branch on the category; known Supervisor error keys map to their own
//! [`ErrorKind`], and the message, job id and extra fields from the
//! response are kept:
//!
//! ```ignore
//! use hasupervisor_client::ErrorKind;
//!
//! match client.store().install_addon("core_ssh", None).await {
//!     Ok(()) => {}
//!     Err(e) if e.is(ErrorKind::AddonNotSupportedArchitecture) => {
//!         eprintln!("not available here: {:?}", e.extra_fields());
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Timeouts
//!
//! Calls use the client-wide request timeout (10 seconds unless configured).
//! Updates, rebuilds, backup jobs and transfers default to no timeout; host
//! and core power actions get a longer one. Use [`CallOptions`] with
//! [`ApiClient`] for anything else:
//!
//! ```ignore
//! use std::time::Duration;
//! use hasupervisor_client::CallOptions;
//!
//! let response = client
//!     .api()
//!     .get("addons/core_ssh/logs", CallOptions::new().timeout(Duration::from_secs(30)))
//!     .await?;
//! ```
//!
//! ## Sessions
//!
//! By default the client creates its own [`HyperTransport`] on first use and
//! releases it on [`SupervisorClient::close`]. A transport passed to
//! [`SupervisorClientBuilder::session`] is shared and never closed by the
//! client.
//!
//! ## Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `tls` | TLS with ring and native roots (default) | `rustls`, `rustls-native-certs` |
//! | `tls-webpki-roots` | Bundled Mozilla roots | `webpki-roots` |
//! | `tracing` | A span per Supervisor call (default) | `tracing` |

mod builder;
mod client;
pub mod components;
mod error;
mod error_parser;
pub mod models;
mod options;
mod response;
mod root;
mod streaming;
pub mod transport;

pub use builder::{API_URL_ENV, DEFAULT_REQUEST_TIMEOUT, SupervisorClientBuilder, TOKEN_ENV};
pub use client::ApiClient;
pub use components::{
    AddonsClient, BackupsClient, DiscoveryClient, HomeAssistantClient, HostClient, JobsClient,
    MountsClient, NetworkClient, OSClient, ResolutionClient, StoreClient,
    SupervisorManagementClient,
};
pub use error::{BuildError, SupervisorError};
pub use options::{CallOptions, CallTimeout, ResponseKind};
pub use response::{ApiResponse, Payload};
pub use root::SupervisorClient;
pub use streaming::ByteStream;
pub use transport::{HyperTransport, HyperTransportBuilder, MultipartUpload, TransportBody};

// Re-export from core
pub use hasupervisor_core::{
    CodecError, Envelope, ErrorKind, Field, Lenient, ModelError, RequestModel, ResponseModel,
    ResultType,
};
