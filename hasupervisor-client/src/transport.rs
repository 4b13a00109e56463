//! HTTP transport for Supervisor calls.
//!
//! - [`HyperTransport`]: pooled hyper client, shareable between client instances
//! - [`TransportBody`]: request body, a buffered payload or a multipart upload
//! - [`MultipartUpload`]: streaming `multipart/form-data` body for backup uploads
//! - TLS connector helpers

mod body;
mod connector;
mod hyper;
mod multipart;

pub use body::TransportBody;
pub use connector::{danger_accept_invalid_certs_config, default_tls_config, has_tls_support};
pub use self::hyper::{HyperTransport, HyperTransportBuilder};
pub use multipart::{MultipartUpload, UploadFrames};
