//! Model codec primitives for the Home Assistant Supervisor API.
//!
//! This crate provides the transport-independent pieces shared by the
//! client (`hasupervisor-client`) and anything that needs to speak the
//! Supervisor wire format without issuing HTTP calls.
//!
//! ## Modules
//!
//! - `field`: Three-state request fields (unset, null, value)
//! - `lenient`: Forward-compatible enum fields
//! - `envelope`: The `{result, data, ...}` response wrapper
//! - `codec`: Conversion between typed models and JSON mappings
//! - `error`: Error kinds, status anchoring and the error-key registry

mod codec;
mod envelope;
mod error;
mod field;
mod lenient;

pub use codec::*;
pub use envelope::*;
pub use error::*;
pub use field::*;
pub use lenient::*;
