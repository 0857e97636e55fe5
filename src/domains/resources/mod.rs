//! Resources domain module.
//!
//! Resources represent data that can be read by MCP clients. This server
//! exposes one `file://` resource per discovered document; reading it returns
//! the extracted text.
//!
//! ## Architecture
//!
//! - `service.rs` - Resource registration, listing and reading
//! - `error.rs` - Resource-specific error types

mod error;
mod service;

pub use error::ResourceError;
pub use service::{ResourceEntry, ResourceService, mime_type_for};
