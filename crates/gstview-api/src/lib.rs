//! gstview-api - HTTP client for the GST lookup service
//!
//! The lookup service is an external collaborator reached over HTTP; this
//! crate owns that boundary. Only the response shape is specified -- any
//! transport failure, non-2xx status, or malformed body is surfaced as an
//! error and the caller decides how to present it.

pub mod client;

pub use client::{GstApiClient, DEFAULT_BASE_URL};
