//! Transport module.
//!
//! HTTP access to the CMS REST API:
//! - `http` - the transport seam and its reqwest implementation
//! - `client` - URL composition, auth, and status-code policy

pub mod client;
pub mod http;

pub use client::*;
pub use http::*;
