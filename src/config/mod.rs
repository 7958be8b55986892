//! Configuration module.
//!
//! CMS location, credentials and the CMS-enabled feature flag, passed
//! explicitly to the client instead of read ad hoc from the environment.

pub mod settings;

pub use settings::*;
