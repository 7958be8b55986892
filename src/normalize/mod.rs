//! Response normalization module.
//!
//! Converts CMS entities into the canonical `{id, documentId, attributes}`
//! shape and provides field access helpers over the normalized JSON.

pub mod entity;
pub mod json_path;

pub use entity::*;
pub use json_path::*;
