//! Query construction module.
//!
//! Translates structured requests (fields, populate tree, filters, sort,
//! pagination) into CMS REST query strings.

pub mod builder;
pub mod populate;

pub use builder::*;
pub use populate::*;
