//! Entry accessors.
//!
//! Singleton, collection and by-slug lookups on top of the query builder and
//! the CMS client. The plain accessors never return errors to page code.

pub mod entries;

pub use entries::*;
