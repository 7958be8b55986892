//! View-model mapping module.
//!
//! Pure functions from normalized CMS blocks to presentation props:
//! - `hero`, `about`, `global` - section mappers
//! - `media` - nested/flattened media resolution
//! - `icon` - CMS icon enum validation
//! - `text` - rich text to plain text
//!
//! Mappers never fail: every missing or malformed field gets a default.

pub mod about;
pub mod global;
pub mod hero;
pub mod icon;
pub mod media;
pub mod text;

pub use about::*;
pub use global::*;
pub use hero::*;
pub use icon::*;
pub use media::*;
pub use text::*;
