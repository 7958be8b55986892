//! Static fallback data.
//!
//! Hand-authored trips, regions and trip types, plus CMS-shaped records for
//! the sections that normally come from the CMS. Defined once, never mutated.

pub mod content;
pub mod regions;
pub mod trip_types;
pub mod trips;

pub use content::*;
pub use regions::*;
pub use trip_types::*;
pub use trips::*;
