//! Travelsite Content - CMS content retrieval for a Turkey travel site
//!
//! This crate fetches page content from a headless CMS and turns it into
//! presentation props. The implementation prioritizes:
//!
//! 1. **Availability** - Pages always render; CMS failures degrade to defaults
//! 2. **Logging** - Every fetch decision logged with request context
//! 3. **Shape stability** - Both CMS entity shapes normalize to one form
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `normalize` - Entity normalization and JSON path access
//! - `query` - Query string construction (fields, populate, filters, ...)
//! - `transport` - HTTP transport seam and the CMS client
//! - `accessors` - Singleton, collection and by-slug lookups
//! - `mappers` - Hero, about, global, media and icon mapping
//! - `fallback` - Static trips, regions, trip types and section records
//! - `provider` - CMS-or-static switch for page sections
//! - `config` - Environment-driven configuration
//! - `logging` - Structured logging with request context

pub mod accessors;
pub mod config;
pub mod error;
pub mod fallback;
pub mod logging;
pub mod mappers;
pub mod normalize;
pub mod provider;
pub mod query;
pub mod transport;

pub use accessors::{Collection, PaginationMeta};
pub use config::{ConfigError, ContentConfig};
pub use error::ContentFetchError;
pub use logging::{init_logger, LogContext};
pub use normalize::{normalize_data, normalize_entity, CmsEntity};
pub use provider::{ContentProvider, Origin};
pub use query::{
    build_query, build_slug_query, Filter, FilterOperator, Pagination, Populate, PopulateNode,
    QueryOptions,
};
pub use transport::{CmsClient, CmsEnvelope, HttpTransport, ReqwestTransport};
