//! Structured logging utilities.
//!
//! Provides context-aware logging with request_id and content type included
//! in every log message.

use std::fmt;

use uuid::Uuid;

/// Logging context for a single CMS request.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub request_id: String,
    pub content_type: Option<String>,
}

impl LogContext {
    /// Context with a fresh `req-xxxxxxxx` id.
    pub fn new() -> Self {
        Self::with_request_id(&format!("req-{}", &Uuid::new_v4().simple().to_string()[..8]))
    }

    pub fn with_request_id(request_id: &str) -> Self {
        Self {
            request_id: request_id.to_string(),
            content_type: None,
        }
    }

    pub fn for_content(&self, content_type: &str) -> Self {
        Self {
            request_id: self.request_id.clone(),
            content_type: Some(content_type.to_string()),
        }
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content_type {
            Some(ct) => write!(f, "[request={}] [content={}]", self.request_id, ct),
            None => write!(f, "[request={}]", self.request_id),
        }
    }
}

/// Install the `env_logger` backend (`Info` unless `RUST_LOG` says otherwise).
///
/// Safe to call repeatedly; only the first call installs a logger.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}

/// Log an info message with context.
#[macro_export]
macro_rules! log_info {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::info!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*) $(, $value)*)
        )
    };
}

/// Log a warning message with context.
#[macro_export]
macro_rules! log_warn {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::warn!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*) $(, $value)*)
        )
    };
}

/// Log an error message with context.
#[macro_export]
macro_rules! log_error {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::error!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*) $(, $value)*)
        )
    };
}

/// Log a debug message with context.
#[macro_export]
macro_rules! log_debug {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::debug!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*) $(, $value)*)
        )
    };
}
