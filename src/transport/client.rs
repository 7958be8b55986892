//! CMS client.
//!
//! Composes request URLs and headers and applies the response policy:
//! - 2xx: parse the `{data, meta?}` envelope
//! - 404: content absent, never an error
//! - other statuses: structured upstream error
//! - no response at all: network failure

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::ContentConfig;
use crate::error::ContentFetchError;
use crate::logging::structured::LogContext;
use crate::normalize::entity::normalize_data;
use crate::transport::http::{
    CmsRequest, HttpTransport, Method, RawResponse, ReqwestTransport, TransportError,
};

/// Response envelope. `data` is `null` when content is absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CmsEnvelope {
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub meta: Option<Value>,
}

impl CmsEnvelope {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_null()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for one CMS instance.
#[derive(Debug, Clone)]
pub struct CmsClient<T = ReqwestTransport> {
    config: ContentConfig,
    transport: T,
}

impl CmsClient<ReqwestTransport> {
    /// Client over the blocking reqwest transport.
    pub fn from_config(config: ContentConfig) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(config.request_timeout)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpTransport> CmsClient<T> {
    pub fn with_transport(config: ContentConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `{api_root}/{endpoint}?{query}`; the `?` is omitted for an empty query.
    pub fn endpoint_url(&self, endpoint: &str, query: &str) -> String {
        let mut url = format!(
            "{}/{}",
            self.config.api_root(),
            endpoint.trim_start_matches('/')
        );
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        url
    }

    fn headers(&self, revalidate: Option<u64>, with_body: bool) -> Vec<(String, String)> {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if with_body {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = &self.config.api_token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        let max_age = revalidate.unwrap_or(self.config.default_revalidate_secs);
        headers.push(("Cache-Control".to_string(), format!("max-age={}", max_age)));
        headers
    }

    /// GET with the full error taxonomy. The `data` payload is normalized.
    pub fn try_fetch(
        &self,
        endpoint: &str,
        query: &str,
        revalidate: Option<u64>,
        ctx: &LogContext,
    ) -> Result<CmsEnvelope, ContentFetchError> {
        let request = CmsRequest {
            method: Method::Get,
            url: self.endpoint_url(endpoint, query),
            headers: self.headers(revalidate, false),
            body: None,
        };
        self.execute(&request, ctx)
    }

    /// GET where a 404 or a network failure yields an empty envelope.
    ///
    /// Upstream and parse errors are still returned.
    pub fn fetch(
        &self,
        endpoint: &str,
        query: &str,
        revalidate: Option<u64>,
        ctx: &LogContext,
    ) -> Result<CmsEnvelope, ContentFetchError> {
        match self.try_fetch(endpoint, query, revalidate, ctx) {
            Err(e) if e.is_absent() => Ok(CmsEnvelope::empty()),
            other => other,
        }
    }

    /// POST `{"data": data}` to a collection endpoint.
    pub fn post(
        &self,
        endpoint: &str,
        data: Value,
        ctx: &LogContext,
    ) -> Result<CmsEnvelope, ContentFetchError> {
        if self.config.api_token.is_none() {
            crate::log_warn!(
                ctx,
                "CMS_WRITE_WITHOUT_TOKEN",
                endpoint = endpoint
            );
        }
        let request = CmsRequest {
            method: Method::Post,
            url: self.endpoint_url(endpoint, ""),
            headers: self.headers(Some(0), true),
            body: Some(json!({ "data": data })),
        };
        self.execute(&request, ctx)
    }

    fn execute(
        &self,
        request: &CmsRequest,
        ctx: &LogContext,
    ) -> Result<CmsEnvelope, ContentFetchError> {
        crate::log_debug!(
            ctx,
            "CMS_REQUEST",
            method = request.method.as_str(),
            url = &request.url
        );

        let response = match self.transport.send(request) {
            Ok(response) => response,
            Err(e) => {
                crate::log_warn!(ctx, "CMS_NETWORK_FAILURE", url = &request.url, error = e.to_string());
                return Err(ContentFetchError::Network(e.to_string()));
            }
        };

        if response.is_success() {
            let envelope: CmsEnvelope = serde_json::from_str(&response.body).map_err(|e| {
                crate::log_error!(ctx, "CMS_PARSE_FAILED", url = &request.url, error = e.to_string());
                ContentFetchError::Parse(e.to_string())
            })?;
            crate::log_debug!(ctx, "CMS_RESPONSE", status = response.status, empty = envelope.is_empty());
            return Ok(CmsEnvelope {
                data: normalize_data(envelope.data),
                meta: envelope.meta,
            });
        }

        if response.status == 404 {
            crate::log_debug!(ctx, "CMS_NOT_FOUND", url = &request.url);
            return Err(ContentFetchError::NotFound);
        }

        let error = upstream_error(&response);
        crate::log_error!(ctx, "CMS_UPSTREAM_ERROR", url = &request.url, error = error.to_string());
        Err(error)
    }
}

/// Structured error from the body, or one synthesized from the status line.
fn upstream_error(response: &RawResponse) -> ContentFetchError {
    match serde_json::from_str::<ErrorEnvelope>(&response.body) {
        Ok(ErrorEnvelope { error }) => ContentFetchError::Upstream {
            status: error.status.unwrap_or(response.status),
            name: error.name.unwrap_or_else(|| response.status_text.clone()),
            message: error.message.unwrap_or_else(|| response.status_text.clone()),
        },
        Err(_) => ContentFetchError::Upstream {
            status: response.status,
            name: response.status_text.clone(),
            message: format!("{} {}", response.status, response.status_text),
        },
    }
}
