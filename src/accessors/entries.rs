//! Entry accessors.
//!
//! Every accessor issues at most one request and logs under one request id.
//! The plain accessors degrade to `None` / an empty collection; the `try_*`
//! variants return the underlying `ContentFetchError` instead. Failures are
//! logged once by the client, at the level their kind deserves.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ContentFetchError;
use crate::logging::structured::LogContext;
use crate::normalize::entity::CmsEntity;
use crate::query::builder::{build_query, build_slug_query, QueryOptions};
use crate::transport::client::{CmsClient, CmsEnvelope};
use crate::transport::http::HttpTransport;

/// Entries of a collection request. `data` is empty, never absent, on failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    pub data: Vec<CmsEntity>,
    pub meta: Option<Value>,
}

/// `meta.pagination` of a collection response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

impl Collection {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn pagination(&self) -> Option<PaginationMeta> {
        let pagination = self.meta.as_ref()?.get("pagination")?;
        serde_json::from_value(pagination.clone()).ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CmsEntity> {
        self.data.iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a CmsEntity;
    type IntoIter = std::slice::Iter<'a, CmsEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

fn single_entity(envelope: &CmsEnvelope, ctx: &LogContext) -> Option<CmsEntity> {
    let data = match &envelope.data {
        Value::Null => return None,
        // A collection answer to a single-entry question: first wins.
        Value::Array(items) => items.first()?,
        other => other,
    };
    let entity = CmsEntity::from_value(data);
    if entity.is_none() {
        crate::log_warn!(ctx, "CMS_ENTITY_UNRECOGNIZED", shape = data_kind(data));
    }
    entity
}

fn collection_from(envelope: CmsEnvelope, ctx: &LogContext) -> Collection {
    let items = match envelope.data {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => vec![other],
    };

    let mut data = Vec::with_capacity(items.len());
    for item in &items {
        match CmsEntity::from_value(item) {
            Some(entity) => data.push(entity),
            None => {
                crate::log_warn!(ctx, "CMS_ENTITY_SKIPPED", shape = data_kind(item));
            }
        }
    }

    Collection {
        data,
        meta: envelope.meta,
    }
}

fn data_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<T: HttpTransport> CmsClient<T> {
    /// Fetch a single-instance content type such as `global`.
    pub fn try_get_singleton(
        &self,
        content_type: &str,
        options: &QueryOptions,
    ) -> Result<Option<CmsEntity>, ContentFetchError> {
        let ctx = LogContext::new().for_content(content_type);
        let envelope = self.try_fetch(content_type, &build_query(options), options.revalidate, &ctx)?;
        Ok(single_entity(&envelope, &ctx))
    }

    pub fn get_singleton(&self, content_type: &str, options: &QueryOptions) -> Option<CmsEntity> {
        self.try_get_singleton(content_type, options).unwrap_or_default()
    }

    /// Fetch a collection; each item is normalized independently.
    pub fn try_get_many(
        &self,
        content_type: &str,
        options: &QueryOptions,
    ) -> Result<Collection, ContentFetchError> {
        let ctx = LogContext::new().for_content(content_type);
        let envelope = self.try_fetch(content_type, &build_query(options), options.revalidate, &ctx)?;
        let collection = collection_from(envelope, &ctx);
        crate::log_debug!(ctx, "CMS_COLLECTION", entries = collection.len());
        Ok(collection)
    }

    pub fn get_many(&self, content_type: &str, options: &QueryOptions) -> Collection {
        self.try_get_many(content_type, options).unwrap_or_default()
    }

    /// Fetch the entry whose `slug` equals `slug`. Multiple matches: first wins.
    pub fn try_get_by_slug(
        &self,
        content_type: &str,
        slug: &str,
        options: &QueryOptions,
    ) -> Result<Option<CmsEntity>, ContentFetchError> {
        let ctx = LogContext::new().for_content(content_type);
        let query = build_slug_query(slug, options);
        let envelope = self.try_fetch(content_type, &query, options.revalidate, &ctx)?;
        let collection = collection_from(envelope, &ctx);
        if collection.len() > 1 {
            crate::log_warn!(ctx, "CMS_SLUG_AMBIGUOUS", slug = slug, matches = collection.len());
        }
        Ok(collection.data.into_iter().next())
    }

    pub fn get_by_slug(
        &self,
        content_type: &str,
        slug: &str,
        options: &QueryOptions,
    ) -> Option<CmsEntity> {
        self.try_get_by_slug(content_type, slug, options)
            .unwrap_or_default()
    }

    /// Create an entry in a collection, e.g. a newsletter signup.
    pub fn try_create_entry(
        &self,
        content_type: &str,
        data: Value,
    ) -> Result<Option<CmsEntity>, ContentFetchError> {
        let ctx = LogContext::new().for_content(content_type);
        let envelope = self.post(content_type, data, &ctx)?;
        Ok(single_entity(&envelope, &ctx))
    }

    pub fn create_entry(&self, content_type: &str, data: Value) -> Option<CmsEntity> {
        self.try_create_entry(content_type, data).unwrap_or_default()
    }
}
