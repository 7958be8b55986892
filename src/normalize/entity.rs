//! CMS entity normalization.
//!
//! Newer CMS versions return entities with their fields flattened next to
//! `id` / `documentId`; older versions nest them under `attributes`. Everything
//! downstream of this module sees only the nested form.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::normalize::json_path::{resolve_json_path, value_to_int};

pub const ID_KEY: &str = "id";
pub const DOCUMENT_ID_KEY: &str = "documentId";
pub const ATTRIBUTES_KEY: &str = "attributes";

/// Nest the fields of a flattened entity under `attributes`.
///
/// Only objects with `id` and `documentId` and no `attributes` key are
/// rewritten. Anything else, including already-normalized entities and
/// non-entities, is returned unchanged, so the function is idempotent.
pub fn normalize_entity(value: Value) -> Value {
    match value {
        Value::Object(mut obj) if is_flattened_entity(&obj) => {
            let mut out = Map::new();
            if let Some(id) = obj.remove(ID_KEY) {
                out.insert(ID_KEY.to_string(), id);
            }
            if let Some(document_id) = obj.remove(DOCUMENT_ID_KEY) {
                out.insert(DOCUMENT_ID_KEY.to_string(), document_id);
            }
            out.insert(ATTRIBUTES_KEY.to_string(), Value::Object(obj));
            Value::Object(out)
        }
        other => other,
    }
}

/// Normalize a response `data` payload: a single entity or a list of them.
pub fn normalize_data(data: Value) -> Value {
    match data {
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_entity).collect()),
        other => normalize_entity(other),
    }
}

fn is_flattened_entity(obj: &Map<String, Value>) -> bool {
    obj.contains_key(ID_KEY) && obj.contains_key(DOCUMENT_ID_KEY) && !obj.contains_key(ATTRIBUTES_KEY)
}

/// A normalized CMS record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsEntity {
    pub id: i64,
    /// Empty for legacy nested entities that predate document ids.
    pub document_id: String,
    pub attributes: Map<String, Value>,
}

impl CmsEntity {
    /// Typed view of a raw or normalized entity. Non-entities yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let normalized = normalize_entity(value.clone());
        let obj = normalized.as_object()?;

        let id = obj.get(ID_KEY).and_then(value_to_int)?;
        let document_id = obj
            .get(DOCUMENT_ID_KEY)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let attributes = obj.get(ATTRIBUTES_KEY)?.as_object()?.clone();

        Some(Self {
            id,
            document_id,
            attributes,
        })
    }

    /// Attribute lookup by dot path, e.g. `"image.formats.medium.url"`.
    pub fn field(&self, path: &str) -> Option<&Value> {
        let (head, rest) = path.split_once('.').unwrap_or((path, ""));
        resolve_json_path(self.attributes.get(head)?, rest)
    }

    pub fn slug(&self) -> Option<&str> {
        self.attributes.get("slug").and_then(|v| v.as_str())
    }

    /// The attributes as a JSON object, the input shape of the mappers.
    pub fn attributes_value(&self) -> Value {
        Value::Object(self.attributes.clone())
    }

    /// Back to the normalized JSON shape.
    pub fn into_value(self) -> Value {
        let mut out = Map::new();
        out.insert(ID_KEY.to_string(), Value::from(self.id));
        out.insert(DOCUMENT_ID_KEY.to_string(), Value::String(self.document_id));
        out.insert(ATTRIBUTES_KEY.to_string(), Value::Object(self.attributes));
        Value::Object(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_flattened_entity_is_nested() {
        let raw = json!({
            "id": 3,
            "documentId": "abc123",
            "siteName": "Reizen naar Turkije",
            "footer": {"copyright": "2026"}
        });

        let normalized = normalize_entity(raw);
        assert_eq!(
            normalized,
            json!({
                "id": 3,
                "documentId": "abc123",
                "attributes": {
                    "siteName": "Reizen naar Turkije",
                    "footer": {"copyright": "2026"}
                }
            })
        );
    }

    #[test]
    fn test_already_normalized_passes_through() {
        let nested = json!({
            "id": 1,
            "documentId": "d1",
            "attributes": {"title": "x"}
        });
        assert_eq!(normalize_entity(nested.clone()), nested);
    }

    #[test]
    fn test_non_entities_pass_through() {
        let missing_id = json!({"documentId": "d1", "title": "x"});
        assert_eq!(normalize_entity(missing_id.clone()), missing_id);
        assert_eq!(normalize_entity(Value::Null), Value::Null);
        assert_eq!(normalize_entity(json!("text")), json!("text"));
    }

    #[test]
    fn test_normalize_data_array() {
        let data = json!([
            {"id": 1, "documentId": "a", "slug": "one"},
            {"id": 2, "documentId": "b", "attributes": {"slug": "two"}}
        ]);
        let normalized = normalize_data(data);
        assert_eq!(normalized[0]["attributes"]["slug"], json!("one"));
        assert_eq!(normalized[1]["attributes"]["slug"], json!("two"));
    }

    #[test]
    fn test_entity_from_flattened_value() {
        let raw = json!({
            "id": 7,
            "documentId": "trip-7",
            "slug": "istanbul-citytrip",
            "image": {"url": "/uploads/ist.jpg"}
        });
        let entity = CmsEntity::from_value(&raw).unwrap();
        assert_eq!(entity.id, 7);
        assert_eq!(entity.document_id, "trip-7");
        assert_eq!(entity.slug(), Some("istanbul-citytrip"));
        assert_eq!(entity.field("image.url"), Some(&json!("/uploads/ist.jpg")));
        assert_eq!(entity.field("image.missing"), None);
    }

    #[test]
    fn test_entity_from_legacy_value() {
        let legacy = json!({"id": "12", "attributes": {"title": "Oud"}});
        let entity = CmsEntity::from_value(&legacy).unwrap();
        assert_eq!(entity.id, 12);
        assert_eq!(entity.document_id, "");
        assert_eq!(entity.attributes_value(), json!({"title": "Oud"}));
    }

    #[test]
    fn test_entity_rejects_non_entities() {
        assert!(CmsEntity::from_value(&json!({"title": "x"})).is_none());
        assert!(CmsEntity::from_value(&json!({"id": 1, "documentId": "d", "attributes": 5})).is_none());
        assert!(CmsEntity::from_value(&Value::Null).is_none());
    }

    #[test]
    fn test_entity_into_value_is_normalized() {
        let raw = json!({"id": 1, "documentId": "d", "title": "x"});
        let entity = CmsEntity::from_value(&raw).unwrap();
        assert_eq!(entity.into_value(), normalize_entity(raw));
    }

    fn field_map() -> impl Strategy<Value = Map<String, Value>> {
        prop::collection::btree_map("[a-z][a-zA-Z0-9]{0,8}", "[ -~]{0,16}", 0..6).prop_map(
            |fields| {
                fields
                    .into_iter()
                    .filter(|(k, _)| k != ID_KEY && k != ATTRIBUTES_KEY)
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn prop_normalize_nests_and_is_idempotent(
            id in any::<i64>(),
            document_id in "[a-z0-9]{1,24}",
            fields in field_map(),
        ) {
            let mut raw = fields.clone();
            raw.insert(ID_KEY.to_string(), Value::from(id));
            raw.insert(DOCUMENT_ID_KEY.to_string(), Value::String(document_id.clone()));

            let once = normalize_entity(Value::Object(raw));
            let mut expected = Map::new();
            expected.insert(ID_KEY.to_string(), Value::from(id));
            expected.insert(DOCUMENT_ID_KEY.to_string(), Value::String(document_id));
            expected.insert(ATTRIBUTES_KEY.to_string(), Value::Object(fields));
            prop_assert_eq!(&once, &Value::Object(expected));

            let twice = normalize_entity(once.clone());
            prop_assert_eq!(twice, once);
        }
    }
}
