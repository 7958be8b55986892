//! Media reference mapping.
//!
//! A media field arrives either nested (`{data: {attributes: {url, ...}}}`)
//! or flattened (`{url, ...}`). This is the only module that looks at both
//! shapes; callers get a `MediaRef` or nothing.

use serde::Serialize;
use serde_json::Value;

use crate::normalize::json_path::{string_at, value_to_u32};

/// Image rendition to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Thumbnail,
    Small,
    Medium,
    Large,
    Original,
}

impl ImageFormat {
    /// Key under `formats`, `None` for the original upload.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ImageFormat::Thumbnail => Some("thumbnail"),
            ImageFormat::Small => Some("small"),
            ImageFormat::Medium => Some("medium"),
            ImageFormat::Large => Some("large"),
            ImageFormat::Original => None,
        }
    }
}

/// A resolved media object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaRef<'a> {
    attrs: &'a Value,
}

/// One rendition of a media object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaImage {
    pub url: String,
    pub alt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Presentation-ready image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    pub url: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

impl<'a> MediaRef<'a> {
    /// Nested form first, then flattened. `None` when neither carries a URL.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        if let Some(data) = value.get("data") {
            let data = match data {
                Value::Array(items) => items.first()?,
                other => other,
            };
            let attrs = data.get("attributes").unwrap_or(data);
            return Self::with_url(attrs);
        }
        Self::with_url(value)
    }

    fn with_url(attrs: &'a Value) -> Option<Self> {
        string_at(attrs, "url").map(|_| Self { attrs })
    }

    pub fn url(&self) -> String {
        string_at(self.attrs, "url").unwrap_or_default()
    }

    pub fn alt(&self) -> Option<String> {
        string_at(self.attrs, "alternativeText")
    }

    /// The requested rendition, or the original when it is absent.
    pub fn rendition(&self, format: ImageFormat) -> MediaImage {
        let source = format
            .key()
            .and_then(|key| self.attrs.get("formats")?.get(key))
            .filter(|r| string_at(r, "url").is_some())
            .unwrap_or(self.attrs);

        MediaImage {
            url: string_at(source, "url").unwrap_or_default(),
            alt: self.alt(),
            width: source.get("width").and_then(value_to_u32),
            height: source.get("height").and_then(value_to_u32),
        }
    }
}

impl MediaImage {
    /// Fill missing alt text and dimensions from `fallback`.
    pub fn into_props(self, fallback: &ImageProps) -> ImageProps {
        ImageProps {
            url: self.url,
            alt: self.alt.unwrap_or_else(|| fallback.alt.clone()),
            width: self.width.unwrap_or(fallback.width),
            height: self.height.unwrap_or(fallback.height),
        }
    }
}

/// URL of `media` in `format`, falling back to the original.
pub fn get_image_url(media: &Value, format: ImageFormat) -> Option<String> {
    MediaRef::from_value(media).map(|m| m.rendition(format).url)
}

/// URL, alt text and dimensions of `media` in `format`.
pub fn get_image_data(media: &Value, format: ImageFormat) -> Option<MediaImage> {
    MediaRef::from_value(media).map(|m| m.rendition(format))
}

/// Image props for `media`, or `fallback` when there is no media at all.
pub fn image_props_or(media: Option<&Value>, format: ImageFormat, fallback: &ImageProps) -> ImageProps {
    media
        .and_then(|m| get_image_data(m, format))
        .map(|image| image.into_props(fallback))
        .unwrap_or_else(|| fallback.clone())
}

/// Prefix relative upload paths with the CMS origin. Absolute URLs are unchanged.
pub fn absolute_media_url(base_url: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//") {
        return url.to_string();
    }
    if !url.starts_with("/uploads/") {
        return url.to_string();
    }
    format!("{}{}", base_url.trim_end_matches('/'), url)
}
