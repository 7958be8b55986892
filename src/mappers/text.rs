//! Rich text to plain text.
//!
//! This is not an HTML sanitizer: tags are dropped and only six entities
//! are decoded (`&amp; &lt; &gt; &quot; &#39; &nbsp;`). Any other entity is
//! left as literal text.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::Value;

lazy_static! {
    /// Tags that end a block of text; replaced by a space.
    static ref BLOCK_BREAK_PATTERN: Regex =
        Regex::new(r"(?i)<br\s*/?>|</(p|div|li|h[1-6]|ul|ol|blockquote)\s*>").unwrap();

    static ref TAG_PATTERN: Regex = Regex::new(r"<[^>]*>").unwrap();

    static ref ENTITY_PATTERN: Regex = Regex::new(r"&(amp|lt|gt|quot|#39|nbsp);").unwrap();

    static ref WHITESPACE_PATTERN: Regex = Regex::new(r"\s+").unwrap();
}

/// Strip tags, decode the supported entities and collapse whitespace.
pub fn strip_html(input: &str) -> String {
    let spaced = BLOCK_BREAK_PATTERN.replace_all(input, " ");
    let without_tags = TAG_PATTERN.replace_all(&spaced, "");
    // One pass, so "&amp;lt;" becomes "&lt;" and not "<".
    let decoded = ENTITY_PATTERN.replace_all(&without_tags, |caps: &Captures<'_>| {
        let replacement = match &caps[1] {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            "#39" => "'",
            _ => " ",
        };
        replacement.to_string()
    });
    WHITESPACE_PATTERN
        .replace_all(decoded.trim(), " ")
        .trim()
        .to_string()
}

/// Plain text from a rich-text field.
///
/// Accepts an HTML/markdown string or a block-structured document
/// (`[{type, children: [{text}]}]`). Blank results yield `None`.
pub fn plain_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => strip_html(s),
        Value::Array(blocks) => {
            let mut parts = Vec::new();
            for block in blocks {
                collect_text(block, &mut parts);
            }
            WHITESPACE_PATTERN
                .replace_all(parts.join(" ").trim(), " ")
                .to_string()
        }
        _ => return None,
    };
    Some(text).filter(|t| !t.is_empty())
}

fn collect_text(node: &Value, parts: &mut Vec<String>) {
    if let Some(text) = node.get("text").and_then(|t| t.as_str()) {
        parts.push(text.to_string());
    }
    if let Some(children) = node.get("children").and_then(|c| c.as_array()) {
        let mut inline = Vec::new();
        for child in children {
            collect_text(child, &mut inline);
        }
        if !inline.is_empty() {
            parts.push(inline.concat());
        }
    }
}
