//! Feed Items
//!
//! Records returned by the feed endpoint. The loader never assumes a
//! schema: items are string-keyed JSON maps and callers pick the fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::error::{FeedError, FeedResult};

/// A single record from the feed endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedItem(Map<String, Value>);

impl FeedItem {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw JSON value of a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field rendered as display text.
    /// Strings are returned as-is, numbers and booleans are formatted,
    /// `null`, arrays and objects read as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Like [`FeedItem::text`] but empty when the field is absent
    pub fn text_or_empty(&self, key: &str) -> String {
        self.text(key).unwrap_or_default()
    }

    /// Field required by the caller
    pub fn require(&self, key: &str) -> FeedResult<String> {
        self.text(key).ok_or_else(|| FeedError::MissingField(key.to_string()))
    }
}

impl From<Map<String, Value>> for FeedItem {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Decode a response body into a page of items.
///
/// A falsy body (`null`, `false`, `0`, `""`) is the end-of-feed marker and
/// decodes to an empty page, as does `[]`.
pub fn decode_page(body: Value) -> FeedResult<Vec<FeedItem>> {
    match body {
        Value::Null => Ok(Vec::new()),
        Value::Bool(false) => Ok(Vec::new()),
        Value::String(ref s) if s.is_empty() => Ok(Vec::new()),
        Value::Number(ref n) if n.as_f64() == Some(0.0) => Ok(Vec::new()),
        Value::Array(values) => values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::Object(fields) => Ok(FeedItem(fields)),
                other => Err(FeedError::Decode(format!(
                    "item {} is not an object: {}",
                    index, other
                ))),
            })
            .collect(),
        other => Err(FeedError::Decode(format!("expected an array of items, got {}", other))),
    }
}

/// Decode a raw response text
pub fn decode_page_str(body: &str) -> FeedResult<Vec<FeedItem>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    decode_page(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> FeedItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_text_formats_scalars() {
        let it = item(json!({"id": 43, "title": "T", "pinned": true, "tags": ["a"], "gone": null}));
        assert_eq!(it.text("id").as_deref(), Some("43"));
        assert_eq!(it.text("title").as_deref(), Some("T"));
        assert_eq!(it.text("pinned").as_deref(), Some("true"));
        assert_eq!(it.text("tags"), None);
        assert_eq!(it.text("gone"), None);
        assert_eq!(it.text_or_empty("missing"), "");
    }

    #[test]
    fn test_require_reports_field() {
        let it = item(json!({"title": "T"}));
        assert_eq!(it.require("id"), Err(FeedError::MissingField("id".to_string())));
    }

    #[test]
    fn test_falsy_bodies_are_end_of_feed() {
        for body in [json!(null), json!(false), json!(0), json!(""), json!([])] {
            assert!(decode_page(body).unwrap().is_empty());
        }
        assert!(decode_page_str("  ").unwrap().is_empty());
        assert!(decode_page_str("null").unwrap().is_empty());
    }

    #[test]
    fn test_decode_keeps_server_order() {
        let page = decode_page_str(r#"[{"id": 3}, {"id": 2}, {"id": 1}]"#).unwrap();
        let ids: Vec<_> = page.iter().map(|i| i.text_or_empty("id")).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_decode_rejects_non_objects() {
        assert!(matches!(decode_page(json!([{"id": 1}, 2])), Err(FeedError::Decode(_))));
        assert!(matches!(decode_page(json!({"id": 1})), Err(FeedError::Decode(_))));
        assert!(matches!(decode_page_str("{not json"), Err(FeedError::Decode(_))));
    }
}
