//! Schema-less analysis payload.
//!
//! The analysis arrives as an arbitrary JSON tree. Nothing is validated up
//! front; each rule looks up the one field it reads and treats anything
//! unexpected as absent. Object key order is preserved (serde_json is built
//! with `preserve_order`), which keeps first-seen tie-breaks reproducible.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Combined output of the imagery analysis collaborators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(Map<String, Value>);

impl AnalysisResult {
    /// Wrap a JSON value. Anything other than an object yields an empty payload.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw top-level section, if present.
    pub fn section(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Top-level section if it is an object.
    pub fn object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.section(key).and_then(Value::as_object)
    }

    /// Top-level section if it is an array; anything else reads as empty.
    pub fn list(&self, key: &str) -> &[Value] {
        self.section(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `section.field` looked up through an object section.
    pub fn field(&self, section: &str, field: &str) -> Field<'_> {
        Field::of(self.object(section).and_then(|m| m.get(field)))
    }

    /// Length of the array at `section.field`, 0 if it is not an array.
    pub fn count(&self, section: &str, field: &str) -> usize {
        self.object(section)
            .and_then(|m| m.get(field))
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

/// A field that may be a string, a nested object, or anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Missing,
    Scalar(&'a str),
    Nested(&'a Map<String, Value>),
}

impl<'a> Field<'a> {
    /// Classify a looked-up value. Null, numbers, booleans and arrays are
    /// treated as missing.
    pub fn of(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::String(s)) => Field::Scalar(s),
            Some(Value::Object(m)) => Field::Nested(m),
            _ => Field::Missing,
        }
    }

    /// Canonical lower-case text used by the rules. A nested object
    /// contributes its `description` string.
    pub fn normalized(&self) -> Option<String> {
        match self {
            Field::Missing => None,
            Field::Scalar(s) => Some(s.to_lowercase()),
            Field::Nested(m) => m
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_lowercase),
        }
    }
}

/// Human-readable text for a JSON value: strings are unquoted, everything
/// else is compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Case-insensitive check whether any list entry mentions one of `needles`.
pub fn any_mentions(items: &[Value], needles: &[&str]) -> bool {
    items.iter().any(|item| {
        let text = display_value(item).to_lowercase();
        needles.iter().any(|n| text.contains(n))
    })
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn analysis(v: Value) -> AnalysisResult {
        AnalysisResult::from_value(v)
    }

    #[test]
    fn field_normalizes_scalar_and_nested() {
        let a = analysis(json!({
            "vegetation": {"density": "Dense"},
            "terrain": {"type": {"description": "Steep Slopes"}},
        }));
        assert_eq!(a.field("vegetation", "density").normalized().as_deref(), Some("dense"));
        assert_eq!(a.field("terrain", "type").normalized().as_deref(), Some("steep slopes"));
    }

    #[test]
    fn field_missing_for_wrong_shapes() {
        let a = analysis(json!({
            "vegetation": null,
            "terrain": "flat",
            "objects": {"buildings": 3},
        }));
        assert_eq!(a.field("vegetation", "density"), Field::Missing);
        assert_eq!(a.field("terrain", "type"), Field::Missing);
        assert_eq!(a.field("objects", "buildings"), Field::Missing);
        assert_eq!(a.field("absent", "x").normalized(), None);
    }

    #[test]
    fn nested_without_description_has_no_text() {
        let a = analysis(json!({"vegetation": {"density": {"level": 3}}}));
        assert!(matches!(a.field("vegetation", "density"), Field::Nested(_)));
        assert_eq!(a.field("vegetation", "density").normalized(), None);
    }

    #[test]
    fn count_and_list_tolerate_non_arrays() {
        let a = analysis(json!({
            "objects": {"buildings": [{}, {}], "other_structures": "none"},
            "water_bodies": "Stream",
        }));
        assert_eq!(a.count("objects", "buildings"), 2);
        assert_eq!(a.count("objects", "other_structures"), 0);
        assert_eq!(a.count("missing", "buildings"), 0);
        assert!(a.list("water_bodies").is_empty());
    }

    #[test]
    fn non_object_payload_is_empty() {
        assert!(analysis(json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn display_and_mentions() {
        assert_eq!(display_value(&json!("River")), "River");
        assert_eq!(display_value(&json!({"description": "Mixed"})), r#"{"description":"Mixed"}"#);
        assert_eq!(display_value(&Value::Null), "null");
        let items = vec![json!("Small STREAM"), json!({"kind": "pond"})];
        assert!(any_mentions(&items, &["stream"]));
        assert!(any_mentions(&items, &["pond"]));
        assert!(!any_mentions(&items, &["river"]));
    }
}
