//! Domain items: one upstream extraction row tagged with its origin

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row from an upstream extraction, tagged with the file or table it
/// came from.
///
/// `source` is required: it labels the item in the provenance trail, so an
/// item without one is a parse error. `data` may be omitted and then reads
/// as an item with no fields. `data` keeps the upstream key order so the
/// item can be echoed back into the merged report unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainItem {
    pub source: String,
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl DomainItem {
    /// Create an item with no fields
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            data: Map::new(),
        }
    }

    /// Builder: add a field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Whether the item carries `key` at all, regardless of its value
    pub fn has_field(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Field value rendered as a string, if the key is present
    pub fn field(&self, key: &str) -> Option<String> {
        self.data.get(key).map(render_value)
    }

    /// Field value rendered as a string, `""` when absent
    pub fn field_or_empty(&self, key: &str) -> String {
        self.field(key).unwrap_or_default()
    }

    /// Field value only when it is a JSON string.
    ///
    /// Used for identity fields (`Project`, `PROJECT`, `IP`), which never
    /// match on numbers or booleans.
    pub fn text_field(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Last `/`-separated segment of `source`
    pub fn source_basename(&self) -> &str {
        self.source.rsplit('/').next().unwrap_or(&self.source)
    }
}

/// Render a JSON value the way it appears in summary cells.
///
/// Strings are verbatim, `null` is empty, everything else is its compact
/// JSON text.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_source_and_data() {
        let item: DomainItem = serde_json::from_value(json!({
            "source": "dv_tasks.xlsx",
            "data": {"Project": "PRJ_A", "Index": 7}
        }))
        .unwrap();

        assert_eq!(item.source, "dv_tasks.xlsx");
        assert_eq!(item.text_field("Project"), Some("PRJ_A"));
        assert_eq!(item.field("Index").as_deref(), Some("7"));
    }

    #[test]
    fn missing_data_defaults_to_empty() {
        let item: DomainItem = serde_json::from_value(json!({"source": "x.json"})).unwrap();
        assert!(item.data.is_empty());
        assert_eq!(item.field_or_empty("anything"), "");
    }

    #[test]
    fn missing_source_is_rejected() {
        let result: Result<DomainItem, _> =
            serde_json::from_value(json!({"data": {"Project": "PRJ_A"}}));
        assert!(result.is_err());
    }

    #[test]
    fn data_preserves_upstream_key_order() {
        let item: DomainItem = serde_json::from_str(
            r#"{"source":"s","data":{"Zeta":"1","Alpha":"2","Mid":"3"}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = item.data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn text_field_ignores_non_strings() {
        let item = DomainItem::new("s").with_field("Project", 42);
        assert_eq!(item.text_field("Project"), None);
        assert_eq!(item.field("Project").as_deref(), Some("42"));
    }

    #[test]
    fn render_value_variants() {
        assert_eq!(render_value(&json!("abc")), "abc");
        assert_eq!(render_value(&json!(null)), "");
        assert_eq!(render_value(&json!(3)), "3");
        assert_eq!(render_value(&json!(92.5)), "92.5");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!(["a", "b"])), r#"["a","b"]"#);
    }

    #[test]
    fn source_basename_strips_directories() {
        assert_eq!(
            DomainItem::new("data/nx/nx-domain-to-be-added.json").source_basename(),
            "nx-domain-to-be-added.json"
        );
        assert_eq!(DomainItem::new("plain.xlsx").source_basename(), "plain.xlsx");
        assert_eq!(DomainItem::new("").source_basename(), "");
    }
}
