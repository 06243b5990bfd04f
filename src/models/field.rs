//! Field model for lexicon schemas

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;
use std::fmt;

use super::ordered::OrderedMap;

/// Ordered property schemas of an object, keyed by field name
pub type Properties = OrderedMap<FieldDef>;

/// Read a list that may be `null` as an empty list
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Declared type of a field
///
/// Types outside the known vocabulary are kept verbatim in `Other` rather than
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    String,
    Integer,
    Boolean,
    Array,
    Object,
    Ref,
    Union,
    Blob,
    Other(String),
}

impl FieldType {
    /// Name as written in the lexicon document
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Object => "object",
            FieldType::Ref => "ref",
            FieldType::Union => "union",
            FieldType::Blob => "blob",
            FieldType::Other(name) => name,
        }
    }
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "string" => FieldType::String,
            "integer" => FieldType::Integer,
            "boolean" => FieldType::Boolean,
            "array" => FieldType::Array,
            "object" => FieldType::Object,
            "ref" => FieldType::Ref,
            "union" => FieldType::Union,
            "blob" => FieldType::Blob,
            _ => FieldType::Other(s),
        }
    }
}

impl From<FieldType> for String {
    fn from(t: FieldType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed description of a single field
///
/// Every member is optional; an absent member means the feature is not
/// present. Type-specific shape: `object` fields carry `properties` and
/// `required`, `array` fields carry `items`, `ref` fields carry `reference`
/// and `union` fields carry `refs`.
///
/// # Example
///
/// ```rust
/// use lexicon_explorer::models::{FieldDef, FieldType};
///
/// let field: FieldDef = serde_json::from_str(r#"{"type": "string", "format": "datetime"}"#).unwrap();
/// assert_eq!(field.field_type, Some(FieldType::String));
/// assert_eq!(field.type_label(), "string:datetime");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_graphemes: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    /// Maximum blob size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<Number>,
    /// Closed vocabulary; integer enums are allowed by the lexicon language
    #[serde(
        rename = "enum",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub enum_values: Vec<serde_json::Value>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub known_values: Vec<String>,
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<FieldDef>>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "OrderedMap::is_empty")]
    pub properties: Properties,
    /// Accepted MIME types for blobs
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub accept: Vec<String>,
}

impl FieldDef {
    /// Create a field of the given type with no constraints
    pub fn of_type(field_type: FieldType) -> Self {
        Self {
            field_type: Some(field_type),
            ..Self::default()
        }
    }

    pub fn is_type(&self, field_type: &FieldType) -> bool {
        self.field_type.as_ref() == Some(field_type)
    }

    /// Type badge text: `type:format` when a format is declared, else the bare type
    pub fn type_label(&self) -> String {
        let type_name = self
            .field_type
            .as_ref()
            .map(FieldType::as_str)
            .unwrap_or("unknown");
        match &self.format {
            Some(format) => format!("{}:{}", type_name, format),
            None => type_name.to_string(),
        }
    }

    /// Object with at least one declared property
    pub fn is_object_with_properties(&self) -> bool {
        self.is_type(&FieldType::Object) && !self.properties.is_empty()
    }

    /// Item schema of an array whose items are an object with properties
    pub fn object_items(&self) -> Option<&FieldDef> {
        if !self.is_type(&FieldType::Array) {
            return None;
        }
        self.items
            .as_deref()
            .filter(|items| items.is_object_with_properties())
    }

    /// Whether the field can be expanded in a field tree
    pub fn is_expandable(&self) -> bool {
        self.is_object_with_properties() || self.object_items().is_some()
    }

    /// Properties revealed by expanding this field, with their `required` list
    ///
    /// For arrays of objects this is the item schema, revealed once.
    pub fn child_schema(&self) -> Option<(&Properties, &[String])> {
        if self.is_object_with_properties() {
            return Some((&self.properties, &self.required));
        }
        self.object_items()
            .map(|items| (&items.properties, items.required.as_slice()))
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Reference strings held by the field: `ref` for ref fields, `refs` for unions
    pub fn references(&self) -> Vec<&str> {
        let mut out = Vec::new();
        if self.is_type(&FieldType::Ref)
            && let Some(reference) = &self.reference
        {
            out.push(reference.as_str());
        }
        if self.is_type(&FieldType::Union) {
            out.extend(self.refs.iter().map(String::as_str));
        }
        out
    }

    /// Enum values as display strings; string values are shown unquoted
    pub fn enum_labels(&self) -> Vec<String> {
        self.enum_values
            .iter()
            .map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(value: serde_json::Value) -> FieldDef {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let f = field(json!({"type": "cid-link"}));
        assert_eq!(f.field_type, Some(FieldType::Other("cid-link".to_string())));
        assert_eq!(f.type_label(), "cid-link");
    }

    #[test]
    fn test_type_label_with_and_without_format() {
        assert_eq!(field(json!({"type": "string"})).type_label(), "string");
        assert_eq!(
            field(json!({"type": "string", "format": "uri"})).type_label(),
            "string:uri"
        );
    }

    #[test]
    fn test_expandable_object_requires_properties() {
        assert!(!field(json!({"type": "object"})).is_expandable());
        assert!(!field(json!({"type": "object", "properties": {}})).is_expandable());
        assert!(field(json!({"type": "object", "properties": {"a": {"type": "string"}}})).is_expandable());
    }

    #[test]
    fn test_expandable_array_of_objects() {
        let scalar_items = field(json!({"type": "array", "items": {"type": "string"}}));
        assert!(!scalar_items.is_expandable());

        let object_items = field(json!({
            "type": "array",
            "items": {"type": "object", "required": ["id"], "properties": {"id": {"type": "string"}}}
        }));
        assert!(object_items.is_expandable());
        let (props, required) = object_items.child_schema().unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(required, ["id".to_string()]);
    }

    #[test]
    fn test_integer_enum_labels() {
        let f = field(json!({"type": "integer", "enum": [1, 2, 3]}));
        assert_eq!(f.enum_labels(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_references_by_type() {
        let r = field(json!({"type": "ref", "ref": "a.b#c"}));
        assert_eq!(r.references(), vec!["a.b#c"]);
        let u = field(json!({"type": "union", "refs": ["a.b.c#one", "a.b.c#two"]}));
        assert_eq!(u.references(), vec!["a.b.c#one", "a.b.c#two"]);
        let s = field(json!({"type": "string", "ref": "ignored"}));
        assert!(s.references().is_empty());
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let f = field(json!({
            "type": "object",
            "required": null,
            "enum": null,
            "knownValues": null,
            "refs": null,
            "accept": null,
            "properties": null
        }));
        assert!(f.required.is_empty());
        assert!(f.enum_values.is_empty());
        assert!(f.known_values.is_empty());
        assert!(f.refs.is_empty());
        assert!(f.accept.is_empty());
        assert!(f.properties.is_empty());
    }

    #[test]
    fn test_fractional_size_constraints_are_accepted() {
        let f = field(json!({
            "type": "blob",
            "maxSize": 1000000.0,
            "maxGraphemes": 64.0,
            "minLength": 1,
            "maxLength": 2.5
        }));
        assert_eq!(f.max_size.as_ref().and_then(Number::as_f64), Some(1000000.0));
        assert_eq!(f.max_graphemes.as_ref().and_then(Number::as_f64), Some(64.0));
        assert_eq!(f.min_length, Some(Number::from(1)));
        assert_eq!(f.max_length.as_ref().and_then(Number::as_f64), Some(2.5));
    }
}
