//! Definition model: the named entries of a lexicon document
//!
//! Raw definitions differ in shape by `type`. They are read into a closed sum
//! type so that every consumer dispatches on the kind exactly once.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fmt;

use super::field::{Properties, null_as_empty};

static NO_PROPERTIES: Lazy<Properties> = Lazy::new(Properties::new);

/// A `{required, properties}` pair
///
/// `properties` is `None` when the key is absent from the document, which the
/// normalizer treats differently from an empty map.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchemaObject {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub required: Vec<String>,
    #[serde(default)]
    pub properties: Option<Properties>,
}

impl SchemaObject {
    /// Declared properties, empty when absent
    pub fn properties(&self) -> &Properties {
        self.properties.as_ref().unwrap_or(&*NO_PROPERTIES)
    }

    pub fn has_properties(&self) -> bool {
        self.properties.is_some()
    }
}

/// Input, output or message body of an RPC-style definition
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schema: Option<SchemaObject>,
}

impl Body {
    /// Body schema, only when it declares a `properties` map
    pub fn object_schema(&self) -> Option<&SchemaObject> {
        self.schema.as_ref().filter(|s| s.has_properties())
    }
}

/// Data record definition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDef {
    pub description: Option<String>,
    /// Record key strategy (e.g. `tid`, `literal:self`)
    pub key: Option<String>,
    pub record: Option<SchemaObject>,
    /// Properties declared directly on the definition
    pub inline: SchemaObject,
}

impl RecordDef {
    /// Record schema, falling back to the definition's own properties
    pub fn schema(&self) -> &SchemaObject {
        self.record.as_ref().unwrap_or(&self.inline)
    }
}

/// Read-only RPC endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryDef {
    pub description: Option<String>,
    pub parameters: Option<SchemaObject>,
    pub output: Option<Body>,
}

/// Mutating RPC endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcedureDef {
    pub description: Option<String>,
    pub parameters: Option<SchemaObject>,
    pub input: Option<Body>,
    pub output: Option<Body>,
}

/// Event stream endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionDef {
    pub description: Option<String>,
    pub message: Option<Body>,
}

/// Reusable type fragment, and any definition of a kind not listed above
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectDef {
    /// Declared `type`, if any (`object`, `token`, `string`, ...)
    pub declared_type: Option<String>,
    pub description: Option<String>,
    pub schema: SchemaObject,
}

/// Kind discriminator of a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    Record,
    Query,
    Procedure,
    Subscription,
    Object,
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DefinitionKind::Record => "record",
            DefinitionKind::Query => "query",
            DefinitionKind::Procedure => "procedure",
            DefinitionKind::Subscription => "subscription",
            DefinitionKind::Object => "object",
        };
        f.write_str(s)
    }
}

/// A named schema entry of a lexicon document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawDefinition")]
pub enum Definition {
    Record(RecordDef),
    Query(QueryDef),
    Procedure(ProcedureDef),
    Subscription(SubscriptionDef),
    Object(ObjectDef),
}

impl Definition {
    pub fn kind(&self) -> DefinitionKind {
        match self {
            Definition::Record(_) => DefinitionKind::Record,
            Definition::Query(_) => DefinitionKind::Query,
            Definition::Procedure(_) => DefinitionKind::Procedure,
            Definition::Subscription(_) => DefinitionKind::Subscription,
            Definition::Object(_) => DefinitionKind::Object,
        }
    }

    /// Kind label for headers; object definitions show their declared type
    pub fn kind_label(&self) -> Option<&str> {
        match self {
            Definition::Record(_) => Some("record"),
            Definition::Query(_) => Some("query"),
            Definition::Procedure(_) => Some("procedure"),
            Definition::Subscription(_) => Some("subscription"),
            Definition::Object(def) => def.declared_type.as_deref(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Definition::Record(def) => def.description.as_deref(),
            Definition::Query(def) => def.description.as_deref(),
            Definition::Procedure(def) => def.description.as_deref(),
            Definition::Subscription(def) => def.description.as_deref(),
            Definition::Object(def) => def.description.as_deref(),
        }
    }

    /// Record key strategy; `None` for non-record definitions
    pub fn record_key(&self) -> Option<&str> {
        match self {
            Definition::Record(def) => def.key.as_deref(),
            _ => None,
        }
    }
}

/// Definition as it appears on the wire, before dispatch by kind
#[derive(Debug, Default, Deserialize)]
struct RawDefinition {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    record: Option<SchemaObject>,
    #[serde(default, deserialize_with = "null_as_empty")]
    required: Vec<String>,
    #[serde(default)]
    properties: Option<Properties>,
    #[serde(default)]
    parameters: Option<SchemaObject>,
    #[serde(default)]
    input: Option<Body>,
    #[serde(default)]
    output: Option<Body>,
    #[serde(default)]
    message: Option<Body>,
}

impl From<RawDefinition> for Definition {
    fn from(raw: RawDefinition) -> Self {
        let inline = SchemaObject {
            required: raw.required,
            properties: raw.properties,
        };
        match raw.kind.as_deref() {
            Some("record") => Definition::Record(RecordDef {
                description: raw.description,
                key: raw.key,
                record: raw.record,
                inline,
            }),
            Some("query") => Definition::Query(QueryDef {
                description: raw.description,
                parameters: raw.parameters,
                output: raw.output,
            }),
            Some("procedure") => Definition::Procedure(ProcedureDef {
                description: raw.description,
                parameters: raw.parameters,
                input: raw.input,
                output: raw.output,
            }),
            Some("subscription") => Definition::Subscription(SubscriptionDef {
                description: raw.description,
                message: raw.message,
            }),
            _ => Definition::Object(ObjectDef {
                declared_type: raw.kind,
                description: raw.description,
                schema: inline,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition(value: serde_json::Value) -> Definition {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_dispatch_by_kind() {
        assert_eq!(definition(json!({"type": "record"})).kind(), DefinitionKind::Record);
        assert_eq!(definition(json!({"type": "query"})).kind(), DefinitionKind::Query);
        assert_eq!(definition(json!({"type": "procedure"})).kind(), DefinitionKind::Procedure);
        assert_eq!(
            definition(json!({"type": "subscription"})).kind(),
            DefinitionKind::Subscription
        );
        assert_eq!(definition(json!({})).kind(), DefinitionKind::Object);
        assert_eq!(definition(json!({"type": "token"})).kind(), DefinitionKind::Object);
    }

    #[test]
    fn test_record_falls_back_to_inline_properties() {
        let def = definition(json!({
            "type": "record",
            "required": ["a"],
            "properties": {"a": {"type": "string"}}
        }));
        let Definition::Record(record) = def else {
            panic!("Expected record definition");
        };
        assert!(record.record.is_none());
        assert_eq!(record.schema().properties().len(), 1);
        assert_eq!(record.schema().required, vec!["a".to_string()]);
    }

    #[test]
    fn test_record_key_and_description() {
        let def = definition(json!({
            "type": "record",
            "key": "tid",
            "description": "A site",
            "record": {"type": "object", "properties": {}}
        }));
        assert_eq!(def.record_key(), Some("tid"));
        assert_eq!(def.description(), Some("A site"));
        assert_eq!(def.kind_label(), Some("record"));
    }

    #[test]
    fn test_body_without_properties_has_no_object_schema() {
        let body: Body = serde_json::from_value(json!({
            "encoding": "application/json",
            "schema": {"type": "ref", "ref": "#view"}
        }))
        .unwrap();
        assert!(body.object_schema().is_none());
    }

    #[test]
    fn test_object_kind_keeps_declared_type() {
        let def = definition(json!({"type": "string", "knownValues": ["a"]}));
        assert_eq!(def.kind_label(), Some("string"));
        let untyped = definition(json!({"properties": {}}));
        assert_eq!(untyped.kind_label(), None);
    }

    #[test]
    fn test_null_required_reads_as_empty() {
        let def = definition(json!({
            "type": "record",
            "record": {"required": null, "properties": {"a": {"type": "string"}}}
        }));
        let Definition::Record(record) = def else {
            panic!("Expected record definition");
        };
        assert!(record.schema().required.is_empty());
        let object = definition(json!({"required": null, "properties": {"a": {}}}));
        assert_eq!(object.kind(), DefinitionKind::Object);
    }
}
