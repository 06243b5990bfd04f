//! Definition normalization
//!
//! Turns any definition into an ordered list of labeled property sections.
//! Sections are borrowed from the definition; normalizing never allocates
//! copies of the schema and has no side effects, so it can be re-run on every
//! navigation and every toggle.

use serde::Serialize;
use std::fmt;

use crate::models::{Body, Definition, Properties, SchemaObject};

/// Label of a normalized section
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SectionLabel {
    Record,
    Parameters,
    Input,
    Output,
    Message,
    Properties,
}

impl SectionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionLabel::Record => "Record",
            SectionLabel::Parameters => "Parameters",
            SectionLabel::Input => "Input",
            SectionLabel::Output => "Output",
            SectionLabel::Message => "Message",
            SectionLabel::Properties => "Properties",
        }
    }

    /// Parse a label as written by [`SectionLabel::as_str`]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Record" => Some(SectionLabel::Record),
            "Parameters" => Some(SectionLabel::Parameters),
            "Input" => Some(SectionLabel::Input),
            "Output" => Some(SectionLabel::Output),
            "Message" => Some(SectionLabel::Message),
            "Properties" => Some(SectionLabel::Properties),
            _ => None,
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(label, properties, required)` triple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemaSection<'a> {
    pub label: SectionLabel,
    pub properties: &'a Properties,
    pub required: &'a [String],
}

impl<'a> SchemaSection<'a> {
    fn from_schema(label: SectionLabel, schema: &'a SchemaObject) -> Self {
        Self {
            label,
            properties: schema.properties(),
            required: &schema.required,
        }
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

fn present(label: SectionLabel, schema: Option<&SchemaObject>) -> Option<SchemaSection<'_>> {
    schema
        .filter(|s| s.has_properties())
        .map(|s| SchemaSection::from_schema(label, s))
}

fn body(label: SectionLabel, body: Option<&Body>) -> Option<SchemaSection<'_>> {
    present(label, body.and_then(Body::object_schema))
}

/// Normalize a definition into its labeled property sections
///
/// - record: `Record` (from `record`, else the definition's own properties)
/// - query: `Parameters`, `Output`
/// - procedure: `Parameters`, `Input`, `Output`
/// - subscription: `Message`
/// - anything else: `Properties`
///
/// RPC sections appear only when their schema declares a `properties` map;
/// absent sections are omitted rather than returned empty.
pub fn normalize(definition: &Definition) -> Vec<SchemaSection<'_>> {
    match definition {
        Definition::Record(def) => {
            vec![SchemaSection::from_schema(SectionLabel::Record, def.schema())]
        }
        Definition::Query(def) => [
            present(SectionLabel::Parameters, def.parameters.as_ref()),
            body(SectionLabel::Output, def.output.as_ref()),
        ]
        .into_iter()
        .flatten()
        .collect(),
        Definition::Procedure(def) => [
            present(SectionLabel::Parameters, def.parameters.as_ref()),
            body(SectionLabel::Input, def.input.as_ref()),
            body(SectionLabel::Output, def.output.as_ref()),
        ]
        .into_iter()
        .flatten()
        .collect(),
        Definition::Subscription(def) => body(SectionLabel::Message, def.message.as_ref())
            .into_iter()
            .collect(),
        Definition::Object(def) => {
            vec![SchemaSection::from_schema(SectionLabel::Properties, &def.schema)]
        }
    }
}

/// Find one section of a definition by label
pub fn section(definition: &Definition, label: SectionLabel) -> Option<SchemaSection<'_>> {
    normalize(definition).into_iter().find(|s| s.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition(value: serde_json::Value) -> Definition {
        serde_json::from_value(value).unwrap()
    }

    fn labels(def: &Definition) -> Vec<SectionLabel> {
        normalize(def).iter().map(|s| s.label).collect()
    }

    #[test]
    fn test_record_single_section() {
        let def = definition(json!({
            "type": "record",
            "record": {
                "required": ["name"],
                "properties": {"name": {"type": "string"}, "bio": {"type": "string"}}
            }
        }));
        let sections = normalize(&def);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, SectionLabel::Record);
        assert_eq!(sections[0].properties.keys().collect::<Vec<_>>(), vec!["name", "bio"]);
        assert!(sections[0].is_required("name"));
        assert!(!sections[0].is_required("bio"));
    }

    #[test]
    fn test_record_without_properties_still_has_section() {
        let def = definition(json!({"type": "record", "record": {"type": "object"}}));
        let sections = normalize(&def);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].properties.is_empty());
    }

    #[test]
    fn test_query_omits_absent_sections() {
        let def = definition(json!({
            "type": "query",
            "output": {"encoding": "application/json", "schema": {"type": "object", "properties": {"items": {"type": "array"}}}}
        }));
        assert_eq!(labels(&def), vec![SectionLabel::Output]);
    }

    #[test]
    fn test_query_keeps_present_empty_parameters() {
        let def = definition(json!({
            "type": "query",
            "parameters": {"type": "params", "properties": {}}
        }));
        assert_eq!(labels(&def), vec![SectionLabel::Parameters]);
    }

    #[test]
    fn test_procedure_fixed_order() {
        let def = definition(json!({
            "type": "procedure",
            "output": {"schema": {"properties": {"ok": {"type": "boolean"}}}},
            "input": {"schema": {"properties": {"text": {"type": "string"}}}},
            "parameters": {"properties": {"dryRun": {"type": "boolean"}}}
        }));
        assert_eq!(
            labels(&def),
            vec![SectionLabel::Parameters, SectionLabel::Input, SectionLabel::Output]
        );
    }

    #[test]
    fn test_output_ref_schema_is_omitted() {
        let def = definition(json!({
            "type": "procedure",
            "input": {"schema": {"type": "ref", "ref": "#input"}},
            "output": {"encoding": "application/json"}
        }));
        assert!(normalize(&def).is_empty());
    }

    #[test]
    fn test_subscription_message() {
        let def = definition(json!({
            "type": "subscription",
            "parameters": {"properties": {"cursor": {"type": "integer"}}},
            "message": {"schema": {"properties": {"seq": {"type": "integer"}}}}
        }));
        assert_eq!(labels(&def), vec![SectionLabel::Message]);
    }

    #[test]
    fn test_object_kind_properties() {
        let def = definition(json!({"properties": {"a": {"type": "string"}}, "required": ["a"]}));
        let sections = normalize(&def);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, SectionLabel::Properties);
        assert!(sections[0].is_required("a"));
    }

    #[test]
    fn test_normalize_is_repeatable() {
        let def = definition(json!({
            "type": "procedure",
            "parameters": {"properties": {"a": {"type": "string"}}},
            "output": {"schema": {"properties": {"b": {"type": "string"}}}}
        }));
        assert_eq!(normalize(&def), normalize(&def));
    }

    #[test]
    fn test_section_lookup() {
        let def = definition(json!({
            "type": "query",
            "parameters": {"properties": {"limit": {"type": "integer"}}}
        }));
        assert!(section(&def, SectionLabel::Parameters).is_some());
        assert!(section(&def, SectionLabel::Output).is_none());
        assert_eq!(SectionLabel::parse("Output"), Some(SectionLabel::Output));
        assert_eq!(SectionLabel::parse("output"), None);
    }
}
