//! Schema introspection tests

use lexicon_explorer::diff::{ChangeSet, Comparison, DiffAnnotator};
use lexicon_explorer::models::{Definition, Document};
use lexicon_explorer::resolve::{ReferenceResolver, resolve};
use lexicon_explorer::schema::{SectionLabel, count_definition, count_document, normalize};
use lexicon_explorer::tree::{ExpansionState, FieldTree, NodePath};
use serde_json::json;
use std::collections::BTreeSet;

fn definition(value: serde_json::Value) -> Definition {
    serde_json::from_value(value).unwrap()
}

mod count_tests {
    use super::*;

    #[test]
    fn test_record_counts_record_properties() {
        let def = definition(json!({
            "type": "record",
            "key": "tid",
            "record": {
                "type": "object",
                "required": ["name"],
                "properties": {"name": {"type": "string"}, "bio": {"type": "string"}}
            }
        }));
        assert_eq!(count_definition(&def), 2);
    }

    #[test]
    fn test_record_without_record_counts_own_properties() {
        let def = definition(json!({
            "type": "record",
            "properties": {"a": {"type": "string"}, "b": {"type": "string"}, "c": {"type": "string"}}
        }));
        assert_eq!(count_definition(&def), 3);
    }

    #[test]
    fn test_procedure_sums_all_sections() {
        let def = definition(json!({
            "type": "procedure",
            "parameters": {"type": "params", "properties": {"a": {"type": "string"}}},
            "input": {"encoding": "application/json", "schema": {"type": "object", "properties": {
                "b": {"type": "string"}, "c": {"type": "integer"}
            }}},
            "output": {"encoding": "application/json", "schema": {"type": "object", "properties": {
                "d": {"type": "boolean"}, "e": {"type": "string"}, "f": {"type": "string"}
            }}}
        }));
        assert_eq!(count_definition(&def), 6);
    }

    #[test]
    fn test_nested_objects_count_once() {
        let def = definition(json!({
            "type": "record",
            "record": {"properties": {
                "location": {"type": "object", "properties": {
                    "a": {"type": "string"}, "b": {"type": "string"}, "c": {"type": "string"},
                    "d": {"type": "string"}, "e": {"type": "string"}
                }}
            }}
        }));
        assert_eq!(count_definition(&def), 1);
    }

    #[test]
    fn test_degenerate_documents_count_zero() {
        let doc = Document::from_json_str(r#"{"lexicon": 1, "id": "a.b.c"}"#).unwrap();
        assert_eq!(count_document(&doc), 0);
        let doc = Document::from_json_str(
            r#"{"id": "a.b.c", "defs": {"main": {"type": "query"}, "token": {"type": "token"}}}"#,
        )
        .unwrap();
        assert_eq!(count_document(&doc), 0);
    }

    #[test]
    fn test_document_count_sums_definitions() {
        let doc = Document::from_value(json!({
            "id": "a.b.c",
            "defs": {
                "main": {"type": "record", "record": {"properties": {"x": {"type": "string"}}}},
                "image": {"type": "object", "properties": {"url": {"type": "string"}, "alt": {"type": "string"}}}
            }
        }))
        .unwrap();
        assert_eq!(count_document(&doc), 3);
    }
}

mod normalize_tests {
    use super::*;

    #[test]
    fn test_normalize_is_pure() {
        let def = definition(json!({
            "type": "query",
            "parameters": {"properties": {"limit": {"type": "integer"}}},
            "output": {"schema": {"properties": {"items": {"type": "array"}}}}
        }));
        let first = normalize(&def);
        let second = normalize(&def);
        assert_eq!(first, second);
        let labels: Vec<_> = first.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec![SectionLabel::Parameters, SectionLabel::Output]);
    }
}

mod resolve_tests {
    use super::*;

    fn known() -> BTreeSet<String> {
        ["app.gainforest.dwc.occurrence".to_string(), "a.b.c".to_string()].into()
    }

    #[test]
    fn test_fragment_is_ignored() {
        for reference in [
            "app.gainforest.dwc.occurrence#main",
            "app.gainforest.dwc.occurrence#other",
            "app.gainforest.dwc.occurrence",
        ] {
            assert_eq!(resolve(reference, &known()), Some("app.gainforest.dwc.occurrence"));
        }
    }

    #[test]
    fn test_unknown_namespace() {
        assert_eq!(resolve("app.unknown.ns#main", &known()), None);
        assert_eq!(resolve("app.unknown.ns#main", &BTreeSet::new()), None);
        assert_eq!(resolve("#local", &known()), None);
    }

    #[test]
    fn test_union_members_resolve_independently() {
        let resolver = ReferenceResolver::new(["a.b.c"]);
        let links = resolver.union_links(&["a.b.c#one", "a.b.c#two"]);
        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|l| l.target.as_deref() == Some("a.b.c")));
        assert_eq!(links[0].label, "one");
        assert_eq!(links[1].label, "two");
    }
}

mod annotate_tests {
    use super::*;

    #[test]
    fn test_tagging_example() {
        let changes = ChangeSet::new(["y"], ["z"]);
        let annotator = DiffAnnotator::new(&changes);
        let tags: Vec<_> = ["x", "y", "z"]
            .iter()
            .map(|name| {
                let tag = annotator.tag(name);
                (tag.is_new, tag.is_modified)
            })
            .collect();
        assert_eq!(tags, vec![(false, false), (true, false), (false, true)]);
    }

    #[test]
    fn test_required_flags_in_rendered_record() {
        let doc = Document::new("app.example.profile").with_definition(
            "main",
            definition(json!({
                "type": "record",
                "record": {
                    "required": ["name"],
                    "properties": {"name": {"type": "string"}, "bio": {"type": "string"}}
                }
            })),
        );
        let changes = ChangeSet::default();
        let state = ExpansionState::new();
        let tree = FieldTree::new(&doc, &changes, &state);
        let main = tree.definition("main").unwrap();
        let nodes = &main.sections[0].nodes;

        assert_eq!(count_document(&doc), 2);
        assert_eq!(nodes[0].name, "name");
        assert!(nodes[0].is_required);
        assert_eq!(nodes[1].name, "bio");
        assert!(!nodes[1].is_required);
        assert!(nodes.iter().all(|n| !n.is_new && !n.is_modified));
    }

    #[test]
    fn test_tags_not_inherited_by_nested_fields() {
        let doc = Document::new("a.b.c").with_definition(
            "main",
            definition(json!({
                "type": "record",
                "record": {"properties": {
                    "name": {"type": "string"},
                    "meta": {"type": "object", "properties": {"name": {"type": "string"}}}
                }}
            })),
        );
        let changes = ChangeSet::new(["name", "meta"], ["name"]);
        let mut state = ExpansionState::new();
        state.toggle(&NodePath::parse("main/Record/meta").unwrap(), true);
        let tree = FieldTree::new(&doc, &changes, &state);
        let main = tree.definition("main").unwrap();
        let meta = &main.sections[0].nodes[1];
        assert!(meta.is_new);
        assert!(!meta.children[0].is_new && !meta.children[0].is_modified);
    }
}

mod compare_tests {
    use super::*;

    #[test]
    fn test_before_after_delta() {
        let before = Document::from_value(json!({
            "id": "app.example.site",
            "defs": {"main": {"type": "record", "record": {"properties": {
                "name": {"type": "string"}, "lat": {"type": "string"}, "legacy": {"type": "string"}
            }}}}
        }))
        .unwrap();
        let after = Document::from_value(json!({
            "id": "app.example.site",
            "defs": {"main": {"type": "record", "record": {"properties": {
                "name": {"type": "string"}, "lat": {"type": "string"},
                "country": {"type": "string"}, "biome": {"type": "string"}
            }}}}
        }))
        .unwrap();

        let comparison = Comparison::between("app.example.site", &before, &after);
        assert_eq!(comparison.before_count, 3);
        assert_eq!(comparison.after_count, 4);
        assert_eq!(comparison.delta, 1);
        assert_eq!(comparison.added, vec!["country", "biome"]);
        assert_eq!(comparison.removed, vec!["legacy"]);
    }
}
