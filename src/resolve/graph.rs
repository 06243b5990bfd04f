//! Cross-document reference graph
//!
//! Collects every `ref` and `union` reference declared in the normalized
//! sections of every definition, recursing through nested object properties
//! and array items. References are recorded, never followed, so cyclic type
//! graphs cannot cause unbounded recursion.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use crate::models::{Document, FieldDef, Properties, Reference};
use crate::schema::normalize;
use crate::store::DocumentStore;

/// A reference whose document segment names no known document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    /// Document declaring the reference
    pub document: String,
    /// Definition declaring the reference
    pub definition: String,
    /// Field path inside the definition (`Section/field/child`)
    pub path: String,
    pub reference: String,
}

/// Directed graph of documents, with an edge per distinct referenced document
#[derive(Debug, Default)]
pub struct ReferenceGraph {
    graph: DiGraph<String, ()>,
    nodes: HashMap<String, NodeIndex>,
    dangling: Vec<DanglingReference>,
}

impl ReferenceGraph {
    /// Build the graph over every document of the store
    pub fn build<S: DocumentStore + ?Sized>(store: &S) -> Self {
        let mut graph = ReferenceGraph::default();
        for id in store.ids() {
            graph.node(id);
        }

        for document in store.documents() {
            let mut found = Vec::new();
            collect_document(document, &mut found);

            let mut targets = BTreeSet::new();
            for site in found {
                let parsed = Reference::parse(&site.reference);
                if parsed.is_local() {
                    continue;
                }
                if store.contains(parsed.document_id()) {
                    targets.insert(parsed.document_id().to_string());
                } else {
                    graph.dangling.push(DanglingReference {
                        document: document.id.clone(),
                        definition: site.definition,
                        path: site.path,
                        reference: site.reference,
                    });
                }
            }

            let source = graph.node(&document.id);
            for target in targets {
                let target = graph.node(&target);
                graph.graph.update_edge(source, target, ());
            }
        }

        debug!(
            "Built reference graph: {} documents, {} edges, {} dangling references",
            graph.graph.node_count(),
            graph.graph.edge_count(),
            graph.dangling.len()
        );
        graph
    }

    fn node(&mut self, id: &str) -> NodeIndex {
        if let Some(index) = self.nodes.get(id) {
            return *index;
        }
        let index = self.graph.add_node(id.to_string());
        self.nodes.insert(id.to_string(), index);
        index
    }

    fn neighbors(&self, id: &str, direction: Direction) -> Vec<&str> {
        let Some(index) = self.nodes.get(id) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = self
            .graph
            .neighbors_directed(*index, direction)
            .map(|n| self.graph[n].as_str())
            .filter(|n| *n != id)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Documents referenced by `id`, sorted; self references are excluded
    pub fn references_from(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Documents that reference `id`, sorted; self references are excluded
    pub fn referenced_by(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, Direction::Incoming)
    }

    /// References to unknown documents, in document and declaration order
    pub fn dangling(&self) -> &[DanglingReference] {
        &self.dangling
    }
}

struct ReferenceSite {
    definition: String,
    path: String,
    reference: String,
}

fn collect_document(document: &Document, out: &mut Vec<ReferenceSite>) {
    for (def_name, definition) in document.defs.iter() {
        for section in normalize(definition) {
            collect_properties(def_name, section.label.as_str(), section.properties, out);
        }
    }
}

fn collect_properties(
    def_name: &str,
    prefix: &str,
    properties: &Properties,
    out: &mut Vec<ReferenceSite>,
) {
    for (name, field) in properties.iter() {
        let path = format!("{}/{}", prefix, name);
        collect_field(def_name, &path, field, out);
    }
}

fn collect_field(def_name: &str, path: &str, field: &FieldDef, out: &mut Vec<ReferenceSite>) {
    for reference in field.references() {
        out.push(ReferenceSite {
            definition: def_name.to_string(),
            path: path.to_string(),
            reference: reference.to_string(),
        });
    }
    collect_properties(def_name, path, &field.properties, out);
    if let Some(items) = &field.items {
        collect_field(def_name, path, items, out);
    }
}
