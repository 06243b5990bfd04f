//! Lazily materialized field tree
//!
//! Nodes are derived on demand from the immutable document: a node's children
//! exist only while the node is expanded. References are never inlined, so
//! walking the tree terminates even over cyclic type graphs.

use crate::diff::{ChangeSet, DiffAnnotator, DiffTag};
use crate::models::{Definition, Document, FieldDef, Properties};
use crate::schema::{SectionLabel, normalize, section};

use super::path::NodePath;
use super::state::ExpansionState;

/// A visible field of the tree
#[derive(Debug, Clone, PartialEq)]
pub struct FieldNode<'a> {
    pub name: &'a str,
    pub path: NodePath,
    pub def: &'a FieldDef,
    pub is_new: bool,
    pub is_modified: bool,
    pub is_required: bool,
    pub expandable: bool,
    pub expanded: bool,
    /// Indentation level; grows only through nested object properties
    pub depth: usize,
    /// Revealed fields; empty unless expanded
    pub children: Vec<FieldNode<'a>>,
}

impl FieldNode<'_> {
    pub fn tag(&self) -> DiffTag {
        DiffTag {
            is_new: self.is_new,
            is_modified: self.is_modified,
        }
    }

    /// Depth-first search among this node and its materialized descendants
    pub fn find(&self, path: &NodePath) -> Option<&Self> {
        if &self.path == path {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(path))
    }
}

/// One normalized section with its top-level nodes
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView<'a> {
    pub label: SectionLabel,
    pub nodes: Vec<FieldNode<'a>>,
}

/// One definition of the rendered document
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionView<'a> {
    pub name: &'a str,
    pub kind: Option<&'a str>,
    pub description: Option<&'a str>,
    pub record_key: Option<&'a str>,
    pub sections: Vec<SectionView<'a>>,
}

/// Diff-annotated, navigable view of one document
pub struct FieldTree<'a> {
    document: &'a Document,
    annotator: DiffAnnotator<'a>,
    state: &'a ExpansionState,
}

impl<'a> FieldTree<'a> {
    pub fn new(document: &'a Document, changes: &'a ChangeSet, state: &'a ExpansionState) -> Self {
        Self {
            document,
            annotator: DiffAnnotator::new(changes),
            state,
        }
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// Build the visible tree for every definition, in declaration order
    pub fn definitions(&self) -> Vec<DefinitionView<'a>> {
        self.document
            .defs
            .iter()
            .map(|(name, definition)| self.definition_view(name, definition))
            .collect()
    }

    /// Build the visible tree for a single definition
    pub fn definition(&self, name: &str) -> Option<DefinitionView<'a>> {
        let (name, definition) = self.document.defs.iter().find(|(n, _)| *n == name)?;
        Some(self.definition_view(name, definition))
    }

    fn definition_view(&self, name: &'a str, definition: &'a Definition) -> DefinitionView<'a> {
        let sections = normalize(definition)
            .into_iter()
            .map(|section| SectionView {
                label: section.label,
                nodes: section
                    .properties
                    .iter()
                    .map(|(field, def)| {
                        let path = NodePath::new(name, section.label, field);
                        let tag = self.annotator.tag(field);
                        self.node(field, def, path, tag, section.is_required(field), 0)
                    })
                    .collect(),
            })
            .collect();

        DefinitionView {
            name,
            kind: definition.kind_label(),
            description: definition.description(),
            record_key: definition.record_key(),
            sections,
        }
    }

    fn node(
        &self,
        name: &'a str,
        def: &'a FieldDef,
        path: NodePath,
        tag: DiffTag,
        is_required: bool,
        depth: usize,
    ) -> FieldNode<'a> {
        let expandable = def.is_expandable();
        let expanded = expandable && self.state.is_expanded(&path);

        let mut children = Vec::new();
        if expanded && let Some((properties, required)) = def.child_schema() {
            // Object properties nest one level deeper; array item schemas start over at 0.
            let child_depth = if def.is_object_with_properties() {
                depth + 1
            } else {
                0
            };
            children = self.children(properties, required, &path, child_depth);
        }

        FieldNode {
            name,
            path,
            def,
            is_new: tag.is_new,
            is_modified: tag.is_modified,
            is_required,
            expandable,
            expanded,
            depth,
            children,
        }
    }

    // Change tags are never inherited below the top level.
    fn children(
        &self,
        properties: &'a Properties,
        required: &[String],
        parent: &NodePath,
        depth: usize,
    ) -> Vec<FieldNode<'a>> {
        properties
            .iter()
            .map(|(name, def)| {
                let is_required = required.iter().any(|r| r == name);
                self.node(name, def, parent.child(name), DiffTag::default(), is_required, depth)
            })
            .collect()
    }
}

/// Find the field a path points at, whether or not it is currently visible
pub fn lookup<'a>(document: &'a Document, path: &NodePath) -> Option<&'a FieldDef> {
    let definition = document.definition(path.definition())?;
    let section = section(definition, path.section())?;
    let (first, rest) = path.fields().split_first()?;
    let mut current = section.properties.get(first)?;
    for name in rest {
        let (properties, _) = current.child_schema()?;
        current = properties.get(name)?;
    }
    Some(current)
}
