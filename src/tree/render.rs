//! Render contract for visible field nodes
//!
//! A rendered field reads, in fixed order: name, type badge, status badges
//! (NEW, MODIFIED, REQUIRED), description, then a strip of constraints each
//! present only when declared. Nested fields repeat the same contract.

use serde::Serialize;

use crate::diff::ChangeStatus;
use crate::models::{FieldType, Reference};
use crate::resolve::{RefLink, ReferenceResolver};
use crate::schema::SectionLabel;

use super::node::{DefinitionView, FieldNode, FieldTree};

const BYTES_PER_MB: f64 = 1_048_576.0;

/// Status badge, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    New,
    Modified,
    Required,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::New => "NEW",
            Badge::Modified => "MODIFIED",
            Badge::Required => "required",
        }
    }
}

/// A list truncated for display, with the number of hidden entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Truncated {
    pub shown: Vec<String>,
    pub overflow: usize,
}

impl Truncated {
    fn new<I: IntoIterator<Item = String>>(values: I, limit: usize) -> Self {
        let values: Vec<String> = values.into_iter().collect();
        let overflow = values.len().saturating_sub(limit);
        Self {
            shown: values.into_iter().take(limit).collect(),
            overflow,
        }
    }
}

/// One member of the constraint strip, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Constraint {
    MaxGraphemes(serde_json::Number),
    MinLength(serde_json::Number),
    MaxLength(serde_json::Number),
    Minimum(serde_json::Number),
    Maximum(serde_json::Number),
    /// Rounded megabytes
    MaxSize(u64),
    Enum(Vec<String>),
    KnownValues(Truncated),
    Ref(RefLink),
    Union(Vec<RefLink>),
    /// Item type of an array shown while collapsed
    Items(String),
    /// Accepted MIME subtypes
    Accept(Truncated),
}

impl Constraint {
    pub fn label(&self) -> &'static str {
        match self {
            Constraint::MaxGraphemes(_) => "maxGraphemes",
            Constraint::MinLength(_) => "minLength",
            Constraint::MaxLength(_) => "maxLength",
            Constraint::Minimum(_) => "min",
            Constraint::Maximum(_) => "max",
            Constraint::MaxSize(_) => "maxSize",
            Constraint::Enum(_) => "enum",
            Constraint::KnownValues(_) => "knownValues",
            Constraint::Ref(_) => "ref",
            Constraint::Union(_) => "union",
            Constraint::Items(_) => "items",
            Constraint::Accept(_) => "accepts",
        }
    }
}

/// Display limits for truncated constraint lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub known_values_limit: usize,
    pub accept_limit: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            known_values_limit: 6,
            accept_limit: 4,
        }
    }
}

/// Rendered field with its visible descendants
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCard {
    pub name: String,
    pub path: String,
    pub type_badge: String,
    pub badges: Vec<Badge>,
    /// Highlight color choice; NEW wins when both tags are set
    pub highlight: Option<ChangeStatus>,
    pub description: Option<String>,
    pub constraints: Vec<Constraint>,
    pub expandable: bool,
    pub expanded: bool,
    pub depth: usize,
    pub children: Vec<FieldCard>,
}

impl FieldCard {
    /// Every link in the constraint strip, navigable or not
    pub fn links(&self) -> Vec<&RefLink> {
        let mut out = Vec::new();
        for constraint in &self.constraints {
            match constraint {
                Constraint::Ref(link) => out.push(link),
                Constraint::Union(links) => out.extend(links.iter()),
                _ => {}
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionCard {
    pub label: SectionLabel,
    pub fields: Vec<FieldCard>,
}

/// Rendered definition: `#name · kind · key` header and its sections
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionCard {
    pub name: String,
    pub kind: Option<String>,
    pub record_key: Option<String>,
    pub description: Option<String>,
    pub sections: Vec<SectionCard>,
}

/// Renders field nodes, resolving reference links against the known documents
pub struct FieldRenderer<'a> {
    resolver: &'a ReferenceResolver,
    options: RenderOptions,
}

impl<'a> FieldRenderer<'a> {
    pub fn new(resolver: &'a ReferenceResolver, options: RenderOptions) -> Self {
        Self { resolver, options }
    }

    pub fn render_tree(&self, tree: &FieldTree<'_>) -> Vec<DefinitionCard> {
        tree.definitions()
            .iter()
            .map(|view| self.render_definition(view))
            .collect()
    }

    pub fn render_definition(&self, view: &DefinitionView<'_>) -> DefinitionCard {
        DefinitionCard {
            name: view.name.to_string(),
            kind: view.kind.map(str::to_string),
            record_key: view.record_key.map(str::to_string),
            description: view.description.map(str::to_string),
            sections: view
                .sections
                .iter()
                .map(|section| SectionCard {
                    label: section.label,
                    fields: section.nodes.iter().map(|n| self.render_node(n)).collect(),
                })
                .collect(),
        }
    }

    pub fn render_node(&self, node: &FieldNode<'_>) -> FieldCard {
        let mut badges = Vec::new();
        if node.is_new {
            badges.push(Badge::New);
        }
        if node.is_modified {
            badges.push(Badge::Modified);
        }
        if node.is_required {
            badges.push(Badge::Required);
        }

        FieldCard {
            name: node.name.to_string(),
            path: node.path.to_string(),
            type_badge: node.def.type_label(),
            badges,
            highlight: node.tag().status(),
            description: node.def.description.clone(),
            constraints: self.constraints(node),
            expandable: node.expandable,
            expanded: node.expanded,
            depth: node.depth,
            children: node.children.iter().map(|c| self.render_node(c)).collect(),
        }
    }

    fn constraints(&self, node: &FieldNode<'_>) -> Vec<Constraint> {
        let def = node.def;
        let mut out = Vec::new();

        if let Some(v) = &def.max_graphemes {
            out.push(Constraint::MaxGraphemes(v.clone()));
        }
        if let Some(v) = &def.min_length {
            out.push(Constraint::MinLength(v.clone()));
        }
        if let Some(v) = &def.max_length {
            out.push(Constraint::MaxLength(v.clone()));
        }
        if let Some(v) = &def.minimum {
            out.push(Constraint::Minimum(v.clone()));
        }
        if let Some(v) = &def.maximum {
            out.push(Constraint::Maximum(v.clone()));
        }
        if let Some(bytes) = def.max_size.as_ref().and_then(serde_json::Number::as_f64) {
            out.push(Constraint::MaxSize((bytes / BYTES_PER_MB).round() as u64));
        }
        if !def.enum_values.is_empty() {
            out.push(Constraint::Enum(def.enum_labels()));
        }
        if !def.known_values.is_empty() {
            out.push(Constraint::KnownValues(Truncated::new(
                def.known_values.iter().cloned(),
                self.options.known_values_limit,
            )));
        }
        if def.is_type(&FieldType::Ref)
            && let Some(reference) = &def.reference
        {
            out.push(Constraint::Ref(self.resolver.ref_link(reference)));
        }
        if def.is_type(&FieldType::Union) && !def.refs.is_empty() {
            out.push(Constraint::Union(self.resolver.union_links(&def.refs)));
        }
        if def.is_type(&FieldType::Array)
            && !node.expanded
            && let Some(items) = &def.items
        {
            let summary = match &items.reference {
                Some(reference) => Reference::parse(reference)
                    .fragment()
                    .unwrap_or(reference)
                    .to_string(),
                None => items
                    .field_type
                    .as_ref()
                    .map(|t| t.as_str().to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
            };
            out.push(Constraint::Items(summary));
        }
        if !def.accept.is_empty() {
            let subtypes = def.accept.iter().map(|mime| match mime.split_once('/') {
                Some((_, subtype)) => subtype.to_string(),
                None => mime.clone(),
            });
            out.push(Constraint::Accept(Truncated::new(
                subtypes,
                self.options.accept_limit,
            )));
        }

        out
    }
}
