//! Stable node paths
//!
//! A node is addressed by its definition, its section and the chain of field
//! names leading to it. Children revealed by expanding an array of objects are
//! addressed as direct children of the array field: the item schema is a
//! template, so there is no per-element segment.

use serde::Serialize;
use std::fmt;

use crate::schema::SectionLabel;

/// Path of a field node: `definition/Section/field/child/...`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodePath {
    definition: String,
    section: SectionLabel,
    fields: Vec<String>,
}

impl NodePath {
    /// Path of a top-level field of a section
    pub fn new(
        definition: impl Into<String>,
        section: SectionLabel,
        field: impl Into<String>,
    ) -> Self {
        Self {
            definition: definition.into(),
            section,
            fields: vec![field.into()],
        }
    }

    /// Path of a field revealed by expanding this node
    pub fn child(&self, field: impl Into<String>) -> Self {
        let mut fields = self.fields.clone();
        fields.push(field.into());
        Self {
            definition: self.definition.clone(),
            section: self.section,
            fields,
        }
    }

    /// Parse `definition/Section/field[/child...]`
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('/');
        let definition = parts.next().filter(|p| !p.is_empty())?;
        let section = SectionLabel::parse(parts.next()?)?;
        let fields: Vec<String> = parts.map(str::to_string).collect();
        if fields.is_empty() || fields.iter().any(String::is_empty) {
            return None;
        }
        Some(Self {
            definition: definition.to_string(),
            section,
            fields,
        })
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn section(&self) -> SectionLabel {
        self.section
    }

    /// Field names from the section's top level down to this node
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Name of the field this path ends at
    pub fn name(&self) -> &str {
        self.fields.last().map(String::as_str).unwrap_or_default()
    }

    /// Whether the node is declared directly in its section
    pub fn is_top_level(&self) -> bool {
        self.fields.len() == 1
    }

    /// Whether `other` is this node or lies below it
    pub fn contains(&self, other: &NodePath) -> bool {
        self.definition == other.definition
            && self.section == other.section
            && other.fields.starts_with(&self.fields)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.definition, self.section, self.fields.join("/"))
    }
}
