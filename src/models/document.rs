//! Lexicon document model

use serde::Deserialize;

use super::definition::Definition;
use super::ordered::OrderedMap;
use crate::error::LexiconError;

/// One schema namespace: a dotted id and its named definitions
///
/// Documents are immutable once loaded. A document without `defs` is valid
/// and simply has no definitions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    /// Lexicon language version
    #[serde(default)]
    pub lexicon: Option<u32>,
    /// Namespace id (e.g. `app.gainforest.organization.site`)
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub defs: OrderedMap<Definition>,
}

impl Document {
    /// Create an empty document with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            lexicon: None,
            id: id.into(),
            description: None,
            defs: OrderedMap::new(),
        }
    }

    /// Parse a document from JSON text
    pub fn from_json_str(content: &str) -> Result<Self, LexiconError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a document from an already decoded JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self, LexiconError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Add a definition, replacing any previous one with the same name
    pub fn with_definition(mut self, name: impl Into<String>, definition: Definition) -> Self {
        self.defs.insert(name, definition);
        self
    }

    pub fn definition(&self, name: &str) -> Option<&Definition> {
        self.defs.get(name)
    }

    /// The `main` definition, if declared
    pub fn main(&self) -> Option<&Definition> {
        self.defs.get(super::reference::DEFAULT_DEFINITION)
    }
}
