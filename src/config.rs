//! Configuration for the lexicon explorer

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LexiconError;
use crate::tree::RenderOptions;

/// Configuration for an explorer session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExplorerConfig {
    /// Number of known values shown before "+N more"
    pub known_values_limit: usize,

    /// Number of accepted MIME subtypes shown before "+N more"
    pub accept_limit: usize,

    /// Report activated references that match no document as errors
    /// instead of ignoring them
    pub strict_references: bool,

    /// Document selected when the session starts
    /// Falls back to the first catalog entry, then the first known id
    pub initial_document: Option<String>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            known_values_limit: 6,
            accept_limit: 4,
            strict_references: false,
            initial_document: None,
        }
    }
}

impl ExplorerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ExplorerConfigBuilder {
        ExplorerConfigBuilder::default()
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, LexiconError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, LexiconError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a configuration file; `.json` is read as JSON, anything else as YAML
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            known_values_limit: self.known_values_limit,
            accept_limit: self.accept_limit,
        }
    }
}

/// Builder for ExplorerConfig
#[derive(Debug, Default)]
pub struct ExplorerConfigBuilder {
    config: ExplorerConfig,
}

impl ExplorerConfigBuilder {
    /// Set the known values display limit (at least 1)
    pub fn known_values_limit(mut self, limit: usize) -> Self {
        self.config.known_values_limit = limit.max(1);
        self
    }

    /// Set the accepted MIME types display limit (at least 1)
    pub fn accept_limit(mut self, limit: usize) -> Self {
        self.config.accept_limit = limit.max(1);
        self
    }

    /// Enable or disable strict reference navigation
    pub fn strict_references(mut self, strict: bool) -> Self {
        self.config.strict_references = strict;
        self
    }

    /// Set the initially selected document
    pub fn initial_document(mut self, id: impl Into<String>) -> Self {
        self.config.initial_document = Some(id.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> ExplorerConfig {
        self.config
    }
}
