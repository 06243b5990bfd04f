//! Lexicon catalog
//!
//! Per-document metadata supplied alongside the lexicon files: display name,
//! category, change summary and the new/modified field sets that drive the
//! diff tags. The catalog is an ordered list; its order is the presentation
//! order of the document index.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::diff::ChangeSet;
use crate::error::LexiconError;

/// Metadata for one lexicon document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconMeta {
    pub id: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub new_fields: Vec<String>,
    #[serde(default)]
    pub modified_fields: Vec<String>,
    /// The whole document is new
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub has_before_after: bool,
    #[serde(default)]
    pub changes_summary: String,
    #[serde(default)]
    pub deprecated: bool,
    /// Id of the document replacing a deprecated one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated_replacement: Option<String>,
}

impl LexiconMeta {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Name shown in the index: the short name, else the last id segment
    pub fn display_name(&self) -> &str {
        if !self.short_name.is_empty() {
            return &self.short_name;
        }
        self.id.rsplit('.').next().unwrap_or(&self.id)
    }

    pub fn change_set(&self) -> ChangeSet {
        ChangeSet::new(&self.new_fields, &self.modified_fields)
    }
}

/// Ordered collection of lexicon metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<LexiconMeta>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate ids
    pub fn new(entries: Vec<LexiconMeta>) -> Result<Self, LexiconError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.id.is_empty() {
                return Err(LexiconError::Catalog("entry with empty id".to_string()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(LexiconError::Catalog(format!(
                    "duplicate entry for {}",
                    entry.id
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, LexiconError> {
        let entries: Vec<LexiconMeta> = serde_yaml::from_str(content)?;
        Self::new(entries)
    }

    pub fn from_json_str(content: &str) -> Result<Self, LexiconError> {
        let entries: Vec<LexiconMeta> = serde_json::from_str(content)?;
        Self::new(entries)
    }

    /// Load a catalog file; `.json` is read as JSON, anything else as YAML
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_yaml_str(&content)?,
        };
        info!("Loaded catalog with {} entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LexiconMeta] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&LexiconMeta> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    /// Categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !out.contains(&entry.category.as_str()) {
                out.push(&entry.category);
            }
        }
        out
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a LexiconMeta> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Change sets for a document; empty when the catalog has no entry for it
    pub fn change_set(&self, id: &str) -> ChangeSet {
        self.get(id).map(LexiconMeta::change_set).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
- id: app.gainforest.organization.site
  shortName: site
  category: Organization
  path: organization/site
  description: Conservation site
  newFields: [country, biome]
  modifiedFields: [name, lat]
  hasBeforeAfter: true
  changesSummary: Added location hierarchy.
- id: app.gainforest.dwc.occurrence
  shortName: occurrence
  category: Darwin Core
  isNew: true
- id: app.gainforest.organization.member
  category: Organization
  deprecated: true
  deprecatedReplacement: app.gainforest.organization.person
"#;

    #[test]
    fn test_parse_yaml() {
        let catalog = Catalog::from_yaml_str(CATALOG).unwrap();
        assert_eq!(catalog.len(), 3);
        let site = catalog.get("app.gainforest.organization.site").unwrap();
        assert!(site.has_before_after);
        assert_eq!(site.new_fields, vec!["country", "biome"]);
        let member = catalog.get("app.gainforest.organization.member").unwrap();
        assert_eq!(member.display_name(), "member");
        assert_eq!(
            member.deprecated_replacement.as_deref(),
            Some("app.gainforest.organization.person")
        );
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::from_yaml_str(CATALOG).unwrap();
        assert_eq!(catalog.categories(), vec!["Organization", "Darwin Core"]);
        assert_eq!(catalog.by_category("Organization").count(), 2);
    }

    #[test]
    fn test_change_set() {
        let catalog = Catalog::from_yaml_str(CATALOG).unwrap();
        let changes = catalog.change_set("app.gainforest.organization.site");
        assert!(changes.new_fields.contains("biome"));
        assert!(changes.modified_fields.contains("lat"));
        assert!(catalog.change_set("app.unknown").is_empty());
    }

    #[test]
    fn test_parse_json() {
        let catalog =
            Catalog::from_json_str(r#"[{"id": "a.b.c", "newFields": ["x"]}]"#).unwrap();
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["a.b.c"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::from_json_str(r#"[{"id": "a.b.c"}, {"id": "a.b.c"}]"#);
        assert!(matches!(result, Err(LexiconError::Catalog(_))));
    }
}
