//! Before/after comparison of two variants of a document

use serde::Serialize;

use crate::models::Document;
use crate::schema::{count_document, normalize};

/// Field-count comparison between the before and after variants of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub id: String,
    pub before_count: usize,
    pub after_count: usize,
    /// `after_count - before_count`
    pub delta: i64,
    /// Top-level field names present only after, in the after document's order
    pub added: Vec<String>,
    /// Top-level field names present only before, in the before document's order
    pub removed: Vec<String>,
}

impl Comparison {
    pub fn between(id: impl Into<String>, before: &Document, after: &Document) -> Self {
        let before_count = count_document(before);
        let after_count = count_document(after);
        let before_names = top_level_names(before);
        let after_names = top_level_names(after);

        let added = after_names
            .iter()
            .filter(|name| !before_names.contains(name))
            .cloned()
            .collect();
        let removed = before_names
            .iter()
            .filter(|name| !after_names.contains(name))
            .cloned()
            .collect();

        Self {
            id: id.into(),
            before_count,
            after_count,
            delta: after_count as i64 - before_count as i64,
            added,
            removed,
        }
    }
}

/// Property names of every normalized section, first-seen order, no duplicates
pub fn top_level_names(document: &Document) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for definition in document.defs.values() {
        for section in normalize(definition) {
            for name in section.properties.keys() {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
    }
    names
}
