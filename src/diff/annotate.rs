//! Change annotation of field names
//!
//! Tags are driven by externally supplied new/modified name sets and apply
//! only to the top-level fields of the definition being rendered.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Field names added or modified in a document, supplied per document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSet {
    #[serde(default)]
    pub new_fields: BTreeSet<String>,
    #[serde(default)]
    pub modified_fields: BTreeSet<String>,
}

impl ChangeSet {
    pub fn new<N, M, S>(new_fields: N, modified_fields: M) -> Self
    where
        N: IntoIterator<Item = S>,
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            new_fields: new_fields.into_iter().map(Into::into).collect(),
            modified_fields: modified_fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.new_fields.is_empty() && self.modified_fields.is_empty()
    }

    /// Names listed as both new and modified
    ///
    /// Nothing prevents overlap; the display tie-break favors NEW.
    pub fn overlapping(&self) -> Vec<&str> {
        self.new_fields
            .intersection(&self.modified_fields)
            .map(String::as_str)
            .collect()
    }
}

/// Change status used for highlighting; NEW wins over MODIFIED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeStatus {
    New,
    Modified,
}

/// Tag of one field name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffTag {
    pub is_new: bool,
    pub is_modified: bool,
}

impl DiffTag {
    /// Highlight status; both flags set shows as NEW
    pub fn status(&self) -> Option<ChangeStatus> {
        if self.is_new {
            Some(ChangeStatus::New)
        } else if self.is_modified {
            Some(ChangeStatus::Modified)
        } else {
            None
        }
    }
}

/// Tags field names against a change set
#[derive(Debug, Clone, Copy)]
pub struct DiffAnnotator<'a> {
    changes: &'a ChangeSet,
}

impl<'a> DiffAnnotator<'a> {
    pub fn new(changes: &'a ChangeSet) -> Self {
        Self { changes }
    }

    pub fn tag(&self, name: &str) -> DiffTag {
        DiffTag {
            is_new: self.changes.new_fields.contains(name),
            is_modified: self.changes.modified_fields.contains(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagging() {
        let changes = ChangeSet::new(["y"], ["z"]);
        let annotator = DiffAnnotator::new(&changes);
        assert_eq!(annotator.tag("x"), DiffTag { is_new: false, is_modified: false });
        assert_eq!(annotator.tag("y"), DiffTag { is_new: true, is_modified: false });
        assert_eq!(annotator.tag("z"), DiffTag { is_new: false, is_modified: true });
    }

    #[test]
    fn test_overlap_keeps_both_flags_and_new_wins() {
        let changes = ChangeSet::new(["a"], ["a"]);
        let tag = DiffAnnotator::new(&changes).tag("a");
        assert!(tag.is_new);
        assert!(tag.is_modified);
        assert_eq!(tag.status(), Some(ChangeStatus::New));
        assert_eq!(changes.overlapping(), vec!["a"]);
    }

    #[test]
    fn test_change_set_from_camel_case() {
        let changes: ChangeSet =
            serde_json::from_str(r#"{"newFields": ["a"], "modifiedFields": ["b"]}"#).unwrap();
        assert!(changes.new_fields.contains("a"));
        assert!(changes.modified_fields.contains("b"));
        assert!(ChangeSet::default().is_empty());
    }
}
