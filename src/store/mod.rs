//! Document store abstraction
//!
//! Supplies immutable lexicon documents keyed by id. The set of known ids is
//! fixed for the lifetime of a store.
//! - MemoryDocumentStore: documents held in memory
//! - filesystem::load_dir: fills a memory store from a directory of JSON files

pub mod filesystem;

use std::collections::BTreeMap;

use crate::models::Document;

pub use filesystem::{load_dir, load_file};

/// Read-only access to pre-loaded documents
pub trait DocumentStore {
    /// Get a document by id
    fn get(&self, id: &str) -> Option<&Document>;

    /// All known document ids, sorted
    fn ids(&self) -> Vec<&str>;

    /// Check if a document id is known
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All documents, in id order
    fn documents(&self) -> Vec<&Document> {
        self.ids().into_iter().filter_map(|id| self.get(id)).collect()
    }
}

/// In-memory document store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDocumentStore {
    documents: BTreeMap<String, Document>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, returning the document previously stored under its id
    pub fn insert(&mut self, document: Document) -> Option<Document> {
        self.documents.insert(document.id.clone(), document)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<Document> for MemoryDocumentStore {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut store = MemoryDocumentStore::new();
        for document in iter {
            store.insert(document);
        }
        store
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn get(&self, id: &str) -> Option<&Document> {
        self.documents.get(id)
    }

    fn ids(&self) -> Vec<&str> {
        self.documents.keys().map(String::as_str).collect()
    }

    fn contains(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sorted() {
        let store: MemoryDocumentStore = ["b.b.b", "a.a.a", "c.c.c"]
            .into_iter()
            .map(Document::new)
            .collect();
        assert_eq!(store.ids(), vec!["a.a.a", "b.b.b", "c.c.c"]);
        assert!(store.contains("b.b.b"));
        assert!(!store.contains("d.d.d"));
        assert_eq!(store.documents().len(), 3);
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let mut store = MemoryDocumentStore::new();
        assert!(store.insert(Document::new("a.b.c")).is_none());
        assert!(store.insert(Document::new("a.b.c")).is_some());
        assert_eq!(store.len(), 1);
    }
}
