//! File system loading
//!
//! Reads lexicon documents from a directory tree of `*.json` files into a
//! [`MemoryDocumentStore`]. A document's id comes from its `id` field, not its
//! file name.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{DocumentStore, MemoryDocumentStore};
use crate::error::LexiconError;
use crate::models::Document;

/// Load a single document from a JSON file
pub fn load_file(path: impl AsRef<Path>) -> Result<Document, LexiconError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| LexiconError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    Document::from_json_str(&content)
        .map_err(|e| LexiconError::Parse(format!("{}: {}", path.display(), e)))
}

/// Load every `*.json` document below `dir`
///
/// Files are visited in sorted path order. Unreadable or unparsable files and
/// documents without an id are skipped with a warning. When two files declare
/// the same id, the first one loaded wins.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<MemoryDocumentStore, LexiconError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(LexiconError::Io(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    collect_json_files(dir, &mut files)?;
    files.sort();

    let mut store = MemoryDocumentStore::new();
    let mut skipped = 0usize;
    for file in &files {
        match load_file(file) {
            Ok(document) if document.id.is_empty() => {
                warn!("Skipping {}: document has no id", file.display());
                skipped += 1;
            }
            Ok(document) if store.contains(&document.id) => {
                warn!(
                    "Skipping {}: duplicate document id {}",
                    file.display(),
                    document.id
                );
                skipped += 1;
            }
            Ok(document) => {
                debug!("Loaded {} from {}", document.id, file.display());
                store.insert(document);
            }
            Err(e) => {
                warn!("Failed to load lexicon from {}: {}", file.display(), e);
                skipped += 1;
            }
        }
    }

    info!(
        "Loaded {} lexicon documents ({} skipped) from {}",
        store.len(),
        skipped,
        dir.display()
    );
    Ok(store)
}

fn collect_json_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), LexiconError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_json_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            out.push(path);
        }
    }
    Ok(())
}
