//! Lexicon Explorer - schema introspection for lexicon documents
//!
//! Provides unified interfaces for:
//! - Document models and loading (via document stores)
//! - Normalizing definitions into labeled field sections
//! - Field counting across definition shapes
//! - Cross-document reference resolution and indexing
//! - Change annotation and before/after comparison
//! - Navigable field trees with per-node expansion state

pub mod catalog;
pub mod config;
pub mod diff;
pub mod error;
pub mod explorer;
pub mod models;
pub mod resolve;
pub mod schema;
pub mod store;
pub mod tree;

// Re-export commonly used types
pub use catalog::{Catalog, LexiconMeta};
pub use config::ExplorerConfig;
pub use error::LexiconError;
pub use explorer::Explorer;
pub use store::{DocumentStore, MemoryDocumentStore, load_dir};

// Re-export models
pub use models::{Definition, DefinitionKind, Document, FieldDef, FieldType, Reference};

pub use diff::{ChangeSet, Comparison, DiffAnnotator, DiffTag};
pub use resolve::{ReferenceGraph, ReferenceResolver, resolve};
pub use schema::{SchemaSection, SectionLabel, count_definition, count_document, normalize};
pub use tree::{ExpansionState, FieldCard, FieldRenderer, FieldTree, NodePath, NodeState};
