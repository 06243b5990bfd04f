//! Change annotation
//!
//! Tags fields as new/modified from supplied change sets, and compares the
//! before/after variants of a document.

pub mod annotate;
pub mod compare;

pub use annotate::{ChangeSet, ChangeStatus, DiffAnnotator, DiffTag};
pub use compare::{Comparison, top_level_names};
