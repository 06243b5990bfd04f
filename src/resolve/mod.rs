//! Reference resolution
//!
//! Maps reference strings to document ids for navigation, and indexes the
//! references between documents.

pub mod graph;
pub mod resolver;

pub use graph::{DanglingReference, ReferenceGraph};
pub use resolver::{RefLink, ReferenceResolver, resolve};
