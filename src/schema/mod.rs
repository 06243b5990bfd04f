//! Schema introspection
//!
//! Normalizes heterogeneous definition shapes into labeled property sections
//! and computes shallow field counts over them.

pub mod count;
pub mod normalize;

pub use count::{count_definition, count_document, count_schema};
pub use normalize::{SchemaSection, SectionLabel, normalize, section};
