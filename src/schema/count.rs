//! Shallow field counting
//!
//! The count is a headline metric compared between the before and after
//! variants of a document. Only directly declared properties count: an object
//! field with nested properties counts once toward its parent.

use super::normalize::normalize;
use crate::models::{Definition, Document, Properties};

/// Number of directly declared properties
pub fn count_schema(properties: &Properties) -> usize {
    properties.len()
}

/// Sum of [`count_schema`] over every normalized section of the definition
pub fn count_definition(definition: &Definition) -> usize {
    normalize(definition)
        .iter()
        .map(|section| count_schema(section.properties))
        .sum()
}

/// Sum of [`count_definition`] over every definition of the document
pub fn count_document(document: &Document) -> usize {
    document.defs.values().map(count_definition).sum()
}
