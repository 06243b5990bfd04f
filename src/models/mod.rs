//! Models module
//!
//! Defines the lexicon document shape the engine interprets:
//! documents, definitions (dispatched by kind), field schemas and references.

pub mod definition;
pub mod document;
pub mod field;
pub mod ordered;
pub mod reference;

pub use definition::{
    Body, Definition, DefinitionKind, ObjectDef, ProcedureDef, QueryDef, RecordDef, SchemaObject,
    SubscriptionDef,
};
pub use document::Document;
pub use field::{FieldDef, FieldType, Properties};
pub use ordered::OrderedMap;
pub use reference::{DEFAULT_DEFINITION, Reference};
