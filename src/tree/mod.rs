//! Field tree
//!
//! Navigable, diff-annotated field tree of a document:
//! - `path`: stable addresses of nodes
//! - `state`: expand/collapse flags keyed by path
//! - `node`: the tree itself, materialized from the expansion state
//! - `render`: display cards with badges and constraint strips

pub mod node;
pub mod path;
pub mod render;
pub mod state;

pub use node::{DefinitionView, FieldNode, FieldTree, SectionView, lookup};
pub use path::NodePath;
pub use render::{
    Badge, Constraint, DefinitionCard, FieldCard, FieldRenderer, RenderOptions, SectionCard,
    Truncated,
};
pub use state::{ExpansionState, NodeState};
