//! Per-node expand/collapse state
//!
//! Every node starts collapsed. Activating an expandable node flips its state;
//! activating a non-expandable node does nothing. Flags are keyed by path and
//! owned here, never stored on the shared definitions, so toggling one node
//! leaves every other flag untouched, including those of its descendants.

use serde::Serialize;
use std::collections::BTreeMap;

use super::path::NodePath;

/// Expansion state of a single node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum NodeState {
    #[default]
    Collapsed,
    Expanded,
}

impl NodeState {
    pub fn toggled(self) -> Self {
        match self {
            NodeState::Collapsed => NodeState::Expanded,
            NodeState::Expanded => NodeState::Collapsed,
        }
    }
}

/// Map from node path to expansion state for the currently rendered tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionState {
    flags: BTreeMap<NodePath, NodeState>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &NodePath) -> NodeState {
        self.flags.get(path).copied().unwrap_or_default()
    }

    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.get(path) == NodeState::Expanded
    }

    /// Activate a node
    ///
    /// Returns the new state, or `None` when the node is not expandable and no
    /// transition happened.
    pub fn toggle(&mut self, path: &NodePath, expandable: bool) -> Option<NodeState> {
        if !expandable {
            return None;
        }
        let next = self.get(path).toggled();
        match next {
            NodeState::Expanded => {
                self.flags.insert(path.clone(), next);
            }
            NodeState::Collapsed => {
                self.flags.remove(path);
            }
        }
        Some(next)
    }

    /// Paths currently flagged as expanded
    pub fn expanded_paths(&self) -> impl Iterator<Item = &NodePath> {
        self.flags
            .iter()
            .filter(|(_, state)| **state == NodeState::Expanded)
            .map(|(path, _)| path)
    }

    /// Reset every node to collapsed
    pub fn clear(&mut self) {
        self.flags.clear();
    }
}
