//! Explorer session
//!
//! Owns the only mutable state of a browsing session: the selected document id
//! and the expand/collapse flags of the tree currently rendered. Everything
//! else (documents, catalog, resolver) is fixed when the session starts.

use tracing::{debug, info};

use crate::catalog::{Catalog, LexiconMeta};
use crate::config::ExplorerConfig;
use crate::diff::ChangeSet;
use crate::error::LexiconError;
use crate::models::Document;
use crate::resolve::{RefLink, ReferenceResolver};
use crate::schema::count_document;
use crate::store::DocumentStore;
use crate::tree::{
    DefinitionCard, ExpansionState, FieldRenderer, FieldTree, NodePath, NodeState, lookup,
};

/// Browsing session over a document store
pub struct Explorer<S: DocumentStore> {
    store: S,
    catalog: Catalog,
    config: ExplorerConfig,
    resolver: ReferenceResolver,
    selected: Option<String>,
    changes: ChangeSet,
    expansion: ExpansionState,
}

impl<S: DocumentStore> Explorer<S> {
    /// Start a session
    ///
    /// The initial document is the configured one, else the first catalog
    /// entry present in the store, else the first known id. A configured
    /// initial document that is not in the store is an error.
    pub fn new(store: S, catalog: Catalog, config: ExplorerConfig) -> Result<Self, LexiconError> {
        let resolver = ReferenceResolver::from_store(&store);
        let initial = match &config.initial_document {
            Some(id) if !store.contains(id) => {
                return Err(LexiconError::UnknownDocument(id.clone()));
            }
            Some(id) => Some(id.clone()),
            None => catalog
                .ids()
                .find(|id| store.contains(id))
                .or_else(|| store.ids().first().copied())
                .map(str::to_string),
        };

        info!(
            "Starting explorer over {} documents ({} catalog entries)",
            resolver.known_ids().len(),
            catalog.len()
        );

        let mut explorer = Self {
            store,
            catalog,
            config,
            resolver,
            selected: None,
            changes: ChangeSet::default(),
            expansion: ExpansionState::new(),
        };
        if let Some(id) = initial {
            explorer.select_document(&id);
        }
        Ok(explorer)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn resolver(&self) -> &ReferenceResolver {
        &self.resolver
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_document(&self) -> Option<&Document> {
        self.store.get(self.selected.as_deref()?)
    }

    /// Catalog entry of the selected document, if any
    pub fn selected_meta(&self) -> Option<&LexiconMeta> {
        self.catalog.get(self.selected.as_deref()?)
    }

    /// Change sets driving the tags of the selected document
    pub fn change_set(&self) -> &ChangeSet {
        &self.changes
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Select a document
    ///
    /// Unknown ids leave the session untouched and return `false`. Selecting
    /// another document starts it with every node collapsed; re-selecting the
    /// current document keeps its expansion state.
    pub fn select_document(&mut self, id: &str) -> bool {
        if !self.store.contains(id) {
            debug!("Ignoring selection of unknown document {}", id);
            return false;
        }
        if self.selected.as_deref() == Some(id) {
            return true;
        }
        debug!("Selecting document {}", id);
        self.selected = Some(id.to_string());
        self.changes = self.catalog.change_set(id);
        self.expansion.clear();
        true
    }

    /// Activate a reference link
    ///
    /// Returns the newly selected id. An unresolved reference is a no-op
    /// returning `Ok(None)`, or an error when strict references are configured.
    pub fn activate_reference(&mut self, reference: &str) -> Result<Option<String>, LexiconError> {
        let target = if self.config.strict_references {
            self.resolver.resolve_strict(reference)?
        } else {
            match self.resolver.resolve(reference) {
                Some(id) => id.to_string(),
                None => {
                    debug!("Reference {} matches no document, staying on current view", reference);
                    return Ok(None);
                }
            }
        };
        self.select_document(&target);
        Ok(Some(target))
    }

    /// Activate a node of the current tree
    ///
    /// Returns the node's new state, or `None` when the path matches no field
    /// or the field is not expandable.
    pub fn toggle(&mut self, path: &NodePath) -> Option<NodeState> {
        let expandable = self
            .selected_document()
            .and_then(|document| lookup(document, path))
            .is_some_and(|def| def.is_expandable());
        let state = self.expansion.toggle(path, expandable);
        debug!("Toggled {}: {:?}", path, state);
        state
    }

    /// Field tree of the selected document under the current expansion state
    pub fn tree(&self) -> Option<FieldTree<'_>> {
        let document = self.selected_document()?;
        Some(FieldTree::new(document, &self.changes, &self.expansion))
    }

    /// Total field count of the selected document
    pub fn field_count(&self) -> usize {
        self.selected_document().map(count_document).unwrap_or(0)
    }

    /// Render the selected document
    pub fn render(&self) -> Vec<DefinitionCard> {
        let renderer = FieldRenderer::new(&self.resolver, self.config.render_options());
        self.tree()
            .map(|tree| renderer.render_tree(&tree))
            .unwrap_or_default()
    }

    /// Link to the replacement of the selected document when it is deprecated
    pub fn replacement_link(&self) -> Option<RefLink> {
        let meta = self.selected_meta()?;
        if !meta.deprecated {
            return None;
        }
        let replacement = meta.deprecated_replacement.as_deref()?;
        Some(self.resolver.ref_link(replacement))
    }
}
