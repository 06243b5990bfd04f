//! Reference resolution for navigation
//!
//! A reference resolves to a document id when the segment before the first
//! `#` exactly matches a known id. The fragment is ignored: navigation always
//! lands on the referenced document's default view. References that match
//! nothing resolve to `None` and are shown as inert text.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::error::LexiconError;
use crate::models::Reference;
use crate::store::DocumentStore;

/// Resolve a reference against a set of known document ids
///
/// Pure: the same reference and the same id set always give the same result.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeSet;
/// use lexicon_explorer::resolve::resolve;
///
/// let known: BTreeSet<String> = ["app.gainforest.dwc.occurrence".to_string()].into();
/// assert_eq!(
///     resolve("app.gainforest.dwc.occurrence#main", &known),
///     Some("app.gainforest.dwc.occurrence")
/// );
/// assert_eq!(resolve("app.unknown.ns#main", &known), None);
/// ```
pub fn resolve<'r>(reference: &'r str, known_ids: &BTreeSet<String>) -> Option<&'r str> {
    let document_id = Reference::parse(reference).document_id();
    known_ids.contains(document_id).then_some(document_id)
}

/// A rendered reference: clickable when `target` is set, inert otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefLink {
    /// Reference string as declared
    pub reference: String,
    /// Display text
    pub label: String,
    /// Document selected when the link is activated
    pub target: Option<String>,
}

impl RefLink {
    pub fn is_navigable(&self) -> bool {
        self.target.is_some()
    }
}

/// Resolver over the fixed set of document ids known for a session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceResolver {
    known_ids: BTreeSet<String>,
}

impl ReferenceResolver {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolver over every document of the store
    pub fn from_store<S: DocumentStore + ?Sized>(store: &S) -> Self {
        Self::new(store.ids())
    }

    pub fn known_ids(&self) -> &BTreeSet<String> {
        &self.known_ids
    }

    pub fn is_known(&self, id: &str) -> bool {
        self.known_ids.contains(id)
    }

    /// See [`resolve`]
    pub fn resolve<'r>(&self, reference: &'r str) -> Option<&'r str> {
        resolve(reference, &self.known_ids)
    }

    /// Resolve, reporting an unresolved reference as an error
    pub fn resolve_strict(&self, reference: &str) -> Result<String, LexiconError> {
        self.resolve(reference)
            .map(str::to_string)
            .ok_or_else(|| LexiconError::UnresolvedReference {
                reference: reference.to_string(),
            })
    }

    /// Link for a `ref` field, labeled with the full reference
    pub fn ref_link(&self, reference: &str) -> RefLink {
        RefLink {
            reference: reference.to_string(),
            label: reference.to_string(),
            target: self.resolve(reference).map(str::to_string),
        }
    }

    /// Links for a `union` field, one per member, labeled with the short name
    ///
    /// Each member resolves independently with the same contract as a single ref.
    pub fn union_links<S: AsRef<str>>(&self, refs: &[S]) -> Vec<RefLink> {
        refs.iter()
            .map(|r| {
                let reference = r.as_ref();
                RefLink {
                    reference: reference.to_string(),
                    label: Reference::parse(reference).short_label().to_string(),
                    target: self.resolve(reference).map(str::to_string),
                }
            })
            .collect()
    }
}
