//! List, show and count commands

use lexicon_explorer::tree::NodePath;
use lexicon_explorer::{DocumentStore, Explorer, count_document};
use tracing::warn;

use super::Session;
use crate::error::CliError;
use crate::output::{DocumentRow, format_document, format_document_list};

/// Handle the list command
pub fn handle_list(session: &Session) -> Result<(), CliError> {
    let store = &session.store;
    let mut rows = Vec::new();

    for category in session.catalog.categories() {
        for meta in session.catalog.by_category(category) {
            if let Some(document) = store.get(&meta.id) {
                rows.push(DocumentRow {
                    id: &meta.id,
                    field_count: count_document(document),
                    meta: Some(meta),
                });
            }
        }
    }
    for document in store.documents() {
        if session.catalog.get(&document.id).is_none() {
            rows.push(DocumentRow {
                id: &document.id,
                field_count: count_document(document),
                meta: None,
            });
        }
    }

    print!("{}", format_document_list(&rows));
    Ok(())
}

/// Handle the show command
pub fn handle_show(session: Session, id: &str, expand: &[String]) -> Result<(), CliError> {
    let mut explorer = Explorer::new(session.store, session.catalog, session.config)?;
    if !explorer.select_document(id) {
        return Err(CliError::UnknownDocument(id.to_string()));
    }

    for raw in expand {
        let path = NodePath::parse(raw).ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "Invalid node path {}, expected definition/Section/field",
                raw
            ))
        })?;
        if explorer.toggle(&path).is_none() {
            warn!("{} is not an expandable field", raw);
        }
    }

    let replacement = explorer.replacement_link();
    print!(
        "{}",
        format_document(
            id,
            explorer.selected_meta(),
            explorer.field_count(),
            replacement.as_ref(),
            &explorer.render(),
        )
    );
    Ok(())
}

/// Handle the count command
pub fn handle_count(session: &Session, id: &str) -> Result<(), CliError> {
    let document = session
        .store
        .get(id)
        .ok_or_else(|| CliError::UnknownDocument(id.to_string()))?;
    println!("{}", count_document(document));
    Ok(())
}
