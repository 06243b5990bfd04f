//! Resolve and refs commands

use lexicon_explorer::{DocumentStore, ReferenceGraph, ReferenceResolver};

use super::Session;
use crate::error::CliError;
use crate::output::format_dangling;

/// Handle the resolve command
pub fn handle_resolve(session: &Session, reference: &str) -> Result<(), CliError> {
    let resolver = ReferenceResolver::from_store(&session.store);
    if session.config.strict_references {
        println!("{}", resolver.resolve_strict(reference)?);
        return Ok(());
    }
    match resolver.resolve(reference) {
        Some(id) => println!("{}", id),
        None => println!("unresolved"),
    }
    Ok(())
}

/// Handle the refs command
///
/// With an id, lists the documents it references and the documents
/// referencing it. Without one, lists every dangling reference.
pub fn handle_refs(session: &Session, id: Option<&str>) -> Result<(), CliError> {
    let graph = ReferenceGraph::build(&session.store);

    let Some(id) = id else {
        print!("{}", format_dangling(graph.dangling()));
        return Ok(());
    };
    if !session.store.contains(id) {
        return Err(CliError::UnknownDocument(id.to_string()));
    }

    println!("{}", id);
    println!("  References:");
    for target in graph.references_from(id) {
        println!("    → {}", target);
    }
    println!("  Referenced by:");
    for source in graph.referenced_by(id) {
        println!("    ← {}", source);
    }
    let dangling: Vec<_> = graph
        .dangling()
        .iter()
        .filter(|d| d.document == id)
        .cloned()
        .collect();
    if !dangling.is_empty() {
        print!("{}", format_dangling(&dangling));
    }
    Ok(())
}
