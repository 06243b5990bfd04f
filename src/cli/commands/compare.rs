//! Compare command implementation

use lexicon_explorer::{Comparison, Document};
use std::path::Path;

use crate::error::CliError;
use crate::output::format_comparison;

/// Read and parse one revision of a document
fn load_revision(path: &Path) -> Result<Document, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
    Ok(Document::from_json_str(&content)?)
}

/// Build the comparison report for two revision files
///
/// The report is labeled with the after document's id, falling back to the
/// before document's id when the revision has none.
pub fn compare_files(before: &Path, after: &Path) -> Result<Comparison, CliError> {
    let before = load_revision(before)?;
    let after = load_revision(after)?;
    let id = if after.id.is_empty() { &before.id } else { &after.id };
    Ok(Comparison::between(id.as_str(), &before, &after))
}

/// Handle the compare command
pub fn handle_compare(before: &Path, after: &Path) -> Result<(), CliError> {
    let comparison = compare_files(before, after)?;
    print!("{}", format_comparison(&comparison));
    Ok(())
}
