//! CLI command implementations

pub mod browse;
pub mod compare;
pub mod refs;

use lexicon_explorer::{Catalog, ExplorerConfig, MemoryDocumentStore, load_dir};
use std::path::Path;
use tracing::info;

use crate::error::CliError;

/// Inputs shared by every command that reads the lexicon directory
pub struct Session {
    pub store: MemoryDocumentStore,
    pub catalog: Catalog,
    pub config: ExplorerConfig,
}

impl Session {
    pub fn load(
        lexicons: &Path,
        catalog: Option<&Path>,
        config: Option<&Path>,
    ) -> Result<Self, CliError> {
        let store = load_dir(lexicons)?;
        let catalog = match catalog {
            Some(path) => Catalog::load(path)?,
            None => Catalog::default(),
        };
        let config = match config {
            Some(path) => ExplorerConfig::load(path)?,
            None => ExplorerConfig::default(),
        };
        info!(
            "Session ready: {} documents, {} catalog entries",
            store.len(),
            catalog.len()
        );
        Ok(Self {
            store,
            catalog,
            config,
        })
    }
}
