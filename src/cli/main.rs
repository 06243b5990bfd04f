//! Lexicon explorer CLI entry point

mod commands;
mod error;
mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::Session;

/// Browse lexicon documents: field trees, counts, references and revisions.
#[derive(Parser, Debug)]
#[command(name = "lexicon-explorer", version, about)]
struct Cli {
    /// Directory of lexicon JSON documents
    #[arg(long, global = true, default_value = "lexicons")]
    lexicons: PathBuf,

    /// Catalog of document metadata (YAML or JSON)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Explorer configuration (YAML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List documents with their field counts
    List,
    /// Render a document's field tree
    Show {
        id: String,
        /// Expand a field, as definition/Section/field[/child...]
        #[arg(long)]
        expand: Vec<String>,
    },
    /// Print a document's field count
    Count { id: String },
    /// Resolve a reference to a document id
    Resolve { reference: String },
    /// Compare two revisions of a document
    Compare { before: PathBuf, after: PathBuf },
    /// Show references of a document, or every dangling reference
    Refs { id: Option<String> },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Compare { before, after } = &cli.command {
        commands::compare::handle_compare(before, after).context("compare failed")?;
        return Ok(());
    }

    let session = Session::load(&cli.lexicons, cli.catalog.as_deref(), cli.config.as_deref())
        .with_context(|| format!("failed to load lexicons from {}", cli.lexicons.display()))?;

    match cli.command {
        Commands::List => commands::browse::handle_list(&session)?,
        Commands::Show { id, expand } => commands::browse::handle_show(session, &id, &expand)?,
        Commands::Count { id } => commands::browse::handle_count(&session, &id)?,
        Commands::Resolve { reference } => commands::refs::handle_resolve(&session, &reference)?,
        Commands::Refs { id } => commands::refs::handle_refs(&session, id.as_deref())?,
        Commands::Compare { .. } => {}
    }

    Ok(())
}
