pub mod compose;
pub mod search;
pub mod segment;

pub use compose::{compose, ComposeArgs};
pub use search::{search, SearchArgs};
pub use segment::{segment, SegmentArgs};

use crate::config::Config;
use anyhow::{anyhow, Result};
use autocompaste_corpus::{index_sources, load_manifest, FsDocumentSource};
use autocompaste_engine::Index;
use clap::ValueEnum;
use colored::Colorize;
use std::path::Path;

/// Output format shared by the reporting commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Build an index from the manifest named by the config or `--manifest`
pub fn load_index(config: &Config, cwd: &Path, manifest: Option<&Path>) -> Result<Index> {
    let manifest_path = config.manifest_path(cwd, manifest);
    if !manifest_path.exists() {
        return Err(anyhow!(
            "Text source manifest does not exist: {}",
            manifest_path.display()
        ));
    }

    let sources = load_manifest(&manifest_path)?;
    let mut index = Index::with_options(config.index.clone());
    let report = index_sources(
        &mut index,
        &FsDocumentSource::for_manifest(&manifest_path),
        &sources,
    );

    for (source, err) in &report.failed {
        eprintln!("  {} {} - {}", "✗".red(), source.title, err.to_string().red());
    }

    Ok(index)
}
