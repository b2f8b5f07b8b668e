use super::{load_index, Format};
use crate::config::Config;
use anyhow::Result;
use autocompaste_engine::Suggestion;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for
    pub query: String,

    /// Text source manifest (overrides config)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

pub fn search(args: SearchArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let index = load_index(&config, cwd, args.manifest.as_deref())?;

    let results = index.search(&args.query);
    print!("{}", render(&results, args.format)?);
    Ok(())
}

fn render(results: &[Suggestion], format: Format) -> Result<String> {
    if format == Format::Json {
        return Ok(serde_json::to_string_pretty(results)? + "\n");
    }

    if results.is_empty() {
        return Ok(format!("{}\n", "No matching sentences".yellow()));
    }

    let mut out = String::new();
    for suggestion in results {
        out.push_str(&format!(
            "{} {}\n",
            format!("[{} #{}]", suggestion.document_id, suggestion.sentence_index).dimmed(),
            highlight(suggestion)
        ));
    }
    Ok(out)
}

/// The sentence with its matched span emphasised
pub fn highlight(suggestion: &Suggestion) -> String {
    let sentence = &suggestion.sentence;
    format!(
        "{}{}{}",
        &sentence[..suggestion.start],
        suggestion.matched().yellow().bold(),
        &sentence[suggestion.end..]
    )
}
