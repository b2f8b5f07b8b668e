mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{compose, search, segment, ComposeArgs, SearchArgs, SegmentArgs};
use tracing_subscriber::EnvFilter;

/// AutoComPaste - sentence completion from reference texts
#[derive(Parser, Debug)]
#[command(name = "autocompaste")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a text file into paragraphs, sentences and words
    Segment(SegmentArgs),

    /// Find sentences containing a query
    Search(SearchArgs),

    /// Compose text with completion from the loaded texts
    Compose(ComposeArgs),
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Segment(args) => segment(args, &cwd),
            Command::Search(args) => search(args, &cwd),
            Command::Compose(args) => compose(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
