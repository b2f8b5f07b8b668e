//! Interactive composition against the loaded texts.
//!
//! Each input line is either typed at the caret or, when it starts with
//! `:`, drives the completion controller:
//!
//! ```text
//! :accept  paste the focused suggestion
//! :next    paste the sentence after the last one
//! :undo    take back the last paste
//! :down    focus the next suggestion
//! :up      focus the previous suggestion
//! :esc     hide the suggestion list
//! :show    print the text with its caret
//! :quit    leave
//! ```

use super::load_index;
use super::search::highlight;
use crate::config::Config;
use anyhow::{anyhow, Result};
use autocompaste_editor::{
    DisplaySurface, Editor, EditorConfig, EditorEvent, ListGeometry, StringSurface, TextSurface,
};
use autocompaste_engine::{Index, Suggestion};
use clap::Args;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// Text source manifest (overrides config)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,
}

pub fn compose(args: ComposeArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let index = load_index(&config, cwd, args.manifest.as_deref())?;

    println!(
        "{} {} texts loaded. Type to compose, :quit to leave.",
        "✍".bright_blue(),
        index.len()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&index, config.editor, stdin.lock(), stdout.lock())
}

/// Suggestion list as last pushed by the controller
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    list: Option<(Vec<Suggestion>, usize)>,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        let Some((suggestions, focused)) = &self.list else {
            return Ok(());
        };

        for (position, suggestion) in suggestions.iter().enumerate() {
            let marker = if position == *focused { ">" } else { " " };
            writeln!(
                out,
                "  {} {} {}",
                marker.green().bold(),
                highlight(suggestion),
                format!("({})", suggestion.document_id).dimmed()
            )?;
        }
        Ok(())
    }
}

impl DisplaySurface for TerminalDisplay {
    fn show_list(&mut self, suggestions: &[Suggestion], focused: usize, _geometry: &ListGeometry) {
        self.list = Some((suggestions.to_vec(), focused));
    }

    fn hide_list(&mut self) {
        self.list = None;
    }
}

enum Input<'a> {
    Type(&'a str),
    Event(EditorEvent),
    Show,
    Quit,
}

fn parse_input(line: &str) -> Result<Input<'_>> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(Input::Type(line));
    };

    let input = match command.trim() {
        "accept" => Input::Event(EditorEvent::Accept),
        "next" => Input::Event(EditorEvent::Advance),
        "undo" => Input::Event(EditorEvent::Retreat),
        "down" => Input::Event(EditorEvent::FocusDelta(1)),
        "up" => Input::Event(EditorEvent::FocusDelta(-1)),
        "esc" => Input::Event(EditorEvent::Escape),
        "show" => Input::Show,
        "quit" => Input::Quit,
        other => return Err(anyhow!("Unknown command :{}", other)),
    };
    Ok(input)
}

/// Drive an editor from `input` until `:quit` or end of input
pub fn run(
    index: &Index,
    config: EditorConfig,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    let mut editor = Editor::new(StringSurface::new(), TerminalDisplay::new(), config)?;

    for line in input.lines() {
        let line = line?;

        match parse_input(&line) {
            Ok(Input::Type(text)) => {
                editor.text_surface_mut().type_text(text);
                editor.dispatch(index, EditorEvent::TextChanged)?;
            }
            Ok(Input::Event(event)) => {
                editor.dispatch(index, event)?;
            }
            Ok(Input::Show) => {
                let surface = editor.text_surface();
                let (before, after) = surface.text().split_at(surface.caret());
                writeln!(out, "{}{}{}", before, "|".green().bold(), after)?;
                continue;
            }
            Ok(Input::Quit) => break,
            Err(e) => {
                writeln!(out, "{}", e.to_string().red())?;
                continue;
            }
        }

        writeln!(out, "{}", editor.text_surface().text())?;
        editor.display_surface().render(&mut out)?;
    }

    out.flush()?;
    Ok(())
}
