use super::Format;
use anyhow::Result;
use autocompaste_engine::{segment_paragraphs, segment_sentences, segment_words};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Text file to segment
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Segmentation {
    paragraphs: Vec<String>,
    sentences: Vec<String>,
    word_count: usize,
}

impl Segmentation {
    fn of(text: &str) -> Self {
        Self {
            paragraphs: segment_paragraphs(text),
            sentences: segment_sentences(text),
            word_count: segment_words(text).len(),
        }
    }
}

pub fn segment(args: SegmentArgs, cwd: &Path) -> Result<()> {
    let text = fs::read_to_string(cwd.join(&args.file))?;
    print!("{}", render(&Segmentation::of(&text), args.format)?);
    Ok(())
}

fn render(segmentation: &Segmentation, format: Format) -> Result<String> {
    if format == Format::Json {
        return Ok(serde_json::to_string_pretty(segmentation)? + "\n");
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        "Paragraphs:".bright_blue().bold(),
        segmentation.paragraphs.len()
    ));
    out.push_str(&format!(
        "{} {}\n",
        "Sentences:".bright_blue().bold(),
        segmentation.sentences.len()
    ));
    for (i, sentence) in segmentation.sentences.iter().enumerate() {
        out.push_str(&format!("  {:>4}  {}\n", i.to_string().dimmed(), sentence));
    }
    out.push_str(&format!(
        "{} {}\n",
        "Words:".bright_blue().bold(),
        segmentation.word_count
    ));
    Ok(out)
}
