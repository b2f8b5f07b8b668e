//! Text segmentation for the index.
//!
//! Reference texts are broken down into three granularities:
//!
//! - **Paragraphs**: separated by two consecutive line breaks.
//! - **Sentences**: separated by `.`, `?`, `!` and line breaks. The
//!   terminator stays attached to the sentence it ends, so a suggestion
//!   carries its own punctuation.
//! - **Words**: separated by whitespace.

use logos::Logos;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n\r?\n").expect("paragraph break pattern is valid"));

/// Token types produced while segmenting sentences
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceToken<'src> {
    /// A sentence terminator: `.`, `?` or `!`
    #[regex(r"[.?!]", |lex| lex.slice())]
    Terminator(&'src str),

    #[regex(r"[\r\n]")]
    LineBreak,

    /// Any run of characters between terminators and line breaks
    #[regex(r"[^.?!\r\n]+", |lex| lex.slice())]
    Text(&'src str),
}

impl fmt::Display for SentenceToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentenceToken::Terminator(t) => write!(f, "{}", t),
            SentenceToken::LineBreak => write!(f, "\\n"),
            SentenceToken::Text(run) => write!(f, "{:?}", run),
        }
    }
}

/// Lex `text` into sentence tokens with their byte spans
pub fn tokenize(text: &str) -> Vec<(SentenceToken<'_>, std::ops::Range<usize>)> {
    let lexer = SentenceToken::lexer(text);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, span)))
        .collect()
}

/// Split `text` into paragraphs on blank lines.
///
/// No trimming happens beyond the split itself, so three or more line
/// breaks in a row leave empty paragraphs behind.
pub fn segment_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK.split(text).map(str::to_string).collect()
}

/// Split `text` into trimmed, non-empty sentences.
///
/// Every text run opens a new sentence and every terminator is appended to
/// the most recent one, which keeps ellipses and `?!` runs together.
/// Terminators that appear before any text have nowhere to go and are
/// dropped.
pub fn segment_sentences(text: &str) -> Vec<String> {
    let mut sentences: Vec<String> = Vec::new();

    for (token, span) in tokenize(text) {
        tracing::trace!("sentence token {} at {:?}", token, span);

        match token {
            SentenceToken::LineBreak => {}
            SentenceToken::Text(run) => sentences.push(run.to_string()),
            SentenceToken::Terminator(terminator) => match sentences.last_mut() {
                Some(current) => current.push_str(terminator),
                None => tracing::trace!("dropping leading terminator at {:?}", span),
            },
        }
    }

    sentences
        .into_iter()
        .map(|sentence| sentence.trim().to_string())
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Split `text` into whitespace-separated words
pub fn segment_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
