//! Report formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use wordchain_core::ChainSet;

/// Trait for report formatters
pub trait ChainFormatter: Send + Sync {
    /// Write the full report for a finished chain set
    fn write_report(&mut self, set: &ChainSet) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Banner sections listing chains, longest chains and longest words
    #[default]
    Text,
    /// JSON document with chains, longest chains, longest words and counts
    Json,
    /// Markdown sections with a numbered chain list
    Markdown,
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W>(format: OutputFormat, writer: W) -> Box<dyn ChainFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Words of each listed chain joined by ", " for longest-word lines
pub(crate) fn joined_longest_words(set: &ChainSet) -> String {
    set.longest_words()
        .locations
        .iter()
        .map(|l| l.word.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
