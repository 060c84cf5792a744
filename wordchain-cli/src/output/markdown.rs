//! Markdown report formatter

use super::{joined_longest_words, ChainFormatter};
use anyhow::Result;
use std::io::Write;
use wordchain_core::ChainSet;

/// Markdown formatter - headed sections with a numbered chain list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn chain_items(&mut self, set: &ChainSet, indices: &[usize]) -> Result<()> {
        for (item, &index) in indices.iter().enumerate() {
            if let Some(chain) = set.chains().get(index) {
                writeln!(self.writer, "{}. Chain #{}: {}", item + 1, index, chain)?;
            }
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> ChainFormatter for MarkdownFormatter<W> {
    fn write_report(&mut self, set: &ChainSet) -> Result<()> {
        let all: Vec<usize> = (0..set.len()).collect();
        let longest = set.longest_chains();
        let words = set.longest_words();

        writeln!(self.writer, "# Word Chains")?;
        writeln!(self.writer)?;
        self.chain_items(set, &all)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Longest Chains")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "*{} words each*", longest.size)?;
        writeln!(self.writer)?;
        self.chain_items(set, &longest.indices)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Longest Words")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "*{}* ({} letters)",
            joined_longest_words(set),
            words.length
        )?;
        writeln!(self.writer)?;
        self.chain_items(set, &words.chains())?;

        let stats = set.stats();
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total chains: {}, words admitted: {}*",
            set.len(),
            stats.admitted()
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{sample_set, SharedBuffer};
    use super::*;

    fn report(set: &ChainSet) -> String {
        let buffer = SharedBuffer::default();
        MarkdownFormatter::new(buffer.clone())
            .write_report(set)
            .unwrap();
        buffer.contents()
    }

    #[test]
    fn test_numbered_chain_list() {
        let text = report(&sample_set());
        assert!(text.starts_with("# Word Chains\n\n1. Chain #0: dog cog cot cat\n"));
        assert!(text.contains("2. Chain #1: ski sky\n3. Chain #2: hats\n"));
    }

    #[test]
    fn test_longest_sections() {
        let text = report(&sample_set());
        assert!(text.contains("## Longest Chains\n\n*4 words each*\n\n1. Chain #0: dog cog cot cat\n"));
        assert!(text.contains("## Longest Words\n\n*hats* (4 letters)\n\n1. Chain #2: hats\n"));
    }

    #[test]
    fn test_footer() {
        let text = report(&sample_set());
        assert!(text.ends_with("---\n*Total chains: 3, words admitted: 7*\n"));
    }
}
