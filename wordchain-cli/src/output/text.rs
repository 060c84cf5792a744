//! Plain text report formatter

use super::{joined_longest_words, ChainFormatter};
use anyhow::Result;
use std::io::{self, Write};
use wordchain_core::ChainSet;

const RULE: &str = "----------------------------------------------";

/// Plain text formatter - three banner sections
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn banner(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.writer, "{RULE}")?;
        writeln!(self.writer, "{}", format!("{title:^46}").trim_end())?;
        writeln!(self.writer, "{RULE}")
    }

    fn chain_line(&mut self, set: &ChainSet, index: usize, indent: &str) -> io::Result<()> {
        match set.chains().get(index) {
            Some(chain) => writeln!(self.writer, "{indent}Chain #{index}: {chain}"),
            None => Ok(()),
        }
    }
}

impl<W: Write + Send + Sync> ChainFormatter for TextFormatter<W> {
    fn write_report(&mut self, set: &ChainSet) -> Result<()> {
        self.banner("LISTING ALL WORD CHAINS")?;
        for index in 0..set.len() {
            self.chain_line(set, index, "")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer)?;

        let longest = set.longest_chains();
        self.banner("FINDING LONGEST WORD CHAIN")?;
        writeln!(self.writer, "The longest chain(s) are:")?;
        for &index in &longest.indices {
            self.chain_line(set, index, "    ")?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Each chain(s) contain {} total words.",
            longest.size
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer)?;

        let words = set.longest_words();
        self.banner("FINDING LONGEST STRING")?;
        writeln!(
            self.writer,
            "The longest string(s) are: {}",
            joined_longest_words(set)
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "The length of the longest string(s) are: {}",
            words.length
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "The longest string(s) belong to the following word chain(s):"
        )?;
        for index in words.chains() {
            self.chain_line(set, index, "    ")?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
