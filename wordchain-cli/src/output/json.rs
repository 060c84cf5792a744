//! JSON report formatter

use super::ChainFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use wordchain_core::{AdmissionStats, ChainSet};

/// JSON formatter - one pretty-printed report document
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Top-level JSON document
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportData {
    /// Every chain, in creation order
    pub chains: Vec<ChainData>,
    /// Chains tied for the most words
    pub longest_chains: LongestChainsData,
    /// Words tied for the greatest length
    pub longest_words: LongestWordsData,
    /// Admission counts
    pub stats: StatsData,
}

/// A single chain
#[derive(Debug, Serialize, Deserialize)]
pub struct ChainData {
    /// Position in creation order
    pub index: usize,
    /// Words, front to rear
    pub words: Vec<String>,
}

/// Longest chain summary
#[derive(Debug, Serialize, Deserialize)]
pub struct LongestChainsData {
    /// Shared word count
    pub size: usize,
    /// Chain indices
    pub chains: Vec<usize>,
}

/// Longest word summary
#[derive(Debug, Serialize, Deserialize)]
pub struct LongestWordsData {
    /// Shared length
    pub length: usize,
    /// Every occurrence
    pub words: Vec<WordData>,
    /// Chains holding at least one of them
    pub chains: Vec<usize>,
}

/// A word and its chain
#[derive(Debug, Serialize, Deserialize)]
pub struct WordData {
    pub word: String,
    pub chain: usize,
}

/// Admission counts
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsData {
    pub admitted: usize,
    pub attached: usize,
    pub started: usize,
    pub dropped: usize,
}

impl From<AdmissionStats> for StatsData {
    fn from(stats: AdmissionStats) -> Self {
        Self {
            admitted: stats.admitted(),
            attached: stats.attached,
            started: stats.started,
            dropped: stats.dropped,
        }
    }
}

impl ReportData {
    /// Snapshot a chain set
    pub fn from_set(set: &ChainSet) -> Self {
        let chains = set
            .chains()
            .iter()
            .enumerate()
            .map(|(index, chain)| ChainData {
                index,
                words: chain.iter().map(|w| w.to_string()).collect(),
            })
            .collect();

        let longest = set.longest_chains();
        let words = set.longest_words();

        Self {
            chains,
            longest_chains: LongestChainsData {
                size: longest.size,
                chains: longest.indices,
            },
            longest_words: LongestWordsData {
                length: words.length,
                chains: words.chains(),
                words: words
                    .locations
                    .iter()
                    .map(|l| WordData {
                        word: l.word.to_string(),
                        chain: l.chain,
                    })
                    .collect(),
            },
            stats: set.stats().into(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> ChainFormatter for JsonFormatter<W> {
    fn write_report(&mut self, set: &ChainSet) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &ReportData::from_set(set))?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
