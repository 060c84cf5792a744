//! Greedy assignment of words to chains
//!
//! Each admitted word is routed to the first chain whose front or rear is one
//! edit away, front before rear, chains in creation order. This is a simple
//! heuristic, not a search for the best placement.

use crate::chain::{Chain, Word};
use crate::config::{ChainSetConfig, RejectionPolicy};
use crate::edit_distance::edit_distance_is_one;
use crate::error::{ChainError, Result};
use crate::peek_buffer::End;

/// Where an admitted word ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Pushed onto an end of an existing chain
    Attached {
        /// Index of the chain
        chain: usize,
        /// End the word was pushed onto
        end: End,
    },
    /// Became the sole word of a new chain
    Started {
        /// Index of the new chain
        chain: usize,
    },
    /// Discarded because the candidate chain already holds it
    Dropped {
        /// Index of the chain holding the duplicate
        chain: usize,
    },
}

/// Running counts of admission outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdmissionStats {
    /// Words pushed onto existing chains
    pub attached: usize,
    /// Words that started new chains
    pub started: usize,
    /// Words dropped as duplicates
    pub dropped: usize,
}

impl AdmissionStats {
    /// Total words offered to the set
    pub fn admitted(&self) -> usize {
        self.attached + self.started + self.dropped
    }

    fn record(&mut self, admission: &Admission) {
        match admission {
            Admission::Attached { .. } => self.attached += 1,
            Admission::Started { .. } => self.started += 1,
            Admission::Dropped { .. } => self.dropped += 1,
        }
    }
}

/// Chains tied for the most words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongestChains {
    /// Word count shared by the longest chains (0 when there are none)
    pub size: usize,
    /// Indices of those chains, ascending
    pub indices: Vec<usize>,
}

/// A word and the chain it sits in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLocation<'a> {
    /// Index of the owning chain
    pub chain: usize,
    /// The word itself
    pub word: &'a Word,
}

/// Words tied for the greatest length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongestWords<'a> {
    /// Length shared by the longest words (0 when there are none)
    pub length: usize,
    /// Every occurrence, in chain order then front-to-rear order
    pub locations: Vec<WordLocation<'a>>,
}

impl LongestWords<'_> {
    /// Indices of chains holding at least one longest word, ascending
    pub fn chains(&self) -> Vec<usize> {
        let mut chains: Vec<usize> = self.locations.iter().map(|l| l.chain).collect();
        chains.dedup();
        chains
    }
}

/// Decision reached by the read-only scan
enum Placement {
    Attach { chain: usize, end: End },
    Start,
    Drop { chain: usize },
}

/// An ordered collection of chains and the policy for growing them
#[derive(Debug, Clone, Default)]
pub struct ChainSet {
    chains: Vec<Chain>,
    config: ChainSetConfig,
    stats: AdmissionStats,
}

impl ChainSet {
    /// Create an empty set with the given policy flags and default capacity
    pub fn new(allow_duplicates: bool, step_growth: bool) -> Self {
        Self {
            chains: Vec::new(),
            config: ChainSetConfig {
                allow_duplicates,
                step_growth,
                ..ChainSetConfig::default()
            },
            stats: AdmissionStats::default(),
        }
    }

    /// Create an empty set from a full configuration
    pub fn with_config(config: ChainSetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            chains: Vec::new(),
            config,
            stats: AdmissionStats::default(),
        })
    }

    /// The active configuration
    pub fn config(&self) -> &ChainSetConfig {
        &self.config
    }

    /// Route one word to a chain end, a new chain, or nowhere
    ///
    /// A push that hits a chain's capacity is returned as
    /// [`ChainError::Buffer`] and the set is left unchanged.
    pub fn admit(&mut self, word: impl Into<Word>) -> Result<Admission> {
        let word = word.into();

        let admission = match self.placement_for(&word)? {
            Placement::Attach { chain, end } => {
                log::trace!("'{}' -> chain {} ({})", word, chain, end);
                self.chains[chain]
                    .push(end, word.clone())
                    .map_err(|source| ChainError::buffer(chain, word.as_str(), source))?;
                Admission::Attached { chain, end }
            }
            Placement::Start => {
                let chain = self.chains.len();
                log::debug!("'{}' starts chain {}", word, chain);
                let new_chain = Chain::start(word.clone(), self.config.chain_capacity)
                    .map_err(|source| ChainError::buffer(chain, word.as_str(), source))?;
                self.chains.push(new_chain);
                Admission::Started { chain }
            }
            Placement::Drop { chain } => {
                log::trace!("'{}' already in chain {}, dropped", word, chain);
                Admission::Dropped { chain }
            }
        };

        self.stats.record(&admission);
        Ok(admission)
    }

    /// Admit words in order, stopping at the first error
    pub fn admit_all<I>(&mut self, words: I) -> Result<AdmissionStats>
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        let before = self.stats;
        for word in words {
            self.admit(word)?;
        }
        Ok(AdmissionStats {
            attached: self.stats.attached - before.attached,
            started: self.stats.started - before.started,
            dropped: self.stats.dropped - before.dropped,
        })
    }

    fn placement_for(&self, word: &Word) -> Result<Placement> {
        for (index, chain) in self.chains.iter().enumerate() {
            let mut candidate = false;

            for end in [End::Front, End::Rear] {
                let boundary = chain
                    .end(end)
                    .map_err(|source| ChainError::buffer(index, word.as_str(), source))?;
                if !edit_distance_is_one(word.as_str(), boundary.as_str()) {
                    continue;
                }
                candidate = true;

                if !self.config.allow_duplicates && chain.contains(word) {
                    match self.config.rejection {
                        RejectionPolicy::StopAtFirstCandidate => {
                            return Ok(Placement::Drop { chain: index })
                        }
                        RejectionPolicy::ContinueScan => break,
                    }
                }

                if self.config.step_growth && !steps_outward(end, word, boundary) {
                    continue;
                }

                return Ok(Placement::Attach { chain: index, end });
            }

            if candidate && self.config.rejection == RejectionPolicy::StopAtFirstCandidate {
                return Ok(Placement::Start);
            }
        }

        Ok(Placement::Start)
    }

    /// Chains in creation order
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Number of chains
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Check if no word has started a chain yet
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Admission counts so far
    pub fn stats(&self) -> AdmissionStats {
        self.stats
    }

    /// Chains tied for the most words
    pub fn longest_chains(&self) -> LongestChains {
        let size = self.chains.iter().map(Chain::len).max().unwrap_or(0);
        let indices = self
            .chains
            .iter()
            .enumerate()
            .filter(|(_, chain)| size > 0 && chain.len() == size)
            .map(|(index, _)| index)
            .collect();

        LongestChains { size, indices }
    }

    /// Every occurrence of the longest words across all chains
    pub fn longest_words(&self) -> LongestWords<'_> {
        let mut longest = LongestWords::default();

        for (chain, words) in self.chains.iter().enumerate() {
            for word in words {
                if word.len() > longest.length {
                    longest.length = word.len();
                    longest.locations.clear();
                }
                if word.len() == longest.length && longest.length > 0 {
                    longest.locations.push(WordLocation { chain, word });
                }
            }
        }

        longest
    }
}

/// Step growth: shorter words go on the front, longer words on the rear
fn steps_outward(end: End, word: &Word, boundary: &Word) -> bool {
    match end {
        End::Front => word.len() < boundary.len(),
        End::Rear => word.len() > boundary.len(),
    }
}
