//! Words and the chains that hold them

use core::fmt;

use crate::error::BufferError;
use crate::peek_buffer::{End, Iter, PeekBuffer};

/// A normalized word
///
/// The chain builder treats words as opaque: it compares them, measures them
/// and renders them. Normalization happens before a word gets here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    /// Wrap an already-normalized string
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The word's text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes (letters, for ASCII words)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the word is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A sequence of words where neighbours are one edit apart
///
/// Chains are created with a single word and only ever grow at their ends,
/// so they are never empty.
#[derive(Debug, Clone)]
pub struct Chain {
    words: PeekBuffer<Word>,
}

impl Chain {
    /// Start a chain holding `word`, with room for `capacity` pushes per end
    pub(crate) fn start(word: Word, capacity: usize) -> Result<Self, BufferError> {
        let mut words = PeekBuffer::with_guaranteed_capacity(capacity);
        words.push_front(word)?;
        Ok(Self { words })
    }

    /// Add a word at one end
    pub(crate) fn push(&mut self, end: End, word: Word) -> Result<(), BufferError> {
        self.words.push(end, word)
    }

    /// The word at the given end
    pub fn end(&self, end: End) -> Result<&Word, BufferError> {
        self.words.peek(end)
    }

    /// First word
    pub fn front(&self) -> Result<&Word, BufferError> {
        self.words.peek_front()
    }

    /// Last word
    pub fn rear(&self) -> Result<&Word, BufferError> {
        self.words.peek_rear()
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the chain holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if `word` occurs anywhere in the chain
    pub fn contains(&self, word: &Word) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Iterate over the words, front to rear
    pub fn iter(&self) -> Iter<'_, Word> {
        self.words.iter()
    }

    /// The underlying buffer, for cursor-based traversal
    pub fn words(&self) -> &PeekBuffer<Word> {
        &self.words
    }

    /// Space-joined words, front to rear
    pub fn render(&self) -> String {
        self.words.render()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.words, f)
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Word;
    type IntoIter = Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
