//! Word extraction from raw text

/// Turns whitespace-separated tokens into chain words
///
/// Leading and trailing non-letters are stripped. What remains must consist
/// only of ASCII letters and be longer than `filter_length`; it is then
/// lowercased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    filter_length: usize,
}

impl Normalizer {
    /// Create a normalizer that skips words of `filter_length` letters or fewer
    pub fn new(filter_length: usize) -> Self {
        Self { filter_length }
    }

    /// Normalize a single token, or `None` if it is not a usable word
    pub fn normalize(&self, token: &str) -> Option<String> {
        let trimmed = token.trim_matches(|c: char| !c.is_ascii_alphabetic());

        if trimmed.len() <= self.filter_length || !trimmed.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return None;
        }

        Some(trimmed.to_ascii_lowercase())
    }

    /// Usable words of `text`, in reading order
    pub fn words<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split_whitespace()
            .filter_map(move |token| self.normalize(token))
    }
}
