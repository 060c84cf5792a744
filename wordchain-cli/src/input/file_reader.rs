//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader tolerant of stray non-UTF-8 bytes
pub struct FileReader;

impl FileReader {
    /// Read a file as text
    ///
    /// Invalid UTF-8 sequences become U+FFFD, which the normalizer treats
    /// like any other non-letter.
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        match String::from_utf8(bytes) {
            Ok(content) => Ok(content),
            Err(e) => {
                log::warn!("{} is not valid UTF-8; decoding lossily", path.display());
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }
}
