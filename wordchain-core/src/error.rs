//! Error types for buffers and chain building

use thiserror::Error;

use crate::peek_buffer::End;

/// Errors raised by [`PeekBuffer`](crate::PeekBuffer) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A push targeted an end with no spare slot
    #[error("no room to push at the {end} end (guaranteed capacity {capacity})")]
    CapacityExceeded {
        /// The end the push targeted
        end: End,
        /// Guaranteed capacity the buffer was built with
        capacity: usize,
    },

    /// A pop or peek found no live elements
    #[error("buffer is empty")]
    EmptyBuffer,

    /// A cursor or neighbour access fell outside the live range
    #[error("position {position} is outside the live range of {len} elements")]
    OutOfRange {
        /// Offset from the front that was requested
        position: usize,
        /// Number of live elements at the time
        len: usize,
    },
}

/// Errors raised while building chains
#[derive(Debug, Error)]
pub enum ChainError {
    /// A buffer operation failed while admitting a word
    #[error("chain {chain} could not take '{word}'")]
    Buffer {
        /// Index of the chain involved (the would-be index for a new chain)
        chain: usize,
        /// The word being admitted
        word: String,
        #[source]
        source: BufferError,
    },

    /// Invalid configuration parameters
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl ChainError {
    pub(crate) fn buffer(chain: usize, word: &str, source: BufferError) -> Self {
        ChainError::Buffer {
            chain,
            word: word.to_string(),
            source,
        }
    }
}

/// Result type for chain operations
pub type Result<T> = std::result::Result<T, ChainError>;
