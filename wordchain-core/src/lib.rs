//! Edit-distance-1 word chains
//!
//! Words arrive one at a time and are grouped into chains in which every pair
//! of neighbouring words differs by a single substitution, insertion or
//! deletion. Each chain lives in a [`PeekBuffer`], a fixed-capacity
//! double-ended buffer that grows at both ends and can be scanned without
//! being consumed.
//!
//! # Example
//!
//! ```rust
//! use wordchain_core::ChainSet;
//!
//! let mut chains = ChainSet::new(true, false);
//! for word in ["cat", "cot", "cog", "dog"] {
//!     chains.admit(word).unwrap();
//! }
//!
//! // Each word joined the front of the single chain
//! assert_eq!(chains.len(), 1);
//! assert_eq!(chains.chains()[0].render(), "dog cog cot cat");
//! ```

pub mod chain;
pub mod chain_set;
pub mod config;
pub mod edit_distance;
pub mod error;
pub mod peek_buffer;

pub use chain::{Chain, Word};
pub use chain_set::{
    Admission, AdmissionStats, ChainSet, LongestChains, LongestWords, WordLocation,
};
pub use config::{ChainSetConfig, ChainSetConfigBuilder, RejectionPolicy};
pub use edit_distance::{edit_distance_is_one, hamming_distance_is_one};
pub use error::{BufferError, ChainError, Result};
pub use peek_buffer::{Direction, End, Iter, PeekBuffer};
