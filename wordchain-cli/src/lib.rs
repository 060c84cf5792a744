//! Wordchain CLI library
//!
//! This library provides the command-line interface for building
//! edit-distance-1 word chains from text files.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
