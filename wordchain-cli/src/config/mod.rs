//! Configuration file support

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wordchain_core::config::defaults;

use crate::commands::build::RejectionMode;
use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Chain-building configuration
    #[serde(default)]
    pub chains: ChainsConfig,

    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Read and parse a TOML configuration file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("cannot parse {}: {}", path.display(), e))
        })
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Chain-building configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChainsConfig {
    /// Allow a word to repeat within a chain
    pub allow_duplicates: bool,

    /// Front pushes must be shorter, rear pushes longer
    pub step_growth: bool,

    /// Guaranteed capacity of each chain, per end
    pub chain_capacity: usize,

    /// What to do when the first nearby chain turns a word down
    pub rejection: RejectionMode,
}

impl Default for ChainsConfig {
    fn default() -> Self {
        Self {
            allow_duplicates: defaults::ALLOW_DUPLICATES,
            step_growth: defaults::STEP_GROWTH,
            chain_capacity: defaults::CHAIN_CAPACITY,
            rejection: RejectionMode::default(),
        }
    }
}

/// Input-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Words of this many letters or fewer are skipped
    pub filter_length: usize,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: OutputFormat,

    /// File written when `--log-file` is given
    pub log_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_file: PathBuf::from("chain_log.txt"),
        }
    }
}
