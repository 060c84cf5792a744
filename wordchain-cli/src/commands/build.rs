//! Build command implementation

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordchain_core::{ChainSet, ChainSetConfig, RejectionPolicy};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, Normalizer};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the build command
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the report to the configured log file (chain_log.txt)
    #[arg(long, conflicts_with = "output")]
    pub log_file: bool,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Allow a word to appear more than once in a chain [default: true]
    #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub allow_duplicates: Option<bool>,

    /// Require shorter words at the front and longer words at the rear
    /// [default: false]
    #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub step_growth: Option<bool>,

    /// Skip words with this many letters or fewer [default: 0]
    #[arg(long, value_name = "N")]
    pub filter_length: Option<usize>,

    /// Words each chain can take at either end [default: 1500]
    #[arg(long, value_name = "N")]
    pub chain_capacity: Option<usize>,

    /// What to do when the first nearby chain turns a word down
    /// [default: first-candidate]
    #[arg(long, value_enum)]
    pub rejection: Option<RejectionMode>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Handling of a word turned down by the first chain one edit away
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionMode {
    /// Start a new chain (or drop a duplicate) without trying later chains
    #[default]
    FirstCandidate,
    /// Keep scanning later chains before starting a new one
    ContinueScan,
}

impl From<RejectionMode> for RejectionPolicy {
    fn from(mode: RejectionMode) -> Self {
        match mode {
            RejectionMode::FirstCandidate => RejectionPolicy::StopAtFirstCandidate,
            RejectionMode::ContinueScan => RejectionPolicy::ContinueScan,
        }
    }
}

impl BuildArgs {
    /// Execute the build command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting chain building");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let mut set = ChainSet::with_config(self.chain_config(&config)?)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let normalizer = Normalizer::new(self.filter_length.unwrap_or(config.input.filter_length));

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for path in &files {
            let text = FileReader::read_text(path)?;
            let words = admit_text(&mut set, &normalizer, &text)
                .with_context(|| format!("Failed to build chains from {}", path.display()))?;

            log::debug!("{}: {} words", path.display(), words);
            progress.file_completed(&path.display().to_string(), words);
        }
        progress.finish();

        let stats = set.stats();
        log::info!(
            "Admitted {} words into {} chains ({} attached, {} dropped)",
            stats.admitted(),
            set.len(),
            stats.attached,
            stats.dropped
        );

        let format = self.format.unwrap_or(config.output.format);
        let writer = self.open_output(&config)?;
        create_formatter(format, writer).write_report(&set)?;

        Ok(())
    }

    /// Chain settings with flags taking precedence over the config file
    pub fn chain_config(&self, config: &CliConfig) -> Result<ChainSetConfig> {
        let chains = &config.chains;

        ChainSetConfig::builder()
            .allow_duplicates(self.allow_duplicates.unwrap_or(chains.allow_duplicates))
            .step_growth(self.step_growth.unwrap_or(chains.step_growth))
            .chain_capacity(self.chain_capacity.unwrap_or(chains.chain_capacity))
            .rejection(self.rejection.unwrap_or(chains.rejection).into())
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Report destination: log file, `--output`, or stdout
    fn open_output(&self, config: &CliConfig) -> Result<Box<dyn Write + Send + Sync>> {
        let path = if self.log_file {
            Some(config.output.log_file.as_path())
        } else {
            self.output.as_deref()
        };

        match path {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                log::info!("Writing report to {}", path.display());
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Admit every usable word of `text`, returning how many were offered
fn admit_text(set: &mut ChainSet, normalizer: &Normalizer, text: &str) -> Result<usize> {
    let stats = set.admit_all(normalizer.words(text)).map_err(|e| {
        let summary = CliError::ChainError(e.to_string());
        anyhow::Error::new(e).context(summary)
    })?;

    Ok(stats.admitted())
}
