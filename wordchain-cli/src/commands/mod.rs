//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod build;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build word chains from text files
    Build(build::BuildArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available rejection policies
    Policies,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Build(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed for this listing
    pub fn lines(&self) -> Vec<String> {
        use clap::ValueEnum;

        let describe = |name: &str, help: Option<String>| match help {
            Some(help) => format!("{name:<16}{help}"),
            None => name.to_string(),
        };

        match self {
            ListCommands::Formats => crate::output::OutputFormat::value_variants()
                .iter()
                .filter_map(|v| v.to_possible_value())
                .map(|v| describe(v.get_name(), v.get_help().map(|h| h.to_string())))
                .collect(),
            ListCommands::Policies => build::RejectionMode::value_variants()
                .iter()
                .filter_map(|v| v.to_possible_value())
                .map(|v| describe(v.get_name(), v.get_help().map(|h| h.to_string())))
                .collect(),
        }
    }
}
