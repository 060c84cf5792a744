//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

const HEADER: &str = "\
# wordchain configuration
#
# Command-line flags override the values below.
#
# [chains]
#   allow_duplicates  let a word repeat within one chain
#   step_growth       front pushes must be shorter, rear pushes longer
#   chain_capacity    words each chain can take at either end
#   rejection         \"first-candidate\" or \"continue-scan\"
#
# [input]
#   filter_length     skip words with this many letters or fewer
#
# [output]
#   format            \"text\", \"json\" or \"markdown\"
#   log_file          report file used by --log-file

";

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it with:");
        println!(
            "   wordchain build -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Default configuration rendered as commented TOML
    fn generate_template() -> Result<String> {
        let body = toml::to_string_pretty(&CliConfig::default())
            .context("Failed to serialize default configuration")?;
        Ok(format!("{HEADER}{body}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("wordchain.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("wordchain.toml"));
    }

    #[test]
    fn test_generate_template() {
        let template = GenerateConfigArgs::generate_template().unwrap();
        assert!(template.starts_with("# wordchain configuration"));
        assert!(template.contains("[chains]\n"));
        assert!(template.contains("[input]\n"));
        assert!(template.contains("[output]\n"));
        assert!(template.contains("chain_capacity = 1500"));
    }

    #[test]
    fn test_execute_writes_loadable_config() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("wordchain.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        let loaded = CliConfig::load(&output_path).unwrap();
        assert_eq!(loaded, CliConfig::default());
    }
}
