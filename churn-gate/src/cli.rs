// churn-gate/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "churn-gate")]
#[command(about = "Data-quality gate for churn-prediction datasets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Gate configuration file (default: ./churn_gate.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🔍 Validates a dataset (CSV or JSON) before training or scoring
    Validate {
        /// Dataset file (.csv or .json)
        data: PathBuf,

        /// Checker: auto | rich | fallback
        #[arg(long)]
        checker: Option<String>,

        /// Output format: text | json
        #[arg(long)]
        format: Option<String>,
    },

    /// 📋 Lists the checks the selected checker runs
    Checks {
        /// Checker: auto | rich | fallback
        #[arg(long)]
        checker: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_validate_defaults() -> Result<()> {
        let args = Cli::parse_from(["churn-gate", "validate", "data/telco.csv"]);
        assert!(args.config.is_none());
        match args.command {
            Commands::Validate {
                data,
                checker,
                format,
            } => {
                assert_eq!(data.to_string_lossy(), "data/telco.csv");
                assert_eq!(checker, None);
                assert_eq!(format, None);
                Ok(())
            }
            _ => bail!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_flags() -> Result<()> {
        let args = Cli::parse_from([
            "churn-gate",
            "validate",
            "telco.json",
            "--checker",
            "fallback",
            "--format",
            "json",
            "--config",
            "/tmp/gate.yaml",
        ]);
        assert_eq!(
            args.config.map(|p| p.to_string_lossy().to_string()),
            Some("/tmp/gate.yaml".to_string())
        );
        match args.command {
            Commands::Validate {
                checker, format, ..
            } => {
                assert_eq!(checker.as_deref(), Some("fallback"));
                assert_eq!(format.as_deref(), Some("json"));
                Ok(())
            }
            _ => bail!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parse_checks() -> Result<()> {
        let args = Cli::parse_from(["churn-gate", "checks", "--checker", "rich"]);
        match args.command {
            Commands::Checks { checker } => {
                assert_eq!(checker.as_deref(), Some("rich"));
                Ok(())
            }
            _ => bail!("Expected Checks command"),
        }
    }
}
