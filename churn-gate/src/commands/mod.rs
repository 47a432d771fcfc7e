// churn-gate/src/commands/mod.rs

pub mod checks;
pub mod validate;

use std::path::PathBuf;

use churn_gate_core::Capability;
use churn_gate_core::domain::quality::CheckerMode;
use churn_gate_core::infrastructure::config::{CheckerPreference, OutputFormat, load_config};
use miette::{IntoDiagnostic, WrapErr};

/// Effective run settings: defaults < config file < ENV < CLI flags.
pub struct Settings {
    pub mode: CheckerMode,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(
        config_path: Option<PathBuf>,
        checker: Option<String>,
        format: Option<String>,
    ) -> miette::Result<Self> {
        let cwd = std::env::current_dir().into_diagnostic()?;
        let config = load_config(config_path.as_deref(), &cwd)
            .wrap_err("Failed to load gate configuration")?;

        let preference = match checker {
            Some(flag) => flag.parse::<CheckerPreference>()?,
            None => config.checker,
        };
        let format = match format {
            Some(flag) => flag.parse::<OutputFormat>()?,
            None => config.format,
        };

        Ok(Self {
            mode: Capability::detect().resolve(preference),
            format,
        })
    }
}
