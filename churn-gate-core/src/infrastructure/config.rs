// churn-gate-core/src/infrastructure/config.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, instrument};

use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_CANDIDATES: [&str; 2] = ["churn_gate.yaml", "churn_gate.yml"];
pub const ENV_CHECKER: &str = "CHURN_GATE_CHECKER";
pub const ENV_FORMAT: &str = "CHURN_GATE_FORMAT";

/// Which checker the caller asks for. `Auto` takes the rich engine when it is available.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckerPreference {
    #[default]
    Auto,
    Rich,
    Fallback,
}

impl FromStr for CheckerPreference {
    type Err = InfrastructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "rich" => Ok(Self::Rich),
            "fallback" => Ok(Self::Fallback),
            other => Err(InfrastructureError::ConfigError(format!(
                "Unknown checker '{}' (expected auto | rich | fallback)",
                other
            ))),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = InfrastructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(InfrastructureError::ConfigError(format!(
                "Unknown format '{}' (expected text | json)",
                other
            ))),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    #[serde(default)]
    pub checker: CheckerPreference,
    #[serde(default)]
    pub format: OutputFormat,
}

/// Loads the gate configuration.
///
/// Layering: defaults, then the YAML file (`explicit` path, or the first candidate
/// found in `dir`), then `CHURN_GATE_*` environment variables.
#[instrument(skip(dir))]
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<GateConfig, InfrastructureError> {
    let mut config = match find_config(explicit, dir)? {
        Some(path) => {
            info!(path = ?path, "Loading gate configuration");
            let content = fs::read_to_string(&path)?;
            parse_config(&content)?
        }
        None => GateConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<GateConfig, InfrastructureError> {
    if content.trim().is_empty() {
        return Ok(GateConfig::default());
    }
    serde_yaml::from_str(content).map_err(Into::into)
}

fn find_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<PathBuf>, InfrastructureError> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(Some(path.to_path_buf()));
        }
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }
    Ok(CONFIG_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists()))
}

/// Environment layer. `lookup` is injected so tests never touch the process environment.
pub fn apply_env_overrides<F>(config: &mut GateConfig, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_CHECKER) {
        let checker: CheckerPreference = val.parse()?;
        info!(old = ?config.checker, new = ?checker, "Overriding checker via ENV");
        config.checker = checker;
    }
    if let Some(val) = lookup(ENV_FORMAT) {
        let format: OutputFormat = val.parse()?;
        info!(old = ?config.format, new = ?format, "Overriding format via ENV");
        config.format = format;
    }
    Ok(())
}
