// churn-gate-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(churn_gate::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- DATA FILES ---
    #[error("CSV Parsing Error: {0}")]
    #[diagnostic(
        code(churn_gate::infra::csv),
        help("The file must be UTF-8 CSV with a header row.")
    )]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(
        code(churn_gate::infra::json),
        help("Expected an array of record objects or {{\"columns\": [...], \"rows\": [...]}}.")
    )]
    Json(#[from] serde_json::Error),

    #[error("Unsupported dataset format: {0}")]
    #[diagnostic(code(churn_gate::infra::format), help("Use a .csv or .json file."))]
    UnsupportedFormat(String),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(churn_gate::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(churn_gate::infra::config))]
    ConfigError(String),

    #[error("Configuration not found at '{0}'")]
    #[diagnostic(code(churn_gate::infra::config_missing))]
    ConfigNotFound(String),
}
