// churn-gate-core/src/infrastructure/mod.rs

pub mod checkers;
pub mod config;
pub mod error;
pub mod loader;

pub use config::{CheckerPreference, GateConfig, OutputFormat, load_config};
pub use loader::load_dataset;
