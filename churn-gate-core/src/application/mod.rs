// churn-gate-core/src/application/mod.rs

pub mod capability;
pub mod validation;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use churn_gate_core::application::{Capability, DatasetValidator};`
pub use capability::Capability;
pub use validation::DatasetValidator;
