// churn-gate-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// The checker contract both validation modes implement.
pub mod ports;

// 2. Domain
// Dataset model, the telco checklist, expectations and results.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// Checker implementations, dataset loaders, YAML config.
pub mod infrastructure;

// 4. Application (Use Cases)
// Capability probe and the validator facade.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use application::{Capability, DatasetValidator};
pub use domain::dataset::{Dataset, Value};
pub use domain::quality::{CheckerMode, ValidationReport, ValidationResult};
pub use error::GateError;
