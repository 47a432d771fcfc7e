// churn-gate-core/src/domain/quality/mod.rs

#[cfg(feature = "expectations")]
pub mod expectation;
pub mod result;
pub mod telco;

// Re-exports
#[cfg(feature = "expectations")]
pub use expectation::{Expectation, ExpectationResult, ExpectationSuite};
pub use result::{
    CheckCategory, CheckDefinition, CheckOutcome, CheckerMode, ValidationReport,
    ValidationResult,
};
