// churn-gate-core/src/ports/checker.rs

// The contract shared by both validation modes. The validator only sees this
// trait; which implementation sits behind it is decided once, at construction.

use crate::domain::dataset::Dataset;
use crate::domain::quality::{CheckDefinition, CheckerMode, ValidationReport};

pub trait DatasetChecker: Send + Sync {
    fn mode(&self) -> CheckerMode;

    /// Checks this checker runs on a dataset that has every required column.
    fn definitions(&self) -> Vec<CheckDefinition>;

    /// Never fails on bad data: violations are recorded as failed outcomes.
    fn check(&self, dataset: &Dataset) -> ValidationReport;
}
