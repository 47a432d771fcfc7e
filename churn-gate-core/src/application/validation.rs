// churn-gate-core/src/application/validation.rs

use tracing::{info, instrument, warn};

use crate::application::capability::Capability;
use crate::domain::dataset::Dataset;
use crate::domain::error::DomainError;
use crate::domain::quality::{CheckDefinition, CheckerMode, ValidationReport, ValidationResult};
use crate::infrastructure::checkers::FallbackChecker;
use crate::infrastructure::config::CheckerPreference;
use crate::ports::checker::DatasetChecker;

/// Data-quality gate for the churn training/scoring pipeline.
///
/// The checker is chosen once, at construction. `validate` is a pure function of
/// the dataset: logging is the only side effect.
pub struct DatasetValidator {
    checker: Box<dyn DatasetChecker>,
}

impl DatasetValidator {
    pub fn new(mode: CheckerMode) -> Self {
        Self::with_checker(checker_for(mode))
    }

    /// Probes the capability and takes the best available checker.
    pub fn detect() -> Self {
        Self::new(Capability::detect().resolve(CheckerPreference::Auto))
    }

    pub fn with_checker(checker: Box<dyn DatasetChecker>) -> Self {
        Self { checker }
    }

    pub fn mode(&self) -> CheckerMode {
        self.checker.mode()
    }

    pub fn definitions(&self) -> Vec<CheckDefinition> {
        self.checker.definitions()
    }

    /// Fails only when the dataset is not row/column shaped.
    pub fn validate(&self, dataset: &Dataset) -> Result<ValidationResult, DomainError> {
        Ok(self.report(dataset)?.result())
    }

    #[instrument(skip_all, fields(mode = %self.mode(), rows = dataset.len()))]
    pub fn report(&self, dataset: &Dataset) -> Result<ValidationReport, DomainError> {
        dataset.ensure_shape()?;

        let report = self.checker.check(dataset);
        log_summary(&report);
        Ok(report)
    }
}

fn checker_for(mode: CheckerMode) -> Box<dyn DatasetChecker> {
    match mode {
        CheckerMode::Fallback => Box::new(FallbackChecker),
        #[cfg(feature = "expectations")]
        CheckerMode::Rich => Box::new(crate::infrastructure::checkers::RichChecker::new()),
        #[cfg(not(feature = "expectations"))]
        CheckerMode::Rich => {
            warn!("⚠️ Expectation engine not compiled in; running simplified fallback checks.");
            Box::new(FallbackChecker)
        }
    }
}

fn log_summary(report: &ValidationReport) {
    let failed = report.failed_checks();
    let total = report.total();

    match (report.mode(), failed.is_empty()) {
        (CheckerMode::Rich, true) => info!(
            "✅ Data validation PASSED: {}/{} checks successful",
            report.passed_count(),
            total
        ),
        (CheckerMode::Rich, false) => {
            warn!(
                "❌ Data validation FAILED: {}/{} checks failed",
                failed.len(),
                total
            );
            warn!("   Failed expectations: {:?}", failed);
        }
        (CheckerMode::Fallback, true) => info!("✅ Data validation PASSED (fallback checks)"),
        (CheckerMode::Fallback, false) => {
            warn!("❌ Data validation FAILED (fallback): {:?}", failed)
        }
    }
}
