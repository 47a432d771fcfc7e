// churn-gate-core/src/domain/quality/result.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which checker produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckerMode {
    /// Expectation suite: one result per expectation instance.
    Rich,
    /// Simplified checks with coarse, per-rule identifiers.
    Fallback,
}

impl fmt::Display for CheckerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerMode::Rich => write!(f, "rich"),
            CheckerMode::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckCategory {
    Schema,
    Domain,
    Range,
    Consistency,
}

impl CheckCategory {
    /// Progress line emitted when a checker enters this category.
    pub fn header(&self) -> &'static str {
        match self {
            CheckCategory::Schema => "📋 Validating schema and required columns...",
            CheckCategory::Domain => "💼 Validating business logic constraints...",
            CheckCategory::Range => "📊 Validating numeric ranges and business constraints...",
            CheckCategory::Consistency => "🔗 Validating data consistency...",
        }
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckCategory::Schema => "schema",
            CheckCategory::Domain => "domain",
            CheckCategory::Range => "range",
            CheckCategory::Consistency => "consistency",
        };
        f.write_str(label)
    }
}

/// A named predicate over one or more columns, as listed before running.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckDefinition {
    pub id: String,
    pub category: CheckCategory,
    pub columns: Vec<String>,
}

/// Outcome of one executed check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub id: String,
    pub category: CheckCategory,
    pub columns: Vec<String>,
    pub success: bool,
    pub element_count: usize,
    pub unexpected_count: usize,
}

/// Every check a checker ran, in execution order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    mode: CheckerMode,
    outcomes: Vec<CheckOutcome>,
}

impl ValidationReport {
    pub fn new(mode: CheckerMode) -> Self {
        Self {
            mode,
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn mode(&self) -> CheckerMode {
        self.mode
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    pub fn failed_checks(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|o| !o.success)
            .map(|o| o.id.clone())
            .collect()
    }

    pub fn result(&self) -> ValidationResult {
        ValidationResult::from_failures(self.failed_checks())
    }
}

/// Verdict handed back to the caller. `passed` is true iff `failed_checks` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    passed: bool,
    failed_checks: Vec<String>,
}

impl ValidationResult {
    pub fn from_failures(failed_checks: Vec<String>) -> Self {
        Self {
            passed: failed_checks.is_empty(),
            failed_checks,
        }
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn failed_checks(&self) -> &[String] {
        &self.failed_checks
    }

    pub fn contains(&self, id: &str) -> bool {
        self.failed_checks.iter().any(|c| c == id)
    }
}
