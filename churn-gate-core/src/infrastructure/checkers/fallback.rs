// churn-gate-core/src/infrastructure/checkers/fallback.rs
//
// Mode B: simplified checks for environments without the expectation engine.
// Coarser identifiers (one per violated column rule), no null checks on
// customerID/tenure/MonthlyCharges, no consistency rule.

use tracing::{debug, info, warn};

use crate::domain::dataset::{Dataset, Value};
use crate::domain::quality::telco::{
    CONTRACT, CONTRACT_VALUES, GENDER, GENDER_VALUES, INTERNET_SERVICE, INTERNET_VALUES,
    MONTHLY_CHARGES_BOUNDS, NumericBound, REQUIRED_COLUMNS, TENURE_BOUNDS, TOTAL_CHARGES_BOUNDS,
    YES_NO_COLUMNS, YES_NO_VALUES,
};
use crate::domain::quality::{
    CheckCategory, CheckDefinition, CheckOutcome, CheckerMode, ValidationReport,
};
use crate::ports::checker::DatasetChecker;

pub const MISSING_REQUIRED_COLUMNS: &str = "missing_required_columns";
pub const GENDER_INVALID: &str = "gender_invalid";
pub const CONTRACT_INVALID: &str = "contract_invalid";
pub const INTERNET_INVALID: &str = "internet_invalid";
pub const TENURE_RANGE: &str = "tenure_range";
pub const MONTHLY_CHARGES_RANGE: &str = "monthly_charges_range";
pub const TOTAL_CHARGES_NEGATIVE: &str = "total_charges_negative";

/// `Partner_invalid`, `Dependents_invalid`, `PhoneService_invalid`.
pub fn yes_no_invalid(column: &str) -> String {
    format!("{}_invalid", column)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackChecker;

impl FallbackChecker {
    /// Domain rules in checking order: (identifier, column, allowed values).
    fn domain_rules() -> Vec<(String, &'static str, &'static [&'static str])> {
        let mut rules = vec![(GENDER_INVALID.to_string(), GENDER, GENDER_VALUES)];
        rules.extend(
            YES_NO_COLUMNS
                .iter()
                .map(|c| (yes_no_invalid(c), *c, YES_NO_VALUES)),
        );
        rules.push((CONTRACT_INVALID.to_string(), CONTRACT, CONTRACT_VALUES));
        rules.push((INTERNET_INVALID.to_string(), INTERNET_SERVICE, INTERNET_VALUES));
        rules
    }

    fn range_rules() -> [(&'static str, NumericBound); 3] {
        [
            (TENURE_RANGE, TENURE_BOUNDS),
            (MONTHLY_CHARGES_RANGE, MONTHLY_CHARGES_BOUNDS),
            (TOTAL_CHARGES_NEGATIVE, TOTAL_CHARGES_BOUNDS),
        ]
    }
}

impl DatasetChecker for FallbackChecker {
    fn mode(&self) -> CheckerMode {
        CheckerMode::Fallback
    }

    fn definitions(&self) -> Vec<CheckDefinition> {
        let mut defs = vec![CheckDefinition {
            id: MISSING_REQUIRED_COLUMNS.to_string(),
            category: CheckCategory::Schema,
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }];
        defs.extend(
            Self::domain_rules()
                .into_iter()
                .map(|(id, column, _)| CheckDefinition {
                    id,
                    category: CheckCategory::Domain,
                    columns: vec![column.to_string()],
                }),
        );
        defs.extend(
            Self::range_rules()
                .into_iter()
                .map(|(id, bound)| CheckDefinition {
                    id: id.to_string(),
                    category: CheckCategory::Range,
                    columns: vec![bound.column.to_string()],
                }),
        );
        defs
    }

    fn check(&self, dataset: &Dataset) -> ValidationReport {
        info!("🔍 Starting data validation with simplified checks...");
        let mut report = ValidationReport::new(CheckerMode::Fallback);

        info!("   {}", CheckCategory::Schema.header());
        // Row-level checks are meaningless without the columns: stop here.
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| !dataset.has_column(c))
            .map(|c| c.to_string())
            .collect();
        let schema_ok = missing.is_empty();
        if !schema_ok {
            warn!(missing = ?missing, "❌ Missing required columns");
        }
        report.push(CheckOutcome {
            id: MISSING_REQUIRED_COLUMNS.to_string(),
            category: CheckCategory::Schema,
            unexpected_count: missing.len(),
            columns: if schema_ok {
                REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect()
            } else {
                missing
            },
            success: schema_ok,
            element_count: REQUIRED_COLUMNS.len(),
        });
        if !schema_ok {
            return report;
        }

        info!("   {}", CheckCategory::Domain.header());
        for (id, column, allowed) in Self::domain_rules() {
            // Null is not a member of any allowed set.
            let unexpected = dataset
                .column(column)
                .into_iter()
                .flatten()
                .filter(|v| !v.as_text().is_some_and(|s| allowed.contains(&s)))
                .count();
            report.push(outcome(id, CheckCategory::Domain, column, dataset.len(), unexpected));
        }

        info!("   {}", CheckCategory::Range.header());
        for (id, bound) in Self::range_rules() {
            let (count, unexpected) =
                out_of_bounds(dataset.column(bound.column).into_iter().flatten(), &bound);
            report.push(outcome(
                id.to_string(),
                CheckCategory::Range,
                bound.column,
                count,
                unexpected,
            ));
        }

        report
    }
}

fn outcome(
    id: String,
    category: CheckCategory,
    column: &str,
    element_count: usize,
    unexpected_count: usize,
) -> CheckOutcome {
    debug!(check = %id, column, unexpected = unexpected_count, "Fallback check evaluated");
    CheckOutcome {
        id,
        category,
        columns: vec![column.to_string()],
        success: unexpected_count == 0,
        element_count,
        unexpected_count,
    }
}

/// Coerces to numbers; values that do not coerce are left out of the comparison.
fn out_of_bounds<'a>(
    cells: impl Iterator<Item = &'a Value>,
    bound: &NumericBound,
) -> (usize, usize) {
    cells
        .filter_map(Value::as_number)
        .fold((0, 0), |(count, unexpected), n| {
            (count + 1, unexpected + usize::from(!bound.contains(n)))
        })
}
