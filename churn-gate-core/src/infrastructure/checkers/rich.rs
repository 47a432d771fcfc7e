// churn-gate-core/src/infrastructure/checkers/rich.rs
//
// Mode A: the full expectation suite. One outcome per expectation instance,
// identified by its expectation type.

use tracing::{debug, info};

use crate::domain::dataset::Dataset;
use crate::domain::quality::telco::{
    CATEGORICAL_DOMAINS, CONSISTENCY_MOSTLY, CUSTOMER_ID, MONTHLY_CHARGES, NUMERIC_BOUNDS,
    REQUIRED_COLUMNS, TENURE, TOTAL_CHARGES,
};
use crate::domain::quality::{
    CheckCategory, CheckDefinition, CheckerMode, Expectation, ExpectationSuite, ValidationReport,
};
use crate::ports::checker::DatasetChecker;

pub struct RichChecker {
    suite: ExpectationSuite,
}

impl RichChecker {
    pub fn new() -> Self {
        Self {
            suite: telco_suite(),
        }
    }
}

impl Default for RichChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// 11 schema, 6 domain, 5 range and 1 consistency expectation.
pub fn telco_suite() -> ExpectationSuite {
    let mut suite = ExpectationSuite::new();

    // === SCHEMA ===
    for column in REQUIRED_COLUMNS {
        suite = suite.expect(
            CheckCategory::Schema,
            Expectation::ColumnToExist {
                column: column.to_string(),
            },
        );
        if column == CUSTOMER_ID {
            suite = suite.expect(
                CheckCategory::Schema,
                Expectation::ValuesNotNull {
                    column: column.to_string(),
                },
            );
        }
    }

    // === DOMAIN ===
    for (column, allowed) in CATEGORICAL_DOMAINS {
        suite = suite.expect(
            CheckCategory::Domain,
            Expectation::ValuesInSet {
                column: column.to_string(),
                values: allowed.iter().map(|v| v.to_string()).collect(),
            },
        );
    }

    // === RANGES ===
    for bound in NUMERIC_BOUNDS {
        suite = suite.expect(
            CheckCategory::Range,
            Expectation::ValuesBetween {
                column: bound.column.to_string(),
                min: bound.min,
                max: bound.max,
            },
        );
    }
    for column in [TENURE, MONTHLY_CHARGES] {
        suite = suite.expect(
            CheckCategory::Range,
            Expectation::ValuesNotNull {
                column: column.to_string(),
            },
        );
    }

    // === CONSISTENCY ===
    suite.expect(
        CheckCategory::Consistency,
        Expectation::PairAGreaterThanB {
            column_a: TOTAL_CHARGES.to_string(),
            column_b: MONTHLY_CHARGES.to_string(),
            or_equal: true,
            mostly: Some(CONSISTENCY_MOSTLY),
        },
    )
}

impl DatasetChecker for RichChecker {
    fn mode(&self) -> CheckerMode {
        CheckerMode::Rich
    }

    fn definitions(&self) -> Vec<CheckDefinition> {
        self.suite.definitions()
    }

    fn check(&self, dataset: &Dataset) -> ValidationReport {
        info!("🔍 Starting data validation with the expectation suite...");
        let mut report = ValidationReport::new(CheckerMode::Rich);
        let mut current: Option<CheckCategory> = None;

        for outcome in self.suite.run(dataset) {
            if current != Some(outcome.category) {
                info!("   {}", outcome.category.header());
                current = Some(outcome.category);
            }
            debug!(
                check = %outcome.id,
                columns = ?outcome.columns,
                success = outcome.success,
                unexpected = outcome.unexpected_count,
                "Expectation evaluated"
            );
            report.push(outcome);
        }
        report
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::dataset::Value;

    const COLUMNS: [&str; 10] = REQUIRED_COLUMNS;

    fn row(total: f64, monthly: f64) -> Vec<Value> {
        vec![
            "1".into(),
            "Male".into(),
            "Yes".into(),
            "No".into(),
            "Yes".into(),
            "Fiber optic".into(),
            "Month-to-month".into(),
            Value::Integer(5),
            Value::Float(monthly),
            Value::Float(total),
        ]
    }

    fn dataset(rows: Vec<Vec<Value>>) -> Dataset {
        Dataset::new(COLUMNS.iter().map(|c| c.to_string()).collect(), rows).unwrap()
    }

    fn consistency_dataset(bad: usize) -> Dataset {
        let mut rows = vec![row(350.75, 70.35); 20 - bad];
        rows.extend(vec![row(10.0, 70.35); bad]);
        dataset(rows)
    }

    #[test]
    fn test_suite_shape() {
        let suite = telco_suite();
        assert_eq!(suite.len(), 23);
        let defs = suite.definitions();
        assert_eq!(defs[0].id, "expect_column_to_exist");
        assert_eq!(defs[1].id, "expect_column_values_to_not_be_null");
        assert_eq!(defs[1].columns, vec![CUSTOMER_ID.to_string()]);
        assert_eq!(
            defs.iter()
                .filter(|d| d.category == CheckCategory::Domain)
                .count(),
            6
        );
        assert_eq!(defs[22].category, CheckCategory::Consistency);
    }

    #[test]
    fn test_valid_row_passes_every_expectation() {
        let report = RichChecker::new().check(&dataset(vec![row(350.75, 70.35)]));
        assert_eq!(report.total(), 23);
        assert_eq!(report.passed_count(), 23);
        assert!(report.result().passed());
    }

    #[test]
    fn test_consistency_tolerates_one_in_twenty() {
        let result = RichChecker::new().check(&consistency_dataset(1)).result();
        assert!(result.passed(), "{:?}", result);
    }

    #[test]
    fn test_consistency_fails_two_in_twenty() {
        let result = RichChecker::new().check(&consistency_dataset(2)).result();
        assert_eq!(
            result.failed_checks(),
            ["expect_column_pair_values_A_to_be_greater_than_B"]
        );
    }

    #[test]
    fn test_missing_column_fails_every_expectation_on_it() {
        let columns: Vec<String> = COLUMNS
            .iter()
            .filter(|c| **c != "Contract")
            .map(|c| c.to_string())
            .collect();
        let mut r = row(350.75, 70.35);
        r.remove(6);
        let ds = Dataset::new(columns, vec![r]).unwrap();

        let result = RichChecker::new().check(&ds).result();
        assert_eq!(
            result.failed_checks(),
            ["expect_column_to_exist", "expect_column_values_to_be_in_set"]
        );
    }

    #[test]
    fn test_null_customer_id_and_tenure() {
        let mut r = row(350.75, 70.35);
        r[0] = Value::Null;
        r[7] = Value::Null;
        let result = RichChecker::new().check(&dataset(vec![r])).result();
        assert_eq!(
            result.failed_checks(),
            [
                "expect_column_values_to_not_be_null",
                "expect_column_values_to_not_be_null"
            ]
        );
    }

    #[test]
    fn test_null_categorical_is_ignored() {
        let mut r = row(350.75, 70.35);
        r[1] = Value::Null;
        assert!(RichChecker::new().check(&dataset(vec![r])).result().passed());
    }

    #[test]
    fn test_every_in_set_failure_is_reported_separately() {
        let mut r = row(350.75, 70.35);
        r[1] = "Other".into();
        r[2] = "Maybe".into();
        let result = RichChecker::new().check(&dataset(vec![r])).result();
        assert_eq!(
            result.failed_checks(),
            [
                "expect_column_values_to_be_in_set",
                "expect_column_values_to_be_in_set"
            ]
        );
    }
}
