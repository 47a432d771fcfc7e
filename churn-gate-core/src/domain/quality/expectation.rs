// churn-gate-core/src/domain/quality/expectation.rs
//
// Expectation engine used by the rich checker. Every expectation evaluates to a
// result; a missing column makes the expectation fail instead of raising.

use crate::domain::dataset::{Dataset, Value};
use crate::domain::quality::result::{CheckCategory, CheckDefinition, CheckOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    ColumnToExist {
        column: String,
    },
    ValuesNotNull {
        column: String,
    },
    /// Nulls are ignored.
    ValuesInSet {
        column: String,
        values: Vec<String>,
    },
    /// Inclusive bounds. Nulls are ignored, non-numeric values are unexpected.
    ValuesBetween {
        column: String,
        min: Option<f64>,
        max: Option<f64>,
    },
    /// Rows where both sides are missing are ignored.
    PairAGreaterThanB {
        column_a: String,
        column_b: String,
        or_equal: bool,
        mostly: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectationResult {
    pub success: bool,
    pub element_count: usize,
    pub unexpected_count: usize,
}

impl ExpectationResult {
    fn missing_column() -> Self {
        Self {
            success: false,
            element_count: 0,
            unexpected_count: 0,
        }
    }

    fn from_counts(element_count: usize, unexpected_count: usize, mostly: Option<f64>) -> Self {
        let success = match mostly {
            None => unexpected_count == 0,
            Some(_) if element_count == 0 => true,
            Some(mostly) => {
                let ok = (element_count - unexpected_count) as f64;
                ok / element_count as f64 >= mostly
            }
        };
        Self {
            success,
            element_count,
            unexpected_count,
        }
    }
}

impl Expectation {
    pub fn expectation_type(&self) -> &'static str {
        match self {
            Expectation::ColumnToExist { .. } => "expect_column_to_exist",
            Expectation::ValuesNotNull { .. } => "expect_column_values_to_not_be_null",
            Expectation::ValuesInSet { .. } => "expect_column_values_to_be_in_set",
            Expectation::ValuesBetween { .. } => "expect_column_values_to_be_between",
            Expectation::PairAGreaterThanB { .. } => {
                "expect_column_pair_values_A_to_be_greater_than_B"
            }
        }
    }

    pub fn columns(&self) -> Vec<String> {
        match self {
            Expectation::ColumnToExist { column }
            | Expectation::ValuesNotNull { column }
            | Expectation::ValuesInSet { column, .. }
            | Expectation::ValuesBetween { column, .. } => vec![column.clone()],
            Expectation::PairAGreaterThanB {
                column_a, column_b, ..
            } => vec![column_a.clone(), column_b.clone()],
        }
    }

    pub fn evaluate(&self, dataset: &Dataset) -> ExpectationResult {
        match self {
            Expectation::ColumnToExist { column } => ExpectationResult {
                success: dataset.has_column(column),
                element_count: dataset.len(),
                unexpected_count: 0,
            },

            Expectation::ValuesNotNull { column } => match dataset.column(column) {
                None => ExpectationResult::missing_column(),
                Some(values) => {
                    let nulls = values.filter(|v| v.is_null()).count();
                    ExpectationResult::from_counts(dataset.len(), nulls, None)
                }
            },

            Expectation::ValuesInSet { column, values } => match dataset.column(column) {
                None => ExpectationResult::missing_column(),
                Some(cells) => {
                    let (count, unexpected) = count_unexpected(cells, |v| {
                        v.as_text().is_some_and(|s| values.iter().any(|a| a == s))
                    });
                    ExpectationResult::from_counts(count, unexpected, None)
                }
            },

            Expectation::ValuesBetween { column, min, max } => match dataset.column(column) {
                None => ExpectationResult::missing_column(),
                Some(cells) => {
                    let (count, unexpected) = count_unexpected(cells, |v| {
                        v.as_number().is_some_and(|n| {
                            min.is_none_or(|lo| n >= lo) && max.is_none_or(|hi| n <= hi)
                        })
                    });
                    ExpectationResult::from_counts(count, unexpected, None)
                }
            },

            Expectation::PairAGreaterThanB {
                column_a,
                column_b,
                or_equal,
                mostly,
            } => match dataset.column_pair(column_a, column_b) {
                None => ExpectationResult::missing_column(),
                Some(pairs) => {
                    let mut count = 0;
                    let mut unexpected = 0;
                    for (a, b) in pairs {
                        if a.is_null() && b.is_null() {
                            continue;
                        }
                        count += 1;
                        let holds = match (a.as_number(), b.as_number()) {
                            (Some(a), Some(b)) if *or_equal => a >= b,
                            (Some(a), Some(b)) => a > b,
                            _ => false,
                        };
                        if !holds {
                            unexpected += 1;
                        }
                    }
                    ExpectationResult::from_counts(count, unexpected, *mostly)
                }
            },
        }
    }
}

/// Counts non-null cells and those among them that fail `is_expected`.
fn count_unexpected<'a>(
    cells: impl Iterator<Item = &'a Value>,
    is_expected: impl Fn(&Value) -> bool,
) -> (usize, usize) {
    cells
        .filter(|v| !v.is_null())
        .fold((0, 0), |(count, unexpected), v| {
            (count + 1, unexpected + usize::from(!is_expected(v)))
        })
}

/// Ordered list of expectations, each tagged with the category it reports under.
#[derive(Debug, Clone, Default)]
pub struct ExpectationSuite {
    entries: Vec<(CheckCategory, Expectation)>,
}

impl ExpectationSuite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect(mut self, category: CheckCategory, expectation: Expectation) -> Self {
        self.entries.push((category, expectation));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn definitions(&self) -> Vec<CheckDefinition> {
        self.entries
            .iter()
            .map(|(category, e)| CheckDefinition {
                id: e.expectation_type().to_string(),
                category: *category,
                columns: e.columns(),
            })
            .collect()
    }

    /// Runs every expectation against the dataset, in suite order.
    pub fn run(&self, dataset: &Dataset) -> Vec<CheckOutcome> {
        self.entries
            .iter()
            .map(|(category, e)| {
                let res = e.evaluate(dataset);
                CheckOutcome {
                    id: e.expectation_type().to_string(),
                    category: *category,
                    columns: e.columns(),
                    success: res.success,
                    element_count: res.element_count,
                    unexpected_count: res.unexpected_count,
                }
            })
            .collect()
    }
}
