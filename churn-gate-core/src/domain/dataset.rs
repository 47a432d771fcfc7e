// churn-gate-core/src/domain/dataset.rs

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::error::DomainError;

/// Cell markers read as missing, on top of blank cells.
pub const NA_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single cell. Untagged so JSON `null`, integers, floats and strings map directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Missing value: explicit null or a NaN float.
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric coercion: anything that cannot be read as a number becomes `None`.
    /// Infinities are numbers; NaN is not.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) if !f.is_nan() => Some(*f),
            Value::Text(s) => s.trim().parse::<f64>().ok().filter(|f| !f.is_nan()),
            _ => None,
        }
    }

    /// Reads a raw text cell the way a dataframe reader would: blank or an NA
    /// marker is null, then integer, then float (including `inf`), otherwise text.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || NA_MARKERS.contains(&trimmed) {
            return Value::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Integer(i);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if !f.is_nan() => Value::Float(f),
            _ => Value::Text(raw.to_string()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

/// Tabular input: named columns and rows of cells in column order.
///
/// The serde form is columnar (`{"columns": [...], "rows": [[...], ...]}`), so a
/// deserialized dataset is not trusted until `ensure_shape` has run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, DomainError> {
        let dataset = Self { columns, rows };
        dataset.ensure_shape()?;
        Ok(dataset)
    }

    /// Builds a dataset from row records (column name -> value).
    /// Columns appear in first-seen order; keys absent from a record are null.
    pub fn from_records<I, R, K>(records: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut columns: Vec<String> = Vec::new();
        let mut sparse_rows: Vec<Vec<(usize, Value)>> = Vec::new();

        for record in records {
            let mut row = Vec::new();
            for (key, value) in record {
                let key = key.into();
                let idx = match columns.iter().position(|c| *c == key) {
                    Some(idx) => idx,
                    None => {
                        columns.push(key);
                        columns.len() - 1
                    }
                };
                if row.iter().any(|(i, _)| *i == idx) {
                    return Err(DomainError::InputError(format!(
                        "Record {} repeats column '{}'",
                        sparse_rows.len(),
                        columns[idx]
                    )));
                }
                row.push((idx, value));
            }
            sparse_rows.push(row);
        }

        let width = columns.len();
        let rows = sparse_rows
            .into_iter()
            .map(|cells| {
                let mut row = vec![Value::Null; width];
                for (idx, value) in cells {
                    row[idx] = value;
                }
                row
            })
            .collect();

        Self::new(columns, rows)
    }

    /// Structural check: unique, non-empty column names and rectangular rows.
    pub fn ensure_shape(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for name in &self.columns {
            if name.trim().is_empty() {
                return Err(DomainError::InputError(
                    "Column names must not be empty".to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(DomainError::InputError(format!(
                    "Duplicate column '{}'",
                    name
                )));
            }
        }

        let width = self.columns.len();
        if let Some((idx, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != width)
        {
            return Err(DomainError::InputError(format!(
                "Row {} has {} values but the header declares {} columns",
                idx,
                row.len(),
                width
            )));
        }
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of one column in row order, or `None` if the column is absent.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value> + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Row-aligned pairs from two columns.
    pub fn column_pair(
        &self,
        a: &str,
        b: &str,
    ) -> Option<impl Iterator<Item = (&Value, &Value)> + '_> {
        let ia = self.column_index(a)?;
        let ib = self.column_index(b)?;
        Some(self.rows.iter().map(move |row| (&row[ia], &row[ib])))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_cells() {
        assert_eq!(Value::infer(""), Value::Null);
        assert_eq!(Value::infer("   "), Value::Null);
        assert_eq!(Value::infer("5"), Value::Integer(5));
        assert_eq!(Value::infer(" 70.35 "), Value::Float(70.35));
        assert_eq!(Value::infer("Fiber optic"), Value::from("Fiber optic"));
        assert_eq!(Value::infer("Two year"), Value::from("Two year"));
    }

    #[test]
    fn test_infer_na_markers() {
        for marker in ["NA", "NaN", "null", "N/A", " None "] {
            assert_eq!(Value::infer(marker), Value::Null, "{marker}");
        }
        assert_eq!(Value::infer("No"), Value::from("No"));
    }

    #[test]
    fn test_infer_infinities() {
        assert_eq!(Value::infer("inf"), Value::Float(f64::INFINITY));
        assert_eq!(Value::infer("-inf"), Value::Float(f64::NEG_INFINITY));
        assert_eq!(Value::infer("1e999"), Value::Float(f64::INFINITY));
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(Value::Integer(12).as_number(), Some(12.0));
        assert_eq!(Value::Float(1.5).as_number(), Some(1.5));
        assert_eq!(Value::from(" 29.85").as_number(), Some(29.85));
        assert_eq!(Value::from(" ").as_number(), None);
        assert_eq!(Value::from("abc").as_number(), None);
        assert_eq!(Value::Float(f64::NAN).as_number(), None);
        assert_eq!(Value::from("NaN").as_number(), None);
        assert_eq!(Value::from("-inf").as_number(), Some(f64::NEG_INFINITY));
        assert_eq!(Value::Float(f64::INFINITY).as_number(), Some(f64::INFINITY));
        assert_eq!(Value::Null.as_number(), None);
    }

    #[test]
    fn test_nan_is_null() {
        assert!(Value::Float(f64::NAN).is_null());
        assert!(Value::Null.is_null());
        assert!(!Value::from("").is_null());
    }

    #[test]
    fn test_from_records_fills_missing_keys() {
        let ds = Dataset::from_records(vec![
            vec![("a", Value::Integer(1)), ("b", Value::from("x"))],
            vec![("b", Value::from("y")), ("c", Value::Float(2.0))],
        ])
        .unwrap();

        assert_eq!(ds.columns(), ["a", "b", "c"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(
            ds.rows()[1],
            vec![Value::Null, Value::from("y"), Value::Float(2.0)]
        );
    }

    #[test]
    fn test_from_records_rejects_repeated_key() {
        let res = Dataset::from_records(vec![vec![("a", Value::Null), ("a", Value::Null)]]);
        assert!(matches!(res, Err(DomainError::InputError(_))));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let res = Dataset::new(
            vec!["a".into(), "b".into()],
            vec![vec![Value::Null, Value::Null], vec![Value::Null]],
        );
        assert!(matches!(res, Err(DomainError::InputError(msg)) if msg.contains("Row 1")));
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let res = Dataset::new(vec!["a".into(), "a".into()], vec![]);
        assert!(matches!(res, Err(DomainError::InputError(_))));
    }

    #[test]
    fn test_deserialized_dataset_checked_by_ensure_shape() {
        let ds: Dataset =
            serde_json::from_str(r#"{"columns": ["a", "b"], "rows": [[1, "x"], [null]]}"#)
                .unwrap();
        assert!(ds.ensure_shape().is_err());
    }

    #[test]
    fn test_column_access() {
        let ds = Dataset::new(
            vec!["x".into(), "y".into()],
            vec![
                vec![Value::Integer(1), Value::Integer(2)],
                vec![Value::Integer(3), Value::Null],
            ],
        )
        .unwrap();

        let ys: Vec<_> = ds.column("y").unwrap().cloned().collect();
        assert_eq!(ys, vec![Value::Integer(2), Value::Null]);
        assert!(ds.column("z").is_none());
        assert_eq!(ds.column_pair("x", "y").unwrap().count(), 2);
    }
}
