// churn-gate-core/src/infrastructure/loader.rs
//
// Caller-side loading: turns a CSV or JSON file into a `Dataset`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::dataset::{Dataset, Value};
use crate::domain::error::DomainError;
use crate::error::GateError;
use crate::infrastructure::error::InfrastructureError;

#[instrument]
pub fn load_dataset(path: &Path) -> Result<Dataset, GateError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let file = BufReader::new(File::open(path)?);
    let dataset = match extension.as_str() {
        "csv" => read_csv(file)?,
        "json" => read_json(file)?,
        _ => {
            return Err(InfrastructureError::UnsupportedFormat(path.display().to_string()).into());
        }
    };

    debug!(
        rows = dataset.len(),
        columns = dataset.columns().len(),
        "Dataset loaded"
    );
    Ok(dataset)
}

/// Header row required. Cells are typed with `Value::infer`; a row with the wrong
/// number of fields is a structural error.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset, GateError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let columns: Vec<String> = reader
        .headers()
        .map_err(InfrastructureError::from)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(InfrastructureError::from)?;
        rows.push(record.iter().map(Value::infer).collect());
    }

    Ok(Dataset::new(columns, rows)?)
}

/// Accepts an array of record objects, or the columnar `{columns, rows}` form.
pub fn read_json<R: Read>(reader: R) -> Result<Dataset, GateError> {
    let doc: serde_json::Value =
        serde_json::from_reader(reader).map_err(InfrastructureError::from)?;

    let columnar = matches!(&doc, serde_json::Value::Object(map) if map.contains_key("columns"));

    match doc {
        serde_json::Value::Array(records) => {
            let mut converted = Vec::with_capacity(records.len());
            for (idx, record) in records.into_iter().enumerate() {
                let serde_json::Value::Object(map) = record else {
                    return Err(DomainError::InputError(format!(
                        "Record {} is not an object",
                        idx
                    ))
                    .into());
                };
                let row = map
                    .into_iter()
                    .map(|(key, v)| scalar(&key, v).map(|v| (key, v)))
                    .collect::<Result<Vec<_>, _>>()?;
                converted.push(row);
            }
            Ok(Dataset::from_records(converted)?)
        }
        _ if columnar => {
            let table: ColumnarJson =
                serde_json::from_value(doc).map_err(InfrastructureError::from)?;
            let rows = table
                .rows
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .enumerate()
                        .map(|(idx, v)| {
                            let column = table.columns.get(idx).map_or("<extra>", String::as_str);
                            scalar(column, v)
                        })
                        .collect::<Result<Vec<_>, _>>()
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Dataset::new(table.columns, rows)?)
        }
        _ => Err(DomainError::InputError(
            "Dataset must be an array of records or a {columns, rows} object".to_string(),
        )
        .into()),
    }
}

#[derive(Deserialize)]
struct ColumnarJson {
    columns: Vec<String>,
    rows: Vec<Vec<serde_json::Value>>,
}

fn scalar(column: &str, value: serde_json::Value) -> Result<Value, DomainError> {
    match value {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::String(s) => Ok(Value::Text(s)),
        serde_json::Value::Number(n) => Ok(match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
        }),
        other => Err(DomainError::InputError(format!(
            "Column '{}' holds a non-scalar value: {}",
            column, other
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "customerID,gender,tenure,MonthlyCharges,TotalCharges\n\
                       7590-VHVEG,Female,1,29.85,29.85\n\
                       5575-GNVDE,Male,34,56.95, \n";

    #[test]
    fn test_read_csv_infers_types() {
        let ds = read_csv(CSV.as_bytes()).unwrap();
        assert_eq!(ds.columns().len(), 5);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows()[0][2], Value::Integer(1));
        assert_eq!(ds.rows()[0][3], Value::Float(29.85));
        assert_eq!(ds.rows()[1][4], Value::Null);
    }

    #[test]
    fn test_read_csv_infinities_and_na_markers() {
        let ds = read_csv("tenure,TotalCharges\ninf,-inf\n1e999,NA\n".as_bytes()).unwrap();
        assert_eq!(ds.rows()[0][0], Value::Float(f64::INFINITY));
        assert_eq!(ds.rows()[0][1], Value::Float(f64::NEG_INFINITY));
        assert_eq!(ds.rows()[1][0], Value::Float(f64::INFINITY));
        assert_eq!(ds.rows()[1][1], Value::Null);
    }

    #[test]
    fn test_read_csv_ragged_row_is_input_error() {
        let res = read_csv("a,b\n1,2\n3\n".as_bytes());
        assert!(matches!(
            res,
            Err(GateError::Domain(DomainError::InputError(_)))
        ));
    }

    #[test]
    fn test_read_json_records() {
        let json = r#"[{"customerID": "1", "tenure": 5, "MonthlyCharges": 70.35},
                       {"customerID": null, "TotalCharges": 350.75}]"#;
        let ds = read_json(json.as_bytes()).unwrap();
        assert_eq!(ds.columns(), ["customerID", "tenure", "MonthlyCharges", "TotalCharges"]);
        assert_eq!(ds.rows()[0][1], Value::Integer(5));
        assert_eq!(ds.rows()[1][0], Value::Null);
        assert_eq!(ds.rows()[1][3], Value::Float(350.75));
    }

    #[test]
    fn test_read_json_columnar() {
        let json = r#"{"columns": ["a", "b"], "rows": [[1, "x"], [null, "y"]]}"#;
        let ds = read_json(json.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows()[1][0], Value::Null);
    }

    #[test]
    fn test_read_json_columnar_non_scalar_is_input_error() {
        let res = read_json(r#"{"columns": ["a"], "rows": [[[1, 2]]]}"#.as_bytes());
        assert!(matches!(
            res,
            Err(GateError::Domain(DomainError::InputError(msg))) if msg.contains("'a'")
        ));
        assert!(matches!(
            read_json(r#"{"columns": ["a"], "rows": [[1, 2]]}"#.as_bytes()),
            Err(GateError::Domain(DomainError::InputError(_)))
        ));
    }

    #[test]
    fn test_read_json_rejects_non_tabular() {
        assert!(matches!(
            read_json("42".as_bytes()),
            Err(GateError::Domain(DomainError::InputError(_)))
        ));
        assert!(matches!(
            read_json(r#"[{"a": [1, 2]}]"#.as_bytes()),
            Err(GateError::Domain(DomainError::InputError(_)))
        ));
        assert!(matches!(
            read_json(r#"[1, 2]"#.as_bytes()),
            Err(GateError::Domain(DomainError::InputError(_)))
        ));
    }

    #[test]
    fn test_load_dataset_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("telco.CSV");
        File::create(&csv_path)
            .unwrap()
            .write_all(CSV.as_bytes())
            .unwrap();
        assert_eq!(load_dataset(&csv_path).unwrap().len(), 2);

        let txt_path = dir.path().join("telco.txt");
        std::fs::write(&txt_path, CSV).unwrap();
        assert!(matches!(
            load_dataset(&txt_path),
            Err(GateError::Infrastructure(InfrastructureError::UnsupportedFormat(_)))
        ));
    }
}
