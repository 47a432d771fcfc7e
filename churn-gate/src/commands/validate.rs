// churn-gate/src/commands/validate.rs
//
// USE CASE: Gate a dataset before training/scoring. Returns the verdict so the
// caller can turn it into an exit code.

use std::path::{Path, PathBuf};

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;

use churn_gate_core::infrastructure::config::OutputFormat;
use churn_gate_core::infrastructure::loader::load_dataset;
use churn_gate_core::{DatasetValidator, ValidationReport};
use miette::{IntoDiagnostic, WrapErr};

use super::Settings;

pub fn execute(data: PathBuf, settings: Settings) -> miette::Result<bool> {
    let dataset = load_dataset(&data)
        .wrap_err_with(|| format!("Failed to load dataset from {:?}", data))?;

    let validator = DatasetValidator::new(settings.mode);
    let report = validator
        .report(&dataset)
        .wrap_err_with(|| format!("Dataset {:?} is not row/column shaped", data))?;
    let result = report.result();

    match settings.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result).into_diagnostic()?),
        OutputFormat::Text => print_report(&data, dataset.len(), &report),
    }

    Ok(result.passed())
}

fn print_report(data: &Path, rows: usize, report: &ValidationReport) {
    println!(
        "🔍 {} ({} rows, {} checker)",
        data.display(),
        rows,
        report.mode()
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Check", "Category", "Columns", "Result", "Unexpected"]);
    for outcome in report.outcomes() {
        table.add_row(vec![
            outcome.id.clone(),
            outcome.category.to_string(),
            outcome.columns.join(", "),
            if outcome.success { "PASS" } else { "FAIL" }.to_string(),
            outcome.unexpected_count.to_string(),
        ]);
    }
    println!("{table}");

    let failed = report.failed_checks();
    if failed.is_empty() {
        println!(
            "\n✅ PASSED: {}/{} checks successful",
            report.passed_count(),
            report.total()
        );
    } else {
        println!(
            "\n❌ FAILED: {}/{} checks failed",
            failed.len(),
            report.total()
        );
        for id in failed {
            println!("   ➜ {}", id);
        }
    }
}
