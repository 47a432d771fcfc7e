// churn-gate/src/commands/checks.rs
//
// USE CASE: List the checklist the selected checker would run.

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;

use churn_gate_core::DatasetValidator;

use super::Settings;

pub fn execute(settings: Settings) -> miette::Result<()> {
    let validator = DatasetValidator::new(settings.mode);
    let definitions = validator.definitions();

    println!(
        "📋 {} checks ({} checker)",
        definitions.len(),
        validator.mode()
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "Check", "Category", "Columns"]);
    for (idx, def) in definitions.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            def.id.clone(),
            def.category.to_string(),
            def.columns.join(", "),
        ]);
    }
    println!("{table}");

    Ok(())
}
