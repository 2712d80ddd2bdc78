use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{display, result_rows, warnings};

/// Result fields as a two-column table, followed by warnings and methodology.
pub fn print_table(value: &Value) {
    let rows = result_rows(value);
    if rows.is_empty() {
        println!("{}", display(value));
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (field, val) in &rows {
        builder.push_record([field.as_str(), val.as_str()]);
    }
    println!("{}", Table::from(builder));

    let warnings = warnings(value);
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {w}");
        }
    }

    if let Some(Value::String(methodology)) = value.get("methodology") {
        println!("\nMethodology: {methodology}");
    }
}
