pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Render a scalar envelope field for text output.
pub(crate) fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items.iter().map(display).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// `(field, value)` rows for the result body of an envelope.
pub(crate) fn result_rows(envelope: &Value) -> Vec<(String, String)> {
    match envelope.get("result") {
        Some(Value::Object(fields)) => fields
            .iter()
            .map(|(key, val)| (key.clone(), display(val)))
            .collect(),
        Some(other) => vec![("result".to_string(), display(other))],
        None => Vec::new(),
    }
}

/// Warning strings carried by an envelope.
pub(crate) fn warnings(envelope: &Value) -> Vec<String> {
    envelope
        .get("warnings")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(display).collect())
        .unwrap_or_default()
}
