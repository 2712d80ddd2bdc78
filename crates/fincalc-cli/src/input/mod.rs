pub mod file;
pub mod stdin;

use fincalc_core::FinCalcError;
use rust_decimal::Decimal;
use serde_json::Value;

/// Resolve a decimal sequence from, in order: the command-line list, a JSON
/// file, or JSON piped on stdin.
///
/// JSON may be a bare array or an object holding the array under `key`.
/// Elements may be numbers or numeric strings.
pub fn load_sequence(
    cli_values: &Option<Vec<Decimal>>,
    input_path: &Option<String>,
    key: &str,
) -> Result<Vec<Decimal>, Box<dyn std::error::Error>> {
    if let Some(values) = cli_values {
        return Ok(values.clone());
    }
    if let Some(path) = input_path {
        let data = file::read_json_value(path)?;
        return Ok(parse_sequence(&data, key)?);
    }
    if let Some(data) = stdin::read_stdin()? {
        return Ok(parse_sequence(&data, key)?);
    }
    Err(format!("No {key} given: pass --{}, --input <file.json>, or pipe JSON on stdin", key.replace('_', "-")).into())
}

/// Convert a JSON array (or `{ key: [...] }`) into decimals without going
/// through `f64`. Numbers keep their literal digits (`arbitrary_precision`).
pub fn parse_sequence(data: &Value, key: &str) -> Result<Vec<Decimal>, FinCalcError> {
    let items = match data {
        Value::Array(items) => items,
        Value::Object(map) => map
            .get(key)
            .and_then(Value::as_array)
            .ok_or_else(|| FinCalcError::InvalidInput {
                field: key.into(),
                reason: format!("JSON object must contain a '{key}' array"),
            })?,
        _ => {
            return Err(FinCalcError::InvalidInput {
                field: key.into(),
                reason: format!("expected a JSON array or an object with a '{key}' array"),
            })
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let text = match item {
                Value::Number(n) => n.to_string(),
                Value::String(s) => s.trim().to_string(),
                other => other.to_string(),
            };
            text.parse::<Decimal>()
                .or_else(|_| Decimal::from_scientific(&text))
                .map_err(|_| FinCalcError::InvalidInput {
                    field: format!("{key}[{i}]"),
                    reason: format!("'{text}' is not a decimal number"),
                })
        })
        .collect()
}
