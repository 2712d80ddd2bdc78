use serde_json::Value;

use super::display;

/// Print only the headline number: `value` for single formulas, `irr` for
/// the IRR report.
pub fn print_minimal(value: &Value) {
    let headline = value
        .get("result")
        .and_then(|result| result.get("value").or_else(|| result.get("irr")));

    match headline {
        Some(v) => println!("{}", display(v)),
        None => println!("{}", display(value)),
    }
}
