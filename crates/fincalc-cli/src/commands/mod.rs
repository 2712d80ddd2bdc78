pub mod ratios;
pub mod risk_return;
pub mod time_value;

use fincalc_core::types::with_metadata;
use fincalc_core::{FinCalcResult, Precision};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

pub type CommandResult = Result<Value, Box<dyn std::error::Error>>;

/// Result body shared by every single-value formula.
#[derive(Debug, Serialize)]
pub struct FormulaOutput {
    pub value: Decimal,
    pub decimal_places: u32,
}

/// Time a formula call and wrap its value in the standard envelope, echoing
/// the parsed arguments as assumptions.
pub fn evaluate<A: Serialize>(
    methodology: &str,
    assumptions: &A,
    precision: Precision,
    warnings: Vec<String>,
    formula: impl FnOnce() -> FinCalcResult<Decimal>,
) -> CommandResult {
    let start = Instant::now();
    let value = formula()?;
    let elapsed = start.elapsed().as_micros() as u64;

    let output = FormulaOutput {
        value,
        decimal_places: precision.decimal_places(),
    };
    Ok(serde_json::to_value(with_metadata(
        methodology,
        assumptions,
        warnings,
        elapsed,
        precision,
        output,
    ))?)
}

/// Warn on period counts the formulas accept but rarely mean.
pub fn period_warnings(name: &str, periods: i32) -> Vec<String> {
    if periods <= 0 {
        vec![format!(
            "{name} is {periods}; non-positive periods are evaluated as written, not rejected"
        )]
    } else {
        Vec::new()
    }
}
