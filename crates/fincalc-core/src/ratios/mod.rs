//! Accounting ratios and margins.
//!
//! Every function here is `numerator / denominator`, optionally scaled by
//! 100 after the division, and rounded to two places. Signs are not checked:
//! a negative denominator yields a negative ratio. A zero denominator fails.

pub mod activity;
pub mod liquidity;
pub mod market;
pub mod profitability;
pub mod solvency;

pub use activity::inventory_turnover_ratio;
pub use liquidity::{current_ratio, net_cash_flow, quick_ratio};
pub use market::price_to_earnings_ratio;
pub use profitability::{
    expense_ratio, gross_profit_margin, profit_margin, return_on_assets, return_on_equity,
    return_on_investment,
};
pub use solvency::{debt_to_income_ratio, leverage_ratio};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::math::{checked_div, checked_mul};
use crate::precision::{round, Precision};
use crate::FinCalcResult;

const HUNDRED: Decimal = dec!(100);

/// `numerator / denominator`, rounded to two places.
pub(crate) fn ratio(numerator: Decimal, denominator: Decimal, context: &str) -> FinCalcResult<Decimal> {
    let value = checked_div(numerator, denominator, context)?;
    Ok(round(value, Precision::Cents))
}

/// `numerator / denominator * 100`, rounded to two places.
pub(crate) fn percentage(numerator: Decimal, denominator: Decimal, context: &str) -> FinCalcResult<Decimal> {
    let value = checked_div(numerator, denominator, context)?;
    let scaled = checked_mul(value, HUNDRED, context)?;
    Ok(round(scaled, Precision::Cents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinCalcError;

    #[test]
    fn test_percentage_divides_before_scaling() {
        // 1/3 is rounded at 28 digits before the x100
        assert_eq!(percentage(dec!(1), dec!(3), "t").unwrap(), dec!(33.33));
    }

    #[test]
    fn test_negative_denominator_gives_negative_ratio() {
        assert_eq!(ratio(dec!(10), dec!(-4), "t").unwrap(), dec!(-2.5));
    }

    #[test]
    fn test_zero_denominator_names_context() {
        match ratio(dec!(1), Decimal::ZERO, "current liabilities") {
            Err(FinCalcError::DivisionByZero { context }) => {
                assert_eq!(context, "current liabilities")
            }
            other => panic!("expected DivisionByZero, got {other:?}"),
        }
    }
}
