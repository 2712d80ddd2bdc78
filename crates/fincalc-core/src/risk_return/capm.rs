use rust_decimal::Decimal;

use crate::math::{checked_add, checked_div, checked_mul, checked_sub};
use crate::precision::{round, Precision};
use crate::types::Rate;
use crate::FinCalcResult;

/// Expected return under the Capital Asset Pricing Model.
///
/// `rf + beta * (rm - rf)`, rounded to four places. Fails only on overflow.
pub fn capm(risk_free_rate: Rate, beta: Decimal, market_return: Rate) -> FinCalcResult<Rate> {
    let market_premium = checked_sub(market_return, risk_free_rate, "CAPM market premium")?;
    let risk_premium = checked_mul(beta, market_premium, "CAPM risk premium")?;
    let expected = checked_add(risk_free_rate, risk_premium, "CAPM expected return")?;
    Ok(round(expected, Precision::BasisPoints))
}

/// Excess return per unit of total risk, rounded to two places.
pub fn sharpe_ratio(
    portfolio_return: Rate,
    risk_free_rate: Rate,
    portfolio_risk: Rate,
) -> FinCalcResult<Decimal> {
    let excess = checked_sub(portfolio_return, risk_free_rate, "Sharpe ratio excess return")?;
    let sharpe = checked_div(
        excess,
        portfolio_risk,
        "Sharpe ratio: portfolio risk",
    )?;
    Ok(round(sharpe, Precision::Cents))
}

/// Excess return per unit of systematic risk (Treynor form), to four places.
pub fn risk_adjusted_return(return_rate: Rate, risk_free_rate: Rate, beta: Decimal) -> FinCalcResult<Rate> {
    let excess = checked_sub(return_rate, risk_free_rate, "risk-adjusted return excess")?;
    let adjusted = checked_div(excess, beta, "risk-adjusted return: beta")?;
    Ok(round(adjusted, Precision::BasisPoints))
}
