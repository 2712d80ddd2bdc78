//! Margins and returns, all expressed as percentages.

use crate::math::checked_sub;
use crate::types::Money;
use crate::FinCalcResult;

use super::percentage;

pub fn profit_margin(net_income: Money, revenue: Money) -> FinCalcResult<Money> {
    percentage(net_income, revenue, "profit margin: revenue")
}

pub fn gross_profit_margin(gross_profit: Money, revenue: Money) -> FinCalcResult<Money> {
    percentage(gross_profit, revenue, "gross profit margin: revenue")
}

/// Operating expenses as a percentage of assets under management.
pub fn expense_ratio(total_expenses: Money, total_assets: Money) -> FinCalcResult<Money> {
    percentage(total_expenses, total_assets, "expense ratio: total assets")
}

pub fn return_on_equity(net_income: Money, shareholder_equity: Money) -> FinCalcResult<Money> {
    percentage(net_income, shareholder_equity, "return on equity: shareholder equity")
}

pub fn return_on_assets(net_income: Money, total_assets: Money) -> FinCalcResult<Money> {
    percentage(net_income, total_assets, "return on assets: total assets")
}

/// Gain over cost, as a percentage of cost. `gain` is the total amount
/// returned, not the profit.
pub fn return_on_investment(gain: Money, cost: Money) -> FinCalcResult<Money> {
    let profit = checked_sub(gain, cost, "return on investment: gain less cost")?;
    percentage(profit, cost, "return on investment: cost")
}
