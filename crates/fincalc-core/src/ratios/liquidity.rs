use crate::math::checked_sub;
use crate::precision::{round, Precision};
use crate::types::Money;
use crate::FinCalcResult;

use super::ratio;

/// Current assets over current liabilities.
pub fn current_ratio(current_assets: Money, current_liabilities: Money) -> FinCalcResult<Money> {
    ratio(current_assets, current_liabilities, "current ratio: current liabilities")
}

/// Acid-test ratio: current assets less inventories, over current liabilities.
pub fn quick_ratio(
    current_assets: Money,
    inventories: Money,
    current_liabilities: Money,
) -> FinCalcResult<Money> {
    let quick_assets = checked_sub(current_assets, inventories, "quick ratio: quick assets")?;
    ratio(quick_assets, current_liabilities, "quick ratio: current liabilities")
}

/// Inflow less outflow. Fails only on overflow.
pub fn net_cash_flow(inflow: Money, outflow: Money) -> FinCalcResult<Money> {
    let net = checked_sub(inflow, outflow, "net cash flow")?;
    Ok(round(net, Precision::Cents))
}
