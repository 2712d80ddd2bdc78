use crate::types::Money;
use crate::FinCalcResult;

use super::ratio;

/// Times inventory turns over in the period: COGS over average inventory.
pub fn inventory_turnover_ratio(cost_of_goods_sold: Money, average_inventory: Money) -> FinCalcResult<Money> {
    ratio(
        cost_of_goods_sold,
        average_inventory,
        "inventory turnover ratio: average inventory",
    )
}
