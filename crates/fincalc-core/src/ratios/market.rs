use crate::types::Money;
use crate::FinCalcResult;

use super::ratio;

/// Price-to-earnings multiple. Negative earnings give a negative multiple.
pub fn price_to_earnings_ratio(market_price_per_share: Money, earnings_per_share: Money) -> FinCalcResult<Money> {
    ratio(
        market_price_per_share,
        earnings_per_share,
        "price-to-earnings ratio: earnings per share",
    )
}
