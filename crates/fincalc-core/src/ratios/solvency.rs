use crate::types::Money;
use crate::FinCalcResult;

use super::{percentage, ratio};

/// Total debt as a percentage of total income.
pub fn debt_to_income_ratio(total_debt: Money, total_income: Money) -> FinCalcResult<Money> {
    percentage(total_debt, total_income, "debt-to-income ratio: total income")
}

pub fn leverage_ratio(total_debt: Money, total_assets: Money) -> FinCalcResult<Money> {
    ratio(total_debt, total_assets, "leverage ratio: total assets")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_debt_to_income() {
        assert_eq!(debt_to_income_ratio(dec!(500), dec!(2000)).unwrap(), dec!(25));
    }

    #[test]
    fn test_leverage() {
        assert_eq!(leverage_ratio(dec!(20000), dec!(100000)).unwrap(), dec!(0.2));
        assert!(leverage_ratio(dec!(20000), dec!(0)).is_err());
    }
}
