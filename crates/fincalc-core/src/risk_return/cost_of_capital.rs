use rust_decimal::Decimal;

use crate::math::{checked_add, checked_div, checked_mul, checked_sub};
use crate::precision::{round, Precision};
use crate::types::{Money, Rate};
use crate::FinCalcResult;

/// Weighted Average Cost of Capital from market values of equity and debt.
///
/// `(E / (E + D)) * ke + (D / (E + D)) * kd * (1 - t)`, rounded to four
/// places. Weights are derived from the amounts, so they always sum to one;
/// `E + D == 0` fails.
pub fn wacc(
    equity: Money,
    debt: Money,
    cost_equity: Rate,
    cost_debt: Rate,
    tax_rate: Rate,
) -> FinCalcResult<Rate> {
    let total_capital = checked_add(equity, debt, "WACC: equity plus debt")?;
    let equity_weight = checked_div(equity, total_capital, "WACC: equity plus debt")?;
    let debt_weight = checked_div(debt, total_capital, "WACC: equity plus debt")?;

    let tax_shield = checked_sub(Decimal::ONE, tax_rate, "WACC tax shield")?;
    let after_tax_cost_of_debt = checked_mul(cost_debt, tax_shield, "WACC after-tax cost of debt")?;
    let equity_part = checked_mul(equity_weight, cost_equity, "WACC equity component")?;
    let debt_part = checked_mul(debt_weight, after_tax_cost_of_debt, "WACC debt component")?;
    let wacc = checked_add(equity_part, debt_part, "WACC")?;

    Ok(round(wacc, Precision::BasisPoints))
}

/// Economic Value Added: operating profit less a capital charge.
pub fn economic_value_added(
    net_operating_profit: Money,
    capital_employed: Money,
    cost_of_capital: Rate,
) -> FinCalcResult<Money> {
    let capital_charge = checked_mul(capital_employed, cost_of_capital, "EVA capital charge")?;
    let eva = checked_sub(net_operating_profit, capital_charge, "EVA")?;
    Ok(round(eva, Precision::Cents))
}

/// Units needed to cover fixed costs at the given contribution margin.
pub fn break_even_point(
    fixed_costs: Money,
    price_per_unit: Money,
    variable_cost_per_unit: Money,
) -> FinCalcResult<Decimal> {
    let margin = checked_sub(
        price_per_unit,
        variable_cost_per_unit,
        "break-even point: contribution margin per unit",
    )?;
    let units = checked_div(
        fixed_costs,
        margin,
        "break-even point: contribution margin per unit",
    )?;
    Ok(round(units, Precision::Cents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinCalcError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_wacc() {
        let result = wacc(dec!(50000), dec!(20000), dec!(0.1), dec!(0.05), dec!(0.3)).unwrap();
        assert_eq!(result, dec!(0.0814));
        assert_eq!(result.round_dp(3), dec!(0.081));
    }

    #[test]
    fn test_wacc_all_equity() {
        let result = wacc(dec!(100), dec!(0), dec!(0.09), dec!(0.05), dec!(0.25)).unwrap();
        assert_eq!(result, dec!(0.09));
    }

    #[test]
    fn test_wacc_no_capital() {
        assert!(wacc(dec!(0), dec!(0), dec!(0.1), dec!(0.05), dec!(0.3)).is_err());
        // Offsetting amounts also sum to zero
        assert!(wacc(dec!(100), dec!(-100), dec!(0.1), dec!(0.05), dec!(0.3)).is_err());
    }

    #[test]
    fn test_eva() {
        assert_eq!(economic_value_added(dec!(5000), dec!(20000), dec!(0.1)).unwrap(), dec!(3000));
        assert_eq!(economic_value_added(dec!(1000), dec!(20000), dec!(0.1)).unwrap(), dec!(-1000));
    }

    #[test]
    fn test_break_even() {
        assert_eq!(break_even_point(dec!(1000), dec!(50), dec!(30)).unwrap(), dec!(50));
        assert_eq!(break_even_point(dec!(10000), dec!(25), dec!(18)).unwrap(), dec!(1428.57));
        assert!(break_even_point(dec!(1000), dec!(30), dec!(30)).is_err());
    }

    #[test]
    fn test_out_of_range_amounts_are_overflow() {
        let m = Decimal::MAX;
        assert!(matches!(
            wacc(m, m, dec!(0.1), dec!(0.05), dec!(0.3)),
            Err(FinCalcError::Overflow { .. })
        ));
        assert!(matches!(
            wacc(dec!(1), dec!(1), dec!(0.1), m, -m),
            Err(FinCalcError::Overflow { .. })
        ));
        assert!(matches!(
            economic_value_added(-m, m, dec!(1)),
            Err(FinCalcError::Overflow { .. })
        ));
        assert!(matches!(
            break_even_point(dec!(1), m, -m),
            Err(FinCalcError::Overflow { .. })
        ));
    }
}
