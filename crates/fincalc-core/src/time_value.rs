use rust_decimal::Decimal;

use crate::error::FinCalcError;
use crate::math::{checked_add, checked_div, checked_mul, checked_sub, exponent, powi, powi_one_plus};
use crate::precision::{round, Precision};
use crate::types::{Money, Periods, Rate};
use crate::FinCalcResult;

/// Future value of a lump sum compounded `frequency` times per period.
///
/// `principal * (1 + rate / frequency) ^ (frequency * time)`, rounded to cents.
/// A zero `frequency` is a division by zero.
pub fn compound_interest(
    principal: Money,
    rate: Rate,
    time: Periods,
    frequency: Periods,
) -> FinCalcResult<Money> {
    let periodic_rate = checked_div(rate, Decimal::from(frequency), "compound interest frequency")?;
    let n = exponent(frequency, time, "compound interest period count")?;
    let base = checked_add(Decimal::ONE, periodic_rate, "compound interest growth factor")?;
    let growth = powi(base, n, "compound interest growth factor")?;
    let value = checked_mul(principal, growth, "compound interest")?;
    Ok(round(value, Precision::Cents))
}

/// Future value of an ordinary annuity.
///
/// `payment * (((1 + rate) ^ periods - 1) / rate)`. A zero rate fails rather
/// than falling back to `payment * periods`.
pub fn future_value_of_annuity(payment: Money, rate: Rate, periods: Periods) -> FinCalcResult<Money> {
    let base = checked_add(Decimal::ONE, rate, "future value of annuity growth factor")?;
    let growth = powi(base, periods, "future value of annuity growth factor")?;
    let accumulated = checked_sub(growth, Decimal::ONE, "future value of annuity growth factor")?;
    let factor = checked_div(accumulated, rate, "future value of annuity rate")?;
    let value = checked_mul(payment, factor, "future value of annuity")?;
    Ok(round(value, Precision::Cents))
}

/// Present value of an ordinary annuity.
///
/// `payment * ((1 - (1 + rate) ^ -periods) / rate)`. A zero rate fails.
pub fn present_value_of_annuity(payment: Money, rate: Rate, periods: Periods) -> FinCalcResult<Money> {
    let n = exponent(periods, -1, "present value of annuity period count")?;
    let base = checked_add(Decimal::ONE, rate, "present value of annuity discount factor")?;
    let discount = powi(base, n, "present value of annuity discount factor")?;
    let remaining = checked_sub(Decimal::ONE, discount, "present value of annuity discount factor")?;
    let factor = checked_div(remaining, rate, "present value of annuity rate")?;
    let value = checked_mul(payment, factor, "present value of annuity")?;
    Ok(round(value, Precision::Cents))
}

/// Net Present Value of a series of cash flows
///
/// Index 0 is undiscounted. An empty series is worth zero.
pub fn npv(cash_flows: &[Money], discount_rate: Rate) -> FinCalcResult<Money> {
    let mut result = Decimal::ZERO;

    for (t, cf) in cash_flows.iter().enumerate() {
        let period = i32::try_from(t).map_err(|_| FinCalcError::Overflow {
            context: format!("NPV period index {t}"),
        })?;
        let discount = powi_one_plus(discount_rate, period, "NPV discount factor")?;
        let present = checked_div(*cf, discount, &format!("NPV discount factor at period {t}"))?;
        result = checked_add(result, present, "NPV sum")?;
    }

    Ok(round(result, Precision::Cents))
}

/// Level monthly payment that amortizes `principal` over `periods` months.
///
/// `annual_rate` is nominal and divided by 12. A zero rate leaves the
/// denominator at zero and fails.
pub fn loan_amortization(principal: Money, annual_rate: Rate, periods: Periods) -> FinCalcResult<Money> {
    let monthly_rate = checked_div(annual_rate, Decimal::from(12), "loan amortization monthly rate")?;
    let n = exponent(periods, -1, "loan amortization period count")?;
    let discount = powi_one_plus(monthly_rate, n, "loan amortization discount factor")?;
    let interest = checked_mul(principal, monthly_rate, "loan amortization interest")?;
    let remaining = checked_sub(Decimal::ONE, discount, "loan amortization annuity factor")?;
    let payment = checked_div(interest, remaining, "loan amortization annuity factor")?;
    Ok(round(payment, Precision::Cents))
}

/// Effective annual rate: `(1 + nominal / n) ^ n - 1`, to four places.
pub fn effective_annual_rate(nominal_rate: Rate, compounding_periods: Periods) -> FinCalcResult<Rate> {
    let periodic_rate = checked_div(
        nominal_rate,
        Decimal::from(compounding_periods),
        "effective annual rate compounding periods",
    )?;
    let base = checked_add(Decimal::ONE, periodic_rate, "effective annual rate growth factor")?;
    let growth = powi(base, compounding_periods, "effective annual rate growth factor")?;
    let ear = checked_sub(growth, Decimal::ONE, "effective annual rate")?;
    Ok(round(ear, Precision::BasisPoints))
}

/// Simplified APR: fees plus one period of interest, spread over the term.
pub fn annual_percentage_rate(
    total_fees: Money,
    loan_amount: Money,
    loan_term: Periods,
    interest_rate: Rate,
) -> FinCalcResult<Money> {
    let interest = checked_mul(loan_amount, interest_rate, "annual percentage rate interest")?;
    let charges = checked_add(total_fees, interest, "annual percentage rate charges")?;
    let apr = checked_div(charges, Decimal::from(loan_term), "annual percentage rate loan term")?;
    Ok(round(apr, Precision::Cents))
}

/// Geometrically linked return, compounded left to right.
pub fn time_weighted_return(returns: &[Rate]) -> FinCalcResult<Rate> {
    let mut growth = Decimal::ONE;
    for r in returns {
        let period_growth = checked_add(Decimal::ONE, *r, "time-weighted return")?;
        growth = checked_mul(growth, period_growth, "time-weighted return")?;
    }
    let linked = checked_sub(growth, Decimal::ONE, "time-weighted return")?;
    Ok(round(linked, Precision::BasisPoints))
}

/// Simplified modified duration: `price / (1 + yield) ^ years`.
pub fn modified_duration(price: Money, yield_rate: Rate, years: Periods) -> FinCalcResult<Money> {
    let discount = powi_one_plus(yield_rate, years, "modified duration discount factor")?;
    let value = checked_div(price, discount, "modified duration discount factor")?;
    Ok(round(value, Precision::Cents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compound_interest_annual() {
        let result = compound_interest(dec!(1000), dec!(0.05), 5, 1).unwrap();
        assert_eq!(result, dec!(1276.28));
    }

    #[test]
    fn test_compound_interest_monthly() {
        let result = compound_interest(dec!(1000), dec!(0.12), 2, 12).unwrap();
        assert_eq!(result, dec!(1269.73));
    }

    #[test]
    fn test_compound_interest_zero_frequency() {
        let err = compound_interest(dec!(1000), dec!(0.05), 5, 0).unwrap_err();
        assert!(matches!(err, FinCalcError::DivisionByZero { .. }));
    }

    #[test]
    fn test_annuity_values() {
        assert_eq!(future_value_of_annuity(dec!(100), dec!(0.05), 5).unwrap(), dec!(552.56));
        assert_eq!(present_value_of_annuity(dec!(100), dec!(0.05), 5).unwrap(), dec!(432.95));
    }

    #[test]
    fn test_annuity_zero_rate_fails() {
        assert!(matches!(
            future_value_of_annuity(dec!(100), Decimal::ZERO, 5),
            Err(FinCalcError::DivisionByZero { .. })
        ));
        assert!(matches!(
            present_value_of_annuity(dec!(100), Decimal::ZERO, 5),
            Err(FinCalcError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_npv_basic() {
        let cfs = vec![dec!(-1000), dec!(300), dec!(300), dec!(300), dec!(300)];
        assert_eq!(npv(&cfs, dec!(0.1)).unwrap(), dec!(-49.04));
    }

    #[test]
    fn test_npv_zero_rate() {
        let cfs = vec![dec!(-100), dec!(50), dec!(50), dec!(50)];
        assert_eq!(npv(&cfs, Decimal::ZERO).unwrap(), dec!(50));
    }

    #[test]
    fn test_npv_empty() {
        assert_eq!(npv(&[], dec!(0.1)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_npv_rate_of_minus_one() {
        let cfs = vec![dec!(-100), dec!(50)];
        // (1 + r) ^ 1 is zero
        assert!(matches!(
            npv(&cfs, dec!(-1)),
            Err(FinCalcError::DivisionByZero { .. })
        ));
        // Only the undiscounted flow: 0 ^ 0 == 1
        assert_eq!(npv(&cfs[..1], dec!(-1)).unwrap(), dec!(-100));
    }

    #[test]
    fn test_loan_amortization() {
        assert_eq!(loan_amortization(dec!(10000), dec!(0.05), 60).unwrap(), dec!(188.71));
        assert!(loan_amortization(dec!(10000), Decimal::ZERO, 60).is_err());
    }

    #[test]
    fn test_effective_annual_rate() {
        assert_eq!(effective_annual_rate(dec!(0.05), 12).unwrap(), dec!(0.0512));
        assert!(effective_annual_rate(dec!(0.05), 0).is_err());
    }

    #[test]
    fn test_annual_percentage_rate() {
        assert_eq!(annual_percentage_rate(dec!(100), dec!(10000), 12, dec!(0.05)).unwrap(), dec!(50));
        assert!(annual_percentage_rate(dec!(100), dec!(10000), 0, dec!(0.05)).is_err());
    }

    #[test]
    fn test_time_weighted_return() {
        let returns = vec![dec!(0.1), dec!(0.2), dec!(-0.1)];
        assert_eq!(time_weighted_return(&returns).unwrap(), dec!(0.1880));
        assert_eq!(time_weighted_return(&[]).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_modified_duration() {
        assert_eq!(modified_duration(dec!(1000), dec!(0.05), 5).unwrap(), dec!(783.53));
        assert_eq!(modified_duration(dec!(1000), dec!(0.05), 0).unwrap(), dec!(1000));
    }

    #[test]
    fn test_out_of_range_intermediates_are_overflow() {
        let m = Decimal::MAX;
        assert!(matches!(
            annual_percentage_rate(m, m, 1, dec!(1)),
            Err(FinCalcError::Overflow { .. })
        ));
        assert!(matches!(
            future_value_of_annuity(dec!(1), m, 1),
            Err(FinCalcError::Overflow { .. })
        ));
        assert!(matches!(
            present_value_of_annuity(dec!(1), m, 1),
            Err(FinCalcError::Overflow { .. })
        ));
        assert!(matches!(
            time_weighted_return(&[m]),
            Err(FinCalcError::Overflow { .. })
        ));
        assert!(matches!(
            compound_interest(dec!(1), m, 1, 1),
            Err(FinCalcError::Overflow { .. })
        ));
    }
}
