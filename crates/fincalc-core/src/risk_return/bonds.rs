use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::math::{checked_add, checked_div, checked_sub};
use crate::precision::{round, Precision};
use crate::types::{Money, Periods, Rate};
use crate::FinCalcResult;

/// Approximate yield to maturity.
///
/// Annual coupon plus straight-line amortization of the discount (or
/// premium), over the average of face value and price:
///
/// `(C + (F - P) / n) / ((F + P) / 2)`
///
/// Rounded to four places. Fails when `years_to_maturity` is zero or face
/// value and price sum to zero.
pub fn yield_to_maturity(
    coupon_payment: Money,
    face_value: Money,
    market_price: Money,
    years_to_maturity: Periods,
) -> FinCalcResult<Rate> {
    let discount = checked_sub(face_value, market_price, "yield to maturity: face value less price")?;
    let amortization = checked_div(
        discount,
        Decimal::from(years_to_maturity),
        "yield to maturity: years to maturity",
    )?;
    let price_sum = checked_add(face_value, market_price, "yield to maturity: face value plus price")?;
    let average_price = checked_div(price_sum, dec!(2), "yield to maturity: average price")?;
    let annual_return = checked_add(coupon_payment, amortization, "yield to maturity: annual return")?;
    let ytm = checked_div(
        annual_return,
        average_price,
        "yield to maturity: average of face value and price",
    )?;
    Ok(round(ytm, Precision::BasisPoints))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinCalcError;

    #[test]
    fn test_ytm_discount_bond() {
        assert_eq!(yield_to_maturity(dec!(50), dec!(1000), dec!(950), 10).unwrap(), dec!(0.0564));
    }

    #[test]
    fn test_ytm_large_coupon() {
        assert_eq!(yield_to_maturity(dec!(1000), dec!(1000), dec!(900), 5).unwrap(), dec!(1.0737));
    }

    #[test]
    fn test_ytm_zero_years() {
        match yield_to_maturity(dec!(50), dec!(1000), dec!(950), 0) {
            Err(FinCalcError::DivisionByZero { context }) => assert!(context.contains("years")),
            other => panic!("expected DivisionByZero, got {other:?}"),
        }
    }

    #[test]
    fn test_ytm_zero_average_price() {
        assert!(yield_to_maturity(dec!(50), dec!(1000), dec!(-1000), 5).is_err());
    }

    #[test]
    fn test_ytm_out_of_range_is_overflow() {
        let m = Decimal::MAX;
        assert!(matches!(
            yield_to_maturity(dec!(1), m, m, 1),
            Err(FinCalcError::Overflow { .. })
        ));
        assert!(matches!(
            yield_to_maturity(dec!(1), m, -m, 1),
            Err(FinCalcError::Overflow { .. })
        ));
    }
}
