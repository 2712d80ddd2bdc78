//! Checked arithmetic shared by every formula group.
//!
//! Integer powers are evaluated with `f64::powf` and converted back to a
//! decimal carrying 15 significant digits (round half to even).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::FinCalcError;
use crate::FinCalcResult;

/// Significant digits kept when a float power is converted back to decimal.
const FLOAT_SIGNIFICANT_DIGITS: u32 = 15;

/// Magnitudes below this are not representable at decimal scale 28.
const SMALLEST_DECIMAL: f64 = 1e-28;

/// Divide, failing with `DivisionByZero` when the denominator is exactly zero.
pub fn checked_div(numerator: Decimal, denominator: Decimal, context: &str) -> FinCalcResult<Decimal> {
    if denominator.is_zero() {
        return Err(FinCalcError::DivisionByZero {
            context: context.into(),
        });
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| overflow(context))
}

/// Multiply, failing with `Overflow` when the product leaves decimal range.
pub fn checked_mul(a: Decimal, b: Decimal, context: &str) -> FinCalcResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| overflow(context))
}

/// Add, failing with `Overflow` when the sum leaves decimal range.
pub fn checked_add(a: Decimal, b: Decimal, context: &str) -> FinCalcResult<Decimal> {
    a.checked_add(b).ok_or_else(|| overflow(context))
}

/// Subtract, failing with `Overflow` when the difference leaves decimal range.
pub fn checked_sub(a: Decimal, b: Decimal, context: &str) -> FinCalcResult<Decimal> {
    a.checked_sub(b).ok_or_else(|| overflow(context))
}

/// Raise `base` to an integer power through an `f64` round trip.
pub fn powi(base: Decimal, exponent: i32, context: &str) -> FinCalcResult<Decimal> {
    let base = base.to_f64().ok_or_else(|| overflow(context))?;
    float_to_decimal(base.powf(f64::from(exponent)), context)
}

/// Raise `1 + rate` to an integer power, forming the base in `f64`.
///
/// Differs from `powi(1 + rate, ..)` only when `1 + rate` is not exactly
/// representable as a double.
pub fn powi_one_plus(rate: Decimal, exponent: i32, context: &str) -> FinCalcResult<Decimal> {
    let rate = rate.to_f64().ok_or_else(|| overflow(context))?;
    float_to_decimal((1.0 + rate).powf(f64::from(exponent)), context)
}

/// Multiply two integer period counts into an exponent.
pub fn exponent(a: i32, b: i32, context: &str) -> FinCalcResult<i32> {
    a.checked_mul(b).ok_or_else(|| overflow(context))
}

fn float_to_decimal(value: f64, context: &str) -> FinCalcResult<Decimal> {
    if !value.is_finite() {
        return Err(overflow(context));
    }
    if value.abs() < SMALLEST_DECIMAL {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_f64_retain(value)
        .and_then(|d| {
            d.round_sf_with_strategy(FLOAT_SIGNIFICANT_DIGITS, RoundingStrategy::MidpointNearestEven)
        })
        .ok_or_else(|| overflow(context))
}

fn overflow(context: &str) -> FinCalcError {
    FinCalcError::Overflow {
        context: context.into(),
    }
}
