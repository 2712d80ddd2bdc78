use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places a formula rounds its final result to.
///
/// Every formula rounds exactly once, as its last step, using
/// round-half-to-even (banker's rounding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precision {
    /// Two places: monetary amounts, percentages and plain ratios.
    Cents,
    /// Four places: rates and returns expressed as fractions.
    BasisPoints,
}

impl Precision {
    pub const fn decimal_places(self) -> u32 {
        match self {
            Precision::Cents => 2,
            Precision::BasisPoints => 4,
        }
    }
}

/// Round `value` half-to-even at the given precision.
pub fn round(value: Decimal, precision: Precision) -> Decimal {
    value.round_dp_with_strategy(
        precision.decimal_places(),
        RoundingStrategy::MidpointNearestEven,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_midpoint_rounds_to_even() {
        assert_eq!(round(dec!(0.125), Precision::Cents), dec!(0.12));
        assert_eq!(round(dec!(0.135), Precision::Cents), dec!(0.14));
        assert_eq!(round(dec!(-0.125), Precision::Cents), dec!(-0.12));
        assert_eq!(round(dec!(0.00005), Precision::BasisPoints), dec!(0.0000));
        assert_eq!(round(dec!(0.00015), Precision::BasisPoints), dec!(0.0002));
    }

    #[test]
    fn test_non_midpoint_rounds_to_nearest() {
        assert_eq!(round(dec!(1.666666), Precision::Cents), dec!(1.67));
        assert_eq!(round(dec!(0.08142857), Precision::BasisPoints), dec!(0.0814));
    }

    #[test]
    fn test_rounding_is_idempotent() {
        let once = round(dec!(1276.2815625), Precision::Cents);
        assert_eq!(round(once, Precision::Cents), once);
    }
}
